//! # tdt-consumer
//!
//! The control loop of the engine. Posts arrive on a shared [`Queue`]; the
//! [`Consumer`] turns them into documents, keeps the per-window nutrition and
//! per-second volume, and when a window closes runs burst detection and
//! clustering and forwards new topics to the timeline. A [`Split`] fans one
//! queue out to several, e.g. one consumer per language.

pub mod checkpoint;
pub mod consumer;
pub mod handle;
pub mod post;
pub mod queue;
pub mod split;

pub use checkpoint::{Admission, Checkpoints, ClosedWindow};
pub use consumer::{Consumer, ConsumerReport};
pub use handle::{ConsumerHandle, ConsumerState};
pub use post::Post;
pub use queue::Queue;
pub use split::{Split, SplitReport};
