//! # tdt-timeline
//!
//! Topics forwarded by the consumer are grouped into nodes. The newest node
//! takes everything until it expires; after that, a topic joins the most recent
//! node that is recent enough and similar enough, or starts a node of its own.

pub mod node;
pub mod timeline;

pub use node::{Node, Topic};
pub use timeline::Timeline;
