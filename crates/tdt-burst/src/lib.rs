//! # tdt-burst
//!
//! Decides which terms are breaking in a window given its nutrition and the
//! nutrition of the windows before it.
//!
//! - [`Cataldi`]: quadratic nutrition growth, cut at the critical drop.
//! - [`FilteredCataldi`]: Cataldi plus a skew-normal significance filter.
//! - [`Zhao`]: stream volume growth over nested windows.
//! - [`Eld`]: exponentially decayed nutrition change.

pub mod cataldi;
pub mod detector;
pub mod eld;
pub mod filtered_cataldi;
pub mod skew_normal;
pub mod zhao;

pub use cataldi::Cataldi;
pub use detector::BurstDetector;
pub use eld::Eld;
pub use filtered_cataldi::FilteredCataldi;
pub use skew_normal::SkewNormal;
pub use zhao::{BurstWindow, Zhao};
