//! Request attribution seam for the `i` and `e` fields

mod fixed;
mod noop;
mod traits;

pub use fixed::StaticRequestContext;
pub use noop::NoRequestContext;
pub use traits::{RequestContext, SharedContext};
