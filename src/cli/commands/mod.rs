mod catalog;
mod resolve;

pub(crate) use catalog::cmd_catalog;
pub use resolve::{build_filter, cmd_resolve, ResolveOptions};
