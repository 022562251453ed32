pub mod cli;
pub mod colors;
pub mod config;
pub mod error;
pub mod filter;
pub mod platform;
pub mod resolver;
#[cfg(test)]
pub mod tests;

pub use filter::{FilterList, FlagValue, OsArchList};
pub use platform::{default_catalog, Platform};
pub use resolver::PlatformFilter;
