use std::path::PathBuf;

pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid platform '{0}': expected <os>/<arch>")]
    InvalidPlatform(String),
    #[error("unknown output format '{0}' (use 'text', 'json' or 'yaml')")]
    UnknownFormat(String),
    #[error("platform '{0}' is listed more than once in the catalog")]
    DuplicatePlatform(String),
    #[error("catalog {} lists no platforms", .0.display())]
    EmptyCatalog(PathBuf),
}
