use std::path::PathBuf;

/// All errors that can occur while loading the club and event catalog.
///
/// Lookups and derivations never fail: a missing entity is `None` and a
/// dangling club reference resolves to an unknown organizer.
#[derive(thiserror::Error, Debug)]
pub enum EventraError {
    /// A data file could not be read from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A collection was not valid JSON or did not match the record schema.
    #[error("malformed {collection} data: {source}")]
    Json {
        collection: &'static str,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, EventraError>;
