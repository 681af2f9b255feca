use thiserror::Error;

/// Errors that can occur while loading the bundled fixtures
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to parse {fixture} fixture: {source}")]
    Parse {
        fixture: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
