use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// Invalid runtime configuration, caught before any worker spawns.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error from the report sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
