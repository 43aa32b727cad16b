// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything a fetch can fail with.
///
/// Transport failures (`Http`, `Transport`) are passed through as reported by
/// the [`Transport`](crate::core::net::Transport); the parsers never
/// reinterpret them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid material identifier: {0}")]
    InvalidIdentifier(String),

    #[error("invalid density: {0}")]
    InvalidDensity(String),

    #[error("malformed row {row:?}: cannot read {token:?} as a number")]
    MalformedRow { row: String, token: String },

    #[error("no published density found for {0}")]
    DensityNotFound(String),

    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// True for a 404 from the server, which is how unknown materials show up.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Http { status: 404, .. })
    }

    pub(crate) fn malformed(row: &str, token: &str) -> Self {
        Error::MalformedRow { row: s!(row), token: s!(token) }
    }
}
