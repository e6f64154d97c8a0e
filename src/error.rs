//! Errors surfaced while loading, analysing and drawing a peer graph.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed peers file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A neighbour list references an ip that no record declares.
    #[error("peer {0} is listed as a neighbour but has no record")]
    UnknownPeer(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("drawing failed: {0}")]
    Render(String),

    #[error("display window failed: {0}")]
    Window(#[from] minifb::Error),
}
