use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;

/// Location of the style reference, relative to the working directory.
pub const DEFAULT_PATH: &str = "upstream/src/reference/v8.json";

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the whole file at `path` and parses it as a JSON document.
pub fn load(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let path = path.as_ref();

    let buf = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = buf.len(), "read document");

    serde_json::from_slice(&buf).map_err(|source| LoadError::Parse {
        path: path.to_owned(),
        source,
    })
}
