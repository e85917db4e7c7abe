//! Purpose: File read primitives backing the typed JSON loader.
//! Exports: `read_blocking`, `read`.
//! Role: Isolate filesystem access and I/O failure classification.
//! Invariants: Paths are opaque; no normalization or validation happens here.
//! Invariants: The underlying `io::Error` is attached as source unaltered.

use std::path::Path;

use crate::core::error::{read_kind, Error};

pub fn read_blocking(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|err| {
        Error::new(read_kind(&err))
            .with_message("failed to read file")
            .with_path(path)
            .with_source(err)
    })
}

pub async fn read(path: &Path) -> Result<String, Error> {
    tokio::fs::read_to_string(path).await.map_err(|err| {
        Error::new(read_kind(&err))
            .with_message("failed to read file")
            .with_path(path)
            .with_source(err)
    })
}
