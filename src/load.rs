//! Purpose: Load and decode JSON files into caller-typed values.
//! Exports: `load`, `load_blocking`.
//! Role: Public loader surface; composes the read primitives with the JSON seam.
//! Invariants: Exactly one trace event per call, emitted before the read.
//! Invariants: Read failures and parse failures keep distinct error kinds.
//! Notes: `T` is a caller-asserted shape; decoding checks syntax, not intent.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::error::{Error, ErrorKind};
use crate::json;
use crate::read;

/// Trace records keep only the trailing characters of a path: enough for the
/// filename and immediate parent directories without unbounded log lines.
const PATH_TAIL_CHARS: usize = 32;

/// Read `path` and decode its contents as JSON, suspending at the read step.
///
/// The parse step runs synchronously once content is available. Failures keep
/// the kind of the stage that produced them: a missing or unreadable file is
/// never reported as a parse failure, and malformed content is never reported
/// as an I/O failure.
pub async fn load<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    trace_call("load", path, false);
    let raw = read::read(path).await?;
    finish_load(path, &raw)
}

/// Blocking form of [`load`]: occupies the calling thread for the full read
/// and parse, returning the decoded value directly.
pub fn load_blocking<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    trace_call("load_blocking", path, true);
    let raw = read::read_blocking(path)?;
    finish_load(path, &raw)
}

// Shared tail of both modes; keeps the two entry points byte-for-byte
// equivalent past the read.
fn finish_load<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T, Error> {
    json::parse::from_str(raw).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message("file content is not valid JSON")
            .with_path(path)
            .with_source(err)
    })
}

fn trace_call(method: &str, path: &Path, blocking: bool) {
    let displayed = path.display().to_string();
    debug!(method, path = %path_tail(&displayed), blocking);
}

// Fixed truncation policy, measured in characters and cut on a char
// boundary so multibyte paths cannot split a code point.
fn path_tail(path: &str) -> &str {
    let chars = path.chars().count();
    if chars <= PATH_TAIL_CHARS {
        return path;
    }
    let cut = path
        .char_indices()
        .nth(chars - PATH_TAIL_CHARS)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    &path[cut..]
}
