//! Purpose: Provide the internal runtime JSON decode entrypoints.
//! Exports: `from_str`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Decoding performs no shape validation beyond what `T` demands.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}
