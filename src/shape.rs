//! Purpose: Shape aliases and contracts for JSON-shaped data.
//! Exports: `JsonValue`, `JsonObject`, `JsonList`, `Nullable`, `Dictionary`, `Primitive`.
//! Role: Vocabulary types callers use to declare expected JSON shapes.
//! Invariants: Nothing here owns behavior; the types only constrain signatures.
//!
//! The deep-transformation contracts map onto Rust like this. A deeply
//! read-only view of a structure is any shared reference `&T`: immutability
//! is transitive through references, so no dedicated type operator exists or
//! is needed. A deeply partial shape is spelled by making each field
//! [`Nullable`] (with `#[serde(default)]` where an absent key should decode
//! as `None`), and the deeply required counterpart is the same struct with
//! plain fields, which serde enforces at decode time by rejecting missing
//! keys. Optional-key extraction is thus readable off a struct declaration:
//! the `Nullable` fields are the optional keys, the rest are required.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structural JSON value: string, number, boolean, null, list, or mapping.
pub type JsonValue = serde_json::Value;

/// Key/value mapping form of a JSON document.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Ordered list form of a JSON document.
pub type JsonList = Vec<JsonValue>;

/// A value that is optionally null; JSON `null` decodes as `None`.
pub type Nullable<T> = Option<T>;

/// Homogeneous string-keyed mapping with deterministic iteration order.
/// JSON object keys are always text on the wire, so numeric-keyed data
/// travels through its string spelling.
pub type Dictionary<V> = BTreeMap<String, V>;

/// The JSON scalar universe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    /// Explicit null marker.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar; JSON has one number type for integers and floats.
    Number(serde_json::Number),
    /// UTF-8 string scalar.
    String(String),
}

impl Primitive {
    pub fn is_null(&self) -> bool {
        matches!(self, Primitive::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::{Dictionary, Nullable, Primitive};

    #[test]
    fn primitive_covers_every_json_scalar() {
        let cases = [
            ("null", Primitive::Null),
            ("true", Primitive::Bool(true)),
            ("7", Primitive::Number(7.into())),
            (r#""seven""#, Primitive::String("seven".into())),
        ];

        for (input, expected) in cases {
            let decoded: Primitive = serde_json::from_str(input).expect("scalar");
            assert_eq!(decoded, expected);
        }
    }

    #[test]
    fn primitive_rejects_composite_values() {
        assert!(serde_json::from_str::<Primitive>("[1,2]").is_err());
        assert!(serde_json::from_str::<Primitive>(r#"{"a":1}"#).is_err());
    }

    #[test]
    fn nullable_decodes_null_as_none() {
        let none: Nullable<u32> = serde_json::from_str("null").expect("null");
        assert_eq!(none, None);
        let some: Nullable<u32> = serde_json::from_str("3").expect("number");
        assert_eq!(some, Some(3));
    }

    #[test]
    fn dictionary_iterates_in_key_order() {
        let dict: Dictionary<u64> = serde_json::from_str(r#"{"b":2,"a":1,"c":3}"#).expect("dict");
        let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }
}
