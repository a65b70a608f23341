//! Predicate tree for filter expressions.
//!
//! The wire format is the query engine's document grammar: operator nodes
//! keyed by lowercase name with array payloads, e.g.
//! `{"and": [{"gte": ["$confidence", 0.0]}, {"lte": ["$confidence", 1.0]}]}`.
//! Field references are strings carrying a `$` prefix to distinguish them
//! from string literals.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A reference to a field path, serialized with a `$` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef(String);

impl FieldRef {
    /// Create a field reference from an unprefixed path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The unprefixed field path.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl Serialize for FieldRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("${}", self.0))
    }
}

impl<'de> Deserialize<'de> for FieldRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.strip_prefix('$') {
            Some(path) => Ok(FieldRef(path.to_string())),
            None => Err(de::Error::custom(format!(
                "field reference missing '$' prefix: {s}"
            ))),
        }
    }
}

/// An operand of a comparison node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// A field reference (`"$path"`)
    Field(FieldRef),
    /// A numeric literal
    Number(f64),
    /// The null literal, matching missing values
    Null,
}

/// A node in the predicate tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Predicate {
    /// Conjunction of clauses
    And(Vec<Predicate>),

    /// Disjunction of clauses
    Or(Vec<Predicate>),

    /// Greater-than-or-equal comparison
    Gte(Operand, Operand),

    /// Less-than-or-equal comparison
    Lte(Operand, Operand),

    /// Equality comparison
    Eq(Operand, Operand),
}

impl Predicate {
    /// Create a conjunction
    pub fn and(clauses: Vec<Predicate>) -> Self {
        Predicate::And(clauses)
    }

    /// Create a disjunction
    pub fn or(clauses: Vec<Predicate>) -> Self {
        Predicate::Or(clauses)
    }

    /// Create a `field >= value` comparison
    pub fn field_ge(field: FieldRef, value: f64) -> Self {
        Predicate::Gte(Operand::Field(field), Operand::Number(value))
    }

    /// Create a `field <= value` comparison
    pub fn field_le(field: FieldRef, value: f64) -> Self {
        Predicate::Lte(Operand::Field(field), Operand::Number(value))
    }

    /// Create a `field == null` comparison, matching missing values
    pub fn field_is_null(field: FieldRef) -> Self {
        Predicate::Eq(Operand::Field(field), Operand::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_ref_serializes_with_prefix() {
        let value = serde_json::to_value(FieldRef::new("confidence")).unwrap();
        assert_eq!(value, json!("$confidence"));
    }

    #[test]
    fn field_ref_rejects_unprefixed_string() {
        let result: Result<FieldRef, _> = serde_json::from_value(json!("confidence"));
        assert!(result.is_err());
    }

    #[test]
    fn field_ref_roundtrip() {
        let field: FieldRef = serde_json::from_value(json!("$predictions.confidence")).unwrap();
        assert_eq!(field.path(), "predictions.confidence");
        assert_eq!(field.to_string(), "$predictions.confidence");
    }

    #[test]
    fn comparison_wire_shape() {
        let node = Predicate::field_ge(FieldRef::new("confidence"), 0.5);
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"gte": ["$confidence", 0.5]})
        );
    }

    #[test]
    fn null_equality_wire_shape() {
        let node = Predicate::field_is_null(FieldRef::new("confidence"));
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"eq": ["$confidence", null]})
        );
    }

    #[test]
    fn nested_tree_wire_shape() {
        let field = FieldRef::new("confidence");
        let node = Predicate::or(vec![
            Predicate::and(vec![
                Predicate::field_ge(field.clone(), 0.0),
                Predicate::field_le(field.clone(), 1.0),
            ]),
            Predicate::field_is_null(field),
        ]);
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"or": [
                {"and": [
                    {"gte": ["$confidence", 0.0]},
                    {"lte": ["$confidence", 1.0]},
                ]},
                {"eq": ["$confidence", null]},
            ]})
        );
    }
}
