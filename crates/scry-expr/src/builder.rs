//! Building filter expressions from current filter parameters.

use serde::{Deserialize, Serialize};

use crate::ast::{FieldRef, Predicate};
use crate::stage::{FieldType, FilterStage};

/// An inclusive numeric window `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub lo: f64,
    pub hi: f64,
}

impl NumericRange {
    /// Create a range from its inclusive endpoints.
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Whether a value lies within the range, endpoints included.
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

/// A complete filter-expression document for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterExpression {
    /// The filter stage to apply
    pub stage: FilterStage,

    /// The predicate tree, absent when nothing constrains the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Predicate>,
}

impl FilterExpression {
    /// Whether the expression constrains anything.
    pub fn is_empty(&self) -> bool {
        self.predicate.is_none()
    }
}

/// Build the filter expression for a field from its current parameters.
///
/// A range produces `and[field >= lo, field <= hi]`; `include_missing`
/// wraps it (or stands alone) in a disjunction with `field == null`.
/// With neither, the predicate is absent.
///
/// Selected labels are not encoded in the predicate: the selection store
/// carries them and the query engine applies label membership separately.
pub fn build_expression(
    field: &str,
    field_type: FieldType,
    _labels: &[String],
    range: Option<NumericRange>,
    include_missing: bool,
) -> FilterExpression {
    let field = FieldRef::new(field);

    let range_clause = range.map(|r| {
        Predicate::and(vec![
            Predicate::field_ge(field.clone(), r.lo),
            Predicate::field_le(field.clone(), r.hi),
        ])
    });

    let predicate = if include_missing {
        let missing = Predicate::field_is_null(field);
        Some(match range_clause {
            Some(clause) => Predicate::or(vec![clause, missing]),
            None => Predicate::or(vec![missing]),
        })
    } else {
        range_clause
    };

    FilterExpression {
        stage: field_type.stage(),
        predicate,
    }
}
