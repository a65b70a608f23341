//! Externally-owned filter parameter state.
//!
//! The application owns the canonical selection and numeric filter
//! parameters for every field; the interaction core only reads snapshots
//! and issues writes. [`MemoryStore`] is a plain in-memory implementation
//! for tests and embedders without a reactive state layer.

use std::collections::HashMap;

use scry_expr::NumericRange;

/// Read/write access to per-field filter parameters.
///
/// The core writes only the selected labels (after local user actions)
/// and the range (one-time bounds seeding). Bounds and the
/// include-missing flag are written by other collaborators and read here.
pub trait SelectionStore {
    /// Committed label selection for a field.
    fn selected_labels(&self, field: &str) -> Vec<String>;

    /// Replace the committed label selection for a field.
    fn set_selected_labels(&mut self, field: &str, labels: Vec<String>);

    /// Numeric filter range, unset until seeded or set by the user.
    fn range(&self, field: &str) -> Option<NumericRange>;

    /// Replace the numeric filter range for a field.
    fn set_range(&mut self, field: &str, range: NumericRange);

    /// Observed numeric bounds, unset until the field has been scanned.
    fn bounds(&self, field: &str) -> Option<NumericRange>;

    /// Whether samples missing the numeric value are included.
    fn include_missing(&self, field: &str) -> bool;

    /// Whether any filter is currently active for the field.
    fn field_is_filtered(&self, field: &str) -> bool;
}

/// Per-field parameters held by [`MemoryStore`].
#[derive(Debug, Clone, Default)]
struct FieldParams {
    selected: Vec<String>,
    range: Option<NumericRange>,
    bounds: Option<NumericRange>,
    include_missing: bool,
}

/// In-memory [`SelectionStore`], keyed by field name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    fields: HashMap<String, FieldParams>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn params_mut(&mut self, field: &str) -> &mut FieldParams {
        self.fields.entry(field.to_string()).or_default()
    }

    /// Record the observed bounds for a field (collaborator-side write).
    pub fn set_bounds(&mut self, field: &str, bounds: NumericRange) {
        self.params_mut(field).bounds = Some(bounds);
    }

    /// Set the include-missing flag for a field (collaborator-side write).
    pub fn set_include_missing(&mut self, field: &str, include: bool) {
        self.params_mut(field).include_missing = include;
    }
}

impl SelectionStore for MemoryStore {
    fn selected_labels(&self, field: &str) -> Vec<String> {
        self.fields
            .get(field)
            .map(|p| p.selected.clone())
            .unwrap_or_default()
    }

    fn set_selected_labels(&mut self, field: &str, labels: Vec<String>) {
        self.params_mut(field).selected = labels;
    }

    fn range(&self, field: &str) -> Option<NumericRange> {
        self.fields.get(field).and_then(|p| p.range)
    }

    fn set_range(&mut self, field: &str, range: NumericRange) {
        self.params_mut(field).range = Some(range);
    }

    fn bounds(&self, field: &str) -> Option<NumericRange> {
        self.fields.get(field).and_then(|p| p.bounds)
    }

    fn include_missing(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|p| p.include_missing)
    }

    fn field_is_filtered(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|p| {
            !p.selected.is_empty() || p.range.is_some() || p.include_missing
        })
    }
}
