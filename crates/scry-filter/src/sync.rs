//! Synchronization between the machine, the selection store, and the
//! expression consumer.
//!
//! Flows are one-directional with explicit guards:
//! - store → machine only when the stored selection structurally differs
//!   from the machine's;
//! - machine → store only after a local selection mutation (valid commit,
//!   remove, clear).
//! Nothing else crosses the boundary, so the two owners cannot bounce
//! updates back and forth.
//!
//! Every effect batch runs in a fixed order: context mutation, selection
//! push, expression rebuild, consumer notification.

use serde::Serialize;
use tracing::debug;

use scry_expr::{build_expression, FieldType, FilterExpression, NumericRange};

use crate::context::FilterContext;
use crate::machine::{FilterEvent, SelectionStateMachine};
use crate::store::SelectionStore;

/// Snapshot handed to the expression consumer after each effect batch.
#[derive(Debug, Clone, Serialize)]
pub struct FilterUpdate {
    pub bounds: Option<NumericRange>,
    pub range: Option<NumericRange>,
    pub include_missing: bool,
    pub labels: Vec<String>,
    pub field_is_filtered: bool,
    pub expression: FilterExpression,
}

type UpdateObserver = Box<dyn FnMut(&FilterUpdate)>;

/// Glue for one mounted label-filter widget instance.
///
/// Owns the machine and the one-time bounds seeding; the selection store
/// stays outside. The embedder forwards UI events through [`handle`] and
/// external store changes through the `sync_*` methods.
///
/// [`handle`]: LabelFilter::handle
pub struct LabelFilter {
    field: String,
    field_type: FieldType,
    machine: SelectionStateMachine,
    bounds_seeded: bool,
    observer: Option<UpdateObserver>,
}

impl LabelFilter {
    /// Create the glue for one field.
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            field_type,
            machine: SelectionStateMachine::new(),
            bounds_seeded: false,
            observer: None,
        }
    }

    /// Register the expression consumer. Replaces any previous observer.
    pub fn observe(&mut self, observer: impl FnMut(&FilterUpdate) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// The field this instance filters.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The owned machine, for state queries.
    pub fn machine(&self) -> &SelectionStateMachine {
        &self.machine
    }

    /// Read-only context view for rendering.
    pub fn context(&self) -> &FilterContext {
        self.machine.context()
    }

    /// Forward a UI event to the machine, pushing the selection to the
    /// store when the transition demands it.
    pub fn handle<S: SelectionStore>(&mut self, event: FilterEvent, store: &mut S) {
        let transition = self.machine.send(event);
        if transition.push_selection {
            let selected = self.machine.context().selected.clone();
            debug!(field = %self.field, ?selected, "pushing selection to store");
            store.set_selected_labels(&self.field, selected);
        }
        self.notify(store);
    }

    /// The vocabulary changed externally: feed it to the machine and
    /// prune stored selections no longer in the vocabulary.
    pub fn sync_vocabulary<S: SelectionStore>(&mut self, classes: Vec<String>, store: &mut S) {
        self.machine.send(FilterEvent::SetClasses {
            classes: classes.clone(),
        });

        let kept: Vec<String> = store
            .selected_labels(&self.field)
            .into_iter()
            .filter(|c| classes.contains(c))
            .collect();
        store.set_selected_labels(&self.field, kept);

        // propagate the pruned selection back into the machine
        self.sync_selection(store);
        self.notify(store);
    }

    /// The stored selection changed externally: override the machine's
    /// selection, but only when the values structurally differ.
    pub fn sync_selection<S: SelectionStore>(&mut self, store: &S) {
        let stored = store.selected_labels(&self.field);
        if stored != self.machine.context().selected {
            self.machine
                .send(FilterEvent::SetSelected { selected: stored });
            self.notify(store);
        }
    }

    /// Bounds became available or changed. The first time bounds are
    /// known while the range is entirely unset, seed the range to the
    /// default window; never re-seed after that.
    pub fn sync_bounds<S: SelectionStore>(&mut self, store: &mut S) {
        if !self.bounds_seeded {
            if let Some(bounds) = store.bounds(&self.field) {
                if store.range(&self.field).is_none() {
                    let seed = NumericRange::new(bounds.lo.max(0.0), bounds.hi.min(1.0));
                    debug!(field = %self.field, ?seed, "seeding range from bounds");
                    store.set_range(&self.field, seed);
                }
                self.bounds_seeded = true;
            }
        }
        self.notify(store);
    }

    /// Build the filter expression from the store's current parameters.
    pub fn expression<S: SelectionStore>(&self, store: &S) -> FilterExpression {
        build_expression(
            &self.field,
            self.field_type,
            &store.selected_labels(&self.field),
            store.range(&self.field),
            store.include_missing(&self.field),
        )
    }

    fn notify<S: SelectionStore>(&mut self, store: &S) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        let labels = store.selected_labels(&self.field);
        let range = store.range(&self.field);
        let include_missing = store.include_missing(&self.field);
        let expression = build_expression(&self.field, self.field_type, &labels, range, include_missing);
        let update = FilterUpdate {
            bounds: store.bounds(&self.field),
            range,
            include_missing,
            labels,
            field_is_filtered: store.field_is_filtered(&self.field),
            expression,
        };
        observer(&update);
    }
}
