//! The selection state machine.
//!
//! A hierarchical machine with three top-level states. `Editing` carries
//! two parallel regions (input focus and result-list hover) that evolve
//! independently; neither guards the other, so their events may arrive in
//! any order.
//!
//! Commits validate against the full vocabulary, never against the
//! filtered result list: a value must match a vocabulary entry exactly.
//! A failed commit is a recoverable state, not an error return.

use tracing::{debug, trace};
use uuid::Uuid;

use crate::context::{normalize_selection, FilterContext};
use crate::error::ValidationError;

/// Focus region of the search input while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    Focused,
    Unfocused,
}

/// Hover region of the result list while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsHover {
    Hovering,
    #[default]
    NotHovering,
}

/// Top-level machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// Bootstrap state before the vocabulary is known
    #[default]
    Init,
    /// Idle display state
    Reading,
    /// Active editing, with its two parallel regions
    Editing {
        input: InputFocus,
        results: ResultsHover,
    },
}

/// An event fed into the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    /// Begin editing (from `Reading` only)
    Edit,
    /// Leave editing and return to `Reading`
    Blur,
    /// The search input text changed
    Change { value: String },
    /// Confirm the typed value as a selection
    Commit { value: String },
    /// Drop the whole selection
    Clear,
    /// Drop one selected value
    Remove { value: String },
    /// Replace the vocabulary (external update)
    SetClasses { classes: Vec<String> },
    /// Replace the selection (external override, not validated)
    SetSelected { selected: Vec<String> },
    /// Set the selection-inversion flag
    SetInvert { invert: bool },
    /// The search input gained focus
    FocusInput,
    /// The search input lost focus
    UnfocusInput,
    /// The pointer entered the result list
    MouseenterResults,
    /// The pointer left the result list
    MouseleaveResults,
}

/// What the surrounding glue must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The committed selection changed through a local user action
    /// (valid commit, remove, or clear) and must be pushed to the
    /// external selection store. External overrides never set this,
    /// which is what prevents store/machine feedback loops.
    pub push_selection: bool,
}

/// Event-driven owner of [`FilterContext`].
///
/// Single-threaded and non-blocking: every `send` runs to completion and
/// performs no I/O.
#[derive(Debug, Default)]
pub struct SelectionStateMachine {
    state: FilterState,
    context: FilterContext,
}

impl SelectionStateMachine {
    /// Create a machine in its bootstrap state with an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current top-level state.
    pub fn state(&self) -> FilterState {
        self.state
    }

    /// Read-only view of the context for rendering.
    pub fn context(&self) -> &FilterContext {
        &self.context
    }

    pub fn is_reading(&self) -> bool {
        self.state == FilterState::Reading
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, FilterState::Editing { .. })
    }

    /// Whether the search input holds focus. False outside editing.
    pub fn is_input_focused(&self) -> bool {
        matches!(
            self.state,
            FilterState::Editing {
                input: InputFocus::Focused,
                ..
            }
        )
    }

    /// Whether the pointer is over the result list. False outside
    /// editing. Embedders use this to suppress blur-on-outside-click
    /// while the user is picking a result.
    pub fn is_hovering_results(&self) -> bool {
        matches!(
            self.state,
            FilterState::Editing {
                results: ResultsHover::Hovering,
                ..
            }
        )
    }

    /// Apply one event. Events that do not apply in the current state
    /// are ignored without effect.
    pub fn send(&mut self, event: FilterEvent) -> Transition {
        trace!(?event, state = ?self.state, "filter event");
        let mut push_selection = false;

        match event {
            FilterEvent::Edit => {
                if self.state == FilterState::Reading {
                    self.enter_editing();
                }
            }
            FilterEvent::Blur => {
                if self.is_editing() {
                    self.state = FilterState::Reading;
                }
            }
            FilterEvent::Change { value } => {
                if self.is_editing() {
                    self.context.input_value = value;
                    self.context.refresh_results();
                }
            }
            FilterEvent::Commit { value } => {
                if self.is_editing() {
                    push_selection = self.commit(value);
                }
            }
            FilterEvent::Clear => {
                self.context.selected.clear();
                push_selection = true;
            }
            FilterEvent::Remove { value } => {
                self.context.selected.retain(|s| *s != value);
                push_selection = true;
            }
            FilterEvent::SetClasses { classes } => {
                self.context.vocabulary = classes;
                self.context.refresh_results();
                self.state = FilterState::Reading;
            }
            FilterEvent::SetSelected { selected } => {
                self.context.selected = normalize_selection(selected);
            }
            FilterEvent::SetInvert { invert } => {
                self.context.invert = invert;
            }
            FilterEvent::FocusInput => self.set_input_focus(InputFocus::Focused),
            FilterEvent::UnfocusInput => self.set_input_focus(InputFocus::Unfocused),
            FilterEvent::MouseenterResults => self.set_results_hover(ResultsHover::Hovering),
            FilterEvent::MouseleaveResults => self.set_results_hover(ResultsHover::NotHovering),
        }

        Transition { push_selection }
    }

    /// Returns true when the commit was valid.
    fn commit(&mut self, value: String) -> bool {
        if self.context.vocabulary.iter().any(|c| *c == value) {
            let mut selected = std::mem::take(&mut self.context.selected);
            selected.push(value);
            self.context.selected = normalize_selection(selected);
            self.context.input_value.clear();
            self.context.refresh_results();
            self.context.valid = true;
            true
        } else {
            debug!(%value, "commit rejected: not in vocabulary");
            self.context.error = Some(ValidationError::unknown_label(&value));
            self.context.error_id = Some(Uuid::new_v4());
            self.context.valid = false;
            false
        }
    }

    fn enter_editing(&mut self) {
        self.context.current_result = None;
        self.context.error = None;
        self.context.error_id = None;
        self.state = FilterState::Editing {
            input: InputFocus::default(),
            results: ResultsHover::default(),
        };
    }

    fn set_input_focus(&mut self, focus: InputFocus) {
        if let FilterState::Editing { input, .. } = &mut self.state {
            *input = focus;
        }
    }

    fn set_results_hover(&mut self, hover: ResultsHover) {
        if let FilterState::Editing { results, .. } = &mut self.state {
            *results = hover;
        }
    }
}
