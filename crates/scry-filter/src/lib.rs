//! scry-filter: Label filter interaction core.
//!
//! A multi-select label filter is a search input with live autocomplete,
//! removable selection chips, and a numeric range sub-filter. This crate
//! owns its interaction state: a hierarchical state machine over the
//! edit/read modes, commit validation against the field's vocabulary,
//! and the synchronization glue that keeps the machine consistent with
//! the externally-owned selection store and feeds the expression builder
//! in `scry-expr`.
//!
//! Rendering, layout, and query execution live elsewhere; this crate is
//! purely in-memory state.

pub mod context;
pub mod error;
pub mod machine;
pub mod store;
pub mod sync;

pub use context::*;
pub use error::*;
pub use machine::*;
pub use store::*;
pub use sync::*;
