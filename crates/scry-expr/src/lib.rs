//! scry-expr: Declarative filter-expression documents.
//!
//! A filter expression is a predicate tree over a single field path,
//! wrapped in a stage descriptor that names the server-side filter stage
//! to apply. Expressions are values: they are built from current filter
//! parameters, serialized, and handed to the query engine. Nothing here
//! executes them.

pub mod ast;
pub mod builder;
pub mod stage;

pub use ast::*;
pub use builder::*;
pub use stage::*;
