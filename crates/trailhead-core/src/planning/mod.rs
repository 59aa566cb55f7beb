//! Credit accounting and recommendation rules.
//!
//! Everything in this module is a pure function over already-loaded records:
//! no I/O, no logging, no shared state. The [`crate::planner`] facade loads the
//! catalog and student records and feeds them through these functions.
//!
//! - [`join`]: resolve identifiers against the catalog
//! - [`completion`]: credits completed and courses not taken
//! - [`recommendation`]: successor courses for each active course
//! - [`selection`]: plan selection accumulation
//!
//! Identifiers that match no catalog entry are dropped rather than reported as
//! errors. Callers that care can compare input and output lengths, or use
//! [`join::join_taken_courses`], which keeps the unresolved identifiers.

pub mod completion;
pub mod join;
pub mod recommendation;
pub mod selection;

pub use completion::{compute_completion, courses_not_taken};
pub use join::{join_taken_courses, resolve_in_catalog_order, resolve_in_given_order};
pub use recommendation::{active_courses, recommend};
pub use selection::accumulate;
