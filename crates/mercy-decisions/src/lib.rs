//! # mercy-decisions
//!
//! Decision normalization and ranking engine.
//!
//! Pipeline: raw rows → coerce → label → rank → `DecisionBatch`.
//! Every stage is a pure function; nothing here fails. Malformed input
//! degrades to documented defaults instead.
//!
//! The `source` module sits on the collaborator side of that boundary:
//! it picks the explain or base view, applies the demo fallback policy,
//! and reports access problems as hints rather than errors.

pub mod coercion;
pub mod engine;
pub mod evidence;
pub mod labels;
pub mod mode;
pub mod ranking;
pub mod source;

pub use coercion::{coerce, coerce_with, CoercedRow};
pub use engine::{DecisionBatch, DecisionEngine};
pub use evidence::{build_timeline, coerce_evidence};
pub use labels::{derive_severity_label, derive_severity_label_with, resolve_severity_label};
pub use mode::{detect_batch_mode, detect_row_mode};
pub use ranking::{compare_decisions, rank};
pub use source::{
    load_decisions, load_detail, AccessHint, DecisionDetail, LoadOutcome, StaticSource,
};
