//! # promptmap core
//!
//! Domain types shared by every promptmap crate: the [`Part`] model, the
//! canonical priority table, the persisted [`PartsDocument`], and the
//! [`Classifier`] trait that external semantic classifiers implement.
//!
//! This crate does no I/O. Extraction lives in `promptmap-analyzer`,
//! ordering in `promptmap-optimizer` and rendering in `promptmap-diagram`.

pub mod classifier;
pub mod document;
pub mod error;
pub mod part;

pub use classifier::{ClassifiedRecord, Classifier, TAXONOMY, records_from_json};
pub use document::PartsDocument;
pub use error::{ClassifierError, Error, Result};
pub use part::{
    DEFAULT_ORDER, Part, PartName, PartSource, UNKNOWN_LINE, UNRANKED, display_name, humanize,
};
