//! Human-readable random schema names.
//!
//! Composes names like `happy_turing` from a fixed pool of adjectives and a
//! fixed pool of scientist and engineer surnames, avoiding a caller-supplied
//! set of names already handed out. Callers own that set: insert each
//! returned name before the next call to keep a batch unique, and persist it
//! themselves if uniqueness must survive a restart.

pub mod error;
pub mod generator;
pub mod words;

pub use error::{NameError, Result};
pub use generator::{generate_name, generate_name_with, IndexSource, RngIndexSource, SEPARATOR};
pub use words::{ADJECTIVES, SURNAMES};
