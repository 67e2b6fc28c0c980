//! ISO 26262-9 ASIL decomposition rules
//!
//! A safety requirement of a given ASIL may be split into two independently
//! implemented sub-requirements. This crate encodes the table of permitted
//! splits and answers two questions: which splits are valid for a level, and
//! whether a proposed split is valid.
//!
//! ```
//! use asil::{Level, is_valid_decomposition};
//!
//! assert!(is_valid_decomposition(Level::D, Level::A, Level::C));
//! assert!(!is_valid_decomposition(Level::D, Level::A, Level::A));
//! ```

pub mod domain;
pub use domain::{
    Config, Decomposition, InvalidLevelError, Level, OutputFormat, describe,
    is_valid_decomposition, is_valid_decomposition_str, list_decompositions,
    list_decompositions_str, normalize,
};
