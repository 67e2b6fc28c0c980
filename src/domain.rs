//! Domain models for ASIL decomposition.
//!
//! This module contains the ASIL level type, the ISO 26262-9 decomposition
//! table with its queries, and the front-end configuration.

/// ASIL levels and input normalization.
pub mod level;
pub use level::{InvalidLevelError, Level, normalize};

/// The decomposition table and the queries built on it.
pub mod decomposition;
pub use decomposition::{
    Decomposition, describe, is_valid_decomposition, is_valid_decomposition_str,
    list_decompositions, list_decompositions_str,
};

/// Front-end configuration.
pub mod config;
pub use config::{Config, OutputFormat};
