//! The ISO 26262-9 decomposition table and the queries built on it.
//!
//! A requirement of a given ASIL may be split into two independently
//! implemented sub-requirements. The permitted splits are a closed table,
//! hard-coded here rather than derived from level ranks.

use std::{cmp::Reverse, fmt};

use serde::Serialize;

use super::level::{InvalidLevelError, Level, normalize};

/// An unordered pair of sub-requirement levels.
///
/// The pair is always stored in canonical order: the first element has a rank
/// greater than or equal to the second. Use [`Decomposition::new`] to build a
/// pair from levels given in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Decomposition {
    a: Level,
    b: Level,
}

impl Decomposition {
    /// Creates the canonical pair for two levels, regardless of their order.
    #[must_use]
    pub fn new(first: Level, second: Level) -> Self {
        let mut pair = [first, second];
        pair.sort_by_key(|level| Reverse(level.rank()));
        let [a, b] = pair;
        Self { a, b }
    }

    /// The higher-ranked element, labelled "(a)".
    #[must_use]
    pub const fn a(self) -> Level {
        self.a
    }

    /// The lower-ranked element, labelled "(b)".
    #[must_use]
    pub const fn b(self) -> Level {
        self.b
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ASIL {}(a) + ASIL {}(b)", self.a, self.b)
    }
}

const fn pair(a: Level, b: Level) -> Decomposition {
    Decomposition { a, b }
}

static D_ROWS: [Decomposition; 3] = [
    pair(Level::D, Level::QM),
    pair(Level::C, Level::A),
    pair(Level::B, Level::B),
];
static C_ROWS: [Decomposition; 2] = [pair(Level::C, Level::QM), pair(Level::B, Level::A)];
static B_ROWS: [Decomposition; 2] = [pair(Level::B, Level::QM), pair(Level::A, Level::A)];
static A_ROWS: [Decomposition; 1] = [pair(Level::A, Level::QM)];

/// Returns the valid decompositions of `level`.
///
/// Rows are in ISO 26262-9 presentation order: the pair whose first element
/// has the highest rank comes first. `QM` has no decompositions.
///
/// # Examples
///
/// ```
/// use asil::{Level, list_decompositions};
///
/// let rows = list_decompositions(Level::B);
/// assert_eq!(rows.len(), 2);
/// assert_eq!((rows[1].a(), rows[1].b()), (Level::A, Level::A));
/// assert!(list_decompositions(Level::QM).is_empty());
/// ```
#[must_use]
pub const fn list_decompositions(level: Level) -> &'static [Decomposition] {
    match level {
        Level::D => &D_ROWS,
        Level::C => &C_ROWS,
        Level::B => &B_ROWS,
        Level::A => &A_ROWS,
        Level::QM => &[],
    }
}

/// Checks whether `part_a` and `part_b` form a valid decomposition of
/// `original`.
///
/// The check is symmetric in `part_a` and `part_b`. It is always `false` for
/// `QM`, which has no decompositions. It says nothing about whether the two
/// parts are actually implemented independently.
#[must_use]
pub fn is_valid_decomposition(original: Level, part_a: Level, part_b: Level) -> bool {
    let candidate = Decomposition::new(part_a, part_b);
    let valid = list_decompositions(original).contains(&candidate);
    tracing::debug!(%original, %candidate, valid, "checked decomposition");
    valid
}

/// Renders a human-readable description of the valid decompositions of
/// `level`.
#[must_use]
pub fn describe(level: Level) -> String {
    let rows = list_decompositions(level);
    if rows.is_empty() {
        return format!("ASIL {level}: No decomposition possible (already at lowest level).");
    }

    let header = format!("ASIL {level} valid decompositions (ISO 26262-9):");
    let lines = rows
        .iter()
        .enumerate()
        .map(|(index, row)| format!("  {}. ASIL {level} → {row}", index + 1));
    std::iter::once(header)
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses `token` and returns its valid decompositions.
///
/// # Errors
///
/// Returns [`InvalidLevelError`] if `token` does not name a level.
pub fn list_decompositions_str(token: &str) -> Result<&'static [Decomposition], InvalidLevelError> {
    normalize(token).map(list_decompositions)
}

/// Parses all three tokens and checks the proposed decomposition.
///
/// # Errors
///
/// Returns [`InvalidLevelError`] for the first token that does not name a
/// level.
pub fn is_valid_decomposition_str(
    original: &str,
    part_a: &str,
    part_b: &str,
) -> Result<bool, InvalidLevelError> {
    Ok(is_valid_decomposition(
        normalize(original)?,
        normalize(part_a)?,
        normalize(part_b)?,
    ))
}
