use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An Automotive Safety Integrity Level.
///
/// Levels are totally ordered by their severity rank, from [`Level::QM`]
/// (rank 0) up to [`Level::D`] (rank 4).
///
/// The canonical textual form is the uppercase token (`QM`, `A`, `B`, `C`,
/// `D`). Parsing is case-insensitive and ignores surrounding whitespace.
///
/// # Examples
///
/// ```
/// use asil::Level;
///
/// let level: Level = " d ".parse().unwrap();
/// assert_eq!(level, Level::D);
/// assert_eq!(level.rank(), 4);
/// assert!(Level::C < Level::D);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Level {
    /// Quality management. No safety integrity requirement.
    QM,
    /// ASIL A, the lowest safety integrity level.
    A,
    /// ASIL B.
    B,
    /// ASIL C.
    C,
    /// ASIL D, the highest safety integrity level.
    D,
}

impl Level {
    /// All levels in ascending rank order.
    pub const ALL: [Self; 5] = [Self::QM, Self::A, Self::B, Self::C, Self::D];

    /// Returns the severity rank of the level (`QM` = 0 … `D` = 4).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::QM => 0,
            Self::A => 1,
            Self::B => 2,
            Self::C => 3,
            Self::D => 4,
        }
    }

    /// Returns the canonical uppercase token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QM => "QM",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.as_str()
    }
}

/// Error returned when a token does not name an ASIL level.
///
/// Holds the offending token after trimming and case normalization.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Unknown ASIL level '{0}'. Valid levels: QM, A, B, C, D")]
pub struct InvalidLevelError(String);

impl InvalidLevelError {
    /// Returns the normalized token that failed to match.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }
}

/// Normalizes a free-form token into a [`Level`].
///
/// Surrounding whitespace is trimmed and the token is uppercased before it is
/// matched against the five level names.
///
/// # Errors
///
/// Returns [`InvalidLevelError`] if the normalized token is not one of `QM`,
/// `A`, `B`, `C` or `D`.
pub fn normalize(token: &str) -> Result<Level, InvalidLevelError> {
    let normalized = token.trim().to_uppercase();
    let level = Level::ALL
        .into_iter()
        .find(|level| level.as_str() == normalized)
        .ok_or(InvalidLevelError(normalized))?;
    tracing::trace!(token, %level, "normalized ASIL level");
    Ok(level)
}

impl FromStr for Level {
    type Err = InvalidLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl TryFrom<&str> for Level {
    type Error = InvalidLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        normalize(value)
    }
}

impl TryFrom<String> for Level {
    type Error = InvalidLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        normalize(&value)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("QM", Level::QM; "qm")]
    #[test_case("A", Level::A; "a")]
    #[test_case("B", Level::B; "b")]
    #[test_case("C", Level::C; "c")]
    #[test_case("D", Level::D; "d")]
    #[test_case("d", Level::D; "lowercase")]
    #[test_case("qm", Level::QM; "lowercase qm")]
    #[test_case("Qm", Level::QM; "mixed case")]
    #[test_case("  c\t", Level::C; "surrounding whitespace")]
    fn normalize_valid(token: &str, expected: Level) {
        assert_eq!(normalize(token).unwrap(), expected);
    }

    #[test_case("X"; "unknown letter")]
    #[test_case(""; "empty")]
    #[test_case("  "; "whitespace only")]
    #[test_case("E"; "beyond d")]
    #[test_case("ASIL D"; "prefixed")]
    #[test_case("Q M"; "inner whitespace")]
    fn normalize_invalid(token: &str) {
        assert!(normalize(token).is_err());
    }

    #[test]
    fn error_reports_normalized_token() {
        let error = normalize("  x ").unwrap_err();
        assert_eq!(error.token(), "X");
    }

    #[test]
    fn error_lists_every_level() {
        let message = normalize("X").unwrap_err().to_string();
        for level in Level::ALL {
            assert!(message.contains(level.as_str()), "missing {level} in {message}");
        }
        assert_eq!(message, "Unknown ASIL level 'X'. Valid levels: QM, A, B, C, D");
    }

    #[test]
    fn ranks_are_unique_and_ascending() {
        let ranks: Vec<u8> = Level::ALL.into_iter().map(Level::rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn ordering_follows_rank() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(Level::QM.to_string(), "QM");
        assert_eq!(Level::D.to_string(), "D");
    }

    #[test]
    fn parse_roundtrips_display() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn serde_uses_canonical_token() {
        assert_eq!(serde_json::to_string(&Level::QM).unwrap(), "\"QM\"");
        assert_eq!(serde_json::from_str::<Level>("\"b\"").unwrap(), Level::B);
        assert!(serde_json::from_str::<Level>("\"Z\"").is_err());
    }
}
