//! crates/logging/src/flags.rs
//! Severity flag bitmask and the well-known routing presets.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use diagnostic::Severity;

/// A set of independently enabled severities.
///
/// Severities combine as bit flags so callers can enable arbitrary
/// combinations; the named presets cover the conventional modes.
///
/// # Examples
///
/// ```
/// use logging::SeverityFlags;
///
/// let flags = SeverityFlags::ERROR | SeverityFlags::INFO;
/// assert_eq!(flags, SeverityFlags::TERSE);
/// assert!(flags.contains(SeverityFlags::ERROR));
/// assert!(!flags.contains(SeverityFlags::DEBUG));
/// ```
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeverityFlags(u32);

impl SeverityFlags {
    /// No severity enabled.
    pub const NONE: Self = Self(0);
    /// The error severity.
    pub const ERROR: Self = Self(1);
    /// The warning severity.
    pub const WARNING: Self = Self(1 << 1);
    /// The info severity.
    pub const INFO: Self = Self(1 << 2);
    /// The verbose severity.
    pub const VERBOSE: Self = Self(1 << 3);
    /// The debug severity.
    pub const DEBUG: Self = Self(1 << 4);

    /// Every severity enabled.
    pub const ALL: Self = Self(
        Self::ERROR.0 | Self::WARNING.0 | Self::INFO.0 | Self::VERBOSE.0 | Self::DEBUG.0,
    );
    /// Everything except debug output.
    pub const VERBOSE_AND_UP: Self =
        Self(Self::ERROR.0 | Self::WARNING.0 | Self::INFO.0 | Self::VERBOSE.0);
    /// Errors and informational output only.
    pub const TERSE: Self = Self(Self::ERROR.0 | Self::INFO.0);

    /// Returns the raw bit pattern.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Builds a set from a raw bit pattern, ignoring unknown bits.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Reports whether no severity is enabled.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Reports whether every flag in `other` is present in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Adds the given flags to the set.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Removes the given flags from the set.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl From<Severity> for SeverityFlags {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::ERROR,
            Severity::Warning => Self::WARNING,
            Severity::Info => Self::INFO,
            Severity::Verbose => Self::VERBOSE,
            Severity::Debug => Self::DEBUG,
        }
    }
}

impl BitOr for SeverityFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for SeverityFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl BitAnd for SeverityFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for SeverityFlags {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl fmt::Debug for SeverityFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SeverityFlags(")?;
        if self.is_empty() {
            f.write_str("NONE")?;
        } else {
            let mut first = true;
            for severity in Severity::ALL {
                if self.contains(Self::from(severity)) {
                    if !first {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", severity.as_str().to_uppercase())?;
                    first = false;
                }
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent_bits() {
        let flags = [
            SeverityFlags::ERROR,
            SeverityFlags::WARNING,
            SeverityFlags::INFO,
            SeverityFlags::VERBOSE,
            SeverityFlags::DEBUG,
        ];
        for (i, a) in flags.iter().enumerate() {
            assert_eq!(a.bits().count_ones(), 1);
            for (j, b) in flags.iter().enumerate() {
                if i != j {
                    assert!((*a & *b).is_empty(), "{a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn presets_cover_the_conventional_modes() {
        assert_eq!(SeverityFlags::NONE.bits(), 0);
        assert_eq!(
            SeverityFlags::ALL,
            SeverityFlags::ERROR
                | SeverityFlags::WARNING
                | SeverityFlags::INFO
                | SeverityFlags::VERBOSE
                | SeverityFlags::DEBUG
        );
        assert!(!SeverityFlags::VERBOSE_AND_UP.contains(SeverityFlags::DEBUG));
        assert!(SeverityFlags::VERBOSE_AND_UP.contains(SeverityFlags::VERBOSE));
        assert_eq!(
            SeverityFlags::TERSE,
            SeverityFlags::ERROR | SeverityFlags::INFO
        );
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(SeverityFlags::default(), SeverityFlags::NONE);
        assert!(SeverityFlags::default().is_empty());
    }

    #[test]
    fn insert_and_remove_update_membership() {
        let mut flags = SeverityFlags::NONE;
        flags.insert(SeverityFlags::WARNING);
        assert!(flags.contains(SeverityFlags::WARNING));
        flags.insert(SeverityFlags::DEBUG);
        flags.remove(SeverityFlags::WARNING);
        assert!(!flags.contains(SeverityFlags::WARNING));
        assert!(flags.contains(SeverityFlags::DEBUG));
    }

    #[test]
    fn removing_an_absent_flag_is_a_no_op() {
        let mut flags = SeverityFlags::TERSE;
        flags.remove(SeverityFlags::DEBUG);
        assert_eq!(flags, SeverityFlags::TERSE);
    }

    #[test]
    fn from_bits_truncate_drops_unknown_bits() {
        let flags = SeverityFlags::from_bits_truncate(u32::MAX);
        assert_eq!(flags, SeverityFlags::ALL);
    }

    #[test]
    fn from_severity_selects_the_matching_flag() {
        assert_eq!(
            SeverityFlags::from(Severity::Error),
            SeverityFlags::ERROR
        );
        assert_eq!(
            SeverityFlags::from(Severity::Debug),
            SeverityFlags::DEBUG
        );
    }

    #[test]
    fn debug_format_lists_enabled_flags() {
        assert_eq!(format!("{:?}", SeverityFlags::NONE), "SeverityFlags(NONE)");
        assert_eq!(
            format!("{:?}", SeverityFlags::TERSE),
            "SeverityFlags(ERROR | INFO)"
        );
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn flags_serde_round_trip() {
            let flags = SeverityFlags::VERBOSE_AND_UP;
            let json = serde_json::to_string(&flags).expect("serialize");
            let decoded: SeverityFlags = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(flags, decoded);
        }
    }
}
