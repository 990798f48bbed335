//! National Id Value Object
//!
//! 国民識別番号は、有権者を一意に識別するための**政府発行の番号**。
//! ログインと重複登録チェックに使用される。
//!
//! ## 不変条件
//! - 正確に12桁のASCII数字（trim後）
//! - 空白・ハイフン等の区切り文字は不許可
//!
//! ## Privacy
//! `Debug`/`Display` は末尾4桁以外をマスクする。
//! 完全な値が必要な箇所（永続化・一意性チェック）は `as_str()` を使う。

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Exact length of a national id (in digits)
pub const NATIONAL_ID_LENGTH: usize = 12;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when national id validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NationalIdError {
    /// National id is empty after trimming
    Empty,

    /// National id has the wrong number of digits
    WrongLength { length: usize, expected: usize },

    /// National id contains a non-digit character
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for NationalIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "National id cannot be empty"),
            Self::WrongLength { length, expected } => {
                write!(
                    f,
                    "National id must be exactly {expected} digits (got {length})"
                )
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "Invalid character '{char}' at position {position}. Only digits 0-9 are allowed"
                )
            }
        }
    }
}

impl std::error::Error for NationalIdError {}

// ============================================================================
// NationalId Value Object
// ============================================================================

/// Validated 12-digit national id
///
/// # Invariants
/// - Exactly NATIONAL_ID_LENGTH ASCII digits
/// - No separators, no whitespace
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NationalId(String);

impl NationalId {
    /// Create a new NationalId from raw input
    ///
    /// Trims surrounding whitespace, then validates.
    pub fn new(input: impl AsRef<str>) -> Result<Self, NationalIdError> {
        let trimmed = input.as_ref().trim();
        Self::validate(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Get the full national id string
    ///
    /// Handle with care: this is the unmasked value.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(value: &str) -> Result<Self, NationalIdError> {
        Self::new(value)
    }

    /// Masked form for logs and display (`********1234`)
    pub fn masked(&self) -> String {
        let visible = &self.0[NATIONAL_ID_LENGTH - 4..];
        format!("{}{}", "*".repeat(NATIONAL_ID_LENGTH - 4), visible)
    }

    fn validate(value: &str) -> Result<(), NationalIdError> {
        if value.is_empty() {
            return Err(NationalIdError::Empty);
        }

        let length = value.chars().count();
        if length != NATIONAL_ID_LENGTH {
            return Err(NationalIdError::WrongLength {
                length,
                expected: NATIONAL_ID_LENGTH,
            });
        }

        for (pos, ch) in value.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(NationalIdError::InvalidCharacter {
                    char: ch,
                    position: pos,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Debug for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NationalId").field(&self.masked()).finish()
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl TryFrom<String> for NationalId {
    type Error = NationalIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NationalId {
    type Error = NationalIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NationalId> for String {
    fn from(id: NationalId) -> Self {
        id.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod validation {
        use super::*;

        #[test]
        fn test_valid_twelve_digits() {
            let id = NationalId::new("123456789012").unwrap();
            assert_eq!(id.as_str(), "123456789012");
        }

        #[test]
        fn test_trims_whitespace() {
            let id = NationalId::new("  123456789012  ").unwrap();
            assert_eq!(id.as_str(), "123456789012");
        }

        #[test]
        fn test_empty_fails() {
            assert!(matches!(NationalId::new(""), Err(NationalIdError::Empty)));
        }

        #[test]
        fn test_whitespace_only_fails() {
            assert!(matches!(
                NationalId::new("   "),
                Err(NationalIdError::Empty)
            ));
        }

        #[test]
        fn test_eleven_digits_fails() {
            assert!(matches!(
                NationalId::new("12345678901"),
                Err(NationalIdError::WrongLength {
                    length: 11,
                    expected: 12
                })
            ));
        }

        #[test]
        fn test_thirteen_digits_fails() {
            assert!(matches!(
                NationalId::new("1234567890123"),
                Err(NationalIdError::WrongLength {
                    length: 13,
                    expected: 12
                })
            ));
        }

        #[test]
        fn test_letters_fail() {
            assert!(matches!(
                NationalId::new("12345678901a"),
                Err(NationalIdError::InvalidCharacter { char: 'a', position: 11 })
            ));
        }

        #[test]
        fn test_separators_fail() {
            assert!(matches!(
                NationalId::new("1234-5678-90"),
                Err(NationalIdError::InvalidCharacter { char: '-', .. })
            ));
        }

        #[test]
        fn test_internal_whitespace_fails() {
            assert!(matches!(
                NationalId::new("123456 89012"),
                Err(NationalIdError::InvalidCharacter { char: ' ', .. })
            ));
        }

        #[test]
        fn test_fullwidth_digits_fail() {
            // Full-width '１' (U+FF11) is not an ASCII digit
            assert!(matches!(
                NationalId::new("１23456789012"),
                Err(NationalIdError::InvalidCharacter { .. })
            ));
        }
    }

    mod masking {
        use super::*;

        #[test]
        fn test_masked_shows_last_four() {
            let id = NationalId::new("123456789012").unwrap();
            assert_eq!(id.masked(), "********9012");
        }

        #[test]
        fn test_debug_is_masked() {
            let id = NationalId::new("123456789012").unwrap();
            let debug = format!("{:?}", id);
            assert!(!debug.contains("12345678"));
            assert!(debug.contains("9012"));
        }

        #[test]
        fn test_display_is_masked() {
            let id = NationalId::new("123456789012").unwrap();
            assert_eq!(format!("{}", id), "********9012");
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn test_serialize() {
            let id = NationalId::new("123456789012").unwrap();
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, "\"123456789012\"");
        }

        #[test]
        fn test_deserialize() {
            let id: NationalId = serde_json::from_str("\"123456789012\"").unwrap();
            assert_eq!(id.as_str(), "123456789012");
        }

        #[test]
        fn test_deserialize_invalid() {
            let result: Result<NationalId, _> = serde_json::from_str("\"12345\"");
            assert!(result.is_err());
        }
    }
}
