//! Validated registry key paths.

use crate::error::{RegistryError, Result};
use std::fmt;

pub const SEPARATOR: char = '\\';

/// Longest key name the registry accepts for a single path segment, in
/// UTF-16 code units.
pub const MAX_SEGMENT_LEN: usize = 255;

/// Backslash-separated path to a key below a root hive,
/// e.g. `Software\YourGame\Settings`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(String);

impl KeyPath {
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty path, a leading separator, an
    /// empty segment, a segment longer than 255 UTF-16 code units, or a NUL.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(RegistryError::InvalidInput("key path is empty".to_string()));
        }
        if path.contains('\0') {
            return Err(RegistryError::InvalidInput(format!(
                "key path contains NUL: {:?}",
                path
            )));
        }
        if path.starts_with(SEPARATOR) {
            return Err(RegistryError::InvalidInput(format!(
                "key path must be relative to the hive: {}",
                path
            )));
        }

        for segment in path.split(SEPARATOR) {
            if segment.is_empty() {
                return Err(RegistryError::InvalidInput(format!(
                    "key path has an empty segment: {}",
                    path
                )));
            }
            if segment.encode_utf16().count() > MAX_SEGMENT_LEN {
                return Err(RegistryError::InvalidInput(format!(
                    "key name longer than {} UTF-16 code units: {}",
                    MAX_SEGMENT_LEN, segment
                )));
            }
        }

        Ok(Self(path.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Every path from the first segment down to this one, inclusive.
    pub fn ancestors(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut current = String::new();
        for segment in self.segments() {
            if !current.is_empty() {
                current.push(SEPARATOR);
            }
            current.push_str(segment);
            out.push(current.clone());
        }
        out
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Value names may be empty (the key's default value) but cannot hold a NUL.
pub fn validate_value_name(name: &str) -> Result<()> {
    if name.contains('\0') {
        return Err(RegistryError::InvalidInput(format!(
            "value name contains NUL: {:?}",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_nested_path() {
        let path = KeyPath::parse(r"Software\YourGame\Settings").unwrap();
        assert_eq!(path.as_str(), r"Software\YourGame\Settings");
        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            vec!["Software", "YourGame", "Settings"]
        );
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        for bad in ["", r"\Software", r"Software\\Game", "Software\\", "Soft\0ware"] {
            let err = KeyPath::parse(bad).unwrap_err();
            assert!(
                matches!(err, RegistryError::InvalidInput(_)),
                "{:?} -> {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_parse_segment_length_limit() {
        let ok = "a".repeat(MAX_SEGMENT_LEN);
        assert!(KeyPath::parse(&format!(r"Software\{}", ok)).is_ok());

        let too_long = "a".repeat(MAX_SEGMENT_LEN + 1);
        assert!(KeyPath::parse(&format!(r"Software\{}", too_long)).is_err());
    }

    #[test]
    fn test_segment_length_counts_utf16_units() {
        // Each emoji is one char but two UTF-16 code units.
        let fits = "\u{1F600}".repeat(MAX_SEGMENT_LEN / 2);
        assert!(KeyPath::parse(&format!(r"Software\{}", fits)).is_ok());

        let too_long = "\u{1F600}".repeat(MAX_SEGMENT_LEN / 2 + 1);
        assert_eq!(too_long.chars().count(), 128);
        assert!(matches!(
            KeyPath::parse(&format!(r"Software\{}", too_long)),
            Err(RegistryError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_ancestors() {
        let path = KeyPath::parse(r"Software\Game\Settings").unwrap();
        assert_eq!(
            path.ancestors(),
            vec![
                "Software".to_string(),
                r"Software\Game".to_string(),
                r"Software\Game\Settings".to_string(),
            ]
        );
    }

    #[test]
    fn test_value_name_rules() {
        assert!(validate_value_name("").is_ok());
        assert!(validate_value_name("Player Name").is_ok());
        assert!(validate_value_name("Player\0Name").is_err());
    }
}
