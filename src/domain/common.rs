//! Core domain types - pure data structures with no dependencies.

/// Rights requested when opening a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Open an existing key for querying values. Never creates the key.
    Read,
    /// Open the key for setting values, creating it as a persistent key
    /// when it does not exist yet.
    Write,
}

impl Access {
    pub fn creates_missing(self) -> bool {
        matches!(self, Self::Write)
    }
}

/// Joins a key path and a value name the way registry tools print them.
pub fn value_location(key_path: &str, value_name: &str) -> String {
    if value_name.is_empty() {
        format!("{}\\(Default)", key_path)
    } else {
        format!("{}\\{}", key_path, value_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_write_creates() {
        assert!(Access::Write.creates_missing());
        assert!(!Access::Read.creates_missing());
    }

    #[test]
    fn test_value_location() {
        assert_eq!(
            value_location(r"Software\Game", "PlayerName"),
            r"Software\Game\PlayerName"
        );
        assert_eq!(
            value_location(r"Software\Game", ""),
            r"Software\Game\(Default)"
        );
    }
}
