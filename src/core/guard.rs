// membership checks at dynamic boundaries
use crate::core::map::EnumLike;
use crate::core::types::KeyError;

impl EnumLike {
    //fast probe for keys that arrive as runtime strings
    pub fn is_valid_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Validate a key against the mapping, handing it back unchanged on
    /// success so callers can thread it through.
    pub fn require<'a>(&self, key: &'a str) -> Result<&'a str, KeyError> {
        if self.is_valid_key(key) {
            Ok(key)
        } else {
            Err(KeyError::UnknownKey {
                key: key.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::map::EnumLike;
    use crate::core::types::KeyError;

    #[test]
    fn is_valid_key_probes_the_key_set() {
        let m = EnumLike::from_keys(["pending", "completed", "failed"]);

        assert!(m.is_valid_key("pending"));
        assert!(!m.is_valid_key("invalid"));
        assert!(!m.is_valid_key(""));
    }

    #[test]
    fn require_hands_back_a_member_unchanged() {
        let m = EnumLike::from_keys(["pending", "completed"]);
        assert_eq!(m.require("completed").unwrap(), "completed");
    }

    #[test]
    fn require_rejects_a_non_member_with_the_offending_key() {
        let m = EnumLike::from_keys(["pending"]);

        let err = m.require("invalid").unwrap_err();

        match err {
            KeyError::UnknownKey { key } => assert_eq!(key, "invalid"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn the_empty_mapping_accepts_nothing() {
        let m = EnumLike::new();

        assert!(!m.is_valid_key("anything"));
        assert!(m.require("anything").is_err());
    }
}
