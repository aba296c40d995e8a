/// Errors that can occur when creating validated slot identifiers.
#[derive(Debug, thiserror::Error)]
pub enum SlotNameError {
    /// The input was empty or contained only whitespace
    #[error("slot name cannot be empty")]
    Empty,
    /// The input exceeded the maximum permitted length
    #[error("slot name exceeds maximum length of {max} characters", max = SlotName::MAX_LEN)]
    TooLong,
    /// The input contained a character outside the permitted set
    #[error("slot name '{0}' contains invalid characters (only lowercase ASCII alphanumeric and '-' allowed)")]
    InvalidCharacters(String),
    /// The input did not start with a lowercase ASCII letter
    #[error("slot name '{0}' must start with a lowercase ASCII letter")]
    InvalidStart(String),
}

/// A validated slot identifier.
///
/// Slot names identify insertion points within a card template. They are
/// constrained to a conservative character set so they can be embedded
/// directly in markup attributes without escaping: lowercase ASCII
/// alphanumerics and `-`, starting with a letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotName(String);

impl SlotName {
    /// Maximum permitted length of a slot name, in bytes.
    pub const MAX_LEN: usize = 64;

    /// Creates a new `SlotName` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace before
    /// validation.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(SlotName)` if the trimmed input is a valid identifier,
    /// or a `SlotNameError` describing the first violated rule.
    pub fn new(input: impl AsRef<str>) -> Result<Self, SlotNameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SlotNameError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(SlotNameError::TooLong);
        }
        if !trimmed
            .bytes()
            .next()
            .is_some_and(|b| b.is_ascii_lowercase())
        {
            return Err(SlotNameError::InvalidStart(trimmed.to_owned()));
        }
        let ok = trimmed
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'-'));
        if !ok {
            return Err(SlotNameError::InvalidCharacters(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SlotName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SlotName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for SlotName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SlotName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SlotName::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_names() {
        assert!(SlotName::new("title").is_ok());
        assert!(SlotName::new("nested-content").is_ok());
        assert!(SlotName::new("a").is_ok());
        assert!(SlotName::new("badge2").is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let name = SlotName::new("  value  ").unwrap();
        assert_eq!(name.as_str(), "value");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(matches!(SlotName::new(""), Err(SlotNameError::Empty)));
        assert!(matches!(SlotName::new("   "), Err(SlotNameError::Empty)));
    }

    #[test]
    fn rejects_too_long() {
        let long = "a".repeat(SlotName::MAX_LEN + 1);
        assert!(matches!(SlotName::new(long), Err(SlotNameError::TooLong)));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(matches!(
            SlotName::new("Title"),
            Err(SlotNameError::InvalidStart(_))
        ));
        assert!(matches!(
            SlotName::new("nested_content"),
            Err(SlotNameError::InvalidCharacters(_))
        ));
        assert!(matches!(
            SlotName::new("bad name"),
            Err(SlotNameError::InvalidCharacters(_))
        ));
        assert!(matches!(
            SlotName::new("1value"),
            Err(SlotNameError::InvalidStart(_))
        ));
    }

    #[test]
    fn serde_round_trip() {
        let name = SlotName::new("doctor").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"doctor\"");
        let back: SlotName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn serde_rejects_invalid() {
        let result: Result<SlotName, _> = serde_json::from_str("\"Not Valid\"");
        assert!(result.is_err());
    }
}
