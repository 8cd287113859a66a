use std::fmt;

/// BCP-47-style language tag such as `hi-IN` or `en`. Shape is validated at
/// construction so an unrecognized tag fails before any external call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Result<Self, String> {
        let tag = tag.into();
        let mut parts = tag.split('-');

        let primary = parts.next().unwrap_or_default();
        if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Invalid language tag: {}", tag));
        }
        for part in parts {
            if part.is_empty()
                || part.len() > 8
                || !part.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(format!("Invalid language tag: {}", tag));
            }
        }

        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary subtag: `hi-IN` -> `hi`. Some collaborators take only the
    /// primary subtag while others want the full tag.
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
