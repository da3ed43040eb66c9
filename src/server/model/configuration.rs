//! System configuration entries.

/// Configuration keys read by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationKey {
    /// Enables sign-in of customers through the public OpenID login.
    OpenIdPublicEnabled,
}

impl ConfigurationKey {
    /// Name of the key as stored in the `configuration` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenIdPublicEnabled => "OPENID_PUBLIC_ENABLED",
        }
    }
}

/// Stored configuration entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub key: String,
    pub value: String,
    pub description: String,
}

impl Configuration {
    /// Converts an entity model to a configuration domain model at the repository boundary.
    pub fn from_entity(entity: entity::configuration::Model) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
            description: entity.description,
        }
    }

    /// Interprets the value as a flag. Only `"true"` (case-insensitive) enables it.
    pub fn is_true(&self) -> bool {
        self.value.trim().eq_ignore_ascii_case("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str) -> Configuration {
        Configuration {
            key: ConfigurationKey::OpenIdPublicEnabled.as_str().to_string(),
            value: value.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn parses_flag_values() {
        assert!(entry("true").is_true());
        assert!(entry("TRUE").is_true());
        assert!(!entry("false").is_true());
        assert!(!entry("1").is_true());
        assert!(!entry("").is_true());
    }
}
