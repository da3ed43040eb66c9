//! Organization fixtures for creating in-memory test data.

use entity::organization;

/// Default test organization name.
pub const DEFAULT_NAME: &str = "Test Organization";

/// Default test organization description.
pub const DEFAULT_DESCRIPTION: &str = "Organization used by tests";

/// Default test organization contact email.
pub const DEFAULT_EMAIL: &str = "organization@example.org";

/// Creates an organization entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Organization"`
/// - description: `"Organization used by tests"`
/// - email: `"organization@example.org"`
pub fn entity() -> organization::Model {
    organization::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        email: DEFAULT_EMAIL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_entity_with_defaults() {
        let organization = entity();

        assert_eq!(organization.id, 1);
        assert_eq!(organization.name, DEFAULT_NAME);
        assert_eq!(organization.email, DEFAULT_EMAIL);
    }
}
