//! Organization domain model.

/// Tenant owning events and linked to its organizer users.
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub email: String,
}

impl Organization {
    /// Converts an entity model to an organization domain model at the repository boundary.
    pub fn from_entity(entity: entity::organization::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            email: entity.email,
        }
    }
}

/// Parameters for creating an organization.
#[derive(Debug, Clone)]
pub struct CreateOrganizationParam {
    /// Unique name of the organization.
    pub name: String,
    pub description: String,
    /// Contact address of the organization.
    pub email: String,
}
