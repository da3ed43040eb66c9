//! Organization factory for creating test organization entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test organizations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let organization = OrganizationFactory::new(&db)
///     .name("Acme Events")
///     .build()
///     .await?;
/// ```
pub struct OrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::organization::Model,
}

impl<'a> OrganizationFactory<'a> {
    /// Creates a new OrganizationFactory with default values from fixture.
    ///
    /// The name is suffixed with a unique counter value since organization names are unique.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let mut entity = fixture::organization::entity();
        entity.name = format!("Organization {}", id);

        Self { db, entity }
    }

    /// Sets the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the organization entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::organization::Model)` - Created organization entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::organization::Model, DbErr> {
        entity::organization::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            email: ActiveValue::Set(self.entity.email),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::organization::Model, DbErr> {
    OrganizationFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_multiple_unique_organizations() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Organization)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_organization(db).await?;
        let second = create_organization(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.name, second.name);

        Ok(())
    }
}
