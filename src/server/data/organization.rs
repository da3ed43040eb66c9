//! Organization data repository.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::organization::{CreateOrganizationParam, Organization};

pub struct OrganizationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganizationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new organization.
    ///
    /// # Returns
    /// - `Ok(Organization)` - The created organization
    /// - `Err(DbErr)` - Database error, including a duplicate name
    pub async fn create(&self, param: CreateOrganizationParam) -> Result<Organization, DbErr> {
        let entity = entity::organization::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            email: ActiveValue::Set(param.email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Organization::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Organization>, DbErr> {
        let entity = entity::prelude::Organization::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Organization::from_entity))
    }
}
