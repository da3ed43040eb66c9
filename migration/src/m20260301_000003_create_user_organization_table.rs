use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_organization_table::Organization,
    m20260301_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserOrganization::Table)
                    .if_not_exists()
                    .col(pk_auto(UserOrganization::Id))
                    .col(integer(UserOrganization::UserId))
                    .col(integer(UserOrganization::OrganizationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_organization_user_id")
                            .from(UserOrganization::Table, UserOrganization::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_organization_organization_id")
                            .from(UserOrganization::Table, UserOrganization::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserOrganization::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserOrganization {
    Table,
    Id,
    UserId,
    OrganizationId,
}
