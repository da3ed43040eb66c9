use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_organization_table::Organization;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string_uniq(Event::ShortName))
                    .col(string(Event::DisplayName))
                    .col(integer(Event::OrganizationId))
                    .col(string(Event::Currency))
                    .col(integer(Event::AvailableSeats))
                    .col(timestamp_with_time_zone(Event::BeginTs))
                    .col(timestamp_with_time_zone(Event::EndTs))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_organization_id")
                            .from(Event::Table, Event::OrganizationId)
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
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    ShortName,
    DisplayName,
    OrganizationId,
    Currency,
    AvailableSeats,
    BeginTs,
    EndTs,
}
