use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketCategory::Id))
                    .col(integer(TicketCategory::EventId))
                    .col(string(TicketCategory::Name))
                    .col(string(TicketCategory::AccessType))
                    .col(integer(TicketCategory::MaxTickets))
                    .col(timestamp_with_time_zone(TicketCategory::Inception))
                    .col(timestamp_with_time_zone(TicketCategory::Expiration))
                    .col(integer(TicketCategory::PriceCts))
                    .col(boolean(TicketCategory::Hidden))
                    .col(boolean(TicketCategory::AccessRestricted))
                    .col(string_null(TicketCategory::Code))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_category_event_id")
                            .from(TicketCategory::Table, TicketCategory::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketCategory {
    Table,
    Id,
    EventId,
    Name,
    AccessType,
    MaxTickets,
    Inception,
    Expiration,
    PriceCts,
    Hidden,
    AccessRestricted,
    Code,
}
