use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000004_create_event_table::Event,
    m20260301_000005_create_ticket_category_table::TicketCategory,
    m20260301_000006_create_tickets_reservation_table::TicketsReservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(string_uniq(Ticket::Uuid))
                    .col(integer(Ticket::EventId))
                    .col(integer(Ticket::CategoryId))
                    .col(string(Ticket::Status))
                    .col(string_null(Ticket::ReservationId))
                    .col(string_null(Ticket::FullName))
                    .col(string_null(Ticket::EmailAddress))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_event_id")
                            .from(Ticket::Table, Ticket::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_category_id")
                            .from(Ticket::Table, Ticket::CategoryId)
                            .to(TicketCategory::Table, TicketCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_reservation_id")
                            .from(Ticket::Table, Ticket::ReservationId)
                            .to(TicketsReservation::Table, TicketsReservation::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    Uuid,
    EventId,
    CategoryId,
    Status,
    ReservationId,
    FullName,
    EmailAddress,
}
