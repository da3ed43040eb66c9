use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User, m20260301_000004_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketsReservation::Table)
                    .if_not_exists()
                    .col(string(TicketsReservation::Id).primary_key())
                    .col(integer(TicketsReservation::EventId))
                    .col(integer_null(TicketsReservation::UserId))
                    .col(string(TicketsReservation::Status))
                    .col(timestamp_with_time_zone(TicketsReservation::Validity))
                    .col(string_null(TicketsReservation::FirstName))
                    .col(string_null(TicketsReservation::LastName))
                    .col(string_null(TicketsReservation::EmailAddress))
                    .col(timestamp_with_time_zone_null(
                        TicketsReservation::ConfirmationTs,
                    ))
                    .col(integer(TicketsReservation::TotalPriceCts))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_reservation_event_id")
                            .from(TicketsReservation::Table, TicketsReservation::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_reservation_user_id")
                            .from(TicketsReservation::Table, TicketsReservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketsReservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketsReservation {
    Table,
    Id,
    EventId,
    UserId,
    Status,
    Validity,
    FirstName,
    LastName,
    EmailAddress,
    ConfirmationTs,
    TotalPriceCts,
}
