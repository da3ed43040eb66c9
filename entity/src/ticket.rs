use super::sea_orm_active_enums::TicketStatus;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uuid: String,
    pub event_id: i32,
    pub category_id: i32,
    pub status: TicketStatus,
    pub reservation_id: Option<String>,
    pub full_name: Option<String>,
    pub email_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::ticket_category::Entity",
        from = "Column::CategoryId",
        to = "super::ticket_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TicketCategory,
    #[sea_orm(
        belongs_to = "super::tickets_reservation::Entity",
        from = "Column::ReservationId",
        to = "super::tickets_reservation::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    TicketsReservation,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::ticket_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketCategory.def()
    }
}

impl Related<super::tickets_reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketsReservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
