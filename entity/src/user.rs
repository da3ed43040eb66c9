use super::sea_orm_active_enums::UserType;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub enabled: bool,
    pub user_type: UserType,
    pub valid_to: Option<DateTimeUtc>,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_organization::Entity")]
    UserOrganization,
    #[sea_orm(has_many = "super::tickets_reservation::Entity")]
    TicketsReservation,
}

impl Related<super::user_organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserOrganization.def()
    }
}

impl Related<super::tickets_reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketsReservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
