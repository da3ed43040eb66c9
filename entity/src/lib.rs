pub mod prelude;

pub mod configuration;
pub mod event;
pub mod organization;
pub mod sea_orm_active_enums;
pub mod ticket;
pub mod ticket_category;
pub mod tickets_reservation;
pub mod user;
pub mod user_organization;
