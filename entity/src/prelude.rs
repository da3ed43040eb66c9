pub use super::configuration::Entity as Configuration;
pub use super::event::Entity as Event;
pub use super::organization::Entity as Organization;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_category::Entity as TicketCategory;
pub use super::tickets_reservation::Entity as TicketsReservation;
pub use super::user::Entity as User;
pub use super::user_organization::Entity as UserOrganization;
