pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_organization_table;
mod m20260301_000002_create_user_table;
mod m20260301_000003_create_user_organization_table;
mod m20260301_000004_create_event_table;
mod m20260301_000005_create_ticket_category_table;
mod m20260301_000006_create_tickets_reservation_table;
mod m20260301_000007_create_ticket_table;
mod m20260301_000008_create_configuration_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_organization_table::Migration),
            Box::new(m20260301_000002_create_user_table::Migration),
            Box::new(m20260301_000003_create_user_organization_table::Migration),
            Box::new(m20260301_000004_create_event_table::Migration),
            Box::new(m20260301_000005_create_ticket_category_table::Migration),
            Box::new(m20260301_000006_create_tickets_reservation_table::Migration),
            Box::new(m20260301_000007_create_ticket_table::Migration),
            Box::new(m20260301_000008_create_configuration_table::Migration),
        ]
    }
}
