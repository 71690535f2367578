pub use sea_orm_migration::prelude::*;

mod m20250110_000001_create_room_table;
mod m20250110_000002_create_client_table;
mod m20250110_000003_create_reservation_table;
mod m20250110_000004_create_invoice_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_room_table::Migration),
            Box::new(m20250110_000002_create_client_table::Migration),
            Box::new(m20250110_000003_create_reservation_table::Migration),
            Box::new(m20250110_000004_create_invoice_table::Migration),
        ]
    }
}
