pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_member_table;
mod m20240501_000002_create_theme_table;
mod m20240501_000003_create_time_slot_table;
mod m20240501_000004_create_reservation_table;
mod m20240501_000005_create_waiting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_member_table::Migration),
            Box::new(m20240501_000002_create_theme_table::Migration),
            Box::new(m20240501_000003_create_time_slot_table::Migration),
            Box::new(m20240501_000004_create_reservation_table::Migration),
            Box::new(m20240501_000005_create_waiting_table::Migration),
        ]
    }
}
