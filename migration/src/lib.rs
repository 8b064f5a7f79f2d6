pub use sea_orm_migration::prelude::*;

mod m20241118_000001_create_location_table;
mod m20241118_000002_create_inventory_user_table;
mod m20241118_000003_create_inventory_group_table;
mod m20241118_000004_create_accommodation_table;
mod m20241118_000005_create_localize_accommodation_table;
mod m20241118_000006_seed_property_owners_group;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241118_000001_create_location_table::Migration),
            Box::new(m20241118_000002_create_inventory_user_table::Migration),
            Box::new(m20241118_000003_create_inventory_group_table::Migration),
            Box::new(m20241118_000004_create_accommodation_table::Migration),
            Box::new(m20241118_000005_create_localize_accommodation_table::Migration),
            Box::new(m20241118_000006_seed_property_owners_group::Migration),
        ]
    }
}
