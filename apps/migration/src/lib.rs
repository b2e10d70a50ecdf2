//! Schema migrations for the Quill blog database.

pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_posts_table;
mod m20250801_000002_seed_sample_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_posts_table::Migration),
            Box::new(m20250801_000002_seed_sample_posts::Migration),
        ]
    }
}
