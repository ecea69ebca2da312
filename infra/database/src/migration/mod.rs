//! Schema migrations applied by [`crate::DatabaseBuilder::init`].

pub use sea_orm_migration::prelude::*;

mod m0001_create_roster;

pub use m0001_create_roster::{HeroPowers, Heroes, Powers};

/// Ordered list of every migration shipped with the workspace.
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m0001_create_roster::Migration)]
    }
}
