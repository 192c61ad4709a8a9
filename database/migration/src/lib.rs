mod system;

pub use sea_orm_migration::MigratorTrait;
pub use system::Migrator;
