use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection};

#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        Self::connect(ConnectOptions::new(url.to_owned())).await
    }

    pub async fn connect(options: ConnectOptions) -> anyhow::Result<Self> {
        let url = options.get_url().to_owned();
        let connection = sea_orm::Database::connect(options)
            .await
            .with_context(|| format!("Could not connect to database {url}"))?;
        Ok(Database { connection })
    }

    /// Applies every pending migration.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        Migrator::up(&self.connection, None).await.context("Could not migrate database")
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}
