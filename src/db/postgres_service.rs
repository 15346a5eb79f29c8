use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct PostgresService {
    pub(crate) db: DatabaseConnection,
}

impl PostgresService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = Database::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { db })
    }
}
