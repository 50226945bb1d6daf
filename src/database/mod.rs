use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database, IndexModel};
use std::error::Error;
use std::time::Duration;

pub const USERS: &str = "users";
pub const CLASSES: &str = "classes";
pub const INSTRUCTORS: &str = "instructor";
pub const SELECTED_ITEMS: &str = "selectedItems";
pub const PAYMENTS: &str = "payments";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));
        client_options.app_name = Some("summercamp-service".to_string());

        let client = Client::with_options(client_options)?;
        let mongodb = Self::from_client(client, db_name);

        mongodb.ping().await?;
        log::info!("Pinged your deployment. You successfully connected to MongoDB!");

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Wraps an existing client without any network round trip.
    pub fn from_client(client: Client, db_name: &str) -> Self {
        let db = client.database(db_name);
        Self { client, db }
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// Lookup indexes only; email uniqueness stays an application-level check.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        log::info!("Creating database indexes...");

        let indexes = [
            (USERS, doc! { "email": 1 }),
            (CLASSES, doc! { "email": 1 }),
            (SELECTED_ITEMS, doc! { "email": 1 }),
        ];

        for (collection, keys) in indexes {
            let label = format!("{}({:?})", collection, keys.keys().collect::<Vec<_>>());
            let index = IndexModel::builder().keys(keys).build();

            match self.collection::<Document>(collection).create_index(index).await {
                Ok(_) => log::info!("   Index ready: {}", label),
                Err(e) => log::debug!("   Index not created for {}: {}", label, e),
            }
        }

        log::info!("Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    #[cfg(test)]
    pub fn database(&self) -> &Database {
        &self.db
    }
}
