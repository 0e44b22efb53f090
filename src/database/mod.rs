use mongodb::bson::Document;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use std::time::Duration;

use crate::models::{Entity, News, Reminder, UserProfile};

const DEFAULT_DATABASE: &str = "newz";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> mongodb::error::Result<Self> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let db_name = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        // Test connection
        db.list_collection_names().await?;
        log::info!("Connected to MongoDB database: {}", db_name);

        let mongodb = Self { db };
        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the unique identifier index of every entity collection.
    ///
    /// Creates rely on these indexes to reject duplicate identifiers, so a
    /// failure here aborts startup.
    pub async fn ensure_indexes(&self) -> mongodb::error::Result<()> {
        log::info!("🔧 Creating database indexes...");

        self.ensure_unique_id_index::<News>().await?;
        self.ensure_unique_id_index::<Reminder>().await?;
        self.ensure_unique_id_index::<UserProfile>().await?;

        log::info!("✅ Database indexes ready");
        Ok(())
    }

    async fn ensure_unique_id_index<E: Entity>(&self) -> mongodb::error::Result<()> {
        let mut keys = Document::new();
        keys.insert(E::ID_FIELD, 1);

        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection::<Document>(E::COLLECTION)
            .create_index(index)
            .await?;
        log::info!("   ✅ Index ready: {}({}) unique", E::COLLECTION, E::ID_FIELD);
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Check if the connection is healthy
    pub async fn health_check(&self) -> mongodb::error::Result<bool> {
        self.db.list_collection_names().await?;
        Ok(true)
    }
}
