use crate::config::MongoConfig;
use crate::error::AppError;
use crate::models::Goal;
use crate::services::GoalStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client as MongoClient, Collection, Database,
};
use serde::{Deserialize, Serialize};

const GOALS_COLLECTION: &str = "goals";

/// Wire shape of a goal document; the driver assigns nothing here, the id is
/// minted on insert.
#[derive(Debug, Serialize, Deserialize)]
struct GoalDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    text: String,
}

impl From<GoalDocument> for Goal {
    fn from(doc: GoalDocument) -> Self {
        Goal {
            id: doc.id.to_hex(),
            text: doc.text,
        }
    }
}

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Connect and verify the server is reachable. Credentials are kept out
    /// of the logs.
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        tracing::info!(host = %config.host, database = %config.database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(config.connection_uri())
            .await
            .map_err(|e| {
                tracing::error!("Failed to create MongoDB client for {}: {}", config.host, e);
                AppError::from(e)
            })?;
        let db = client.database(&config.database);

        let store = Self { client, db };
        store.ping().await?;
        tracing::info!(database = %config.database, "Successfully connected to MongoDB database");
        Ok(store)
    }

    fn goals(&self) -> Collection<GoalDocument> {
        self.db.collection(GOALS_COLLECTION)
    }
}

#[async_trait]
impl GoalStore for MongoDb {
    async fn list(&self) -> Result<Vec<Goal>, AppError> {
        let mut cursor = self.goals().find(None, None).await?;
        let mut goals = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            goals.push(doc.into());
        }
        Ok(goals)
    }

    async fn insert(&self, text: &str) -> Result<Goal, AppError> {
        let doc = GoalDocument {
            id: ObjectId::new(),
            text: text.to_string(),
        };
        self.goals().insert_one(&doc, None).await?;
        Ok(doc.into())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        // A malformed id is a driver-level failure, not a silent miss.
        let oid = ObjectId::parse_str(id).map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("invalid goal id {:?}: {}", id, e))
        })?;
        // Matches zero or one documents; both count as success.
        self.goals().delete_one(doc! { "_id": oid }, None).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB ping failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
