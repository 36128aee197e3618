//! Configuration for the inventory search CLI

use core_config::{ConfigError, FromEnv, env_or_default, env_parse, env_required_any};
use database::mongodb::MongoConfig;

const DEFAULT_DATABASE: &str = "homedepot";
const DEFAULT_APP_NAME: &str = "inventory-search";

/// Variables tried in order for the connection string
const URI_KEYS: &[&str] = &["MONGODB_URI", "MONGODB_URL", "MONGO_URL"];

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo: MongoConfig,
    /// Collection holding the inventory records
    pub collection: String,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required_any(URI_KEYS)?;
        let database = env_or_default("MONGODB_DATABASE", DEFAULT_DATABASE);

        let mongo = MongoConfig::with_database(url, database)
            .with_app_name(env_or_default("MONGODB_APP_NAME", DEFAULT_APP_NAME))
            .with_timeouts(
                env_parse(
                    "MONGODB_CONNECT_TIMEOUT_SECS",
                    MongoConfig::DEFAULT_CONNECT_TIMEOUT_SECS,
                )?,
                env_parse(
                    "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                    MongoConfig::DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
                )?,
            );

        Ok(Config {
            mongo,
            collection: env_or_default("INVENTORY_COLLECTION", domain_inventory::DEFAULT_COLLECTION),
        })
    }
}
