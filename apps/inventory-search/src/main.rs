//! Inventory Search
//!
//! Seeds a MongoDB collection with the store inventory, generates sentence
//! embeddings for every item description and answers free-text queries with
//! Atlas Vector Search.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use database::mongodb::{Client, connect_from_config};
use domain_inventory::{InventoryService, MongoInventoryRepository};
use domain_vector::{
    DEFAULT_INDEX_NAME, DEFAULT_LIMIT, DEFAULT_NUM_CANDIDATES, DistanceMetric, EmbeddingModel,
    SearchOptions,
};
use eyre::{Result, WrapErr};
use tracing::info;

mod commands;
mod config;

use commands::Service;
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "inventory-search")]
#[command(version, about = "Seed, embed and semantically search a MongoDB inventory catalog")]
struct Cli {
    /// Sentence-embedding model used to embed descriptions and queries.
    ///
    /// Legacy keys load the shipped model of the same dimension:
    /// distilbert as mpnet, roberta as bge-large, msmarco as bge-base.
    #[arg(short, long, global = true, value_enum, default_value_t = EmbeddingModel::MiniLm)]
    model: EmbeddingModel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Drop the inventory collection and reseed it with the catalog
    Load,

    /// Embed every item description and print the vector index definition
    Generate {
        /// Similarity function for the printed index definition
        #[arg(short, long, value_enum, default_value_t = DistanceMetric::Cosine)]
        similarity: DistanceMetric,
    },

    /// Search the catalog. Prompts for the query when TEXT is omitted
    Query {
        /// Free-text query; multiple words are joined with spaces
        text: Vec<String>,

        /// Number of results to return
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// Candidates considered by the approximate nearest-neighbour search
        #[arg(long, default_value_t = DEFAULT_NUM_CANDIDATES)]
        num_candidates: u32,

        /// Name of the Atlas Vector Search index
        #[arg(long, default_value = DEFAULT_INDEX_NAME)]
        index: String,
    },

    /// Print the vector index definition for the selected model
    Index {
        /// Similarity function for the index definition
        #[arg(short, long, value_enum, default_value_t = DistanceMetric::Cosine)]
        similarity: DistanceMetric,
    },

    /// Show embedding coverage of the collection and database health
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();

    match cli.command {
        Commands::Load => {
            let app = App::connect().await?;
            commands::load(&app.service, &app.config.collection).await?
        }

        Commands::Generate { similarity } => {
            let app = App::connect().await?;
            commands::generate(&app.service, cli.model, similarity).await?
        }

        Commands::Query {
            text,
            limit,
            num_candidates,
            index,
        } => {
            let text = (!text.is_empty()).then(|| text.join(" "));
            let options = SearchOptions {
                index,
                num_candidates,
                limit,
                ..Default::default()
            };
            let app = App::connect().await?;
            commands::query(&app.service, cli.model, text, &options).await?
        }

        // The index definition only depends on the model, no database needed
        Commands::Index { similarity } => commands::index(cli.model, similarity)?,

        Commands::Status => {
            let app = App::connect().await?;
            commands::status(
                &app.service,
                &app.client,
                app.config.mongo.database(),
                &app.config.collection,
            )
            .await?
        }
    }

    Ok(())
}

/// Connected state shared by the database-backed subcommands
struct App {
    config: Config,
    client: Client,
    service: Service,
}

impl App {
    async fn connect() -> Result<Self> {
        let config = Config::from_env()?;

        info!(
            url = %config.mongo.redacted_url(),
            database = %config.mongo.database(),
            collection = %config.collection,
            "Connecting to MongoDB..."
        );
        let client = connect_from_config(&config.mongo)
            .await
            .wrap_err("MongoDB connection failed")?;

        let repository = MongoInventoryRepository::with_collection(
            client.database(config.mongo.database()),
            &config.collection,
        );

        Ok(Self {
            config,
            client,
            service: InventoryService::new(repository),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_model_defaults_to_minilm() {
        let cli = Cli::try_parse_from(["inventory-search", "load"]).unwrap();
        assert_eq!(cli.model, EmbeddingModel::MiniLm);
        assert!(matches!(cli.command, Commands::Load));
    }

    #[test]
    fn test_model_is_global() {
        let cli = Cli::try_parse_from(["inventory-search", "generate", "--model", "mpnet"]).unwrap();
        assert_eq!(cli.model, EmbeddingModel::Mpnet);

        let cli = Cli::try_parse_from(["inventory-search", "-m", "bge-large", "status"]).unwrap();
        assert_eq!(cli.model, EmbeddingModel::BgeLarge);
    }

    #[test]
    fn test_legacy_model_aliases() {
        let cli = Cli::try_parse_from(["inventory-search", "--model", "distilbert", "load"]).unwrap();
        assert_eq!(cli.model, EmbeddingModel::Mpnet);

        let cli = Cli::try_parse_from(["inventory-search", "--model", "msmarco", "load"]).unwrap();
        assert_eq!(cli.model, EmbeddingModel::BgeBase);
    }

    #[test]
    fn test_model_help_lists_legacy_aliases() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("distilbert as mpnet"));
        assert!(help.contains("roberta as bge-large"));
        assert!(help.contains("msmarco as bge-base"));
    }

    #[test]
    fn test_unknown_model_rejected() {
        assert!(Cli::try_parse_from(["inventory-search", "--model", "gpt", "load"]).is_err());
    }

    #[test]
    fn test_query_defaults() {
        let cli = Cli::try_parse_from(["inventory-search", "query"]).unwrap();
        match cli.command {
            Commands::Query {
                text,
                limit,
                num_candidates,
                index,
            } => {
                assert!(text.is_empty());
                assert_eq!(limit, 3);
                assert_eq!(num_candidates, 50);
                assert_eq!(index, "vector_index");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_query_words_and_options() {
        let cli = Cli::try_parse_from([
            "inventory-search",
            "query",
            "cordless",
            "drill",
            "--limit",
            "5",
            "--num-candidates",
            "100",
        ])
        .unwrap();
        match cli.command {
            Commands::Query {
                text,
                limit,
                num_candidates,
                ..
            } => {
                assert_eq!(text.join(" "), "cordless drill");
                assert_eq!(limit, 5);
                assert_eq!(num_candidates, 100);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_similarity_values() {
        let cli =
            Cli::try_parse_from(["inventory-search", "index", "--similarity", "dot-product"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Index {
                similarity: DistanceMetric::DotProduct
            }
        ));

        let cli = Cli::try_parse_from(["inventory-search", "generate", "-s", "euclidean"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Generate {
                similarity: DistanceMetric::Euclidean
            }
        ));
    }

    #[test]
    fn test_mode_is_required() {
        assert!(Cli::try_parse_from(["inventory-search"]).is_err());
    }
}
