//! Subcommand handlers and their console output

use database::mongodb::{Client, HealthStatus, check_health_detailed};
use domain_inventory::{
    CatalogStatus, GenerateReport, InventoryService, MongoInventoryRepository, SearchHit,
};
use domain_vector::{
    DistanceMetric, EmbeddingModel, FastEmbedConfig, FastEmbedProvider, SearchOptions,
    VectorIndexDefinition, DEFAULT_VECTOR_PATH,
};
use eyre::{Result, WrapErr};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

pub type Service = InventoryService<MongoInventoryRepository>;

const INDEX_HEADER: &str =
    "Please use the following JSON to create the vector search index in MongoDB Atlas:";
const NO_RESULTS: &str = "No results found for your query.";
const QUERY_PROMPT: &str = "Enter your search query: ";

pub async fn load(service: &Service, collection: &str) -> Result<()> {
    let report = service.load_catalog().await?;
    info!(inserted = report.inserted, "Catalog loaded");

    println!("Loaded data into MongoDB collection '{}'.", collection);
    Ok(())
}

pub async fn generate(
    service: &Service,
    model: EmbeddingModel,
    similarity: DistanceMetric,
) -> Result<()> {
    let provider = load_provider(model).await?;
    let report = service.generate_embeddings(&provider, similarity).await?;

    print!("{}", render_generate(&report)?);
    Ok(())
}

pub async fn query(
    service: &Service,
    model: EmbeddingModel,
    text: Option<String>,
    options: &SearchOptions,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => prompt_query().await?,
    };

    let provider = load_provider(model).await?;
    let hits = service.search(&provider, &text, options).await?;

    print!("{}", render_hits(&hits)?);
    Ok(())
}

pub fn index(model: EmbeddingModel, similarity: DistanceMetric) -> Result<()> {
    let definition = VectorIndexDefinition::for_model(model, DEFAULT_VECTOR_PATH, similarity);
    println!("{}", definition.to_pretty_json()?);
    Ok(())
}

/// Collection coverage plus server reachability
#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    database: &'a str,
    collection: &'a str,
    #[serde(flatten)]
    catalog: CatalogStatus,
    healthy: bool,
    response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub async fn status(
    service: &Service,
    client: &Client,
    database: &str,
    collection: &str,
) -> Result<()> {
    let HealthStatus {
        healthy,
        message,
        response_time_ms,
    } = check_health_detailed(client).await;
    let catalog = service.status().await?;

    let report = StatusReport {
        database,
        collection,
        catalog,
        healthy,
        response_time_ms,
        message,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn load_provider(model: EmbeddingModel) -> Result<FastEmbedProvider> {
    let config = FastEmbedConfig::from_env()?;
    FastEmbedProvider::load(model, &config)
        .await
        .wrap_err_with(|| format!("Failed to load embedding model '{}'", model))
}

async fn prompt_query() -> Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(QUERY_PROMPT.as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .wrap_err("Failed to read search query from stdin")?;
    Ok(line)
}

fn render_generate(report: &GenerateReport) -> Result<String> {
    let mut out = String::new();
    for item in &report.embedded {
        out.push_str(&format!("Generated embeddings for Item ID {}.\n", item.id));
    }
    out.push_str(INDEX_HEADER);
    out.push('\n');
    out.push_str(&report.index_definition.to_pretty_json()?);
    out.push('\n');
    Ok(out)
}

fn render_hits(hits: &[SearchHit]) -> Result<String> {
    if hits.is_empty() {
        return Ok(format!("{}\n", NO_RESULTS));
    }

    let mut out = String::new();
    for hit in hits {
        out.push_str(&serde_json::to_string(hit)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_inventory::EmbeddedItem;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_render_generate_lists_items_then_index() {
        let id = ObjectId::parse_str("65a1b2c3d4e5f6a7b8c9d0e1").unwrap();
        let report = GenerateReport {
            model: "minilm".to_string(),
            embedded: vec![EmbeddedItem {
                id,
                item_id: 1,
                dimension: 384,
            }],
            skipped: Vec::new(),
            index_definition: VectorIndexDefinition::for_model(
                EmbeddingModel::MiniLm,
                DEFAULT_VECTOR_PATH,
                DistanceMetric::Cosine,
            ),
        };

        let out = render_generate(&report).unwrap();
        let mut lines = out.lines();

        assert_eq!(
            lines.next(),
            Some("Generated embeddings for Item ID 65a1b2c3d4e5f6a7b8c9d0e1.")
        );
        assert_eq!(lines.next(), Some(INDEX_HEADER));

        let json: String = lines.collect::<Vec<_>>().join("\n");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fields"][0]["numDimensions"], 384);
        assert_eq!(value["fields"][0]["similarity"], "cosine");
    }

    #[test]
    fn test_render_hits_empty() {
        assert_eq!(render_hits(&[]).unwrap(), "No results found for your query.\n");
    }

    #[test]
    fn test_render_hits_one_line_each() {
        let hits = vec![
            SearchHit {
                description: "Stainless steel garden shovel".to_string(),
                score: 0.5,
            },
            SearchHit {
                description: "Organic potting mix, 50lb bag".to_string(),
                score: 0.25,
            },
        ];

        let out = render_hits(&hits).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"description":"Stainless steel garden shovel","score":0.5}"#
        );
    }

    #[test]
    fn test_status_report_flattens_catalog() {
        let report = StatusReport {
            database: "homedepot",
            collection: "inventory",
            catalog: CatalogStatus {
                total: 26,
                embedded: 26,
                embedding_models: vec!["minilm".to_string()],
            },
            healthy: true,
            response_time_ms: 3,
            message: None,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total"], 26);
        assert_eq!(value["embedding_models"][0], "minilm");
        assert!(value.get("message").is_none());
    }
}
