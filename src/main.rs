//! Command-line interface for crossing-sim
//!
//! # Usage Examples
//!
//! ## Generating records
//! ```bash
//! # One random record
//! crossing-sim generate
//!
//! # Five reproducible shipping records
//! crossing-sim --seed 42 generate --purpose shipping --count 5
//! ```
//!
//! ## Submitting records
//! ```bash
//! # Generate a record, export it under ./data and insert it into MongoDB
//! crossing-sim --mongodb-uri mongodb://localhost:27017 submit
//!
//! # Submit a record read from a JSON file
//! crossing-sim submit --file record.json
//! ```
//!
//! ## Browsing and editing stored documents
//! ```bash
//! crossing-sim list vehicle --limit 20
//! crossing-sim get crossing 65f0c0ffee0000000000abcd
//! crossing-sim update vehicle 65f0c0ffee0000000000abcd '{"owner_name": "Jane Roe"}'
//! crossing-sim delete cargo_manifest 65f0c0ffee0000000000abcd
//! crossing-sim reset
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use crossing_core::{Collection, CrossingPurpose, CrossingRecord, DocumentPatch};
use crossing_generator::RecordGenerator;
use crossing_sim::{
    health, reference_list, submit_record, validate_collection, validate_limit, FileExporter,
    ReferenceKind, RequestError, Settings, DEFAULT_PAGE_LIMIT,
};
use document_gateway::{DocumentGateway, MongoConnector, MongoOpts};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crossing-sim")]
#[command(about = "Border checkpoint crossing simulator and record keeper")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random crossing records and print them
    Generate {
        /// Force the crossing purpose (personal, business, shipping)
        #[arg(long)]
        purpose: Option<CrossingPurpose>,

        /// Number of records to generate
        #[arg(long, default_value = "1")]
        count: u64,
    },

    /// Print a reference list used to populate forms
    Reference {
        #[arg(value_enum)]
        kind: ReferenceKind,
    },

    #[command(flatten)]
    Store(StoreCommands),
}

/// Commands that need a store connection.
#[derive(Subcommand)]
enum StoreCommands {
    /// Save a record to the data directory and to MongoDB
    Submit {
        /// Read the record from this JSON file instead of generating one
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Force the crossing purpose of a generated record
        #[arg(long, conflicts_with = "file")]
        purpose: Option<CrossingPurpose>,
    },

    /// List documents in a collection, newest first
    List {
        /// Collection name (vehicle, crossing, cargo_manifest)
        collection: String,

        /// Number of documents to skip
        #[arg(long, default_value = "0")]
        skip: u64,

        /// Maximum number of documents to return (1-100)
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u64,
    },

    /// Print one document
    Get { collection: String, id: String },

    /// Overwrite fields of one document with the given JSON object
    Update {
        collection: String,
        id: String,
        /// JSON object of fields to set
        patch: String,
    },

    /// Delete one document
    Delete { collection: String, id: String },

    /// Delete every document in every collection
    Reset,

    /// Report whether MongoDB is reachable
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(cli.settings.env_filter())
        .init();

    let settings = cli.settings;
    let mut generator = match settings.seed {
        Some(seed) => RecordGenerator::new(seed),
        None => RecordGenerator::from_entropy(),
    };

    match cli.command {
        Commands::Generate { purpose, count } => {
            let records: Vec<CrossingRecord> = (0..count)
                .map(|_| match purpose {
                    Some(purpose) => generator.generate_crossing_record_with_purpose(purpose),
                    None => generator.generate_crossing_record(),
                })
                .collect();
            if records.len() == 1 {
                print_json(&records[0])?;
            } else {
                print_json(&records)?;
            }
        }
        Commands::Reference { kind } => {
            print_json(&reference_list(kind))?;
        }
        Commands::Store(command) => {
            let gateway = connect_gateway(&settings).await;
            let result = run_store_command(command, &gateway, &settings, &mut generator).await;
            gateway.disconnect().await;
            result?;
        }
    }

    Ok(())
}

async fn connect_gateway(settings: &Settings) -> DocumentGateway {
    tracing::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    let gateway = DocumentGateway::new(MongoConnector::new(MongoOpts::from(&settings.database)));
    gateway.connect().await;
    gateway
}

async fn run_store_command(
    command: StoreCommands,
    gateway: &DocumentGateway,
    settings: &Settings,
    generator: &mut RecordGenerator,
) -> anyhow::Result<()> {
    match command {
        StoreCommands::Submit { file, purpose } => {
            let record = match file {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read record from {path:?}"))?;
                    serde_json::from_str::<CrossingRecord>(&content)
                        .with_context(|| format!("Invalid crossing record in {path:?}"))?
                }
                None => match purpose {
                    Some(purpose) => generator.generate_crossing_record_with_purpose(purpose),
                    None => generator.generate_crossing_record(),
                },
            };

            let exporter = FileExporter::new(&settings.data_dir);
            let response = submit_record(gateway, &exporter, &record).await;
            print_json(&response)?;
            if !response.success {
                anyhow::bail!("{}", response.message);
            }
        }
        StoreCommands::List {
            collection,
            skip,
            limit,
        } => {
            let collection = validate_collection(&collection)?;
            let limit = validate_limit(limit)?;
            let page = gateway
                .list_page(collection.as_str(), skip, limit)
                .await
                .map_err(RequestError::from)?;
            print_json(&page)?;
        }
        StoreCommands::Get { collection, id } => {
            let collection = validate_collection(&collection)?;
            let document = gateway
                .get_document(collection.as_str(), &id)
                .await
                .map_err(RequestError::from)?
                .ok_or_else(|| RequestError::not_found(collection, &id))?;
            print_json(&document)?;
        }
        StoreCommands::Update {
            collection,
            id,
            patch,
        } => {
            let collection = validate_collection(&collection)?;
            let value: serde_json::Value =
                serde_json::from_str(&patch).context("Update payload is not valid JSON")?;
            let patch = DocumentPatch::from_value(value).map_err(RequestError::from)?;

            let updated = gateway
                .update_document(collection.as_str(), &id, patch)
                .await
                .map_err(RequestError::from)?;
            if !updated {
                return Err(RequestError::not_found(collection, &id).into());
            }

            let document = gateway
                .get_document(collection.as_str(), &id)
                .await
                .map_err(RequestError::from)?;
            print_json(&MutationResponse {
                success: true,
                message: format!("Document {id} updated successfully"),
                document,
            })?;
        }
        StoreCommands::Delete { collection, id } => {
            let collection = validate_collection(&collection)?;
            let deleted = gateway
                .delete_document(collection.as_str(), &id)
                .await
                .map_err(RequestError::from)?;
            if !deleted {
                return Err(RequestError::not_found(collection, &id).into());
            }
            print_json(&MutationResponse::<()> {
                success: true,
                message: format!("Document {id} deleted successfully"),
                document: None,
            })?;
        }
        StoreCommands::Reset => {
            let names = Collection::ALL.map(|c| c.as_str());
            let summary = gateway.reset(&names).await.map_err(RequestError::from)?;
            print_json(&summary)?;
        }
        StoreCommands::Health => {
            print_json(&health(gateway).await)?;
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct MutationResponse<T: Serialize> {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<T>,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
