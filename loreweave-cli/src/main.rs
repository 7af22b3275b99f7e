use clap::{Parser, Subcommand};
use colored::Colorize;
use loreweave::config::{ConfigLoader, LoreweaveConfig};
use loreweave::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

#[derive(Parser)]
#[command(name = "loreweave")]
#[command(about = "Narrative-text knowledge graph builder", long_about = None)]
#[command(version = loreweave::VERSION)]
struct Cli {
    /// Custom data directory for documents and snapshots
    #[arg(long, short, global = true)]
    data_dir: Option<PathBuf>,

    /// Configuration file (toml, yaml, json)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true)]
    output: String,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, resolve, and accumulate a knowledge graph from documents
    Build {
        /// Directory of source documents (.txt, .md); defaults to the
        /// configured document directory
        #[arg(long)]
        source: Option<PathBuf>,

        /// Continue from the most recent snapshot instead of starting fresh
        #[arg(long)]
        resume: bool,
    },

    /// Report subject/edge counts and a sample of a persisted graph
    Inspect {
        /// Snapshot directory; defaults to the most recent snapshot
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn output_error(error_msg: &str, output_format: &str) {
    if output_format == "json" {
        let error_response = json!({
            "error": true,
            "message": error_msg,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        error!("{}", error_msg);
    }
}

fn load_config(cli: &Cli) -> loreweave::Result<LoreweaveConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader.load_file(path)?;
    } else {
        loader.load_default_files();
    }
    loader.load_env();

    let mut config = loader.extract()?;
    if let Some(data_dir) = &cli.data_dir {
        config.storage.data_dir = data_dir.clone();
    }
    Ok(config)
}

fn init_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let level = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .try_init();
}

fn print_report(report: &GraphReport, output: &str) {
    if output == "json" {
        match serde_json::to_string_pretty(report) {
            Ok(payload) => println!("{}", payload),
            Err(e) => output_error(&format!("Failed to encode report: {}", e), output),
        }
        return;
    }

    println!(
        "{} {}",
        "Subjects:".bold(),
        report.subject_count.to_string().cyan()
    );
    println!(
        "{} {}",
        "Edges:   ".bold(),
        report.edge_count.to_string().cyan()
    );
    for sample in &report.sample {
        println!("{}", sample.subject.green().bold());
        for edge in &sample.edges {
            println!("  - {} -> {}", edge.relation, edge.object.green());
        }
        if sample.elided > 0 {
            println!("  {} more relations", format!("... and {}", sample.elided).dimmed());
        }
    }
}

async fn handle_build(
    cli: &Cli,
    source: Option<PathBuf>,
    resume: bool,
) -> loreweave::Result<()> {
    let config = load_config(cli)?;

    let document_dir = source.unwrap_or_else(|| config.storage.document_dir());
    let documents = DirectoryReader::new(&document_dir).load()?;

    let snapshot_base = config.storage.snapshot_dir();
    let existing = if resume {
        match SnapshotStore::latest(&snapshot_base)? {
            Some(store) => store.load()?.unwrap_or_default(),
            None => MemoryGraph::new(),
        }
    } else {
        MemoryGraph::new()
    };

    let client = Arc::new(OpenAiClient::from_config(&config.completion)?);
    let mut pipeline = GraphPipeline::new(client, &config);
    let (graph, report) = pipeline.build_onto(&documents, existing).await?;

    let store = SnapshotStore::create_timestamped(&snapshot_base)?;
    store.save(&graph)?;

    if cli.output == "json" {
        let payload = json!({
            "documents": report.documents,
            "triplets": report.triplets,
            "diagnostics": report.diagnostics,
            "raw": report.raw,
            "linked": report.linked,
            "snapshot": store.dir(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        println!(
            "{} {} documents, {} triplets, {} diagnostics",
            "Processed".bold(),
            report.documents,
            report.triplets,
            report.diagnostics.len()
        );
        print_report(&report.linked, &cli.output);
        println!(
            "{} {}",
            "Snapshot:".bold(),
            store.dir().display().to_string().cyan()
        );
    }

    Ok(())
}

fn handle_inspect(cli: &Cli, snapshot: Option<PathBuf>) -> loreweave::Result<()> {
    let config = load_config(cli)?;

    let store = match snapshot {
        Some(path) => SnapshotStore::new(path),
        None => match SnapshotStore::latest(config.storage.snapshot_dir())? {
            Some(store) => store,
            None => {
                return Err(LoreweaveError::Other(
                    "no snapshots found; run `loreweave build` first".to_string(),
                ));
            }
        },
    };

    let graph = store.load()?.ok_or_else(|| {
        LoreweaveError::Other(format!("no graph found in {}", store.dir().display()))
    })?;

    print_report(&inspect(&graph), &cli.output);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = match &cli.command {
        Commands::Build { source, resume } => {
            handle_build(&cli, source.clone(), *resume).await
        }
        Commands::Inspect { snapshot } => handle_inspect(&cli, snapshot.clone()),
        Commands::Version => {
            println!("loreweave {}", loreweave::VERSION);
            Ok(())
        }
    };

    if let Err(e) = result {
        output_error(&e.to_string(), &cli.output);
        std::process::exit(1);
    }
}
