use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pdfsift::interactive::application::state_store::SearchStateStore;
use pdfsift::interactive::ui::row::build_row;
use pdfsift::{InteractiveSearch, PdfDocument, SearchMemory, SearchableDocument};

#[derive(Parser)]
#[command(
    name = "pdfsift",
    version,
    about = "Interactive full-text search inside a PDF document",
    long_about = None
)]
struct Cli {
    /// PDF file to search
    file: PathBuf,

    /// Ignore any remembered search term and row for this file
    #[arg(long)]
    fresh: bool,

    /// Enable verbose logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let document = PdfDocument::open(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;
    let document: Arc<PdfDocument> = Arc::new(document);
    info!(pages = document.page_count(), "document loaded");

    let mut store = SearchStateStore::open(&cli.file)?;
    let memory = if cli.fresh {
        SearchMemory::default()
    } else {
        store.memory()
    };

    let selected = InteractiveSearch::new(document.clone(), memory, &mut store).run()?;

    if let Some(selected) = selected {
        let row = build_row(document.as_ref(), &selected.result);
        println!("{}", row.destination.trim());
        println!("{}", row.snippet.text.replace('\n', " "));
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "pdfsift=debug" } else { "pdfsift=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
