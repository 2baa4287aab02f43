//! lexisim CLI: taxonomy-graph word similarity.
//!
//! Two positional words compute a single similarity; a single positional
//! argument is a batch file of `word1 word2` lines whose results land in
//! `<basename>_results.txt`. Rendering only happens in single-pair mode.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use miette::Result;

use lexisim::batch::run_batch;
use lexisim::ontology::MemoryOntology;
use lexisim::render::{DotRenderer, RendererPort};
use lexisim::similarity::SimilarityEngine;
use lexisim::text::SimpleTokenizer;

#[derive(Parser)]
#[command(
    name = "lexisim",
    version,
    about = "Semantic word similarity over a taxonomy graph"
)]
struct Cli {
    /// First word, or a batch file of `word1 word2` lines when no second
    /// word is given.
    input: String,

    /// Second word (single-pair mode).
    word2: Option<String>,

    /// Ontology snapshot (JSON).
    #[arg(long, default_value = "ontology.json")]
    ontology: PathBuf,

    /// Write a Graphviz DOT rendering of the closure graph here
    /// (single-pair mode only).
    #[arg(long)]
    dot: Option<PathBuf>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let ontology = MemoryOntology::from_path(&cli.ontology)?;
    let engine = SimilarityEngine::new(Arc::new(ontology), Arc::new(SimpleTokenizer::new()));

    match cli.word2 {
        Some(word2) => {
            let comparison = engine.compare(&cli.input, &word2)?;
            println!("{}", comparison.similarity);
            if let Some(dot_path) = cli.dot {
                if comparison.graph.is_some() {
                    DotRenderer::new(dot_path).render(&comparison)?;
                }
            }
        }
        None => {
            let output = run_batch(&engine, std::path::Path::new(&cli.input))?;
            println!("results written to {}", output.display());
        }
    }

    Ok(())
}
