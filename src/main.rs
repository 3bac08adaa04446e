use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use sufx::index::build::{load_config, load_documents};
use sufx::index::stats::show_stats;
use sufx::index::{GeneralizedSuffixTree, IndexConfig, InvalidTokenPolicy};
use sufx::output::{self, SearchReport};
use sufx::query::{QueryExecutor, parse_query};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sufx")]
#[command(about = "Exact substring search over nucleotide documents with a generalized suffix tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct CorpusArgs {
    /// Abort on the first token outside the alphabet instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Index documents and search for one or more queries
    Search {
        /// Queries to look up
        #[arg(required = true)]
        queries: Vec<String>,

        /// Documents to index, numbered in the order given
        #[arg(short, long = "docs", required = true, num_args = 1..)]
        documents: Vec<PathBuf>,

        /// Only match at the end of a token
        #[arg(long)]
        suffix: bool,

        /// Print only the number of occurrences
        #[arg(short, long)]
        count: bool,

        /// Print JSON lines
        #[arg(long)]
        json: bool,

        /// When to use colors
        #[arg(long, default_value = "auto", value_parser = ["auto", "never"])]
        color: String,

        #[command(flatten)]
        corpus: CorpusArgs,
    },
    /// Print every tree node (debugging aid)
    Dump {
        /// Documents to index
        #[arg(required = true)]
        documents: Vec<PathBuf>,

        #[command(flatten)]
        corpus: CorpusArgs,
    },
    /// Show tree statistics
    Stats {
        /// Documents to index
        #[arg(required = true)]
        documents: Vec<PathBuf>,

        /// Print JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            queries,
            documents,
            suffix,
            count,
            json,
            color,
            corpus,
        } => {
            let tree = build_tree(&documents, config, &corpus)?;
            let mut out = output::stdout(color == "auto" && !json);
            let executor = QueryExecutor::new(&tree);

            for text in &queries {
                let mut query = parse_query(text);
                if suffix {
                    query = query.anchored();
                }
                if count {
                    let n = executor.execute(&query).map_or(0, |r| r.len());
                    if json {
                        output::print_json(&mut out, &SearchReport::count(&query.raw, n))?;
                    } else {
                        output::print_count(&mut out, &query.raw, n)?;
                    }
                    continue;
                }

                let results = executor.execute(&query);
                if json {
                    output::print_json(&mut out, &SearchReport::new(&query.raw, results.as_deref()))?;
                } else {
                    output::print_results(&mut out, &query.raw, results.as_deref(), &documents)?;
                }
            }
        }
        Commands::Dump { documents, corpus } => {
            let tree = build_tree(&documents, config, &corpus)?;
            let mut out = output::stdout(true);
            output::print_documents(&mut out, &documents)?;
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            tree.dump(&mut lock).context("failed to write dump")?;
            lock.flush()?;
        }
        Commands::Stats {
            documents,
            json,
            corpus,
        } => {
            let tree = build_tree(&documents, config, &corpus)?;
            let stats = tree.stats();
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            if json {
                output::print_json(&mut lock, &stats)?;
            } else {
                show_stats(&stats, &mut lock)?;
            }
        }
    }

    Ok(())
}

fn build_tree(
    documents: &[PathBuf],
    mut config: IndexConfig,
    corpus: &CorpusArgs,
) -> Result<GeneralizedSuffixTree> {
    if corpus.strict {
        config.invalid_tokens = InvalidTokenPolicy::Fail;
    }
    if corpus.quiet {
        config.show_progress = false;
    }

    let mut tree = GeneralizedSuffixTree::new();
    load_documents(&mut tree, documents, &config)?;
    Ok(tree)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "sufx=warn",
        1 => "sufx=debug",
        _ => "sufx=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
