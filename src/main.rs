use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;

use friend_recommender::config::{Config, InputFormat, Mode};
use friend_recommender::{data, rank, report, storage, Vertex};

#[derive(Parser, Debug)]
#[clap(
    name = "friend-recommender",
    about = "Rank friends and suggest new ones from a social graph edge list"
)]
struct Cli {
    /// Path to the edge list (text or Parquet)
    #[clap(long, default_value = "suggest_friends.txt")]
    input: PathBuf,

    /// Input format (inferred from the file extension by default)
    #[clap(long, value_enum)]
    format: Option<InputFormat>,

    /// Source column for Parquet input
    #[clap(long, default_value = "src")]
    source_column: String,

    /// Target column for Parquet input
    #[clap(long, default_value = "dst")]
    target_column: String,

    /// Vertex to compute recommendations for
    #[clap(long, short = 'k', default_value = "0")]
    vertex: Vertex,

    /// Number of results to return
    #[clap(long, short = 'n', default_value = "2", allow_negative_numbers = true)]
    top_n: i64,

    /// Ranking mode
    #[clap(long, value_enum, default_value = "suggest")]
    mode: Mode,

    /// Print the per-friend candidate breakdown in suggest mode
    #[clap(long)]
    breakdown: bool,

    /// Write the ranking as JSON to this path
    #[clap(long)]
    output: Option<PathBuf>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            format: self.format,
            source_column: self.source_column.clone(),
            target_column: self.target_column.clone(),
            vertex: self.vertex,
            top_n: self.top_n,
            mode: self.mode,
            output: self.output.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = args.config();
    let graph = data::load_graph(&config)?;

    let k = config.vertex;
    if !graph.has_vertex(k) {
        return Err(friend_recommender::RecommendError::UnknownVertex(k).into());
    }

    match config.mode {
        Mode::Friends => {
            let ranking = rank::top_friends(&graph, k, config.top_n)?;
            print!("{}", report::render_friends(&ranking));
            if let Some(path) = &config.output {
                storage::save_ranking(&ranking, config.mode, path)?;
            }
        }
        Mode::Suggest => {
            let (ranking, text) = report::suggestion_report(&graph, k, config.top_n, args.breakdown)?;
            print!("{}", text);
            if let Some(path) = &config.output {
                storage::save_ranking(&ranking, config.mode, path)?;
            }
        }
    }

    Ok(())
}
