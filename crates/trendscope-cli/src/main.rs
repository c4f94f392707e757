mod collect;
mod report;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "trendscope")]
#[command(about = "Collect trending posts and report what stands out")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Which sources to fetch from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Args)]
pub(crate) struct SourceArgs {
    /// Include the built-in offline sample feed
    #[arg(long)]
    pub sample: bool,

    /// Skip the YouTube trending page
    #[arg(long)]
    pub no_youtube: bool,

    /// Skip the Google Trends feed
    #[arg(long)]
    pub no_google_trends: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect posts, analyze them and print a report (default)
    Report {
        #[command(flatten)]
        sources: SourceArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Collect posts and list them without analysis
    Posts {
        #[command(flatten)]
        sources: SourceArgs,

        /// Print the posts as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = trendscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Commands::Report {
        sources: SourceArgs::default(),
        json: false,
    });

    match command {
        Commands::Report { sources, json } => {
            let posts = collect::collect_posts(&config, sources).await?;
            let analysis =
                trendscope_analyzer::analyze(&posts, &trendscope_analyzer::LexiconScorer);
            if json {
                let value = report::json_report(&posts, analysis.as_ref(), chrono::Utc::now());
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                let text = report::TextReport {
                    analysis: analysis.as_ref(),
                    post_count: posts.len(),
                };
                print!("{text}");
            }
        }
        Commands::Posts { sources, json } => {
            let posts = collect::collect_posts(&config, sources).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                print!("{}", report::PostList(&posts));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
