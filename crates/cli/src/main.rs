//! Tweetscope CLI — faceted tweet search from the terminal.
//!
//! Talks to the same backend as the desktop app, so every filter flag maps
//! onto one wire parameter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tweetscope_api::ApiClient;
use tweetscope_core::export;
use tweetscope_core::query::{build_ask_params, build_search_params, SEARCH_TOP_K};
use tweetscope_core::types::{ActiveFilters, ResultRow};

/// Tweetscope CLI — search, ask, and export without a UI.
#[derive(Parser)]
#[command(name = "ts", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Backend base URL (default: TWEETSCOPE_API or localhost:8000)
    #[arg(long, global = true)]
    api: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the filter catalog served by the backend
    Filters,
    /// Run one search and print the matching tweets
    Search {
        /// Free-text query (empty = metadata-only search)
        query: Vec<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Result page (1-indexed)
        #[arg(long, default_value = "1")]
        page: u64,

        /// Results per page
        #[arg(long, default_value = "20")]
        limit: u64,
    },
    /// Ask the LLM a question about the tweets matching the filters
    Ask {
        /// The question
        question: Vec<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Search and write the results to an xlsx workbook
    Export {
        /// Output path (default: tweet_results_<date>.xlsx)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Free-text query
        query: Vec<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum rows to export (backend caps a page at 100)
        #[arg(long, default_value = "100")]
        limit: u64,
    },
}

/// Filter flags shared by search, ask, and export.
#[derive(Args)]
struct FilterArgs {
    /// Content tag (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Primary image tag (repeatable)
    #[arg(long = "image-tag")]
    image_tags: Vec<String>,

    /// Image subtag (repeatable)
    #[arg(long = "image-subtag")]
    image_subtags: Vec<String>,

    /// Account handle (repeatable)
    #[arg(long = "handle")]
    handles: Vec<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,

    #[arg(long)]
    min_likes: Option<u64>,
    #[arg(long)]
    min_views: Option<u64>,
    #[arg(long)]
    min_retweets: Option<u64>,
    #[arg(long)]
    min_replies: Option<u64>,
    #[arg(long)]
    min_quotes: Option<u64>,
    #[arg(long)]
    min_bookmarks: Option<u64>,
}

impl FilterArgs {
    fn into_filters(self) -> ActiveFilters {
        let threshold = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_default();
        ActiveFilters {
            tags: self.tags,
            image_tags: self.image_tags,
            image_subtags: self.image_subtags,
            handles: self.handles,
            start_date: self.from.unwrap_or_default(),
            end_date: self.to.unwrap_or_default(),
            min_likes: threshold(self.min_likes),
            min_views: threshold(self.min_views),
            min_retweets: threshold(self.min_retweets),
            min_replies: threshold(self.min_replies),
            min_quotes: threshold(self.min_quotes),
            min_bookmarks: threshold(self.min_bookmarks),
        }
    }
}

fn client(api: Option<String>) -> ApiClient {
    match api {
        Some(base) => ApiClient::new(base),
        None => ApiClient::from_env(),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tweetscope=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let api = client(cli.api.clone());

    match cli.command {
        Commands::Filters => {
            let catalog = match api.fetch_filters().await {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Could not load filters: {e}");
                    std::process::exit(1);
                }
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&catalog).unwrap());
            } else {
                println!("tags:          {}", catalog.tags.len());
                println!("authors:       {}", catalog.authors.len());
                println!("handles:       {}", catalog.handles.len());
                println!("image tags:    {}", catalog.image_tags.len());
                println!("image subtags: {}", catalog.image_subtags.len());
            }
        }
        Commands::Search { query, filters, page, limit } => {
            let text = query.join(" ");
            let params =
                build_search_params(page, limit, SEARCH_TOP_K, &text, &filters.into_filters());
            let response = match api.search(&params).await {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response).unwrap());
            } else {
                if response.matches.is_empty() {
                    eprintln!("No results");
                    std::process::exit(1);
                }
                for tweet in &response.matches {
                    let line = tweet.text.replace('\n', " ");
                    let line = if line.chars().count() > 100 {
                        let cut: String = line.chars().take(100).collect();
                        format!("{cut}...")
                    } else {
                        line
                    };
                    println!(
                        "{:<16} {:>10} {:>7}L {}",
                        tweet.handle, tweet.date, tweet.like_count, line
                    );
                }
                eprintln!("\n{} of {} matches", response.matches.len(), response.total_matches);
            }
        }
        Commands::Ask { question, filters } => {
            let question = question.join(" ");
            if question.trim().is_empty() {
                eprintln!("Question must not be empty");
                std::process::exit(2);
            }
            let params = build_ask_params(&question, &filters.into_filters());
            match api.ask(&params).await {
                Ok(answer) => {
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(
                                &serde_json::json!({ "gpt_response": answer })
                            )
                            .unwrap()
                        );
                    } else {
                        println!("{answer}");
                    }
                }
                Err(e) => {
                    eprintln!("LLM query failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Export { out, query, filters, limit } => {
            let text = query.join(" ");
            let params =
                build_search_params(1, limit, SEARCH_TOP_K, &text, &filters.into_filters());
            let response = match api.search(&params).await {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            };
            let rows = ResultRow::from_matches(response.matches);
            if rows.is_empty() {
                eprintln!("No results to export");
                std::process::exit(1);
            }
            let path = out.unwrap_or_else(|| {
                PathBuf::from(export::export_filename(chrono::Local::now().date_naive()))
            });
            let flat = export::flatten(&rows);
            if let Err(e) = export::write_xlsx(&path, &flat) {
                eprintln!("Export failed: {e}");
                std::process::exit(1);
            }
            eprintln!("Wrote {} rows to {}", flat.len(), path.display());
        }
    }
}
