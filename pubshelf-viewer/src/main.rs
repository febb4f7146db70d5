//! Terminal client for browsing an author's publication list.
//!
//! Fetches the list once at startup (the session's only suspension point),
//! then drives the sort/paginate view state from user input. A failed fetch
//! is an unrecoverable startup fault: it is logged loudly and the session
//! starts with an empty list.

mod fetch;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use pubshelf_core::ViewState;
use pubshelf_model::SortCriteria;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "pubshelf",
    about = "Browse an author's publications, sorted and paginated"
)]
struct Cli {
    /// Base URL of the publication service.
    #[arg(
        long,
        env = "PUBSHELF_SERVER",
        default_value = "http://127.0.0.1:5000"
    )]
    server: Url,

    /// Author whose publications are listed.
    #[arg(long, env = "PUBSHELF_AUTHOR", default_value = "Brad Dicianno")]
    author: String,

    /// Initial sort criteria (latest, oldest, or popular).
    #[arg(long, value_parser = parse_criteria, default_value = "popular")]
    sort: SortCriteria,

    /// Initial page size.
    #[arg(long, default_value_t = 5)]
    page_size: usize,

    /// Print the first page and exit instead of starting the interactive
    /// session.
    #[arg(long)]
    once: bool,
}

fn parse_criteria(token: &str) -> Result<SortCriteria, String> {
    SortCriteria::parse(token).ok_or_else(|| {
        format!("unknown sort criteria `{token}` (expected latest, oldest, or popular)")
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = reqwest::Client::new();
    let publications =
        match fetch::fetch_publications(&client, &cli.server, &cli.author).await {
            Ok(publications) => {
                tracing::info!(
                    count = publications.len(),
                    author = %cli.author,
                    "fetched publications"
                );
                publications
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    server = %cli.server,
                    "failed to fetch publications; starting with an empty list"
                );
                Vec::new()
            }
        };

    let mut state = ViewState::new(publications, cli.sort, cli.page_size);

    if cli.once {
        print!("{}", render::render_page(&state));
        return Ok(());
    }
    session::run(&mut state)
}
