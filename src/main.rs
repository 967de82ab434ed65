mod character;
mod config;
mod contributor;
mod error;
mod github;
mod logger;
mod render;
mod seed;
mod widget;

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::Parser;
use config::{FailurePolicy, RefetchPolicy, WidgetConfig, WidgetOptions};
use github::{DEFAULT_API_BASE, GithubClient};
use render::Theme;
use seed::{FixedSeeds, RandomSeeds, Seed, SeedSource};
use std::path::PathBuf;
use tracing::info;
use widget::{ContributorState, Widget};

#[derive(Parser)]
#[command(author, version, about = "Render a repository's contributors as RPG character cards", long_about = None)]
struct Cli {
    /// GitHub organization or user owning the repository
    #[arg(short, long, default_value = "haxtheweb")]
    organization: String,

    /// Repository name
    #[arg(short, long, default_value = "webcomponents")]
    repo: String,

    /// Maximum number of contributors to show (<= 0 shows none)
    #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
    limit: i64,

    /// Colour scheme
    #[arg(short, long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// Output HTML file
    #[arg(long, default_value = "contributors.html")]
    output: PathBuf,

    /// Which result wins when fetches overlap
    #[arg(long, value_enum, default_value_t = RefetchPolicy::LastResolvedWins)]
    refetch: RefetchPolicy,

    /// What to show when the fetch fails
    #[arg(long, value_enum, default_value_t = FailurePolicy::Placeholder)]
    on_error: FailurePolicy,

    /// Fixed 8-digit seed for every character instead of random ones
    #[arg(long)]
    seed: Option<u32>,

    /// GitHub REST API base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    let mut seeds: Box<dyn SeedSource> = match cli.seed {
        Some(n) => {
            let seed = Seed::new(n)
                .ok_or_else(|| anyhow!("--seed must have exactly 8 digits, got {n}"))?;
            Box::new(FixedSeeds::constant(seed))
        }
        None => Box::new(RandomSeeds),
    };

    let options = WidgetOptions {
        refetch: cli.refetch,
        on_error: cli.on_error,
    };
    let mut widget = Widget::new(WidgetConfig::default(), options);
    widget.set_organization(cli.organization);
    widget.set_repo(cli.repo);
    widget.set_limit(cli.limit);

    info!(
        repository = %format!("{}/{}", widget.config().organization, widget.config().repo),
        limit = widget.config().limit,
        "rendering contributors"
    );

    let client = GithubClient::new(cli.api_base);
    widget.refresh(&client).await;

    let body = widget.render(cli.theme, seeds.as_mut());
    let page = render::render_page(widget.config(), &body, cli.theme, Utc::now());

    tokio::fs::write(&cli.output, page)
        .await
        .with_context(|| format!("Cannot write {}", cli.output.display()))?;

    match widget.state() {
        ContributorState::Loaded(list) => {
            info!(cards = list.len(), output = %cli.output.display(), "page written");
        }
        ContributorState::Failed { reason, .. } => {
            info!(output = %cli.output.display(), %reason, "page written after failed fetch");
        }
    }

    Ok(())
}
