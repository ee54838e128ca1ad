use anyhow::Result;
use clap::Parser;
use gco::areas::repository::Repository;
use gco::{SelectionConfig, SelectionMode};

#[derive(Parser)]
#[command(
    name = "gco",
    version = "0.1.0",
    about = "Interactive branch checkout for git",
    long_about = "Lists local branches sorted by recent activity and checks out \
    the one you pick, either through a fuzzy search prompt or a numbered list \
    of recently visited branches.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short,
        long,
        help = "Pick from recently checked out branches instead of searching"
    )]
    recent: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = if cli.recent {
        SelectionMode::Recent
    } else {
        SelectionMode::Search
    };
    let config = SelectionConfig::detect(mode);

    let repository = Repository::discover(Box::new(std::io::stdout())).await?;

    match config.mode {
        SelectionMode::Search => {
            repository.checkout_by_search(&config).await?;
        }
        SelectionMode::Recent => {
            let stdin = std::io::stdin();
            repository
                .checkout_by_recency(&config, &mut stdin.lock())
                .await?;
        }
    }

    Ok(())
}
