use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::env;
use tokio::time::Duration;
use tracing_subscriber::EnvFilter;

use github_harvest::formatter::{
    commit_log_lines, owner_type_line, repository_list_lines, repository_stats_markdown,
};
use github_harvest::github::pagination::PageDelay;
use github_harvest::github::{FetchConfig, GitHubClient};
use github_harvest::types::{AuthorResolution, Branch, Owner, RepositoryId};

#[derive(Parser)]
#[command(name = "github-harvest-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "GitHub Harvest CLI - Collects commit history, repository listings and repository statistics from the GitHub API for later analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// GitHub personal access token for GraphQL API access (can also be set via the GITHUB_TOKEN environment variable or a local .env file)
    #[arg(long, global = true)]
    github_token: Option<String>,
    /// Delay between pagination requests in milliseconds, for rate-limit mitigation (default: none)
    #[arg(long, global = true)]
    page_delay_ms: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum AuthorResolutionCli {
    /// Resolve authors through the linked account login, "Unknown" when no account is linked
    LinkedLogin,
    /// Use the free-text author name from the commit metadata
    CommitName,
}

impl From<AuthorResolutionCli> for AuthorResolution {
    fn from(cli_option: AuthorResolutionCli) -> Self {
        match cli_option {
            AuthorResolutionCli::LinkedLogin => AuthorResolution::LinkedLogin,
            AuthorResolutionCli::CommitName => AuthorResolution::CommitName,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the commit history of a repository ref as author/date records
    Commits {
        /// Repository in owner/repo, GitHub URL or SSH format
        repository: String,
        /// Ref whose history to fetch (default: "main")
        #[arg(long, default_value = "main")]
        ref_name: String,
        /// Only fetch commits at or after this RFC 3339 instant (default: 2022-01-01T00:00:00Z)
        #[arg(long)]
        since: Option<String>,
        /// Author resolution strategy (default: linked-login)
        #[arg(long, default_value = "linked-login")]
        authors: AuthorResolutionCli,
    },
    /// List the names of an owner's non-fork repositories
    Repos {
        /// User or organization login
        owner: String,
    },
    /// Resolve whether an owner login is a user or an organization
    OwnerType {
        /// User or organization login
        owner: String,
    },
    /// Fetch star count, last-push time and contributor logins of a repository
    Stats {
        /// Repository in owner/repo, GitHub URL or SSH format
        repository: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider early to prevent "no process-level CryptoProvider available" panics
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Pick up a local .env file when present
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("github_harvest=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Get GitHub token from CLI or environment
    let github_token = cli.github_token.or_else(|| env::var("GITHUB_TOKEN").ok());

    let page_delay = match cli.page_delay_ms {
        Some(millis) if millis > 0 => PageDelay::Fixed(Duration::from_millis(millis)),
        _ => PageDelay::None,
    };

    match cli.command {
        Commands::Commits {
            repository,
            ref_name,
            since,
            authors,
        } => {
            let repository_id = parse_repository(&repository)?;
            let since = since
                .map(|raw| {
                    chrono::DateTime::parse_from_rfc3339(&raw)
                        .map(|instant| instant.with_timezone(&chrono::Utc))
                        .map_err(|e| anyhow::anyhow!("Invalid --since value '{}': {}", raw, e))
                })
                .transpose()?;

            let config = FetchConfig {
                page_delay,
                author_resolution: authors.into(),
                ..FetchConfig::default()
            };
            let client = GitHubClient::new(github_token, config)?;

            let records = client
                .fetch_commit_history(&repository_id, Some(&Branch::new(ref_name)), since)
                .await;
            print!("{}", commit_log_lines(&records));
        }
        Commands::Repos { owner } => {
            let config = FetchConfig {
                page_delay,
                ..FetchConfig::default()
            };
            let client = GitHubClient::new(github_token, config)?;

            let names = client.fetch_repository_list(&Owner::from(owner)).await;
            print!("{}", repository_list_lines(&names));
        }
        Commands::OwnerType { owner } => {
            let client = GitHubClient::new(github_token, FetchConfig::default())?;

            let owner = Owner::from(owner);
            let kind = client.fetch_owner_type(&owner).await;
            print!("{}", owner_type_line(&owner, kind.as_ref()));
        }
        Commands::Stats { repository } => {
            let repository_id = parse_repository(&repository)?;
            let client = GitHubClient::new(github_token, FetchConfig::default())?;

            let stats = client.fetch_repository_stats(&repository_id).await;
            print!("{}", repository_stats_markdown(&repository_id, &stats));
        }
    }

    Ok(())
}

fn parse_repository(input: &str) -> Result<RepositoryId> {
    RepositoryId::parse(input).map_err(|e| anyhow::anyhow!(e))
}
