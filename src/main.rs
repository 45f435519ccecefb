use clap::{CommandFactory, Parser, Subcommand};
use hubfind::commands::{CodeCommand, Command, FindCommand, ListCommand};
use hubfind::utils::join_keywords;
use hubfind::{CommandContext, GitHubClient, Result, constants};
use std::{env, process};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hubfind")]
#[command(about = "A cli tool to search GitHub repositories and code")]
#[command(version)]
#[command(allow_external_subcommands = true)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all repositories for a user
    List {
        /// User or organization to list repos for (authenticated user if empty)
        #[arg(short, long, default_value = "")]
        user: String,

        /// GitHub API token (defaults to GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },

    /// Search go package git repositories for keywords
    Find {
        /// Keywords to search for
        keywords: Vec<String>,

        /// Don't restrict results to go language repos
        #[arg(short, long)]
        all: bool,

        /// GitHub API token (defaults to GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },

    /// Search file contents for keywords
    Code {
        /// Keywords to search for
        keywords: Vec<String>,

        /// Don't restrict results to go language repos
        #[arg(short, long)]
        all: bool,

        /// GitHub API token (defaults to GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },

    /// Unrecognized verb, ignored
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        // Request failures are reported on stdout, then the process stops
        println!("{}", err);
        process::exit(constants::exit::REQUEST_FAILED);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => print_usage(),
        Some(Commands::List { user, token }) => {
            let context = build_context(token);
            ListCommand { user }.execute(&context).await?;
        }
        Some(Commands::Find {
            keywords,
            all,
            token,
        }) => {
            if keywords.is_empty() {
                print_usage();
                return Ok(());
            }
            let context = build_context(token);
            FindCommand {
                keywords: join_keywords(&keywords),
                all_languages: all,
            }
            .execute(&context)
            .await?;
        }
        Some(Commands::Code {
            keywords,
            all,
            token,
        }) => {
            if keywords.is_empty() {
                print_usage();
                return Ok(());
            }
            let context = build_context(token);
            CodeCommand {
                keywords: join_keywords(&keywords),
                all_languages: all,
            }
            .execute(&context)
            .await?;
        }
        Some(Commands::External(args)) => match args.first().map(String::as_str) {
            Some("help") => print_usage(),
            verb => debug!(?verb, "ignoring unrecognized command"),
        },
    }

    Ok(())
}

/// Print the generated usage text to stderr
fn print_usage() {
    let mut cmd = Cli::command();
    eprintln!("{}", cmd.render_help());
}

/// Build the command context, resolving the token and API host
fn build_context(token: Option<String>) -> CommandContext {
    let token = token.or_else(|| env::var(constants::env::TOKEN).ok());
    let mut client = GitHubClient::new(token);
    if let Ok(base_url) = env::var(constants::env::API_URL) {
        client = client.with_base_url(base_url);
    }
    CommandContext { client }
}
