use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use graildocs::commands::{self, DownloadsOptions};
use graildocs::platform::Visitor;
use graildocs::source::{BitbucketSource, DEFAULT_DOWNLOADS_URL};

/// graildocs - downloads page toolkit for the Grail website
///
/// Fetches the release listing from the downloads API and renders the
/// downloads section of the site, and resolves page requests the way the
/// site's front controller does.
///
/// Examples:
///   graildocs downloads --platform-string "Win64; x64"
///   graildocs resolve bibles
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Downloads API URL (defaults to the Grail Bitbucket downloads endpoint)
    #[arg(
        long = "api-url",
        value_name = "URL",
        env = "GRAILDOCS_API_URL",
        global = true
    )]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Build the downloads section from the release listing
    Downloads(DownloadsArgs),

    /// Resolve a page query value to a document or a redirect
    Resolve(ResolveArgs),
}

#[derive(clap::Args, Debug)]
pub struct DownloadsArgs {
    /// Visitor platform string (defaults to the build target)
    #[arg(long = "platform-string", value_name = "STRING")]
    pub platform_string: Option<String>,

    /// Text of the download buttons
    #[arg(long, value_name = "TEXT", default_value = "Download")]
    pub label: String,

    /// Output format: html or json
    #[arg(long, value_name = "FORMAT", default_value = "html")]
    pub format: String,

    /// Write the section to a file instead of stdout
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Page identifier from the query string
    #[arg(value_name = "PAGE")]
    pub page: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Downloads(args) => {
            let visitor = match &args.platform_string {
                Some(raw) => Visitor::from_platform_str(raw),
                None => Visitor::detect(),
            };
            let url = cli.api_url.as_deref().unwrap_or(DEFAULT_DOWNLOADS_URL);
            let source = BitbucketSource::new(reqwest::Client::new(), url);
            let options = DownloadsOptions {
                label: args.label,
                format: args.format.parse()?,
                output: args.output,
            };
            commands::downloads(&source, visitor, &options).await?
        }
        Commands::Resolve(args) => commands::resolve(args.page.as_deref())?,
    }
    Ok(())
}
