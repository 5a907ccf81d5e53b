//! ADS4GPTs command-line client.
//!
//! Fetches banner or chat ads for a context and prints the tool definitions
//! handed to LLM providers.

use ads4gpts_async::types::AdSurface;
use ads4gpts_async::{Ads4GptsConfig, RetryOn, RetryPolicy};
use ads4gpts_tools::{Ads4GptsToolkit, AdToolInput, BannerAdsTool, ChatAdsTool, Tool, ToolContext};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ads4gpts", version, about = "Fetch ads from the ADS4GPTs API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Load .env from current directory
    #[arg(long = "dot-env", global = true)]
    dot_env: bool,

    #[command(flatten)]
    client: ClientArgs,
}

#[derive(Args)]
struct ClientArgs {
    /// API key (falls back to ADS4GPTS_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API base URL (falls back to ADS4GPTS_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Total attempts per request, including the first
    #[arg(long, global = true, default_value_t = ads4gpts_async::retry::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Base backoff in seconds; attempt n waits factor * 2^(n-1)
    #[arg(long, global = true, default_value_t = ads4gpts_async::retry::DEFAULT_BACKOFF_FACTOR)]
    backoff_factor: f64,

    /// Only retry timeouts, connection errors and 408/409/429/5xx responses
    #[arg(long, global = true)]
    transient_only: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch banner ads
    Banner(FetchArgs),
    /// Fetch chat ads
    Chat(FetchArgs),
    /// Print tool definitions for a provider
    Schemas {
        /// Provider whose tool format to render
        #[arg(long, value_enum, default_value_t = Provider::Openai)]
        provider: Provider,

        /// Render OpenAI functions in strict mode
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Args)]
struct FetchArgs {
    /// Conversation context the ads should fit
    #[arg(long)]
    context: String,

    /// Number of ads to retrieve
    #[arg(long, default_value_t = 1)]
    num_ads: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum Provider {
    Openai,
    Anthropic,
    Mcp,
}

impl ClientArgs {
    fn toolkit(&self) -> Result<Ads4GptsToolkit> {
        let config = Ads4GptsConfig::new().with_api_key_opt(self.api_key.clone());
        let config = match &self.base_url {
            Some(base) => config.with_api_base(base),
            None => config,
        };
        let mut policy = RetryPolicy::new(self.max_attempts, self.backoff_factor);
        if self.transient_only {
            policy = policy.with_retry_on(RetryOn::Transient);
        }
        Ads4GptsToolkit::from_config(config, policy).context("failed to set up ads client")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dot_env {
        let _ = dotenvy::dotenv(); // missing .env is fine
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "ads4gpts=info,ads4gpts_async=info,ads4gpts_tools=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Banner(args) => fetch(&cli.client.toolkit()?, AdSurface::Banner, args).await,
        Commands::Chat(args) => fetch(&cli.client.toolkit()?, AdSurface::Chat, args).await,
        Commands::Schemas { provider, strict } => {
            // Definitions never reach the API, so no key is required.
            let toolkit = Ads4GptsToolkit::definitions_only();
            let tools = match provider {
                Provider::Openai => toolkit.openai_tools(strict),
                Provider::Anthropic => toolkit.anthropic_tools(),
                Provider::Mcp => toolkit.mcp_tools(),
            };
            println!("{}", serde_json::to_string_pretty(&tools)?);
            Ok(())
        }
    }
}

async fn fetch(toolkit: &Ads4GptsToolkit, surface: AdSurface, args: FetchArgs) -> Result<()> {
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupted, cancelling request");
            on_signal.cancel();
        }
    });

    let tool = match surface {
        AdSurface::Banner => BannerAdsTool::NAME,
        AdSurface::Chat => ChatAdsTool::NAME,
    };
    let input = serde_json::to_value(AdToolInput::new(args.context, args.num_ads))?;
    let ads = toolkit
        .execute_tool(tool, input, &ToolContext::with_cancellation(cancel))
        .await?;

    println!("{}", serde_json::to_string_pretty(&ads)?);
    Ok(())
}
