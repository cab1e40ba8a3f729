//! Veracity CLI
//!
//! Classifies one news article per invocation against a local Ollama
//! endpoint and prints the verdict as JSON. The endpoint must already be
//! running with the named model pulled.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use veracity_client::{
    ClientConfig, HeuristicClassifier, LlmClassifier, NewsClassifier, OllamaProvider,
};
use veracity_core::Article;

#[derive(Parser, Debug)]
#[command(name = "veracity")]
#[command(about = "Fake news classification via a local Ollama model", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "veracity.yaml")]
    config: String,

    /// Inference endpoint base URL
    #[arg(short, long, env = "OLLAMA_URL")]
    url: Option<String>,

    /// Model name (must be pulled on the endpoint)
    #[arg(short, long, env = "OLLAMA_MODEL")]
    model: Option<String>,

    /// Article title
    #[arg(short, long, default_value = "")]
    title: String,

    /// Article content (mutually exclusive with --file)
    #[arg(long, conflicts_with = "file")]
    content: Option<String>,

    /// Read article content from a file
    #[arg(short, long)]
    file: Option<String>,

    /// Fall back to the offline heuristic when the endpoint is unreachable
    #[arg(long)]
    fallback: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let content = match (&cli.content, &cli.file) {
        (Some(content), None) => content.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read article from {path}"))?,
        _ => bail!("provide the article via --content or --file"),
    };
    let article = Article::new(cli.title.clone(), content);

    let mut config = ClientConfig::load(&cli.config)?;
    if let Some(url) = cli.url {
        config.base_url = url;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }

    info!(endpoint = %config.base_url, model = %config.model, "classifying article");

    let provider = OllamaProvider::new(&config)?;
    let classifier = LlmClassifier::new(Box::new(provider))?;

    let result = match classifier.classify(&article).await {
        Ok(result) => result,
        Err(err) if err.is_inference_unavailable() && cli.fallback => {
            warn!(%err, "inference endpoint unavailable, using heuristic fallback");
            HeuristicClassifier::new()?.classify(&article).await?
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("veracity=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("veracity=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
