use clap::{Parser, Subcommand, ValueEnum};
use skein::prelude::*;
use std::fs;
use std::process::ExitCode;

/// CLI-specific provider enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProviderCli {
    Openai,
    Gemini,
}

impl From<ProviderCli> for Provider {
    fn from(value: ProviderCli) -> Self {
        match value {
            ProviderCli::Openai => Provider::OpenAi,
            ProviderCli::Gemini => Provider::Gemini,
        }
    }
}

/// Workflow document studio toolbox: inspect, canonicalize, and generate
/// workflow JSON documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a workflow file and print a summary of its presentation graph
    Inspect {
        /// Path to the workflow JSON file
        path: String,
    },
    /// Parse a workflow file and print its canonical pretty-printed form
    Export {
        /// Path to the workflow JSON file
        path: String,
    },
    /// Print a randomly chosen built-in demo workflow
    Demo,
    /// Generate a workflow from a natural language prompt
    ///
    /// Reads the API key from OPENAI_API_KEY or GEMINI_API_KEY.
    Generate {
        /// Description of the automation to build
        prompt: String,
        /// Generation provider
        #[arg(long, value_enum, default_value = "openai")]
        provider: ProviderCli,
        /// Override the provider's default model
        #[arg(long)]
        model: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Inspect { path } => inspect(&path),
        Command::Export { path } => export(&path),
        Command::Demo => demo(),
        Command::Generate {
            prompt,
            provider,
            model,
        } => generate(&prompt, provider.into(), model),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_document(path: &str) -> Result<WorkflowDocument> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text)?)
}

fn inspect(path: &str) -> Result<()> {
    let document = load_document(path)?;
    let graph = project(&document);

    println!("Workflow: {}", document.name);
    println!(
        "  {} node(s), {} edge(s), active: {}",
        graph.nodes.len(),
        graph.edges.len(),
        document.active
    );
    for node in &graph.nodes {
        let marker = if node.disabled { " [disabled]" } else { "" };
        println!(
            "  node {:<16} {:<24} ({}, {}){}",
            node.id, node.label, node.x, node.y, marker
        );
    }
    for edge in &graph.edges {
        println!("  edge {} -> {} ({})", edge.source, edge.target, edge.id);
    }
    Ok(())
}

fn export(path: &str) -> Result<()> {
    let document = load_document(path)?;
    println!("{}", serialize(&document)?);
    Ok(())
}

fn demo() -> Result<()> {
    let mut store = WorkflowStore::new();
    store.load_demo();
    println!("{}", store.export_text()?);
    Ok(())
}

fn generate(prompt: &str, provider: Provider, model: Option<String>) -> Result<()> {
    let env_var = match provider {
        Provider::OpenAi => "OPENAI_API_KEY",
        Provider::Gemini => "GEMINI_API_KEY",
    };
    let api_key = std::env::var(env_var).unwrap_or_default();

    let mut config = ProviderConfig::new(provider, api_key);
    if let Some(model) = model {
        config = config.with_model(model);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let document = runtime.block_on(async {
        let gateway = HttpGateway::new();
        gateway.generate(prompt, &config).await
    })?;

    println!("{}", serialize(&document)?);
    Ok(())
}
