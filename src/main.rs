use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use seminar_kit_lib::config::{self, KitConfig};
use seminar_kit_lib::file_storage::ArtifactStore;
use seminar_kit_lib::server::{self, ServerAppState};
use seminar_kit_lib::shutdown::{self, ShutdownState};
use seminar_kit_lib::text_source::{OfflineTextSource, OpenAiTextSource, TextSource};
use seminar_kit_lib::{kit, GenerationRequest};
use std::path::PathBuf;
use std::sync::Arc;

/// Seminar Kit - turn a topic into a slide deck, a report and a Q&A sheet
#[derive(Parser, Debug)]
#[command(name = "seminar-kit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.seminar-kit/config.toml when present)
    #[arg(long, global = true, env = "SEMINAR_KIT_CONFIG")]
    config: Option<PathBuf>,

    /// Directory generated files are written to (overrides config)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Skip the text provider and use the built-in fallback content
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to bind the server to (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind the server to (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Generate one seminar kit and print the file paths as JSON
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long)]
    topic: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    roll: String,
    #[arg(long)]
    college: String,
    #[arg(long)]
    semester: String,
    #[arg(long)]
    branch: String,
}

impl From<GenerateArgs> for GenerationRequest {
    fn from(args: GenerateArgs) -> Self {
        GenerationRequest {
            topic: args.topic,
            name: args.name,
            roll: args.roll,
            college: args.college,
            semester: args.semester,
            branch: args.branch,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = config::load_config_or_default(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    // The provider's blocking HTTP client must be built (and finally dropped)
    // outside the tokio runtime, so it lives here in main.
    let source = create_text_source(&config, cli.offline)?;

    match cli.command {
        Command::Serve { port, bind } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            run_server_mode(config, source.clone())
        }
        Command::Generate(args) => generate_once(&config, source.as_ref(), args.into()),
    }
}

fn create_text_source(config: &KitConfig, offline: bool) -> Result<Arc<dyn TextSource>> {
    if offline {
        log::info!("Offline mode: using built-in fallback content");
        return Ok(Arc::new(OfflineTextSource));
    }

    let source = OpenAiTextSource::from_config(&config.provider)
        .context("Failed to create text provider client")?;
    log::info!("Using text provider at {}", source.endpoint());
    Ok(Arc::new(source))
}

fn run_server_mode(config: KitConfig, source: Arc<dyn TextSource>) -> Result<()> {
    let store = ArtifactStore::open(&config.output_dir).with_context(|| {
        format!(
            "Failed to open output directory {}",
            config.output_dir.display()
        )
    })?;

    let shutdown_state = ShutdownState::new();
    if let Err(e) = shutdown::register_signal_handlers(shutdown_state.clone()) {
        log::warn!("Failed to register signal handlers: {}", e);
    }

    let state = ServerAppState::new(config, store, source, shutdown_state);

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(server::run_server(state))
        .map_err(anyhow::Error::msg)?;

    log::info!("Server stopped");
    Ok(())
}

fn generate_once(
    config: &KitConfig,
    source: &dyn TextSource,
    request: GenerationRequest,
) -> Result<()> {
    let store = ArtifactStore::open(&config.output_dir).with_context(|| {
        format!(
            "Failed to open output directory {}",
            config.output_dir.display()
        )
    })?;

    let result = kit::generate_kit(&request, source, &config.provider, &store)?;

    let output = serde_json::json!({
        "pptx": store.dir().join(&result.pptx),
        "docx": store.dir().join(&result.docx),
        "qna": store.dir().join(&result.qna),
        "details": result.details,
        "sections_origin": result.sections_origin,
        "qna_origin": result.qna_origin,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
