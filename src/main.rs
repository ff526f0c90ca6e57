//! paste-input-probe - diagnostic CLI for the paste-input plugin.
//!
//! Runs one clipboard check against the real OS clipboard over either
//! transport variant and prints the result.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use paste_input::config::{Config, TransportVariant};
use paste_input::{EventChannel, HostApi, SystemClipboard};

/// Command-line arguments for paste-input-probe
#[derive(Parser, Debug)]
#[command(name = "paste-input-probe")]
#[command(version, about = "Clipboard paste-input probe", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Transport variant override (stub-api|event-channel)
    #[arg(short, long)]
    pub transport: Option<String>,

    /// Sweep staged temp files and exit
    #[arg(long)]
    pub sweep: bool,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long, default_value = "compact")]
    pub log_format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args);

    info!(
        "paste-input-probe v{} (built {}, commit {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_DATE"),
        env!("GIT_HASH")
    );

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let stage = config.stage();

    if args.sweep || config.staging.sweep_on_start {
        info!("sweeping staged temp files in {}", stage.dir().display());
        stage.sweep();
        if args.sweep {
            return Ok(());
        }
    }

    let variant = match args.transport.as_deref() {
        Some("stub-api") => TransportVariant::StubApi,
        Some("event-channel") => TransportVariant::EventChannel,
        Some(other) => anyhow::bail!("unknown transport variant: {}", other),
        None => config.transport.variant,
    };

    let source = SystemClipboard::new()?;

    match variant {
        TransportVariant::StubApi => {
            let api = HostApi::with_stage(source, stage);
            println!("platform: {}", api.get_platform_version());

            let content = api.get_clipboard_content();
            if content.is_empty() {
                println!("clipboard: empty / unsupported");
            }
            for item in content.items() {
                println!("item: {} ({} bytes)", item.mime_type(), item.payload().len());
            }
        }
        TransportVariant::EventChannel => {
            let mut channel = EventChannel::with_stage(source, stage);
            channel.start_listening(Box::new(|event| {
                println!("event: {}", serde_json::to_string(event).unwrap_or_default());
            }));
            channel.handle_call("checkClipboard");
        }
    }

    Ok(())
}

fn init_logging(args: &Args) {
    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "paste_input={level},paste_input_core={level},warn",
            level = log_level
        ))
    });

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    match args.log_format.as_str() {
        "json" => builder.json().init(),
        "pretty" => builder.pretty().init(),
        _ => builder.compact().init(),
    }
}
