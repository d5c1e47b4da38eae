mod commands;
mod console;
mod i18n;
mod voice;

#[cfg(test)]
mod test_support;

use clap::{Parser, Subcommand};
use console::{ConsoleNavigator, ConsoleNotifier, ConsoleSpeaker};
use i18n::{Localizer, TranslationTable};
use kisan_core::config::{self, Config};
use kisan_core::error::KisanError;
use kisan_memory::Store;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};
use voice::{MockTranscriber, VoiceRouter, VoiceSession};

#[derive(Parser)]
#[command(
    name = "kisan",
    version,
    about = "Kisan AI: multilingual farmer assistant core"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported languages.
    Languages,
    /// Show the active language, or change it.
    Language {
        /// Two-letter code (hi, en, kn, ta, te, mr, bn, gu).
        code: Option<String>,
    },
    /// Resolve a translation key in the active language.
    Translate {
        key: String,
        /// Text returned when the key is unknown (defaults to the key).
        #[arg(long)]
        fallback: Option<String>,
    },
    /// List every translation key.
    Keys,
    /// Route a transcript as a voice command.
    Voice {
        /// What the user said.
        #[arg(trailing_var_arg = true)]
        transcript: Vec<String>,
    },
    /// Run one voice session with the mock transcriber.
    Listen,
}

/// `RUST_LOG` when set, otherwise `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Load the config under a scoped subscriber. The global one is configured
/// from the result, so it cannot exist yet.
fn load_config<W>(path: &str, filter: EnvFilter, writer: W) -> Result<Config, KisanError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let startup = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(startup, || config::load(path))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = load_config(&cli.config, env_filter("info"), std::io::stderr)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&cfg.kisan.log_level))
        .with_writer(std::io::stderr)
        .init();

    let mut table = TranslationTable::bundled();
    i18n::load_overlay(&mut table, &cfg.overlay_path());
    info!("{}: {} translation keys loaded", cfg.kisan.name, table.len());

    let store = Store::new(&cfg.memory).await?;
    let mut localizer = Localizer::load(Arc::new(table), &store, &cfg.language).await;

    let navigator = Arc::new(ConsoleNavigator::new());
    let router = VoiceRouter::new(
        Arc::new(ConsoleSpeaker::new(cfg.voice.speech_enabled)),
        navigator.clone(),
        Arc::new(ConsoleNotifier),
        cfg.voice.notice_duration_ms,
    );

    match cli.command {
        Commands::Languages => println!("{}", commands::handle_languages(&localizer)),
        Commands::Language { code } => {
            let out = commands::handle_language(&mut localizer, &store, code.as_deref()).await;
            println!("{out}");
        }
        Commands::Translate { key, fallback } => {
            println!(
                "{}",
                commands::handle_translate(&localizer, &key, fallback.as_deref())
            );
        }
        Commands::Keys => println!("{}", commands::handle_keys(&localizer)),
        Commands::Voice { transcript } => {
            if transcript.is_empty() {
                anyhow::bail!("no transcript provided. Usage: kisan voice <words>");
            }
            let intent =
                commands::handle_voice(&router, &localizer, &transcript.join(" ")).await;
            info!("voice: {intent:?}, screen now {}", navigator.current());
        }
        Commands::Listen => {
            let session = VoiceSession::new(
                Arc::new(MockTranscriber),
                Arc::new(ConsoleNotifier),
                router,
                cfg.voice.notice_duration_ms,
            );
            if let Some(intent) = commands::handle_listen(&session, &localizer, &[]).await {
                info!("voice: {intent:?}, screen now {}", navigator.current());
            }
        }
    }

    Ok(())
}
