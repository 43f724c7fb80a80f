//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod language_list;
pub mod serve;
pub mod settings;
pub mod translate;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::cli::language_list::list_languages;
use crate::cli::serve::run_serve;
use crate::cli::settings::{set_at, unset_at, SettingRegistry};
use crate::cli::translate::run_translate;
use crate::core::backend::{EmbeddedBackend, ProxyClient, TranslationBackend};
use crate::core::config::data::Config;
use crate::proxy::settings::SettingsSource;
use crate::proxy::Forwarder;
use crate::ui::translate_loop::{run_translator, TranslatorOptions};
use crate::utils::logging::{init_logging, LogTarget};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ")\nrustc ",
    env!("VERGEN_RUSTC_SEMVER"),
    "\ntarget ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

#[derive(Parser)]
#[command(name = "autotranslate")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Translate as you type, through a small chat-completion proxy")]
#[command(
    long_about = "autotranslate pairs a terminal translator with a proxy server. The translator \
waits for a quiet pause in your typing, then asks the proxy for a translation; the proxy fills \
in model defaults, attaches the upstream credential, and relays the answer.\n\n\
Environment Variables (read by the proxy):\n\
  UPSTREAM_API_URL  Base URL of the chat-completion service\n\
  UPSTREAM_API_KEY  Bearer credential for that service\n\n\
Controls:\n\
  Type              Edit the source text\n\
  Ctrl+S            Swap languages\n\
  Ctrl+F / Ctrl+T   Cycle the source / target language\n\
  Ctrl+L            Clear the input\n\
  Ctrl+C / Esc      Quit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Where translation requests are sent.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct BackendArgs {
    /// Proxy base URL (defaults to the configured proxy-url)
    #[arg(long, value_name = "URL", conflicts_with = "embedded")]
    pub proxy_url: Option<String>,

    /// Run the proxy logic in-process instead of calling a proxy over HTTP
    #[arg(long)]
    pub embedded: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the translation proxy server
    Serve {
        /// Address to bind (defaults to the configured listen address)
        #[arg(long, value_name = "ADDR")]
        listen: Option<String>,
    },
    /// Start the interactive translator (default)
    Tui {
        /// Source language code
        #[arg(long = "from", value_name = "CODE")]
        from: Option<String>,
        /// Target language code
        #[arg(long = "to", value_name = "CODE")]
        to: Option<String>,
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Translate text once and print the result
    Translate {
        /// Source language code
        #[arg(long = "from", value_name = "CODE")]
        from: Option<String>,
        /// Target language code
        #[arg(long = "to", value_name = "CODE")]
        to: Option<String>,
        #[command(flatten)]
        backend: BackendArgs,
        /// Text to translate
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// List supported languages
    Languages,
    /// Set configuration values, or show them when no key is given
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Tui {
        from: None,
        to: None,
        backend: BackendArgs::default(),
    });

    let log_target = match (&args.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        // Anything on stderr would tear through the alternate screen.
        (None, Commands::Tui { .. }) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    init_logging(args.verbose, log_target)?;

    match command {
        Commands::Serve { listen } => {
            let config = Config::load()?;
            run_serve(&config, listen.as_deref()).await
        }
        Commands::Tui { from, to, backend } => {
            let config = Config::load()?;
            let options = TranslatorOptions {
                source_language: from.unwrap_or_else(|| config.source_language().to_string()),
                target_language: to.unwrap_or_else(|| config.target_language().to_string()),
                scheduler: config.scheduler_options(),
            };
            run_translator(build_backend(&config, &backend), options).await
        }
        Commands::Translate {
            from,
            to,
            backend,
            text,
        } => {
            let config = Config::load()?;
            let source_language = from.unwrap_or_else(|| config.source_language().to_string());
            let target_language = to.unwrap_or_else(|| config.target_language().to_string());
            let model = config.scheduler_options().model;
            let backend = build_backend(&config, &backend);
            let code = run_translate(
                backend.as_ref(),
                &source_language,
                &target_language,
                &text.join(" "),
                &model,
            )
            .await;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Languages => {
            list_languages();
            Ok(())
        }
        Commands::Set { key, value } => {
            let config_path = Config::get_config_path()?;
            let registry = SettingRegistry::new();
            match key {
                None => {
                    let config = Config::load_from_path(&config_path)?;
                    registry.print_all(&config);
                }
                Some(key) => report(set_at(&registry, &config_path, &key, &value)),
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let config_path = Config::get_config_path()?;
            let registry = SettingRegistry::new();
            report(unset_at(&registry, &config_path, &key));
            Ok(())
        }
    }
}

fn report(result: Result<String, settings::SettingError>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    }
}

/// Pick the backend for client commands.
pub fn build_backend(config: &Config, args: &BackendArgs) -> Arc<dyn TranslationBackend> {
    if args.embedded {
        let forwarder = Forwarder::new(config.payload_defaults(), SettingsSource::environment());
        Arc::new(EmbeddedBackend::new(forwarder))
    } else {
        let proxy_url = args.proxy_url.as_deref().unwrap_or(config.proxy_url());
        Arc::new(ProxyClient::new(proxy_url))
    }
}

#[cfg(test)]
mod tests;
