//! citypref — command-line interface for citypref-core
//!
//! Drives the preference resolver against a directory-backed store, the
//! same way a browser client drives it against `localStorage`.
//!
//! Usage examples
//! --------------
//!
//! - Show list sizes and the pinned city
//!   $ citypref stats
//!
//! - Print the city list (pinned city first, then alphabetical)
//!   $ citypref cities
//!
//! - Pin a city for future runs, or forget it again
//!   $ citypref choose Vancouver
//!   $ citypref forget
//!
//! - Guess the city from the public IP address
//!   $ citypref locate
//!
//! - Try the normalizer on ad-hoc input
//!   $ citypref normalize Toronto toronto calgary --prefer ottawa
//!
//! Configuration
//! -------------
//!
//! `--config <file.json>` overrides seeds, storage key and geolocation
//! endpoint. `--store <dir>` picks where the preference file lives.
//! `RUST_LOG=debug` shows absorbed storage and network failures.
mod args;

use std::sync::Arc;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use citypref_core::prelude::*;
use clap::Parser;
use log::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => PrefConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PrefConfig::default(),
    };
    if args.offline {
        config = config.non_interactive();
    }

    let store = args
        .store
        .clone()
        .map(FileStore::new)
        .unwrap_or_default();
    debug!("using preference store at {}", store.dir().display());

    let resolver = resolver(&config)?;
    let prefs = PreferenceService::new(config, Arc::new(store), resolver);

    match args.command {
        Commands::Stats => {
            let stats = prefs.stats();
            println!("Preference lists:");
            println!("  Cities: {}", stats.cities);
            println!("  Business types: {}", stats.business_types);
            match stats.pinned {
                Some(city) => println!("  Pinned city: {city}"),
                None => println!("  Pinned city: (none)"),
            }
        }

        Commands::Cities => print_list(&prefs.cities()),

        Commands::BusinessTypes => print_list(&prefs.business_types()),

        Commands::Normalize { tokens, prefer } => {
            for token in normalize_list(&tokens, prefer.as_deref()) {
                println!("{token}");
            }
        }

        Commands::Choose { city } => {
            if prefs.choose_city(&city) {
                print_list(&prefs.cities());
            } else {
                eprintln!("Refusing to pin an empty city name");
            }
        }

        Commands::Forget => {
            prefs.forget_city();
            println!("Forgot persisted city");
        }

        Commands::Locate => match prefs.resolve_location().await {
            LocationOutcome::Pinned(city) => {
                println!("Located: {city}");
                print_list(&prefs.cities());
            }
            LocationOutcome::Skipped(reason) => {
                println!("Location lookup skipped: {}", describe_skip(reason));
            }
            LocationOutcome::Failed(e) => {
                eprintln!("Location lookup failed: {e}");
            }
        },

        Commands::SetCities { tokens } => {
            if prefs.set_cities(&tokens) {
                print_list(&prefs.cities());
            } else {
                eprintln!("No cities given, list unchanged");
            }
        }

        Commands::SetBusinessTypes { tokens } => {
            if prefs.set_business_types(&tokens) {
                print_list(&prefs.business_types());
            } else {
                eprintln!("No business types given, list unchanged");
            }
        }
    }

    Ok(())
}

fn resolver(config: &PrefConfig) -> anyhow::Result<Arc<dyn LocationResolver>> {
    #[cfg(feature = "http")]
    {
        let http = HttpLocationResolver::from_config(config)?;
        Ok(Arc::new(http))
    }
    #[cfg(not(feature = "http"))]
    {
        let _ = config;
        Ok(Arc::new(NoopResolver))
    }
}

fn print_list(view: &ListView) {
    let pinned = view.pinned();
    for (i, token) in view.iter().enumerate() {
        let mark = if i == 0 && pinned.is_some() { "*" } else { " " };
        println!("{mark} {token}");
    }
}

fn describe_skip(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::NonInteractive => "running offline",
        SkipReason::Persisted => "a city is already persisted (use `forget` first)",
        SkipReason::AlreadyStarted => "already resolved in this session",
    }
}
