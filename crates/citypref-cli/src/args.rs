use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citypref
#[derive(Debug, Parser)]
#[command(
    name = "citypref",
    version,
    about = "Inspect and drive the city / business-type preference lists"
)]
pub struct CliArgs {
    /// Path to a JSON config file (seed lists, storage key, geolocation endpoint)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding persisted preferences (default: platform data dir)
    #[arg(short = 's', long = "store", global = true)]
    pub store: Option<PathBuf>,

    /// Never contact the geolocation service
    #[arg(long = "offline", global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show list sizes and the pinned city
    Stats,

    /// Print the city list in display order
    Cities,

    /// Print the business-type list
    BusinessTypes,

    /// Normalize the given tokens without touching any stored state
    Normalize {
        /// Tokens to normalize
        #[arg(required = true)]
        tokens: Vec<String>,

        /// Token to pin to the front
        #[arg(short = 'p', long = "prefer")]
        prefer: Option<String>,
    },

    /// Persist a city choice and print the resulting list
    Choose {
        /// City name (case-insensitive)
        city: String,
    },

    /// Forget the persisted city
    Forget,

    /// Guess the city from the public IP (skipped if a city is persisted)
    Locate,

    /// Replace the city list with the given tokens and print the result
    SetCities {
        tokens: Vec<String>,
    },

    /// Replace the business-type list with the given tokens and print the result
    SetBusinessTypes {
        tokens: Vec<String>,
    },
}
