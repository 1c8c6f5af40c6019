use clap::{Parser, Subcommand};

/// CLI arguments for phoneiso-cli
#[derive(Debug, Parser)]
#[command(
    name = "phoneiso",
    version,
    about = "Classify E.164 numbers and E.212 network codes into ISO-3166 country codes"
)]
pub struct CliArgs {
    /// Path to an external dataset (.json, .json.gz, or a compiled snapshot).
    /// Defaults to the compiled-in tables.
    #[arg(short = 'd', long = "dataset", global = true)]
    pub dataset: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show table sizes and dataset version
    Stats,

    /// Country of an international number (digits only, no '+')
    Number {
        /// e.g. 4566118311
        digits: String,
    },

    /// Country and operator name of an MCC/MNC pair
    Network {
        /// Mobile Country Code (e.g. 238)
        mcc: u16,
        /// Mobile Network Code (e.g. 1)
        mnc: u16,
    },

    /// Calling-code prefixes and exceptions owned by a country
    Prefixes {
        /// ISO2 code of the country
        iso2: String,
    },

    /// Registered networks under an MCC
    Mcc {
        /// Mobile Country Code (e.g. 340)
        mcc: u16,
    },

    /// Search operators by name (case- and accent-insensitive)
    Operators {
        /// Substring to search
        query: String,
    },

    /// Write the active dataset as a bincode snapshot (.gz for gzip)
    #[cfg(feature = "builder")]
    Compile {
        /// Output path
        output: String,
    },
}
