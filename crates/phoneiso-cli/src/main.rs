//! phoneiso-cli: command-line interface for phoneiso-core
//!
//! Usage examples
//! --------------
//!
//! - Classify a number
//!   $ phoneiso number 4566118311
//!
//! - Country and operator of a network code
//!   $ phoneiso network 238 1
//!
//! - Calling codes of a country
//!   $ phoneiso prefixes CA
//!
//! - Operators by name
//!   $ phoneiso operators telia
//!
//! Data source
//! -----------
//!
//! By default the compiled-in tables are used. `--dataset <path>` points to
//! an authored `.json`/`.json.gz` dataset or a snapshot written by
//! `phoneiso compile`. Set `RUST_LOG=debug` to see how the tables are built.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use phoneiso_core::{Dataset, PhoneDb};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let dataset = match &args.dataset {
        Some(path) => Dataset::load_from_path(path)?,
        None => Dataset::builtin(),
    };
    let db = PhoneDb::from_dataset(&dataset)?;
    log::debug!("using dataset {}", db.version());

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset version: {}", db.version());
            println!("  E.164 prefixes: {}", stats.prefixes);
            println!("  E.164 exceptions: {}", stats.exceptions);
            println!("  E.212 MCCs: {}", stats.mccs);
            println!("  E.212 networks: {}", stats.networks);
        }

        Commands::Number { digits } => match db.e164().lookup_str(&digits) {
            "" => println!("-"),
            country => println!("{country}"),
        },

        Commands::Network { mcc, mnc } => {
            let country = db.e212().lookup(mcc, mnc);
            if country.is_empty() {
                eprintln!("No country for MCC {mcc}");
                return Ok(());
            }
            println!("Country: {country}");
            match db.e212().network(mcc, mnc) {
                Some(n) if !n.operator.is_empty() => println!("Operator: {}", n.operator),
                Some(_) => println!("Operator: (registered, no name recorded)"),
                None => println!("Operator: (not registered)"),
            }
        }

        Commands::Prefixes { iso2 } => {
            let prefixes = db.e164().prefixes_for_country(&iso2);
            if prefixes.is_empty() {
                eprintln!("No prefixes for {iso2}");
            }
            for (prefix, exception) in prefixes {
                if exception {
                    println!("+{prefix} (exception)");
                } else {
                    println!("+{prefix}");
                }
            }
        }

        Commands::Mcc { mcc } => {
            let country = db.e212().country_for_mcc(mcc);
            if country.is_empty() {
                eprintln!("MCC {mcc} not found");
                return Ok(());
            }
            println!("MCC {mcc}: {country}");
            for n in db.e212().networks_for_mcc(mcc) {
                println!("- {:03} {} {}", n.mnc, n.country, n.operator);
            }
        }

        Commands::Operators { query } => {
            let matches = db.e212().find_networks_by_operator(&query);
            if matches.is_empty() {
                println!("No operators found matching: {query}");
            } else {
                for n in matches {
                    println!("{}-{:02} {}: {}", n.mcc, n.mnc, n.country, n.operator);
                }
            }
        }

        #[cfg(feature = "builder")]
        Commands::Compile { output } => {
            dataset.save_as(&output)?;
            println!("Wrote {} to {output}", db.version());
        }
    }

    Ok(())
}
