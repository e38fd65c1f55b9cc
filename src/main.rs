use clap::Parser;
use fleet_list::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result: anyhow::Result<()> = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result.map_err(anyhow::Error::from),
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => Err(anyhow::anyhow!("Interrupted by user")),
                Err(e) => Err(anyhow::Error::from(e).context("Failed to listen for CTRL+C")),
            },
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Fleet List - Bus Fleet Inventory Viewer");
    println!("=======================================");
    println!();
    println!("USAGE:");
    println!("    fleet_list [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    summary     Dashboard figures and service-type distribution");
    println!("    pivot       Depot by service-type table (fields configurable)");
    println!("    search      Search, filter, sort and page through the fleet");
    println!("    options     Depots and service types available as filters");
    println!("    context     Data context for the fleet analysis assistant");
    println!();
    println!("OPTIONS:");
    println!("    -s, --source <PATH|URL>   Fleet list location (default ./FleetList.csv)");
    println!("    -c, --config <FILE>       Configuration file (TOML)");
    println!("        --format <FORMAT>     human, json or csv");
    println!("    -h, --help                Show help information");
    println!();
    println!("EXAMPLES:");
    println!("    fleet_list summary");
    println!("    fleet_list pivot --sort AC --direction desc");
    println!("    fleet_list search --depot Adyar --sort-by fleet-number --page 2");
    println!("    fleet_list --format json context --query \"electric buses in Tambaram\"");
}
