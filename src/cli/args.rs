//! Command-line argument definitions for the fleet list viewer
//!
//! This module defines the CLI interface using the clap derive API.
//! Global options (source, config, verbosity, output format) apply to every
//! subcommand.

use crate::app::services::aggregator::GroupKey;
use crate::app::services::query::RecordSortField;
use crate::models::SortDirection;
use crate::{FleetError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the fleet list viewer
///
/// Loads a bus fleet inventory and prints dashboard figures, depot pivots
/// and paged searches over it.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fleet_list",
    version,
    about = "Browse a bus fleet inventory: summaries, pivots and searches",
    long_about = "Loads the comma-delimited fleet list of a bus operator from a file or URL \
                  and derives dashboard statistics, depot by service-type pivot tables, \
                  filtered and paged record listings, and the data context used by the \
                  fleet analysis assistant."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Fleet list location (file path or http(s) URL)
    ///
    /// Overrides the config file and the FLEET_LIST_SOURCE environment variable.
    #[arg(
        short = 's',
        long = "source",
        value_name = "PATH|URL",
        global = true,
        help = "Fleet list file path or http(s) URL"
    )]
    pub source: Option<String>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/fleet_list/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Also hides the fetch spinner.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Dashboard figures and service-type distribution
    Summary,
    /// Cross-tabulate two fields (depot by service type by default)
    Pivot(PivotArgs),
    /// Search, filter, sort and page through the fleet
    Search(SearchArgs),
    /// Distinct depots and service types available as filters
    Options,
    /// Data context handed to the fleet analysis assistant
    Context(ContextArgs),
}

#[derive(Debug, Clone, Default, Parser)]
pub struct PivotArgs {
    #[arg(long = "rows", value_name = "FIELD", help = "Field grouped into rows")]
    pub rows: Option<GroupKey>,

    #[arg(long = "columns", value_name = "FIELD", help = "Field grouped into columns")]
    pub columns: Option<GroupKey>,

    /// Row ordering: `name`, `total` or a column label such as `AC`
    #[arg(long = "sort", value_name = "KEY", help = "Sort rows by name, total or a column")]
    pub sort: Option<String>,

    #[arg(long = "direction", value_name = "DIR", help = "Sort direction (asc or desc)")]
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Case-insensitive match on registration number, fleet number or make
    #[arg(long = "search", value_name = "TEXT", help = "Free-text search")]
    pub search: Option<String>,

    #[arg(long = "depot", value_name = "DEPOT", help = "Only buses of this depot")]
    pub depot: Option<String>,

    #[arg(long = "service", value_name = "TYPE", help = "Only buses of this service type")]
    pub service_type: Option<String>,

    #[arg(long = "sort-by", value_name = "FIELD", help = "Sort records by field")]
    pub sort_by: Option<RecordSortField>,

    #[arg(
        long = "direction",
        value_name = "DIR",
        default_value = "asc",
        help = "Sort direction (asc or desc)"
    )]
    pub direction: SortDirection,

    #[arg(long = "page", value_name = "N", default_value_t = 1, help = "Page to show (1-indexed)")]
    pub page: usize,

    /// Rows per page; defaults to the configured page size (25)
    #[arg(long = "page-size", value_name = "N", help = "Rows per page (25, 50 or 100 suggested)")]
    pub page_size: Option<usize>,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            search: None,
            depot: None,
            service_type: None,
            sort_by: None,
            direction: SortDirection::Asc,
            page: 1,
            page_size: None,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct ContextArgs {
    /// Question the assistant is asked about the fleet
    #[arg(long = "query", value_name = "TEXT", help = "Question to build the context for")]
    pub query: String,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(FleetError::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(Commands::Search(search)) = &self.command {
            if search.page_size == Some(0) {
                return Err(FleetError::invalid_argument(
                    "Page size must be greater than 0",
                ));
            }
        }

        Ok(())
    }

    /// Log level requested on the command line, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Check if we should show the fetch spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
