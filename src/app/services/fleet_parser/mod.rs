//! Record parser for the fleet list
//!
//! Turns the raw delimited text of the fleet list into an ordered sequence of
//! [`Bus`](crate::models::Bus) records. Ingestion is best-effort: a malformed
//! line is dropped, never reported as an error, and the only trace it leaves
//! is a counter in [`ParseStats`].
//!
//! ## Architecture
//!
//! - [`parser`] - Line splitting, header skipping and result assembly
//! - [`record_parser`] - Validation and field mapping of a single line
//! - [`stats`] - Drop diagnostics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use fleet_list::app::services::fleet_parser::FleetParser;
//!
//! let text = "Depot,Fleet,Reg,Make,Model,Operator,AC,Service,Date,Status\n\
//!             Adyar,101,TN01AB1234,Ashok,Viking,MTC,Yes,AC,2020-01-01,Active\n";
//! let result = FleetParser::new().parse(text);
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.stats.records_dropped(), 0);
//! ```

pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use parser::{FleetParser, parse_fleet_data};
pub use record_parser::DropReason;
pub use stats::{DropCounts, ParseResult, ParseStats};
