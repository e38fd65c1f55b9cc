//! Application constants for the fleet list
//!
//! This module contains the record format definition, default values,
//! and the fixed service-type groupings used by the dashboard.

// =============================================================================
// Record Format
// =============================================================================

/// Field delimiter of the fleet list. No quoting or escaping is supported.
pub const FIELD_DELIMITER: char = ',';

/// Minimum number of fields a data line needs to become a record
pub const EXPECTED_FIELD_COUNT: usize = 10;

/// Source column order (positional, header line is ignored)
pub mod columns {
    pub const DEPOT: usize = 0;
    pub const FLEET_NUMBER: usize = 1;
    pub const REGISTRATION_NUMBER: usize = 2;
    pub const MAKE: usize = 3;
    pub const MODEL: usize = 4;
    pub const OPERATOR: usize = 5;
    pub const IS_AC: usize = 6;
    pub const SERVICE_TYPE: usize = 7;
    pub const REGISTRATION_DATE: usize = 8;
    pub const STATUS: usize = 9;
}

/// Lowercase token that marks an air-conditioned bus
pub const AFFIRMATIVE_TOKEN: &str = "yes";

/// Prefix of synthetic record identifiers (`bus-<line index>`)
pub const RECORD_ID_PREFIX: &str = "bus-";

// =============================================================================
// Source and Paging Defaults
// =============================================================================

/// Default location of the fleet list
pub const DEFAULT_SOURCE: &str = "./FleetList.csv";

/// Date the bundled fleet list was last refreshed
pub const LAST_UPDATED: &str = "26/11/2025";

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Page sizes offered to the user
pub const PAGE_SIZE_OPTIONS: &[usize] = &[25, 50, 100];

// =============================================================================
// Dashboard Groupings
// =============================================================================

/// Service types counted as the electric fleet
pub const ELECTRIC_SERVICE_TYPES: &[&str] = &["AC(EV)", "Deluxe(EV)"];

/// Service types covered by the Vidiyal Payanam free-travel scheme
pub const VIDIYAL_PAYANAM_SERVICE_TYPES: &[&str] = &["Ordinary", "Small Bus (Ordinary)"];

/// Labels of the two-way AC split
pub const AC_LABEL: &str = "AC";
pub const NON_AC_LABEL: &str = "NonAC";

// =============================================================================
// Analysis Context Limits
// =============================================================================

pub mod analysis {
    /// Query terms must be longer than this to be used for matching
    pub const MIN_TERM_CHARS: usize = 2;

    /// Maximum number of matching records handed to the collaborator
    pub const MAX_RELEVANT_RECORDS: usize = 30;

    /// Records handed over when the query has no usable terms
    pub const FALLBACK_SAMPLE_SIZE: usize = 5;

    /// Header of the CSV sample block
    pub const SAMPLE_CSV_HEADER: &str = "Depot,FleetNo,RegNo,Make,Model,AC,Service,RegDate,Status";
}

// =============================================================================
// Environment
// =============================================================================

pub const ENV_SOURCE: &str = "FLEET_LIST_SOURCE";
pub const ENV_PAGE_SIZE: &str = "FLEET_LIST_PAGE_SIZE";

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "fleet_list";
pub const CONFIG_FILE_NAME: &str = "config.toml";
