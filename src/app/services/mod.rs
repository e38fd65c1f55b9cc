//! Core business logic services

pub mod aggregator;
pub mod analysis;
pub mod fleet_parser;
pub mod pivot;
pub mod query;
pub mod source;
