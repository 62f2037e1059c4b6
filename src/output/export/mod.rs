//! Profile data export
//!
//! Delimited-text export and reimport of `(position, concentration)` pairs.

pub mod csv;

pub use csv::{export_profile_csv, read_profile_csv, CsvConfig, CsvMetadata};
