//! Delimited-text export of concentration profiles
//!
//! Exports the `(position, concentration)` pairs of a profile to a delimited
//! text file (CSV by default), and parses the same dialect back so exported
//! data can be verified against the in-memory profile.
//!
//! # Features
//!
//! - **Simple interface**: export straight from a [`TransportProfile`]
//! - **Metadata support**: optional `#`-prefixed header with the parameter set
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Exact mode**: shortest round-trip float formatting for lossless
//!   export/reparse
//! - **Validation**: empty data and NaN/Inf rejected before writing
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use adre_rs::output::export::{export_profile_csv, read_profile_csv};
//!
//! export_profile_csv(&profile, "profile.csv", None)?;
//! let parsed = read_profile_csv("profile.csv", None)?;
//! ```
//!
//! **Output** (`profile.csv`):
//! ```csv
//! x (m),c/c0 (-)
//! -0.004000,1.000000
//! -0.003900,1.000000
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use nalgebra::DVector;

use crate::physics::ColumnParameters;
use crate::transport::TransportProfile;

// =================================================================================================
// Configuration Structures
// =================================================================================================

/// Configuration for profile export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Decimal places for fixed-point output; `None` switches to shortest
    /// round-trip scientific notation, which reparses to the exact same f64
    /// (default: `Some(6)`)
    pub precision: Option<usize>,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<CsvMetadata>,

    /// Header for the position column (default: "x (m)")
    pub position_header: String,

    /// Header for the concentration column (default: "c/c0 (-)")
    pub concentration_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: Some(6),
            include_metadata: false,
            metadata: None,
            position_header: "x (m)".to_string(),
            concentration_header: "c/c0 (-)".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon delimiter, comma for decimals)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Lossless export: shortest round-trip scientific notation
    ///
    /// `read_profile_csv` on a file written in this mode reproduces the
    /// in-memory profile bit for bit.
    pub fn exact() -> Self {
        Self {
            precision: None,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set fixed-point precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for the `#`-prefixed export header
///
/// All fields are optional; only populated fields are written.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Elapsed time \[s\]
    pub time: Option<f64>,

    /// Column length \[m\]
    pub length: Option<f64>,

    /// Column radius \[m\]
    pub radius: Option<f64>,

    /// Dispersion coefficient \[m²/s\]
    pub dispersion: Option<f64>,

    /// Reaction coefficient \[1/s\]
    pub reaction: Option<f64>,

    /// Flow rate \[mL/h\]
    pub flow_rate: Option<f64>,

    /// Porosity \[-\]
    pub porosity: Option<f64>,

    /// Derived pore velocity \[m/s\]
    pub velocity: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Capture the full parameter set, including the derived velocity
    pub fn from_parameters(parameters: &ColumnParameters) -> Self {
        Self {
            time: Some(parameters.time),
            length: Some(parameters.length),
            radius: Some(parameters.radius),
            dispersion: Some(parameters.dispersion),
            reaction: Some(parameters.reaction),
            flow_rate: Some(parameters.flow_rate),
            porosity: Some(parameters.porosity),
            velocity: Some(parameters.pore_velocity()),
            custom: Vec::new(),
        }
    }

    /// Add a custom parameter line
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Write metadata header comments to the file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# ADRE Column Transport Profile")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(t) = metadata.time {
        writeln!(file, "# Time: {} s", t)?;
    }
    if let Some(l) = metadata.length {
        writeln!(file, "# Length: {} m", l)?;
    }
    if let Some(r) = metadata.radius {
        writeln!(file, "# Radius: {} m", r)?;
    }
    if let Some(d) = metadata.dispersion {
        writeln!(file, "# Dispersion: {} m2/s", d)?;
    }
    if let Some(k) = metadata.reaction {
        writeln!(file, "# Reaction: {} 1/s", k)?;
    }
    if let Some(q) = metadata.flow_rate {
        writeln!(file, "# Flow Rate: {} mL/h", q)?;
    }
    if let Some(n) = metadata.porosity {
        writeln!(file, "# Porosity: {}", n)?;
    }
    if let Some(v) = metadata.velocity {
        writeln!(file, "# Pore Velocity: {} m/s", v)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;

    Ok(())
}

/// Format a number with the configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = match config.precision {
        Some(precision) => format!("{:.prec$}", value, prec = precision),
        // Shortest representation that parses back to the identical f64
        None => format!("{:e}", value),
    };

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Parse a number written by [`format_number`]
fn parse_number(field: &str, config: &CsvConfig) -> Result<f64, Box<dyn Error>> {
    let normalized = if config.decimal_separator != '.' {
        field.replace(config.decimal_separator, ".")
    } else {
        field.to_string()
    };

    normalized
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("Invalid number {:?}: {}", field, e).into())
}

// =================================================================================================
// Export / Import Functions
// =================================================================================================

/// Export a profile's `(position, concentration)` pairs to a delimited file
///
/// # Arguments
///
/// * `profile` - Profile to export
/// * `output_path` - Output file path
/// * `configuration` - Optional configuration (default dialect if `None`)
///
/// # Errors
///
/// - Empty profile
/// - NaN or Inf values
/// - File creation errors
pub fn export_profile_csv(
    profile: &TransportProfile,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if profile.is_empty() {
        return Err("Empty data: profile must not be empty".into());
    }

    if profile.positions().iter().any(|x| !x.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in positions".into());
    }

    if profile.concentrations().iter().any(|c| !c.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in concentrations".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "{}{}{}",
        configuration.position_header, configuration.delimiter, configuration.concentration_header
    )?;

    // ============================= Write Data =============================

    for (position, concentration) in profile.pairs() {
        writeln!(
            file,
            "{}{}{}",
            format_number(position, configuration),
            configuration.delimiter,
            format_number(concentration, configuration)
        )?;
    }

    Ok(())
}

/// Parse a file written by [`export_profile_csv`] back into a profile
///
/// Skips `#`-prefixed metadata lines and the column header, then parses one
/// `(position, concentration)` pair per line using the same dialect.
///
/// # Errors
///
/// - Unreadable file
/// - Malformed lines (wrong field count, unparseable numbers)
/// - No data rows
pub fn read_profile_csv(
    input_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<TransportProfile, Box<dyn Error>> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut positions = Vec::new();
    let mut concentrations = Vec::new();
    let mut header_skipped = false;

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        // Metadata and blank lines
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // First non-comment line is the column header
        if !header_skipped {
            header_skipped = true;
            continue;
        }

        let fields: Vec<&str> = trimmed.split(configuration.delimiter).collect();
        if fields.len() != 2 {
            return Err(format!(
                "Line {}: expected 2 fields, found {}",
                line_number + 1,
                fields.len()
            )
            .into());
        }

        positions.push(parse_number(fields[0], configuration)?);
        concentrations.push(parse_number(fields[1], configuration)?);
    }

    if positions.is_empty() {
        return Err("No data rows found".into());
    }

    TransportProfile::new(
        DVector::from_vec(positions),
        DVector::from_vec(concentrations),
    )
    .map_err(|e| e.into())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ColumnParameters;
    use crate::transport::TransportEvaluator;
    use std::fs;
    use tempfile::NamedTempFile;

    fn reference_profile() -> TransportProfile {
        TransportEvaluator::with_samples(64)
            .evaluate(&ColumnParameters::default())
            .unwrap()
    }

    #[test]
    fn test_export_creates_file_with_header() {
        let profile = reference_profile();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        export_profile_csv(&profile, &path, None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().next().unwrap(), "x (m),c/c0 (-)");
        // header + one row per sample
        assert_eq!(content.lines().count(), 1 + profile.len());
    }

    #[test]
    fn test_export_with_metadata() {
        let params = ColumnParameters::default();
        let profile = reference_profile();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        let config = CsvConfig::default().with_metadata(CsvMetadata::from_parameters(&params));
        export_profile_csv(&profile, &path, Some(&config)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("# Time: 21636 s"));
        assert!(content.contains("# Flow Rate: 25 mL/h"));
        assert!(content.contains("# Pore Velocity:"));
    }

    #[test]
    fn test_round_trip_exact_mode_is_lossless() {
        let profile = reference_profile();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        let config = CsvConfig::exact();
        export_profile_csv(&profile, &path, Some(&config)).unwrap();
        let parsed = read_profile_csv(&path, Some(&config)).unwrap();

        assert_eq!(parsed.len(), profile.len());
        for (original, reparsed) in profile.pairs().zip(parsed.pairs()) {
            assert_eq!(original.0, reparsed.0, "position differs after round trip");
            assert_eq!(
                original.1, reparsed.1,
                "concentration differs after round trip"
            );
        }
    }

    #[test]
    fn test_round_trip_fixed_precision_within_tolerance() {
        let profile = reference_profile();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        let config = CsvConfig::default().precision(9);
        export_profile_csv(&profile, &path, Some(&config)).unwrap();
        let parsed = read_profile_csv(&path, Some(&config)).unwrap();

        for (original, reparsed) in profile.pairs().zip(parsed.pairs()) {
            assert!((original.0 - reparsed.0).abs() < 1e-9);
            assert!((original.1 - reparsed.1).abs() < 1e-9);
        }
    }

    #[test]
    fn test_round_trip_european_dialect() {
        let profile = reference_profile();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        let config = CsvConfig::european();
        export_profile_csv(&profile, &path, Some(&config)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(';'));

        let parsed = read_profile_csv(&path, Some(&config)).unwrap();
        assert_eq!(parsed.len(), profile.len());
    }

    #[test]
    fn test_round_trip_with_metadata_header() {
        let params = ColumnParameters::default();
        let profile = reference_profile();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        let config = CsvConfig::exact().with_metadata(CsvMetadata::from_parameters(&params));
        export_profile_csv(&profile, &path, Some(&config)).unwrap();
        let parsed = read_profile_csv(&path, Some(&config)).unwrap();

        assert_eq!(parsed.len(), profile.len());
    }

    #[test]
    fn test_read_rejects_malformed_line() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();
        fs::write(&path, "x (m),c/c0 (-)\n0.1,0.5,extra\n").unwrap();

        assert!(read_profile_csv(&path, None).is_err());
    }

    #[test]
    fn test_read_rejects_empty_file() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();
        fs::write(&path, "x (m),c/c0 (-)\n").unwrap();

        assert!(read_profile_csv(&path, None).is_err());
    }
}
