//! Truss catalog loader.
//!
//! Reads the semicolon-delimited catalog export. The first row is a header
//! and is skipped; every following row has six columns:
//!
//! ```text
//! building type ; truss type ; min width [m] ; max width [m] ; code ; weight [kg/m]
//! RodinnyDum    ; Plochy     ; 3            ; 5,5           ; VP-RD-55 ; 28,26
//! ```
//!
//! Numbers may use the Czech decimal comma. Lines starting with `#` are
//! comments. A single bad row fails the whole load, since a silently
//! skipped row would leave a gap in the width bands.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::building::{BuildingType, TrussType};
use crate::errors::{PricingError, PricingResult};
use crate::materials::truss::{TrussCatalog, TrussMaterial};
use crate::units::{Distance, Weight};

/// Number of columns in a catalog row
pub const CATALOG_COLUMNS: usize = 6;

/// Catalog shipped with the crate, used when no catalog file is configured
pub const BUNDLED_CATALOG_CSV: &str = include_str!("../../assets/truss_materials.csv");

impl TrussCatalog {
    /// Load the catalog from a file on disk.
    pub fn load_from_csv(path: impl AsRef<Path>) -> PricingResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| PricingError::file_error("open", path.display().to_string(), e.to_string()))?;

        let catalog = Self::from_csv_reader(file, &path.display().to_string())?;
        info!(path = %path.display(), entries = catalog.len(), "truss catalog loaded");
        Ok(catalog)
    }

    /// Parse the catalog shipped with the crate.
    pub fn bundled() -> PricingResult<Self> {
        Self::from_csv_reader(BUNDLED_CATALOG_CSV.as_bytes(), "bundled truss_materials.csv")
    }

    /// Parse the catalog from any reader. `source_name` is only used in
    /// error messages.
    pub fn from_csv_reader<R: Read>(reader: R, source_name: &str) -> PricingResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| {
                let row = e.position().map(|p| p.line() as usize).unwrap_or(0);
                PricingError::catalog_load(source_name, row, e.to_string())
            })?;

            let row = record.position().map(|p| p.line() as usize).unwrap_or(0);
            let entry = parse_row(&record)
                .map_err(|reason| PricingError::catalog_load(source_name, row, reason))?;
            debug!(row, code = %entry.code, "catalog row parsed");
            entries.push(entry);
        }

        if entries.is_empty() {
            warn!(source = source_name, "truss catalog contains no entries");
        }

        Ok(TrussCatalog::from_entries(entries))
    }
}

fn parse_row(record: &csv::StringRecord) -> Result<TrussMaterial, String> {
    if record.len() != CATALOG_COLUMNS {
        return Err(format!("expected {} columns, found {}", CATALOG_COLUMNS, record.len()));
    }

    let building_type = BuildingType::from_str_flexible(&record[0]).map_err(|e| e.to_string())?;
    if building_type == BuildingType::Unknown {
        return Err("building type 'Unknown' cannot appear in the catalog".to_string());
    }
    let truss_type = TrussType::from_str_flexible(&record[1]).map_err(|e| e.to_string())?;

    let min_width = Distance::from_meters(parse_decimal(&record[2], "min width")?).map_err(|e| e.to_string())?;
    let max_width = Distance::from_meters(parse_decimal(&record[3], "max width")?).map_err(|e| e.to_string())?;
    if min_width > max_width {
        return Err(format!(
            "min width {} m is greater than max width {} m",
            min_width.meters(),
            max_width.meters()
        ));
    }

    let code = record[4].to_string();
    if code.is_empty() {
        return Err("material code is empty".to_string());
    }

    let unit_weight = Weight::from_kilograms(parse_decimal(&record[5], "weight")?).map_err(|e| e.to_string())?;

    Ok(TrussMaterial {
        building_type,
        truss_type,
        min_width,
        max_width,
        code,
        unit_weight,
    })
}

/// Parse a number written with either a decimal comma or a decimal point.
/// Spaces (including no-break spaces) are accepted as thousands separators.
pub fn parse_decimal(s: &str, field: &str) -> Result<f64, String> {
    let normalized: String = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    normalized
        .parse::<f64>()
        .map_err(|_| format!("{} '{}' is not a number", field, s))
}
