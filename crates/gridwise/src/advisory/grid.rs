use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

const STANDARD_AREAS: &str = include_str!("../../data/grid_constrained_pc4.json");

/// First four digits of a Dutch postal code.
///
/// Treated as an opaque key; surrounding whitespace is ignored when comparing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pc4(pub String);

impl Pc4 {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.trim()
    }

    /// Exactly four ASCII digits.
    pub fn is_well_formed(&self) -> bool {
        let value = self.as_str();
        value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Pc4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference set of PC4 areas with limited grid capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridConstrainedAreas {
    areas: BTreeSet<String>,
}

impl GridConstrainedAreas {
    pub fn new<I, S>(areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let areas = areas
            .into_iter()
            .map(|area| area.as_ref().trim().to_string())
            .filter(|area| !area.is_empty())
            .collect();
        Self { areas }
    }

    /// List bundled with the crate.
    pub fn standard() -> Result<Self, GridAreaError> {
        Self::from_json_reader(STANDARD_AREAS.as_bytes())
    }

    /// Loads a JSON array or a CSV file (with a `pc4` column), chosen by extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GridAreaError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Self::from_json_reader(std::fs::File::open(path)?),
            Some("csv") => Self::from_csv_reader(std::fs::File::open(path)?),
            _ => Err(GridAreaError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, GridAreaError> {
        let areas: Vec<String> = serde_json::from_reader(reader)?;
        Ok(Self::new(areas))
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, GridAreaError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut areas = Vec::new();

        for record in csv_reader.deserialize::<GridAreaRow>() {
            areas.push(record?.pc4);
        }

        Ok(Self::new(areas))
    }

    pub fn contains(&self, pc4: &Pc4) -> bool {
        self.areas.contains(pc4.as_str())
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.areas.iter().map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct GridAreaRow {
    #[serde(alias = "PC4")]
    pc4: String,
}

#[derive(Debug)]
pub enum GridAreaError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    UnsupportedFormat(String),
}

impl fmt::Display for GridAreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAreaError::Io(err) => write!(f, "failed to read grid area list: {}", err),
            GridAreaError::Json(err) => write!(f, "invalid grid area JSON: {}", err),
            GridAreaError::Csv(err) => write!(f, "invalid grid area CSV: {}", err),
            GridAreaError::UnsupportedFormat(path) => {
                write!(f, "grid area list '{}' must be a .json or .csv file", path)
            }
        }
    }
}

impl std::error::Error for GridAreaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridAreaError::Io(err) => Some(err),
            GridAreaError::Json(err) => Some(err),
            GridAreaError::Csv(err) => Some(err),
            GridAreaError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for GridAreaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for GridAreaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for GridAreaError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
