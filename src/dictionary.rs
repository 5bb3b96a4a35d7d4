use crate::{
    cell::normalize_text,
    error::{Result, SovError},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};
pub const MIN_PARTIAL_MATCH_LEN: usize = 4;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    LocationNum,
    BuildingNum,
    ClientName,
    CorporateName,
    Dba,
    HotelFlag,
    Address,
    City,
    State,
    ZipCode,
    County,
    EffectiveDate,
    ExpirationDate,
    BuildingValue,
    ContentsValue,
    BiValue,
    PoolValue,
    SignValue,
    OtherValue,
    Tiv,
    Occupancy,
    ConstructionCode,
    ConstructionType,
    Stories,
    YearBuilt,
    SquareFootage,
    YearElectrical,
    YearPlumbing,
    YearHvac,
    RoofYear,
    RoofType,
    OccupancyPct,
    SprinklerPct,
    ValuationPerSqft,
    NumRooms,
    Eifs,
    FloodRequired,
    FloodLimit,
    FloodZone,
    AopDeductible,
    EarthquakeRequired,
    EarthquakeLimit,
    Stoves,
    Fireplace,
    WiringType,
    #[serde(rename = "total_losses_5yr")]
    TotalLosses5yr,
    LossDetails,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Amount,
    Integer,
    Date,
    Sprinkler,
    Text,
}
impl Field {
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::BuildingValue
            | Self::ContentsValue
            | Self::BiValue
            | Self::PoolValue
            | Self::SignValue
            | Self::OtherValue
            | Self::Tiv
            | Self::AopDeductible
            | Self::ValuationPerSqft
            | Self::FloodLimit
            | Self::EarthquakeLimit
            | Self::TotalLosses5yr => FieldKind::Amount,
            Self::LocationNum
            | Self::BuildingNum
            | Self::Stories
            | Self::YearBuilt
            | Self::SquareFootage
            | Self::NumRooms
            | Self::YearElectrical
            | Self::YearPlumbing
            | Self::YearHvac
            | Self::RoofYear => FieldKind::Integer,
            Self::EffectiveDate => FieldKind::Date,
            Self::SprinklerPct => FieldKind::Sprinkler,
            Self::ClientName
            | Self::CorporateName
            | Self::Dba
            | Self::HotelFlag
            | Self::Address
            | Self::City
            | Self::State
            | Self::ZipCode
            | Self::County
            | Self::ExpirationDate
            | Self::Occupancy
            | Self::ConstructionCode
            | Self::ConstructionType
            | Self::RoofType
            | Self::OccupancyPct
            | Self::Eifs
            | Self::FloodRequired
            | Self::FloodZone
            | Self::EarthquakeRequired
            | Self::Stoves
            | Self::Fireplace
            | Self::WiringType
            | Self::LossDetails => FieldKind::Text,
        }
    }
    pub const fn is_anchor(self) -> bool {
        matches!(
            self,
            Self::Address | Self::ClientName | Self::Dba | Self::City
        )
    }
}
const DEFAULT_HEADER_KEYWORDS: [&str; 20] = [
    "address",
    "city",
    "state",
    "zip",
    "building value",
    "contents value",
    "tiv",
    "rooms",
    "location",
    "construction",
    "year built",
    "hotel flag",
    "dba",
    "occupancy",
    "square footage",
    "sprinkler",
    "flood zone",
    "roof",
    "county",
    "stories",
];
const DEFAULT_COLUMN_VARIANTS: &[(&str, Field)] = &[
    ("client name", Field::ClientName),
    ("corporate name", Field::CorporateName),
    ("corporate name (llc)", Field::CorporateName),
    ("dba", Field::Dba),
    ("hotel flag", Field::HotelFlag),
    ("brand", Field::HotelFlag),
    ("location name", Field::Dba),
    ("location #", Field::LocationNum),
    ("location number", Field::LocationNum),
    ("loc #", Field::LocationNum),
    ("building #", Field::BuildingNum),
    ("building number", Field::BuildingNum),
    ("bldg #", Field::BuildingNum),
    ("* bldg no.", Field::BuildingNum),
    ("*bldg no.", Field::BuildingNum),
    ("address", Field::Address),
    ("street address", Field::Address),
    ("street", Field::Address),
    ("city", Field::City),
    ("state", Field::State),
    ("zip", Field::ZipCode),
    ("zip code", Field::ZipCode),
    ("zipcode", Field::ZipCode),
    ("county", Field::County),
    ("effective date", Field::EffectiveDate),
    ("expiration date", Field::ExpirationDate),
    ("building value", Field::BuildingValue),
    ("* building value", Field::BuildingValue),
    ("*building value", Field::BuildingValue),
    ("bldg value", Field::BuildingValue),
    ("real property value", Field::BuildingValue),
    ("*real property value", Field::BuildingValue),
    ("* real property value", Field::BuildingValue),
    ("*real property value ($)", Field::BuildingValue),
    ("contents value", Field::ContentsValue),
    ("*contents value", Field::ContentsValue),
    ("* contents value", Field::ContentsValue),
    ("contents", Field::ContentsValue),
    ("personal property value", Field::ContentsValue),
    ("personal property value ($)", Field::ContentsValue),
    ("business income/rents", Field::BiValue),
    // misspelling shipped in several carrier templates
    ("buisness income/rents", Field::BiValue),
    ("*buisness income/rents", Field::BiValue),
    ("* buisness income/rents", Field::BiValue),
    ("*business income/rents", Field::BiValue),
    ("* business income/rents", Field::BiValue),
    ("bi/rental income", Field::BiValue),
    ("bi/rental income ($)", Field::BiValue),
    ("bi value", Field::BiValue),
    ("bi", Field::BiValue),
    ("pool value", Field::PoolValue),
    ("pools", Field::PoolValue),
    ("sign value", Field::SignValue),
    ("signs", Field::SignValue),
    ("other values", Field::OtherValue),
    ("other", Field::OtherValue),
    ("tiv", Field::Tiv),
    ("total insured value", Field::Tiv),
    ("*total tiv", Field::Tiv),
    ("occupancy description", Field::Occupancy),
    ("occupancy", Field::Occupancy),
    ("construction code (iso)*", Field::ConstructionCode),
    ("construction code", Field::ConstructionCode),
    ("*iso const", Field::ConstructionCode),
    ("iso const", Field::ConstructionCode),
    ("iso construction", Field::ConstructionCode),
    ("construction type", Field::ConstructionType),
    ("construction", Field::ConstructionType),
    ("no. of stories", Field::Stories),
    ("stories", Field::Stories),
    ("number of stories", Field::Stories),
    ("year built", Field::YearBuilt),
    ("square footage", Field::SquareFootage),
    ("sq ft", Field::SquareFootage),
    ("sqft", Field::SquareFootage),
    ("year electrical updated", Field::YearElectrical),
    ("year plumbing updated", Field::YearPlumbing),
    ("year hvac updated", Field::YearHvac),
    ("roof full replacement year", Field::RoofYear),
    ("roof year", Field::RoofYear),
    ("roof type", Field::RoofType),
    ("occupancy %", Field::OccupancyPct),
    ("sprinklered %", Field::SprinklerPct),
    ("sprinklered", Field::SprinklerPct),
    ("sprinkler", Field::SprinklerPct),
    ("valuation", Field::ValuationPerSqft),
    ("# of rooms", Field::NumRooms),
    ("rooms", Field::NumRooms),
    ("number of rooms", Field::NumRooms),
    ("*# of units", Field::NumRooms),
    ("# of units", Field::NumRooms),
    ("units", Field::NumRooms),
    ("eifs?", Field::Eifs),
    ("eifs", Field::Eifs),
    ("flood coverage required?", Field::FloodRequired),
    ("flood limit requested", Field::FloodLimit),
    ("flood zone", Field::FloodZone),
    ("flood zone (select zone)", Field::FloodZone),
    ("aop deductible", Field::AopDeductible),
    ("aop deductible (choose one)", Field::AopDeductible),
    ("earthquake required?", Field::EarthquakeRequired),
    ("earthquake limit requested", Field::EarthquakeLimit),
    ("any stoves in rooms?", Field::Stoves),
    ("fireplace in rooms?", Field::Fireplace),
    ("wiring type", Field::WiringType),
    ("total losses last 5 years ($)", Field::TotalLosses5yr),
    ("loss details (if any)", Field::LossDetails),
];
#[derive(Debug, Deserialize)]
struct DictionaryFile {
    header_keywords: Vec<String>,
    columns: Vec<(String, Field)>,
}
#[derive(Debug, Clone)]
pub struct SovDictionary {
    header_keywords: Vec<String>,
    exact: HashMap<String, Field>,
    partial: Vec<(String, Field)>,
}
impl SovDictionary {
    pub fn builtin() -> Self {
        Self::build(
            DEFAULT_HEADER_KEYWORDS.iter().map(|k| (*k).to_owned()).collect(),
            DEFAULT_COLUMN_VARIANTS
                .iter()
                .map(|(variant, field)| ((*variant).to_owned(), *field))
                .collect(),
        )
    }
    pub fn new(header_keywords: Vec<String>, columns: Vec<(String, Field)>) -> Result<Self> {
        let dictionary = Self::build(header_keywords, columns);
        if dictionary.header_keywords.is_empty() {
            return Err(SovError::InvalidDictionary(
                "header_keywords must not be empty".to_owned(),
            ));
        }
        if dictionary.exact.is_empty() {
            return Err(SovError::InvalidDictionary(
                "columns must not be empty".to_owned(),
            ));
        }
        Ok(dictionary)
    }
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: DictionaryFile = serde_json::from_str(json)?;
        Self::new(file.header_keywords, file.columns)
    }
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| SovError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
    fn build(header_keywords: Vec<String>, columns: Vec<(String, Field)>) -> Self {
        let header_keywords: Vec<String> = header_keywords
            .iter()
            .map(|k| normalize_text(k))
            .filter(|k| !k.is_empty())
            .collect();
        let mut exact = HashMap::new();
        let mut partial = Vec::new();
        for (variant, field) in columns {
            let key = normalize_text(&variant);
            if key.is_empty() || exact.contains_key(&key) {
                continue;
            }
            if key.chars().count() >= MIN_PARTIAL_MATCH_LEN {
                partial.push((key.clone(), field));
            }
            exact.insert(key, field);
        }
        // longest variant wins; the sort is stable so table order breaks ties
        partial.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        Self {
            header_keywords,
            exact,
            partial,
        }
    }
    pub fn header_keywords(&self) -> &[String] {
        &self.header_keywords
    }
    pub fn lookup(&self, normalized_header: &str) -> Option<Field> {
        self.exact.get(normalized_header).copied()
    }
    // Longest first; equal lengths keep table order.
    pub fn partial_candidates(&self) -> &[(String, Field)] {
        &self.partial
    }
    pub fn len(&self) -> usize {
        self.exact.len()
    }
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}
impl Default for SovDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}
