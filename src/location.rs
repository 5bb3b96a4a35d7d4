use crate::{
    cell::{CellValue, is_zero},
    dictionary::Field,
    policy::PolicySummary,
};
use serde::Serialize;
pub const SOURCE_TAG: &str = "sov";
// `None` means the sheet had no column for the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_num: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_num: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corporate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dba: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bi_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiv: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_footage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_electrical: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_plumbing: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_hvac: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roof_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roof_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy_pct: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprinkler_pct: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuation_per_sqft: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_rooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eifs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flood_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flood_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flood_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aop_deductible: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earthquake_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earthquake_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stoves: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fireplace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiring_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_losses_5yr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loss_details: Option<String>,
}
impl LocationRow {
    pub fn set(&mut self, field: Field, cell: &CellValue) {
        match field {
            Field::LocationNum => self.location_num = Some(cell.to_integer()),
            Field::BuildingNum => self.building_num = Some(cell.to_integer()),
            Field::ClientName => self.client_name = Some(cell.to_text()),
            Field::CorporateName => self.corporate_name = Some(cell.to_text()),
            Field::Dba => self.dba = Some(cell.to_text()),
            Field::HotelFlag => self.hotel_flag = Some(cell.to_text()),
            Field::Address => self.address = Some(cell.to_text()),
            Field::City => self.city = Some(cell.to_text()),
            Field::State => self.state = Some(cell.to_text()),
            Field::ZipCode => self.zip_code = Some(cell.to_text()),
            Field::County => self.county = Some(cell.to_text()),
            Field::EffectiveDate => self.effective_date = cell.to_date_text(),
            Field::ExpirationDate => self.expiration_date = Some(cell.to_text()),
            Field::BuildingValue => self.building_value = Some(cell.to_amount()),
            Field::ContentsValue => self.contents_value = Some(cell.to_amount()),
            Field::BiValue => self.bi_value = Some(cell.to_amount()),
            Field::PoolValue => self.pool_value = Some(cell.to_amount()),
            Field::SignValue => self.sign_value = Some(cell.to_amount()),
            Field::OtherValue => self.other_value = Some(cell.to_amount()),
            Field::Tiv => self.tiv = Some(cell.to_amount()),
            Field::Occupancy => self.occupancy = Some(cell.to_text()),
            Field::ConstructionCode => self.construction_code = Some(cell.to_text()),
            Field::ConstructionType => self.construction_type = Some(cell.to_text()),
            Field::Stories => self.stories = Some(cell.to_integer()),
            Field::YearBuilt => self.year_built = Some(cell.to_integer()),
            Field::SquareFootage => self.square_footage = Some(cell.to_integer()),
            Field::YearElectrical => self.year_electrical = Some(cell.to_integer()),
            Field::YearPlumbing => self.year_plumbing = Some(cell.to_integer()),
            Field::YearHvac => self.year_hvac = Some(cell.to_integer()),
            Field::RoofYear => self.roof_year = Some(cell.to_integer()),
            Field::RoofType => self.roof_type = Some(cell.to_text()),
            Field::OccupancyPct => self.occupancy_pct = Some(cell.to_text()),
            Field::SprinklerPct => self.sprinkler_pct = Some(cell.to_sprinkler()),
            Field::ValuationPerSqft => self.valuation_per_sqft = Some(cell.to_amount()),
            Field::NumRooms => self.num_rooms = Some(cell.to_integer()),
            Field::Eifs => self.eifs = Some(cell.to_text()),
            Field::FloodRequired => self.flood_required = Some(cell.to_text()),
            Field::FloodLimit => self.flood_limit = Some(cell.to_amount()),
            Field::FloodZone => self.flood_zone = Some(cell.to_text()),
            Field::AopDeductible => self.aop_deductible = Some(cell.to_amount()),
            Field::EarthquakeRequired => self.earthquake_required = Some(cell.to_text()),
            Field::EarthquakeLimit => self.earthquake_limit = Some(cell.to_amount()),
            Field::Stoves => self.stoves = Some(cell.to_text()),
            Field::Fireplace => self.fireplace = Some(cell.to_text()),
            Field::WiringType => self.wiring_type = Some(cell.to_text()),
            Field::TotalLosses5yr => self.total_losses_5yr = Some(cell.to_amount()),
            Field::LossDetails => self.loss_details = Some(cell.to_text()),
        }
    }
    pub fn component_value_sum(&self) -> f64 {
        [
            self.building_value,
            self.contents_value,
            self.bi_value,
            self.pool_value,
            self.sign_value,
            self.other_value,
        ]
        .iter()
        .map(|v| v.unwrap_or(0.0))
        .sum()
    }
    pub fn complete_tiv(&mut self) {
        if is_zero(self.tiv.unwrap_or(0.0)) {
            self.tiv = Some(self.component_value_sum());
        }
    }
    pub fn grouping_key(&self) -> i64 {
        self.building_num
            .filter(|v| *v != 0)
            .or(self.location_num)
            .unwrap_or(0)
    }
    pub fn display_name(&self) -> &str {
        [self.dba.as_deref(), self.hotel_flag.as_deref()]
            .into_iter()
            .flatten()
            .find(|v| !v.is_empty())
            .unwrap_or_default()
    }
}
impl AsRef<Self> for LocationRow {
    fn as_ref(&self) -> &Self {
        self
    }
}
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedLocation {
    #[serde(flatten)]
    pub location: LocationRow,
    #[serde(rename = "_building_count")]
    pub building_count: usize,
}
impl AsRef<LocationRow> for AggregatedLocation {
    fn as_ref(&self) -> &LocationRow {
        &self.location
    }
}
pub trait BuildingGroup: AsRef<LocationRow> {
    fn buildings(&self) -> usize;
}
impl BuildingGroup for LocationRow {
    fn buildings(&self) -> usize {
        1
    }
}
impl BuildingGroup for AggregatedLocation {
    fn buildings(&self) -> usize {
        self.building_count
    }
}
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub building_value: f64,
    pub contents_value: f64,
    pub bi_value: f64,
    pub tiv: f64,
    pub num_rooms: i64,
    pub num_locations: usize,
}
impl Totals {
    pub fn from_locations<L: AsRef<LocationRow>>(locations: &[L]) -> Self {
        locations
            .iter()
            .map(AsRef::as_ref)
            .fold(Self::default(), |mut acc, loc| {
                acc.building_value += loc.building_value.unwrap_or(0.0);
                acc.contents_value += loc.contents_value.unwrap_or(0.0);
                acc.bi_value += loc.bi_value.unwrap_or(0.0);
                acc.tiv += loc.tiv.unwrap_or(0.0);
                acc.num_rooms = acc.num_rooms.saturating_add(loc.num_rooms.unwrap_or(0));
                acc.num_locations += 1;
                acc
            })
    }
}
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult<L = LocationRow> {
    pub source: &'static str,
    pub summary: PolicySummary,
    pub locations: Vec<L>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations_raw: Option<Vec<LocationRow>>,
    pub totals: Totals,
}
impl<L: AsRef<LocationRow>> ParseResult<L> {
    pub fn new(
        mut summary: PolicySummary,
        locations: Vec<L>,
        locations_raw: Option<Vec<LocationRow>>,
    ) -> Self {
        let totals = Totals::from_locations(&locations);
        summary.num_locations = totals.num_locations;
        Self {
            source: SOURCE_TAG,
            summary,
            locations,
            locations_raw,
            totals,
        }
    }
}
