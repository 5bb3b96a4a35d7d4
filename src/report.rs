use crate::{
    cell::truncate_to_i64,
    error::{ErrorReport, Result},
    location::{LocationRow, ParseResult},
};
use serde::Serialize;
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Parsed(T),
    Failed(ErrorReport),
}
impl<T> Outcome<T> {
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(v) => Self::Parsed(v),
            Err(e) => Self::Failed(e.report()),
        }
    }
}
pub fn format_summary<L: AsRef<LocationRow>>(result: &ParseResult<L>) -> String {
    let totals = &result.totals;
    let mut lines = vec!["Statement of Values Parsed".to_owned(), String::new()];
    if let Some(name) = result.summary.named_insured.as_deref().filter(|v| !v.is_empty()) {
        lines.push(format!("Named Insured: {name}"));
    }
    lines.push(format!("Locations: {}", result.locations.len()));
    lines.push(format!("Total Rooms: {}", group_thousands(totals.num_rooms)));
    lines.push(format!("Total TIV: {}", format_dollars(totals.tiv)));
    lines.push(format!("  Building: {}", format_dollars(totals.building_value)));
    lines.push(format!("  Contents: {}", format_dollars(totals.contents_value)));
    lines.push(format!("  BI/Rents: {}", format_dollars(totals.bi_value)));
    lines.push(String::new());
    lines.extend(result.locations.iter().map(|loc| location_line(loc.as_ref())));
    lines.join("\n").trim_end().to_owned()
}
pub fn format_error(report: &ErrorReport) -> String {
    format!("SOV Error: {}", report.error)
}
pub fn format_outcome<L: AsRef<LocationRow>>(outcome: &Outcome<ParseResult<L>>) -> String {
    match outcome {
        Outcome::Parsed(result) => format_summary(result),
        Outcome::Failed(report) => format_error(report),
    }
}
fn location_line(loc: &LocationRow) -> String {
    let number = loc
        .location_num
        .map_or_else(|| "?".to_owned(), |n| n.to_string());
    let name = match loc.display_name() {
        "" => String::new(),
        name => format!(" {name}"),
    };
    let rooms = loc
        .num_rooms
        .filter(|r| *r != 0)
        .map(|r| format!(" ({r} rooms)"))
        .unwrap_or_default();
    format!(
        "  #{number}{name} | {}, {}, {}{rooms} | TIV: {}",
        loc.address.as_deref().unwrap_or_default(),
        loc.city.as_deref().unwrap_or_default(),
        loc.state.as_deref().unwrap_or_default(),
        format_dollars(loc.tiv.unwrap_or(0.0))
    )
}
pub fn format_dollars(amount: f64) -> String {
    format!("${}", group_thousands(truncate_to_i64(amount.round())))
}
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::SovError, policy::PolicySummary};
    use pretty_assertions::assert_eq;
    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
        assert_eq!(format_dollars(12_499.6), "$12,500");
    }
    #[test]
    fn summary_lists_totals_then_locations() {
        let locations = vec![
            LocationRow {
                location_num: Some(1),
                dba: Some("Harbor Inn".to_owned()),
                address: Some("1 Dock St".to_owned()),
                city: Some("Mobile".to_owned()),
                state: Some("AL".to_owned()),
                num_rooms: Some(1_200),
                building_value: Some(1_000_000.0),
                tiv: Some(1_250_000.0),
                ..LocationRow::default()
            },
            LocationRow {
                location_num: Some(2),
                hotel_flag: Some("Best Western".to_owned()),
                tiv: Some(0.0),
                ..LocationRow::default()
            },
        ];
        let summary = PolicySummary {
            named_insured: Some("Gulf Coast Lodging LLC".to_owned()),
            ..PolicySummary::default()
        };
        let result = ParseResult::new(summary, locations, None);
        let expected = "Statement of Values Parsed\n\
            \n\
            Named Insured: Gulf Coast Lodging LLC\n\
            Locations: 2\n\
            Total Rooms: 1,200\n\
            Total TIV: $1,250,000\n  \
            Building: $1,000,000\n  \
            Contents: $0\n  \
            BI/Rents: $0\n\
            \n  \
            #1 Harbor Inn | 1 Dock St, Mobile, AL (1200 rooms) | TIV: $1,250,000\n  \
            #2 Best Western | , ,  | TIV: $0";
        assert_eq!(format_summary(&result), expected);
    }
    #[test]
    fn errors_render_with_prefix() {
        assert_eq!(
            format_error(&SovError::HeaderNotFound.report()),
            "SOV Error: Could not detect SOV format. No header row found with expected column names."
        );
        let outcome: Outcome<ParseResult> = Err(SovError::NoColumnsMapped).into();
        assert!(outcome.is_failed());
        assert_eq!(
            format_outcome(&outcome),
            "SOV Error: Could not map any columns from the SOV header row."
        );
        assert_eq!(
            serde_json::to_value(&outcome).expect("serializable"),
            serde_json::json!({"error": "Could not map any columns from the SOV header row."})
        );
    }
}
