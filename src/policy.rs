use crate::{
    cell::{CellValue, parse_currency},
    grid::Grid,
};
use serde::Serialize;
const NAMED_INSURED_LABEL: &str = "first named insured";
const MAILING_ADDRESS_LABEL: &str = "mailing address";
const EFFECTIVE_DATE_LABEL: &str = "effective date";
const TOTAL_TIV_LABEL: &str = "total tiv";
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TotalTiv {
    Amount(f64),
    Raw(String),
}
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PolicySummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_insured: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tiv: Option<TotalTiv>,
    pub num_locations: usize,
}
pub fn extract_policy_summary(grid: &Grid, header_row: usize) -> PolicySummary {
    let mut summary = PolicySummary::default();
    for row in 1..header_row {
        for (col, cell) in grid.cells_in_row(row) {
            let label = cell.normalized();
            let value = grid.cell(row, col + 1);
            if label.contains(NAMED_INSURED_LABEL) {
                if !value.is_blank() {
                    summary.named_insured = Some(value.display_text());
                }
            } else if label.contains(MAILING_ADDRESS_LABEL) {
                summary.mailing_address =
                    mailing_address(value, grid.cell(row + 1, col + 1)).or(summary.mailing_address);
            } else if label.contains(EFFECTIVE_DATE_LABEL) {
                if !value.is_blank() {
                    summary.effective_date = value.to_date_text();
                }
            } else if label.contains(TOTAL_TIV_LABEL) {
                if !value.is_blank() {
                    summary.total_tiv = Some(total_tiv(value));
                }
            } else {
                continue;
            }
        }
    }
    summary
}
fn mailing_address(line: &CellValue, continuation: &CellValue) -> Option<String> {
    let parts: Vec<String> = [line, continuation]
        .iter()
        .filter(|cell| !cell.is_blank())
        .map(|cell| cell.display_text())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
fn total_tiv(value: &CellValue) -> TotalTiv {
    match value {
        CellValue::Number(v) if v.is_finite() => TotalTiv::Amount(*v),
        CellValue::Empty | CellValue::Text(_) | CellValue::Number(_) | CellValue::Date(_) => {
            let raw = value.display_text();
            parse_currency(&raw).map_or(TotalTiv::Raw(raw), TotalTiv::Amount)
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    fn row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|c| CellValue::text(*c)).collect()
    }
    #[test]
    fn reads_labels_above_header_only() {
        let grid = Grid::from_rows(vec![
            row(&["", "First Named Insured:", "Gulf Coast Lodging LLC"]),
            row(&["", "Mailing Address", "100 Bay Rd"]),
            row(&["", "", "Mobile, AL 36602"]),
            row(&["", "Desired Effective Date", "07/01/2025"]),
            row(&["", "Total TIV", "$12,500,000"]),
            row(&["Address", "City", "State", "Zip", "TIV"]),
            row(&["First Named Insured", "Ignored LLC"]),
        ]);
        let summary = extract_policy_summary(&grid, 6);
        assert_eq!(
            summary,
            PolicySummary {
                named_insured: Some("Gulf Coast Lodging LLC".to_owned()),
                mailing_address: Some("100 Bay Rd, Mobile, AL 36602".to_owned()),
                effective_date: Some("07/01/2025".to_owned()),
                total_tiv: Some(TotalTiv::Amount(12_500_000.0)),
                num_locations: 0,
            }
        );
    }
    #[test]
    fn unparsable_total_tiv_is_kept_raw() {
        let grid = Grid::from_rows(vec![row(&["Total TIV", "see schedule"])]);
        let summary = extract_policy_summary(&grid, 2);
        assert_eq!(summary.total_tiv, Some(TotalTiv::Raw("see schedule".to_owned())));
        assert_eq!(summary.named_insured, None);
    }
    #[test]
    fn missing_values_leave_fields_absent() {
        let grid = Grid::from_rows(vec![
            row(&["First Named Insured"]),
            row(&["Total TIV", ""]),
        ]);
        assert_eq!(extract_policy_summary(&grid, 3), PolicySummary::default());
        assert_eq!(extract_policy_summary(&grid, 1), PolicySummary::default());
    }
    #[test]
    fn numeric_total_tiv_and_native_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 7, 1)
            .expect("valid date")
            .and_time(chrono::NaiveTime::MIN);
        let grid = Grid::from_rows(vec![
            vec![CellValue::text("Effective Date"), CellValue::Date(date)],
            vec![CellValue::text("TOTAL TIV"), CellValue::Number(750_000.0)],
        ]);
        let summary = extract_policy_summary(&grid, 3);
        assert_eq!(summary.effective_date.as_deref(), Some("07/01/2025"));
        assert_eq!(summary.total_tiv, Some(TotalTiv::Amount(750_000.0)));
    }
}
