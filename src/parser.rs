use crate::{
    columns::map_columns,
    dictionary::SovDictionary,
    error::{Result, SovError},
    grid::{Grid, load_first_sheet},
    header::find_header_row,
    location::ParseResult,
    options::ParseOptions,
    policy::{TotalTiv, extract_policy_summary},
    rows::extract_locations,
};
use std::path::Path;
use tracing::{info, warn};
#[derive(Debug, Clone, Default)]
pub struct SovParser {
    dictionary: SovDictionary,
    options: ParseOptions,
}
impl SovParser {
    pub fn new(dictionary: SovDictionary, options: ParseOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }
    pub fn parse_path(&self, path: &Path) -> Result<ParseResult> {
        let grid = load_first_sheet(path, None)?;
        let result = self.parse_grid(&grid);
        if let Err(err) = &result {
            warn!(path = %path.display(), error = %err, "sov parse failed");
        }
        result
    }
    pub fn parse_grid(&self, grid: &Grid) -> Result<ParseResult> {
        let header = find_header_row(grid, &self.dictionary, &self.options)
            .ok_or(SovError::HeaderNotFound)?;
        info!(
            row = header.row,
            keyword_matches = header.keyword_matches,
            "found sov header row"
        );
        let summary = extract_policy_summary(grid, header.row);
        let columns = map_columns(grid, header.row, &self.dictionary);
        if columns.is_empty() {
            return Err(SovError::NoColumnsMapped);
        }
        let locations = extract_locations(grid, header.row, &columns);
        let mut result = ParseResult::new(summary, locations, None);
        if result.summary.total_tiv.is_none() {
            result.summary.total_tiv = Some(TotalTiv::Amount(result.totals.tiv));
        }
        info!(
            locations = result.locations.len(),
            tiv = result.totals.tiv,
            "parsed sov locations"
        );
        Ok(result)
    }
    // The sheet is still decoded in full; only the rows up to the scan
    // window become grid cells. Unreadable files are not SOVs.
    pub fn is_sov_file(&self, path: &Path) -> bool {
        match load_first_sheet(path, Some(self.options.header_scan_rows)) {
            Ok(grid) => find_header_row(&grid, &self.dictionary, &self.options).is_some(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "sov format check failed");
                false
            }
        }
    }
}
pub fn parse_sov(path: &Path) -> Result<ParseResult> {
    SovParser::new(SovDictionary::builtin(), ParseOptions::from_env()).parse_path(path)
}
pub fn is_sov_file(path: &Path) -> bool {
    SovParser::new(SovDictionary::builtin(), ParseOptions::from_env()).is_sov_file(path)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    fn t(s: &str) -> CellValue {
        CellValue::text(s)
    }
    #[test]
    fn grid_without_header_is_a_structural_error() {
        let grid = Grid::from_rows(vec![vec![t("Quarterly revenue"), t("Q1"), t("Q2")]]);
        let err = SovParser::default().parse_grid(&grid).err();
        assert!(matches!(err, Some(SovError::HeaderNotFound)));
    }
    #[test]
    fn header_with_unmappable_cells_is_reported_separately() {
        let dictionary = SovDictionary::new(
            vec!["alpha".to_owned()],
            vec![("omega".to_owned(), crate::dictionary::Field::City)],
        )
        .expect("valid dictionary");
        let options = ParseOptions {
            header_min_matches: 1,
            ..ParseOptions::default()
        };
        let grid = Grid::from_rows(vec![vec![t("Alpha one"), t("Alpha two")]]);
        let err = SovParser::new(dictionary, options).parse_grid(&grid).err();
        assert!(matches!(err, Some(SovError::NoColumnsMapped)));
    }
    #[test]
    fn header_only_sheet_is_an_empty_success() {
        let grid = Grid::from_rows(vec![vec![
            t("Address"),
            t("City"),
            t("State"),
            t("Zip"),
            t("TIV"),
        ]]);
        let result = SovParser::default().parse_grid(&grid).expect("parses");
        assert!(result.locations.is_empty());
        assert_eq!(result.totals.num_locations, 0);
        assert_eq!(result.summary.total_tiv, Some(TotalTiv::Amount(0.0)));
        assert_eq!(result.source, "sov");
    }
    #[test]
    fn total_tiv_found_above_header_is_kept() {
        let grid = Grid::from_rows(vec![
            vec![t("Total TIV"), t("$9,000")],
            vec![t("Address"), t("City"), t("State"), t("Zip"), t("TIV")],
            vec![t("1 Main"), t("Austin"), t("TX"), t("78701"), CellValue::Number(5.0)],
        ]);
        let result = SovParser::default().parse_grid(&grid).expect("parses");
        assert_eq!(result.summary.total_tiv, Some(TotalTiv::Amount(9_000.0)));
        assert_eq!(result.summary.num_locations, 1);
        assert!((result.totals.tiv - 5.0).abs() < f64::EPSILON);
    }
}
