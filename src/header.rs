use crate::{dictionary::SovDictionary, grid::Grid, options::ParseOptions};
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRow {
    pub row: usize,
    pub keyword_matches: usize,
}
// A cell is credited at most once.
pub fn find_header_row(
    grid: &Grid,
    dictionary: &SovDictionary,
    options: &ParseOptions,
) -> Option<HeaderRow> {
    let last_row = grid.row_count().min(options.header_scan_rows);
    (1..=last_row).find_map(|row| {
        let keyword_matches = count_keyword_cells(grid, row, dictionary);
        (keyword_matches >= options.header_min_matches).then_some(HeaderRow {
            row,
            keyword_matches,
        })
    })
}
fn count_keyword_cells(grid: &Grid, row: usize, dictionary: &SovDictionary) -> usize {
    grid.cells_in_row(row)
        .filter(|(_, cell)| {
            let text = cell.normalized();
            dictionary
                .header_keywords()
                .iter()
                .any(|keyword| text.contains(keyword.as_str()))
        })
        .count()
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|c| CellValue::text(*c)).collect()
    }
    fn header() -> Vec<CellValue> {
        text_row(&["Loc #", "DBA", "Street Address", "City", "State", "TIV"])
    }
    #[test]
    fn skips_preamble_rows() {
        let grid = Grid::from_rows(vec![
            text_row(&["First Named Insured", "Acme Hotels LLC"]),
            vec![],
            text_row(&["Please complete all fields"]),
            header(),
            text_row(&["1", "Inn", "1 Main St", "Austin", "TX", "100"]),
        ]);
        let found = find_header_row(&grid, &SovDictionary::builtin(), &ParseOptions::default());
        assert_eq!(
            found,
            Some(HeaderRow {
                row: 4,
                keyword_matches: 5
            })
        );
    }
    #[test]
    fn one_credit_per_cell() {
        // "building value / contents value / tiv" hits three keywords in one cell
        let grid = Grid::from_rows(vec![text_row(&[
            "Building Value / Contents Value / TIV",
            "Address",
            "City",
            "State",
        ])]);
        assert_eq!(
            find_header_row(&grid, &SovDictionary::builtin(), &ParseOptions::default()),
            None
        );
    }
    #[test]
    fn greedy_first_row_over_threshold_wins() {
        let grid = Grid::from_rows(vec![
            text_row(&["address", "city", "state", "zip", "county"]),
            text_row(&["address", "city", "state", "zip", "county", "tiv", "rooms"]),
        ]);
        let found = find_header_row(&grid, &SovDictionary::builtin(), &ParseOptions::default());
        assert_eq!(found.map(|h| h.row), Some(1));
    }
    #[test]
    fn scan_window_is_inclusive_of_its_last_row() {
        let mut rows = vec![Vec::new(); 29];
        rows.push(header());
        let grid = Grid::from_rows(rows);
        let dict = SovDictionary::builtin();
        let found = find_header_row(&grid, &dict, &ParseOptions::default());
        assert_eq!(found.map(|h| h.row), Some(30));
        let narrow = ParseOptions {
            header_scan_rows: 29,
            ..ParseOptions::default()
        };
        assert_eq!(find_header_row(&grid, &dict, &narrow), None);
    }
}
