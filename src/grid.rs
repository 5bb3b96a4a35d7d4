use crate::{
    cell::CellValue,
    error::{Result, SovError},
};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;
static EMPTY_CELL: CellValue = CellValue::Empty;
const SUPPORTED_EXTENSIONS: [&str; 3] = ["xlsx", "xlsm", "xls"];
// Row 1, column 1 is cell A1 whatever the sheet's used range is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}
impl Grid {
    pub const fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }
    pub fn from_range(range: &Range<Data>, max_rows: Option<usize>) -> Self {
        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        let top = u32_to_usize(start_row);
        let left = u32_to_usize(start_col);
        let limit = max_rows.unwrap_or(usize::MAX);
        let mut rows: Vec<Vec<CellValue>> = Vec::new();
        rows.resize_with(top.min(limit), Vec::new);
        for data_row in range.rows() {
            if rows.len() >= limit {
                break;
            }
            let mut row = vec![CellValue::Empty; left];
            row.extend(data_row.iter().map(CellValue::from_data));
            while row.last().is_some_and(CellValue::is_blank) {
                row.pop();
            }
            rows.push(row);
        }
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        Self { rows }
    }
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
    pub fn row(&self, row: usize) -> &[CellValue] {
        row.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        col.checked_sub(1)
            .and_then(|i| self.row(row).get(i))
            .unwrap_or(&EMPTY_CELL)
    }
    pub fn cells_in_row(&self, row: usize) -> impl Iterator<Item = (usize, &CellValue)> {
        self.row(row)
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_blank())
            .map(|(i, cell)| (i + 1, cell))
    }
}
// calamine decodes the whole sheet; `max_rows` only caps the rows copied
// into the grid.
pub fn load_first_sheet(path: &Path, max_rows: Option<usize>) -> Result<Grid> {
    check_extension(path)?;
    let mut workbook = open_workbook_auto(path).map_err(|source| SovError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SovError::EmptyWorkbook(path.to_path_buf()))?
        .map_err(|source| SovError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Grid::from_range(&range, max_rows))
}
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|v| v.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
fn check_extension(path: &Path) -> Result<()> {
    if is_supported_extension(path) {
        Ok(())
    } else {
        Err(SovError::UnsupportedExtension(path.to_path_buf()))
    }
}
fn u32_to_usize(v: u32) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn range_offset_is_restored_to_absolute_coordinates() {
        let mut range: Range<Data> = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("Address".to_owned()));
        range.set_value((3, 2), Data::Float(12.0));
        let grid = Grid::from_range(&range, None);
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.cell(3, 2), &CellValue::text("Address"));
        assert_eq!(grid.cell(4, 3), &CellValue::Number(12.0));
        assert_eq!(grid.cell(1, 1), &CellValue::Empty);
        assert_eq!(grid.cell(0, 0), &CellValue::Empty);
        assert_eq!(grid.cell(99, 99), &CellValue::Empty);
    }
    #[test]
    fn max_rows_truncates_at_absolute_row() {
        let mut range: Range<Data> = Range::new((0, 0), (9, 0));
        for r in 0..10 {
            range.set_value((r, 0), Data::Int(i64::from(r)));
        }
        let grid = Grid::from_range(&range, Some(3));
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.cell(3, 1), &CellValue::Number(2.0));
    }
    #[test]
    fn cells_in_row_skips_blanks() {
        let grid = Grid::from_rows(vec![vec![
            CellValue::text("a"),
            CellValue::text("  "),
            CellValue::Number(1.0),
        ]]);
        let cols: Vec<usize> = grid.cells_in_row(1).map(|(c, _)| c).collect();
        assert_eq!(cols, vec![1, 3]);
        assert_eq!(grid.cells_in_row(2).count(), 0);
    }
    #[test]
    fn extension_filter() {
        assert!(is_supported_extension(Path::new("sov.XLSX")));
        assert!(is_supported_extension(Path::new("legacy.xls")));
        assert!(!is_supported_extension(Path::new("notes.csv")));
        assert!(matches!(
            load_first_sheet(Path::new("values.pdf"), None),
            Err(SovError::UnsupportedExtension(_))
        ));
    }
}
