use crate::{columns::ColumnMap, grid::Grid, location::LocationRow};
use tracing::debug;
pub fn extract_locations(grid: &Grid, header_row: usize, columns: &ColumnMap) -> Vec<LocationRow> {
    let mut locations = Vec::new();
    for row in header_row + 1..=grid.row_count() {
        if !has_anchor_value(grid, row, columns) {
            debug!(row, "skipping sov row without address, name or city");
            continue;
        }
        let mut location = LocationRow::default();
        for (col, field) in columns.iter() {
            location.set(field, grid.cell(row, col));
        }
        location.complete_tiv();
        if location.location_num.unwrap_or(0) == 0 {
            location.location_num = Some(sequence_number(locations.len()));
        }
        locations.push(location);
    }
    locations
}
fn has_anchor_value(grid: &Grid, row: usize, columns: &ColumnMap) -> bool {
    columns
        .iter()
        .filter(|(_, field)| field.is_anchor())
        .any(|(col, _)| !grid.cell(row, col).is_blank())
}
fn sequence_number(retained: usize) -> i64 {
    i64::try_from(retained)
        .map_or(i64::MAX, |n| n.saturating_add(1))
}
