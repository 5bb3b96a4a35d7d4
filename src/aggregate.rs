use crate::location::{AggregatedLocation, BuildingGroup, LocationRow, ParseResult};
use std::collections::HashMap;
use tracing::info;
// Groups keep the order in which their key first appears. Re-aggregating
// keeps the original building rows and counts.
pub fn aggregate_locations<L: BuildingGroup>(
    result: &ParseResult<L>,
) -> ParseResult<AggregatedLocation> {
    let mut slots: HashMap<i64, usize> = HashMap::new();
    let mut aggregated: Vec<AggregatedLocation> = Vec::new();
    for group in &result.locations {
        let row = group.as_ref();
        let key = row.grouping_key();
        if let Some(entry) = slots.get(&key).and_then(|i| aggregated.get_mut(*i)) {
            absorb(entry, row, group.buildings());
            continue;
        }
        slots.insert(key, aggregated.len());
        let mut location = row.clone();
        location.location_num = Some(key);
        aggregated.push(AggregatedLocation {
            location,
            building_count: group.buildings(),
        });
    }
    let raw = result.locations_raw.clone().unwrap_or_else(|| {
        result
            .locations
            .iter()
            .map(|loc| loc.as_ref().clone())
            .collect()
    });
    info!(
        buildings = raw.len(),
        locations = aggregated.len(),
        "aggregated sov buildings into locations"
    );
    ParseResult::new(result.summary.clone(), aggregated, Some(raw))
}
fn absorb(entry: &mut AggregatedLocation, row: &LocationRow, buildings: usize) {
    let loc = &mut entry.location;
    add_amount(&mut loc.building_value, row.building_value);
    add_amount(&mut loc.contents_value, row.contents_value);
    add_amount(&mut loc.bi_value, row.bi_value);
    add_amount(&mut loc.other_value, row.other_value);
    add_amount(&mut loc.pool_value, row.pool_value);
    add_amount(&mut loc.sign_value, row.sign_value);
    add_amount(&mut loc.tiv, row.tiv);
    add_count(&mut loc.num_rooms, row.num_rooms);
    add_count(&mut loc.square_footage, row.square_footage);
    loc.stories = match (loc.stories, row.stories) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };
    entry.building_count = entry.building_count.saturating_add(buildings);
}
// Sums stay absent only while no row in the group had the column.
fn add_amount(acc: &mut Option<f64>, value: Option<f64>) {
    if let Some(v) = value {
        *acc = Some(acc.unwrap_or(0.0) + v);
    }
}
fn add_count(acc: &mut Option<i64>, value: Option<i64>) {
    if let Some(v) = value {
        *acc = Some(acc.unwrap_or(0).saturating_add(v));
    }
}
