use crate::{
    dictionary::{Field, SovDictionary},
    grid::Grid,
};
use std::collections::BTreeMap;
use tracing::info;
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: BTreeMap<usize, Field>,
}
impl ColumnMap {
    pub fn insert(&mut self, col: usize, field: Field) -> bool {
        if self.columns.contains_key(&col) || self.columns.values().any(|f| *f == field) {
            return false;
        }
        self.columns.insert(col, field);
        true
    }
    pub fn iter(&self) -> impl Iterator<Item = (usize, Field)> + '_ {
        self.columns.iter().map(|(col, field)| (*col, *field))
    }
    pub fn len(&self) -> usize {
        self.columns.len()
    }
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
pub fn map_columns(grid: &Grid, header_row: usize, dictionary: &SovDictionary) -> ColumnMap {
    let mut map = ColumnMap::default();
    for (col, cell) in grid.cells_in_row(header_row) {
        if let Some(field) = match_header(&cell.normalized(), dictionary) {
            map.insert(col, field);
        }
    }
    info!(
        columns = map.len(),
        fields = ?map.iter().map(|(_, f)| f).collect::<Vec<_>>(),
        "mapped sov columns"
    );
    map
}
// Exact lookups first, then whole-word matches inside the header text.
pub fn match_header(normalized: &str, dictionary: &SovDictionary) -> Option<Field> {
    let cleaned = strip_leading_asterisks(normalized);
    let without_dollar = strip_dollar_suffix(cleaned);
    [normalized, cleaned, without_dollar]
        .into_iter()
        .find_map(|candidate| dictionary.lookup(candidate))
        .or_else(|| {
            dictionary
                .partial_candidates()
                .iter()
                .find(|(variant, _)| {
                    contains_bounded(normalized, variant) || contains_bounded(cleaned, variant)
                })
                .map(|(_, field)| *field)
        })
}
fn strip_leading_asterisks(s: &str) -> &str {
    s.trim_start_matches('*').trim()
}
fn strip_dollar_suffix(s: &str) -> &str {
    s.strip_suffix("($)").unwrap_or(s).trim()
}
fn contains_bounded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, matched)| {
        let before = haystack.get(..start).and_then(|s| s.chars().next_back());
        let after = haystack
            .get(start + matched.len()..)
            .and_then(|s| s.chars().next());
        let first = matched.chars().next();
        let last = matched.chars().next_back();
        is_edge(before, first) && is_edge(after, last)
    })
}
fn is_edge(outside: Option<char>, inside: Option<char>) -> bool {
    match (outside, inside) {
        (None, _) => true,
        (Some(o), _) if o.is_whitespace() => true,
        (Some(o), Some(i)) => is_word_char(o) != is_word_char(i),
        (Some(_), None) => false,
    }
}
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
