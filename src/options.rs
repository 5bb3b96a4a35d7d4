use std::env;
pub const DEFAULT_HEADER_SCAN_ROWS: usize = 30;
pub const DEFAULT_HEADER_MIN_MATCHES: usize = 5;
const MAX_ENV_VALUE: usize = 10_000;
pub const HEADER_SCAN_ROWS_ENV: &str = "SOVPARSE_HEADER_SCAN_ROWS";
pub const HEADER_MIN_MATCHES_ENV: &str = "SOVPARSE_HEADER_MIN_MATCHES";
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub header_scan_rows: usize,
    pub header_min_matches: usize,
}
impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            header_scan_rows: DEFAULT_HEADER_SCAN_ROWS,
            header_min_matches: DEFAULT_HEADER_MIN_MATCHES,
        }
    }
}
impl ParseOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            header_scan_rows: positive_setting(
                lookup(HEADER_SCAN_ROWS_ENV),
                defaults.header_scan_rows,
            ),
            header_min_matches: positive_setting(
                lookup(HEADER_MIN_MATCHES_ENV),
                defaults.header_min_matches,
            ),
        }
    }
}
fn positive_setting(raw: Option<String>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
        .map_or(default, |v| v.min(MAX_ENV_VALUE))
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn env_overrides_fall_back_on_bad_values() {
        let opts = ParseOptions::from_lookup(|key| match key {
            HEADER_SCAN_ROWS_ENV => Some(" 60 ".to_owned()),
            HEADER_MIN_MATCHES_ENV => Some("zero".to_owned()),
            _ => None,
        });
        assert_eq!(opts.header_scan_rows, 60);
        assert_eq!(opts.header_min_matches, DEFAULT_HEADER_MIN_MATCHES);
        let capped = ParseOptions::from_lookup(|_| Some("99999999".to_owned()));
        assert_eq!(capped.header_scan_rows, 10_000);
        let zero = ParseOptions::from_lookup(|_| Some("0".to_owned()));
        assert_eq!(zero, ParseOptions::default());
    }
}
