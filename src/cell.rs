use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
const ZERO_AMOUNT_TOKENS: [&str; 5] = ["n/a", "na", "none", "-", "0"];
const BLANK_TEXT_TOKENS: [&str; 3] = ["none", "0", "0.0"];
const DATE_TEXT_FORMAT: &str = "%m/%d/%Y";
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
}
impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
    pub fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Self::Empty,
            Data::String(s) => Self::Text(s.clone()),
            Data::Float(v) => Self::Number(*v),
            Data::Int(v) => Self::Number(i64_to_f64(*v)),
            Data::Bool(b) => Self::Text((if *b { "TRUE" } else { "FALSE" }).to_owned()),
            Data::DateTime(dt) => {
                if dt.is_duration() {
                    return Self::Number(dt.as_f64());
                }
                dt.as_datetime()
                    .map_or_else(|| Self::Number(dt.as_f64()), Self::Date)
            }
            Data::DateTimeIso(s) => {
                parse_iso_datetime(s).map_or_else(|| Self::Text(s.clone()), Self::Date)
            }
            Data::DurationIso(s) => Self::Text(s.clone()),
        }
    }
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(v) => v.trim().is_empty(),
            Self::Number(_) | Self::Date(_) => false,
        }
    }
    pub fn display_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(v) => v.trim().to_owned(),
            Self::Number(v) => format_number(*v),
            Self::Date(v) => format_datetime(v),
        }
    }
    pub fn normalized(&self) -> String {
        normalize_text(&self.display_text())
    }
    // Unreadable amounts are zero.
    pub fn to_amount(&self) -> f64 {
        match self {
            Self::Empty | Self::Date(_) => 0.0,
            Self::Number(v) => finite_or_zero(*v),
            Self::Text(v) => parse_amount(v),
        }
    }
    pub fn to_integer(&self) -> i64 {
        truncate_to_i64(self.to_amount())
    }
    pub fn to_text(&self) -> String {
        let text = self.display_text();
        if BLANK_TEXT_TOKENS.contains(&text.to_lowercase().as_str()) {
            return String::new();
        }
        text
    }
    pub fn to_date_text(&self) -> Option<String> {
        match self {
            Self::Date(v) => Some(v.format(DATE_TEXT_FORMAT).to_string()),
            Self::Number(v) if is_zero(*v) => None,
            Self::Empty => None,
            Self::Text(_) | Self::Number(_) => Some(self.to_text()),
        }
    }
    pub fn to_sprinkler(&self) -> String {
        classify_sprinkler(self.to_amount())
    }
}
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
pub fn parse_currency(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|ch| !matches!(ch, '$' | ',')).collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
fn parse_amount(s: &str) -> f64 {
    let cleaned: String = s.chars().filter(|ch| !matches!(ch, '$' | ',')).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() || ZERO_AMOUNT_TOKENS.contains(&trimmed.to_lowercase().as_str()) {
        return 0.0;
    }
    parse_currency(trimmed).unwrap_or(0.0)
}
pub fn classify_sprinkler(value: f64) -> String {
    if value >= 1.0 {
        "Yes (100%)".to_owned()
    } else if value > 0.0 {
        format!("Partial ({:.0}%)", value * 100.0)
    } else {
        "No".to_owned()
    }
}
pub fn is_zero(v: f64) -> bool {
    v.abs() < f64::EPSILON
}
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
#[expect(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate, which is the clamp we want"
)]
pub fn truncate_to_i64(v: f64) -> i64 {
    if !v.is_finite() {
        return 0;
    }
    v.trunc() as i64
}
#[expect(
    clippy::as_conversions,
    clippy::cast_precision_loss,
    reason = "spreadsheet integers beyond 2^53 do not occur in practice"
)]
pub fn i64_to_f64(v: i64) -> f64 {
    v as f64
}
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    let t = s.trim();
    NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(t, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}
fn format_datetime(v: &NaiveDateTime) -> String {
    if v.time() == NaiveTime::MIN {
        v.date().to_string()
    } else {
        v.to_string()
    }
}
fn format_number(v: f64) -> String {
    const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
    const I64_MAX_F64: f64 = 9_223_372_036_854_775_807.0;
    if !v.is_finite() {
        return String::new();
    }
    if is_zero(v.fract()) && (I64_MIN_F64..=I64_MAX_F64).contains(&v) {
        if is_zero(v) {
            "0".to_owned()
        } else {
            format!("{v:.0}")
        }
    } else {
        let mut s = format!("{v}");
        if s.contains('.') {
            while s.ends_with('0') {
                s.pop();
            }
            if s.ends_with('.') {
                s.pop();
            }
        }
        s
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap_or_default()
            .and_time(NaiveTime::MIN)
    }
    #[test]
    fn normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize_text("  Building\n  VALUE  "), "building value");
        assert_eq!(normalize_text("\t"), "");
    }
    #[test]
    fn amount_coercion_never_fails() {
        assert!(is_zero(CellValue::Empty.to_amount()));
        assert!(is_zero(CellValue::text("N/A").to_amount()));
        assert!(is_zero(CellValue::text(" - ").to_amount()));
        assert!(is_zero(CellValue::text("none").to_amount()));
        assert!(is_zero(CellValue::text("call agent").to_amount()));
        assert!(is_zero(CellValue::Number(f64::NAN).to_amount()));
        assert!(is_zero(CellValue::Date(date(2024, 1, 1)).to_amount()));
        assert!((CellValue::text("$1,250,000.50").to_amount() - 1_250_000.5).abs() < 1e-6);
        assert!((CellValue::text(" 42 ").to_amount() - 42.0).abs() < 1e-9);
        assert!((CellValue::Number(7.5).to_amount() - 7.5).abs() < 1e-9);
    }
    #[test]
    fn integer_coercion_truncates() {
        assert_eq!(CellValue::Number(3.9).to_integer(), 3);
        assert_eq!(CellValue::text("1,998.7").to_integer(), 1998);
        assert_eq!(CellValue::text("n/a").to_integer(), 0);
        assert_eq!(CellValue::Number(-2.5).to_integer(), -2);
    }
    #[test]
    fn text_coercion_blanks_zero_literals() {
        assert_eq!(CellValue::text("  Frame ").to_text(), "Frame");
        assert_eq!(CellValue::text("None").to_text(), "");
        assert_eq!(CellValue::text("0.0").to_text(), "");
        assert_eq!(CellValue::Number(0.0).to_text(), "");
        assert_eq!(CellValue::Number(30_303.0).to_text(), "30303");
        assert_eq!(CellValue::Number(2.50).to_text(), "2.5");
        assert_eq!(CellValue::Empty.to_text(), "");
    }
    #[test]
    fn date_text_uses_us_format_for_native_dates() {
        assert_eq!(
            CellValue::Date(date(2025, 3, 1)).to_date_text().as_deref(),
            Some("03/01/2025")
        );
        assert_eq!(
            CellValue::text(" 3/1/25 ").to_date_text().as_deref(),
            Some("3/1/25")
        );
        assert_eq!(CellValue::Empty.to_date_text(), None);
    }
    #[test]
    fn sprinkler_classification() {
        assert_eq!(CellValue::Number(1.0).to_sprinkler(), "Yes (100%)");
        assert_eq!(CellValue::Number(0.5).to_sprinkler(), "Partial (50%)");
        assert_eq!(CellValue::Number(0.0).to_sprinkler(), "No");
        assert_eq!(CellValue::text("yes").to_sprinkler(), "No");
        assert_eq!(CellValue::Number(100.0).to_sprinkler(), "Yes (100%)");
    }
    #[test]
    fn currency_parse_reports_failure() {
        assert_eq!(parse_currency("$12,000"), Some(12_000.0));
        assert_eq!(parse_currency("TBD"), None);
        assert_eq!(parse_currency("inf"), None);
    }
    #[test]
    fn calamine_values_map_onto_closed_variant() {
        assert_eq!(CellValue::from_data(&Data::Int(12)), CellValue::Number(12.0));
        assert_eq!(
            CellValue::from_data(&Data::Bool(true)),
            CellValue::text("TRUE")
        );
        assert_eq!(
            CellValue::from_data(&Data::DateTimeIso("2024-07-01".to_owned())),
            CellValue::Date(date(2024, 7, 1))
        );
        assert_eq!(
            CellValue::from_data(&Data::Error(calamine::CellErrorType::NA)),
            CellValue::Empty
        );
    }
}
