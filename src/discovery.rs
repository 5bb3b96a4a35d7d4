use crate::{
    error::{Result, SovError},
    grid::is_supported_extension,
};
use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};
pub fn collect_spreadsheets(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for input in inputs {
        if input.is_dir() {
            out.extend(spreadsheets_in_dir(input)?);
        } else {
            out.push(input.clone());
        }
    }
    Ok(out)
}
pub fn spreadsheets_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| SovError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() || !is_supported_extension(&path) {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        // Excel lock files
        if file_name.starts_with("~$") {
            continue;
        }
        candidates.push(Candidate {
            natural_key: split_natural_parts(&file_name.to_lowercase()),
            path,
        });
    }
    candidates.sort_by(|a, b| {
        compare_natural_parts(&a.natural_key, &b.natural_key).then_with(|| a.path.cmp(&b.path))
    });
    Ok(candidates.into_iter().map(|c| c.path).collect())
}
struct Candidate {
    path: PathBuf,
    natural_key: Vec<NaturalPart>,
}
#[derive(Debug, Clone, PartialEq, Eq)]
enum NaturalPart {
    Number { digits: String, raw_len: usize },
    Text(String),
}
fn split_natural_parts(s: &str) -> Vec<NaturalPart> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut in_digits: Option<bool> = None;
    for ch in s.chars() {
        let is_digit = ch.is_ascii_digit();
        if in_digits.is_some_and(|mode| mode != is_digit) {
            out.push(natural_part(&buf, !is_digit));
            buf.clear();
        }
        in_digits = Some(is_digit);
        buf.push(ch);
    }
    if let Some(mode) = in_digits {
        out.push(natural_part(&buf, mode));
    }
    out
}
fn natural_part(raw: &str, digits: bool) -> NaturalPart {
    if !digits {
        return NaturalPart::Text(raw.to_owned());
    }
    let trimmed = raw.trim_start_matches('0');
    NaturalPart::Number {
        digits: if trimmed.is_empty() { "0" } else { trimmed }.to_owned(),
        raw_len: raw.len(),
    }
}
fn compare_natural_parts(a: &[NaturalPart], b: &[NaturalPart]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| compare_natural_part(x, y))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}
fn compare_natural_part(a: &NaturalPart, b: &NaturalPart) -> Ordering {
    match (a, b) {
        (
            NaturalPart::Number {
                digits: a_digits,
                raw_len: a_len,
            },
            NaturalPart::Number {
                digits: b_digits,
                raw_len: b_len,
            },
        ) => a_digits
            .len()
            .cmp(&b_digits.len())
            .then_with(|| a_digits.cmp(b_digits))
            .then_with(|| a_len.cmp(b_len)),
        (NaturalPart::Text(x), NaturalPart::Text(y)) => x.cmp(y),
        (NaturalPart::Number { .. }, NaturalPart::Text(_)) => Ordering::Less,
        (NaturalPart::Text(_), NaturalPart::Number { .. }) => Ordering::Greater,
    }
}
