// File: crates/forest-core/src/csv_input.rs
// Summary: CSV ingestion: header alias resolution, delimiter sniffing, lenient numeric cells,
// and a Dataset that only commits fully parsed files.

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, error, info, warn};

use crate::error::{ForestError, ForestResult};
use crate::row::RawRow;

pub const STUDY_ALIASES: &[&str] = &["study", "Study", "name", "Name", "Studie"];
pub const EFFECT_ALIASES: &[&str] = &["effect", "Effect", "or", "OR", "value", "ES"];
pub const CI_LOW_ALIASES: &[&str] =
    &["ci_low", "CI_low", "ciLower", "lower", "Lower", "Untere_KI", "untere_KI", "untere_ki"];
pub const CI_HIGH_ALIASES: &[&str] =
    &["ci_high", "CI_high", "ciUpper", "upper", "Upper", "Obere_KI", "obere_KI", "obere_ki"];
pub const WEIGHT_ALIASES: &[&str] = &["weight", "Weight"];

/// Column index per field, resolved case-sensitively from the header row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub study: usize,
    pub effect: Option<usize>,
    pub ci_low: Option<usize>,
    pub ci_high: Option<usize>,
    pub weight: Option<usize>,
}

impl ColumnMap {
    pub fn resolve(headers: &StringRecord) -> ForestResult<Self> {
        // First alias in table order wins, regardless of column order.
        let idx = |names: &[&str]| -> Option<usize> {
            names.iter().find_map(|want| headers.iter().position(|h| h == *want))
        };
        let study = idx(STUDY_ALIASES).ok_or_else(|| ForestError::MissingColumn {
            column: "study",
            accepted: STUDY_ALIASES.join(", "),
        })?;
        let map = Self {
            study,
            effect: idx(EFFECT_ALIASES),
            ci_low: idx(CI_LOW_ALIASES),
            ci_high: idx(CI_HIGH_ALIASES),
            weight: idx(WEIGHT_ALIASES),
        };
        if map.effect.is_none() {
            warn!("no effect column found; every row will be treated as a subheader");
        }
        Ok(map)
    }

    fn row(&self, rec: &StringRecord) -> Option<RawRow> {
        let study = rec.get(self.study).map(str::trim).filter(|s| !s.is_empty())?;
        let num = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).and_then(parse_number);
        Some(RawRow {
            study: study.to_string(),
            effect: num(self.effect),
            ci_low: num(self.ci_low),
            ci_high: num(self.ci_high),
            weight: num(self.weight),
        })
    }
}

/// Lenient numeric cell: blank, unparsable and non-finite cells are missing.
/// A decimal comma is accepted when the cell has no dot (`1,25`).
pub fn parse_number(cell: &str) -> Option<f64> {
    let s = cell.trim();
    if s.is_empty() {
        return None;
    }
    let v = match s.parse::<f64>() {
        Ok(v) => v,
        Err(_) if s.contains(',') && !s.contains('.') => s.replacen(',', ".", 1).parse::<f64>().ok()?,
        Err(_) => return None,
    };
    v.is_finite().then_some(v)
}

/// Pick the delimiter from the header line: the most frequent of `,` `;` tab, comma on ties.
pub fn sniff_delimiter(header_line: &str) -> u8 {
    let mut best = (b',', header_line.matches(',').count());
    for d in [b';', b'\t'] {
        let n = header_line.bytes().filter(|&b| b == d).count();
        if n > best.1 {
            best = (d, n);
        }
    }
    best.0
}

/// Parse CSV text into rows. Rows without a study label are dropped.
pub fn read_str(text: &str) -> ForestResult<Vec<RawRow>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let delimiter = sniff_delimiter(text.lines().next().unwrap_or(""));

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    debug!(?headers, delimiter = ?(delimiter as char), "csv headers");
    let columns = ColumnMap::resolve(&headers)?;

    let mut out = Vec::new();
    let mut dropped = 0usize;
    for rec in rdr.records() {
        match columns.row(&rec?) {
            Some(row) => out.push(row),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        warn!(dropped, "skipped rows without a study label");
    }
    Ok(out)
}

pub fn read_reader<R: Read>(mut reader: R) -> ForestResult<Vec<RawRow>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    read_str(&text)
}

pub fn read_path(path: impl AsRef<Path>) -> ForestResult<Vec<RawRow>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    read_str(&text)
}

/// Currently committed rows. A failed load leaves the previous rows untouched.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rows: Vec<RawRow>,
    source: Option<PathBuf>,
}

impl Dataset {
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Replace the rows with the contents of `path`; returns the new row count.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> ForestResult<usize> {
        let path = path.as_ref();
        let parsed = read_path(path);
        self.commit(parsed, Some(path.to_path_buf()))
    }

    pub fn load_reader<R: Read>(&mut self, reader: R) -> ForestResult<usize> {
        let parsed = read_reader(reader);
        self.commit(parsed, None)
    }

    fn commit(&mut self, parsed: ForestResult<Vec<RawRow>>, source: Option<PathBuf>) -> ForestResult<usize> {
        match parsed {
            Ok(rows) => {
                info!(rows = rows.len(), source = ?source, "loaded dataset");
                self.rows = rows;
                self.source = source;
                Ok(self.rows.len())
            }
            Err(e) => {
                error!(error = %e, source = ?source, "csv load failed; keeping previous rows");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_degrade_to_missing() {
        assert_eq!(parse_number(" 1.5 "), Some(1.5));
        assert_eq!(parse_number("1,25"), Some(1.25));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("1,2.5"), None);
    }

    #[test]
    fn delimiter_sniffing() {
        assert_eq!(sniff_delimiter("study,effect,ci_low"), b',');
        assert_eq!(sniff_delimiter("Studie;OR;Untere_KI;Obere_KI"), b';');
        assert_eq!(sniff_delimiter("study\teffect\tlower"), b'\t');
        assert_eq!(sniff_delimiter("study"), b',');
    }

    #[test]
    fn alias_priority_follows_table_order() {
        let headers = StringRecord::from(vec!["name", "study", "OR", "effect"]);
        let m = ColumnMap::resolve(&headers).unwrap();
        assert_eq!(m.study, 1);
        assert_eq!(m.effect, Some(3));
    }

    #[test]
    fn header_matching_is_case_sensitive() {
        let headers = StringRecord::from(vec!["STUDY", "effect"]);
        assert!(matches!(ColumnMap::resolve(&headers), Err(ForestError::MissingColumn { column: "study", .. })));
    }
}
