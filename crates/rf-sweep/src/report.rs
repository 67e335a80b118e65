//! CSV report of a finished grid sweep.
//!
//! Layout (`;`-delimited, one record per line):
//!
//! ```text
//! Steady-state CSTR report
//! # Generated: 2026-10-19T12:00:00+00:00
//!
//! Raw type;Feedstock A
//! Vr;10
//! k1;0.1
//! ...
//! dCAin;0.1
//!
//! Q;CA_in;CB
//! 1.00;0.100;0.0606
//! ```
//!
//! Q is written with 2 decimals, CA_in with 3 and CB with 4. A point outside
//! the model domain has an empty CB field. The title and raw type name are
//! free text and are quoted when they contain the delimiter, a quote or a
//! line break.

use crate::error::SweepError;
use crate::executor::{GridSweep, SweepResult};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::path::Path;

pub const DELIMITER: char = ';';
pub const DEFAULT_TITLE: &str = "Steady-state CSTR report";

/// Byte-order mark written at the start of report files for spreadsheet tools.
const UTF8_BOM: &str = "\u{feff}";

/// Parameter block at the top of a report.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    pub title: String,
    pub raw_type: String,
    pub sweep: GridSweep,
    pub generated_at: DateTime<Utc>,
}

impl ReportHeader {
    pub fn new(raw_type: impl Into<String>, sweep: GridSweep) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            raw_type: raw_type.into(),
            sweep,
            generated_at: Utc::now(),
        }
    }

    fn parameter_rows(&self) -> [(&'static str, f64); 9] {
        let s = &self.sweep;
        [
            ("Vr", s.vr),
            ("k1", s.k1),
            ("k2", s.k2),
            ("Q_min", s.q.min),
            ("Q_max", s.q.max),
            ("dQ", s.q.step),
            ("CAin_min", s.ca_in.min),
            ("CAin_max", s.ca_in.max),
            ("dCAin", s.ca_in.step),
        ]
    }
}

/// Render the report as a string.
pub fn render_csv_report(header: &ReportHeader, result: &SweepResult) -> Result<String, SweepError> {
    if result.is_empty() {
        return Err(SweepError::EmptyReport);
    }

    let d = DELIMITER;
    let mut out = format!("{}\n", quote_field(&header.title));
    out.push_str(&format!("# Generated: {}\n\n", header.generated_at.to_rfc3339()));
    out.push_str(&format!("Raw type{d}{}\n", quote_field(&header.raw_type)));
    for (label, value) in header.parameter_rows() {
        out.push_str(&format!("{label}{d}{value}\n"));
    }
    out.push_str(&format!("\nQ{d}CA_in{d}CB\n"));
    for p in &result.points {
        let cb = p.cb.map(|cb| format!("{cb:.4}")).unwrap_or_default();
        out.push_str(&format!("{:.2}{d}{:.3}{d}{cb}\n", p.q, p.ca_in));
    }
    Ok(out)
}

/// Quote a free-text field RFC 4180 style: wrap in `"` and double inner `"`.
fn quote_field(text: &str) -> Cow<'_, str> {
    if text.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", text.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(text)
    }
}

/// Write the report to `path`, prefixed with a UTF-8 byte-order mark.
pub fn write_csv_report(
    path: &Path,
    header: &ReportHeader,
    result: &SweepResult,
) -> Result<(), SweepError> {
    let body = render_csv_report(header, result)?;
    std::fs::write(path, format!("{UTF8_BOM}{body}"))?;
    tracing::debug!(
        path = %path.display(),
        rows = result.points.len(),
        "wrote sweep report"
    );
    Ok(())
}
