use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::foundation::core::Rect;
use crate::foundation::error::{FloorplotError, FloorplotResult};

/// Input file name the default entry point reads from the working directory.
pub const DEFAULT_INPUT: &str = "plot_data.txt";

/// Number of single-space separated tokens a record line must have.
pub const RECORD_TOKENS: usize = 5;

/// One placed block: `<name> <width> <height> <x> <y>`.
///
/// `(x, y)` is the lower-left corner in plot units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectangleRecord {
    /// Block identifier; carried through but never drawn.
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl RectangleRecord {
    /// Data-space rectangle from `(x, y)` to `(x + width, y + height)`.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Parse one input line.
///
/// Returns `Ok(None)` when the trimmed line does not split on `' '` into exactly five tokens.
/// Repeated spaces produce empty tokens and count toward the total.
pub fn parse_line(line: &str, line_no: usize) -> FloorplotResult<Option<RectangleRecord>> {
    let tokens: Vec<&str> = line.trim().split(' ').collect();
    let [name, width, height, x, y] = tokens.as_slice() else {
        return Ok(None);
    };

    // Numeric tokens may carry stray tabs or other whitespace around the number.
    let num = |field: &'static str, token: &str| -> FloorplotResult<f64> {
        token.trim().parse::<f64>().map_err(|source| FloorplotError::Parse {
            line: line_no,
            field,
            token: token.to_owned(),
            source,
        })
    };

    Ok(Some(RectangleRecord {
        name: (*name).to_owned(),
        width: num("width", *width)?,
        height: num("height", *height)?,
        x: num("x", *x)?,
        y: num("y", *y)?,
    }))
}

/// Parse every line of `text`, in order. Line numbers in errors are 1-based.
pub fn parse_records(text: &str) -> FloorplotResult<Vec<RectangleRecord>> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(rec) = parse_line(line, idx + 1)? {
            out.push(rec);
        }
    }
    Ok(out)
}

/// Parse records from any buffered reader. `origin` names the source in I/O errors.
pub fn read_records_from<R: BufRead>(
    mut r: R,
    origin: &Path,
) -> FloorplotResult<Vec<RectangleRecord>> {
    let mut text = String::new();
    r.read_to_string(&mut text)
        .map_err(|e| FloorplotError::io(origin, e))?;
    parse_records(&text)
}

/// Read and parse a rectangle dump from disk.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_records(path: impl AsRef<Path>) -> FloorplotResult<Vec<RectangleRecord>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| FloorplotError::io(path, e))?;
    let records = read_records_from(BufReader::new(f), path)?;
    tracing::debug!(records = records.len(), "parsed rectangle dump");
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/unit/input/records.rs"]
mod tests;
