//! Date-fragment parsing.
//!
//! A fragment is two `-`-separated fields, one of which is expected to be a
//! four-character year: `MM-YYYY` or `YYYY-MM`. Trailing fields such as the
//! day of `YYYY-MM-DD` are dropped. The canonical form pins the value to the
//! first of the month: `YYYY-MM-01`.

use crate::errors::DateError;

const SEPARATOR: char = '-';
const YEAR_WIDTH: usize = 4;

/// Which reading of the two fields was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    /// Second field is the year: `MM-YYYY`.
    MonthYear,
    /// First field is the year: `YYYY-MM`.
    YearMonth,
    /// Neither field is four characters wide. Read as year-month, which is
    /// wrong for `MM-DD` style input; callers should report these rows.
    Ambiguous,
}

/// A parsed date fragment. Fields are kept as written, no padding or digit
/// checks are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFragment {
    pub year: String,
    pub month: String,
    pub order: FieldOrder,
    /// Fields after the second (a day, usually) were discarded.
    pub dropped_fields: usize,
}

impl DateFragment {
    /// `{year}-{month}-01`.
    pub fn canonical(&self) -> String {
        format!("{}-{}-01", self.year, self.month)
    }

    pub fn is_ambiguous(&self) -> bool {
        self.order == FieldOrder::Ambiguous
    }

    /// True when the fragment carried more than two fields, e.g. `YYYY-MM-DD`.
    pub fn day_dropped(&self) -> bool {
        self.dropped_fields > 0
    }
}

/// Parse a raw fragment.
///
/// Requires at least two fields; only the first two are read and any further
/// field (a day component) is discarded. If the second field is four
/// characters wide it is the year, otherwise the first field is.
pub fn parse_fragment(raw: &str) -> Result<DateFragment, DateError> {
    let fields: Vec<&str> = raw.split(SEPARATOR).collect();
    let [first, second, rest @ ..] = fields.as_slice() else {
        return Err(DateError::FieldCount {
            raw: raw.to_string(),
            found: fields.len(),
        });
    };

    let (year, month, order) = if width(second) == YEAR_WIDTH {
        (second, first, FieldOrder::MonthYear)
    } else if width(first) == YEAR_WIDTH {
        (first, second, FieldOrder::YearMonth)
    } else {
        (first, second, FieldOrder::Ambiguous)
    };

    Ok(DateFragment {
        year: (*year).to_string(),
        month: (*month).to_string(),
        order,
        dropped_fields: rest.len(),
    })
}

/// Parse and render in one step.
pub fn canonicalize(raw: &str) -> Result<String, DateError> {
    parse_fragment(raw).map(|fragment| fragment.canonical())
}

fn width(field: &str) -> usize {
    field.chars().count()
}
