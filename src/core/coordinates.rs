use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// A normalized geographic position in decimal degrees.
///
/// Produced only by [`normalize`]; immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// The coordinate text matched neither recognized notation.
///
/// Deterministic: re-parsing the same input fails again, so callers must
/// surface this rather than retry or fall back to (0,0).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized coordinate format: {input:?}")]
pub struct FormatError {
    pub input: String,
}

impl FormatError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Decimal notation: signed latitude in [-90, 90] and signed longitude
/// in [-180, 180], comma separated. Range is enforced by the pattern.
static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[-+]?([1-8]?\d(\.\d+)?|90(\.0+)?),\s*[-+]?(180(\.0+)?|((1[0-7]\d)|([1-9]?\d))(\.\d+)?)$"#,
    )
    .expect("decimal coordinate pattern is valid")
});

/// DMS notation: latitude token with N/S hemisphere, then longitude token
/// with E/W. Minutes and seconds are bounded by digit count only.
static DMS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(\d{1,2})°(\d{1,2})'(\d{1,2}(?:\.\d+)?)"([NS])\s*(\d{1,3})°(\d{1,2})'(\d{1,2}(?:\.\d+)?)"([EW])$"#,
    )
    .expect("DMS coordinate pattern is valid")
});

/// Parse a user-supplied coordinate string into a [`Coordinate`].
///
/// The two notations are mutually exclusive by construction: DMS strings
/// contain a degree symbol, decimal strings do not, so detection is by
/// the degree symbol rather than by attempting both parses.
///
/// Decimal components are parsed exactly with no rounding. DMS tokens are
/// converted with `degrees + minutes/60 + seconds/3600`, negated for the
/// S and W hemispheres, and rounded to 6 decimal places to bound
/// floating-point drift.
pub fn normalize(input: &str) -> Result<Coordinate, FormatError> {
    let trimmed = input.trim();
    if trimmed.contains('°') {
        parse_dms(trimmed)
    } else {
        parse_decimal(trimmed)
    }
}

fn parse_decimal(input: &str) -> Result<Coordinate, FormatError> {
    if !DECIMAL_RE.is_match(input) {
        return Err(FormatError::new(input));
    }

    let (lat_text, lng_text) = input.split_once(',').ok_or_else(|| FormatError::new(input))?;

    let latitude = lat_text
        .trim()
        .parse::<f64>()
        .map_err(|_| FormatError::new(input))?;
    let longitude = lng_text
        .trim()
        .parse::<f64>()
        .map_err(|_| FormatError::new(input))?;

    Ok(Coordinate {
        latitude,
        longitude,
    })
}

fn parse_dms(input: &str) -> Result<Coordinate, FormatError> {
    let captures = DMS_RE.captures(input).ok_or_else(|| FormatError::new(input))?;

    let number = |index: usize| -> Result<f64, FormatError> {
        captures
            .get(index)
            .ok_or_else(|| FormatError::new(input))?
            .as_str()
            .parse::<f64>()
            .map_err(|_| FormatError::new(input))
    };

    let lat = dms_to_decimal(number(1)?, number(2)?, number(3)?);
    let lat_hemisphere = captures.get(4).map(|m| m.as_str()).unwrap_or_default();
    let lng = dms_to_decimal(number(5)?, number(6)?, number(7)?);
    let lng_hemisphere = captures.get(8).map(|m| m.as_str()).unwrap_or_default();

    Ok(Coordinate {
        latitude: if lat_hemisphere == "S" { -lat } else { lat },
        longitude: if lng_hemisphere == "W" { -lng } else { lng },
    })
}

#[inline]
fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    round6(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Round to 6 decimal places (about 0.11 m at the equator).
#[inline]
fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Format a coordinate back into DMS text for display.
///
/// Seconds carry one decimal, so a round trip through [`normalize`] stays
/// within 0.0001 degrees of the original value.
pub fn to_dms(coordinate: &Coordinate) -> String {
    format!(
        "{} {}",
        format_component(coordinate.latitude, 'N', 'S'),
        format_component(coordinate.longitude, 'E', 'W'),
    )
}

fn format_component(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    // Work in tenths of seconds so carry from rounding lands in minutes
    // and degrees instead of producing 60.0" tokens.
    let total_tenths = (value.abs() * 36_000.0).round() as i64;
    let degrees = total_tenths / 36_000;
    let minutes = (total_tenths % 36_000) / 600;
    let tenths = total_tenths % 600;

    format!(
        "{}°{:02}'{:04.1}\"{}",
        degrees,
        minutes,
        tenths as f64 / 10.0,
        hemisphere
    )
}
