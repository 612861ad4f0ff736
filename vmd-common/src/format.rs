//! Text formatting helpers used by the card

use chrono::{DateTime, FixedOffset, Locale, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{Error, Result};

/// Distance in km: no decimals from 10 km up, one decimal below
pub fn format_distance(distance: Option<f64>) -> Option<String> {
    match distance {
        Some(d) if d.is_finite() && d >= 10.0 => Some(to_fixed(d, 0)),
        Some(d) if d.is_finite() && d >= 0.0 => Some(to_fixed(d, 1)),
        _ => None,
    }
}

/// Fixed-point rendering with exact ties rounded away from zero
fn to_fixed(value: f64, digits: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded = exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits);
            rounded.to_string()
        }
        None => format!("{:.*}", digits as usize, value),
    }
}

/// Format an ISO-8601 timestamp as "lundi 12 avril à 14:30"
///
/// The wall-clock time is the one of the timestamp's own offset. Timestamps
/// without an offset are displayed as-is.
pub fn format_fr_datetime(iso: &str) -> Result<String> {
    let iso = iso.trim();
    let datetime: DateTime<FixedOffset> = match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt,
        Err(_) => NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|_| Error::InvalidDate(iso.to_string()))?
            .and_utc()
            .fixed_offset(),
    };

    Ok(datetime
        .format_localized("%A %-d %B à %H:%M", Locale::fr_FR)
        .to_string())
}

/// Normalize a French phone number to "01 23 45 67 89"
///
/// International `+33`/`0033` prefixes become a leading `0`. Numbers that do
/// not end up with ten digits are returned trimmed but otherwise untouched.
pub fn normalize_phone_number(raw: &str) -> String {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    let national = if let Some(rest) = compact.strip_prefix("+33") {
        format!("0{}", rest)
    } else if let Some(rest) = compact.strip_prefix("0033") {
        format!("0{}", rest)
    } else {
        compact
    };

    if national.len() != 10 || !national.chars().all(|c| c.is_ascii_digit()) {
        return raw.trim().to_string();
    }

    national
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `suffix` when `count` calls for a plural
pub fn plural(count: u32, suffix: &str) -> &str {
    if count > 1 {
        suffix
    } else {
        ""
    }
}

/// French digit grouping, e.g. `12 345`
pub fn format_count(count: u32) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(c);
    }
    grouped
}

/// "42 créneaux" / "1 créneau"
pub fn format_slot_count(count: u32) -> String {
    format!("{} créneau{}", format_count(count), plural(count, "x"))
}

/// Join the static asset base path with an asset path
pub fn asset_url(base_path: &str, path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    format!("{}/{}", base, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_formatting() {
        assert_eq!(format_distance(Some(12.0)).as_deref(), Some("12"));
        assert_eq!(format_distance(Some(27.4)).as_deref(), Some("27"));
        assert_eq!(format_distance(Some(10.0)).as_deref(), Some("10"));
        assert_eq!(format_distance(Some(4.5)).as_deref(), Some("4.5"));
        assert_eq!(format_distance(Some(9.96)).as_deref(), Some("10.0"));
        assert_eq!(format_distance(Some(0.0)).as_deref(), Some("0.0"));
        assert_eq!(format_distance(None), None);
    }

    #[test]
    fn test_distance_ties_round_up() {
        assert_eq!(format_distance(Some(12.5)).as_deref(), Some("13"));
        assert_eq!(format_distance(Some(10.5)).as_deref(), Some("11"));
        assert_eq!(format_distance(Some(4.25)).as_deref(), Some("4.3"));
        assert_eq!(format_distance(Some(0.25)).as_deref(), Some("0.3"));
        assert_eq!(format_distance(Some(4.0)).as_deref(), Some("4.0"));
    }

    #[test]
    fn test_distance_near_ties_follow_binary_value() {
        // 4.35 is stored as 4.3499999...
        assert_eq!(format_distance(Some(4.35)).as_deref(), Some("4.3"));
    }

    #[test]
    fn test_distance_rejects_garbage() {
        assert_eq!(format_distance(Some(f64::NAN)), None);
        assert_eq!(format_distance(Some(-1.0)), None);
    }

    #[test]
    fn test_fr_datetime() {
        assert_eq!(
            format_fr_datetime("2021-04-12T14:30:00+02:00").unwrap(),
            "lundi 12 avril à 14:30"
        );
        assert_eq!(
            format_fr_datetime("2021-08-01T09:05:00Z").unwrap(),
            "dimanche 1 août à 09:05"
        );
        assert_eq!(
            format_fr_datetime("2021-12-31T23:59:00").unwrap(),
            "vendredi 31 décembre à 23:59"
        );
    }

    #[test]
    fn test_fr_datetime_invalid() {
        let err = format_fr_datetime("demain").unwrap_err();
        assert!(matches!(err, Error::InvalidDate(s) if s == "demain"));
    }

    #[test]
    fn test_phone_normalization() {
        assert_eq!(normalize_phone_number("0478000000"), "04 78 00 00 00");
        assert_eq!(normalize_phone_number("+33478000000"), "04 78 00 00 00");
        assert_eq!(normalize_phone_number("0033 4 78 00 00 00"), "04 78 00 00 00");
        assert_eq!(normalize_phone_number("04.78.00.00.00"), "04 78 00 00 00");
        assert_eq!(normalize_phone_number(" 3615 "), "3615");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "x"), "");
        assert_eq!(plural(1, "x"), "");
        assert_eq!(plural(2, "x"), "x");
    }

    #[test]
    fn test_count_grouping() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1\u{202f}000");
        assert_eq!(format_count(1234567), "1\u{202f}234\u{202f}567");
        assert_eq!(format_slot_count(1), "1 créneau");
        assert_eq!(format_slot_count(42), "42 créneaux");
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url("/", "assets/images/png/logo.png"), "/assets/images/png/logo.png");
        assert_eq!(asset_url("/vitemadose/", "assets/x.png"), "/vitemadose/assets/x.png");
        assert_eq!(asset_url("/vitemadose", "/assets/x.png"), "/vitemadose/assets/x.png");
    }
}
