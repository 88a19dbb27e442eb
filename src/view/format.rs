//! Display formatting helpers

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown for absent dates and thresholds
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown when a timestamp is present but unparsable
pub const INVALID_DATE: &str = "Invalid Date";

/// Shorten an address or hash to `first6...last4`
///
/// Empty or absent input yields an empty string. Inputs shorter than ten
/// characters overlap rather than fail.
pub fn format_address(address: Option<&str>) -> String {
    let address = match address {
        Some(a) if !a.is_empty() => a,
        _ => return String::new(),
    };

    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Format a backend timestamp as an en-US date (`M/D/YYYY`)
///
/// Accepts RFC 3339, naive ISO 8601 (what the backend emits) and plain
/// dates. Offset-aware timestamps are normalised to UTC first.
pub fn format_date(timestamp: Option<&str>) -> String {
    let raw = match timestamp.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return NOT_AVAILABLE.to_string(),
    };

    match parse_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc().date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `"<amount> ETH"`, treating a missing amount as zero
pub fn format_eth(amount: Option<&str>) -> String {
    match amount {
        Some(a) if !a.is_empty() => format!("{} ETH", a),
        _ => "0 ETH".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address_long() {
        let addr = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0";
        assert_eq!(format_address(Some(addr)), "0x742d...bEb0");
    }

    #[test]
    fn test_format_address_prefix_suffix_property() {
        let samples = [
            "0123456789",
            "0xabcdef0123456789",
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "abcdefghijklmnopqrstuvwxyz",
        ];
        for addr in samples {
            let formatted = format_address(Some(addr));
            let expected = format!("{}...{}", &addr[..6], &addr[addr.len() - 4..]);
            assert_eq!(formatted, expected);
        }
    }

    #[test]
    fn test_format_address_empty() {
        assert_eq!(format_address(None), "");
        assert_eq!(format_address(Some("")), "");
    }

    #[test]
    fn test_format_address_short_overlaps() {
        assert_eq!(format_address(Some("0xab")), "0xab...0xab");
    }

    #[test]
    fn test_format_date_missing() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date(Some("2024-03-01T09:15:00.123456")), "3/1/2024");
        assert_eq!(format_date(Some("2024-12-25T23:59:59")), "12/25/2024");
        assert_eq!(format_date(Some("2024-01-05T23:30:00-02:00")), "1/6/2024");
        assert_eq!(format_date(Some("2024-07-04")), "7/4/2024");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date(Some("yesterday")), "Invalid Date");
    }

    #[test]
    fn test_format_eth() {
        assert_eq!(format_eth(Some("1.25")), "1.25 ETH");
        assert_eq!(format_eth(None), "0 ETH");
    }
}
