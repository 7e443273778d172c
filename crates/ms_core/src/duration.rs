//! ISO-8601 duration parsing for media metadata (`PT1H2M3S` style).

/// Parse an ISO-8601 duration into whole seconds.
///
/// Only day/week and time components are accepted; year and month designators
/// have no fixed length and yield `None`, as does any malformed input.
/// Fractional seconds are truncated.
pub fn parse_iso8601_duration(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let body = raw.strip_prefix('P').or_else(|| raw.strip_prefix('p'))?;
    if body.is_empty() {
        return None;
    }

    let mut total = 0f64;
    let mut in_time = false;
    let mut number = String::new();
    let mut saw_component = false;

    for c in body.chars() {
        match c.to_ascii_uppercase() {
            'T' => {
                if in_time || !number.is_empty() {
                    return None;
                }
                in_time = true;
            }
            d if d.is_ascii_digit() || d == '.' || d == ',' => {
                number.push(if d == ',' { '.' } else { d });
            }
            unit => {
                let value: f64 = number.parse().ok()?;
                number.clear();
                let factor = match (in_time, unit) {
                    (false, 'W') => 7.0 * 86_400.0,
                    (false, 'D') => 86_400.0,
                    (true, 'H') => 3_600.0,
                    (true, 'M') => 60.0,
                    (true, 'S') => 1.0,
                    _ => return None,
                };
                total += value * factor;
                saw_component = true;
            }
        }
    }

    if !number.is_empty() || !saw_component {
        return None;
    }
    Some(total.floor() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_components() {
        assert_eq!(parse_iso8601_duration("PT1H2M3S"), Some(3723));
        assert_eq!(parse_iso8601_duration("PT45M"), Some(2700));
        assert_eq!(parse_iso8601_duration("PT30S"), Some(30));
        assert_eq!(parse_iso8601_duration("PT1.9S"), Some(1));
    }

    #[test]
    fn test_parse_day_components() {
        assert_eq!(parse_iso8601_duration("P1DT1S"), Some(86_401));
        assert_eq!(parse_iso8601_duration("P0D"), Some(0));
        assert_eq!(parse_iso8601_duration("P1W"), Some(604_800));
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(parse_iso8601_duration(""), None);
        assert_eq!(parse_iso8601_duration("P"), None);
        assert_eq!(parse_iso8601_duration("PT"), None);
        assert_eq!(parse_iso8601_duration("1H"), None);
        assert_eq!(parse_iso8601_duration("PT5"), None);
        assert_eq!(parse_iso8601_duration("P1M"), None);
        assert_eq!(parse_iso8601_duration("PT1X"), None);
    }
}
