//! Running-time extraction from free-form provider text.

use regex::Regex;
use tracing::warn;

use crate::error::{Result, ScrapeError};

/// Convert a minute count in string form to milliseconds, in string form.
///
/// Parsing is lenient: anything that is not a clean non-negative integer
/// coerces to zero rather than failing.
pub fn minutes_to_millis(time: &str) -> String {
    let minutes: u64 = time.trim().parse().unwrap_or(0);
    (minutes * 60_000).to_string()
}

/// Find a running time in `text` using `pattern` (one capture group holding
/// the minute count) and convert it to milliseconds.
pub fn parse_running_time(text: &str, pattern: &str) -> Result<String> {
    let regex = Regex::new(pattern).map_err(|err| {
        warn!("Invalid running time pattern {:?}: {}", pattern, err);
        ScrapeError::ParseFailed {
            what: "running time pattern",
            value: pattern.to_string(),
        }
    })?;

    match regex.captures(text).and_then(|caps| caps.get(1)) {
        Some(minutes) => Ok(minutes_to_millis(minutes.as_str())),
        None => {
            warn!(
                "Could not find running time in {:?} using pattern {:?}",
                text, pattern
            );
            Err(ScrapeError::NoMatch {
                pattern: pattern.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_minutes_to_milliseconds() {
        assert_eq!(minutes_to_millis("120"), "7200000");
        assert_eq!(minutes_to_millis(" 90 "), "5400000");
    }

    #[test]
    fn malformed_minutes_coerce_to_zero() {
        assert_eq!(minutes_to_millis("two hours"), "0");
        assert_eq!(minutes_to_millis(""), "0");
        assert_eq!(minutes_to_millis("-5"), "0");
    }

    #[test]
    fn extracts_running_time_from_text() {
        let millis = parse_running_time("Runtime: 120 minutes", r"(\d+) minutes")
            .expect("pattern matches");
        assert_eq!(millis, "7200000");
    }

    #[test]
    fn missing_match_is_a_typed_failure() {
        let err = parse_running_time("no runtime here", r"(\d+) minutes")
            .expect_err("no match");
        assert!(matches!(err, ScrapeError::NoMatch { .. }));
    }

    #[test]
    fn invalid_pattern_is_a_parse_failure() {
        let err = parse_running_time("Runtime: 120 minutes", r"(\d+")
            .expect_err("pattern does not compile");
        assert!(matches!(err, ScrapeError::ParseFailed { .. }));
    }
}
