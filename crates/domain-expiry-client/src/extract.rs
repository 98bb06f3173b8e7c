//! Date extraction from registry responses.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use domain_expiry_core::{next_anniversary, DateKind, ExpiryError, Result};
use fancy_regex::Regex;
use tracing::{debug, warn};

/// How a registry exposes its date field: where to find it, how to read it
/// and what it means.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    pattern: Regex,
    group: usize,
    format: &'static str,
    kind: DateKind,
}

impl ExtractionRule {
    /// Compile a rule.
    ///
    /// `group` is the capture group holding the date text and `format` a
    /// `chrono` date format such as `"%d %b %Y"`.
    pub fn new(pattern: &str, group: usize, format: &'static str, kind: DateKind) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ExpiryError::Config(format!("invalid extraction pattern: {e}")))?;
        if group == 0 || group >= pattern.captures_len() {
            return Err(ExpiryError::Config(format!(
                "capture group {group} not present in extraction pattern"
            )));
        }

        Ok(Self {
            pattern,
            group,
            format,
            kind,
        })
    }

    /// Find the date text in a response body
    #[must_use]
    pub fn find<'b>(&self, body: &'b str) -> Option<&'b str> {
        match self.pattern.captures(body) {
            Ok(captures) => captures?.get(self.group).map(|m| m.as_str()),
            Err(e) => {
                warn!(error = %e, "extraction pattern failed to run");
                None
            }
        }
    }

    /// Parse date text as midnight UTC of that day.
    ///
    /// The text must render back to itself under the format (month names
    /// compared case-insensitively), so padding and whitespace are exact.
    pub fn parse(&self, value: &str) -> std::result::Result<DateTime<Utc>, String> {
        let date = NaiveDate::parse_from_str(value, self.format).map_err(|e| e.to_string())?;
        let rendered = date.format(self.format).to_string();
        if !rendered.eq_ignore_ascii_case(value) {
            return Err(format!("expected layout {rendered:?}"));
        }
        Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
    }

    /// Turn a response body into an expiry date, as of `now`.
    ///
    /// Registration dates are rolled forward to the next renewal anniversary
    /// after `now`; expiry dates are returned as published.
    pub fn resolve(
        &self,
        registry: &'static str,
        domain: &str,
        body: &str,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>> {
        let value = self.find(body).ok_or_else(|| ExpiryError::Extraction {
            registry,
            domain: domain.to_string(),
        })?;

        let parse_error = |reason: String| ExpiryError::DateParse {
            registry,
            domain: domain.to_string(),
            value: value.to_string(),
            format: self.format,
            reason,
        };

        let date = self.parse(value).map_err(parse_error)?;
        debug!(registry, domain, date = %date, kind = ?self.kind, "extracted date");

        match self.kind {
            DateKind::Expires => Ok(date),
            DateKind::Registered { term } => next_anniversary(date, now, term)
                .ok_or_else(|| parse_error("renewal anniversary out of range".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_expiry_core::{ErrorKind, RenewalTerm};

    const PATTERN: &str = r"Created: (\S+ \S+ \S+)";

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn registered() -> ExtractionRule {
        ExtractionRule::new(
            PATTERN,
            1,
            "%d %b %Y",
            DateKind::Registered {
                term: RenewalTerm::ONE_YEAR,
            },
        )
        .unwrap()
    }

    #[test]
    fn rejects_bad_rules() {
        let err = ExtractionRule::new("(unclosed", 1, "%Y", DateKind::Expires).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = ExtractionRule::new(PATTERN, 2, "%Y", DateKind::Expires).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = ExtractionRule::new(PATTERN, 0, "%Y", DateKind::Expires).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn registration_date_rolls_forward() {
        let got = registered()
            .resolve("test", "example.eu", "Created: 02 Jan 2020\n", utc(2023, 6, 15))
            .unwrap();
        assert_eq!(got, utc(2024, 1, 2));
    }

    #[test]
    fn future_registration_date_adds_one_year() {
        let got = registered()
            .resolve("test", "example.eu", "Created: 02 Jan 2030\n", utc(2023, 6, 15))
            .unwrap();
        assert_eq!(got, utc(2031, 1, 2));
    }

    #[test]
    fn expiry_date_is_verbatim() {
        let rule = ExtractionRule::new(r"Expires: (\d{4}-\d{2}-\d{2})", 1, "%Y-%m-%d", DateKind::Expires)
            .unwrap();
        let got = rule
            .resolve("test", "example.eu", "Expires: 2019-03-04", utc(2023, 6, 15))
            .unwrap();
        assert_eq!(got, utc(2019, 3, 4));
    }

    #[test]
    fn missing_field_is_extraction_failure() {
        let err = registered()
            .resolve("test", "example.eu", "<html>no data</html>", utc(2023, 6, 15))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Extraction);
        assert_eq!(err.domain(), Some("example.eu"));
    }

    #[test]
    fn malformed_date_is_parse_failure() {
        let err = registered()
            .resolve("test", "example.eu", "Created: 31 Foo 2020", utc(2023, 6, 15))
            .unwrap_err();

        match err {
            ExpiryError::DateParse { value, format, .. } => {
                assert_eq!(value, "31 Foo 2020");
                assert_eq!(format, "%d %b %Y");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn day_padding_must_match_layout() {
        let err = registered()
            .resolve("test", "example.eu", "Created: 2 Jan 2020", utc(2023, 6, 15))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DateParse);

        let rule = registered();
        for text in ["2 Jan 2020", " 02 Jan 2020", "02  Jan 2020", "02 Jan 2020 ", "02 January 2020"] {
            assert!(rule.parse(text).is_err(), "{text:?}");
        }
        assert_eq!(rule.parse("02 Jan 2020"), Ok(utc(2020, 1, 2)));
    }

    #[test]
    fn month_case_is_not_significant() {
        let rule = registered();
        assert_eq!(rule.parse("02 JAN 2020"), Ok(utc(2020, 1, 2)));
        assert_eq!(rule.parse("02 jan 2020"), Ok(utc(2020, 1, 2)));
    }

    #[test]
    fn impossible_date_is_parse_failure() {
        let err = registered()
            .resolve("test", "example.eu", "Created: 30 Feb 2020", utc(2023, 6, 15))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DateParse);
    }
}
