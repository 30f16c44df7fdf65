// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Date/time formatting for query parameters.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 with whole seconds and a `Z` suffix,
/// the form the events endpoints accept for `from`/`to`.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_drops_subseconds() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 22, 0, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(format_utc_rfc3339(date), "2026-03-07T22:00:00Z");
    }
}
