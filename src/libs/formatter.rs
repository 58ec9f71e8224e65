//! Duration formatting for terminal output.

use chrono::TimeDelta;

/// Formats a duration as `HH:MM`, used for daily totals.
///
/// Negative durations are shown as zero.
pub fn format_duration(duration: &TimeDelta) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a duration as `MM:SS`, used for countdowns. Minutes keep growing
/// past 59 rather than rolling into hours.
pub fn format_clock(duration: &TimeDelta) -> String {
    let secs = duration.num_seconds().max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_shows_minutes_and_seconds() {
        assert_eq!(format_clock(&TimeDelta::seconds(0)), "00:00");
        assert_eq!(format_clock(&TimeDelta::seconds(61)), "01:01");
        assert_eq!(format_clock(&TimeDelta::minutes(90)), "90:00");
        assert_eq!(format_clock(&TimeDelta::seconds(-5)), "00:00");
    }

    #[test]
    fn duration_shows_hours_and_minutes() {
        assert_eq!(format_duration(&TimeDelta::minutes(135)), "02:15");
        assert_eq!(format_duration(&TimeDelta::minutes(-3)), "00:00");
    }
}
