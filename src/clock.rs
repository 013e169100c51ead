use once_cell::sync::Lazy;
use regex::Regex;

static CLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(am|pm)?$").unwrap());

/// Parse a wall-clock string into minutes past `day_start_hour`.
///
/// Accepts 24-hour (`"14:30"`) and 12-hour (`"2:30 pm"`) forms,
/// case-insensitive, surrounding whitespace tolerated. Times earlier than
/// the grid's start hour wrap onto the next virtual day, so a grid that
/// opens at 08:00 places `"01:00"` 17 hours in rather than producing a
/// negative offset. Unparseable input maps to 0; strict validation belongs
/// upstream.
pub fn parse_clock_time(input: &str, day_start_hour: u32) -> i32 {
    let Some((hour, minute)) = read_clock(input) else {
        return 0;
    };
    let mut offset = (hour as i32 - day_start_hour as i32) * 60 + minute as i32;
    if offset < 0 {
        offset += 24 * 60;
    }
    offset
}

/// Canonical zero-padded 24-hour `HH:MM` form of a clock string.
///
/// Recognizes the same grammar as [`parse_clock_time`]; anything else is
/// returned unchanged, which keeps garbage visible instead of silently
/// rewriting it.
pub fn format_clock_time(input: &str) -> String {
    match read_clock(input) {
        Some((hour, minute)) => format!("{:02}:{:02}", hour, minute),
        None => input.to_string(),
    }
}

fn read_clock(input: &str) -> Option<(u32, u32)> {
    let caps = CLOCK_RE.captures(input.trim())?;
    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    if let Some(meridiem) = caps.get(3) {
        let pm = meridiem.as_str().eq_ignore_ascii_case("pm");
        if pm && hour != 12 {
            hour += 12;
        } else if !pm && hour == 12 {
            // 12:xx am is the first hour of the day
            hour = 0;
        }
    }
    Some((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24_hour_form() {
        assert_eq!(parse_clock_time("14:30", 0), 14 * 60 + 30);
        assert_eq!(parse_clock_time("00:00", 0), 0);
    }

    #[test]
    fn parses_12_hour_form() {
        assert_eq!(parse_clock_time("2:30 pm", 0), 14 * 60 + 30);
        assert_eq!(parse_clock_time("2:30 PM", 0), 14 * 60 + 30);
        assert_eq!(parse_clock_time("2:30pm", 0), 14 * 60 + 30);
        assert_eq!(parse_clock_time("9:05 am", 0), 9 * 60 + 5);
    }

    #[test]
    fn noon_and_midnight() {
        assert_eq!(parse_clock_time("12:00 pm", 0), 12 * 60);
        assert_eq!(parse_clock_time("12:00 am", 0), 0);
        assert_eq!(parse_clock_time("12:15 am", 0), 15);
    }

    #[test]
    fn offsets_are_relative_to_the_grid_start() {
        assert_eq!(parse_clock_time("09:00", 8), 60);
        assert_eq!(parse_clock_time("8:00 am", 8), 0);
    }

    #[test]
    fn early_times_wrap_past_midnight() {
        // 01:00 on a grid that opens at 08:00 lands on "tomorrow"
        assert_eq!(parse_clock_time("01:00", 8), (1 - 8) * 60 + 24 * 60);
        assert_eq!(parse_clock_time("01:00", 8), 1020);
    }

    #[test]
    fn whitespace_is_tolerated() {
        assert_eq!(parse_clock_time("  14:30  ", 0), 14 * 60 + 30);
        assert_eq!(parse_clock_time(" 2:30  pm ", 0), 14 * 60 + 30);
    }

    #[test]
    fn unparseable_input_maps_to_zero() {
        assert_eq!(parse_clock_time("noonish", 8), 0);
        assert_eq!(parse_clock_time("14.30", 8), 0);
        assert_eq!(parse_clock_time("", 8), 0);
    }

    #[test]
    fn formats_to_zero_padded_24_hour() {
        assert_eq!(format_clock_time("14:05"), "14:05");
        assert_eq!(format_clock_time("2:05 pm"), "14:05");
        assert_eq!(format_clock_time("9:05 am"), "09:05");
        assert_eq!(format_clock_time("12:00 am"), "00:00");
    }

    #[test]
    fn format_passes_unrecognized_input_through() {
        assert_eq!(format_clock_time("tbd"), "tbd");
        assert_eq!(format_clock_time("14.30"), "14.30");
    }
}
