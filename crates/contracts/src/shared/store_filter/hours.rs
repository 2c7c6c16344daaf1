pub const HOURS_PER_DAY: u8 = 24;

/// `9` -> `"09:00"`
pub fn format_hour(hour: u8) -> String {
    format!("{:02}:00", hour)
}

/// The 24 whole-hour values offered by the opening/closing dropdowns.
pub fn hour_options() -> Vec<String> {
    (0..HOURS_PER_DAY).map(format_hour).collect()
}

pub fn is_canonical_hour(value: &str) -> bool {
    let Some(hour) = value.strip_suffix(":00") else {
        return false;
    };
    hour.len() == 2
        && hour.bytes().all(|b| b.is_ascii_digit())
        && hour.parse::<u8>().map_or(false, |h| h < HOURS_PER_DAY)
}

/// Values the hour dropdowns may hand to the filter: empty (no constraint)
/// or one of [`hour_options`].
pub fn is_hour_choice(value: &str) -> bool {
    value.is_empty() || is_canonical_hour(value)
}
