use chrono::NaiveTime;

/// Normalizes a requested time to 24-hour `HH:MM`.
///
/// Accepts a bare hour with AM/PM ("5 PM", "10am") or a 24-hour clock time
/// ("14:30", "09:00:00"). The AM/PM form carries no minutes, so "5:30 PM" is
/// not understood.
pub fn parse_time(input: &str) -> Option<String> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    let time = if compact.contains("PM") {
        let hour: u32 = compact.replace("PM", "").parse().ok()?;
        let hour = if hour == 12 { hour } else { hour.checked_add(12)? };
        NaiveTime::from_hms_opt(hour, 0, 0)?
    } else if compact.contains("AM") {
        let hour: u32 = compact.replace("AM", "").parse().ok()?;
        let hour = if hour == 12 { 0 } else { hour };
        NaiveTime::from_hms_opt(hour, 0, 0)?
    } else {
        parse_clock(&compact)?
    };

    Some(time.format("%H:%M").to_string())
}

/// Strict `HH:MM` or `HH:MM:SS`, two digits per field.
fn parse_clock(s: &str) -> Option<NaiveTime> {
    let parts: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }
    if !parts
        .iter()
        .all(|p| p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let hour = parts[0].parse().ok()?;
    let minute = parts[1].parse().ok()?;
    let second = match parts.get(2) {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}
