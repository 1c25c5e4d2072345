/// Formatting characters removed from numeric cells before parsing.
const NOISE_CHARS: [char; 3] = ['₹', ',', '%'];

/// Parse a spreadsheet cell such as `"3,500.50₹"` or `"12%"` into a number.
///
/// Never fails: an empty, unparseable or non-finite cell yields `0.0`.
/// Only dot-decimal notation is understood.
pub fn parse_number(text: &str) -> f64 {
    let clean: String = text.chars().filter(|c| !NOISE_CHARS.contains(c)).collect();
    let clean = clean.trim();
    if clean.is_empty() {
        return 0.0;
    }

    match clean.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Round to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
