/// Parse a noisy numeric cell ("1,234", "12.3%", " 4 567 ") into a float.
///
/// Anything that is not a digit, '.' or '-' is dropped before parsing.
/// Empty input and parse failures yield 0.0.
pub fn normalize(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Same as [`normalize`] for a cell that may not exist.
pub fn normalize_cell(cell: Option<&str>) -> f64 {
    cell.map(normalize).unwrap_or(0.0)
}
