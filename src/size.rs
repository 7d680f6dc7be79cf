const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

/// Human-readable file size in decimal units, e.g. `13.8 GB`.
pub fn format_byte_count(bytes: u64) -> String {
    match bytes {
        0 => "Zero KB".to_string(),
        1 => "1 byte".to_string(),
        2..1000 => format!("{bytes} bytes"),
        _ => {
            let mut value = bytes as f64 / 1000.0;
            let mut unit = 0;
            // 999.95 would print as "1000.0"
            while value >= 999.95 && unit < UNITS.len() - 1 {
                value /= 1000.0;
                unit += 1;
            }
            format!("{value:.1} {}", UNITS[unit])
        }
    }
}
