/// Unit labels, each 1024 times the previous one.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count as a human-readable size such as `1.5 KB`.
///
/// The value is scaled to the largest unit it reaches (capped at GB), rounded
/// to two decimals, and printed without trailing zeros.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit < UNITS.len() - 1 && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = format!("{:.2}", bytes as f64 / scale as f64);
    let value = value.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", value, UNITS[unit])
}
