//! Human-readable byte counts.

#[cfg(test)]
#[path = "file_size_test.rs"]
mod file_size_test;

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: f64 = 1024.0;

/// Format `bytes` with base-1024 units and at most two decimals.
///
/// Trailing zeros are dropped (`1536 → "1.5 KB"`, `1024 → "1 KB"`); sizes
/// beyond the largest unit stay in GB.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= STEP && unit < UNITS.len() - 1 {
        scaled /= STEP;
        unit += 1;
    }
    format!("{} {}", trim_decimals(scaled), UNITS[unit])
}

fn trim_decimals(value: f64) -> String {
    // Ties round away from zero: 1.125 → 1.13.
    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{rounded:.2}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}
