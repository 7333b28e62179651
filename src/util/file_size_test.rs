use super::*;

#[test]
fn zero_is_bytes() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn below_one_kilobyte_stays_in_bytes() {
    assert_eq!(format_file_size(1), "1 Bytes");
    assert_eq!(format_file_size(1023), "1023 Bytes");
}

#[test]
fn fractional_values_drop_trailing_zeros() {
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1500), "1.46 KB");
}

#[test]
fn larger_units() {
    assert_eq!(format_file_size(16 * 1024 * 1024), "16 MB");
    assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 / 2), "2.5 GB");
}

#[test]
fn sizes_beyond_gigabytes_stay_in_gb() {
    assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
}

#[test]
fn exact_halves_round_up() {
    // 1152 B = 1.125 KB and 1664 B = 1.625 KB are exact in binary.
    assert_eq!(format_file_size(1152), "1.13 KB");
    assert_eq!(format_file_size(1664), "1.63 KB");
    assert_eq!(format_file_size(1_179_648), "1.13 MB");
}
