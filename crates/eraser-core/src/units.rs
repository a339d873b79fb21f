//! Human-readable size and throughput formatting
//!
//! Sizes use decimal (base-1000) units, throughput uses binary
//! (base-1024) units, matching the summary line the CLI prints.
//! Both return `None` for magnitudes beyond the largest defined unit;
//! callers must tolerate the absent value.

/// Decimal units for [`human_size`]
const BASE10_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Binary units for [`human_throughput`]
const BASE2_UNITS: [&str; 9] = [
    "B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB",
];

/// Render a byte count with decimal units, e.g. `"(10 MB)"`.
///
/// The mantissa is divided by 1000 until it drops below the base and
/// rounded to the nearest integer for display.
pub fn human_size(bytes: u64) -> Option<String> {
    let mut r = bytes as f64;
    let mut exp = 0usize;
    while r >= 1000.0 {
        if exp + 1 >= BASE10_UNITS.len() {
            return None;
        }
        r /= 1000.0;
        exp += 1;
    }
    Some(format!("({} {})", r.round() as u64, BASE10_UNITS[exp]))
}

/// Render a throughput with binary units, e.g. `"10 MiB/s"`.
pub fn human_throughput(bytes_per_sec: f64) -> Option<String> {
    if !bytes_per_sec.is_finite() || bytes_per_sec < 0.0 {
        return None;
    }
    let mut r = bytes_per_sec;
    let mut exp = 0usize;
    while r >= 1024.0 {
        if exp + 1 >= BASE2_UNITS.len() {
            return None;
        }
        r /= 1024.0;
        exp += 1;
    }
    Some(format!("{} {}/s", r.round() as u64, BASE2_UNITS[exp]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0).unwrap(), "(0 B)");
        assert_eq!(human_size(999).unwrap(), "(999 B)");
        assert_eq!(human_size(1000).unwrap(), "(1 kB)");
        assert_eq!(human_size(1_000_000).unwrap(), "(1 MB)");
        assert_eq!(human_size(1_500_000).unwrap(), "(2 MB)");
        assert_eq!(human_size(1_000_000_000).unwrap(), "(1 GB)");
    }

    #[test]
    fn test_human_size_largest_u64() {
        // u64::MAX is about 18.4 EB, still representable
        assert_eq!(human_size(u64::MAX).unwrap(), "(18 EB)");
    }

    #[test]
    fn test_human_throughput() {
        assert_eq!(human_throughput(0.0).unwrap(), "0 B/s");
        assert_eq!(human_throughput(512.0).unwrap(), "512 B/s");
        assert_eq!(human_throughput(1024.0).unwrap(), "1 KiB/s");
        assert_eq!(human_throughput(1_048_576.0).unwrap(), "1 MiB/s");
        assert_eq!(
            human_throughput(10.0 * 1024.0 * 1024.0).unwrap(),
            "10 MiB/s"
        );
    }

    #[test]
    fn test_human_throughput_out_of_range() {
        assert_eq!(human_throughput(f64::MAX), None);
        assert_eq!(human_throughput(f64::INFINITY), None);
        assert_eq!(human_throughput(f64::NAN), None);
        assert_eq!(human_throughput(-1.0), None);
    }
}
