#[cfg(test)]
mod tests {
    use dtrack::libs::formatter::{checkbox, format_countdown, format_progress, format_timestamp};

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(59), "00:59");
        assert_eq!(format_countdown(25 * 60), "25:00");
        assert_eq!(format_countdown(90 * 60 + 5), "90:05");
        assert_eq!(format_countdown(999 * 60), "999:00");
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(0, 0), "");
        assert_eq!(format_progress(2, 5), "2/5");
    }

    #[test]
    fn test_format_timestamp() {
        let formatted = format_timestamp(1_772_400_000_000);
        assert_eq!(formatted.len(), "2026-03-01 21:20".len());
        assert!(formatted.starts_with("2026-03-0"));
        assert_eq!(format_timestamp(i64::MAX), "-");
    }

    #[test]
    fn test_checkbox() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }
}
