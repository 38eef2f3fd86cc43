//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Truncate a string to max length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s[..max_len].to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Format a number with thousand separators
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();
    let mut result = String::new();

    if n < 0 {
        result.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("Fifa", 10), "Fifa");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("Basketball Pickup Game", 10), "Basketb...");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3080), "3,080");
        assert_eq!(format_number(154), "154");
        assert_eq!(format_number(-1234567), "-1,234,567");
        assert_eq!(format_number(-123), "-123");
    }
}
