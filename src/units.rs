//! Pixel/rem conversion for the unit converter view.

/// Default root font size used by browsers.
pub const DEFAULT_BASE_PX: f64 = 16.0;

pub fn px_to_rem(px: f64, base: f64) -> f64 {
    px / base
}

pub fn rem_to_px(rem: f64, base: f64) -> f64 {
    rem * base
}

/// Format a rem value the way the form displays it.
pub fn format_rem(rem: f64) -> String {
    format!("{rem:.4}")
}

/// Format a px value the way the form displays it.
pub fn format_px(px: f64) -> String {
    format!("{px:.2}")
}

/// Parse a base font size typed by the user. Zero, negative and
/// non-numeric input is rejected so conversions never divide by zero.
pub fn parse_base(value: &str) -> Option<f64> {
    let base: f64 = value.trim().parse().ok()?;
    if base > 0.0 { Some(base) } else { None }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn converts_at_the_default_base() {
        assert_eq!(format_rem(px_to_rem(16.0, DEFAULT_BASE_PX)), "1.0000");
        assert_eq!(format_rem(px_to_rem(24.0, DEFAULT_BASE_PX)), "1.5000");
        assert_eq!(format_px(rem_to_px(1.5, DEFAULT_BASE_PX)), "24.00");
        assert_eq!(format_px(rem_to_px(0.25, DEFAULT_BASE_PX)), "4.00");
    }

    #[test]
    fn converts_at_a_custom_base() {
        assert_eq!(format_rem(px_to_rem(10.0, 20.0)), "0.5000");
        assert_eq!(format_px(rem_to_px(2.0, 10.0)), "20.00");
    }

    #[test]
    fn base_parsing_rejects_nonsense() {
        assert_eq!(parse_base("16"), Some(16.0));
        assert_eq!(parse_base(" 12.5 "), Some(12.5));
        assert_eq!(parse_base("0"), None);
        assert_eq!(parse_base("-4"), None);
        assert_eq!(parse_base("px"), None);
        assert_eq!(parse_base(""), None);
    }
}
