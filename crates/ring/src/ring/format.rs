use std::fmt::Write as _;

/// Upper bound on parsed width and precision, keeps absurd directives from
/// allocating huge padded strings.
const MAX_FIELD: usize = 64;

/// Render a printf-style format string against a single float value.
///
/// Supports literal text, `%%`, and `%[0][width][.precision]f` directives,
/// which is the subset used by ring titles. Malformed directives are emitted
/// literally rather than rejected.
pub(crate) fn format_value(spec: &str, value: f32) -> String {
    let mut out = String::with_capacity(spec.len() + 4);
    let mut chars = spec.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        if let Some((_, '%')) = chars.peek() {
            chars.next();
            out.push('%');
            continue;
        }

        let mut zero_pad = false;
        if let Some((_, '0')) = chars.peek() {
            zero_pad = true;
            chars.next();
        }

        let mut width: usize = 0;
        while let Some((_, digit)) = chars.peek().filter(|(_, c)| c.is_ascii_digit()) {
            width = width
                .saturating_mul(10)
                .saturating_add(*digit as usize - '0' as usize);
            chars.next();
        }

        let mut precision = None;
        if let Some((_, '.')) = chars.peek() {
            chars.next();
            let mut digits: usize = 0;
            while let Some((_, digit)) = chars.peek().filter(|(_, c)| c.is_ascii_digit()) {
                digits = digits
                    .saturating_mul(10)
                    .saturating_add(*digit as usize - '0' as usize);
                chars.next();
            }
            precision = Some(digits);
        }

        match chars.next() {
            Some((_, 'f')) => {
                let width = width.min(MAX_FIELD);
                let precision = precision.unwrap_or(6).min(MAX_FIELD);
                if zero_pad {
                    _ = write!(out, "{:01$.2$}", value, width, precision);
                } else {
                    _ = write!(out, "{:>1$.2$}", value, width, precision);
                }
            }
            // Not a directive we understand, emit it as written.
            Some((end, other)) => {
                out.push_str(&spec[start..end]);
                out.push(other);
            }
            None => out.push_str(&spec[start..]),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_precision() {
        assert_eq!(format_value("%.0f", 50.), "50");
        assert_eq!(format_value("%.1f", 50.), "50.0");
        assert_eq!(format_value("%.0f", 49.6), "50");
    }

    #[test]
    fn test_literal_text_and_escaped_percent() {
        assert_eq!(format_value("%.0f%%", 75.), "75%");
        assert_eq!(format_value("done: %.0f%% of it", 7.), "done: 7% of it");
        assert_eq!(format_value("no directive", 1.), "no directive");
    }

    #[test]
    fn test_width_and_padding() {
        assert_eq!(format_value("%3.0f", 7.), "  7");
        assert_eq!(format_value("%03.0f", 7.), "007");
        assert_eq!(format_value("%5.1f", 12.3), " 12.3");
    }

    #[test]
    fn test_default_precision() {
        assert_eq!(format_value("%f", 0.5), "0.500000");
    }

    #[test]
    fn test_huge_width_and_precision_are_capped() {
        // More digits than usize holds must not panic, and the result stays
        // bounded.
        let out = format_value("%99999999999999999999999999.0f", 7.);
        assert_eq!(out.len(), MAX_FIELD);
        assert!(out.ends_with('7'));

        let out = format_value("%0999999999.0f", 7.);
        assert_eq!(out.len(), MAX_FIELD);

        let out = format_value("%.999999999f", 0.5);
        assert_eq!(out.len(), 2 + MAX_FIELD);
        assert!(out.starts_with("0.5"));
    }

    #[test]
    fn test_malformed_directives_pass_through() {
        assert_eq!(format_value("%d", 5.), "%d");
        assert_eq!(format_value("100%", 5.), "100%");
        assert_eq!(format_value("%.2", 5.), "%.2");
    }
}
