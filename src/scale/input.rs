//! Lenient number coercion for text fields.

/// Parse the leading decimal number out of `text`, the way a browser's
/// `parseFloat` does, falling back to `0.0`.
///
/// Leading whitespace is skipped and anything after the numeric prefix is
/// ignored, so `"12px"` reads as `12.0`. Empty input, text without a numeric
/// prefix, and non-finite results all coerce to zero.
pub fn parse_lenient(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let end = numeric_prefix_len(trimmed);
    trimmed
        .get(..end)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Length in bytes of the longest `[+-]?digits[.digits][e[+-]digits]` prefix.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(bytes, pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(bytes, pos + 1);
        // A lone trailing dot is still part of the number ("3." == 3)
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(bytes, exp_pos);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .iter()
        .skip(from)
        .take_while(|b| b.is_ascii_digit())
        .count()
}
