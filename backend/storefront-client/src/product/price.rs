/// Lenient price parsing for the free-text price input.
///
/// Leading whitespace is skipped and the longest numeric prefix is taken, so
/// `"12.5 TL"` is `12.5`. `Infinity` (optionally signed) is accepted. Input with
/// no numeric prefix yields NaN.
pub fn parse_price(raw: &str) -> f64 {
    let trimmed = raw.trim_start();

    let (sign, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, trimmed)
    };

    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let end = numeric_prefix_len(unsigned);
    if end == 0 {
        return f64::NAN;
    }

    unsigned
        .get(..end)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .map_or(f64::NAN, |value| sign * value)
}

/// Byte length of the longest `digits[.digits][e[+-]digits]` prefix.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .iter()
            .skip(start)
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits_from(0);
    let mut end = int_digits;
    let mut mantissa_digits = int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        mantissa_digits += frac_digits;
        if mantissa_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign_len = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign_len);
        if exp_digits > 0 {
            end += 1 + sign_len + exp_digits;
        }
    }

    end
}
