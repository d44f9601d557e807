/// Characters C's `isspace` accepts in the default locale
fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn skip_space(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_c_space(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Parse the longest integer prefix of `text` the way `strtol` does.
///
/// `radix` 0 auto-detects: `0x`/`0X` is hex, a leading `0` is octal, anything
/// else decimal. Returns the value and the number of bytes consumed; when no
/// digits are found nothing is consumed and the value is 0. Out-of-range
/// values saturate at `i64::MIN`/`i64::MAX`.
pub fn parse_long_prefix(text: &str, radix: u32) -> (i64, usize) {
    let bytes = text.as_bytes();
    let mut pos = skip_space(bytes, 0);

    let mut negative = false;
    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        negative = bytes[pos] == b'-';
        pos += 1;
    }

    let has_hex_prefix = |at: usize| {
        bytes.get(at) == Some(&b'0')
            && matches!(bytes.get(at + 1), Some(b'x') | Some(b'X'))
            && bytes.get(at + 2).is_some_and(|b| b.is_ascii_hexdigit())
    };

    let radix = match radix {
        0 if has_hex_prefix(pos) => {
            pos += 2;
            16
        },
        0 if bytes.get(pos) == Some(&b'0') => 8,
        0 => 10,
        16 if has_hex_prefix(pos) => {
            pos += 2;
            16
        },
        other => other,
    };

    let digits_start = pos;
    let mut magnitude: u64 = 0;
    let mut overflow = false;
    while pos < bytes.len() {
        let digit = match (bytes[pos] as char).to_digit(radix) {
            Some(d) => d as u64,
            None => break,
        };
        match magnitude
            .checked_mul(radix as u64)
            .and_then(|m| m.checked_add(digit))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
        pos += 1;
    }

    if pos == digits_start {
        return (0, 0);
    }

    let value = if negative {
        if overflow || magnitude > i64::MAX as u64 + 1 {
            i64::MIN
        } else {
            (-(magnitude as i128)) as i64
        }
    } else if overflow || magnitude > i64::MAX as u64 {
        i64::MAX
    } else {
        magnitude as i64
    };

    (value, pos)
}

/// Narrow a parsed long to an `int`, clamping at `i32::MIN`/`i32::MAX`
pub fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parse the longest float prefix of `text` the way `strtof` does.
///
/// Accepts decimal literals with an optional exponent plus `inf`, `infinity`
/// and `nan` in any case. Returns the value and the bytes consumed; 0.0 and 0
/// when nothing converts.
pub fn parse_float_prefix(text: &str) -> (f32, usize) {
    let bytes = text.as_bytes();
    let start = skip_space(bytes, 0);
    let mut pos = start;

    let mut negative = false;
    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        negative = bytes[pos] == b'-';
        pos += 1;
    }

    let rest = &bytes[pos..];
    let starts_with_ci = |word: &str| {
        rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes())
    };
    if starts_with_ci("infinity") || starts_with_ci("inf") {
        let consumed = if starts_with_ci("infinity") { 8 } else { 3 };
        let value = if negative { f32::NEG_INFINITY } else { f32::INFINITY };
        return (value, pos + consumed);
    }
    if starts_with_ci("nan") {
        return (f32::NAN, pos + 3);
    }

    let mantissa_start = pos;
    let mut digits = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
        digits += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return (0.0, 0);
    }

    // exponent only counts when at least one digit follows
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        if exp_pos < bytes.len() && (bytes[exp_pos] == b'+' || bytes[exp_pos] == b'-') {
            exp_pos += 1;
        }
        let exp_digits_start = exp_pos;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            exp_pos += 1;
        }
        if exp_pos > exp_digits_start {
            pos = exp_pos;
        }
    }

    let magnitude = text[mantissa_start..pos].parse::<f32>().unwrap_or(0.0);
    let value = if negative { -magnitude } else { magnitude };
    (value, pos)
}

fn strip_trailing_zeros(number: &str) -> String {
    if number.contains('.') {
        number
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        number.to_string()
    }
}

/// Format `value` like C's `%.<precision>g`
///
/// For example 0.5 gives "0.5", 1234567.0 gives "1.23457e+06" at precision 6.
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value))
    }
}
