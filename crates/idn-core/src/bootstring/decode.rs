//! Bootstring decoding: ASCII to scalar sequence (RFC 3492 section 6.2).

use super::{
    adapt, digit_value, threshold, BootstringError, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};

/// Decodes a bootstring ASCII string back into its scalar sequence.
///
/// Digits are accepted case-insensitively. A delta cut off before its final
/// digit is rejected as `InvalidDigit`: the encoder cannot produce such a
/// sequence, and rejecting it keeps `encode(decode(a)) == a` for canonical
/// input.
pub fn decode(input: &str) -> Result<Vec<char>, BootstringError> {
    let bytes = input.as_bytes();
    // Split at the last delimiter. A delimiter at position 0 cannot come
    // from the encoder (empty basic section emits none), so the whole input
    // stays in the extended section and the '-' fails as a digit.
    let (basic, extended) = match input.rfind(DELIMITER) {
        Some(pos) if pos > 0 => (&input[..pos], &bytes[pos + 1..]),
        _ => ("", bytes),
    };

    let mut output: Vec<char> = Vec::with_capacity(input.len());
    for c in basic.chars() {
        if !c.is_ascii() {
            return Err(BootstringError::InvalidInput);
        }
        output.push(c);
    }

    // Byte offset of the extended section, for error positions.
    let offset = input.len() - extended.len();
    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut pos = 0;
    while pos < extended.len() {
        let old_i = i;
        let mut weight: u32 = 1;
        let mut k = BASE;
        loop {
            if pos == extended.len() {
                return Err(BootstringError::InvalidDigit {
                    byte: extended[pos - 1],
                    pos: offset + pos - 1,
                });
            }
            let byte = extended[pos];
            let digit = digit_value(byte).ok_or(BootstringError::InvalidDigit {
                byte,
                pos: offset + pos,
            })?;
            pos += 1;
            if digit > (u32::MAX - i) / weight {
                return Err(BootstringError::Overflow);
            }
            i += digit * weight;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            if weight > u32::MAX / (BASE - t) {
                return Err(BootstringError::Overflow);
            }
            weight *= BASE - t;
            k += BASE;
        }

        let len = output.len() as u32;
        bias = adapt(i - old_i, len + 1, old_i == 0);
        if i / (len + 1) > u32::MAX - n {
            return Err(BootstringError::Overflow);
        }
        // i wraps around from len+1 to 0, bumping the code point each pass.
        n += i / (len + 1);
        i %= len + 1;
        let c = char::from_u32(n).ok_or(BootstringError::Overflow)?;
        output.insert(i as usize, c);
        i += 1;
    }
    Ok(output)
}
