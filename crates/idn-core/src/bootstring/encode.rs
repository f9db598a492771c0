//! Bootstring encoding: scalar sequence to ASCII (RFC 3492 section 6.3).

use super::{
    adapt, digit_char, threshold, BootstringError, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};

/// Encodes a scalar sequence into its bootstring ASCII form.
///
/// Basic (ASCII) code points are copied verbatim in their original order;
/// when non-basic code points exist, a delimiter and the extended section
/// encoding their insertion points follow. Digits are emitted in canonical
/// lowercase.
pub fn encode(input: &[char]) -> Result<String, BootstringError> {
    let mut output: String = input.iter().filter(|c| c.is_ascii()).collect();
    let basic_len = output.len() as u32;
    let input_len = input.len() as u32;
    if basic_len == input_len {
        return Ok(output);
    }
    if basic_len > 0 {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;
    while handled < input_len {
        // Smallest code point >= n that still awaits insertion.
        let m = match input.iter().map(|&c| c as u32).filter(|&c| c >= n).min() {
            Some(m) => m,
            None => break,
        };
        let gap = (m - n)
            .checked_mul(handled + 1)
            .ok_or(BootstringError::Overflow)?;
        delta = delta.checked_add(gap).ok_or(BootstringError::Overflow)?;
        n = m;

        for &c in input {
            let c = c as u32;
            if c < n {
                delta = delta.checked_add(1).ok_or(BootstringError::Overflow)?;
            }
            if c == n {
                // Emit delta as a generalized variable-length integer.
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(digit_char(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(digit_char(q));
                bias = adapt(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }
        delta += 1;
        n += 1;
    }
    Ok(output)
}
