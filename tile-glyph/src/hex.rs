use super::error::{GlyphError, Result};

const MAX_DIGITS: usize = 4;

fn nibble(digit: char) -> Option<u32> {
    match digit {
        '0'..='9' => Some(digit as u32 - '0' as u32),
        'A'..='F' => Some(digit as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Parses an uppercase hex code such as `"8041"` one nibble at a time.
pub fn parse_hex_code(input: &str) -> Result<u32> {
    let digits = input.trim();
    let len = digits.chars().count();
    if len == 0 || len > MAX_DIGITS {
        return Err(GlyphError::InvalidHexLength { len });
    }

    digits.chars().enumerate().try_fold(0, |code, (position, digit)| -> Result<u32> {
        let value = nibble(digit).ok_or(GlyphError::InvalidHexDigit { digit, position })?;
        Ok((code << 4) | value)
    })
}
