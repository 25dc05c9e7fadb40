use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color string has {0} hex digits, expected four equal-length components")]
    BadLength(usize),
    #[error("invalid hex component {0:?}")]
    BadComponent(String),
}

/// Background color as parsed from an ARGB hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argb {
    pub alpha: u8,
    pub rgb: [u8; 3],
}

/// Parse an ARGB hex string like `#FF112233` (leading `#` optional).
///
/// The digits split into four equal-length components in alpha, red, green,
/// blue order; each component must fit in 8 bits.
pub fn parse_argb(value: &str) -> Result<Argb, ColorParseError> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.is_empty() || digits.len() % 4 != 0 {
        return Err(ColorParseError::BadLength(digits.len()));
    }
    let step = digits.len() / 4;
    let mut channels = [0u8; 4];
    for (i, channel) in channels.iter_mut().enumerate() {
        let chunk = &digits.as_bytes()[i * step..(i + 1) * step];
        let text = std::str::from_utf8(chunk)
            .map_err(|_| ColorParseError::BadComponent(String::from_utf8_lossy(chunk).into_owned()))?;
        *channel = u8::from_str_radix(text, 16)
            .map_err(|_| ColorParseError::BadComponent(text.to_string()))?;
    }
    Ok(Argb {
        alpha: channels[0],
        rgb: [channels[1], channels[2], channels[3]],
    })
}
