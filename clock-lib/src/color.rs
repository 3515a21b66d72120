use thiserror::Error;

#[allow(non_camel_case_types)]
pub type sRGB = [u8; 3];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseColorError {
    #[error("color '{0}' is not a hex triplet")]
    Malformed(String),

    #[error("color '{color}' has {digits} hex digits, expected 3, 6 or 12")]
    Length { color: String, digits: usize },
}

pub fn as_index(c: &sRGB) -> usize {
    let mut out: usize = c[2] as usize;
    out |= (c[1] as usize) << 8;
    out |= (c[0] as usize) << 16;
    out
}

pub fn to_string(c: &sRGB) -> String {
    format!("#{:06x}", as_index(c)).to_uppercase()
}

/// Parses `#RGB`, `#RRGGBB` or `#RRRRGGGGBBBB`. The leading `#` is optional.
///
/// Hosts running at 16 bits per channel report the long form; only the high
/// byte of each channel is kept.
pub fn parse_hex(s: &str) -> Result<sRGB, ParseColorError> {
    let digits = s.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) || digits.is_empty() {
        return Err(ParseColorError::Malformed(s.to_string()));
    }

    let width = match digits.len() {
        3 => 1,
        6 => 2,
        12 => 4,
        n => {
            return Err(ParseColorError::Length {
                color: s.to_string(),
                digits: n,
            })
        }
    };

    let mut out: sRGB = [0; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        let field = &digits[i * width..(i + 1) * width];
        // all-hexdigit was checked above, so these can't fail
        *channel = match width {
            1 => u8::from_str_radix(field, 16).unwrap_or(0) * 0x11,
            _ => u8::from_str_radix(&field[..2], 16).unwrap_or(0),
        };
    }
    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: sRGB,
    pub background: sRGB,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            foreground: [0x00, 0x00, 0x00],
            background: [0xFF, 0xFF, 0xFF],
        }
    }
}

impl ColorPair {
    /// APCA contrast of the foreground drawn over the background.
    pub fn contrast(&self) -> f32 {
        contrast(&self.foreground, &self.background)
    }
}

fn luminance(c: &sRGB) -> f32 {
    const S_TRC: f32 = 2.4;
    const B_THRSH: f32 = 0.022;
    const B_CLIP: f32 = 1.414;

    let y = ((c[0] as f32) / 255.0).powf(S_TRC) * 0.2126729
        + ((c[1] as f32) / 255.0).powf(S_TRC) * 0.7151522
        + ((c[2] as f32) / 255.0).powf(S_TRC) * 0.0721750;

    if y < 0.0 {
        0.0
    } else if y < B_THRSH {
        y + (B_THRSH - y).powf(B_CLIP)
    } else {
        y
    }
}

// Implementation of https://github.com/Myndex/SAPC-APCA/blob/master/documentation/APCA-W3-LaTeX.md.
pub fn contrast(text: &sRGB, bg: &sRGB) -> f32 {
    const NTX: f32 = 0.57;
    const NBG: f32 = 0.56;
    const RTX: f32 = 0.62;
    const RBG: f32 = 0.65;
    const W_SCALE: f32 = 1.14;
    const W_OFFSET: f32 = 0.027;

    let y_txt = luminance(text);
    let y_bg = luminance(bg);

    let s_apc = if y_txt < y_bg {
        y_bg.powf(NBG) - y_txt.powf(NTX)
    } else {
        y_bg.powf(RBG) - y_txt.powf(RTX)
    } * W_SCALE;

    if s_apc.abs() < W_OFFSET {
        0.0
    } else if s_apc > 0.0 {
        100.0 * (s_apc - W_OFFSET)
    } else {
        100.0 * (s_apc + W_OFFSET)
    }
}
