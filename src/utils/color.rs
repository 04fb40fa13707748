use eframe::egui::Color32;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

pub trait ColorExt: Sized {
    fn from_hex(hex: &str) -> Result<Self, ColorError>;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::Length(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::Digits(hex.to_string()))
        };

        Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// The brand accent, falling back to egui's light blue if the constant is
/// ever malformed.
pub fn accent() -> Color32 {
    Color32::from_hex(crate::constants::GRID_COLOR).unwrap_or(Color32::LIGHT_BLUE)
}
