//! # Palette
//!
//! Resolves named tints to macroquad colors.

use crate::game::Tint;
use macroquad::color::Color;

/// The macroquad color for a tint.
pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Black => Color::from_rgba(0, 0, 0, 255),
        Tint::Grey => Color::from_rgba(128, 128, 128, 255),
        Tint::DarkSlateGray => Color::from_rgba(47, 79, 79, 255),
        Tint::RoyalBlue => Color::from_rgba(65, 105, 225, 255),
        Tint::OrangeRed => Color::from_rgba(255, 69, 0, 255),
        Tint::Green => Color::from_rgba(0, 128, 0, 255),
        Tint::Peru => Color::from_rgba(205, 133, 63, 255),
        Tint::White => Color::from_rgba(255, 255, 255, 255),
        Tint::Silver => Color::from_rgba(192, 192, 192, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tints_are_opaque_and_distinct() {
        let tints = [
            Tint::Black,
            Tint::Grey,
            Tint::DarkSlateGray,
            Tint::RoyalBlue,
            Tint::OrangeRed,
            Tint::Green,
            Tint::Peru,
            Tint::White,
            Tint::Silver,
        ];

        for (i, a) in tints.iter().enumerate() {
            assert_eq!(tint_color(*a).a, 1.0);
            for b in &tints[i + 1..] {
                assert_ne!(tint_color(*a), tint_color(*b), "{:?} vs {:?}", a, b);
            }
        }
    }
}
