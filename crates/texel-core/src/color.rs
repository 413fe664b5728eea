/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The canonical color every pixel format converts to and from

/// A four channel floating point color
///
/// Channels are nominally in `0.0..=1.0` for normalized formats,
/// float formats carry whatever they store.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }
    /// An opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color::new(r, g, b, 1.0)
    }
    pub const fn from_array(v: [f32; 4]) -> Color {
        Color::new(v[0], v[1], v[2], v[3])
    }
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
    /// Build a color from 8 bit channels
    pub fn from_rgba8(v: [u8; 4]) -> Color {
        let scale = 1.0 / 255.0;
        Color::new(
            f32::from(v[0]) * scale,
            f32::from(v[1]) * scale,
            f32::from(v[2]) * scale,
            f32::from(v[3]) * scale
        )
    }
    /// Quantize to 8 bit channels, rounding to nearest and clamping
    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_array()
            .map(|x| ((x * 255.0).clamp(0.0, 255.0) + 0.5) as u8)
    }
    /// Squared euclidean distance over red, green and blue
    pub fn distance_squared_rgb(&self, other: &Color) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }
    /// Bitwise equality of all four channels
    pub fn bits_eq(&self, other: &Color) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Color;

    #[test]
    fn rgba8_round_trip() {
        for v in [[0, 0, 0, 0], [255, 128, 1, 254], [17, 34, 51, 68]] {
            assert_eq!(Color::from_rgba8(v).to_rgba8(), v);
        }
    }

    #[test]
    fn distance_ignores_alpha() {
        let a = Color::new(0.0, 0.0, 0.0, 0.0);
        let b = Color::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(a.distance_squared_rgb(&b), 0.0);
        assert_eq!(Color::BLACK.distance_squared_rgb(&Color::WHITE), 3.0);
    }
}
