/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Palette indexed surfaces
//!
//! Indices are packed into bytes with no row padding. A pixel at linear offset
//! `o` lives in byte `o / indices_per_byte` at sub position `o % indices_per_byte`.
//! LSB first layouts put sub position 0 in the lowest bits of the byte, MSB
//! first layouts in the highest.
use texel_core::color::Color;
use texel_core::format::PixelFormat;

use crate::errors::ImageErrors;
use crate::surface::Surface;

/// Bit width and bit order of palette indices
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IndexFormat {
    Index1Lsb,
    Index1Msb,
    Index2Lsb,
    Index2Msb,
    Index4Lsb,
    Index4Msb,
    Index8
}

impl IndexFormat {
    pub const fn bits_per_index(self) -> usize {
        match self {
            IndexFormat::Index1Lsb | IndexFormat::Index1Msb => 1,
            IndexFormat::Index2Lsb | IndexFormat::Index2Msb => 2,
            IndexFormat::Index4Lsb | IndexFormat::Index4Msb => 4,
            IndexFormat::Index8 => 8
        }
    }
    pub const fn indices_per_byte(self) -> usize {
        8 / self.bits_per_index()
    }
    /// Number of colors an index of this width can address
    pub const fn max_palette_size(self) -> usize {
        1 << self.bits_per_index()
    }
    pub const fn is_msb_first(self) -> bool {
        matches!(
            self,
            IndexFormat::Index1Msb | IndexFormat::Index2Msb | IndexFormat::Index4Msb
        )
    }
    /// The narrowest MSB first format able to address `size` colors
    ///
    /// Returns `None` for sizes above 256.
    pub const fn for_palette_size(size: usize) -> Option<IndexFormat> {
        match size {
            0..=2 => Some(IndexFormat::Index1Msb),
            3..=4 => Some(IndexFormat::Index2Msb),
            5..=16 => Some(IndexFormat::Index4Msb),
            17..=256 => Some(IndexFormat::Index8),
            _ => None
        }
    }
    /// Bytes needed for `width * height` indices
    pub const fn buffer_size(self, width: usize, height: usize) -> usize {
        (width * height).div_ceil(self.indices_per_byte())
    }

    const fn shift(self, sub: usize) -> usize {
        let bits = self.bits_per_index();

        if self.is_msb_first() {
            8 - bits * (sub + 1)
        } else {
            bits * sub
        }
    }
}

/// An ordered list of up to 256 colors
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>
}

impl Palette {
    /// Largest palette any index format can address
    pub const MAX_COLORS: usize = 256;

    /// Create a palette
    ///
    /// # Errors
    /// [`ImageErrors::BadPalette`] when `colors` is empty or holds more than 256 entries
    pub fn new(colors: Vec<Color>) -> Result<Palette, ImageErrors> {
        if colors.is_empty() || colors.len() > Palette::MAX_COLORS {
            return Err(ImageErrors::BadPalette(colors.len(), Palette::MAX_COLORS));
        }
        Ok(Palette { colors })
    }
    pub fn len(&self) -> usize {
        self.colors.len()
    }
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }
    /// Index of the entry closest to `color`
    ///
    /// An exact match wins, otherwise the smallest squared RGB distance.
    /// Alpha is ignored for the distance and ties go to the lowest index.
    pub fn nearest_index(&self, color: &Color) -> usize {
        if let Some(pos) = self.colors.iter().position(|c| c.bits_eq(color)) {
            return pos;
        }
        let mut best = 0;
        let mut best_distance = f32::INFINITY;

        for (i, c) in self.colors.iter().enumerate() {
            let distance = c.distance_squared_rgb(color);

            if distance < best_distance {
                best = i;
                best_distance = distance;
            }
        }
        best
    }
}

/// A surface storing palette indices instead of colors
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteSurface {
    width:        usize,
    height:       usize,
    index_format: IndexFormat,
    palette:      Palette,
    indices:      Vec<u8>
}

impl PaletteSurface {
    /// Create a surface with every index zero
    ///
    /// # Errors
    /// [`ImageErrors::BadPalette`] when the palette is empty or has more
    /// colors than `index_format` can address
    pub fn new(
        width: usize, height: usize, index_format: IndexFormat, palette: Palette
    ) -> Result<PaletteSurface, ImageErrors> {
        let max = index_format.max_palette_size();

        if palette.is_empty() || palette.len() > max {
            return Err(ImageErrors::BadPalette(palette.len(), max));
        }
        Ok(PaletteSurface {
            width,
            height,
            index_format,
            palette,
            indices: vec![0; index_format.buffer_size(width, height)]
        })
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub const fn index_format(&self) -> IndexFormat {
        self.index_format
    }
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }
    /// Packed index bytes
    pub fn data(&self) -> &[u8] {
        &self.indices
    }

    /// Read the index at linear offset `offset`
    ///
    /// Offsets past the buffer read as zero.
    pub fn get_index(&self, offset: usize) -> usize {
        let per_byte = self.index_format.indices_per_byte();
        let Some(byte) = self.indices.get(offset / per_byte) else {
            return 0;
        };
        let mask = (1_usize << self.index_format.bits_per_index()) - 1;
        (usize::from(*byte) >> self.index_format.shift(offset % per_byte)) & mask
    }
    /// Store `index` at linear offset `offset`
    ///
    /// Bits above the index width are dropped, offsets past the buffer are ignored.
    pub fn set_index(&mut self, offset: usize, index: usize) {
        let per_byte = self.index_format.indices_per_byte();
        let shift = self.index_format.shift(offset % per_byte);
        let mask = (1_usize << self.index_format.bits_per_index()) - 1;

        if let Some(byte) = self.indices.get_mut(offset / per_byte) {
            let cleared = usize::from(*byte) & !(mask << shift);
            *byte = (cleared | ((index & mask) << shift)) as u8;
        }
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }
    /// Index at `(x, y)`, `None` when out of bounds
    pub fn read_pixel_index(&self, x: usize, y: usize) -> Option<usize> {
        self.offset(x, y).map(|o| self.get_index(o))
    }
    /// Store an index at `(x, y)`
    ///
    /// Out of bounds positions and indices outside the palette are ignored.
    pub fn write_pixel_index(&mut self, x: usize, y: usize, index: usize) {
        if index >= self.palette.len() {
            return;
        }
        if let Some(offset) = self.offset(x, y) {
            self.set_index(offset, index);
        }
    }
    /// Color at `(x, y)`, `default` when out of bounds
    pub fn read_pixel_color(&self, x: usize, y: usize, default: Color) -> Color {
        match self.read_pixel_index(x, y) {
            Some(index) => self.lookup(index),
            None => default
        }
    }
    /// Store the palette entry nearest to `color` at `(x, y)`
    pub fn write_pixel_color(&mut self, x: usize, y: usize, color: Color) {
        let index = self.palette.nearest_index(&color);
        self.write_pixel_index(x, y, index);
    }

    fn lookup(&self, index: usize) -> Color {
        debug_assert!(
            index < self.palette.len(),
            "palette index {index} out of range for {} colors",
            self.palette.len()
        );
        self.palette.get(index).unwrap_or_default()
    }
    /// Iterate over every pixel's color in row major order
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        (0..self.width * self.height).map(|offset| self.lookup(self.get_index(offset)))
    }
    /// Expand to a true color surface in `format`
    pub fn to_surface(&self, format: PixelFormat) -> Surface {
        let mut surface = Surface::new(self.width, self.height, format);
        let width = self.width;

        for (offset, color) in self.pixels().enumerate() {
            surface.set_pixel(offset % width, offset / width, color);
        }
        surface
    }
}

#[cfg(test)]
mod tests {
    use texel_core::color::Color;
    use texel_core::format::PixelFormat;

    use crate::errors::ImageErrors;
    use crate::palette::{IndexFormat, Palette, PaletteSurface};

    fn grey_palette(n: usize) -> Palette {
        let colors = (0..n)
            .map(|i| {
                let v = i as f32 / (n.max(2) - 1) as f32;
                Color::rgb(v, v, v)
            })
            .collect();
        Palette::new(colors).unwrap()
    }

    #[test]
    fn surfaces_need_a_non_empty_palette() {
        let surface = Palette::new(vec![])
            .and_then(|p| PaletteSurface::new(1, 1, IndexFormat::Index8, p));
        assert!(matches!(surface, Err(ImageErrors::BadPalette(0, _))));

        // the smallest valid palette backs every read
        let red = Color::rgb(1.0, 0.0, 0.0);
        let palette = Palette::new(vec![red]).unwrap();
        let mut surface = PaletteSurface::new(2, 2, IndexFormat::Index1Msb, palette).unwrap();
        surface.write_pixel_color(1, 1, Color::WHITE);

        assert!(surface.pixels().all(|c| c == red));
        assert_eq!(surface.read_pixel_index(1, 1), Some(0));
    }

    #[test]
    fn palette_bounds() {
        assert!(matches!(
            Palette::new(vec![]),
            Err(ImageErrors::BadPalette(0, 256))
        ));
        assert!(Palette::new(vec![Color::BLACK; 257]).is_err());
        assert_eq!(Palette::new(vec![Color::BLACK; 256]).unwrap().len(), 256);
    }

    #[test]
    fn surface_rejects_oversized_palette() {
        let err = PaletteSurface::new(2, 2, IndexFormat::Index1Msb, grey_palette(3));
        assert!(matches!(err, Err(ImageErrors::BadPalette(3, 2))));
    }

    #[test]
    fn nearest_prefers_exact_then_lowest() {
        let palette = Palette::new(vec![
            Color::rgb(0.0, 0.0, 0.0),
            Color::rgb(1.0, 1.0, 1.0),
            Color::rgb(1.0, 1.0, 1.0)
        ])
        .unwrap();
        assert_eq!(palette.nearest_index(&Color::rgb(0.9, 0.9, 0.9)), 1);
        assert_eq!(palette.nearest_index(&Color::rgb(0.5, 0.5, 0.5)), 0);
        assert_eq!(palette.nearest_index(&Color::WHITE), 1);
    }

    #[test]
    fn bit_order() {
        let mut msb = PaletteSurface::new(8, 1, IndexFormat::Index1Msb, grey_palette(2)).unwrap();
        msb.set_index(0, 1);
        assert_eq!(msb.data(), [0b1000_0000]);

        let mut lsb = PaletteSurface::new(8, 1, IndexFormat::Index1Lsb, grey_palette(2)).unwrap();
        lsb.set_index(0, 1);
        assert_eq!(lsb.data(), [0b0000_0001]);

        let mut two = PaletteSurface::new(4, 1, IndexFormat::Index2Msb, grey_palette(4)).unwrap();
        two.set_index(1, 3);
        two.set_index(3, 2);
        assert_eq!(two.data(), [0b0011_0010]);

        let mut four = PaletteSurface::new(2, 1, IndexFormat::Index4Lsb, grey_palette(16)).unwrap();
        four.set_index(1, 0xA);
        four.set_index(0, 0x5);
        assert_eq!(four.data(), [0xA5]);
        assert_eq!(four.get_index(1), 0xA);
    }

    #[test]
    fn no_row_padding() {
        let surface = PaletteSurface::new(3, 3, IndexFormat::Index1Lsb, grey_palette(2)).unwrap();
        assert_eq!(surface.data().len(), 2);
    }

    #[test]
    fn every_format_round_trips_indices() {
        let formats = [
            IndexFormat::Index1Lsb,
            IndexFormat::Index1Msb,
            IndexFormat::Index2Lsb,
            IndexFormat::Index2Msb,
            IndexFormat::Index4Lsb,
            IndexFormat::Index4Msb,
            IndexFormat::Index8
        ];
        for format in formats {
            let size = format.max_palette_size();
            let mut surface = PaletteSurface::new(5, 3, format, grey_palette(size)).unwrap();

            for y in 0..3 {
                for x in 0..5 {
                    surface.write_pixel_index(x, y, (x * 7 + y * 3) % size);
                }
            }
            for y in 0..3 {
                for x in 0..5 {
                    assert_eq!(
                        surface.read_pixel_index(x, y),
                        Some((x * 7 + y * 3) % size),
                        "{format:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn invalid_writes_are_ignored() {
        let mut surface = PaletteSurface::new(2, 2, IndexFormat::Index4Msb, grey_palette(3)).unwrap();
        surface.write_pixel_index(0, 0, 2);
        surface.write_pixel_index(0, 0, 3);
        surface.write_pixel_index(2, 0, 1);
        assert_eq!(surface.read_pixel_index(0, 0), Some(2));
        assert_eq!(surface.data(), [0x20, 0x00]);
        assert_eq!(surface.read_pixel_index(0, 2), None);
    }

    #[test]
    fn colors_and_expansion() {
        let palette = Palette::new(vec![Color::RED, Color::BLUE]).unwrap();
        let mut surface = PaletteSurface::new(2, 1, IndexFormat::Index1Msb, palette).unwrap();
        surface.write_pixel_color(1, 0, Color::rgb(0.1, 0.0, 0.8));

        let colors: Vec<_> = surface.pixels().map(|c| c.to_rgba8()).collect();
        assert_eq!(colors, [[255, 0, 0, 255], [0, 0, 255, 255]]);

        let rgb = surface.to_surface(PixelFormat::RGB8);
        assert_eq!(rgb.data(), [255, 0, 0, 0, 0, 255]);
        assert!(surface
            .read_pixel_color(5, 5, Color::GREEN)
            .bits_eq(&Color::GREEN));
    }
}
