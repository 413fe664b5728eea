/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A width by height buffer of pixels in one pixel format
//!
//! The buffer length always equals `width * height * format.pixel_size()`,
//! every constructor and operation keeps it that way.
use texel_core::color::Color;
use texel_core::colorspace::ColorSpace;
use texel_core::format::PixelFormat;
use texel_core::geometry::Rect;
use texel_core::log::trace;
use texel_core::pixel::{decode_pixel, encode_pixel, encode_to_vec};

use crate::errors::ImageErrors;
use crate::filters::crop::crop;
use crate::filters::flip::{flip_horizontal, flip_vertical};
use crate::filters::mipmap::box_half;
use crate::filters::resize::{bilinear, nearest, ResizeMethod};
use crate::filters::rotate::{rotate_180, rotate_90_ccw, rotate_90_cw};

/// An owned image in a single pixel format
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width:  usize,
    height: usize,
    format: PixelFormat,
    data:   Vec<u8>
}

impl Surface {
    /// Create a zero filled surface
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Surface {
        Surface {
            width,
            height,
            format,
            data: vec![0; width * height * format.pixel_size()]
        }
    }
    /// Create a surface holding a copy of `bytes`
    ///
    /// # Errors
    /// [`ImageErrors::DimensionsMisMatch`] if the length of `bytes` is not
    /// `width * height * format.pixel_size()`
    pub fn from_bytes(
        width: usize, height: usize, format: PixelFormat, bytes: &[u8]
    ) -> Result<Surface, ImageErrors> {
        Surface::from_vec(width, height, format, bytes.to_vec())
    }
    /// Create a surface taking ownership of `data`
    ///
    /// # Errors
    /// Same as [`Surface::from_bytes`]
    pub fn from_vec(
        width: usize, height: usize, format: PixelFormat, data: Vec<u8>
    ) -> Result<Surface, ImageErrors> {
        let expected = width * height * format.pixel_size();

        if data.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
        }
        Ok(Surface {
            width,
            height,
            format,
            data
        })
    }
    /// Wrap the output of a decoder
    ///
    /// Decoders describe their output with a [`ColorSpace`], this picks the
    /// matching 8 bit pixel format.
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedColorspace`] for layouts without a pixel format
    /// - [`ImageErrors::DimensionsMisMatch`] as in [`Surface::from_vec`]
    pub fn from_colorspace(
        width: usize, height: usize, colorspace: ColorSpace, data: Vec<u8>
    ) -> Result<Surface, ImageErrors> {
        let format = colorspace
            .pixel_format()
            .ok_or(ImageErrors::UnsupportedColorspace(colorspace))?;
        Surface::from_vec(width, height, format, data)
    }

    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub const fn format(&self) -> PixelFormat {
        self.format
    }
    pub const fn pixel_size(&self) -> usize {
        self.format.pixel_size()
    }
    /// Bytes per row, rows are never padded
    pub const fn stride(&self) -> usize {
        self.width * self.format.pixel_size()
    }
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y * self.width + x) * self.pixel_size())
        } else {
            None
        }
    }
    /// Raw bytes of the pixel at `(x, y)` or `None` when out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let start = self.offset(x, y)?;
        self.data.get(start..start + self.pixel_size())
    }
    /// Raw bytes of row `y` or `None` when out of bounds
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        self.data.get(y * stride..(y + 1) * stride)
    }
    /// Color of the pixel at `(x, y)`, `default` when out of bounds
    pub fn get_pixel(&self, x: usize, y: usize, default: Color) -> Color {
        match self.pixel(x, y) {
            Some(raw) => decode_pixel(raw, self.format),
            None => default
        }
    }
    /// Write a color at `(x, y)`, out of bounds writes are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if let Some(start) = self.offset(x, y) {
            let size = self.pixel_size();
            encode_pixel(color, self.format, &mut self.data[start..start + size]);
        }
    }
    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        let size = self.pixel_size();

        if size == 0 {
            return;
        }
        let encoded = encode_to_vec(color, self.format);

        for px in self.data.chunks_exact_mut(size) {
            px.copy_from_slice(&encoded);
        }
    }

    /// Re-encode every pixel into `target`
    ///
    /// Converting to the current format is a plain copy.
    pub fn convert(&self, target: PixelFormat) -> Surface {
        if target == self.format {
            return self.clone();
        }
        let mut out = Surface::new(self.width, self.height, target);
        let (in_size, out_size) = (self.pixel_size(), target.pixel_size());

        if in_size == 0 || out_size == 0 {
            return out;
        }
        for (src, dst) in self
            .data
            .chunks_exact(in_size)
            .zip(out.data.chunks_exact_mut(out_size))
        {
            encode_pixel(decode_pixel(src, self.format), target, dst);
        }
        out
    }
    /// Change dimensions and format without touching the bytes
    ///
    /// # Errors
    /// [`ImageErrors::DimensionsMisMatch`] when `width * height * format.pixel_size()`
    /// differs from the current buffer length, the surface is left unchanged.
    pub fn reinterpret(
        &mut self, width: usize, height: usize, format: PixelFormat
    ) -> Result<(), ImageErrors> {
        let expected = width * height * format.pixel_size();

        if expected != self.data.len() {
            return Err(ImageErrors::DimensionsMisMatch(expected, self.data.len()));
        }
        self.width = width;
        self.height = height;
        self.format = format;
        Ok(())
    }

    /// Mirror left to right
    pub fn flip_x(&mut self) {
        flip_horizontal(&mut self.data, self.width, self.format.pixel_size());
    }
    /// Mirror top to bottom
    pub fn flip_y(&mut self) {
        flip_vertical(&mut self.data, self.width, self.height, self.format.pixel_size());
    }
    pub fn rotate_180(&mut self) {
        rotate_180(&mut self.data, self.format.pixel_size());
    }
    /// Rotate clockwise, swapping width and height
    pub fn rotate_90_cw(&mut self) {
        let mut out = vec![0; self.data.len()];
        rotate_90_cw(&self.data, &mut out, self.width, self.height, self.pixel_size());
        self.data = out;
        core::mem::swap(&mut self.width, &mut self.height);
    }
    /// Rotate counter clockwise, swapping width and height
    pub fn rotate_90_ccw(&mut self) {
        let mut out = vec![0; self.data.len()];
        rotate_90_ccw(&self.data, &mut out, self.width, self.height, self.pixel_size());
        self.data = out;
        core::mem::swap(&mut self.width, &mut self.height);
    }
    /// Copy out the region `rect`
    ///
    /// The rectangle is first clipped to the surface, a rectangle outside the
    /// surface gives a 0x0 result.
    pub fn crop(&self, rect: Rect) -> Surface {
        let mut rect = rect.clip(self.width, self.height);

        if rect.is_empty() {
            rect = Rect::new(0, 0, 0, 0);
        }
        let mut out = Surface::new(rect.width, rect.height, self.format);
        crop(&self.data, self.width, self.pixel_size(), &mut out.data, rect);
        out
    }

    /// Resample to `width` by `height`
    pub fn resize(&mut self, width: usize, height: usize, method: ResizeMethod) {
        trace!(
            "Resizing {}x{} to {width}x{height} with {method:?}",
            self.width,
            self.height
        );
        let mut out = vec![0; width * height * self.pixel_size()];

        match method {
            ResizeMethod::Nearest => nearest(
                &self.data,
                &mut out,
                self.width,
                self.height,
                width,
                height,
                self.pixel_size()
            ),
            ResizeMethod::Bilinear => bilinear(
                &self.data,
                &mut out,
                self.width,
                self.height,
                width,
                height,
                self.format
            )
        }
        self.data = out;
        self.width = width;
        self.height = height;
    }
    /// Resample picking the method from the direction
    ///
    /// Shrinking to fewer pixels uses nearest neighbour, anything else bilinear.
    pub fn resize_auto(&mut self, width: usize, height: usize) {
        let method = if width * height < self.width * self.height {
            ResizeMethod::Nearest
        } else {
            ResizeMethod::Bilinear
        };
        self.resize(width, height, method);
    }
    /// Build successively halved copies with a 2x2 box filter
    ///
    /// The first level is half this surface. Generation stops after
    /// `max_depth` levels or when either dimension would become zero.
    pub fn generate_mipmaps(&self, max_depth: usize) -> Vec<Surface> {
        let mut levels: Vec<Surface> = Vec::new();

        while levels.len() < max_depth {
            let previous = levels.last().unwrap_or(self);
            let (width, height) = (previous.width / 2, previous.height / 2);

            if width == 0 || height == 0 {
                break;
            }
            let mut level = Surface::new(width, height, self.format);
            box_half(
                &previous.data,
                &mut level.data,
                previous.width,
                previous.height,
                self.format
            );
            levels.push(level);
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};
    use texel_core::color::Color;
    use texel_core::format::PixelFormat;
    use texel_core::geometry::Rect;

    use crate::errors::ImageErrors;
    use crate::filters::resize::ResizeMethod;
    use crate::surface::Surface;

    fn random_surface(width: usize, height: usize, format: PixelFormat) -> Surface {
        let mut rand = WyRand::new_seed(42);
        let mut surface = Surface::new(width, height, format);
        rand.fill_bytes(surface.data_mut());
        surface
    }

    #[test]
    fn from_bytes_checks_length() {
        let err = Surface::from_bytes(2, 2, PixelFormat::RGB8, &[0; 11]);
        assert!(matches!(err, Err(ImageErrors::DimensionsMisMatch(12, 11))));
        assert!(Surface::from_bytes(2, 2, PixelFormat::RGB8, &[0; 12]).is_ok());
    }

    #[test]
    fn out_of_bounds_access() {
        let mut surface = Surface::new(2, 2, PixelFormat::RGBA8);
        surface.set_pixel(2, 0, Color::WHITE);
        assert!(surface.data().iter().all(|x| *x == 0));

        let default = Color::new(0.5, 0.5, 0.5, 0.5);
        assert!(surface.get_pixel(0, 5, default).bits_eq(&default));
    }

    #[test]
    fn set_then_get() {
        let mut surface = Surface::new(3, 3, PixelFormat::RGB565);
        surface.set_pixel(1, 2, Color::RED);
        let color = surface.get_pixel(1, 2, Color::TRANSPARENT);
        assert_eq!(color.to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn fill_and_convert() {
        let mut surface = Surface::new(4, 3, PixelFormat::BGRA8);
        surface.fill(Color::BLUE);
        assert_eq!(surface.pixel(3, 2), Some(&[255, 0, 0, 255][..]));

        let rgb = surface.convert(PixelFormat::RGB8);
        assert_eq!(rgb.dimensions(), (4, 3));
        assert!(rgb.data().chunks_exact(3).all(|x| x == [0, 0, 255]));
    }

    #[test]
    fn identity_convert_copies() {
        let surface = random_surface(5, 5, PixelFormat::RGBA16);
        assert_eq!(surface.convert(PixelFormat::RGBA16), surface);
    }

    #[test]
    fn reinterpret_safety() {
        let mut surface = random_surface(4, 4, PixelFormat::RGBA8);
        let copy = surface.clone();

        assert!(surface.reinterpret(3, 3, PixelFormat::RGBA8).is_err());
        assert_eq!(surface, copy);

        surface.reinterpret(8, 4, PixelFormat::RG8).unwrap();
        assert_eq!(surface.dimensions(), (8, 4));
        assert_eq!(surface.format(), PixelFormat::RG8);
        assert_eq!(surface.data(), copy.data());
    }

    #[test]
    fn transforms_are_involutions() {
        let original = random_surface(7, 5, PixelFormat::RGB8);

        let mut surface = original.clone();
        surface.flip_x();
        surface.flip_x();
        assert_eq!(surface, original);

        surface.flip_y();
        surface.flip_y();
        assert_eq!(surface, original);

        surface.rotate_180();
        surface.rotate_180();
        assert_eq!(surface, original);

        surface.rotate_90_cw();
        assert_eq!(surface.dimensions(), (5, 7));
        surface.rotate_90_ccw();
        assert_eq!(surface, original);
    }

    #[test]
    fn four_quarter_turns() {
        let original = random_surface(6, 3, PixelFormat::R16);
        let mut surface = original.clone();

        for _ in 0..4 {
            surface.rotate_90_cw();
        }
        assert_eq!(surface, original);
    }

    #[test]
    fn crop_clips() {
        let surface = random_surface(4, 4, PixelFormat::R8);
        let cropped = surface.crop(Rect::new(2, 1, 10, 2));
        assert_eq!(cropped.dimensions(), (2, 2));
        assert_eq!(cropped.row(0), Some(&surface.row(1).unwrap()[2..4]));

        let outside = surface.crop(Rect::new(10, 10, 2, 2));
        assert_eq!(outside.dimensions(), (0, 0));
        assert!(outside.data().is_empty());
    }

    #[test]
    fn same_size_nearest_is_exact() {
        for format in PixelFormat::ALL {
            let original = random_surface(9, 4, format);
            let mut surface = original.clone();
            surface.resize(9, 4, ResizeMethod::Nearest);
            assert_eq!(surface, original, "{format:?}");
        }
    }

    #[test]
    fn resize_auto_picks_direction() {
        let mut surface = random_surface(8, 8, PixelFormat::RGB8);
        let corner = surface.pixel(0, 0).unwrap().to_vec();
        surface.resize_auto(4, 4);
        // nearest keeps source pixels
        assert_eq!(surface.pixel(0, 0).unwrap(), &corner[..]);

        surface.resize_auto(16, 12);
        assert_eq!(surface.dimensions(), (16, 12));
        assert_eq!(surface.data().len(), 16 * 12 * 3);
    }

    #[test]
    fn mipmap_chain() {
        let mut surface = Surface::new(16, 4, PixelFormat::RGBA8);
        surface.fill(Color::GREEN);
        let levels = surface.generate_mipmaps(10);

        let dims: Vec<_> = levels.iter().map(|x| x.dimensions()).collect();
        assert_eq!(dims, [(8, 2), (4, 1)]);
        assert!(levels[1].data().chunks_exact(4).all(|x| x == [0, 255, 0, 255]));

        assert_eq!(surface.generate_mipmaps(1).len(), 1);
        assert!(Surface::new(1, 1, PixelFormat::R8)
            .generate_mipmaps(4)
            .is_empty());
    }
}
