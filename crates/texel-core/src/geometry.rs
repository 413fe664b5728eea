/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Integer 2D geometry

/// An axis aligned rectangle in pixel coordinates
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Hash)]
pub struct Rect {
    pub x:      usize,
    pub y:      usize,
    pub width:  usize,
    pub height: usize
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Rect {
        Rect {
            x,
            y,
            width,
            height
        }
    }
    pub const fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }
    pub const fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
    /// Clip the rectangle to `0..width` by `0..height`
    ///
    /// A rectangle entirely outside becomes empty.
    pub fn clip(&self, width: usize, height: usize) -> Rect {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Rect::new(x, y, self.right().min(width) - x, self.bottom().min(height) - y)
    }
}
