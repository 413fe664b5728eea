/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel format descriptors
//!
//! A [`PixelFormat`] is a 32 bit identifier describing how one pixel
//! is laid out in memory. The identifier packs
//!
//! | bits  | field                                   |
//! |-------|-----------------------------------------|
//! | 0-3   | [`StorageClass`]                        |
//! | 4-7   | [`ChannelOrder`]                        |
//! | 8-11  | [`PackLayout`] (packed storage only)    |
//! | 12-14 | channel count, including padding slots  |
//! | 16-23 | size of one pixel in bytes              |
//! | 24    | alpha present                           |
//!
//! From those fields [`PixelFormat::channel_layout`] derives where each of
//! the red, green, blue and alpha channels lives, a bit mask for packed
//! formats or an element index for array formats.
//!
//! Multi byte words and elements are stored in native endian.

use core::fmt::{Debug, Formatter};

/// How the bytes of a pixel are organized
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum StorageClass {
    Unknown = 0,
    /// All channels share one 8, 16 or 32 bit word
    Packed = 1,
    /// One unsigned integer element per channel, 8, 16, 32 or 64 bits wide
    ArrayUint = 2,
    /// One float element per channel, half or single precision
    ArrayFloat = 3
}

impl StorageClass {
    const fn from_bits(bits: u32) -> StorageClass {
        match bits {
            1 => StorageClass::Packed,
            2 => StorageClass::ArrayUint,
            3 => StorageClass::ArrayFloat,
            _ => StorageClass::Unknown
        }
    }
}

/// A single slot in a channel order
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Slot {
    R,
    G,
    B,
    A,
    /// Padding, occupies space but carries nothing
    X
}

/// Order of the channels in a pixel
///
/// For packed formats the order lists slots from the most significant
/// bits to the least significant, `ARGB` with an 8888 layout places
/// alpha in bits 24-31. For array formats it is the element order.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ChannelOrder {
    Unknown = 0,
    R = 1,
    RG = 2,
    RGB = 3,
    BGR = 4,
    RGBA = 5,
    BGRA = 6,
    ARGB = 7,
    ABGR = 8,
    RGBX = 9,
    BGRX = 10,
    XRGB = 11,
    XBGR = 12
}

impl ChannelOrder {
    const fn from_bits(bits: u32) -> ChannelOrder {
        match bits {
            1 => ChannelOrder::R,
            2 => ChannelOrder::RG,
            3 => ChannelOrder::RGB,
            4 => ChannelOrder::BGR,
            5 => ChannelOrder::RGBA,
            6 => ChannelOrder::BGRA,
            7 => ChannelOrder::ARGB,
            8 => ChannelOrder::ABGR,
            9 => ChannelOrder::RGBX,
            10 => ChannelOrder::BGRX,
            11 => ChannelOrder::XRGB,
            12 => ChannelOrder::XBGR,
            _ => ChannelOrder::Unknown
        }
    }

    /// The slots making up this order
    pub const fn slots(self) -> &'static [Slot] {
        use Slot::*;
        match self {
            ChannelOrder::Unknown => &[],
            ChannelOrder::R => &[R],
            ChannelOrder::RG => &[R, G],
            ChannelOrder::RGB => &[R, G, B],
            ChannelOrder::BGR => &[B, G, R],
            ChannelOrder::RGBA => &[R, G, B, A],
            ChannelOrder::BGRA => &[B, G, R, A],
            ChannelOrder::ARGB => &[A, R, G, B],
            ChannelOrder::ABGR => &[A, B, G, R],
            ChannelOrder::RGBX => &[R, G, B, X],
            ChannelOrder::BGRX => &[B, G, R, X],
            ChannelOrder::XRGB => &[X, R, G, B],
            ChannelOrder::XBGR => &[X, B, G, R]
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            ChannelOrder::RGBA | ChannelOrder::BGRA | ChannelOrder::ARGB | ChannelOrder::ABGR
        )
    }
}

/// Bit widths of the slots of a packed format, most significant first
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum PackLayout {
    None = 0,
    L332 = 1,
    L4444 = 2,
    L1555 = 3,
    L5551 = 4,
    L565 = 5,
    L8888 = 6,
    L2101010 = 7,
    L1010102 = 8
}

impl PackLayout {
    const fn from_bits(bits: u32) -> PackLayout {
        match bits {
            1 => PackLayout::L332,
            2 => PackLayout::L4444,
            3 => PackLayout::L1555,
            4 => PackLayout::L5551,
            5 => PackLayout::L565,
            6 => PackLayout::L8888,
            7 => PackLayout::L2101010,
            8 => PackLayout::L1010102,
            _ => PackLayout::None
        }
    }

    /// Width of each slot in bits
    pub const fn widths(self) -> &'static [u8] {
        match self {
            PackLayout::None => &[],
            PackLayout::L332 => &[3, 3, 2],
            PackLayout::L4444 => &[4, 4, 4, 4],
            PackLayout::L1555 => &[1, 5, 5, 5],
            PackLayout::L5551 => &[5, 5, 5, 1],
            PackLayout::L565 => &[5, 6, 5],
            PackLayout::L8888 => &[8, 8, 8, 8],
            PackLayout::L2101010 => &[2, 10, 10, 10],
            PackLayout::L1010102 => &[10, 10, 10, 2]
        }
    }
}

/// Location of one channel inside a pixel
///
/// For packed formats `mask_or_index` is the bit mask inside the pixel word
/// and `shift` the position of its lowest bit. For array formats it is the
/// element index and `shift` is zero. `bits == 0` means the channel is absent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct ChannelInfo {
    pub mask_or_index: u32,
    pub shift:         u8,
    pub bits:          u8
}

impl ChannelInfo {
    pub const ABSENT: ChannelInfo = ChannelInfo {
        mask_or_index: 0,
        shift:         0,
        bits:          0
    };

    pub const fn is_present(&self) -> bool {
        self.bits != 0
    }
    /// Largest integer the channel can hold
    pub const fn max_value(&self) -> u64 {
        if self.bits >= 64 {
            u64::MAX
        } else {
            (1_u64 << self.bits) - 1
        }
    }
}

/// Where red, green, blue and alpha live in a pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct ChannelLayout {
    pub r: ChannelInfo,
    pub g: ChannelInfo,
    pub b: ChannelInfo,
    pub a: ChannelInfo
}

impl ChannelLayout {
    pub const EMPTY: ChannelLayout = ChannelLayout {
        r: ChannelInfo::ABSENT,
        g: ChannelInfo::ABSENT,
        b: ChannelInfo::ABSENT,
        a: ChannelInfo::ABSENT
    };

    pub fn is_empty(&self) -> bool {
        *self == ChannelLayout::EMPTY
    }

    /// Channels in r, g, b, a order
    pub const fn channels(&self) -> [ChannelInfo; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn slot_mut(&mut self, slot: Slot) -> Option<&mut ChannelInfo> {
        match slot {
            Slot::R => Some(&mut self.r),
            Slot::G => Some(&mut self.g),
            Slot::B => Some(&mut self.b),
            Slot::A => Some(&mut self.a),
            Slot::X => None
        }
    }
}

/// A pixel format identifier
///
/// Equal descriptions produce equal identifiers, so formats can be
/// compared and used as map keys directly.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct PixelFormat(u32);

const fn packed(order: ChannelOrder, layout: PackLayout, byte_size: u8) -> PixelFormat {
    PixelFormat::new(
        StorageClass::Packed,
        order,
        layout,
        order.slots().len() as u8,
        byte_size,
        order.has_alpha()
    )
}

const fn array_uint(order: ChannelOrder, element_size: u8) -> PixelFormat {
    let count = order.slots().len() as u8;
    PixelFormat::new(
        StorageClass::ArrayUint,
        order,
        PackLayout::None,
        count,
        count * element_size,
        order.has_alpha()
    )
}

const fn array_float(order: ChannelOrder, element_size: u8) -> PixelFormat {
    let count = order.slots().len() as u8;
    PixelFormat::new(
        StorageClass::ArrayFloat,
        order,
        PackLayout::None,
        count,
        count * element_size,
        order.has_alpha()
    )
}

impl PixelFormat {
    pub const RGB332: PixelFormat = packed(ChannelOrder::RGB, PackLayout::L332, 1);

    pub const RGB565: PixelFormat = packed(ChannelOrder::RGB, PackLayout::L565, 2);
    pub const BGR565: PixelFormat = packed(ChannelOrder::BGR, PackLayout::L565, 2);
    pub const ARGB4444: PixelFormat = packed(ChannelOrder::ARGB, PackLayout::L4444, 2);
    pub const RGBA4444: PixelFormat = packed(ChannelOrder::RGBA, PackLayout::L4444, 2);
    pub const ABGR4444: PixelFormat = packed(ChannelOrder::ABGR, PackLayout::L4444, 2);
    pub const BGRA4444: PixelFormat = packed(ChannelOrder::BGRA, PackLayout::L4444, 2);
    pub const ARGB1555: PixelFormat = packed(ChannelOrder::ARGB, PackLayout::L1555, 2);
    pub const XRGB1555: PixelFormat = packed(ChannelOrder::XRGB, PackLayout::L1555, 2);
    pub const RGBA5551: PixelFormat = packed(ChannelOrder::RGBA, PackLayout::L5551, 2);
    pub const BGRA5551: PixelFormat = packed(ChannelOrder::BGRA, PackLayout::L5551, 2);

    pub const ARGB8888: PixelFormat = packed(ChannelOrder::ARGB, PackLayout::L8888, 4);
    pub const RGBA8888: PixelFormat = packed(ChannelOrder::RGBA, PackLayout::L8888, 4);
    pub const ABGR8888: PixelFormat = packed(ChannelOrder::ABGR, PackLayout::L8888, 4);
    pub const BGRA8888: PixelFormat = packed(ChannelOrder::BGRA, PackLayout::L8888, 4);
    pub const XRGB8888: PixelFormat = packed(ChannelOrder::XRGB, PackLayout::L8888, 4);
    pub const RGBX8888: PixelFormat = packed(ChannelOrder::RGBX, PackLayout::L8888, 4);
    pub const XBGR8888: PixelFormat = packed(ChannelOrder::XBGR, PackLayout::L8888, 4);
    pub const BGRX8888: PixelFormat = packed(ChannelOrder::BGRX, PackLayout::L8888, 4);
    pub const ARGB2101010: PixelFormat = packed(ChannelOrder::ARGB, PackLayout::L2101010, 4);
    pub const ABGR2101010: PixelFormat = packed(ChannelOrder::ABGR, PackLayout::L2101010, 4);

    pub const R8: PixelFormat = array_uint(ChannelOrder::R, 1);
    pub const RG8: PixelFormat = array_uint(ChannelOrder::RG, 1);
    pub const RGB8: PixelFormat = array_uint(ChannelOrder::RGB, 1);
    pub const BGR8: PixelFormat = array_uint(ChannelOrder::BGR, 1);
    pub const RGBA8: PixelFormat = array_uint(ChannelOrder::RGBA, 1);
    pub const BGRA8: PixelFormat = array_uint(ChannelOrder::BGRA, 1);
    pub const ARGB8: PixelFormat = array_uint(ChannelOrder::ARGB, 1);
    pub const ABGR8: PixelFormat = array_uint(ChannelOrder::ABGR, 1);
    pub const RGBX8: PixelFormat = array_uint(ChannelOrder::RGBX, 1);
    pub const BGRX8: PixelFormat = array_uint(ChannelOrder::BGRX, 1);

    pub const R16: PixelFormat = array_uint(ChannelOrder::R, 2);
    pub const RG16: PixelFormat = array_uint(ChannelOrder::RG, 2);
    pub const RGB16: PixelFormat = array_uint(ChannelOrder::RGB, 2);
    pub const RGBA16: PixelFormat = array_uint(ChannelOrder::RGBA, 2);

    pub const R32: PixelFormat = array_uint(ChannelOrder::R, 4);
    pub const RGBA32: PixelFormat = array_uint(ChannelOrder::RGBA, 4);

    pub const R64: PixelFormat = array_uint(ChannelOrder::R, 8);
    pub const RGBA64: PixelFormat = array_uint(ChannelOrder::RGBA, 8);

    pub const R16F: PixelFormat = array_float(ChannelOrder::R, 2);
    pub const RG16F: PixelFormat = array_float(ChannelOrder::RG, 2);
    pub const RGB16F: PixelFormat = array_float(ChannelOrder::RGB, 2);
    pub const RGBA16F: PixelFormat = array_float(ChannelOrder::RGBA, 2);

    pub const R32F: PixelFormat = array_float(ChannelOrder::R, 4);
    pub const RG32F: PixelFormat = array_float(ChannelOrder::RG, 4);
    pub const RGB32F: PixelFormat = array_float(ChannelOrder::RGB, 4);
    pub const RGBA32F: PixelFormat = array_float(ChannelOrder::RGBA, 4);

    /// Every predefined format
    pub const ALL: [PixelFormat; 47] = [
        PixelFormat::RGB332,
        PixelFormat::RGB565,
        PixelFormat::BGR565,
        PixelFormat::ARGB4444,
        PixelFormat::RGBA4444,
        PixelFormat::ABGR4444,
        PixelFormat::BGRA4444,
        PixelFormat::ARGB1555,
        PixelFormat::XRGB1555,
        PixelFormat::RGBA5551,
        PixelFormat::BGRA5551,
        PixelFormat::ARGB8888,
        PixelFormat::RGBA8888,
        PixelFormat::ABGR8888,
        PixelFormat::BGRA8888,
        PixelFormat::XRGB8888,
        PixelFormat::RGBX8888,
        PixelFormat::XBGR8888,
        PixelFormat::BGRX8888,
        PixelFormat::ARGB2101010,
        PixelFormat::ABGR2101010,
        PixelFormat::R8,
        PixelFormat::RG8,
        PixelFormat::RGB8,
        PixelFormat::BGR8,
        PixelFormat::RGBA8,
        PixelFormat::BGRA8,
        PixelFormat::ARGB8,
        PixelFormat::ABGR8,
        PixelFormat::RGBX8,
        PixelFormat::BGRX8,
        PixelFormat::R16,
        PixelFormat::RG16,
        PixelFormat::RGB16,
        PixelFormat::RGBA16,
        PixelFormat::R32,
        PixelFormat::RGBA32,
        PixelFormat::R64,
        PixelFormat::RGBA64,
        PixelFormat::R16F,
        PixelFormat::RG16F,
        PixelFormat::RGB16F,
        PixelFormat::RGBA16F,
        PixelFormat::R32F,
        PixelFormat::RG32F,
        PixelFormat::RGB32F,
        PixelFormat::RGBA32F
    ];

    const NAMES: [&'static str; 47] = [
        "RGB332", "RGB565", "BGR565", "ARGB4444", "RGBA4444", "ABGR4444", "BGRA4444", "ARGB1555",
        "XRGB1555", "RGBA5551", "BGRA5551", "ARGB8888", "RGBA8888", "ABGR8888", "BGRA8888",
        "XRGB8888", "RGBX8888", "XBGR8888", "BGRX8888", "ARGB2101010", "ABGR2101010", "R8", "RG8",
        "RGB8", "BGR8", "RGBA8", "BGRA8", "ARGB8", "ABGR8", "RGBX8", "BGRX8", "R16", "RG16",
        "RGB16", "RGBA16", "R32", "RGBA32", "R64", "RGBA64", "R16F", "RG16F", "RGB16F", "RGBA16F",
        "R32F", "RG32F", "RGB32F", "RGBA32F"
    ];

    /// Build a format identifier from its parts
    ///
    /// This never fails, a combination that makes no sense produces an
    /// identifier whose [`channel_layout`](Self::channel_layout) is empty.
    pub const fn new(
        storage: StorageClass, order: ChannelOrder, layout: PackLayout, channel_count: u8,
        byte_size: u8, has_alpha: bool
    ) -> PixelFormat {
        PixelFormat(
            (storage as u32)
                | ((order as u32) << 4)
                | ((layout as u32) << 8)
                | (((channel_count & 7) as u32) << 12)
                | ((byte_size as u32) << 16)
                | ((has_alpha as u32) << 24)
        )
    }
    /// Wrap a raw identifier
    pub const fn from_id(id: u32) -> PixelFormat {
        PixelFormat(id)
    }
    /// The raw identifier
    pub const fn id(self) -> u32 {
        self.0
    }
    pub const fn storage_class(self) -> StorageClass {
        StorageClass::from_bits(self.0 & 0xF)
    }
    pub const fn channel_order(self) -> ChannelOrder {
        ChannelOrder::from_bits((self.0 >> 4) & 0xF)
    }
    pub const fn pack_layout(self) -> PackLayout {
        PackLayout::from_bits((self.0 >> 8) & 0xF)
    }
    /// Number of slots, padding slots included
    pub const fn channel_count(self) -> usize {
        ((self.0 >> 12) & 7) as usize
    }
    /// Size of a single pixel in bytes
    pub const fn pixel_size(self) -> usize {
        ((self.0 >> 16) & 0xFF) as usize
    }
    pub const fn has_alpha(self) -> bool {
        (self.0 >> 24) & 1 == 1
    }
    pub const fn is_packed(self) -> bool {
        matches!(self.storage_class(), StorageClass::Packed)
    }
    pub const fn is_float(self) -> bool {
        matches!(self.storage_class(), StorageClass::ArrayFloat)
    }
    /// Size in bytes of one storage unit, the whole word for packed
    /// formats, a single element for array formats
    pub const fn element_size(self) -> usize {
        let count = self.channel_count();
        match self.storage_class() {
            StorageClass::Packed => self.pixel_size(),
            StorageClass::ArrayUint | StorageClass::ArrayFloat if count != 0 => {
                self.pixel_size() / count
            }
            _ => 0
        }
    }
    /// Name of a predefined format
    pub fn name(self) -> Option<&'static str> {
        PixelFormat::ALL
            .iter()
            .position(|f| *f == self)
            .map(|pos| PixelFormat::NAMES[pos])
    }

    /// Derive the location of every channel
    ///
    /// Returns [`ChannelLayout::EMPTY`] when the identifier is inconsistent,
    /// e.g. a packed layout whose widths do not add up to the pixel size.
    pub fn channel_layout(self) -> ChannelLayout {
        let slots = self.channel_order().slots();

        if slots.is_empty()
            || slots.len() != self.channel_count()
            || self.has_alpha() != self.channel_order().has_alpha()
        {
            return ChannelLayout::EMPTY;
        }
        let mut layout = ChannelLayout::EMPTY;

        match self.storage_class() {
            StorageClass::Packed => {
                let widths = self.pack_layout().widths();
                let total: u32 = widths.iter().map(|x| u32::from(*x)).sum();

                if widths.len() != slots.len()
                    || !matches!(self.pixel_size(), 1 | 2 | 4)
                    || total != (self.pixel_size() * 8) as u32
                {
                    return ChannelLayout::EMPTY;
                }
                let mut shift = total;

                for (slot, width) in slots.iter().zip(widths) {
                    let width = u32::from(*width);
                    shift -= width;

                    if let Some(info) = layout.slot_mut(*slot) {
                        let mask = ((1_u64 << width) - 1) << shift;
                        *info = ChannelInfo {
                            mask_or_index: mask as u32,
                            shift:         shift as u8,
                            bits:          width as u8
                        };
                    }
                }
            }
            StorageClass::ArrayUint | StorageClass::ArrayFloat => {
                let element = self.element_size();

                let valid_size = if self.is_float() {
                    matches!(element, 2 | 4)
                } else {
                    matches!(element, 1 | 2 | 4 | 8)
                };
                if self.pack_layout() != PackLayout::None
                    || !valid_size
                    || element * slots.len() != self.pixel_size()
                {
                    return ChannelLayout::EMPTY;
                }
                for (index, slot) in slots.iter().enumerate() {
                    if let Some(info) = layout.slot_mut(*slot) {
                        *info = ChannelInfo {
                            mask_or_index: index as u32,
                            shift:         0,
                            bits:          (element * 8) as u8
                        };
                    }
                }
            }
            StorageClass::Unknown => return ChannelLayout::EMPTY
        }
        layout
    }
}

impl Debug for PixelFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "PixelFormat::{name}"),
            None => write!(f, "PixelFormat({:#010x})", self.0)
        }
    }
}
