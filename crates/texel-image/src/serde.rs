/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]
//! Serialize surface metadata, pixel data is left out

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::palette::{IndexFormat, Palette, PaletteSurface};
use crate::surface::Surface;

impl Serialize for Surface {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Surface", 5)?;

        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("format", &self.format())?;
        state.serialize_field("pixel_size", &self.pixel_size())?;
        state.serialize_field("stride", &self.stride())?;
        state.end()
    }
}

impl Serialize for IndexFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{self:?}"))
    }
}

impl Serialize for Palette {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        self.colors().serialize(serializer)
    }
}

impl Serialize for PaletteSurface {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PaletteSurface", 4)?;

        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("index_format", &self.index_format())?;
        state.serialize_field("palette", self.palette())?;
        state.end()
    }
}
