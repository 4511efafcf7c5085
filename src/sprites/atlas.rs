//! Texture atlas metadata loading.
//!
//! Reads TexturePacker JSON (hash or array form) describing named frames in
//! the player sheet and turns it into a `TextureAtlasLayout`.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FrameRectDef {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrameDef {
    pub frame: FrameRectDef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedFrameDef {
    pub filename: String,
    pub frame: FrameRectDef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FramesDef {
    Hash(BTreeMap<String, FrameDef>),
    Array(Vec<NamedFrameDef>),
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SizeDef {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AtlasMetaDef {
    #[serde(default)]
    pub size: Option<SizeDef>,
}

/// Raw atlas JSON structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AtlasMetadata {
    pub frames: FramesDef,
    #[serde(default)]
    pub meta: AtlasMetaDef,
}

impl AtlasMetadata {
    /// Frames in file order (hash form is sorted by name).
    pub fn named_frames(&self) -> Vec<(&str, FrameRectDef)> {
        match &self.frames {
            FramesDef::Hash(frames) => frames
                .iter()
                .map(|(name, def)| (name.as_str(), def.frame))
                .collect(),
            FramesDef::Array(frames) => frames
                .iter()
                .map(|def| (def.filename.as_str(), def.frame))
                .collect(),
        }
    }

    /// Sheet size from `meta.size`, or the extent covered by the frames.
    pub fn sheet_size(&self) -> UVec2 {
        if let Some(size) = self.meta.size {
            return UVec2::new(size.w, size.h);
        }
        self.named_frames()
            .iter()
            .fold(UVec2::ZERO, |acc, (_, r)| {
                acc.max(UVec2::new(r.x + r.w, r.y + r.h))
            })
    }

    /// Build the layout plus a frame-name to atlas-index map.
    pub fn to_layout(&self) -> (TextureAtlasLayout, HashMap<String, usize>) {
        let mut layout = TextureAtlasLayout::new_empty(self.sheet_size());
        let mut indices = HashMap::new();

        for (name, r) in self.named_frames() {
            let index = layout.add_texture(URect::new(r.x, r.y, r.x + r.w, r.y + r.h));
            indices.insert(name.to_string(), index);
        }

        (layout, indices)
    }
}

/// The loaded player sheet.
#[derive(Resource, Debug, Clone)]
pub struct PlayerAtlas {
    pub image: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
    pub frames: HashMap<String, usize>,
}

impl PlayerAtlas {
    pub fn frame_index(&self, name: &str) -> Option<usize> {
        self.frames.get(name).copied()
    }

    pub fn texture_atlas(&self, index: usize) -> TextureAtlas {
        TextureAtlas {
            layout: self.layout.clone(),
            index,
        }
    }
}
