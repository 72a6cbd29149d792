//! Window-less collaborators: generated card art and a renderer that only
//! records what it was asked to draw.

use std::collections::HashMap;

use crate::deck::{AssetError, AssetProvider, ImageHandle, LoadedImage, Renderer};
use crate::game::{Point, Rect};

/// Hands out a fresh handle for every image name, all at one size.
#[derive(Debug, Clone)]
pub struct SyntheticAssets {
    width: i32,
    height: i32,
    handles: HashMap<String, ImageHandle>,
    missing: Vec<String>,
}

impl SyntheticAssets {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            handles: HashMap::new(),
            missing: Vec::new(),
        }
    }

    /// Makes `name` fail to load.
    pub fn without(mut self, name: &str) -> Self {
        self.missing.push(name.to_string());
        self
    }

    pub fn loaded(&self) -> usize {
        self.handles.len()
    }

    pub fn name_of(&self, handle: ImageHandle) -> Option<&str> {
        self.handles
            .iter()
            .find(|(_, known)| **known == handle)
            .map(|(name, _)| name.as_str())
    }
}

impl AssetProvider for SyntheticAssets {
    fn load_image(&mut self, name: &str) -> Result<LoadedImage, AssetError> {
        if self.missing.iter().any(|missing| missing == name) {
            return Err(AssetError::Missing(name.to_string()));
        }
        let next = ImageHandle(self.handles.len() as u32);
        let handle = *self.handles.entry(name.to_string()).or_insert(next);
        Ok(LoadedImage {
            width: self.width,
            height: self.height,
            handle,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear,
    Sprite(ImageHandle, Rect),
    Text(String, Point),
    Present,
}

/// Keeps the calls of the last presented frame and the one being built.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pending: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    frames: usize,
}

impl RecordingRenderer {
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    pub fn sprites(&self) -> impl Iterator<Item = (ImageHandle, Rect)> + '_ {
        self.last_frame.iter().filter_map(|call| match call {
            DrawCall::Sprite(image, rect) => Some((*image, *rect)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.last_frame.iter().filter_map(|call| match call {
            DrawCall::Text(text, _) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.pending.clear();
        self.pending.push(DrawCall::Clear);
    }

    fn draw_sprite(&mut self, image: ImageHandle, rect: Rect) {
        self.pending.push(DrawCall::Sprite(image, rect));
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        self.pending.push(DrawCall::Text(text.to_string(), at));
    }

    fn present(&mut self) {
        self.pending.push(DrawCall::Present);
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}
