use std::collections::HashMap;

use thiserror::Error;

use crate::game::{Card, Point, Rect, Suit};

/// Opaque handle to an image loaded by an [`AssetProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedImage {
    pub width: i32,
    pub height: i32,
    pub handle: ImageHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("image {0:?} is not available")]
    Missing(String),
    #[error("image {name:?} is {found:?}, expected {expected:?} like the other faces")]
    SizeMismatch {
        name: String,
        expected: (i32, i32),
        found: (i32, i32),
    },
}

pub trait AssetProvider {
    fn load_image(&mut self, name: &str) -> Result<LoadedImage, AssetError>;
}

/// Draw target for the board. Calls arrive back to front.
pub trait Renderer {
    fn clear(&mut self) {}

    fn draw_sprite(&mut self, image: ImageHandle, rect: Rect);

    fn draw_text(&mut self, _text: &str, _at: Point) {}

    fn present(&mut self) {}
}

/// All images needed to draw a deal: 52 faces, the shared back and the
/// empty-pile placeholder.
#[derive(Debug, Clone)]
pub struct DeckImages {
    faces: HashMap<(Suit, u8), ImageHandle>,
    back: ImageHandle,
    placeholder: LoadedImage,
    card_width: i32,
    card_height: i32,
}

impl DeckImages {
    pub fn load(
        provider: &mut dyn AssetProvider,
        back_name: &str,
        placeholder_name: &str,
    ) -> Result<Self, AssetError> {
        let mut faces = HashMap::with_capacity(52);
        let mut card_size: Option<(i32, i32)> = None;
        for rank in 1..=13 {
            for suit in Suit::ALL {
                let name = Card::new(suit, rank).image_name();
                let image = provider.load_image(&name)?;
                let found = (image.width, image.height);
                match card_size {
                    None => card_size = Some(found),
                    Some(expected) if expected != found => {
                        return Err(AssetError::SizeMismatch {
                            name,
                            expected,
                            found,
                        });
                    }
                    Some(_) => {}
                }
                faces.insert((suit, rank), image.handle);
            }
        }
        let back = provider.load_image(back_name)?;
        let placeholder = provider.load_image(placeholder_name)?;
        let (card_width, card_height) = card_size.unwrap_or((back.width, back.height));
        log::debug!("loaded {} card faces at {card_width}x{card_height}", faces.len());
        Ok(Self {
            faces,
            back: back.handle,
            placeholder,
            card_width,
            card_height,
        })
    }

    pub fn card_size(&self) -> (i32, i32) {
        (self.card_width, self.card_height)
    }

    pub fn placeholder(&self) -> LoadedImage {
        self.placeholder
    }

    pub fn back(&self) -> ImageHandle {
        self.back
    }

    pub fn image_for_card(&self, card: &Card) -> ImageHandle {
        if !card.face_up {
            return self.back;
        }
        self.faces
            .get(&(card.suit, card.rank))
            .copied()
            .unwrap_or(self.back)
    }

    pub fn draw_card(&self, renderer: &mut dyn Renderer, card: &Card) {
        renderer.draw_sprite(self.image_for_card(card), card.rect);
    }

    pub fn draw_placeholder(&self, renderer: &mut dyn Renderer, rect: Rect) {
        renderer.draw_sprite(self.placeholder.handle, rect);
    }
}
