//! Layout and timing settings for the board.
//!
//! Defaults match the shipped card art (75x122 px faces). The double-click
//! window and the win jitter can be tuned from the environment.

use std::time::Duration;

pub const DOUBLE_CLICK_ENV: &str = "CT_DOUBLE_CLICK_MS";
pub const WIN_JITTER_ENV: &str = "CT_WIN_JITTER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSettings {
    pub card_width: i32,
    pub card_height: i32,
    /// Horizontal gap between neighbouring piles.
    pub start_space: i32,
    /// Vertical gap between the top row and the tableau row.
    pub row_space: i32,
    pub margin_space: i32,
    /// Fan offset below a face-down card.
    pub tile_init_space: i32,
    /// Fan offset below a face-up card.
    pub tile_add_space: i32,
    pub double_click_window: Duration,
    pub win_jitter: i32,
    pub back_image: String,
    pub placeholder_image: String,
}

pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 500;

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            card_width: 75,
            card_height: 122,
            start_space: 10,
            row_space: 30,
            margin_space: 20,
            tile_init_space: 5,
            tile_add_space: 15,
            double_click_window: Duration::from_millis(DEFAULT_DOUBLE_CLICK_MS),
            win_jitter: 2,
            back_image: "back01".to_string(),
            placeholder_image: "bottom03".to_string(),
        }
    }
}

impl BoardSettings {
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(ms) = env_number(DOUBLE_CLICK_ENV) {
            settings.double_click_window = Duration::from_millis(ms);
        }
        if let Some(jitter) = env_number(WIN_JITTER_ENV) {
            settings.win_jitter = i32::try_from(jitter).unwrap_or(i32::MAX);
        }
        settings
    }

    /// Pixel size of the whole board for a full deal.
    pub fn board_size(&self) -> (i32, i32) {
        let width = self.margin_space * 2 + self.card_width * 7 + self.start_space * 6;
        let height = self.margin_space
            + self.card_height * 2
            + self.row_space
            + self.tile_init_space * 6
            + self.tile_add_space * 12;
        (width, height)
    }

    pub fn with_card_size(mut self, width: i32, height: i32) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }
}

fn env_number(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a non-negative integer");
            None
        }
    }
}
