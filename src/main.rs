/* main.rs
 *
 * Copyright 2026 emviolet
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use std::process::ExitCode;

use cardboard::config::BoardSettings;
use cardboard::engine::board::{TABLEAU_COUNT, TALON_INDEX};
use cardboard::engine::status_text::board_summary;
use cardboard::engine::{Clock, FrameOutcome, Game, ManualClock, ScriptedInput};
use cardboard::game::{random_seed, PileId, Point, Positionable, DISCARD_LANE, DRAW_LANE};
use cardboard::headless::{RecordingRenderer, SyntheticAssets};

#[derive(Debug, Clone)]
struct ReplayOptions {
    seed: u64,
    advances: u32,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            seed: random_seed(),
            advances: 24,
        }
    }
}

fn parse_u64(value: Option<&String>, flag: &str) -> Result<u64, String> {
    value
        .ok_or_else(|| format!("missing value for {flag}"))?
        .parse::<u64>()
        .map_err(|_| format!("invalid value for {flag}"))
}

fn parse_u32(value: Option<&String>, flag: &str) -> Result<u32, String> {
    value
        .ok_or_else(|| format!("missing value for {flag}"))?
        .parse::<u32>()
        .map_err(|_| format!("invalid value for {flag}"))
}

fn parse_args(args: &[String]) -> Result<Option<ReplayOptions>, String> {
    let mut idx = 1usize;
    let mut options = ReplayOptions::default();

    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                options.seed = parse_u64(args.get(idx + 1), "--seed")?;
                idx += 2;
            }
            "--advances" => {
                options.advances = parse_u32(args.get(idx + 1), "--advances")?;
                idx += 2;
            }
            "--help" | "-h" => {
                println!(
                    "cardboard: deals a Klondike game and replays talon clicks headless\n\
                     [--seed N] [--advances N]"
                );
                return Ok(None);
            }
            other => {
                log::warn!("ignoring unknown argument {other:?}");
                idx += 1;
            }
        }
    }

    Ok(Some(options))
}

/// Where a click on the top card of `id` should land, if the stack exists.
fn top_card_point(game: &Game, id: PileId) -> Option<Point> {
    let stack = game.board().stack(id)?;
    Some(match stack.top() {
        Some(card) => card.rect.center(),
        None => stack.rect().center(),
    })
}

fn replay(options: &ReplayOptions) -> Result<Game, String> {
    let settings = BoardSettings::from_env();
    let mut assets = SyntheticAssets::new(settings.card_width, settings.card_height);
    let clock = ManualClock::default();
    let mut game = Game::new(settings, &mut assets, options.seed, clock.elapsed())
        .map_err(|e| e.to_string())?;
    let mut renderer = RecordingRenderer::default();
    let gap = game.settings().double_click_window * 2;

    let mut frame = |game: &mut Game, input: &mut ScriptedInput| -> Result<bool, String> {
        let outcome = game
            .run_frame(input, &mut renderer, &clock)
            .map_err(|e| e.to_string())?;
        clock.advance(gap);
        Ok(outcome == FrameOutcome::Continue)
    };

    let talon = |lane| PileId::new(TALON_INDEX, lane);
    for _ in 0..options.advances {
        let mut input = ScriptedInput::default();
        if let Some(at) = top_card_point(&game, talon(DRAW_LANE)) {
            input.click(at);
        }
        if !frame(&mut game, &mut input)? {
            break;
        }

        let mut targets = vec![talon(DISCARD_LANE)];
        targets.extend((0..TABLEAU_COUNT).map(PileId::single));
        for id in targets {
            let mut input = ScriptedInput::default();
            if let Some(at) = top_card_point(&game, id) {
                input.click(at);
                input.click(at);
            }
            frame(&mut game, &mut input)?;
        }
        if game.is_won() {
            log::info!("won after replaying talon clicks");
            break;
        }
    }
    log::info!("{} frames drawn", renderer.frames());
    Ok(game)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => return ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("replaying seed {} with {} advances", options.seed, options.advances);
    match replay(&options) {
        Ok(game) => {
            println!("{}", board_summary(game.board()));
            ExitCode::SUCCESS
        }
        Err(message) => {
            log::warn!("replay stopped: {message}");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
