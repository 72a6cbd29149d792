use std::time::Duration;

use crate::game::DECK_SIZE;

use super::board::Board;

/// Minutes and seconds, zero padded: `07:42`.
pub fn elapsed_label(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let minutes = millis / 60_000;
    let seconds = (millis % 60_000) / 1000;
    format!("{minutes:02}:{seconds:02}")
}

pub fn board_summary(board: &Board) -> String {
    let mut lines = Vec::new();
    for stack in board.piles().iter().flat_map(|pile| pile.stacks()) {
        let cards: Vec<String> = stack
            .cards()
            .iter()
            .map(|card| {
                if card.face_up {
                    card.label()
                } else {
                    "XX".to_string()
                }
            })
            .collect();
        if cards.is_empty() {
            lines.push(format!("{}: --", stack.name()));
        } else {
            lines.push(format!("{}: {}", stack.name(), cards.join(" ")));
        }
    }
    lines.push(format!("Foundations: {}/{}", board.foundation_total(), DECK_SIZE));
    lines.join("\n")
}
