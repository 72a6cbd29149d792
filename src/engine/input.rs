use std::collections::VecDeque;

use crate::game::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press {
        button: PointerButton,
        position: Point,
    },
    Release {
        button: PointerButton,
        position: Point,
    },
    Motion {
        position: Point,
        delta: (i32, i32),
    },
    Reset,
    Quit,
}

impl InputEvent {
    pub fn press(position: Point) -> Self {
        Self::Press {
            button: PointerButton::Primary,
            position,
        }
    }

    pub fn release(position: Point) -> Self {
        Self::Release {
            button: PointerButton::Primary,
            position,
        }
    }

    pub fn motion(from: Point, to: Point) -> Self {
        Self::Motion {
            position: to,
            delta: (to.x - from.x, to.y - from.y),
        }
    }
}

pub trait InputSource {
    fn poll_event(&mut self) -> Option<InputEvent>;
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn click(&mut self, at: Point) {
        self.push(InputEvent::press(at));
        self.push(InputEvent::release(at));
    }

    pub fn drag(&mut self, from: Point, to: Point) {
        self.push(InputEvent::press(from));
        self.push(InputEvent::motion(from, to));
        self.push(InputEvent::release(to));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}
