//! Double-click recognition over primary-button presses and releases.
//!
//! A double click is press, release, press, release on the same target with
//! the whole gesture (first press to second release) inside the window.
//!
//! | state                  | event                         | next                   | double? |
//! |------------------------|-------------------------------|------------------------|---------|
//! | any but `FirstUp`      | press `t` on `x`              | `FirstDown(t, x)`      |         |
//! | `FirstUp(t0, x)`       | press `t` on `x`, `t-t0 < w`  | `SecondDown(t0, x)`    |         |
//! | `FirstUp(t0, x)`       | press otherwise               | `FirstDown(t, y)`      |         |
//! | `FirstDown(t0, x)`     | release                       | `FirstUp(t0, x)`       | no      |
//! | `SecondDown(t0, x)`    | release `t`                   | `Idle`                 | `t-t0 < w` |
//! | `Idle` / `FirstUp`     | release                       | `Idle`                 | no      |

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClickState<T> {
    Idle,
    FirstDown { at: Duration, target: T },
    FirstUp { at: Duration, target: T },
    SecondDown { at: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleClick<T> {
    window: Duration,
    state: ClickState<T>,
}

impl<T: Copy + PartialEq> DoubleClick<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: ClickState::Idle,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn press(&mut self, now: Duration, target: T) {
        self.state = match self.state {
            ClickState::FirstUp { at, target: first }
                if first == target && self.within(at, now) =>
            {
                ClickState::SecondDown { at }
            }
            _ => ClickState::FirstDown { at: now, target },
        };
    }

    pub fn release(&mut self, now: Duration) -> bool {
        let (next, double) = match self.state {
            ClickState::FirstDown { at, target } => (ClickState::FirstUp { at, target }, false),
            ClickState::SecondDown { at } => (ClickState::Idle, self.within(at, now)),
            ClickState::Idle | ClickState::FirstUp { .. } => (ClickState::Idle, false),
        };
        self.state = next;
        double
    }

    pub fn reset(&mut self) {
        self.state = ClickState::Idle;
    }

    fn within(&self, first_press: Duration, now: Duration) -> bool {
        now.saturating_sub(first_press) < self.window
    }
}
