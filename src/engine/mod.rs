pub mod board;
pub mod clock;
pub mod double_click;
pub mod input;
pub mod pile_move;
pub mod session;
pub mod status_text;

pub use board::Board;
pub use clock::{Clock, ManualClock, SystemClock};
pub use double_click::DoubleClick;
pub use input::{InputEvent, InputSource, PointerButton, ScriptedInput};
pub use pile_move::PileMove;
pub use session::{FrameOutcome, Game, Transition};
