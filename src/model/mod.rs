pub mod course;
pub mod format;
pub mod match_play;
pub mod player;
pub mod score;
pub mod settlement;

pub use course::*;
pub use format::*;
pub use match_play::*;
pub use player::*;
pub use score::*;
pub use settlement::*;
