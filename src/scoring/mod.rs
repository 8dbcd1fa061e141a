pub mod formats;
pub mod handicap;
pub mod hole_result;
pub mod leaderboard;
pub mod match_engine;
pub mod settlement;

pub use formats::*;
pub use handicap::*;
pub use hole_result::*;
pub use leaderboard::*;
pub use match_engine::*;
pub use settlement::*;
