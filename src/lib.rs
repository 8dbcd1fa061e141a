pub mod error;
pub mod model;
pub mod refresh;
pub mod scoring;
pub mod storage;
pub mod view;

pub use error::EngineError;
pub use storage::{RoundSetup, ScoreStore, StoreError};
pub use view::{
    RoundView, TripView, load_match_state, load_round_view, load_trip_view,
    round_view_from_snapshot, trip_view_from_snapshots,
};
