use crate::error::EngineError;
use crate::model::{CourseSetup, FormatKind, FormatSetup, FormatStandings, Player, RoundScores};

pub mod low_high;
pub mod nassau;
pub mod skins;
pub mod team_points;

/// Run one side-game reducer over the full current score set. Pure and
/// deterministic; every call is a complete replay. Dispatch is a closed
/// match so a new `FormatKind` cannot be forgotten here.
///
/// # Errors
///
/// Returns `EngineError::InvalidConfig` when the setup does not fit the
/// format's required player/team shape.
pub fn compute_format_standings(
    setup: &FormatSetup,
    course: &CourseSetup,
    players: &[Player],
    scores: &RoundScores,
) -> Result<FormatStandings, EngineError> {
    setup.validate(players)?;
    Ok(match setup.kind {
        FormatKind::LowHigh => {
            FormatStandings::LowHigh(low_high::compute(course, players, scores))
        }
        FormatKind::TeamPoints => {
            FormatStandings::TeamPoints(team_points::compute(course, players, scores))
        }
        FormatKind::Skins => {
            FormatStandings::Skins(skins::compute(setup, course, players, scores))
        }
        FormatKind::Nassau => {
            FormatStandings::Nassau(nassau::compute(setup, course, players, scores))
        }
    })
}
