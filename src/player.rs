use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::score_track::ScoreTrack;


#[derive(Clone, Debug, new, Serialize, Deserialize)]
pub struct Player {
    #[new(into)]
    pub name: String,
    #[new(value = "ScoreTrack::regular()")]
    score: ScoreTrack,
}

impl Player {
    pub fn score(&self) -> &ScoreTrack { &self.score }
    pub fn score_mut(&mut self) -> &mut ScoreTrack { &mut self.score }
    pub fn has_won(&self) -> bool { self.score.has_won() }

    // Wholesale track replacement; happens once per round, at deuce entry.
    pub fn set_score(&mut self, score: ScoreTrack) { self.score = score; }
}
