use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::side::Side;


// Everything a round reports outward. The contract is the three
// notifications and when they fire, not their textual rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    // Fired after every successful point award: who took the point plus
    // both players' labels after the award.
    ScoreChanged {
        scored_by: Side,
        labels: EnumMap<Side, String>,
    },
    // Fired exactly once per round, when both players reach "Fourty" and
    // scoring switches to the deuce rules.
    DeuceReached,
    // Fired when a point award moves a player's track onto its final label.
    PlayerWon { player_name: String },
}
