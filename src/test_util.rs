// Test utilities that cannot be moved to the "tests" folder, because the
// console uses them.

use enum_map::{EnumMap, enum_map};

use crate::event::MatchEvent;
use crate::hooks::MatchHooks;
use crate::player::Player;
use crate::round::MatchRound;
use crate::side::Side;


pub fn sample_players() -> EnumMap<Side, Player> {
    enum_map! {
        Side::A => Player::new("Bob"),
        Side::B => Player::new("Jim"),
    }
}

// Collects every event a round emits, for asserting on exact sequences.
#[derive(Default)]
pub struct RecordingHooks {
    pub events: Vec<MatchEvent>,
}

impl MatchHooks for RecordingHooks {
    fn on_event(&mut self, event: &MatchEvent) { self.events.push(event.clone()); }
}

// Replays a point sequence written as side letters: "a b b b b" and "abbbb"
// are both the same five points.
pub fn replay_points(round: &mut MatchRound, log: &str, hooks: &mut impl MatchHooks) {
    for token in log.split_whitespace() {
        for notation in token.chars() {
            let side = Side::from_char(notation)
                .unwrap_or_else(|| panic!("Unexpected point notation: {}", notation));
            round.award_point(side, hooks);
        }
    }
}
