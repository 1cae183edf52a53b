use std::io;

use enum_map::enum_map;
use tennis_match::test_util::replay_points;

use crate::tennis_prelude::*;
use crate::tui;


pub struct ReplayConfig {
    pub players: String,
    pub points: String,
    pub json: bool,
}

// Machine-readable sibling of `tui::PrintingHooks`: one JSON line per event.
struct JsonHooks {}

impl MatchHooks for JsonHooks {
    fn on_event(&mut self, event: &MatchEvent) {
        println!("{}", serde_json::to_string(event).unwrap());
    }
}

pub fn run(config: ReplayConfig) -> io::Result<()> {
    let (name_a, name_b) = config
        .players
        .split_once(',')
        .unwrap_or_else(|| panic!("Invalid player pair: {}", config.players));
    let players = enum_map! {
        Side::A => Player::new(name_a.trim()),
        Side::B => Player::new(name_b.trim()),
    };
    let mut round = MatchRound::new(players);
    if config.json {
        replay_points(&mut round, &config.points, &mut JsonHooks {});
    } else {
        let mut hooks = tui::PrintingHooks::new(&round);
        replay_points(&mut round, &config.points, &mut hooks);
        println!();
        println!("{}", tui::render_round(&round));
    }
    Ok(())
}
