use console::Style;
use enum_map::{EnumMap, enum_map};
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::tennis_prelude::*;


const COMMENTARY_WIDTH: usize = 24;

fn render_scoreboard(names: &EnumMap<Side, String>, labels: &EnumMap<Side, String>) -> String {
    Side::iter().map(|side| format!("{} {}", names[side], labels[side])).join(" : ")
}

pub fn render_event(names: &EnumMap<Side, String>, event: &MatchEvent) -> String {
    match event {
        MatchEvent::ScoreChanged { scored_by, labels } => {
            let commentary = format!("{} scores {}", names[*scored_by], labels[*scored_by]);
            let space = " ".repeat(COMMENTARY_WIDTH.saturating_sub(commentary.len()) + 2);
            format!("{}{}{}", commentary, space, render_scoreboard(names, labels))
        }
        MatchEvent::DeuceReached => Style::new().bold().apply_to("Deuce!").to_string(),
        MatchEvent::PlayerWon { player_name } => {
            Style::new().green().bold().apply_to(format!("{} has won!", player_name)).to_string()
        }
    }
}

pub fn render_round(round: &MatchRound) -> String {
    Side::iter()
        .map(|side| {
            let player = round.player(side);
            let label = player.score().current();
            if player.has_won() {
                format!("{:<10} {}", player.name, Style::new().green().apply_to(label))
            } else {
                format!("{:<10} {}", player.name, label)
            }
        })
        .join("\n")
}

pub struct PrintingHooks {
    names: EnumMap<Side, String>,
}

impl PrintingHooks {
    pub fn new(round: &MatchRound) -> Self {
        PrintingHooks { names: enum_map! { side => round.player(side).name.clone() } }
    }
}

impl MatchHooks for PrintingHooks {
    fn on_event(&mut self, event: &MatchEvent) {
        println!("{}", render_event(&self.names, event));
    }
}
