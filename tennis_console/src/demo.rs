use std::io;

use tennis_match::test_util::*;

use crate::tennis_prelude::*;
use crate::tui;


// Jim takes four straight points after Bob's opener.
const QUICK_RALLY: &str = "a b b b b";

// Both players reach Fourty; Bob's advantage gets cancelled and Jim converts
// his own.
const DEUCE_RALLY: &str = "a b b b a a  a b  b b";

pub struct DemoConfig {
    pub rally: String,
}

pub fn run(config: DemoConfig) -> io::Result<()> {
    let log = match config.rally.as_str() {
        "quick" => QUICK_RALLY,
        "deuce" => DEUCE_RALLY,
        _ => panic!("Invalid demo rally: {}", config.rally),
    };
    let mut round = MatchRound::new(sample_players());
    let mut hooks = tui::PrintingHooks::new(&round);
    replay_points(&mut round, log, &mut hooks);
    println!();
    println!("{}", tui::render_round(&round));
    Ok(())
}
