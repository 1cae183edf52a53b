use std::io;
use std::time::Instant;

use log::info;
use rand::prelude::*;
use tennis_match::test_util::*;

use crate::tennis_prelude::*;


// Fair-coin deuces resolve almost surely within a few dozen points; a round
// hitting this limit counts as unfinished instead of spinning forever.
const POINTS_PER_ROUND_LIMIT: usize = 1000;

pub struct StressTestConfig {
    pub rounds_per_batch: usize,
}

fn random_side(rng: &mut rand::rngs::ThreadRng) -> Side {
    if rng.random::<bool>() { Side::A } else { Side::B }
}

pub fn run(config: StressTestConfig) -> io::Result<()> {
    info!("Stress testing the scoring rules: {} rounds per batch", config.rounds_per_batch);
    let rng = &mut rand::rng();
    loop {
        let t0 = Instant::now();
        let mut finished_rounds = 0;
        let mut deuce_rounds = 0;
        let mut total_points = 0;
        let mut longest_round = 0;
        for _ in 0..config.rounds_per_batch {
            let mut round = MatchRound::new(sample_players());
            let mut hooks = RecordingHooks::default();
            let mut points = 0;
            for _ in 0..POINTS_PER_ROUND_LIMIT {
                round.award_point(random_side(rng), &mut hooks);
                points += 1;
                if round.winner().is_some() {
                    break;
                }
            }
            // The driver stops at the first win, so no award ever hits the
            // already-won no-op and every point must leave a log entry.
            assert!(
                round.point_log().len() == points,
                "{} points awarded, {} logged",
                points,
                round.point_log().len()
            );
            if round.winner().is_some() {
                let won_events = hooks
                    .events
                    .iter()
                    .filter(|event| matches!(event, MatchEvent::PlayerWon { .. }))
                    .count();
                assert!(won_events == 1, "Expected exactly one win event, got {won_events}");
                finished_rounds += 1;
            }
            if round.deuce_entered() {
                deuce_rounds += 1;
            }
            total_points += points;
            longest_round = longest_round.max(points);
        }
        let elapsed = t0.elapsed();
        println!(
            "Ran: {} rounds ({} finished, {} through deuce), {} points (longest round: {}) in {:.2}s",
            config.rounds_per_batch,
            finished_rounds,
            deuce_rounds,
            total_points,
            longest_round,
            elapsed.as_secs_f64(),
        );
    }
}
