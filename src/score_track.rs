use serde::{Deserialize, Serialize};
use strum::EnumIter;


pub const REGULAR_LABELS: [&str; 5] = ["Love", "Fifteen", "Thirty", "Fourty", "Point"];
pub const DEUCE_LABELS: [&str; 3] = ["Deuce", "Advantage", "Point"];

// Labels the scoring rules compare against: regular tracks are checked for
// FOURTY to detect deuce entry, deuce tracks for ADVANTAGE to detect a
// cancellable advantage.
pub const FOURTY: &str = REGULAR_LABELS[3];
pub const DEUCE: &str = DEUCE_LABELS[0];
pub const ADVANTAGE: &str = DEUCE_LABELS[1];


#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter, Serialize, Deserialize)]
pub enum TrackKind {
    Regular,
    Deuce,
}

impl TrackKind {
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            TrackKind::Regular => &REGULAR_LABELS,
            TrackKind::Deuce => &DEUCE_LABELS,
        }
    }
}

// A player's position in one of the two fixed label sequences. The track
// never clamps: moving outside the table is a bug in the calling rules, not
// a domain error, so it fails the assert instead of being papered over.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ScoreTrack {
    kind: TrackKind,
    mark: usize,
}

impl ScoreTrack {
    pub fn new(kind: TrackKind) -> Self { ScoreTrack { kind, mark: 0 } }
    pub fn regular() -> Self { Self::new(TrackKind::Regular) }
    pub fn deuce() -> Self { Self::new(TrackKind::Deuce) }

    pub fn kind(self) -> TrackKind { self.kind }
    pub fn current(self) -> &'static str { self.kind.labels()[self.mark] }
    pub fn has_won(self) -> bool { self.mark == self.kind.labels().len() - 1 }

    pub fn increment(&mut self) {
        self.mark += 1;
        assert!(
            self.mark < self.kind.labels().len(),
            "{:?} track advanced past its final label",
            self.kind
        );
    }

    pub fn decrement(&mut self) {
        assert!(self.mark > 0, "{:?} track retreated below its first label", self.kind);
        self.mark -= 1;
    }
}


#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn fresh_tracks_start_at_the_first_label() {
        for kind in TrackKind::iter() {
            let track = ScoreTrack::new(kind);
            assert_eq!(track.kind(), kind);
            assert_eq!(track.current(), kind.labels()[0]);
            assert!(!track.has_won());
        }
    }

    #[test]
    fn regular_track_walks_up_and_back_down() {
        let mut track = ScoreTrack::regular();
        assert_eq!(track.current(), "Love");
        for label in ["Fifteen", "Thirty", "Fourty", "Point"] {
            assert!(!track.has_won());
            track.increment();
            assert_eq!(track.current(), label);
        }
        assert!(track.has_won());
        for label in ["Fourty", "Thirty", "Fifteen", "Love"] {
            track.decrement();
            assert_eq!(track.current(), label);
            assert!(!track.has_won());
        }
    }

    #[test]
    fn deuce_track_walk() {
        let mut track = ScoreTrack::deuce();
        assert_eq!(track.current(), DEUCE);
        track.increment();
        assert_eq!(track.current(), ADVANTAGE);
        assert!(!track.has_won());
        track.increment();
        assert_eq!(track.current(), "Point");
        assert!(track.has_won());
    }

    #[test]
    fn decrement_cancels_an_advantage() {
        let mut track = ScoreTrack::deuce();
        track.increment();
        assert_eq!(track.current(), ADVANTAGE);
        track.decrement();
        assert_eq!(track.current(), DEUCE);
    }

    #[test]
    #[should_panic(expected = "advanced past its final label")]
    fn increment_past_the_final_label_is_a_bug() {
        let mut track = ScoreTrack::deuce();
        track.increment();
        track.increment();
        track.increment();
    }

    #[test]
    #[should_panic(expected = "retreated below its first label")]
    fn decrement_below_the_first_label_is_a_bug() {
        let mut track = ScoreTrack::regular();
        track.decrement();
    }
}
