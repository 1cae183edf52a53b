use enum_map::{EnumMap, enum_map};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::event::MatchEvent;
use crate::hooks::MatchHooks;
use crate::player::Player;
use crate::score_track::{self, ScoreTrack};
use crate::side::Side;


// Which scoring rules are in effect. A flat two-value switch: regular play
// until both players reach "Fourty", deuce play for the rest of the round.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RuleSet {
    Regular,
    Deuce,
}

// One successful point award: who took the point and both resulting labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    pub scored_by: Side,
    pub labels: EnumMap<Side, String>,
}

// A single round from Love/Love to a decisive point, possibly passing
// through deuce mode. Not internally synchronized: `award_point` performs
// several dependent reads and writes, so a round shared across threads must
// sit behind one exclusive lock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRound {
    players: EnumMap<Side, Player>,
    rule_set: RuleSet,
    deuce_entered: bool,
    point_log: Vec<PointRecord>,
}

impl MatchRound {
    pub fn new(players: EnumMap<Side, Player>) -> Self {
        MatchRound {
            players,
            rule_set: RuleSet::Regular,
            deuce_entered: false,
            point_log: Vec::new(),
        }
    }

    pub fn player(&self, side: Side) -> &Player { &self.players[side] }
    pub fn players(&self) -> &EnumMap<Side, Player> { &self.players }
    pub fn rule_set(&self) -> RuleSet { self.rule_set }
    pub fn deuce_entered(&self) -> bool { self.deuce_entered }
    pub fn point_log(&self) -> &[PointRecord] { &self.point_log }

    pub fn find_player(&self, player_name: &str) -> Option<Side> {
        Side::iter().find(|&side| self.players[side].name == player_name)
    }

    // A query only. The round keeps accepting points after this turns
    // `Some`; nothing in the scoring rules locks a finished round.
    pub fn winner(&self) -> Option<Side> {
        Side::iter().find(|&side| self.players[side].has_won())
    }

    pub fn award_point(&mut self, side: Side, hooks: &mut impl MatchHooks) {
        match self.rule_set {
            RuleSet::Regular => self.award_point_regular(side, hooks),
            RuleSet::Deuce => self.award_point_deuce(side, hooks),
        }
        if self.rule_set == RuleSet::Regular {
            self.try_enter_deuce(hooks);
        }
    }

    fn award_point_regular(&mut self, side: Side, hooks: &mut impl MatchHooks) {
        if self.players[side].has_won() {
            // A point to a player who already holds the final label is a
            // no-op: no mutation, no log entry, no events.
            return;
        }
        self.players[side].score_mut().increment();
        self.record_score_change(side, hooks);
        if self.players[side].has_won() {
            hooks.on_event(&MatchEvent::PlayerWon {
                player_name: self.players[side].name.clone(),
            });
        }
    }

    // Unlike the regular rules, the deuce rules never check whether somebody
    // has already won before acting. The scoring tests pin down what that
    // means for points awarded after a deuce win.
    fn award_point_deuce(&mut self, side: Side, hooks: &mut impl MatchHooks) {
        let other = side.other();
        if self.players[other].score().current() == score_track::ADVANTAGE {
            // The point cancels the opponent's advantage instead of
            // advancing the scorer.
            self.players[other].score_mut().decrement();
        } else {
            self.players[side].score_mut().increment();
        }
        self.record_score_change(side, hooks);
        if self.players[side].has_won() {
            hooks.on_event(&MatchEvent::PlayerWon {
                player_name: self.players[side].name.clone(),
            });
        }
    }

    // One-shot transition, evaluated after every regular-mode award: once
    // both players stand on "Fourty", both tracks are replaced with fresh
    // deuce tracks and the deuce rules take over for good.
    fn try_enter_deuce(&mut self, hooks: &mut impl MatchHooks) {
        if self.deuce_entered {
            return;
        }
        let all_at_fourty =
            self.players.values().all(|player| player.score().current() == score_track::FOURTY);
        if !all_at_fourty {
            return;
        }
        for (_, player) in self.players.iter_mut() {
            player.set_score(ScoreTrack::deuce());
        }
        self.rule_set = RuleSet::Deuce;
        self.deuce_entered = true;
        hooks.on_event(&MatchEvent::DeuceReached);
    }

    fn record_score_change(&mut self, scored_by: Side, hooks: &mut impl MatchHooks) {
        let labels: EnumMap<Side, String> =
            enum_map! { side => self.players[side].score().current().to_owned() };
        self.point_log.push(PointRecord { scored_by, labels: labels.clone() });
        hooks.on_event(&MatchEvent::ScoreChanged { scored_by, labels });
    }
}
