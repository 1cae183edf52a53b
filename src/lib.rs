#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod event;
pub mod hooks;
pub mod player;
pub mod round;
pub mod score_track;
pub mod side;
pub mod test_util;
