#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

extern crate clap;
extern crate console;
extern crate enum_map;
extern crate itertools;
extern crate serde;
extern crate serde_json;

extern crate tennis_match;

pub mod tui;

mod demo;
mod replay;
mod stress_test;
mod tennis_prelude;

use std::io;

use clap::{Command, arg};

fn main() -> io::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Tennis")
        .version(clap::crate_version!())
        .about("Tennis round scoring console app")
        .subcommand_required(true)
        .subcommand(
            Command::new("demo")
                .about("Plays a built-in rally and prints the commentary")
                .arg(
                    arg!([rally] "Rally to play")
                        .value_parser(["quick", "deuce"])
                        .default_value("quick"),
                ),
        )
        .subcommand(
            Command::new("replay")
                .about("Replays a point log and prints the commentary")
                .arg(arg!(<points> "Point log: letters naming the scoring side, e.g. \"a b b b b\""))
                .arg(
                    arg!(--"players" <names> "Comma-separated player pair")
                        .default_value("Bob,Jim"),
                )
                .arg(arg!(--"json" "Writes the event stream as JSON lines instead")),
        )
        .subcommand(
            Command::new("stress-test")
                .about(concat!(
                    "Stress tests the scoring rules with random input. ",
                    "Can be used for testing or benchmarking."
                ))
                .arg(
                    arg!(-'n' --"rounds" <n> "Rounds per batch")
                        .value_parser(1..=10_000_000)
                        .default_value("100000"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", sub_matches)) => demo::run(demo::DemoConfig {
            rally: sub_matches.get_one::<String>("rally").unwrap().clone(),
        }),
        Some(("replay", sub_matches)) => replay::run(replay::ReplayConfig {
            players: sub_matches.get_one::<String>("players").unwrap().clone(),
            points: sub_matches.get_one::<String>("points").unwrap().clone(),
            json: sub_matches.get_flag("json"),
        }),
        Some(("stress-test", sub_matches)) => stress_test::run(stress_test::StressTestConfig {
            rounds_per_batch: *sub_matches.get_one::<i64>("rounds").unwrap() as usize,
        }),
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
