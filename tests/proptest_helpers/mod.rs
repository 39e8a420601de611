#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use sgntrace::format::{Command, Coord};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_coord() -> impl Strategy<Value = Coord> {
    (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Coord::new(x, y))
}

/// Any drawing command except the terminator (which is stream framing,
/// not list content).
pub fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        arb_coord().prop_map(Command::MoveTo),
        arb_coord().prop_map(Command::LineTo),
        (arb_coord(), arb_coord(), arb_coord()).prop_map(|(p1, p2, p3)| {
            Command::CurveTo(p1, p2, p3)
        }),
    ]
}

pub fn arb_commands(max: usize) -> impl Strategy<Value = Vec<Command>> {
    proptest::collection::vec(arb_command(), 0..=max)
}

/// The coordinate sequence a command list writes out, in emission
/// order: one pair per move/line, three per curve.
pub fn flatten_coords(commands: &[Command]) -> Vec<Coord> {
    let mut coords = Vec::new();
    for command in commands {
        match *command {
            Command::MoveTo(p) | Command::LineTo(p) => coords.push(p),
            Command::CurveTo(p1, p2, p3) => coords.extend([p1, p2, p3]),
            Command::End => {}
        }
    }
    coords
}
