// End-to-end runs of representative ecosystem scenarios through the binary.

use assert_cmd::prelude::*;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const BIN: &str = "meadow_mania"; // change if needed

fn run_layout(layout: &str, generations: &str, verbose: bool) -> assert_cmd::assert::Assert {
    let mut f = NamedTempFile::new().expect("temp file");
    write!(f, "{}", layout).expect("write layout");

    let mut cmd = Command::cargo_bin(BIN).expect("binary");
    cmd.args(["-m", f.path().to_str().unwrap(), "-g", generations]);
    if verbose {
        cmd.arg("--verbose");
    }
    cmd.assert()
}

#[test]
fn predator_hunts_down_adjacent_prey() {
    // 5x5 meadow: predator at (1,1), prey one cell to the right. The
    // predator's only edible neighbor is the prey, so it eats it on
    // generation 1 and ends up on its cell with hunger reset.
    run_layout(
        "size 4 4\nanimal P 5 3 1 1\nanimal r 2 0 2 1\n",
        "1",
        false,
    )
    .success()
    .stdout(contains("Predadores: 1 vs Presas: 1 (Gen. 0)"))
    .stdout(contains("Predadores: 1 vs Presas: 0 (Gen. 1)"))
    .stdout(contains("|.P.|"));
}

#[test]
fn isolated_predator_starves_after_one_generation() {
    // Feeding threshold 1 and nothing to eat: hunger reaches the
    // threshold on the first turn and the predator is removed.
    run_layout("size 4 4\nanimal P 5 1 2 2\n", "1", false)
        .success()
        .stdout(contains("Predadores: 1 vs Presas: 0 (Gen. 0)"))
        .stdout(contains("Predadores: 0 vs Presas: 0 (Gen. 1)"));
}

#[test]
fn fertile_prey_doubles_in_one_generation() {
    run_layout("size 4 4\nanimal r 1 0 1 1\n", "1", false)
        .success()
        .stdout(contains("Predadores: 0 vs Presas: 2 (Gen. 1)"));
}

#[test]
fn verbose_mode_skips_unchanged_generations() {
    // A lone prey with a high reproduction threshold just wanders:
    // counts never change, so verbose mode prints nothing past gen 0.
    run_layout("size 9 9\nanimal r 100 0 4 4\n", "4", true)
        .success()
        .stdout(contains("(Gen. 0)"))
        .stdout(contains("(Gen. 1)").not())
        .stdout(contains("(Gen. 4)").not());
}

#[test]
fn verbose_mode_prints_generations_with_changes() {
    // Prey reproduces every generation until the meadow clogs up
    run_layout("size 5 5\nanimal r 1 0 2 2\n", "2", true)
        .success()
        .stdout(contains("Predadores: 0 vs Presas: 2 (Gen. 1)"))
        .stdout(contains("(Gen. 2)"));
}

#[test]
fn same_layout_same_outcome() {
    // The tie-break is a pure function of position and width, so two
    // identical runs must produce identical output.
    let layout = "size 7 7\nrock 3 3\nanimal F 4 6 1 1\nanimal F 4 6 5 5\n\
                  animal r 3 0 3 1\nanimal r 3 0 1 4\nanimal r 3 0 5 2\n";

    let mut f = NamedTempFile::new().expect("temp file");
    write!(f, "{}", layout).expect("write layout");

    let output = |path: &str| {
        let mut cmd = Command::cargo_bin(BIN).expect("binary");
        cmd.args(["-m", path, "-g", "10", "--verbose"]);
        let out = cmd.output().expect("run");
        assert!(out.status.success());
        String::from_utf8(out.stdout).expect("utf8")
    };

    let path = f.path().to_str().unwrap();
    let first = output(path);
    let second = output(path);

    // Strip the timing line, everything else must match byte for byte
    let strip = |s: &str| {
        s.lines()
            .filter(|l| !l.contains("Simulation Latency"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(strip(&first), strip(&second));
}
