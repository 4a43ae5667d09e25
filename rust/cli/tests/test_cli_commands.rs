//! End-to-end command tests driven through `cardwar_cli::run`.

use cardwar_cli::run;
use cardwar_engine::deck::{Deck, partition};

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn deal_matches_engine_partition() {
    let (code, stdout, _) = run_cli(&["cardwar", "deal", "--seed", "31"]);
    assert_eq!(code, 0);

    let (first, second) = partition(Deck::new_with_seed(31));
    let first_cards: Vec<String> = first.iter().map(|c| c.to_string()).collect();
    let second_cards: Vec<String> = second.iter().map(|c| c.to_string()).collect();
    assert!(stdout.contains(&format!("[{}]", first_cards.join(" "))));
    assert!(stdout.contains(&format!("[{}]", second_cards.join(" "))));
}

#[test]
fn sim_reports_tally() {
    let (code, stdout, stderr) = run_cli(&["cardwar", "sim", "--games", "6", "--seed", "2"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with("sim: games=6 seed=2"));
    assert!(stdout.contains("Rounds played: 156"));
}

#[test]
fn sim_is_deterministic_for_a_seed() {
    let a = run_cli(&["cardwar", "sim", "--games", "10", "--seed", "77"]);
    let b = run_cli(&["cardwar", "sim", "--games", "10", "--seed", "77"]);
    assert_eq!(a.1, b.1);
}

#[test]
fn cfg_prints_json() {
    let (code, stdout, _) = run_cli(&["cardwar", "cfg"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json.get("mode").is_some());
    assert!(json.get("interval_ms").is_some());
}

#[test]
fn computer_game_streams_json_events() {
    let (code, stdout, stderr) = run_cli(&[
        "cardwar",
        "play",
        "--mode",
        "auto-auto",
        "--seed",
        "5",
        "--interval-ms",
        "1",
        "--json",
    ]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("every line is a JSON event"))
        .collect();
    let count = |kind: &str| events.iter().filter(|e| e["type"] == kind).count();
    assert_eq!(count("player_revealed"), 52);
    assert_eq!(count("round_resolved"), 26);
    assert_eq!(count("game_concluded"), 1);
    assert_eq!(events.last().unwrap()["type"], "game_concluded");

    let last_round = events
        .iter()
        .filter(|e| e["type"] == "round_resolved")
        .last()
        .unwrap();
    assert_eq!(last_round["round"], 27);
}

#[test]
fn computer_game_reveals_follow_the_deal() {
    let (_, stdout, _) = run_cli(&[
        "cardwar",
        "play",
        "--mode",
        "auto-auto",
        "--seed",
        "19",
        "--interval-ms",
        "1",
        "--json",
    ]);
    let (first, _) = partition(Deck::new_with_seed(19));
    let expected = serde_json::to_value(first.iter().next().unwrap()).unwrap();

    let first_reveal: serde_json::Value = stdout
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
        .find(|e| e["type"] == "player_revealed")
        .unwrap();
    assert_eq!(first_reveal["slot"], "first");
    assert_eq!(first_reveal["card"], expected);
}
