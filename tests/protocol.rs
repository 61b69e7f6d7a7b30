//! End-to-end runs of the line protocol against in-memory streams

use std::io::Cursor;

use gomoku_agent::{protocol, AIEngine, EngineConfig, Pos, Stone};

fn engine() -> AIEngine {
    let config = EngineConfig {
        search_depth: 1,
        tt_capacity: 1 << 14,
        ..EngineConfig::default()
    };
    AIEngine::new(&config, 0x1234).unwrap()
}

fn run(engine: &mut AIEngine, input: &str) -> Vec<String> {
    let mut out = Vec::new();
    protocol::run(engine, Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn parse_move(line: &str) -> Pos {
    let mut it = line.split(' ').map(|t| t.parse::<u8>().unwrap());
    let pos = Pos::new(it.next().unwrap(), it.next().unwrap());
    assert!(it.next().is_none());
    pos
}

#[test]
fn start_replies_ok() {
    let mut engine = engine();
    assert_eq!(run(&mut engine, "START 1\n"), vec!["OK"]);
    assert_eq!(engine.agent(), Stone::Black);
    assert_eq!(engine.board().stone_count(), 4);
}

#[test]
fn turn_replies_and_plays_move() {
    let mut engine = engine();
    let out = run(&mut engine, "START 2\nTURN\n");

    assert_eq!(out.len(), 2);
    assert_eq!(out[0], "OK");
    let pos = parse_move(&out[1]);
    assert_eq!(engine.board().get(pos), Stone::White);
    assert_eq!(engine.board().stone_count(), 5);
}

#[test]
fn place_records_opponent_stone() {
    let mut engine = engine();
    let out = run(&mut engine, "START 1\nPLACE 0 11\n");

    assert_eq!(out, vec!["OK"]);
    assert_eq!(engine.board().get(Pos::new(0, 11)), Stone::White);
}

#[test]
fn full_exchange() {
    let mut engine = engine();
    let out = run(
        &mut engine,
        "START 1\nTURN\nPLACE 0 11\nTURN\nPLACE 11 0\nTURN\nEND\n",
    );

    assert_eq!(out.len(), 4);
    let moves: Vec<Pos> = out[1..].iter().map(|l| parse_move(l)).collect();
    for pos in &moves {
        assert_eq!(engine.board().get(*pos), Stone::Black);
    }
    assert_eq!(engine.board().stone_count(), 4 + 3 + 2);
    assert_eq!(engine.board().hash(), engine.board().compute_hash());
}

#[test]
fn end_stops_reading() {
    let mut engine = engine();
    let out = run(&mut engine, "START 1\nEND\nTURN\nSTART 2\n");

    assert_eq!(out, vec!["OK"]);
    assert_eq!(engine.agent(), Stone::Black);
    assert_eq!(engine.board().stone_count(), 4);
}

#[test]
fn bad_lines_are_ignored() {
    let mut engine = engine();
    let out = run(
        &mut engine,
        "\nhello\nSTART 7\nSTART 2\nPLACE 12 3\nPLACE a b\nPLACE -1 0\n   \nTURN\n",
    );

    assert_eq!(out.len(), 2);
    assert_eq!(out[0], "OK");
    parse_move(&out[1]);
    // Only the seed and the agent's move
    assert_eq!(engine.board().stone_count(), 5);
}

#[test]
fn turn_without_game_has_no_move() {
    let mut engine = engine();
    assert_eq!(run(&mut engine, "TURN\n"), vec!["-1 -1"]);
    assert!(engine.board().is_board_empty());
}

#[test]
fn start_resets_previous_game() {
    let mut engine = engine();
    run(&mut engine, "START 1\nTURN\nPLACE 0 0\nTURN\n");
    assert_eq!(engine.board().stone_count(), 7);

    let out = run(&mut engine, "START 2\n");
    assert_eq!(out, vec!["OK"]);
    assert_eq!(engine.board().stone_count(), 4);
    assert_eq!(engine.agent(), Stone::White);
}

#[test]
fn missing_end_is_fine() {
    let mut engine = engine();
    let out = run(&mut engine, "START 1\nTURN");
    assert_eq!(out.len(), 2);
}
