//! Fight adjudication integration tests.
//!
//! Scenarios run both through the full engine and directly against
//! `resolve_fight`.

mod common;

use common::{place, pos, step, Event, ScriptedStrategy};
use rps_referee::core::{
    GameState, NeutralCollision, Piece, PieceKind, PlayerId, PlayerStatus, RulesConfig,
};
use rps_referee::game::{EndReason, Game, GameResult};
use rps_referee::rules::{resolve_fight, FightWinner};

// =============================================================================
// Engine scenarios
// =============================================================================

/// Rock at (5,5) of player 1 takes Scissors at (5,6) of player 2.
#[test]
fn test_rock_takes_scissors() {
    common::init_tracing();

    let (one, _) = ScriptedStrategy::new(vec![
        place(1, 1, PieceKind::Flag),
        place(5, 5, PieceKind::Rock),
    ])
    .with_moves([step((5, 5), (5, 6))])
    .boxed();
    let (two, two_log) = ScriptedStrategy::new(vec![
        place(10, 10, PieceKind::Flag),
        place(5, 6, PieceKind::Scissors),
        place(10, 1, PieceKind::Paper),
    ])
    .boxed();

    let mut game = Game::new(RulesConfig::new(), one, two).unwrap();
    game.play();
    let state = game.state();

    let record = &state.history[0];
    let fight = record.fight.expect("move should fight");
    assert_eq!(fight.winner, FightWinner::Player(PlayerId::One));
    assert_eq!(fight.piece(PlayerId::Two).kind(), PieceKind::Scissors);

    assert_eq!(state.players[PlayerId::Two].count(PieceKind::Scissors), 0);
    assert_eq!(state.board.occupant(pos(5, 6)), Piece::new(PlayerId::One, PieceKind::Rock));
    assert!(state.board.occupant(pos(5, 5)).is_empty());

    // The opponent hears about the move before the fight.
    let log = two_log.lock().unwrap();
    let move_at = log
        .events
        .iter()
        .position(|e| *e == Event::OpponentMove(step((5, 5), (5, 6))))
        .unwrap();
    let fight_at = log.events.iter().position(|e| matches!(e, Event::Fight(_))).unwrap();
    assert!(move_at < fight_at);
}

/// Both players receive the fight result.
#[test]
fn test_fight_broadcast_to_both() {
    let (one, one_log) = ScriptedStrategy::new(vec![
        place(1, 1, PieceKind::Flag),
        place(5, 5, PieceKind::Paper),
    ])
    .with_moves([step((5, 5), (6, 6))])
    .boxed();
    let (two, two_log) = ScriptedStrategy::new(vec![
        place(10, 10, PieceKind::Flag),
        place(6, 6, PieceKind::Scissors),
        place(9, 1, PieceKind::Rock),
    ])
    .boxed();

    let mut game = Game::new(RulesConfig::new(), one, two).unwrap();
    let report = game.play();
    let state = game.state();

    // The losing mover still leaves its origin cell.
    assert!(state.board.occupant(pos(5, 5)).is_empty());
    assert_eq!(state.board.occupant(pos(6, 6)), Piece::new(PlayerId::Two, PieceKind::Scissors));

    for log in [&one_log, &two_log] {
        let log = log.lock().unwrap();
        assert_eq!(log.count(|e| matches!(e, Event::Fight(_))), 1);
    }
    // Paper lost its only movable piece attacking scissors.
    assert_eq!(report.result, GameResult::Winner(PlayerId::Two));
    assert_eq!(report.reason, EndReason::CantMove);
}

/// Capturing the last flag ends the game before the loser moves again.
#[test]
fn test_flag_capture_ends_game_immediately() {
    let (one, _) = ScriptedStrategy::new(vec![
        place(1, 1, PieceKind::Flag),
        place(4, 4, PieceKind::Rock),
    ])
    .with_moves([step((4, 4), (5, 5))])
    .boxed();
    let (two, two_log) = ScriptedStrategy::new(vec![
        place(5, 5, PieceKind::Flag),
        place(10, 10, PieceKind::Rock),
    ])
    .with_moves([step((10, 10), (9, 9))])
    .boxed();

    let mut game = Game::new(RulesConfig::new(), one, two).unwrap();
    let report = game.play();

    assert_eq!(report.result, GameResult::Winner(PlayerId::One));
    assert_eq!(report.reason, EndReason::NoFlags);
    assert_eq!(report.statuses[PlayerId::Two], PlayerStatus::NoFlags);
    assert_eq!(report.turns, 1);
    assert_eq!(
        two_log.lock().unwrap().count(|e| *e == Event::MoveRequested),
        0
    );
    assert!(report
        .to_string()
        .starts_with("Winner: 1\nReason: All flags of the opponent are captured\n\n"));
}

/// A movable piece meeting a bomb takes the bomb with it.
#[test]
fn test_bomb_destroys_attacker() {
    let (one, _) = ScriptedStrategy::new(vec![
        place(1, 1, PieceKind::Flag),
        place(3, 3, PieceKind::Rock),
        place(8, 1, PieceKind::Scissors),
    ])
    .with_moves([step((3, 3), (4, 4))])
    .boxed();
    let (two, _) = ScriptedStrategy::new(vec![
        place(10, 10, PieceKind::Flag),
        place(4, 4, PieceKind::Bomb),
        place(10, 5, PieceKind::Rock),
    ])
    .boxed();

    let mut game = Game::new(RulesConfig::new(), one, two).unwrap();
    game.play();
    let state = game.state();

    assert_eq!(state.history[0].fight.unwrap().winner, FightWinner::Tie);
    assert!(state.board.occupant(pos(4, 4)).is_empty());
    assert!(state.board.occupant(pos(3, 3)).is_empty());
    assert_eq!(state.players[PlayerId::One].count(PieceKind::Rock), 0);
    assert_eq!(state.players[PlayerId::Two].count(PieceKind::Bomb), 0);
}

/// A Joker fights as the kind it impersonates and the report carries it.
#[test]
fn test_joker_fights_as_disguise() {
    let (one, _) = ScriptedStrategy::new(vec![
        place(1, 1, PieceKind::Flag),
        rps_referee::core::PiecePlacement::joker(pos(5, 5), PieceKind::Paper),
    ])
    .with_moves([step((5, 5), (5, 6))])
    .boxed();
    let (two, _) = ScriptedStrategy::new(vec![
        place(10, 10, PieceKind::Flag),
        place(5, 6, PieceKind::Rock),
        place(1, 10, PieceKind::Scissors),
    ])
    .boxed();

    let mut game = Game::new(RulesConfig::new(), one, two).unwrap();
    game.play();
    let fight = game.state().history[0].fight.unwrap();

    assert_eq!(fight.winner, FightWinner::Player(PlayerId::One));
    let joker = fight.piece(PlayerId::One);
    assert!(joker.is_joker());
    assert_eq!(joker.disguise(), Some(PieceKind::Paper));
}

// =============================================================================
// Direct adjudication
// =============================================================================

fn bomb_meets_bomb(rule: NeutralCollision) -> (GameState, Option<FightWinner>) {
    let mut state = GameState::new(RulesConfig::new().with_neutral_collision(rule));
    let at = pos(6, 6);
    let resident = Piece::new(PlayerId::Two, PieceKind::Bomb);
    let incoming = Piece::new(PlayerId::One, PieceKind::Bomb);
    for piece in [resident, incoming] {
        let owner = piece.owner().unwrap();
        state.players[owner].add_piece(&piece);
        state.players[owner].add_piece(&Piece::new(owner, PieceKind::Flag));
        state.players[owner].add_piece(&Piece::new(owner, PieceKind::Rock));
    }
    state.board.set_occupant(at, resident);

    let outcome = resolve_fight(&mut state, at, incoming);
    (state, outcome.map(|o| o.winner))
}

/// Bomb onto bomb: the default neutral rule lets the attacker hold the cell.
#[test]
fn test_bomb_on_bomb_default_attacker_holds() {
    let (state, winner) = bomb_meets_bomb(NeutralCollision::default());

    assert_eq!(winner, Some(FightWinner::Player(PlayerId::One)));
    assert_eq!(state.board.owner(pos(6, 6)), Some(PlayerId::One));
    assert_eq!(state.players[PlayerId::Two].count(PieceKind::Bomb), 0);
    assert_eq!(state.players[PlayerId::One].count(PieceKind::Bomb), 1);
}

#[test]
fn test_bomb_on_bomb_other_policies() {
    let (state, winner) = bomb_meets_bomb(NeutralCollision::DefenderHolds);
    assert_eq!(winner, Some(FightWinner::Player(PlayerId::Two)));
    assert_eq!(state.board.owner(pos(6, 6)), Some(PlayerId::Two));

    let (state, winner) = bomb_meets_bomb(NeutralCollision::BothDestroyed);
    assert_eq!(winner, Some(FightWinner::Tie));
    assert!(state.board.occupant(pos(6, 6)).is_empty());
    assert_eq!(state.players[PlayerId::One].count(PieceKind::Bomb), 0);
    assert_eq!(state.players[PlayerId::Two].count(PieceKind::Bomb), 0);
    assert!(state.is_game_on());
}
