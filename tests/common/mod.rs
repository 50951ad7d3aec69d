//! Shared helpers for integration tests.
//!
//! `ScriptedStrategy` plays a fixed placement and a fixed move list, and
//! records every engine callback into a shared log.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use rps_referee::core::{JokerChange, Move, PieceKind, PiecePlacement, PlayerId, Position};
use rps_referee::rules::FightOutcome;
use rps_referee::strategy::{OccupancyView, Strategy};

/// One engine callback, in the order received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    InitialBoard { fights: usize },
    OpponentMove(Move),
    Fight(FightOutcome),
    MoveRequested,
    JokerChangeRequested,
}

/// Everything a scripted strategy was told.
#[derive(Clone, Debug, Default)]
pub struct Log {
    pub events: Vec<Event>,
    /// Owners seen on the initial board, row by row.
    pub initial_owners: Vec<(Position, PlayerId)>,
    pub initial_fights: Vec<FightOutcome>,
}

impl Log {
    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|&e| pred(e)).count()
    }
}

pub type SharedLog = Arc<Mutex<Log>>;

/// Strategy driven by a script.
pub struct ScriptedStrategy {
    placements: Vec<PiecePlacement>,
    moves: VecDeque<Move>,
    joker_changes: VecDeque<Option<JokerChange>>,
    log: SharedLog,
}

impl ScriptedStrategy {
    pub fn new(placements: Vec<PiecePlacement>) -> Self {
        Self {
            placements,
            moves: VecDeque::new(),
            joker_changes: VecDeque::new(),
            log: SharedLog::default(),
        }
    }

    pub fn with_moves(mut self, moves: impl IntoIterator<Item = Move>) -> Self {
        self.moves.extend(moves);
        self
    }

    /// Joker changes answered after each own move, in order.
    pub fn with_joker_changes(
        mut self,
        changes: impl IntoIterator<Item = Option<JokerChange>>,
    ) -> Self {
        self.joker_changes.extend(changes);
        self
    }

    pub fn log(&self) -> SharedLog {
        Arc::clone(&self.log)
    }

    pub fn boxed(self) -> (Box<dyn Strategy>, SharedLog) {
        let log = self.log();
        (Box::new(self), log)
    }

    fn record(&self, event: Event) {
        self.log.lock().unwrap().events.push(event);
    }
}

impl Strategy for ScriptedStrategy {
    fn initial_positions(&mut self, _player: PlayerId) -> Vec<PiecePlacement> {
        self.placements.clone()
    }

    fn notify_on_initial_board(&mut self, view: &OccupancyView<'_>, fights: &[FightOutcome]) {
        let mut log = self.log.lock().unwrap();
        log.initial_owners = Position::all()
            .filter_map(|pos| view.owner(pos).map(|owner| (pos, owner)))
            .collect();
        log.initial_fights = fights.to_vec();
        log.events.push(Event::InitialBoard { fights: fights.len() });
    }

    fn notify_on_opponent_move(&mut self, mv: &Move) {
        self.record(Event::OpponentMove(*mv));
    }

    fn notify_fight_result(&mut self, fight: &FightOutcome) {
        self.record(Event::Fight(*fight));
    }

    fn next_move(&mut self) -> Option<Move> {
        self.record(Event::MoveRequested);
        self.moves.pop_front()
    }

    fn joker_change(&mut self) -> Option<JokerChange> {
        self.record(Event::JokerChangeRequested);
        self.joker_changes.pop_front().flatten()
    }
}

pub fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

pub fn place(x: i32, y: i32, kind: PieceKind) -> PiecePlacement {
    PiecePlacement::new(pos(x, y), kind)
}

pub fn step(from: (i32, i32), to: (i32, i32)) -> Move {
    Move::new(pos(from.0, from.1), pos(to.0, to.1))
}

/// `count` moves shuttling a piece between `a` and `b`, starting at `a`.
pub fn shuttle(a: (i32, i32), b: (i32, i32), count: usize) -> Vec<Move> {
    (0..count)
        .map(|i| if i % 2 == 0 { step(a, b) } else { step(b, a) })
        .collect()
}

/// A full legal 13-piece army laid out on two rows starting at `first_row`.
pub fn full_army(first_row: i32) -> Vec<PiecePlacement> {
    use PieceKind::*;
    let kinds = [Flag, Rock, Rock, Paper, Paper, Paper, Paper, Paper, Scissors, Bomb, Bomb];
    let mut placements: Vec<_> = kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let i = i as i32;
            PiecePlacement::new(pos(i % 10 + 1, first_row + i / 10), kind)
        })
        .collect();
    placements.push(PiecePlacement::joker(pos(2, first_row + 1), Rock));
    placements.push(PiecePlacement::joker(pos(3, first_row + 1), Bomb));
    placements
}

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
