//! Two-player games played end to end through `GameSession`.

use quixo_engine::core::{
    Board, Cell, CellIndex, Direction, GameConfig, GameStatus, Move, Outcome, PlayerId, PushAxis,
    PushEnd, Seat, Symbol,
};
use quixo_engine::error::{EngineError, RuleViolation};
use quixo_engine::rules::has_line;
use quixo_engine::session::GameSession;

fn idx(i: usize) -> CellIndex {
    CellIndex::new(i).unwrap()
}

fn config() -> GameConfig {
    GameConfig::duo(PlayerId::new(10), PlayerId::new(20))
}

fn circle() -> Cell {
    Cell::new(Symbol::Circle, None)
}

fn cross() -> Cell {
    Cell::new(Symbol::Cross, None)
}

fn board_from(cells: &[(usize, Cell)]) -> Board {
    let mut board = Board::new();
    for &(i, cell) in cells {
        board.set(idx(i), cell);
    }
    board
}

/// Opening two moves: circle lands at 4, cross lands at 20.
#[test]
fn test_opening_moves() {
    let mut session = GameSession::new(config()).unwrap();

    let first = session.play(Move::new(idx(0), Direction::Right)).unwrap();
    assert_eq!(first.seat, Seat::Top);
    assert_eq!(first.symbol, Symbol::Circle);
    assert_eq!(first.placed_index, idx(4));
    assert_eq!((first.removed_row, first.removed_col), (0, 0));
    assert_eq!((first.axis, first.end), (PushAxis::Row, PushEnd::Max));
    assert_eq!(session.board()[idx(4)], circle());

    let second = session.play(Move::new(idx(24), Direction::Left)).unwrap();
    assert_eq!(second.seat, Seat::Bottom);
    assert_eq!(second.symbol, Symbol::Cross);
    assert_eq!(second.placed_index, idx(20));
    assert_eq!((second.axis, second.end), (PushAxis::Row, PushEnd::Min));
    assert_eq!(session.board()[idx(20)], cross());

    assert_eq!(session.turn(), 3);
    assert_eq!(session.seat_to_move(), Seat::Top);
    assert!(!session.is_first_round());
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.board().count(Symbol::Circle), 1);
    assert_eq!(session.board().count(Symbol::Cross), 1);
}

/// Own cubes are off limits until every seat has moved once.
#[test]
fn test_first_round_requires_neutral() {
    let board = board_from(&[(0, cross())]);
    let session = GameSession::resume(config(), board.clone(), 2).unwrap();
    assert_eq!(session.seat_to_move(), Seat::Bottom);
    assert_eq!(
        session.select(0),
        Err(EngineError::Rule(RuleViolation::MustBeNeutral))
    );

    let session = GameSession::resume(config(), board, 4).unwrap();
    assert!(session.select(0).is_ok());
}

#[test]
fn test_opponent_piece_checked_before_first_round() {
    let mut session = GameSession::new(config()).unwrap();
    session.play(Move::new(idx(0), Direction::Right)).unwrap();

    assert_eq!(
        session.select(4),
        Err(EngineError::Rule(RuleViolation::OpponentPiece))
    );
}

#[test]
fn test_own_piece_after_first_round() {
    let mut session = GameSession::new(config()).unwrap();
    session.play(Move::new(idx(0), Direction::Right)).unwrap();
    session.play(Move::new(idx(24), Direction::Left)).unwrap();

    let approval = session.select(4).unwrap();
    assert_eq!(
        approval.legal_directions.as_slice(),
        &[Direction::Left, Direction::Bottom]
    );

    let record = session.play(Move::new(idx(4), Direction::Bottom)).unwrap();
    assert_eq!(record.placed_index, idx(24));
    assert_eq!(session.board()[idx(24)], circle());
    assert_eq!(session.board()[idx(4)], Cell::NEUTRAL);
}

#[test]
fn test_win_pushing_left_into_row() {
    let board = board_from(&[(0, circle()), (1, circle()), (2, circle()), (3, circle())]);
    let mut session = GameSession::resume(config(), board, 3).unwrap();

    let record = session.play(Move::new(idx(4), Direction::Left)).unwrap();
    assert_eq!(record.placed_index, idx(0));
    assert!(record.caused_win);
    assert!(!record.caused_loss_by_opponent_line);
    assert!(record.is_final());

    let result = session.status().result().unwrap();
    assert_eq!(result.outcome, Outcome::WonByMover);
    assert_eq!(result.winner, Symbol::Circle);
    assert_eq!(result.mover, Seat::Top);

    // the finishing move does not advance the turn
    assert_eq!(session.turn(), 3);
    assert!(has_line(session.board(), Symbol::Circle));
}

#[test]
fn test_win_pushing_top_into_corner() {
    let board = board_from(&[(1, circle()), (2, circle()), (3, circle()), (4, circle())]);
    let mut session = GameSession::resume(config(), board, 5).unwrap();

    let record = session.play(Move::new(idx(20), Direction::Top)).unwrap();
    assert_eq!(record.placed_index, idx(0));
    assert!(record.caused_win);
    assert_eq!(session.board()[idx(5)], Cell::NEUTRAL);
    assert!(session.status().is_finished());
}

fn double_line_board(second_cell: Cell) -> Board {
    let mut cells = vec![
        (0, cross()),
        (1, second_cell),
        (2, circle()),
        (3, circle()),
        (4, circle()),
    ];
    cells.extend((6..10).map(|i| (i, cross())));
    board_from(&cells)
}

/// Row 0 becomes circles and row 1 crosses in one push: the mover wins.
#[test]
fn test_simultaneous_lines_mover_wins() {
    let mut session = GameSession::resume(config(), double_line_board(circle()), 3).unwrap();

    let record = session.play(Move::new(idx(20), Direction::Top)).unwrap();
    assert!(has_line(session.board(), Symbol::Circle));
    assert!(has_line(session.board(), Symbol::Cross));

    assert!(record.caused_win);
    assert!(!record.caused_loss_by_opponent_line);
    let result = session.status().result().unwrap();
    assert_eq!(result.outcome, Outcome::WonByMover);
    assert_eq!(result.winner, Symbol::Circle);
}

#[test]
fn test_completing_only_opponent_line_loses() {
    let mut session = GameSession::resume(config(), double_line_board(Cell::NEUTRAL), 3).unwrap();

    let record = session.play(Move::new(idx(20), Direction::Top)).unwrap();
    assert!(!record.caused_win);
    assert!(record.caused_loss_by_opponent_line);

    let result = session.status().result().unwrap();
    assert_eq!(result.outcome, Outcome::WonByOpponentLine);
    assert_eq!(result.winner, Symbol::Cross);
    assert_eq!(result.mover, Seat::Top);

    let summary = session.summary().unwrap();
    let winners: Vec<_> = summary.winners().collect();
    assert_eq!(winners, vec![PlayerId::new(20)]);
}

#[test]
fn test_finished_game_refuses_moves() {
    let board = board_from(&[(0, circle()), (1, circle()), (2, circle()), (3, circle())]);
    let mut session = GameSession::resume(config(), board, 3).unwrap();
    session.play(Move::new(idx(4), Direction::Left)).unwrap();

    let before = session.board().clone();
    assert_eq!(
        session.play(Move::new(idx(24), Direction::Left)),
        Err(EngineError::GameOver)
    );
    assert_eq!(session.select(24), Err(EngineError::GameOver));
    assert_eq!(session.board(), &before);
    assert!(session.legal_moves().is_empty());
}

#[test]
fn test_supplied_dot_ignored() {
    let mut session = GameSession::new(config()).unwrap();
    let record = session
        .play(Move::with_dot(idx(0), Direction::Right, quixo_engine::core::Dot::Up))
        .unwrap();
    assert_eq!(record.dot, None);
    assert_eq!(session.board()[idx(4)], circle());
}

#[test]
fn test_invalid_inputs() {
    let mut session = GameSession::new(config()).unwrap();
    assert_eq!(session.select(99), Err(EngineError::InvalidIndex(99)));
    assert_eq!(
        session.play(Move::new(idx(0), Direction::Left)),
        Err(EngineError::InvalidDirection {
            index: idx(0),
            direction: Direction::Left,
        })
    );
    assert_eq!(session.turn(), 1);
    assert!(session.history().is_empty());
}
