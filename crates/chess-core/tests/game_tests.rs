use chess_core::board::Board;
use chess_core::game_state::GameState;
use chess_core::notation::{GlyphSet, move_log_line};
use chess_core::piece::{Piece, PieceKind};
use chess_core::rules::is_legal_move;
use chess_core::selection::{ClickOutcome, Selection};
use chess_core::side::Side;
use chess_core::square::Square;

fn play(game: &mut GameState, moves: &[(&str, &str)]) {
    for (i, (from, to)) in moves.iter().enumerate() {
        let from: Square = from.parse().unwrap();
        let to: Square = to.parse().unwrap();
        game.attempt_move(from, to).unwrap_or_else(|e| {
            panic!("Failed to make move #{} ({from}{to}): {e}", i + 1);
        });
    }
}

#[test]
fn fresh_session_is_canonical() {
    let game = GameState::new();
    assert_eq!(game.side_to_move(), Side::White);
    assert_eq!(game.board(), &Board::new());
    assert!(game.history().is_empty());
    assert!(game.captured(Side::White).is_empty());
    assert!(game.captured(Side::Black).is_empty());
}

#[test]
fn pawn_double_step_on_otherwise_empty_board() {
    let mut board = Board::empty();
    board.set(Square::E2, Some(Piece::new(PieceKind::Pawn, Side::White)));
    assert_eq!((Square::E2.row(), Square::E2.col()), (6, 4));
    assert!(is_legal_move(&board, Square::E2, Square::E4, Side::White));

    board.set(Square::E3, Some(Piece::new(PieceKind::Bishop, Side::Black)));
    assert!(!is_legal_move(&board, Square::E2, Square::E4, Side::White));
}

#[test]
fn rook_path_blocking() {
    let board = Board::from_string(
        "--------
         --------
         --------
         --------
         --------
         --------
         --------
         R-------",
    )
    .unwrap();
    assert!(is_legal_move(&board, Square::A1, Square::A8, Side::White));
    assert!(is_legal_move(&board, Square::A1, Square::H1, Side::White));

    let board = Board::from_string(
        "--------
         --------
         --------
         p-------
         --------
         --------
         --------
         R---n---",
    )
    .unwrap();
    assert!(!is_legal_move(&board, Square::A1, Square::A8, Side::White));
    assert!(!is_legal_move(&board, Square::A1, Square::H1, Side::White));
    assert!(is_legal_move(&board, Square::A1, Square::A5, Side::White));
    assert!(is_legal_move(&board, Square::A1, Square::E1, Side::White));
}

#[test]
fn diagonal_movers_ignore_pieces_in_the_way() {
    let mut game = GameState::new();
    // The e2 pawn stands between f1 and a6, and between d1 and h5.
    assert!(game.is_legal_move(Square::F1, Square::A6));
    assert!(game.is_legal_move(Square::D1, Square::H5));
    // The queen's file is not scanned either.
    assert!(game.is_legal_move(Square::D1, Square::D7));

    let record = game.attempt_move(Square::F1, Square::A6).unwrap();
    assert_eq!(record.piece, Piece::new(PieceKind::Bishop, Side::White));
    assert_eq!(game.board().get(Square::E2).map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn undo_restores_previous_state() {
    let mut game = GameState::new();
    play(&mut game, &[("e2", "e4"), ("d7", "d5")]);

    for (from, to) in [(Square::E4, Square::D5), (Square::G1, Square::F3)] {
        let before = game.clone();
        game.attempt_move(from, to).unwrap();
        assert_ne!(game, before);
        assert!(game.undo().is_some());
        assert_eq!(game, before);
    }
}

#[test]
fn captures_are_tallied_in_order_and_undone_from_the_end() {
    let mut game = GameState::new();
    play(
        &mut game,
        &[("e2", "e4"), ("d7", "d5"), ("d1", "d5"), ("b8", "c6"), ("d5", "c6")],
    );

    let pawn = Piece::new(PieceKind::Pawn, Side::Black);
    let knight = Piece::new(PieceKind::Knight, Side::Black);
    assert_eq!(game.captured(Side::White), &[pawn, knight]);
    assert!(game.captured(Side::Black).is_empty());

    let undone = game.undo().unwrap();
    assert_eq!(undone.captured, Some(knight));
    assert_eq!(game.captured(Side::White), &[pawn]);
    assert_eq!(game.board().get(Square::C6), Some(knight));
    assert_eq!(game.side_to_move(), Side::White);
    assert_eq!(game.history().len(), 4);
}

#[test]
fn repeated_undo_walks_back_to_start() {
    let mut game = GameState::new();
    play(&mut game, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);

    assert!(game.undo().is_some());
    assert!(game.undo().is_some());
    assert!(game.undo().is_some());
    assert!(game.undo().is_none());
    assert_eq!(game, GameState::new());
}

#[test]
fn restart_is_idempotent() {
    let mut game = GameState::new();
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("d1", "h5"),
            ("b8", "c6"),
            ("h5", "f7"),
            ("e8", "f7"),
        ],
    );
    game.click(Square::D2);

    game.restart();
    assert_eq!(game, GameState::new());
    game.restart();
    assert_eq!(game, GameState::new());
}

#[test]
fn opponent_piece_click_while_idle_has_no_effect() {
    let mut game = GameState::new();
    assert_eq!(game.click(Square::D7), ClickOutcome::Ignored);
    assert_eq!(game.selection(), Selection::Idle);
    assert!(game.highlights().is_empty());
}

#[test]
fn click_flow_moves_and_hands_over_turn() {
    let mut game = GameState::new();
    assert_eq!(game.click(Square::E2), ClickOutcome::Selected(Square::E2));
    // Illegal target holding an own piece: reselect in the same click.
    assert_eq!(game.click(Square::G1), ClickOutcome::Reselected(Square::G1));
    assert!(matches!(game.click(Square::F3), ClickOutcome::Moved(_)));
    assert_eq!(game.side_to_move(), Side::Black);

    // White pieces are no longer selectable.
    assert_eq!(game.click(Square::F3), ClickOutcome::Ignored);
    assert_eq!(game.click(Square::G8), ClickOutcome::Selected(Square::G8));
    assert_eq!(game.click(Square::G5), ClickOutcome::Deselected);
    assert_eq!(game.side_to_move(), Side::Black);
}

#[test]
fn kings_can_be_captured_without_ending_the_game() {
    let mut game = GameState::new();
    play(&mut game, &[("d1", "d8"), ("a7", "a6"), ("d8", "e8")]);

    let black_king = Piece::new(PieceKind::King, Side::Black);
    assert_eq!(
        game.captured(Side::White),
        &[Piece::new(PieceKind::Queen, Side::Black), black_king]
    );
    assert!(!game.board().pieces().any(|(_, p)| p == black_king));

    // Play carries on with Black to move.
    assert_eq!(game.side_to_move(), Side::Black);
    play(&mut game, &[("a6", "a5")]);
    assert_eq!(game.side_to_move(), Side::White);

    assert_eq!(game.undo().map(|r| r.to), Some(Square::A5));
    assert_eq!(game.undo().and_then(|r| r.captured), Some(black_king));
    assert_eq!(game.board().get(Square::E8), Some(black_king));
}

#[test]
fn move_log_lines_follow_history() {
    let mut game = GameState::new();
    play(&mut game, &[("e2", "e4"), ("d7", "d5"), ("e4", "d5")]);

    let lines: Vec<String> = game
        .history()
        .iter()
        .enumerate()
        .map(|(i, r)| move_log_line(i + 1, r, GlyphSet::Unicode))
        .collect();
    assert_eq!(lines, vec!["1. ♙ e2 → e4", "1. ♟ d7 → d5", "2. ♙ e4 → d5 (♟)"]);
}
