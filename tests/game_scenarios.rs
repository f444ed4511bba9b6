//! End-to-end scenarios through the public `Game` boundary:
//! castling, promotion, en passant, checkmate and stalemate.

use chess_rules::{
    CastlingRights, Color, Game, GameResult, MoveOutcome, Piece, PieceKind, Position, RulesError,
    coord_to_sq,
};

fn put(pos: &mut Position, coord: &str, color: Color, kind: PieceKind) {
    let s = coord_to_sq(coord).unwrap();
    pos.set_piece(s, Some(Piece::new(color, kind)));
}

fn at(coord: &str) -> u8 {
    coord_to_sq(coord).unwrap()
}

#[test]
fn kingside_castle_relocates_rook_and_clears_rights() {
    let mut pos = Position::empty();
    pos.castling = CastlingRights::all();
    put(&mut pos, "e1", Color::White, PieceKind::King);
    put(&mut pos, "h1", Color::White, PieceKind::Rook);
    put(&mut pos, "e8", Color::Black, PieceKind::King);

    let mut game = Game::from_position(pos);
    let outcome = game.attempt_move(at("e1"), at("g1"));
    assert_eq!(outcome, Ok(MoveOutcome::Applied));
    assert_eq!(
        game.position().piece_at(at("g1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        game.position().piece_at(at("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(game.position().piece_at(at("h1")), None);
    assert!(!game.position().castling.wk);
    assert!(!game.position().castling.wq);
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn promotion_places_a_queen_on_the_last_rank() {
    let mut pos = Position::empty();
    put(&mut pos, "e1", Color::White, PieceKind::King);
    put(&mut pos, "e8", Color::Black, PieceKind::King);
    put(&mut pos, "a7", Color::White, PieceKind::Pawn);

    let mut game = Game::from_position(pos);
    let outcome = game.attempt_move(at("a7"), at("a8"));
    assert_eq!(outcome, Ok(MoveOutcome::Applied));
    assert_eq!(
        game.position().piece_at(at("a8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let mut pos = Position::empty();
    put(&mut pos, "e1", Color::White, PieceKind::King);
    put(&mut pos, "e8", Color::Black, PieceKind::King);
    put(&mut pos, "e5", Color::White, PieceKind::Pawn);
    put(&mut pos, "d7", Color::Black, PieceKind::Pawn);
    pos.side_to_move = Color::Black;

    let mut game = Game::from_position(pos);
    assert_eq!(
        game.attempt_move(at("d7"), at("d5")),
        Ok(MoveOutcome::Applied)
    );
    assert_eq!(
        game.attempt_move(at("e5"), at("d6")),
        Ok(MoveOutcome::Applied)
    );
    assert_eq!(
        game.position().piece_at(at("d6")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(game.position().piece_at(at("d5")), None);
}

#[test]
fn fools_mate_is_checkmate_for_black() {
    let mut game = Game::new();
    assert_eq!(
        game.attempt_move_coords("f2", "f3"),
        Ok(MoveOutcome::Applied)
    );
    assert_eq!(
        game.attempt_move_coords("e7", "e5"),
        Ok(MoveOutcome::Applied)
    );
    assert_eq!(
        game.attempt_move_coords("g2", "g4"),
        Ok(MoveOutcome::Applied)
    );
    assert_eq!(
        game.attempt_move_coords("d8", "h4"),
        Ok(MoveOutcome::Checkmate(Color::Black))
    );
    assert_eq!(game.result(), Some(GameResult::Checkmate(Color::Black)));
    assert_eq!(game.winner(), Some(Color::Black));
}

#[test]
fn back_rank_mate_is_checkmate_for_white() {
    let mut pos = Position::empty();
    put(&mut pos, "g8", Color::Black, PieceKind::King);
    put(&mut pos, "f7", Color::Black, PieceKind::Pawn);
    put(&mut pos, "g7", Color::Black, PieceKind::Pawn);
    put(&mut pos, "h7", Color::Black, PieceKind::Pawn);
    put(&mut pos, "e1", Color::White, PieceKind::Rook);
    put(&mut pos, "g1", Color::White, PieceKind::King);

    let mut game = Game::from_position(pos);
    let outcome = game.attempt_move(at("e1"), at("e8"));
    assert_eq!(outcome, Ok(MoveOutcome::Checkmate(Color::White)));
    assert_eq!(game.winner(), Some(Color::White));
}

#[test]
fn queen_to_b6_stalemates_the_cornered_king() {
    let mut pos = Position::empty();
    put(&mut pos, "a8", Color::Black, PieceKind::King);
    put(&mut pos, "c7", Color::White, PieceKind::King);
    put(&mut pos, "b2", Color::White, PieceKind::Queen);

    let mut game = Game::from_position(pos);
    assert_eq!(game.result(), None);
    let outcome = game.attempt_move(at("b2"), at("b6"));
    assert_eq!(outcome, Ok(MoveOutcome::Stalemate));
    assert_eq!(game.result(), Some(GameResult::Stalemate));
    assert_eq!(game.winner(), None);

    // The resolved game accepts nothing further
    assert!(matches!(
        game.attempt_move(at("c7"), at("c6")),
        Err(RulesError::GameOver { .. })
    ));
}

#[test]
fn castling_rights_only_ever_decrease_over_a_game() {
    let mut game = Game::new();
    let moves = [
        ("h2", "h4"),
        ("a7", "a6"),
        ("h1", "h3"), // White gives up the kingside right
        ("a6", "a5"),
        ("h3", "h1"), // moving back does not restore it
        ("b7", "b6"),
    ];
    let mut seen_wk = true;
    for (from, to) in moves {
        game.attempt_move_coords(from, to).unwrap();
        let rights = &game.position().castling;
        // Once false, never true again
        assert!(!(rights.wk && !seen_wk));
        seen_wk = rights.wk;
    }
    let rights = &game.position().castling;
    assert!(!rights.wk);
    assert!(rights.wq);
    assert!(rights.bk && rights.bq);
}

#[test]
fn outcomes_serialize_for_the_caller_boundary() {
    let json = serde_json::to_string(&MoveOutcome::Checkmate(Color::White)).unwrap();
    assert_eq!(json, r#"{"Checkmate":"White"}"#);
    let back: MoveOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, MoveOutcome::Checkmate(Color::White));

    let json = serde_json::to_string(&GameResult::Stalemate).unwrap();
    assert_eq!(json, r#""Stalemate""#);
}
