use layerchess::domain::board::Board;
use layerchess::domain::coordinate::Coordinate;
use layerchess::domain::models::{PieceType, Player};
use layerchess::domain::setup::BACK_ROW_ORDER;
use std::collections::HashSet;

fn c(layer: i32, row: i32, col: i32) -> Coordinate {
    Coordinate::new(layer, row, col)
}

fn is_piece_at(board: &Board, at: Coordinate, t: PieceType, p: Player) -> bool {
    board
        .piece_at(&at)
        .is_some_and(|piece| piece.piece_type == t && piece.owner == p)
}

#[test]
fn test_standard_layout() {
    let board = Board::new();
    assert_eq!(board.pieces().len(), 32);
    assert_eq!(board.occupancy().len(), 32);

    for (col, &t) in BACK_ROW_ORDER.iter().enumerate() {
        let col = col as i32;
        assert!(is_piece_at(&board, c(0, 0, col), t, Player::White), "White {t} at col {col}");
        assert!(is_piece_at(&board, c(0, 7, col), t, Player::Brown), "Brown {t} at col {col}");
        assert!(is_piece_at(&board, c(0, 1, col), PieceType::Pawn, Player::White));
        assert!(is_piece_at(&board, c(0, 6, col), PieceType::Pawn, Player::Brown));
    }

    assert!(is_piece_at(&board, c(0, 0, 3), PieceType::Queen, Player::White));
    assert!(is_piece_at(&board, c(0, 0, 4), PieceType::King, Player::White));
    assert!(board.pieces().iter().all(|p| p.position.layer == 0));
    assert!(board.piece_at(&c(0, 3, 3)).is_none());
    assert!(board.piece_at(&c(1, 0, 0)).is_none());
}

#[test]
fn test_ids_are_unique() {
    let board = Board::new();
    let ids: HashSet<_> = board.pieces().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 32);
}

#[test]
fn test_two_boards_number_pieces_independently() {
    let a = Board::new();
    let b = Board::new();
    let ids_a: Vec<_> = a.pieces().iter().map(|p| p.id).collect();
    let ids_b: Vec<_> = b.pieces().iter().map(|p| p.id).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn test_opening_knight_and_pawn_moves() {
    let board = Board::new();
    let knight = board.piece_at(&c(0, 0, 1)).map(|p| p.id).unwrap();
    let moves: HashSet<_> = board.moves_for(knight).unwrap().into_iter().collect();

    // (row +2, col ±1) on layer 0 and (layer +2, col ±1) on row 0.
    let expected: HashSet<_> = [c(0, 2, 2), c(0, 2, 0), c(2, 0, 2), c(2, 0, 0)]
        .into_iter()
        .collect();
    assert_eq!(moves, expected);

    let pawn = board.piece_at(&c(0, 6, 5)).map(|p| p.id).unwrap();
    assert_eq!(board.moves_for(pawn).unwrap().len(), 4);
}
