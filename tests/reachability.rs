use layerchess::domain::board::Board;
use layerchess::domain::coordinate::Coordinate;
use layerchess::domain::models::{PieceType, Player};
use layerchess::domain::rules::Rules;

fn c(layer: i32, row: i32, col: i32) -> Coordinate {
    Coordinate::new(layer, row, col)
}

#[test]
fn test_moves_for_player_matches_single_piece_generation() {
    let board = Board::new();
    let all = Rules::moves_for_player(board.occupancy(), Player::White);

    assert_eq!(all.len(), 16);
    assert!(all.windows(2).all(|w| w[0].0 < w[1].0), "sorted by id");
    for (id, moves) in &all {
        assert_eq!(&board.moves_for(*id).unwrap(), moves);
    }
}

#[test]
fn test_mobility_is_symmetric_at_start() {
    let board = Board::new();
    let white = Rules::count_mobility(board.occupancy(), Player::White);
    let brown = Rules::count_mobility(board.occupancy(), Player::Brown);
    assert_eq!(white, brown);
    assert!(white > 0);
}

#[test]
fn test_reachable_cells() {
    let mut board = Board::new_empty();
    board.add_piece(PieceType::Rook, Player::White, c(0, 0, 0)).unwrap();
    board.add_piece(PieceType::Pawn, Player::Brown, c(0, 0, 3)).unwrap();

    let cells = Rules::reachable_cells(board.occupancy(), Player::White);
    assert!(cells.contains(&c(0, 0, 3)));
    assert!(!cells.contains(&c(0, 0, 4)));
    assert!(cells.contains(&c(7, 0, 0)));

    assert!(Rules::is_square_reachable(board.occupancy(), &c(0, 0, 3), Player::White));
    assert!(!Rules::is_square_reachable(board.occupancy(), &c(0, 0, 4), Player::White));
    assert!(!Rules::is_square_reachable(board.occupancy(), &c(1, 1, 1), Player::White));
}

#[test]
fn test_empty_side_reaches_nothing() {
    let board = Board::new_empty();
    assert!(Rules::reachable_cells(board.occupancy(), Player::Brown).is_empty());
    assert_eq!(Rules::count_mobility(board.occupancy(), Player::Brown), 0);
}
