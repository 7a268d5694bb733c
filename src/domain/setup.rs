use crate::domain::coordinate::{BOARD_SIDE, Coordinate};
use crate::domain::models::{Piece, PieceId, PieceType, Player};

pub const BACK_ROW_ORDER: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Monotonic id source, owned by whoever creates pieces.
#[derive(Debug, Clone)]
pub struct PieceIdGenerator {
    next: u32,
}

impl PieceIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> PieceId {
        let id = PieceId(self.next);
        self.next += 1;
        id
    }
}

impl Default for PieceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The opening layout: everything on layer 0, White on rows 0/1 and Brown on
/// rows 7/6.
pub fn standard_pieces(ids: &mut PieceIdGenerator) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);
    let home_rows = [(Player::White, 0, 1), (Player::Brown, BOARD_SIDE - 1, BOARD_SIDE - 2)];

    for (col, &piece_type) in BACK_ROW_ORDER.iter().enumerate() {
        for &(owner, back_row, _) in &home_rows {
            let position = Coordinate::new(0, back_row, col as i32);
            pieces.push(Piece::new(ids.next_id(), piece_type, owner, position));
        }
    }
    for col in 0..BOARD_SIDE {
        for &(owner, _, pawn_row) in &home_rows {
            let position = Coordinate::new(0, pawn_row, col);
            pieces.push(Piece::new(ids.next_id(), PieceType::Pawn, owner, position));
        }
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut ids = PieceIdGenerator::new();
        assert_eq!(ids.next_id(), PieceId(1));
        assert_eq!(ids.next_id(), PieceId(2));
    }

    #[test]
    fn independent_generators_do_not_share_state() {
        let mut a = PieceIdGenerator::new();
        let mut b = PieceIdGenerator::new();
        a.next_id();
        assert_eq!(b.next_id(), PieceId(1));
    }
}
