use rustc_hash::FxHashMap;

use crate::domain::coordinate::Coordinate;
use crate::domain::models::{Piece, Player};

/// Read-only snapshot of which piece stands on which cell.
///
/// Built in one pass from the piece list and thrown away whenever the list
/// changes; there is no incremental update path. If two pieces claim the
/// same cell the later one in the input wins.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    cells: FxHashMap<Coordinate, Piece>,
}

impl Occupancy {
    pub fn build<'a, I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = &'a Piece>,
    {
        let pieces = pieces.into_iter();
        let mut cells = FxHashMap::with_capacity_and_hasher(pieces.size_hint().0, Default::default());
        for piece in pieces {
            cells.insert(piece.position, *piece);
        }
        Self { cells }
    }

    pub fn at(&self, coord: &Coordinate) -> Option<&Piece> {
        self.cells.get(coord)
    }

    pub fn is_empty(&self, coord: &Coordinate) -> bool {
        !self.cells.contains_key(coord)
    }

    pub fn is_enemy_at(&self, coord: &Coordinate, color: Player) -> bool {
        self.at(coord).is_some_and(|p| p.owner != color)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PieceId, PieceType};

    fn piece(id: u32, owner: Player, at: Coordinate) -> Piece {
        Piece::new(PieceId(id), PieceType::Pawn, owner, at)
    }

    #[test]
    fn lookup_and_enemy_checks() {
        let a = Coordinate::new(0, 1, 1);
        let b = Coordinate::new(3, 4, 5);
        let pieces = [piece(1, Player::White, a), piece(2, Player::Brown, b)];
        let occ = Occupancy::build(&pieces);

        assert_eq!(occ.at(&a).map(|p| p.id), Some(PieceId(1)));
        assert!(!occ.is_empty(&b));
        assert!(occ.is_empty(&Coordinate::new(0, 0, 0)));
        assert!(occ.is_enemy_at(&b, Player::White));
        assert!(!occ.is_enemy_at(&a, Player::White));
        assert!(!occ.is_enemy_at(&Coordinate::new(0, 0, 0), Player::White));
    }

    #[test]
    fn duplicate_cells_keep_the_last_piece() {
        let c = Coordinate::new(2, 2, 2);
        let pieces = [piece(1, Player::White, c), piece(2, Player::Brown, c)];
        let occ = Occupancy::build(&pieces);

        assert_eq!(occ.len(), 1);
        assert_eq!(occ.at(&c).map(|p| p.id), Some(PieceId(2)));
    }
}
