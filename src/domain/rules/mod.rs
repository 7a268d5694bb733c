pub mod attacks;
pub mod calculators;
pub mod move_gen;
pub mod rays;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use thiserror::Error;

use crate::domain::coordinate::{Coordinate, Delta};
use crate::domain::models::{Piece, PieceId, PieceType, Player};
use crate::domain::occupancy::Occupancy;

pub type MoveList = SmallVec<[Coordinate; 64]>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("unknown piece kind: {0:?}")]
    UnknownPieceKind(String),
}

pub struct Rules;

impl Rules {
    pub fn generate_moves(piece_type: PieceType, piece: &Piece, occupancy: &Occupancy) -> MoveList {
        move_gen::generate_moves(piece_type, piece, occupancy)
    }

    /// String-keyed dispatch for records carrying the kind as text.
    ///
    /// An unrecognised name yields no moves rather than an error. Callers that
    /// want to reject bad names should parse with [`PieceType::from_str`]
    /// first.
    ///
    /// [`PieceType::from_str`]: std::str::FromStr::from_str
    pub fn generate_moves_by_name(name: &str, piece: &Piece, occupancy: &Occupancy) -> MoveList {
        match name.parse::<PieceType>() {
            Ok(piece_type) => move_gen::generate_moves(piece_type, piece, occupancy),
            Err(e) => {
                tracing::warn!(piece = %piece.id, "{e}, no moves generated");
                MoveList::new()
            }
        }
    }

    pub fn collect_ray_moves(piece: &Piece, occupancy: &Occupancy, directions: &[Delta]) -> MoveList {
        rays::collect_ray_moves(piece, occupancy, directions)
    }

    pub fn collect_single_step_moves(
        piece: &Piece,
        occupancy: &Occupancy,
        directions: &[Delta],
    ) -> MoveList {
        rays::collect_single_step_moves(piece, occupancy, directions)
    }

    pub fn moves_for_player(occupancy: &Occupancy, player: Player) -> Vec<(PieceId, MoveList)> {
        attacks::moves_for_player(occupancy, player)
    }

    pub fn reachable_cells(occupancy: &Occupancy, player: Player) -> FxHashSet<Coordinate> {
        attacks::reachable_cells(occupancy, player)
    }

    pub fn is_square_reachable(occupancy: &Occupancy, target: &Coordinate, by_player: Player) -> bool {
        attacks::is_square_reachable(occupancy, target, by_player)
    }

    pub fn count_mobility(occupancy: &Occupancy, player: Player) -> usize {
        attacks::count_mobility(occupancy, player)
    }
}
