use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::domain::coordinate::Coordinate;
use crate::domain::models::{PieceId, Player};
use crate::domain::occupancy::Occupancy;
use crate::domain::rules::MoveList;
use crate::domain::rules::move_gen::generate_moves;

/// Candidate moves for every piece `player` owns, sorted by piece id.
pub fn moves_for_player(occupancy: &Occupancy, player: Player) -> Vec<(PieceId, MoveList)> {
    let pieces: Vec<_> = occupancy.pieces().filter(|p| p.owner == player).collect();
    let mut all: Vec<(PieceId, MoveList)> = pieces
        .par_iter()
        .map(|piece| (piece.id, generate_moves(piece.piece_type, piece, occupancy)))
        .collect();
    all.sort_by_key(|(id, _)| *id);
    all
}

/// Union of every candidate cell of `player`. Pawn pushes are included;
/// this is reachability, not a check test.
pub fn reachable_cells(occupancy: &Occupancy, player: Player) -> FxHashSet<Coordinate> {
    moves_for_player(occupancy, player)
        .into_iter()
        .flat_map(|(_, moves)| moves)
        .collect()
}

pub fn is_square_reachable(occupancy: &Occupancy, target: &Coordinate, by_player: Player) -> bool {
    occupancy
        .pieces()
        .filter(|p| p.owner == by_player)
        .collect::<Vec<_>>()
        .par_iter()
        .any(|piece| generate_moves(piece.piece_type, piece, occupancy).contains(target))
}

pub fn count_mobility(occupancy: &Occupancy, player: Player) -> usize {
    moves_for_player(occupancy, player)
        .iter()
        .map(|(_, moves)| moves.len())
        .sum()
}
