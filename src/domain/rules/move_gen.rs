use crate::domain::coordinate::{Coordinate, Delta};
use crate::domain::models::{Piece, PieceType};
use crate::domain::occupancy::Occupancy;
use crate::domain::rules::MoveList;
use crate::domain::rules::calculators::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, PAWN_STARTING_LAYER, QUEEN_DIRECTIONS,
    ROOK_DIRECTIONS, pawn_forward_direction, pawn_starting_row,
};
use crate::domain::rules::rays::{collect_ray_moves, collect_single_step_moves};

pub fn generate_moves(piece_type: PieceType, piece: &Piece, occupancy: &Occupancy) -> MoveList {
    match piece_type {
        PieceType::Pawn => generate_pawn_moves(piece, occupancy),
        PieceType::Rook => generate_rook_moves(piece, occupancy),
        PieceType::Knight => generate_knight_moves(piece, occupancy),
        PieceType::Bishop => generate_bishop_moves(piece, occupancy),
        PieceType::Queen => generate_queen_moves(piece, occupancy),
        PieceType::King => generate_king_moves(piece, occupancy),
    }
}

pub fn generate_rook_moves(piece: &Piece, occupancy: &Occupancy) -> MoveList {
    collect_ray_moves(piece, occupancy, &ROOK_DIRECTIONS)
}

pub fn generate_bishop_moves(piece: &Piece, occupancy: &Occupancy) -> MoveList {
    collect_ray_moves(piece, occupancy, &BISHOP_DIRECTIONS)
}

pub fn generate_queen_moves(piece: &Piece, occupancy: &Occupancy) -> MoveList {
    collect_ray_moves(piece, occupancy, &QUEEN_DIRECTIONS)
}

pub fn generate_king_moves(piece: &Piece, occupancy: &Occupancy) -> MoveList {
    collect_single_step_moves(piece, occupancy, &KING_OFFSETS)
}

pub fn generate_knight_moves(piece: &Piece, occupancy: &Occupancy) -> MoveList {
    KNIGHT_OFFSETS
        .iter()
        .map(|&offset| piece.position.offset(offset))
        .filter(|target| target.is_within_bounds())
        .filter(|target| occupancy.is_empty(target) || occupancy.is_enemy_at(target, piece.owner))
        .collect()
}

pub fn generate_pawn_moves(piece: &Piece, occupancy: &Occupancy) -> MoveList {
    let mut moves = MoveList::new();
    let forward = pawn_forward_direction(piece.owner);
    let origin = piece.position;

    let is_free = |target: &Coordinate| target.is_within_bounds() && occupancy.is_empty(target);

    let step = origin.offset(Delta::row(forward));
    if is_free(&step) {
        moves.push(step);

        if origin.row == pawn_starting_row(piece.owner) {
            let double = origin.offset(Delta::row(forward * 2));
            if is_free(&double) {
                moves.push(double);
            }
        }
    }

    let up = origin.offset(Delta::layer(1));
    if is_free(&up) {
        moves.push(up);

        if origin.layer == PAWN_STARTING_LAYER {
            let double_up = origin.offset(Delta::layer(2));
            if is_free(&double_up) {
                moves.push(double_up);
            }
        }
    }

    // Capture-only targets: same-layer diagonals, then the layer above
    // (diagonal and straight ahead).
    let captures = [
        Delta::new(0, forward, 1),
        Delta::new(0, forward, -1),
        Delta::new(1, forward, 1),
        Delta::new(1, forward, -1),
        Delta::new(1, forward, 0),
    ];
    for offset in captures {
        let target = origin.offset(offset);
        if target.is_within_bounds() && occupancy.is_enemy_at(&target, piece.owner) {
            moves.push(target);
        }
    }

    moves
}
