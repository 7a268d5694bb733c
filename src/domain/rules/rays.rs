use crate::domain::coordinate::Delta;
use crate::domain::models::Piece;
use crate::domain::occupancy::Occupancy;
use crate::domain::rules::MoveList;

/// Slides from the piece along each direction until the edge or the first
/// occupied cell. An enemy on that cell is included as a capture; a friendly
/// piece just blocks.
pub fn collect_ray_moves(piece: &Piece, occupancy: &Occupancy, directions: &[Delta]) -> MoveList {
    let mut moves = MoveList::new();
    for &dir in directions {
        let mut next = piece.position.offset(dir);
        while next.is_within_bounds() {
            match occupancy.at(&next) {
                None => moves.push(next),
                Some(occupant) => {
                    if occupant.owner != piece.owner {
                        moves.push(next);
                    }
                    break;
                }
            }
            next = next.offset(dir);
        }
    }
    moves
}

/// Exactly one step per direction, kept when on the board and not friendly.
pub fn collect_single_step_moves(
    piece: &Piece,
    occupancy: &Occupancy,
    directions: &[Delta],
) -> MoveList {
    directions
        .iter()
        .map(|&dir| piece.position.offset(dir))
        .filter(|target| target.is_within_bounds())
        .filter(|target| {
            occupancy
                .at(target)
                .is_none_or(|occupant| occupant.owner != piece.owner)
        })
        .collect()
}
