use std::sync::LazyLock;

use crate::domain::coordinate::Delta;
use crate::domain::models::Player;

pub static ROOK_DIRECTIONS: LazyLock<Vec<Delta>> = LazyLock::new(get_rook_directions_calc);
pub static BISHOP_DIRECTIONS: LazyLock<Vec<Delta>> = LazyLock::new(get_bishop_directions_calc);
pub static QUEEN_DIRECTIONS: LazyLock<Vec<Delta>> = LazyLock::new(get_queen_directions_calc);
pub static KING_OFFSETS: LazyLock<Vec<Delta>> = LazyLock::new(get_king_offsets_calc);

/// Knight leaps on the row/col plane and the layer/col plane only.
/// There is deliberately no row/layer form.
pub const KNIGHT_OFFSETS: [Delta; 8] = [
    Delta::new(0, 2, 1),
    Delta::new(0, 2, -1),
    Delta::new(0, -2, 1),
    Delta::new(0, -2, -1),
    Delta::new(2, 0, 1),
    Delta::new(2, 0, -1),
    Delta::new(-2, 0, 1),
    Delta::new(-2, 0, -1),
];

/// Pawns of both colors start on layer 0 and only ever climb.
pub const PAWN_STARTING_LAYER: i32 = 0;

pub fn pawn_forward_direction(player: Player) -> i32 {
    match player {
        Player::White => 1,
        Player::Brown => -1,
    }
}

pub fn pawn_starting_row(player: Player) -> i32 {
    match player {
        Player::White => 1,
        Player::Brown => 6,
    }
}

/// Every vector in {-1, 0, 1}³ except zero, filtered by how many axes move.
fn unit_directions(keep: impl Fn(usize) -> bool) -> Vec<Delta> {
    let mut dirs = Vec::new();
    for i in 0..27 {
        let mut temp = i;
        let mut axes = [0i32; 3];
        for axis in axes.iter_mut() {
            *axis = match temp % 3 {
                0 => 0,
                1 => 1,
                2 => -1,
                _ => unreachable!(),
            };
            temp /= 3;
        }
        let dir = Delta::new(axes[0], axes[1], axes[2]);
        if !dir.is_zero() && keep(dir.nonzero_axes()) {
            dirs.push(dir);
        }
    }
    dirs
}

pub fn get_rook_directions_calc() -> Vec<Delta> {
    vec![
        Delta::row(1),
        Delta::row(-1),
        Delta::col(1),
        Delta::col(-1),
        Delta::layer(1),
        Delta::layer(-1),
    ]
}

pub fn get_bishop_directions_calc() -> Vec<Delta> {
    unit_directions(|nonzero| nonzero >= 2)
}

pub fn get_queen_directions_calc() -> Vec<Delta> {
    unit_directions(|_| true)
}

pub fn get_king_offsets_calc() -> Vec<Delta> {
    unit_directions(|_| true)
}
