use crate::config::DisplayConfig;
use crate::domain::board::Board;
use crate::domain::coordinate::{BOARD_SIDE, Coordinate};
use crate::domain::models::{Piece, PieceType, Player};
use std::fmt;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_WHITE: &str = "\x1b[37m";
const COLOR_BROWN: &str = "\x1b[33m";
const COLOR_DIM: &str = "\x1b[90m";
const COLOR_HIGHLIGHT: &str = "\x1b[32m";

const LAYER_WIDTH: usize = BOARD_SIDE as usize * 2 - 1;
const LAYER_GAP: usize = 3;

struct Canvas {
    width: usize,
    height: usize,
    buffer: Vec<String>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            buffer: vec![" ".to_string(); width * height],
        }
    }

    fn put(&mut self, x: usize, y: usize, s: &str) {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = s.to_string();
        }
    }

    fn put_str(&mut self, x: usize, y: usize, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.put(x + i, y, &ch.to_string());
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let line: String = (0..self.width)
                .map(|x| self.buffer[y * self.width + x].as_str())
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Draws the eight layers left to right (layer 0 first), row 7 at the top.
/// Cells in `highlights` show as `*` unless a piece is standing there, in
/// which case the piece is drawn in the highlight color.
pub fn render_board(board: &Board, highlights: &[Coordinate], options: &DisplayConfig) -> String {
    let side = BOARD_SIDE as usize;
    let width = side * LAYER_WIDTH + (side - 1) * LAYER_GAP;
    let mut canvas = Canvas::new(width, side + 1);

    for layer in 0..side {
        let x0 = layer * (LAYER_WIDTH + LAYER_GAP);
        canvas.put_str(x0, 0, &format!("L{}", layer));

        for row in 0..side {
            let y = side - row;
            for col in 0..side {
                let coord = Coordinate::new(layer as i32, row as i32, col as i32);
                let highlighted = highlights.contains(&coord);
                let cell = match board.piece_at(&coord) {
                    Some(piece) => {
                        let color = if highlighted {
                            COLOR_HIGHLIGHT
                        } else {
                            owner_color(piece.owner)
                        };
                        paint(glyph(piece, options.unicode_glyphs), color, options)
                    }
                    None if highlighted => paint("*", COLOR_HIGHLIGHT, options),
                    None => paint(".", COLOR_DIM, options),
                };
                canvas.put(x0 + col * 2, y, &cell);
            }

            if layer < side - 1 {
                let sep_x = x0 + LAYER_WIDTH + LAYER_GAP / 2;
                canvas.put(sep_x, y, &paint("|", COLOR_DIM, options));
            }
        }
    }

    canvas.to_string()
}

fn owner_color(owner: Player) -> &'static str {
    match owner {
        Player::White => COLOR_WHITE,
        Player::Brown => COLOR_BROWN,
    }
}

fn paint(s: &str, color: &str, options: &DisplayConfig) -> String {
    if options.ansi_colors {
        format!("{}{}{}", color, s, COLOR_RESET)
    } else {
        s.to_string()
    }
}

pub fn glyph(piece: &Piece, unicode: bool) -> &'static str {
    if unicode {
        match piece.owner {
            Player::White => match piece.piece_type {
                PieceType::Pawn => "♙",
                PieceType::Knight => "♘",
                PieceType::Bishop => "♗",
                PieceType::Rook => "♖",
                PieceType::Queen => "♕",
                PieceType::King => "♔",
            },
            Player::Brown => match piece.piece_type {
                PieceType::Pawn => "♟",
                PieceType::Knight => "♞",
                PieceType::Bishop => "♝",
                PieceType::Rook => "♜",
                PieceType::Queen => "♛",
                PieceType::King => "♚",
            },
        }
    } else {
        match piece.owner {
            Player::White => match piece.piece_type {
                PieceType::Pawn => "P",
                PieceType::Knight => "N",
                PieceType::Bishop => "B",
                PieceType::Rook => "R",
                PieceType::Queen => "Q",
                PieceType::King => "K",
            },
            Player::Brown => match piece.piece_type {
                PieceType::Pawn => "p",
                PieceType::Knight => "n",
                PieceType::Bishop => "b",
                PieceType::Rook => "r",
                PieceType::Queen => "q",
                PieceType::King => "k",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> DisplayConfig {
        DisplayConfig {
            ansi_colors: false,
            unicode_glyphs: false,
        }
    }

    #[test]
    fn standard_board_first_layer() {
        let board = Board::new();
        let out = render_board(&board, &[], &plain());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("L0"));
        assert!(lines[0].contains("L7"));
        // Row 7 (Brown back row) is drawn first.
        assert!(lines[1].starts_with("r n b q k b n r"));
        assert!(lines[2].starts_with("p p p p p p p p"));
        assert!(lines[7].starts_with("P P P P P P P P"));
        assert!(lines[8].starts_with("R N B Q K B N R"));
    }

    #[test]
    fn highlights_show_on_empty_cells() {
        let board = Board::new_empty();
        let out = render_board(&board, &[Coordinate::new(0, 0, 0)], &plain());
        let bottom = out.lines().nth(8).unwrap_or_default();
        assert!(bottom.starts_with("* . ."));
    }
}
