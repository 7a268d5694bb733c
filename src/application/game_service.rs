use crate::domain::board::{Board, BoardError};
use crate::domain::coordinate::Coordinate;
use crate::domain::models::{Piece, PieceId};
use crate::domain::rules::MoveList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Selected(PieceId),
    Cleared,
}

/// Click-style selection on top of a [`Board`]: pick a piece, see its
/// targets, pick a target. Either color may move at any time.
pub struct GameService {
    board: Board,
    selected: Option<PieceId>,
    available_moves: MoveList,
}

impl GameService {
    pub fn new(board: Board) -> Self {
        GameService {
            board,
            selected: None,
            available_moves: MoveList::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selected(&self) -> Option<&Piece> {
        self.selected.and_then(|id| self.board.piece(id))
    }

    pub fn available_moves(&self) -> &[Coordinate] {
        &self.available_moves
    }

    /// Selecting the piece that is already selected deselects it.
    pub fn select(&mut self, id: PieceId) -> Result<Selection, BoardError> {
        if self.selected == Some(id) {
            self.clear_selection();
            return Ok(Selection::Cleared);
        }

        let moves = self.board.moves_for(id)?;
        tracing::debug!(piece = %id, candidates = moves.len(), "piece selected");
        self.selected = Some(id);
        self.available_moves = moves;
        Ok(Selection::Selected(id))
    }

    pub fn select_at(&mut self, coord: &Coordinate) -> Result<Selection, BoardError> {
        if !coord.is_within_bounds() {
            return Err(BoardError::OutOfBounds(*coord));
        }
        let id = self
            .board
            .piece_at(coord)
            .map(|p| p.id)
            .ok_or(BoardError::Empty(*coord))?;
        self.select(id)
    }

    /// Commits the selected piece to `target` and clears the selection.
    pub fn choose(&mut self, target: Coordinate) -> Result<Option<Piece>, BoardError> {
        let id = self.selected.ok_or(BoardError::NothingSelected)?;
        let captured = self.board.apply_move(id, target)?;
        self.clear_selection();
        Ok(captured)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.available_moves.clear();
    }

    pub fn reset(&mut self, board: Board) {
        self.board = board;
        self.clear_selection();
    }
}
