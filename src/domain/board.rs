use thiserror::Error;

use crate::domain::coordinate::Coordinate;
use crate::domain::models::{Piece, PieceId, PieceType, Player};
use crate::domain::occupancy::Occupancy;
use crate::domain::rules::{MoveList, Rules};
use crate::domain::setup::{PieceIdGenerator, standard_pieces};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0:?} is off the board")]
    OutOfBounds(Coordinate),
    #[error("cell {0:?} is already occupied")]
    Occupied(Coordinate),
    #[error("no piece on {0:?}")]
    Empty(Coordinate),
    #[error("no piece is selected")]
    NothingSelected,
    #[error("no piece with id {0}")]
    UnknownPiece(PieceId),
    #[error("piece {piece} cannot move to {target:?}")]
    IllegalMove { piece: PieceId, target: Coordinate },
}

/// The authoritative piece set for one session.
///
/// Every mutation rebuilds the occupancy snapshot from the full piece list.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    occupancy: Occupancy,
    ids: PieceIdGenerator,
}

impl Board {
    pub fn new_empty() -> Self {
        Self {
            pieces: Vec::new(),
            occupancy: Occupancy::default(),
            ids: PieceIdGenerator::new(),
        }
    }

    pub fn new() -> Self {
        let mut ids = PieceIdGenerator::new();
        let pieces = standard_pieces(&mut ids);
        let occupancy = Occupancy::build(&pieces);
        Self {
            pieces,
            occupancy,
            ids,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn piece_at(&self, coord: &Coordinate) -> Option<&Piece> {
        self.occupancy.at(coord)
    }

    pub fn add_piece(
        &mut self,
        piece_type: PieceType,
        owner: Player,
        position: Coordinate,
    ) -> Result<PieceId, BoardError> {
        if !position.is_within_bounds() {
            return Err(BoardError::OutOfBounds(position));
        }
        if !self.occupancy.is_empty(&position) {
            return Err(BoardError::Occupied(position));
        }
        let id = self.ids.next_id();
        self.pieces.push(Piece::new(id, piece_type, owner, position));
        self.rebuild_occupancy();
        Ok(id)
    }

    pub fn moves_for(&self, id: PieceId) -> Result<MoveList, BoardError> {
        let piece = self.piece(id).ok_or(BoardError::UnknownPiece(id))?;
        Ok(Rules::generate_moves(piece.piece_type, piece, &self.occupancy))
    }

    /// Moves piece `id` to `target`, returning whatever stood there.
    pub fn apply_move(&mut self, id: PieceId, target: Coordinate) -> Result<Option<Piece>, BoardError> {
        if !self.moves_for(id)?.contains(&target) {
            tracing::warn!(piece = %id, ?target, "rejected move");
            return Err(BoardError::IllegalMove { piece: id, target });
        }

        let victim_idx = self.pieces.iter().position(|p| p.position == target);
        let captured = victim_idx.map(|idx| self.pieces.remove(idx));

        let mover = self
            .pieces
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BoardError::UnknownPiece(id))?;
        let from = mover.position;
        mover.position = target;

        tracing::debug!(piece = %id, ?from, to = ?target, "move committed");
        if let Some(victim) = &captured {
            tracing::debug!(captured = %victim.id, kind = %victim.piece_type, "piece captured");
        }

        self.rebuild_occupancy();
        Ok(captured)
    }

    fn rebuild_occupancy(&mut self) {
        self.occupancy = Occupancy::build(&self.pieces);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
