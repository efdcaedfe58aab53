//! Kanban Board State
//!
//! Owns the board and the transient drag marker. Moves are append-only:
//! a card dropped on another column goes to the end of that column.

use crate::models::{Board, Card, CardId, Column, ColumnId, RfpRow};
use crate::route::{Navigator, Route};

/// Which card is being dragged, and from where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragMarker {
    pub card_id: CardId,
    pub source: ColumnId,
}

/// What a move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Card relocated to the end of the target column
    Moved,
    /// Source and target are the same column
    SameColumn,
    /// Card was not in the claimed source column
    Stale,
    /// Drop arrived with no drag in progress
    NoDrag,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    board: Board,
    drag: Option<DragMarker>,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self { board, drag: None }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.board.columns()
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        self.board.column(id)
    }

    pub fn find_card(&self, id: &CardId) -> Option<(ColumnId, &Card)> {
        self.board.find_card(id)
    }

    pub fn total_cards(&self) -> usize {
        self.board.total_cards()
    }

    pub fn rows(&self) -> Vec<RfpRow> {
        self.board.rows()
    }

    pub fn drag(&self) -> Option<&DragMarker> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self, card_id: &CardId) -> bool {
        self.drag.as_ref().is_some_and(|d| &d.card_id == card_id)
    }

    /// Relocate `card_id` from `source` to the end of `target`.
    ///
    /// Only the two named columns change. A card missing from `source`
    /// leaves the board untouched.
    pub fn move_card(&mut self, card_id: &CardId, source: ColumnId, target: ColumnId) -> MoveOutcome {
        if source == target {
            return MoveOutcome::SameColumn;
        }
        let from = self.board.column_mut(source);
        let Some(index) = from.cards.iter().position(|c| &c.id == card_id) else {
            return MoveOutcome::Stale;
        };
        let card = from.cards.remove(index);
        self.board.column_mut(target).cards.push(card);
        MoveOutcome::Moved
    }

    /// Drag started on a card
    pub fn begin_drag(&mut self, card_id: CardId, source: ColumnId) {
        self.drag = Some(DragMarker { card_id, source });
    }

    /// Drop over `target`. The marker is cleared whatever happens.
    pub fn drop_on(&mut self, target: ColumnId) -> MoveOutcome {
        match self.drag.take() {
            Some(marker) => self.move_card(&marker.card_id, marker.source, target),
            None => MoveOutcome::NoDrag,
        }
    }

    /// Drag finished without a drop target (or after one); board unchanged
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Open a card's detail/submission page.
    ///
    /// Returns false for unknown cards and while a drag is in progress.
    pub fn select_card(&self, card_id: &CardId, navigator: &impl Navigator) -> bool {
        if self.drag.is_some() || self.board.find_card(card_id).is_none() {
            return false;
        }
        navigator.navigate(Route::Submission);
        true
    }
}
