//! # Drag Reorder Session
//!
//! A pointer drag over the bookmark grid, reduced to values:
//!
//! ```text
//!   Idle ──begin──▶ Dragging ──drop / cancel──▶ Idle
//! ```
//!
//! While dragging, the renderer asks [`insertion_point`] where the card would land
//! given the cursor and the on-screen boxes of the other cards, and uses
//! [`provisional_order`] to lay the grid out. Nothing touches the store until the
//! drop: [`DragSession::drop_on`] turns the final layout into a [`DropCommand`],
//! which is either a reorder (same category) or a move (different category).
//!
//! Every exit from `Dragging` clears the session, so a stale drag can never leak
//! into the next one.

use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};

/// Horizontal extent of a rendered bookmark card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardBounds {
    pub id: String,
    pub left: f64,
    pub width: f64,
}

impl CardBounds {
    pub fn midpoint(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionPoint {
    Before(String),
    End,
}

/// Picks the sibling whose midpoint is the closest one to the right of the cursor.
///
/// The dragged card itself is ignored. With no card to the right the drop goes
/// to the end of the grid.
pub fn insertion_point(cards: &[CardBounds], dragged_id: &str, cursor_x: f64) -> InsertionPoint {
    cards
        .iter()
        .filter(|card| card.id != dragged_id)
        .map(|card| (cursor_x - card.midpoint(), card))
        .filter(|(offset, _)| *offset < 0.0)
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, card)| InsertionPoint::Before(card.id.clone()))
        .unwrap_or(InsertionPoint::End)
}

/// The grid order with `dragged_id` placed at `point`.
///
/// `dragged_id` is removed from `ids` first, so this works both for the source
/// grid and for a grid the card is hovering over.
pub fn provisional_order(ids: &[String], dragged_id: &str, point: &InsertionPoint) -> Vec<String> {
    let mut order: Vec<String> = ids.iter().filter(|id| *id != dragged_id).cloned().collect();
    let index = match point {
        InsertionPoint::Before(sibling) => order
            .iter()
            .position(|id| id == sibling)
            .unwrap_or(order.len()),
        InsertionPoint::End => order.len(),
    };
    order.insert(index, dragged_id.to_string());
    order
}

/// The card being dragged and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    pub item_id: String,
    pub source_key: String,
}

/// The grid under the pointer when the card was released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub category_key: String,
    /// Card ids as laid out in that grid at release time.
    pub layout: Vec<String>,
}

/// The store mutation a completed drop asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropCommand {
    Reorder {
        category_key: String,
        ordered_ids: Vec<String>,
    },
    Move {
        source_key: String,
        target_key: String,
        item_id: String,
        index: usize,
    },
}

impl DropCommand {
    pub fn apply<B: SlotBackend>(self, store: &mut BookmarkStore<B>) -> Result<bool> {
        match self {
            DropCommand::Reorder {
                category_key,
                ordered_ids,
            } => store.reorder_within_category(&category_key, &ordered_ids),
            DropCommand::Move {
                source_key,
                target_key,
                item_id,
                index,
            } => store.move_between_categories(&source_key, &target_key, &item_id, index),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(DragState),
}

impl DragSession {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Picks up a card. A drag already in progress is abandoned.
    pub fn begin(&mut self, item_id: impl Into<String>, source_key: impl Into<String>) {
        *self = DragSession::Dragging(DragState {
            item_id: item_id.into(),
            source_key: source_key.into(),
        });
    }

    pub fn dragged(&self) -> Option<&DragState> {
        match self {
            DragSession::Dragging(state) => Some(state),
            DragSession::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging(_))
    }

    /// Abandons the drag without producing a command.
    pub fn cancel(&mut self) {
        *self = DragSession::Idle;
    }

    /// Ends the drag. Returns the command to run, or `None` when the card was
    /// released outside any grid or no drag was in progress.
    pub fn drop_on(&mut self, target: Option<DropTarget>) -> Option<DropCommand> {
        let DragSession::Dragging(state) = std::mem::take(self) else {
            return None;
        };
        let target = target?;

        if target.category_key == state.source_key {
            Some(DropCommand::Reorder {
                category_key: target.category_key,
                ordered_ids: target.layout,
            })
        } else {
            let index = target
                .layout
                .iter()
                .position(|id| *id == state.item_id)
                .unwrap_or(target.layout.len());
            Some(DropCommand::Move {
                source_key: state.source_key,
                target_key: target.category_key,
                item_id: state.item_id,
                index,
            })
        }
    }
}
