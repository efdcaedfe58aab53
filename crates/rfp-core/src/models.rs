//! Board Models
//!
//! Cards, columns and the board mapping. The set of columns is closed: a
//! board always holds exactly one column per `ColumnId`.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Pipeline stage key. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    New,
    InProgress,
    Submitted,
    Won,
    Lost,
}

impl ColumnId {
    pub const ALL: [ColumnId; 5] = [
        ColumnId::New,
        ColumnId::InProgress,
        ColumnId::Submitted,
        ColumnId::Won,
        ColumnId::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::New => "new",
            ColumnId::InProgress => "inProgress",
            ColumnId::Submitted => "submitted",
            ColumnId::Won => "won",
            ColumnId::Lost => "lost",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ColumnId::New => "New",
            ColumnId::InProgress => "In Progress",
            ColumnId::Submitted => "Submitted",
            ColumnId::Won => "Won",
            ColumnId::Lost => "Lost",
        }
    }

    /// Still being worked on (not yet decided)
    pub fn is_open(&self) -> bool {
        matches!(self, ColumnId::New | ColumnId::InProgress | ColumnId::Submitted)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque card identifier, unique within a board
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A tracked RFP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub company: String,
    /// Whole currency units
    pub value: u64,
    pub due_date: NaiveDate,
}

/// One pipeline stage and its cards in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn empty(id: ColumnId) -> Self {
        Self {
            id,
            name: id.display_name().to_string(),
            cards: Vec::new(),
        }
    }

    pub fn total_value(&self) -> u64 {
        self.cards.iter().map(|c| c.value).sum()
    }
}

/// Table-view projection of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RfpRow {
    pub id: CardId,
    pub title: String,
    pub company: String,
    pub value: u64,
    pub due_date: NaiveDate,
    pub status: ColumnId,
}

/// The full kanban state: one column per `ColumnId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: BTreeMap<ColumnId, Column>,
}

impl Board {
    /// Build a board, checking that every column is present exactly once
    /// and that no card id repeats.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> CoreResult<Self> {
        let mut map = BTreeMap::new();
        let mut seen = HashSet::new();
        for column in columns {
            for card in &column.cards {
                if !seen.insert(card.id.clone()) {
                    return Err(CoreError::DuplicateCard { id: card.id.to_string() });
                }
            }
            let id = column.id;
            if map.insert(id, column).is_some() {
                return Err(CoreError::DuplicateColumn { column: id });
            }
        }
        if let Some(missing) = ColumnId::ALL.iter().find(|id| !map.contains_key(id)) {
            return Err(CoreError::MissingColumn { column: *missing });
        }
        Ok(Self { columns: map })
    }

    /// Board with all five columns and no cards
    pub fn empty() -> Self {
        Self {
            columns: ColumnId::ALL.iter().map(|id| (*id, Column::empty(*id))).collect(),
        }
    }

    /// Columns in display order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        // every key is present by construction
        &self.columns[&id]
    }

    pub(crate) fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        self.columns
            .entry(id)
            .or_insert_with(|| Column::empty(id))
    }

    /// Find a card and the column holding it
    pub fn find_card(&self, id: &CardId) -> Option<(ColumnId, &Card)> {
        self.columns().find_map(|col| {
            col.cards.iter().find(|c| &c.id == id).map(|c| (col.id, c))
        })
    }

    pub fn total_cards(&self) -> usize {
        self.columns().map(|c| c.cards.len()).sum()
    }

    /// Flatten into table rows, column by column
    pub fn rows(&self) -> Vec<RfpRow> {
        self.columns()
            .flat_map(|col| {
                col.cards.iter().map(move |card| RfpRow {
                    id: card.id.clone(),
                    title: card.title.clone(),
                    company: card.company.clone(),
                    value: card.value,
                    due_date: card.due_date,
                    status: col.id,
                })
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> Card {
        Card {
            id: CardId::new(id),
            title: format!("Title {}", id),
            company: "Acme".to_string(),
            value: 1000,
            due_date: NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
        }
    }

    fn column(id: ColumnId, cards: Vec<Card>) -> Column {
        Column { cards, ..Column::empty(id) }
    }

    #[test]
    fn test_column_id_order_and_names() {
        let mut ids = ColumnId::ALL.to_vec();
        ids.reverse();
        ids.sort();
        assert_eq!(ids, ColumnId::ALL.to_vec());
        assert_eq!(ColumnId::InProgress.as_str(), "inProgress");
        assert_eq!(ColumnId::InProgress.display_name(), "In Progress");
        assert!(ColumnId::Submitted.is_open());
        assert!(!ColumnId::Won.is_open());
    }

    #[test]
    fn test_from_columns_requires_every_column() {
        let err = Board::from_columns(vec![column(ColumnId::New, vec![])]).unwrap_err();
        assert!(matches!(err, CoreError::MissingColumn { column: ColumnId::InProgress }));
    }

    #[test]
    fn test_from_columns_rejects_duplicate_card() {
        let mut cols: Vec<Column> = ColumnId::ALL.iter().map(|id| Column::empty(*id)).collect();
        cols[0].cards.push(card("rfp-1"));
        cols[3].cards.push(card("rfp-1"));
        let err = Board::from_columns(cols).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCard { ref id } if id == "rfp-1"));
    }

    #[test]
    fn test_from_columns_rejects_duplicate_column() {
        let mut cols: Vec<Column> = ColumnId::ALL.iter().map(|id| Column::empty(*id)).collect();
        cols.push(Column::empty(ColumnId::Won));
        let err = Board::from_columns(cols).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateColumn { column: ColumnId::Won }));
    }

    #[test]
    fn test_rows_carry_column_status() {
        let mut cols: Vec<Column> = ColumnId::ALL.iter().map(|id| Column::empty(*id)).collect();
        cols[1].cards.push(card("a"));
        cols[4].cards.push(card("b"));
        let board = Board::from_columns(cols).unwrap();

        let rows = board.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, ColumnId::InProgress);
        assert_eq!(rows[1].status, ColumnId::Lost);
        assert_eq!(board.find_card(&CardId::from("b")).map(|(col, _)| col), Some(ColumnId::Lost));
    }
}
