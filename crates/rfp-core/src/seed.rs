//! Seed Data
//!
//! JSON documents the app starts from. The builtin set is compiled in;
//! tests and embedders can pass their own.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::clients::Client;
use crate::error::CoreResult;
use crate::metrics::AnalyticsSeed;
use crate::models::{Board, Card, Column, ColumnId};

const BOARD_JSON: &str = include_str!("../seed/board.json");
const CLIENTS_JSON: &str = include_str!("../seed/clients.json");
const ANALYTICS_JSON: &str = include_str!("../seed/analytics.json");

#[derive(Debug, Deserialize)]
struct ColumnSeed {
    name: String,
    #[serde(default)]
    items: Vec<Card>,
}

/// Everything the desk needs at session start
#[derive(Debug, Clone)]
pub struct Seed {
    pub board: Board,
    pub clients: Vec<Client>,
    pub analytics: AnalyticsSeed,
}

impl Seed {
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BOARD_JSON, CLIENTS_JSON, ANALYTICS_JSON)
    }

    pub fn from_json(board: &str, clients: &str, analytics: &str) -> CoreResult<Self> {
        Ok(Self {
            board: Self::board_from_json(board)?,
            clients: serde_json::from_str(clients)?,
            analytics: serde_json::from_str(analytics)?,
        })
    }

    /// `{ "<columnKey>": { "name": ..., "items": [...] } }`
    pub fn board_from_json(json: &str) -> CoreResult<Board> {
        let columns: BTreeMap<ColumnId, ColumnSeed> = serde_json::from_str(json)?;
        Board::from_columns(columns.into_iter().map(|(id, seed)| Column {
            id,
            name: seed.name,
            cards: seed.items,
        }))
    }
}
