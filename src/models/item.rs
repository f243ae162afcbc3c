//! Deliverable item categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Closed set of item types a pricing rule can apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    Perishable,
    NonPerishable,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Perishable => "perishable",
            ItemType::NonPerishable => "non-perishable",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown item type '{0}', expected 'perishable' or 'non-perishable'")]
pub struct ParseItemTypeError(pub String);

impl FromStr for ItemType {
    type Err = ParseItemTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perishable" => Ok(ItemType::Perishable),
            "non-perishable" => Ok(ItemType::NonPerishable),
            other => Err(ParseItemTypeError(other.to_string())),
        }
    }
}

impl TryFrom<String> for ItemType {
    type Error = ParseItemTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Item from the `item` table.
///
/// The `type` column is text in the database and is parsed into [`ItemType`]
/// while decoding the row.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub description: String,
}
