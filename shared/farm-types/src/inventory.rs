use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Errors applying an [`InventoryUpdate`]
#[derive(Error, Debug, PartialEq)]
pub enum UpdateError {
    #[error("Update must set new_stock or stock_change")]
    EmptyUpdate,

    #[error("Stock cannot become negative: {0}")]
    NegativeStock(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct InventoryItemBase {
    #[validate(length(min = 1))]
    pub item: String,
    pub category: String,
    #[validate(range(min = 0.0))]
    pub stock: f64,
    pub unit: String,
    /// Stock level at or below which the item needs restocking
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub threshold: f64,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

pub type InventoryItemCreate = InventoryItemBase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct InventoryItem {
    pub id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub base: InventoryItemBase,
}

/// Either an absolute stock level or a relative change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryUpdate {
    #[serde(default)]
    pub stock_change: Option<f64>,
    #[serde(default)]
    pub new_stock: Option<f64>,
}

impl InventoryItem {
    /// Applies `update` at `now`, `new_stock` taking precedence over `stock_change`
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::EmptyUpdate` if the update sets neither field
    /// Returns `UpdateError::NegativeStock` if the resulting stock is below zero
    pub fn apply_update(
        &mut self,
        update: &InventoryUpdate,
        now: DateTime<Utc>,
    ) -> Result<f64, UpdateError> {
        let stock = match (update.new_stock, update.stock_change) {
            (Some(new_stock), _) => new_stock,
            (None, Some(change)) => self.base.stock + change,
            (None, None) => return Err(UpdateError::EmptyUpdate),
        };

        if stock < 0.0 {
            return Err(UpdateError::NegativeStock(stock));
        }

        self.base.stock = stock;
        self.base.last_updated = Some(now);
        Ok(stock)
    }

    #[must_use]
    pub fn is_below_threshold(&self) -> bool {
        self.base.stock <= self.base.threshold
    }
}
