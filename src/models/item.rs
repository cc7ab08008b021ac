use serde::{Deserialize, Serialize};
use strum::Display;

/// An inventory item (barang).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(rename = "kodeBarang")]
    pub code: String,
    #[serde(rename = "namaBarang")]
    pub name: String,
    #[serde(rename = "stok")]
    pub stock: i64,
    #[serde(rename = "satuan")]
    pub unit: String,
}

/// Stock badge thresholds: out at zero, low below ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StockLevel {
    #[strum(serialize = "out of stock")]
    OutOfStock,
    #[strum(serialize = "low stock")]
    Low,
    #[strum(serialize = "available")]
    Available,
}

impl Item {
    pub fn stock_level(&self) -> StockLevel {
        match self.stock {
            0 => StockLevel::OutOfStock,
            s if s < 10 => StockLevel::Low,
            _ => StockLevel::Available,
        }
    }
}

/// Create/update payload for an item. Creation goes through the bulk
/// endpoint; updates target a single id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewItem {
    #[serde(rename = "kodeBarang")]
    pub code: String,
    #[serde(rename = "namaBarang")]
    pub name: String,
    #[serde(rename = "stok")]
    pub stock: i64,
    #[serde(rename = "satuan")]
    pub unit: String,
}
