use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An incoming-stock record (barang masuk). Creating one increases the
/// referenced item's stock server-side; the client never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingStock {
    pub id: i64,
    #[serde(rename = "barangId")]
    pub item_id: i64,
    #[serde(rename = "supplierId", default)]
    pub supplier_id: Option<i64>,
    #[serde(rename = "jumlahMasuk")]
    pub quantity: i64,
    #[serde(rename = "hargaSatuan")]
    pub unit_price: Decimal,
    #[serde(rename = "tanggalMasuk", default)]
    pub date: Option<NaiveDateTime>,
}

impl IncomingStock {
    pub fn total_value(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Create/update payload for incoming stock.
#[derive(Debug, Clone, Serialize)]
pub struct NewIncomingStock {
    #[serde(rename = "barangId")]
    pub item_id: i64,
    #[serde(rename = "supplierId", skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    #[serde(rename = "jumlahMasuk")]
    pub quantity: i64,
    #[serde(rename = "hargaSatuan")]
    pub unit_price: Decimal,
    #[serde(rename = "tanggalMasuk")]
    pub date: NaiveDate,
}
