use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A procurement proposal (pengadaan): an admin-initiated purchase
/// suggestion to a supplier, keyed by item name rather than item id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procurement {
    pub id: i64,
    #[serde(rename = "namaBarang")]
    pub item_name: String,
    #[serde(rename = "satuan", default)]
    pub unit: String,
    #[serde(rename = "jumlahDiajukan")]
    pub quantity: i64,
    #[serde(rename = "tanggalPengajuan", default)]
    pub date: Option<NaiveDateTime>,
    #[serde(rename = "keterangan", default)]
    pub note: Option<String>,
    #[serde(rename = "supplierId", default)]
    pub supplier_id: Option<i64>,
}

/// Create/update payload for a procurement proposal.
#[derive(Debug, Clone, Serialize)]
pub struct NewProcurement {
    #[serde(rename = "namaBarang")]
    pub item_name: String,
    #[serde(rename = "satuan")]
    pub unit: String,
    #[serde(rename = "jumlahDiajukan")]
    pub quantity: i64,
    #[serde(rename = "tanggalPengajuan")]
    pub date: NaiveDate,
    #[serde(rename = "keterangan")]
    pub note: String,
    #[serde(rename = "supplierId", skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
}
