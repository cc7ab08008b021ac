use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An outgoing-stock record (barang keluar), produced by the server when a
/// request is approved. Read-only: the client never creates or mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingStock {
    pub id: i64,
    #[serde(rename = "barangId")]
    pub item_id: i64,
    #[serde(rename = "jumlahKeluar")]
    pub quantity: i64,
    #[serde(rename = "permintaanId", default)]
    pub request_id: Option<i64>,
    #[serde(rename = "tanggalKeluar", default)]
    pub date: Option<NaiveDateTime>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<NaiveDateTime>,
}

impl OutgoingStock {
    pub fn effective_date(&self) -> Option<NaiveDateTime> {
        self.date.or(self.created_at)
    }
}
