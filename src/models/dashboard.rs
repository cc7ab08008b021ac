use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::Item;

/// The admin dashboard aggregate: counters plus two short lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub summary: DashboardSummary,
    #[serde(rename = "barangStokRendah", default)]
    pub low_stock_items: Vec<Item>,
    #[serde(rename = "permintaanTerbaru", default)]
    pub recent_requests: Vec<RecentRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "totalBarang", default)]
    pub total_items: i64,
    #[serde(rename = "totalPermintaanPending", default)]
    pub pending_requests: i64,
    #[serde(rename = "totalPermintaanDisetujui", default)]
    pub approved_requests: i64,
    #[serde(rename = "totalPermintaanDitolak", default)]
    pub rejected_requests: i64,
    #[serde(rename = "totalBarangHampirHabis", default)]
    pub low_stock_count: i64,
}

/// Dashboard's denormalized view of a recent request. Unlike the request
/// list proper, the status arrives as a display string here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentRequest {
    #[serde(rename = "namaBarang", default)]
    pub item_name: String,
    #[serde(rename = "namaPemohon", default)]
    pub requester_name: String,
    #[serde(rename = "jumlah", default)]
    pub quantity: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "tanggalPermintaan", default)]
    pub requested_at: Option<NaiveDateTime>,
}
