use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Request lifecycle. Transitions Pending -> Approved or Pending -> Rejected
/// exactly once, performed only by an admin; terminal states are immutable
/// from the client's perspective.
///
/// Encoded as an integer on the wire; codes outside the known range decode
/// to `Unknown` rather than failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(from = "i32", into = "i32")]
pub enum RequestStatus {
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "approved")]
    Approved,
    #[strum(serialize = "rejected")]
    Rejected,
    #[strum(serialize = "unknown")]
    Unknown,
}

impl From<i32> for RequestStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => RequestStatus::Pending,
            1 => RequestStatus::Approved,
            2 => RequestStatus::Rejected,
            _ => RequestStatus::Unknown,
        }
    }
}

impl From<RequestStatus> for i32 {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Pending => 0,
            RequestStatus::Approved => 1,
            RequestStatus::Rejected => 2,
            RequestStatus::Unknown => -1,
        }
    }
}

/// A division's request for items (permintaan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub id: i64,
    #[serde(rename = "barangId")]
    pub item_id: i64,
    #[serde(rename = "jumlahDiminta")]
    pub quantity: i64,
    #[serde(rename = "alasan", default)]
    pub reason: String,
    #[serde(rename = "namaDivisi", default)]
    pub division_name: Option<String>,
    #[serde(rename = "namaUser", default)]
    pub requester_name: Option<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,
    #[serde(rename = "tanggalPermintaan", default)]
    pub requested_at: Option<NaiveDateTime>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<NaiveDateTime>,
    pub status: RequestStatus,
    #[serde(rename = "keterangan", default)]
    pub admin_note: Option<String>,
}

impl ItemRequest {
    /// Request date, falling back to the record's creation time.
    pub fn effective_date(&self) -> Option<NaiveDateTime> {
        self.requested_at.or(self.created_at)
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Whether the review screen renders Approve/Reject controls.
    pub fn reviewable(&self) -> bool {
        self.is_pending()
    }
}

/// Submission payload; status is implicitly Pending on the server.
#[derive(Debug, Clone, Serialize)]
pub struct NewRequest {
    #[serde(rename = "barangId")]
    pub item_id: i64,
    #[serde(rename = "jumlahDiminta")]
    pub quantity: i64,
    #[serde(rename = "alasan")]
    pub reason: String,
}

/// Status transition payload for the admin decision.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: RequestStatus,
    #[serde(rename = "keterangan")]
    pub note: String,
}
