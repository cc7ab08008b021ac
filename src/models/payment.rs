use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Payment lifecycle, integer-encoded on the wire like request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(from = "i32", into = "i32")]
pub enum PaymentStatus {
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "paid")]
    Paid,
    #[strum(serialize = "rejected")]
    Rejected,
    #[strum(serialize = "unknown")]
    Unknown,
}

impl From<i32> for PaymentStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => PaymentStatus::Pending,
            1 => PaymentStatus::Paid,
            2 => PaymentStatus::Rejected,
            _ => PaymentStatus::Unknown,
        }
    }
}

impl From<PaymentStatus> for i32 {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => 0,
            PaymentStatus::Paid => 1,
            PaymentStatus::Rejected => 2,
            PaymentStatus::Unknown => -1,
        }
    }
}

/// A supplier payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    #[serde(rename = "supplierId", default)]
    pub supplier_id: Option<i64>,
    #[serde(rename = "totalHarga")]
    pub total: Decimal,
    #[serde(rename = "tanggalBayar", default)]
    pub date: Option<NaiveDateTime>,
    #[serde(rename = "keterangan", default)]
    pub note: Option<String>,
    #[serde(rename = "buktiTransfer", default)]
    pub proof: Option<String>,
    pub status: PaymentStatus,
}

impl Payment {
    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }
}

/// Create payload; payments are created Pending.
#[derive(Debug, Clone, Serialize)]
pub struct NewPayment {
    #[serde(rename = "supplierId")]
    pub supplier_id: i64,
    #[serde(rename = "totalHarga")]
    pub total: Decimal,
    #[serde(rename = "tanggalBayar")]
    pub date: NaiveDate,
    #[serde(rename = "keterangan")]
    pub note: String,
    #[serde(rename = "buktiTransfer", skip_serializing_if = "Option::is_none")]
    pub proof: Option<String>,
}
