//! Typed wire records for every entity the client touches.
//!
//! Field names are English on the Rust side and mapped onto the API's
//! Indonesian camelCase wire names with explicit serde renames. All records
//! are transient per-screen copies; the API owns the data.

pub mod dashboard;
pub mod division;
pub mod incoming_stock;
pub mod item;
pub mod outgoing_stock;
pub mod payment;
pub mod procurement;
pub mod request;
pub mod supplier;

pub use dashboard::{DashboardData, DashboardSummary, RecentRequest};
pub use division::{Division, DivisionUser, DivisionUserUpdate, NewDivision, NewDivisionUser};
pub use incoming_stock::{IncomingStock, NewIncomingStock};
pub use item::{Item, NewItem, StockLevel};
pub use outgoing_stock::OutgoingStock;
pub use payment::{NewPayment, Payment, PaymentStatus};
pub use procurement::{NewProcurement, Procurement};
pub use request::{ItemRequest, NewRequest, RequestStatus, StatusUpdate};
pub use supplier::{NewSupplier, Supplier};

use rust_decimal::Decimal;

/// Coerces a numeric form field to an integer, falling back to zero on
/// parse failure (silent coercion, not a validation error).
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Coerces a price form field to a decimal, falling back to zero.
pub fn parse_price(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Coerces a foreign-key select field; empty or unparseable input means
/// nothing is selected.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok().filter(|id| *id > 0)
}
