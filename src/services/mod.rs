//! Per-entity services over the remote API.
//!
//! Every entity follows the same contract: `list()` normalizes whatever
//! shape the API wraps the array in; mutations re-fetch and return the
//! fresh list on success (no optimistic update, no local cache merge);
//! destructive or terminal actions are gated behind an explicit
//! [`Confirmation`] and a cancelled confirmation performs no API call.

pub mod dashboard;
pub mod division_users;
pub mod divisions;
pub mod incoming_stock;
pub mod items;
pub mod outgoing_stock;
pub mod payments;
pub mod procurement;
pub mod requests;
pub mod single_flight;
pub mod suppliers;

use std::sync::Arc;

use crate::auth::{AuthService, SessionStore};
use crate::client::ApiClient;

pub use dashboard::DashboardService;
pub use division_users::DivisionUserService;
pub use divisions::DivisionService;
pub use incoming_stock::IncomingStockService;
pub use items::ItemService;
pub use outgoing_stock::OutgoingStockService;
pub use payments::PaymentService;
pub use procurement::ProcurementService;
pub use requests::{Decision, RequestForm, RequestService, RequestStats};
pub use single_flight::{FlightPermit, SingleFlight};
pub use suppliers::SupplierService;

/// Result of the confirmation dialog gating a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

/// Outcome of a confirmed mutation: applied with the re-fetched list, or
/// cancelled without touching the network.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Applied(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }

    pub fn was_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

/// One instance of every service, sharing a single API client and session
/// store.
#[derive(Clone)]
pub struct AppServices {
    pub auth: AuthService,
    pub items: ItemService,
    pub suppliers: SupplierService,
    pub incoming_stock: IncomingStockService,
    pub outgoing_stock: OutgoingStockService,
    pub requests: RequestService,
    pub procurement: ProcurementService,
    pub payments: PaymentService,
    pub divisions: DivisionService,
    pub division_users: DivisionUserService,
    pub dashboard: DashboardService,
}

impl AppServices {
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            auth: AuthService::new(Arc::clone(&api), store),
            items: ItemService::new(Arc::clone(&api)),
            suppliers: SupplierService::new(Arc::clone(&api)),
            incoming_stock: IncomingStockService::new(Arc::clone(&api)),
            outgoing_stock: OutgoingStockService::new(Arc::clone(&api)),
            requests: RequestService::new(Arc::clone(&api)),
            procurement: ProcurementService::new(Arc::clone(&api)),
            payments: PaymentService::new(Arc::clone(&api)),
            divisions: DivisionService::new(Arc::clone(&api)),
            division_users: DivisionUserService::new(Arc::clone(&api)),
            dashboard: DashboardService::new(api),
        }
    }
}
