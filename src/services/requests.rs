//! The item-request workflow: division-side submission with client-side
//! pre-checks, and admin-side review (approve/reject) over a displayed
//! snapshot.
//!
//! Pre-checks run in a fixed order and each failure is a distinct error
//! raised before any network call. The decision methods validate against
//! the snapshot the admin is looking at; they deliberately do not re-fetch
//! status or stock first, so a conflicting decision comes back from the
//! server as a plain API error.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument};

use crate::client::{decode_list, decode_record, paths, ApiClient};
use crate::errors::ClientError;
use crate::models::{
    parse_id, parse_quantity, Item, ItemRequest, NewRequest, RequestStatus, StatusUpdate,
};
use crate::services::single_flight::SingleFlight;
use crate::services::{Confirmation, Outcome};

/// How long the submission success message stays visible before the screen
/// layer redirects to the status list.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Note attached to an approval when the admin leaves the field empty.
/// Rejections never default: a note is mandatory there.
pub const DEFAULT_APPROVE_NOTE: &str = "Request approved";

/// Submission form state. Numeric fields coerce silently to zero, which the
/// pre-checks then reject with a proper validation error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestForm {
    pub item_id: Option<i64>,
    pub quantity: i64,
    pub reason: String,
}

impl RequestForm {
    /// Applies a raw select-field value; empty or unparseable input leaves
    /// no item selected.
    pub fn select_item(&mut self, raw: &str) {
        self.item_id = parse_id(raw);
    }

    pub fn set_quantity(&mut self, raw: &str) {
        self.quantity = parse_quantity(raw);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The currently selected item within a displayed list.
    pub fn selected<'a>(&self, items: &'a [Item]) -> Option<&'a Item> {
        let id = self.item_id?;
        items.iter().find(|item| item.id == id)
    }
}

/// The admin's decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

/// Counters for the stats cards above both request tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Clone)]
pub struct RequestService {
    api: Arc<ApiClient>,
    in_flight: SingleFlight,
}

impl RequestService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            in_flight: SingleFlight::new(),
        }
    }

    /// Whether a mutation is outstanding; drives disabled submit buttons.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ItemRequest>, ClientError> {
        let payload = self.api.get(paths::REQUESTS).await?;
        Ok(decode_list(payload))
    }

    #[instrument(skip(self))]
    pub async fn list_by_status(
        &self,
        status: RequestStatus,
    ) -> Result<Vec<ItemRequest>, ClientError> {
        let payload = self
            .api
            .get(&paths::requests_by_status(i32::from(status)))
            .await?;
        Ok(decode_list(payload))
    }

    /// Submits a new request. All pre-checks must pass before anything is
    /// sent; on success the created record (implicitly Pending) comes back.
    #[instrument(skip(self, form, items))]
    pub async fn submit(
        &self,
        form: &RequestForm,
        items: &[Item],
    ) -> Result<ItemRequest, ClientError> {
        let payload = validate_submission(form, items)?;

        let _permit = self.in_flight.acquire()?;
        let response = self.api.post(paths::REQUESTS, &payload).await?;
        let created: ItemRequest = decode_record(response)?;
        info!(request_id = created.id, item_id = created.item_id, "request submitted");
        Ok(created)
    }

    /// Applies an admin decision against the displayed snapshot, then
    /// re-fetches the request list.
    ///
    /// `item` is the displayed item for the request; a request whose item is
    /// no longer listed counts as having zero stock, which blocks approval.
    #[instrument(skip(self, request, item, note), fields(request_id = request.id))]
    pub async fn decide(
        &self,
        request: &ItemRequest,
        item: Option<&Item>,
        decision: Decision,
        note: &str,
        confirmation: Confirmation,
    ) -> Result<Outcome<Vec<ItemRequest>>, ClientError> {
        let update = validate_decision(request, item, decision, note)?;

        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }

        let _permit = self.in_flight.acquire()?;
        self.api
            .put(&paths::request_status(request.id), &update)
            .await?;
        info!(request_id = request.id, status = %update.status, "request decided");

        let refreshed = self.list().await?;
        Ok(Outcome::Applied(refreshed))
    }

    /// Review-screen ordering: pending requests before decided ones, newest
    /// request date first within each partition.
    pub fn sort_for_review(requests: &mut [ItemRequest]) {
        requests.sort_by(|a, b| {
            let pending = b.is_pending().cmp(&a.is_pending());
            pending.then_with(|| b.effective_date().cmp(&a.effective_date()))
        });
    }

    pub fn stats(requests: &[ItemRequest]) -> RequestStats {
        RequestStats {
            total: requests.len(),
            pending: requests.iter().filter(|r| r.is_pending()).count(),
            approved: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Approved)
                .count(),
            rejected: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Rejected)
                .count(),
        }
    }
}

/// Submission pre-checks, in order. Returns the wire payload so nothing is
/// sent unless every check passed.
fn validate_submission(form: &RequestForm, items: &[Item]) -> Result<NewRequest, ClientError> {
    let Some(item_id) = form.item_id else {
        return Err(ClientError::validation("an item must be selected"));
    };

    if form.quantity <= 0 {
        return Err(ClientError::validation(
            "requested quantity must be greater than zero",
        ));
    }

    let reason = form.reason.trim();
    if reason.is_empty() {
        return Err(ClientError::validation("a reason is required"));
    }

    if let Some(item) = items.iter().find(|item| item.id == item_id) {
        if form.quantity > item.stock {
            return Err(ClientError::InsufficientStock(format!(
                "stock not sufficient: {} {} available",
                item.stock, item.unit
            )));
        }
    }

    Ok(NewRequest {
        item_id,
        quantity: form.quantity,
        reason: reason.to_string(),
    })
}

/// Decision pre-checks: terminal-state guard, the reject-note rule and the
/// approve stock re-validation, against the displayed snapshot.
fn validate_decision(
    request: &ItemRequest,
    item: Option<&Item>,
    decision: Decision,
    note: &str,
) -> Result<StatusUpdate, ClientError> {
    if !request.reviewable() {
        return Err(ClientError::InvalidOperation(
            "request has already been decided".to_string(),
        ));
    }

    let note = note.trim();
    match decision {
        Decision::Reject => {
            if note.is_empty() {
                return Err(ClientError::validation(
                    "a note is required when rejecting",
                ));
            }
            Ok(StatusUpdate {
                status: RequestStatus::Rejected,
                note: note.to_string(),
            })
        }
        Decision::Approve => {
            let displayed_stock = item.map(|item| item.stock).unwrap_or(0);
            if displayed_stock < request.quantity {
                return Err(ClientError::InsufficientStock(format!(
                    "stock not sufficient: {} requested, {} available",
                    request.quantity, displayed_stock
                )));
            }
            let note = if note.is_empty() {
                DEFAULT_APPROVE_NOTE.to_string()
            } else {
                note.to_string()
            };
            Ok(StatusUpdate {
                status: RequestStatus::Approved,
                note,
            })
        }
    }
}
