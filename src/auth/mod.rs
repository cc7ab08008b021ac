//! Session identity, role derivation and the login/logout service.
//!
//! The identity is persisted in durable client storage (two named slots,
//! see [`store::SessionStore`]) and the coarse role is derived from it
//! exactly once at login. The client performs no token validation of its
//! own: the bearer token is an opaque string forwarded to the API.

pub mod store;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{info, instrument, warn};

use crate::client::{paths, ApiClient};
use crate::errors::ClientError;

pub use store::{FsSessionStore, MemorySessionStore, SessionStore};

/// The authenticated identity as stored in the `user` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(alias = "userId")]
    pub id: i64,
    pub username: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "namaDivisi", default)]
    pub division_name: Option<String>,
}

/// Coarse role, decided once at login and carried thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Divisi { division: String },
    Guest,
}

/// The two role kinds a route can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RoleKind {
    Admin,
    Divisi,
}

impl Role {
    /// Derives the role from a stored identity.
    ///
    /// Guest when absent; explicit role (case-insensitive) when present; an
    /// identity without a usable role still counts as a division user when
    /// it carries a division name.
    pub fn derive(identity: Option<&Identity>) -> Role {
        let Some(identity) = identity else {
            return Role::Guest;
        };

        let division = || {
            identity
                .division_name
                .clone()
                .unwrap_or_default()
        };

        match identity.role.as_deref().map(str::to_lowercase).as_deref() {
            Some("admin") => Role::Admin,
            Some("divisi") => Role::Divisi {
                division: division(),
            },
            _ if identity.division_name.is_some() => Role::Divisi {
                division: division(),
            },
            _ => Role::Guest,
        }
    }

    pub fn kind(&self) -> Option<RoleKind> {
        match self {
            Role::Admin => Some(RoleKind::Admin),
            Role::Divisi { .. } => Some(RoleKind::Divisi),
            Role::Guest => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Role::Guest)
    }
}

/// A snapshot of the current session: stored identity plus derived role.
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Option<Identity>,
    pub role: Role,
}

impl Session {
    /// Rebuilds the session from durable storage (application start).
    pub fn from_store(store: &dyn SessionStore) -> Session {
        let identity = store.load();
        let role = Role::derive(identity.as_ref());
        Session { identity, role }
    }

    pub fn guest() -> Session {
        Session {
            identity: None,
            role: Role::Guest,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_authenticated()
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Wire shape of a successful login response.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(alias = "userId")]
    id: i64,
    username: String,
    nama: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(rename = "namaDivisi", default)]
    nama_divisi: Option<String>,
}

/// Login/logout against the remote API plus session persistence.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<ApiClient>,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Authenticates and persists the session.
    ///
    /// The token is stored first, then the identity; the role is derived
    /// once from the response and returned with the session.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ClientError::validation(
                "username and password are required",
            ));
        }

        let payload = self
            .api
            .post(paths::AUTH_LOGIN, &LoginRequest { username, password })
            .await?
            .ok_or_else(|| ClientError::UnexpectedResponse("empty login response".into()))?;

        let response: LoginResponse = serde_json::from_value(payload)
            .map_err(|e| ClientError::UnexpectedResponse(format!("malformed login response: {}", e)))?;

        if let Some(token) = &response.token {
            self.store.save_token(token)?;
        }

        let identity = Identity {
            id: response.id,
            username: response.username,
            name: response.nama,
            role: response.role,
            division_name: response.nama_divisi,
        };
        self.store.save(&identity)?;

        let role = Role::derive(Some(&identity));
        info!(username = %identity.username, authenticated = role.is_authenticated(), "login succeeded");

        Ok(Session {
            identity: Some(identity),
            role,
        })
    }

    /// Notifies the API and clears both session slots.
    ///
    /// Local state is cleared even when the logout request fails; a client
    /// that cannot reach the server must still be able to sign out.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ClientError> {
        if let Err(e) = self.api.post_empty(paths::AUTH_LOGOUT).await {
            warn!(error = %e, "logout request failed; clearing local session anyway");
        }
        self.store.clear();
        Ok(())
    }

    /// The session as currently persisted.
    pub fn current(&self) -> Session {
        Session::from_store(self.store.as_ref())
    }
}
