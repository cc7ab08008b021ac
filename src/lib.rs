//! ATK Client Library
//!
//! Typed client for the ATK office-supplies inventory and procurement API:
//! session management, role-gated navigation decisions, the item-request
//! workflow, and one CRUD service per entity. Rendering and routing are the
//! embedding application's concern.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod guard;
pub mod models;
pub mod services;

use std::sync::Arc;

use ::config::ConfigError;
use validator::Validate;

use crate::auth::{FsSessionStore, Session, SessionStore};
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::services::AppServices;

/// The wired-up client: configuration, session store, HTTP transport and
/// one instance of every service.
#[derive(Clone)]
pub struct AtkClient {
    pub config: ClientConfig,
    pub store: Arc<dyn SessionStore>,
    pub api: Arc<ApiClient>,
    pub services: AppServices,
}

impl AtkClient {
    /// Builds a client backed by the filesystem session store under the
    /// configured session directory.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let store: Arc<dyn SessionStore> = Arc::new(FsSessionStore::new(&config.session_dir));
        Self::with_store(config, store)
    }

    /// Builds a client with an injected session store (tests, embedding).
    pub fn with_store(
        config: ClientConfig,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, ClientError> {
        config
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid configuration: {}", e)))?;

        let api = Arc::new(ApiClient::new(&config, Arc::clone(&store))?);
        let services = AppServices::new(Arc::clone(&api), Arc::clone(&store));

        Ok(Self {
            config,
            store,
            api,
            services,
        })
    }

    /// The session as currently persisted (application start, navigation).
    pub fn session(&self) -> Session {
        Session::from_store(self.store.as_ref())
    }
}
