//! User-info feature used by the end-to-end tests.

use duffle::{BoxError, DynHandler, Handler, HandlerSet, Method, Registrator, Request, Response};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

// ============================================================================
// User Info Store
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserInfo {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user info store is offline")]
    Offline,
}

#[derive(Debug, Error)]
pub enum UserInfoError {
    #[error("request has no body")]
    MissingBody,
}

/// In-memory stand-in for a persistence service.
#[derive(Default)]
pub struct UserInfoStore {
    records: Mutex<Vec<UserInfo>>,
    offline: Mutex<bool>,
}

impl UserInfoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    pub fn insert(&self, new: NewUserInfo) -> Result<UserInfo, StoreError> {
        if *self.offline.lock().unwrap() {
            return Err(StoreError::Offline);
        }
        let mut records = self.records.lock().unwrap();
        let record = UserInfo {
            id: records.len() as u64 + 1,
            first_name: new.first_name,
            last_name: new.last_name,
        };
        records.push(record.clone());
        Ok(record)
    }

    pub fn all(&self) -> Vec<UserInfo> {
        self.records.lock().unwrap().clone()
    }
}

// ============================================================================
// Handlers and Registrator
// ============================================================================

pub struct CreateUserInfo {
    store: Arc<UserInfoStore>,
}

impl Handler for CreateUserInfo {
    fn method(&self) -> Method {
        Method::Post
    }

    fn endpoint(&self) -> &str {
        "/api/userinfo"
    }

    async fn handle(&self, request: &Request) -> Result<Response, BoxError> {
        let body = request.body().ok_or(UserInfoError::MissingBody)?;
        let new: NewUserInfo = body.parse()?;
        let record = self.store.insert(new)?;
        Ok(Response::success(duffle::Body::from_serialize(&record)?))
    }
}

pub struct UserInfoRegistrator {
    handlers: HandlerSet,
}

impl UserInfoRegistrator {
    pub fn new(store: Arc<UserInfoStore>) -> Self {
        Self {
            handlers: HandlerSet::new().with(CreateUserInfo { store }),
        }
    }
}

impl Registrator for UserInfoRegistrator {
    fn endpoints(&self) -> &[Arc<dyn DynHandler>] {
        self.handlers.as_slice()
    }

    fn name(&self) -> &str {
        "user-info"
    }
}
