#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::DateTime;
use serde_json::{Value, json};
use tailor_api::prelude::*;

pub const GOOD_TOKEN: &str = "good-token";
pub const SUBJECT_ID: &str = "subject-1";
pub const VALID_OTP: &str = "123456";

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// ─── Record store ────────────────────────────────────────────────────────────

/// In-memory stand-in for the PostgREST store.
///
/// Assigns numeric ids to rows inserted without one and counts every call.
#[derive(Default)]
pub struct InMemoryRecordStore {
    rows: Mutex<HashMap<Collection, Vec<Row>>>,
    next_id: AtomicU64,
    calls: AtomicUsize,
    fail_next: Mutex<Option<StoreError>>,
    unhealthy: AtomicBool,
}

impl InMemoryRecordStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Inserts a row directly, bypassing the call counter.
    pub fn seed(&self, collection: Collection, row: Value) {
        self.rows
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(row);
    }

    pub fn rows(&self, collection: Collection) -> Vec<Row> {
        self.rows
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Makes the next call fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    pub fn set_unhealthy(&self) {
        self.unhealthy.store(true, Ordering::SeqCst);
    }

    fn begin(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn cell_matches(cell: &Value, expected: &str) -> bool {
    match cell {
        Value::String(s) => s == expected,
        Value::Null => false,
        other => other.to_string() == expected,
    }
}

fn matches(row: &Row, query: &Query) -> bool {
    query
        .filters()
        .iter()
        .all(|(column, value)| row.get(column).is_some_and(|cell| cell_matches(cell, value)))
}

fn compare_cells(a: &Value, b: &Value) -> std::cmp::Ordering {
    let as_time = |v: &Value| v.as_str().and_then(|s| DateTime::parse_from_rfc3339(s).ok());
    match (as_time(a), as_time(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, collection: Collection, mut record: Row) -> Result<Vec<Row>, StoreError> {
        self.begin()?;

        if record.get("id").is_none() {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            record["id"] = json!(id);
        }

        let mut rows = self.rows.lock().unwrap();
        let table = rows.entry(collection).or_default();
        let id = record["id"].clone();
        if table.iter().any(|row| row["id"] == id) {
            return Err(StoreError::Rejected {
                status: 409,
                message: format!(
                    "duplicate key value violates unique constraint \"{collection}_pkey\""
                ),
            });
        }
        table.push(record.clone());

        Ok(vec![record])
    }

    async fn select(&self, collection: Collection, query: &Query) -> Result<Vec<Row>, StoreError> {
        self.begin()?;

        let mut selected: Vec<Row> = self
            .rows(collection)
            .into_iter()
            .filter(|row| matches(row, query))
            .collect();

        if let Some((column, direction)) = query.order() {
            selected.sort_by(|a, b| {
                let ord = compare_cells(&a[column], &b[column]);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        Ok(selected)
    }

    async fn update(
        &self,
        collection: Collection,
        query: &Query,
        patch: Row,
    ) -> Result<Vec<Row>, StoreError> {
        self.begin()?;

        let mut rows = self.rows.lock().unwrap();
        let mut updated = Vec::new();
        for row in rows.entry(collection).or_default().iter_mut() {
            if !matches(row, query) {
                continue;
            }
            if let (Some(target), Some(changes)) = (row.as_object_mut(), patch.as_object()) {
                for (key, value) in changes {
                    target.insert(key.clone(), value.clone());
                }
            }
            updated.push(row.clone());
        }

        Ok(updated)
    }

    async fn delete(&self, collection: Collection, query: &Query) -> Result<(), StoreError> {
        self.begin()?;

        self.rows
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .retain(|row| !matches(row, query));
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy.load(Ordering::SeqCst)
    }
}

// ─── Identity provider ───────────────────────────────────────────────────────

/// Identity provider stub: [`GOOD_TOKEN`] resolves to [`SUBJECT_ID`],
/// [`VALID_OTP`] verifies any phone number.
pub struct StubIdentityProvider {
    tokens: HashMap<String, Subject>,
    unreachable: bool,
    resolve_calls: AtomicUsize,
    signed_out: Mutex<Vec<String>>,
    otp_error: Option<String>,
}

impl Default for StubIdentityProvider {
    fn default() -> Self {
        let mut subject = Subject::with_id(SUBJECT_ID);
        subject.phone = Some("2348012345678".into());
        subject.role = Some("authenticated".into());

        Self {
            tokens: HashMap::from([(GOOD_TOKEN.to_string(), subject)]),
            unreachable: false,
            resolve_calls: AtomicUsize::new(0),
            signed_out: Mutex::new(Vec::new()),
            otp_error: None,
        }
    }
}

impl StubIdentityProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every call fails as if the provider were down.
    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            unreachable: true,
            ..Self::default()
        })
    }

    /// Sending an OTP fails with `message`.
    pub fn rejecting_otp(message: &str) -> Arc<Self> {
        Arc::new(Self {
            otp_error: Some(message.to_string()),
            ..Self::default()
        })
    }

    pub fn with_token(token: &str, subject: Subject) -> Arc<Self> {
        let mut stub = Self::default();
        stub.tokens.insert(token.to_string(), subject);
        Arc::new(stub)
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub fn signed_out(&self) -> Vec<String> {
        self.signed_out.lock().unwrap().clone()
    }

    fn check_reachable(&self) -> Result<(), IdentityError> {
        if self.unreachable {
            Err(IdentityError::Transport("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn resolve_token(&self, token: &str) -> Result<Subject, IdentityError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| IdentityError::Rejected {
                status: 401,
                message: "invalid JWT: unable to parse or verify signature".into(),
            })
    }

    async fn send_otp(&self, _phone_number: &str) -> Result<(), IdentityError> {
        self.check_reachable()?;
        match &self.otp_error {
            Some(message) => Err(IdentityError::Rejected {
                status: 400,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn verify_otp(&self, phone_number: &str, otp: &str) -> Result<Session, IdentityError> {
        self.check_reachable()?;
        if otp != VALID_OTP {
            return Err(IdentityError::Rejected {
                status: 403,
                message: "Token has expired or is invalid".into(),
            });
        }

        let mut user = Subject::with_id(SUBJECT_ID);
        user.phone = Some(phone_number.trim_start_matches('+').to_string());

        Ok(Session {
            access_token: GOOD_TOKEN.into(),
            token_type: Some("bearer".into()),
            expires_in: Some(3600),
            expires_at: Some(1_900_000_000),
            refresh_token: Some("refresh-1".into()),
            user,
        })
    }

    async fn sign_out(&self, token: &str) -> Result<(), IdentityError> {
        self.check_reachable()?;
        self.signed_out.lock().unwrap().push(token.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.unreachable
    }
}

// ─── App ─────────────────────────────────────────────────────────────────────

pub fn create_test_state(
    identity: Arc<StubIdentityProvider>,
    store: Arc<InMemoryRecordStore>,
) -> AppState {
    AppState::new(identity, store)
}

/// Full router (public + guarded routes) behind a test server.
pub fn make_server(
    identity: Arc<StubIdentityProvider>,
    store: Arc<InMemoryRecordStore>,
) -> TestServer {
    TestServer::new(build_router(create_test_state(identity, store))).unwrap()
}
