use crate::error::StoreError;
use crate::session::{AuthState, Session, TokenResponse};
use core_types::{SalaryEntry, SalaryPayload};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};

/// A concrete client for the Supabase project backing the tracker.
///
/// Talks to two surfaces of the same project: the generic tabular REST API
/// (`/rest/v1/salary_history`) and the managed identity endpoint
/// (`/auth/v1`). Requests carry the project keys as static headers; the
/// privileged service-role key is preferred when configured.
#[derive(Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    rest_endpoint: String,
    auth_endpoint: String,
    session: Arc<RwLock<Option<Session>>>,
    auth_tx: Arc<watch::Sender<AuthState>>,
}

impl SupabaseClient {
    pub fn new(
        url: &str,
        anon_key: &str,
        service_role_key: Option<&str>,
    ) -> Result<Self, StoreError> {
        let base = url.trim_end_matches('/');
        let key = service_role_key.unwrap_or(anon_key);

        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(key)
            .map_err(|_| StoreError::Configuration("Supabase key is not a valid header value".to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|_| StoreError::Configuration("Supabase key is not a valid header value".to_string()))?;
        headers.insert("apikey", key_value);
        headers.insert("Authorization", bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Configuration(e.to_string()))?;

        let (auth_tx, _) = watch::channel(AuthState::Unauthenticated);

        Ok(Self {
            client,
            rest_endpoint: format!("{base}/rest/v1"),
            auth_endpoint: format!("{base}/auth/v1"),
            session: Arc::new(RwLock::new(None)),
            auth_tx: Arc::new(auth_tx),
        })
    }

    /// Fetches the full salary history, sorted ascending by year.
    ///
    /// The ascending order is a guarantee of this client, not an assumption
    /// about the store: the result is re-sorted after decoding even though
    /// the query already asks for `order=year.asc`.
    pub async fn fetch_all(&self) -> Result<Vec<SalaryEntry>, StoreError> {
        let url = format!("{}/salary_history", self.rest_endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("order", "year.asc")])
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Upstream(text));
        }

        let mut entries: Vec<SalaryEntry> = serde_json::from_str(&text)
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;
        entries.sort_by_key(|entry| entry.year);
        Ok(entries)
    }

    /// Inserts one entry and returns the created row.
    ///
    /// `Prefer: return=representation` makes the store echo the row back;
    /// the tabular REST API wraps it in a one-element array, so both the
    /// array and bare-object shapes are accepted.
    pub async fn insert_one(&self, payload: &SalaryPayload) -> Result<SalaryEntry, StoreError> {
        let url = format!("{}/salary_history", self.rest_endpoint);
        let response = self
            .client
            .post(&url)
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Upstream(text));
        }

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;
        let row = match value {
            Value::Array(mut rows) if !rows.is_empty() => rows.remove(0),
            Value::Array(_) => {
                return Err(StoreError::Deserialization(
                    "insert returned an empty representation".to_string(),
                ));
            }
            other => other,
        };

        serde_json::from_value(row).map_err(|e| StoreError::Deserialization(e.to_string()))
    }

    /// Signs in with email and password, storing the issued session and
    /// notifying auth-state subscribers.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, StoreError> {
        let url = format!("{}/token", self.auth_endpoint);
        let response = self
            .client
            .post(&url)
            .query(&[("grant_type", "password")])
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Upstream(text));
        }

        let token: TokenResponse = serde_json::from_str(&text)
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;
        let session = Session::from(token);

        *self.session.write().await = Some(session.clone());
        self.auth_tx.send_replace(AuthState::Authenticated);

        Ok(session)
    }

    /// The session issued by the last successful sign-in, if any.
    pub async fn get_session(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.session.read().await.clone())
    }

    /// A receiver observing auth-state changes from this client.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.auth_tx.subscribe()
    }
}
