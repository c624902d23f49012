use async_trait::async_trait;
use configuration::Settings;
use core_types::{SalaryEntry, SalaryPayload};
use tokio::sync::watch;

pub mod error;
pub mod rest;
pub mod session;

// --- Public API ---
pub use error::StoreError;
pub use rest::SupabaseClient;
pub use session::{AuthState, Session};

/// The generic, abstract interface to the salary store.
/// This trait is the contract the relay and the CLI use, allowing the
/// underlying implementation (live or mock) to be swapped out.
#[async_trait]
pub trait SalaryStore: Send + Sync {
    /// Fetches every logged entry, sorted ascending by year.
    async fn fetch_all(&self) -> Result<Vec<SalaryEntry>, StoreError>;

    /// Inserts one validated submission and returns the created row.
    async fn insert_one(&self, payload: &SalaryPayload) -> Result<SalaryEntry, StoreError>;
}

/// The abstract interface to the managed identity provider. It produces a
/// binary authenticated/unauthenticated state used to gate the dashboard.
#[async_trait]
pub trait IdentityGate: Send + Sync {
    /// The current session, if a sign-in has succeeded this process.
    async fn get_session(&self) -> Result<Option<Session>, StoreError>;

    /// Validates email/password with the identity provider.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, StoreError>;

    /// Subscribes to auth-state changes.
    fn subscribe(&self) -> watch::Receiver<AuthState>;
}

/// The store handle as a tagged variant: either a live client or a stub
/// that deterministically fails every operation with `NotConfigured`.
///
/// Constructed once at process start and passed by reference to every
/// collaborator; there is no lazily-built global.
pub enum SupabaseHandle {
    Configured(SupabaseClient),
    Unconfigured(UnconfiguredStub),
}

impl SupabaseHandle {
    /// Builds the handle from loaded settings. Missing coordinates yield
    /// the `Unconfigured` variant; the caller decides whether that is fatal
    /// (the relay) or a degraded state (the identity gate).
    pub fn from_settings(settings: &Settings) -> Result<Self, StoreError> {
        match (&settings.supabase.url, &settings.supabase.anon_key) {
            (Some(url), Some(anon_key)) => {
                let client = SupabaseClient::new(
                    url,
                    anon_key,
                    settings.supabase.service_role_key.as_deref(),
                )?;
                Ok(Self::Configured(client))
            }
            _ => {
                tracing::warn!(
                    "Supabase coordinates missing; store operations will fail as not configured"
                );
                Ok(Self::Unconfigured(UnconfiguredStub::new()))
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}

#[async_trait]
impl SalaryStore for SupabaseHandle {
    async fn fetch_all(&self) -> Result<Vec<SalaryEntry>, StoreError> {
        match self {
            Self::Configured(client) => client.fetch_all().await,
            Self::Unconfigured(_) => Err(StoreError::NotConfigured),
        }
    }

    async fn insert_one(&self, payload: &SalaryPayload) -> Result<SalaryEntry, StoreError> {
        match self {
            Self::Configured(client) => client.insert_one(payload).await,
            Self::Unconfigured(_) => Err(StoreError::NotConfigured),
        }
    }
}

#[async_trait]
impl IdentityGate for SupabaseHandle {
    async fn get_session(&self) -> Result<Option<Session>, StoreError> {
        match self {
            Self::Configured(client) => client.get_session().await,
            Self::Unconfigured(_) => Err(StoreError::NotConfigured),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, StoreError> {
        match self {
            Self::Configured(client) => client.sign_in(email, password).await,
            Self::Unconfigured(_) => Err(StoreError::NotConfigured),
        }
    }

    fn subscribe(&self) -> watch::Receiver<AuthState> {
        match self {
            Self::Configured(client) => client.subscribe(),
            Self::Unconfigured(stub) => stub.subscribe(),
        }
    }
}

/// The stub behind the `Unconfigured` variant. Its auth channel never leaves
/// `Unauthenticated`; holding the sender keeps subscribers' receivers live.
pub struct UnconfiguredStub {
    auth_tx: watch::Sender<AuthState>,
}

impl UnconfiguredStub {
    pub fn new() -> Self {
        let (auth_tx, _) = watch::channel(AuthState::Unauthenticated);
        Self { auth_tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.auth_tx.subscribe()
    }
}

impl Default for UnconfiguredStub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> SupabaseHandle {
        SupabaseHandle::from_settings(&Settings::default()).unwrap()
    }

    #[tokio::test]
    async fn unconfigured_handle_fails_every_store_operation() {
        let handle = unconfigured();
        assert!(!handle.is_configured());

        let fetch = handle.fetch_all().await;
        assert!(matches!(fetch, Err(StoreError::NotConfigured)));

        let session = handle.get_session().await;
        assert!(matches!(session, Err(StoreError::NotConfigured)));

        let signin = handle.sign_in("a@b.c", "pw").await;
        assert!(matches!(signin, Err(StoreError::NotConfigured)));
    }

    #[tokio::test]
    async fn unconfigured_handle_stays_unauthenticated() {
        let handle = unconfigured();
        let rx = handle.subscribe();
        assert_eq!(*rx.borrow(), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn configured_settings_produce_a_live_client() {
        let mut settings = Settings::default();
        settings.supabase.url = Some("https://example.supabase.co/".to_string());
        settings.supabase.anon_key = Some("anon-key".to_string());

        let handle = SupabaseHandle::from_settings(&settings).unwrap();
        assert!(handle.is_configured());
        assert_eq!(*handle.subscribe().borrow(), AuthState::Unauthenticated);
    }
}
