use serde::{Deserialize, Serialize};

/// The binary authenticated/unauthenticated state observed by subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// An issued session, held in memory for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
    pub email: Option<String>,
}

/// The raw token response from `POST /auth/v1/token?grant_type=password`.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
    pub user: Option<TokenUser>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenUser {
    pub email: Option<String>,
}

impl From<TokenResponse> for Session {
    fn from(raw: TokenResponse) -> Self {
        Self {
            access_token: raw.access_token,
            token_type: raw.token_type,
            expires_in: raw.expires_in,
            email: raw.user.and_then(|u| u.email),
        }
    }
}
