use serde::{Deserialize, Serialize};

/// Request schema for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response schema for `POST /api/auth/login`.
///
/// The token is an opaque bearer credential; the client persists it and
/// attaches it to authenticated requests without inspecting it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
}
