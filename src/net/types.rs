//! Wire types shared with the backend API.
//!
//! Field names mirror the backend's JSON exactly, so these structs
//! double as the persisted user snapshot format.

use std::fmt;

/// A role assigned to a user. `slug` is the authorization key and is
/// compared case-sensitively.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rol {
    pub id: String,
    pub nombre: String,
    pub slug: String,
}

/// The authenticated user profile as returned by the profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Usuario {
    pub id: String,
    pub nombres: String,
    pub apellidos: String,
    pub correo: String,
    #[serde(default)]
    pub roles: Vec<Rol>,
}

impl Usuario {
    /// Role slugs in declaration order.
    pub fn role_slugs(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.slug.as_str()).collect()
    }
}

///`POST /auth/login` response. A 200 without a token is a failed login;
/// `message` carries the reason in that case.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub user: Option<Usuario>,
    pub message: Option<String>,
}

/// Error surfaced to callers of the API layer.
///
/// `Network` means no HTTP response was received at all; `Http` carries the
/// status and, when the body was parseable, the backend's `message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, message: Option<String> },
    Decode(String),
}

impl ApiError {
    /// Human-readable message for form-level display, preferring the
    /// backend's own wording where present.
    pub fn display_message(&self) -> String {
        match self {
            Self::Network(e) => format!("No se pudo conectar al servidor: {e}"),
            Self::Http { message: Some(m), .. } => m.clone(),
            Self::Http { status, message: None } => format!("Error del servidor ({status})"),
            Self::Decode(e) => format!("Respuesta inesperada del servidor: {e}"),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Http { status, message: Some(m) } => write!(f, "http {status}: {m}"),
            Self::Http { status, message: None } => write!(f, "http {status}"),
            Self::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}
