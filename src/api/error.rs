use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Client-fault taxonomy of the resource layer, plus the opaque server fault
/// wrapping store errors. Every variant is terminal; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("A new {entity} cannot already have an ID")]
    IdExists { entity: &'static str },
    #[error("Invalid id")]
    IdNull { entity: &'static str },
    #[error("Invalid ID")]
    IdInvalid { entity: &'static str },
    #[error("Entity not found")]
    IdNotFound { entity: &'static str },
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error("Field {field} must not be null")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn id_exists(entity: &'static str) -> Self {
        Self::IdExists { entity }
    }

    pub fn id_null(entity: &'static str) -> Self {
        Self::IdNull { entity }
    }

    pub fn id_invalid(entity: &'static str) -> Self {
        Self::IdInvalid { entity }
    }

    pub fn id_not_found(entity: &'static str) -> Self {
        Self::IdNotFound { entity }
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn missing_field(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_key(&self) -> Option<&'static str> {
        match self {
            Self::IdExists { .. } => Some("idexists"),
            Self::IdNull { .. } => Some("idnull"),
            Self::IdInvalid { .. } => Some("idinvalid"),
            Self::IdNotFound { .. } | Self::NotFound { .. } => Some("idnotfound"),
            Self::MissingField { .. } => Some("required"),
            Self::Internal(_) => None,
        }
    }

    pub fn entity_name(&self) -> Option<&'static str> {
        match self {
            Self::IdExists { entity }
            | Self::IdNull { entity }
            | Self::IdInvalid { entity }
            | Self::IdNotFound { entity }
            | Self::NotFound { entity }
            | Self::MissingField { entity, .. } => Some(entity),
            Self::Internal(_) => None,
        }
    }
}

/// Structured error body: entity type and machine-readable reason code for
/// client faults, bare message for server faults.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_key: Option<&'static str>,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("request failed: {:#}", self);
        }
        let body = ErrorBody {
            entity_name: self.entity_name(),
            error_key: self.error_key(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
