pub mod remote;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::CareerType;

#[cfg(target_arch = "wasm32")]
const DEFAULT_ENDPOINT: &str = "/api/store";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_ENDPOINT: &str = "http://127.0.0.1:8787/api/store";

/// Perfil del participante tal y como se envía a la tabla `users`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ParticipantProfile {
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub gender: Option<String>,
    pub grade: Option<String>,
    pub school_name: Option<String>,
}

/// Paquete final del quiz. Se construye una vez alcanzada la fase de
/// resultado y puede reenviarse tal cual si el guardado falla.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizResultBundle {
    pub personality_answers: BTreeMap<String, String>,
    pub logical_answers: BTreeMap<String, String>,
    pub logical_score: u32,
    pub career_type: CareerType,
    pub completion_time_seconds: u64,
}

/// Identificadores devueltos por un guardado completo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub participant_id: String,
    pub result_id: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("error de red hablando con el almacén: {0}")]
    Network(String),
    #[error("el almacén devolvió HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("respuesta JSON inválida del almacén: {0}")]
    InvalidResponse(String),
}

/// Fila del panel de administración: resultado unido a su participante,
/// tal y como la sirve la vista `admin_results` del backend.
#[derive(Deserialize, Debug, Clone)]
pub struct AdminResultRow {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub career_type: Option<String>,
    pub logical_score: u32,
    #[serde(default)]
    pub completion_time_seconds: Option<u64>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Endpoint y clave del almacén remoto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: store_endpoint(),
            api_key: option_env!("CAREER_QUIZ_STORE_KEY")
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        }
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn store_endpoint() -> String {
    option_env!("CAREER_QUIZ_STORE_ENDPOINT")
        .and_then(normalize_value)
        .or_else(|| {
            std::env::var("CAREER_QUIZ_STORE_ENDPOINT")
                .ok()
                .as_deref()
                .and_then(normalize_value)
        })
        .unwrap_or_else(|| DEFAULT_NATIVE_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
fn store_endpoint() -> String {
    option_env!("CAREER_QUIZ_STORE_ENDPOINT")
        .and_then(normalize_value)
        .or_else(endpoint_from_querystring)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if key == "store_endpoint" {
            return normalize_value(value);
        }
    }
    None
}
