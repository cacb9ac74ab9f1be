//! Cliente del almacén remoto (API REST estilo PostgREST).
//!
//! Las peticiones se describen con [`StoreRequest`] y las ejecuta un
//! transporte por plataforma: `reqwest` bloqueante en nativo (siempre desde
//! un hilo de trabajo, nunca desde el hilo de la UI) y `fetch` en WASM.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::{AdminResultRow, ParticipantProfile, QuizResultBundle, SaveOutcome, StoreConfig, StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
}

#[cfg(target_arch = "wasm32")]
impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

/// Petición ya montada, independiente del transporte.
struct StoreRequest {
    method: Method,
    url: String,
    body: Option<Value>,
    // Pide al backend que devuelva la fila insertada (Prefer: return=representation).
    want_rows: bool,
}

// Montaje de peticiones (compartido por ambos transportes)

fn find_participant(cfg: &StoreConfig, email: &str) -> StoreRequest {
    StoreRequest {
        method: Method::Get,
        url: format!("{}/users?email=eq.{}&select=id", cfg.endpoint, email),
        body: None,
        want_rows: false,
    }
}

fn profile_body(profile: &ParticipantProfile) -> Value {
    json!({
        "name": profile.name,
        "age": profile.age,
        "phone": profile.phone,
        "email": profile.email,
        "gender": profile.gender,
        "grade": profile.grade,
        "school_name": profile.school_name,
    })
}

fn insert_participant(cfg: &StoreConfig, profile: &ParticipantProfile) -> StoreRequest {
    StoreRequest {
        method: Method::Post,
        url: format!("{}/users", cfg.endpoint),
        body: Some(profile_body(profile)),
        want_rows: true,
    }
}

fn update_participant(cfg: &StoreConfig, id: &str, profile: &ParticipantProfile) -> StoreRequest {
    StoreRequest {
        method: Method::Patch,
        url: format!("{}/users?id=eq.{}", cfg.endpoint, id),
        body: Some(profile_body(profile)),
        want_rows: false,
    }
}

fn insert_result(cfg: &StoreConfig, participant_id: &str, bundle: &QuizResultBundle) -> StoreRequest {
    StoreRequest {
        method: Method::Post,
        url: format!("{}/quiz_results", cfg.endpoint),
        body: Some(json!({
            "user_id": participant_id,
            "personality_answers": bundle.personality_answers,
            "logical_answers": bundle.logical_answers,
            "logical_score": bundle.logical_score,
            "career_type": bundle.career_type,
            "completion_time_seconds": bundle.completion_time_seconds,
        })),
        want_rows: true,
    }
}

fn admin_login_request(cfg: &StoreConfig, email: &str, password: &str) -> StoreRequest {
    StoreRequest {
        method: Method::Get,
        url: format!(
            "{}/admin_users?email=eq.{}&password=eq.{}&select=id",
            cfg.endpoint, email, password
        ),
        body: None,
        want_rows: false,
    }
}

fn admin_results_request(cfg: &StoreConfig) -> StoreRequest {
    StoreRequest {
        method: Method::Get,
        url: format!(
            "{}/admin_results?select=*&order=completed_at.desc",
            cfg.endpoint
        ),
        body: None,
        want_rows: false,
    }
}

// Extracción de respuestas (compartida)

fn parse_body(text: &str) -> Result<Value, StoreError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|err| StoreError::InvalidResponse(err.to_string()))
}

/// `[]` → None, `[{"id": ...}]` → Some(id).
fn existing_id(rows: &Value) -> Result<Option<String>, StoreError> {
    let rows = rows
        .as_array()
        .ok_or_else(|| StoreError::InvalidResponse("se esperaba un array de filas".into()))?;
    match rows.first() {
        None => Ok(None),
        Some(row) => row
            .get("id")
            .and_then(row_id)
            .map(Some)
            .ok_or_else(|| StoreError::InvalidResponse("fila sin campo id".into())),
    }
}

fn first_row_id(rows: &Value) -> Result<String, StoreError> {
    existing_id(rows)?
        .ok_or_else(|| StoreError::InvalidResponse("el insert no devolvió ninguna fila".into()))
}

// El backend puede devolver ids numéricos o uuid en texto.
fn row_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_rows<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, StoreError> {
    serde_json::from_value(value).map_err(|err| StoreError::InvalidResponse(err.to_string()))
}

// Transporte nativo

#[cfg(not(target_arch = "wasm32"))]
fn execute(cfg: &StoreConfig, request: &StoreRequest) -> Result<Value, StoreError> {
    let client = reqwest::blocking::Client::new();
    let mut builder = match request.method {
        Method::Get => client.get(&request.url),
        Method::Post => client.post(&request.url),
        Method::Patch => client.patch(&request.url),
    };
    if let Some(key) = &cfg.api_key {
        builder = builder.header("apikey", key);
    }
    if request.want_rows {
        builder = builder.header("Prefer", "return=representation");
    }
    if let Some(body) = &request.body {
        builder = builder.json(body);
    }

    let response = builder
        .send()
        .map_err(|err| StoreError::Network(format!("Error conectando con el almacén: {err}")))?;
    let status = response.status();
    let text = response.text().unwrap_or_default();
    if !status.is_success() {
        return Err(StoreError::Http {
            status: status.as_u16(),
            body: text.trim().to_string(),
        });
    }
    parse_body(&text)
}

// Transporte WASM

#[cfg(target_arch = "wasm32")]
async fn execute(cfg: &StoreConfig, request: &StoreRequest) -> Result<Value, StoreError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &request.body {
        let payload = serde_json::to_string(body)
            .map_err(|err| StoreError::InvalidResponse(err.to_string()))?;
        opts.set_body(&JsValue::from_str(&payload));
    }

    let fetch_request = Request::new_with_str_and_init(&request.url, &opts)
        .map_err(|err| StoreError::Network(format!("No se pudo crear el request fetch: {err:?}")))?;
    let headers = fetch_request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|err| StoreError::Network(format!("No se pudieron fijar headers: {err:?}")))?;
    if let Some(key) = &cfg.api_key {
        headers
            .set("apikey", key)
            .map_err(|err| StoreError::Network(format!("No se pudieron fijar headers: {err:?}")))?;
    }
    if request.want_rows {
        headers
            .set("Prefer", "return=representation")
            .map_err(|err| StoreError::Network(format!("No se pudieron fijar headers: {err:?}")))?;
    }

    let window = web_sys::window()
        .ok_or_else(|| StoreError::Network("No existe window en entorno WASM".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(|err| StoreError::Network(format!("Fetch al almacén falló: {err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| StoreError::InvalidResponse("la respuesta fetch no es un Response".into()))?;

    let text_promise = response
        .text()
        .map_err(|err| StoreError::Network(format!("No se pudo leer el body: {err:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| StoreError::Network(format!("No se pudo leer el body: {err:?}")))?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        return Err(StoreError::Http {
            status: response.status(),
            body: text.trim().to_string(),
        });
    }
    parse_body(&text)
}

// Operaciones

/// Upsert del participante por email y alta del resultado. Cualquier fallo
/// se devuelve tal cual: el estado del quiz en memoria no se toca y el
/// mismo paquete puede reenviarse.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_participant_and_result(
    cfg: &StoreConfig,
    profile: &ParticipantProfile,
    bundle: &QuizResultBundle,
) -> Result<SaveOutcome, StoreError> {
    let found = execute(cfg, &find_participant(cfg, &profile.email))?;
    let participant_id = match existing_id(&found)? {
        Some(id) => {
            log::info!("participante existente {id}, actualizando perfil");
            // El alta del resultado importa más que refrescar el perfil.
            if let Err(err) = execute(cfg, &update_participant(cfg, &id, profile)) {
                log::warn!("no se pudo actualizar el perfil existente: {err}");
            }
            id
        }
        None => {
            let inserted = execute(cfg, &insert_participant(cfg, profile))?;
            first_row_id(&inserted)?
        }
    };

    let inserted = execute(cfg, &insert_result(cfg, &participant_id, bundle))?;
    let result_id = first_row_id(&inserted)?;
    log::info!("resultado {result_id} guardado para el participante {participant_id}");
    Ok(SaveOutcome {
        participant_id,
        result_id,
    })
}

#[cfg(target_arch = "wasm32")]
pub async fn save_participant_and_result(
    cfg: &StoreConfig,
    profile: &ParticipantProfile,
    bundle: &QuizResultBundle,
) -> Result<SaveOutcome, StoreError> {
    let found = execute(cfg, &find_participant(cfg, &profile.email)).await?;
    let participant_id = match existing_id(&found)? {
        Some(id) => {
            log::info!("participante existente {id}, actualizando perfil");
            // El alta del resultado importa más que refrescar el perfil.
            if let Err(err) = execute(cfg, &update_participant(cfg, &id, profile)).await {
                log::warn!("no se pudo actualizar el perfil existente: {err}");
            }
            id
        }
        None => {
            let inserted = execute(cfg, &insert_participant(cfg, profile)).await?;
            first_row_id(&inserted)?
        }
    };

    let inserted = execute(cfg, &insert_result(cfg, &participant_id, bundle)).await?;
    let result_id = first_row_id(&inserted)?;
    log::info!("resultado {result_id} guardado para el participante {participant_id}");
    Ok(SaveOutcome {
        participant_id,
        result_id,
    })
}

/// Comprueba las credenciales contra la tabla de administradores.
#[cfg(not(target_arch = "wasm32"))]
pub fn check_admin_login(cfg: &StoreConfig, email: &str, password: &str) -> Result<bool, StoreError> {
    let rows = execute(cfg, &admin_login_request(cfg, email, password))?;
    Ok(existing_id(&rows)?.is_some())
}

#[cfg(target_arch = "wasm32")]
pub async fn check_admin_login(cfg: &StoreConfig, email: &str, password: &str) -> Result<bool, StoreError> {
    let rows = execute(cfg, &admin_login_request(cfg, email, password)).await?;
    Ok(existing_id(&rows)?.is_some())
}

/// Todos los resultados unidos a sus participantes, más recientes primero.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_admin_results(cfg: &StoreConfig) -> Result<Vec<AdminResultRow>, StoreError> {
    let rows = execute(cfg, &admin_results_request(cfg))?;
    parse_rows(rows)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_admin_results(cfg: &StoreConfig) -> Result<Vec<AdminResultRow>, StoreError> {
    let rows = execute(cfg, &admin_results_request(cfg)).await?;
    parse_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CareerType;
    use std::collections::BTreeMap;

    fn config() -> StoreConfig {
        StoreConfig {
            endpoint: "http://store.test/api".to_string(),
            api_key: None,
        }
    }

    #[test]
    fn find_participant_filters_by_email() {
        let request = find_participant(&config(), "kid@example.com");
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url,
            "http://store.test/api/users?email=eq.kid@example.com&select=id"
        );
    }

    #[test]
    fn insert_result_carries_the_whole_bundle() {
        let bundle = QuizResultBundle {
            personality_answers: BTreeMap::from([("p1".to_string(), "a".to_string())]),
            logical_answers: BTreeMap::new(),
            logical_score: 30,
            career_type: CareerType::EnvironmentHero,
            completion_time_seconds: 120,
        };
        let request = insert_result(&config(), "u-7", &bundle);
        assert!(request.want_rows);

        let body = request.body.unwrap();
        assert_eq!(body["user_id"], "u-7");
        assert_eq!(body["career_type"], "environmentHero");
        assert_eq!(body["completion_time_seconds"], 120);
    }

    #[test]
    fn existing_id_handles_empty_and_populated_rows() {
        assert_eq!(existing_id(&serde_json::json!([])).unwrap(), None);
        assert_eq!(
            existing_id(&serde_json::json!([{"id": "u-1"}])).unwrap(),
            Some("u-1".to_string())
        );
        assert_eq!(
            existing_id(&serde_json::json!([{"id": 42}])).unwrap(),
            Some("42".to_string())
        );
        assert!(existing_id(&serde_json::json!({"id": "u-1"})).is_err());
    }

    #[test]
    fn first_row_id_requires_a_row() {
        assert!(matches!(
            first_row_id(&serde_json::json!([])),
            Err(StoreError::InvalidResponse(_))
        ));
    }

    #[test]
    fn parse_body_accepts_empty_responses() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body("  \n").unwrap(), Value::Null);
        assert!(parse_body("not json").is_err());
    }
}
