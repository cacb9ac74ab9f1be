use std::sync::mpsc::Receiver;

use crate::data::read_catalog_embedded;
use crate::engine::QuizEngine;
use crate::model::Screen;
use crate::storage::{AdminResultRow, SaveOutcome, StoreConfig, StoreError};
use crate::timer::QuizTimer;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::AdminStats;

/// Campos del formulario del participante, tal cual se teclean.
/// La validación ocurre al enviar, no al escribir.
#[derive(Default, Clone)]
pub struct ParticipantForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
    pub grade: String,
    pub school_name: String,
}

/// Estado del guardado remoto del resultado.
#[derive(Default, Clone, PartialEq)]
pub enum SaveStatus {
    #[default]
    NotSaved,
    Saving,
    Saved(SaveOutcome),
    Failed(String),
}

/// Sesión de administración: bandera explícita ligada a login/logout,
/// nunca guardada fuera de la app.
#[derive(Default)]
pub struct AdminSession {
    pub logged_in: bool,
    pub email: String,
    pub password: String,
    pub checking: bool,
}

pub struct QuizApp {
    pub engine: QuizEngine,
    pub timer: QuizTimer,
    pub screen: Screen,
    pub store: StoreConfig,
    pub message: String,
    pub form: ParticipantForm,
    pub save_status: SaveStatus,
    pub admin: AdminSession,
    pub admin_rows: Vec<AdminResultRow>,
    pub admin_loading: bool,
    pub(crate) save_rx: Option<Receiver<Result<SaveOutcome, StoreError>>>,
    pub(crate) login_rx: Option<Receiver<Result<bool, StoreError>>>,
    pub(crate) results_rx: Option<Receiver<Result<Vec<AdminResultRow>, StoreError>>>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            engine: QuizEngine::new(read_catalog_embedded()),
            timer: QuizTimer::new(),
            screen: Screen::Quiz,
            store: StoreConfig::from_env(),
            message: String::new(),
            form: ParticipantForm::default(),
            save_status: SaveStatus::NotSaved,
            admin: AdminSession::default(),
            admin_rows: Vec::new(),
            admin_loading: false,
            save_rx: None,
            login_rx: None,
            results_rx: None,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
