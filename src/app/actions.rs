use std::sync::mpsc;

use super::*;
use crate::model::QuizPhase;
use crate::storage::{ParticipantProfile, QuizResultBundle, remote};

impl QuizApp {
    /// Responde la pregunta de personalidad activa con la opción pulsada.
    pub fn choose_personality_option(&mut self, option_id: &str, now: f64) {
        let question_id = match self.engine.current_personality_question() {
            Some(q) => q.id.clone(),
            None => return,
        };
        if let Err(err) = self.engine.answer_personality(&question_id, option_id) {
            // La UI solo ofrece opciones de la pregunta activa; esto es un bug.
            log::warn!("respuesta de personalidad rechazada: {err}");
        }
        self.apply_phase_changes(now);
    }

    /// Responde la pregunta lógica activa con la opción pulsada.
    pub fn choose_logical_option(&mut self, option_id: &str, now: f64) {
        let question_id = match self.engine.current_logical_question() {
            Some(q) => q.id.clone(),
            None => return,
        };
        if let Err(err) = self.engine.answer_logical(&question_id, option_id) {
            log::warn!("respuesta lógica rechazada: {err}");
        }
        self.apply_phase_changes(now);
    }

    /// Drena las transiciones pendientes del motor: cronómetro y trazas.
    pub(crate) fn apply_phase_changes(&mut self, now: f64) {
        for (from, to) in self.engine.take_phase_changes() {
            log::info!("fase {from:?} -> {to:?}");
            match to {
                QuizPhase::Personality => {
                    self.timer.reset();
                    self.timer.start(now);
                }
                QuizPhase::Transition => {
                    if let Some(prediction) = self.engine.prediction() {
                        log::info!("predicción calculada: {}", prediction.career.wire_name());
                    }
                }
                QuizPhase::Result => self.timer.stop(now),
                QuizPhase::Welcome => self.timer.reset(),
                _ => {}
            }
        }
    }

    /// Valida el formulario y lanza el guardado remoto en segundo plano.
    /// El estado del quiz no se toca: si falla, se puede reintentar tal cual.
    pub fn submit_participant(&mut self, now: f64) {
        if self.save_status == SaveStatus::Saving {
            self.message = "⏳ Already saving, hold on...".into();
            return;
        }
        let profile = match self.participant_profile() {
            Ok(profile) => profile,
            Err(msg) => {
                self.message = msg;
                return;
            }
        };
        let bundle = match self.result_bundle(now) {
            Some(bundle) => bundle,
            None => {
                self.message = "⚠ Finish the quiz before saving.".into();
                return;
            }
        };

        let (tx, rx) = mpsc::channel();
        spawn_save(self.store.clone(), profile, bundle, tx);
        self.save_rx = Some(rx);
        self.save_status = SaveStatus::Saving;
        self.message = "⏳ Saving your results...".into();
    }

    pub fn retry_save(&mut self, now: f64) {
        if matches!(self.save_status, SaveStatus::Failed(_)) {
            self.submit_participant(now);
        }
    }

    fn participant_profile(&self) -> Result<ParticipantProfile, String> {
        let name = self.form.name.trim();
        if name.is_empty() {
            return Err("⚠ Please tell us your name.".into());
        }
        let age: u32 = self
            .form
            .age
            .trim()
            .parse()
            .map_err(|_| "⚠ Age must be a number.".to_string())?;
        if !(1..=120).contains(&age) {
            return Err("⚠ That age doesn't look right.".into());
        }
        let email = self.form.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("⚠ Please enter a valid email.".into());
        }

        fn optional(text: &str) -> Option<String> {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }

        Ok(ParticipantProfile {
            name: name.to_string(),
            age,
            phone: self.form.phone.trim().to_string(),
            email: email.to_string(),
            gender: optional(&self.form.gender),
            grade: optional(&self.form.grade),
            school_name: optional(&self.form.school_name),
        })
    }

    /// Paquete final de respuestas. Solo existe una vez alcanzado el resultado.
    fn result_bundle(&self, now: f64) -> Option<QuizResultBundle> {
        if self.engine.phase() != QuizPhase::Result {
            return None;
        }
        let prediction = self.engine.prediction()?;
        Some(QuizResultBundle {
            personality_answers: self.engine.personality_answers().iter().cloned().collect(),
            logical_answers: self.engine.logical_answers().iter().cloned().collect(),
            logical_score: self.engine.logical_score(),
            career_type: prediction.career,
            completion_time_seconds: self.timer.elapsed_seconds(now),
        })
    }

    /// Recoge los resultados de las tareas remotas pendientes.
    /// Se llama una vez por frame desde `update`.
    pub fn poll_store_tasks(&mut self) {
        if let Some(result) = self.save_rx.as_ref().and_then(|rx| rx.try_recv().ok()) {
            self.save_rx = None;
            match result {
                Ok(outcome) => {
                    log::info!(
                        "guardado ok: participante {}, resultado {}",
                        outcome.participant_id,
                        outcome.result_id
                    );
                    self.message = "✅ Results saved. Thank you!".into();
                    self.save_status = SaveStatus::Saved(outcome);
                }
                Err(err) => {
                    log::error!("no se pudo guardar el resultado: {err}");
                    self.message =
                        "⚠ Could not save your results. Check your connection and try again."
                            .into();
                    self.save_status = SaveStatus::Failed(err.to_string());
                }
            }
        }

        if let Some(result) = self.login_rx.as_ref().and_then(|rx| rx.try_recv().ok()) {
            self.login_rx = None;
            self.admin.checking = false;
            match result {
                Ok(true) => {
                    self.admin.logged_in = true;
                    self.admin.password.clear();
                    self.screen = Screen::AdminDashboard;
                    self.message.clear();
                    self.refresh_admin_results();
                }
                Ok(false) => self.message = "⚠ Invalid credentials.".into(),
                Err(err) => {
                    log::error!("fallo comprobando credenciales: {err}");
                    self.message = "⚠ Could not reach the server. Try again.".into();
                }
            }
        }

        if let Some(result) = self.results_rx.as_ref().and_then(|rx| rx.try_recv().ok()) {
            self.results_rx = None;
            self.admin_loading = false;
            match result {
                Ok(rows) => self.admin_rows = rows,
                Err(err) => {
                    log::error!("fallo cargando resultados: {err}");
                    self.message = "⚠ Could not load submissions.".into();
                }
            }
        }
    }

    pub fn admin_login(&mut self) {
        if self.admin.checking {
            return;
        }
        let email = self.admin.email.trim().to_string();
        let password = self.admin.password.clone();
        if email.is_empty() || password.is_empty() {
            self.message = "⚠ Enter email and password.".into();
            return;
        }

        let (tx, rx) = mpsc::channel();
        spawn_login(self.store.clone(), email, password, tx);
        self.login_rx = Some(rx);
        self.admin.checking = true;
        self.message = "⏳ Checking credentials...".into();
    }

    pub fn refresh_admin_results(&mut self) {
        if !self.admin.logged_in || self.admin_loading {
            return;
        }
        let (tx, rx) = mpsc::channel();
        spawn_fetch_results(self.store.clone(), tx);
        self.results_rx = Some(rx);
        self.admin_loading = true;
    }
}

// Lanzadores por plataforma: hilo de trabajo en nativo, `spawn_local` en WASM.
// El resultado vuelve por el canal y lo recoge `poll_store_tasks`.

#[cfg(not(target_arch = "wasm32"))]
fn spawn_save(
    cfg: StoreConfig,
    profile: ParticipantProfile,
    bundle: QuizResultBundle,
    tx: mpsc::Sender<Result<SaveOutcome, StoreError>>,
) {
    std::thread::spawn(move || {
        let _ = tx.send(remote::save_participant_and_result(&cfg, &profile, &bundle));
    });
}

#[cfg(target_arch = "wasm32")]
fn spawn_save(
    cfg: StoreConfig,
    profile: ParticipantProfile,
    bundle: QuizResultBundle,
    tx: mpsc::Sender<Result<SaveOutcome, StoreError>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let _ = tx.send(remote::save_participant_and_result(&cfg, &profile, &bundle).await);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_login(
    cfg: StoreConfig,
    email: String,
    password: String,
    tx: mpsc::Sender<Result<bool, StoreError>>,
) {
    std::thread::spawn(move || {
        let _ = tx.send(remote::check_admin_login(&cfg, &email, &password));
    });
}

#[cfg(target_arch = "wasm32")]
fn spawn_login(
    cfg: StoreConfig,
    email: String,
    password: String,
    tx: mpsc::Sender<Result<bool, StoreError>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let _ = tx.send(remote::check_admin_login(&cfg, &email, &password).await);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_fetch_results(cfg: StoreConfig, tx: mpsc::Sender<Result<Vec<AdminResultRow>, StoreError>>) {
    std::thread::spawn(move || {
        let _ = tx.send(remote::fetch_admin_results(&cfg));
    });
}

#[cfg(target_arch = "wasm32")]
fn spawn_fetch_results(cfg: StoreConfig, tx: mpsc::Sender<Result<Vec<AdminResultRow>, StoreError>>) {
    wasm_bindgen_futures::spawn_local(async move {
        let _ = tx.send(remote::fetch_admin_results(&cfg).await);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_validation_rejects_bad_age_and_email() {
        let mut app = QuizApp::new();
        app.form.name = "Ana".into();
        app.form.age = "nine".into();
        app.form.email = "ana@example.com".into();
        assert!(app.participant_profile().is_err());

        app.form.age = "9".into();
        app.form.email = "not-an-email".into();
        assert!(app.participant_profile().is_err());

        app.form.email = "ana@example.com".into();
        let profile = app.participant_profile().unwrap();
        assert_eq!(profile.age, 9);
        assert!(profile.gender.is_none());
    }

    #[test]
    fn result_bundle_only_exists_once_the_quiz_is_done() {
        let app = QuizApp::new();
        assert!(app.result_bundle(0.0).is_none());
    }

    #[test]
    fn result_bundle_collects_answers_score_and_elapsed_time() {
        let mut app = QuizApp::new();
        app.start_quiz(0.0);

        while app.engine.phase() == QuizPhase::Personality {
            let option_id = app
                .engine
                .current_personality_question()
                .unwrap()
                .options[0]
                .id
                .clone();
            app.choose_personality_option(&option_id, 5.0);
        }
        app.continue_to_logical(10.0);

        while app.engine.phase() == QuizPhase::Logical {
            let option_id = {
                let q = app.engine.current_logical_question().unwrap();
                q.options.iter().find(|o| o.correct).unwrap().id.clone()
            };
            app.choose_logical_option(&option_id, 95.0);
        }
        assert_eq!(app.engine.phase(), QuizPhase::Result);

        // El cronómetro arrancó en 0.0 y se paró en 95.0 al llegar al resultado.
        let bundle = app.result_bundle(95.0).unwrap();
        assert_eq!(bundle.logical_score, 90);
        assert_eq!(bundle.personality_answers.len(), 6);
        assert_eq!(bundle.logical_answers.len(), 9);
        assert_eq!(bundle.completion_time_seconds, 95);
        assert_eq!(bundle.career_type, app.engine.prediction().unwrap().career);
    }
}
