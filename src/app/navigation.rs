use super::*;

impl QuizApp {
    /// Arranca el bloque de personalidad desde la pantalla de bienvenida.
    pub fn start_quiz(&mut self, now: f64) {
        if let Err(err) = self.engine.start() {
            log::warn!("no se pudo arrancar el quiz: {err}");
            return;
        }
        self.apply_phase_changes(now);
        self.message.clear();
    }

    /// De la pantalla de transición al bloque lógico.
    pub fn continue_to_logical(&mut self, now: f64) {
        if let Err(err) = self.engine.start_logical() {
            log::warn!("no se pudo arrancar el bloque lógico: {err}");
            return;
        }
        self.apply_phase_changes(now);
        self.message.clear();
    }

    pub fn open_admin_login(&mut self) {
        self.screen = Screen::AdminLogin;
        self.message.clear();
    }

    /// Vuelve al quiz sin tocar la sesión de administración.
    pub fn close_admin(&mut self) {
        self.screen = Screen::Quiz;
        self.message.clear();
    }

    /// Cierra la sesión de administración y descarta lo cargado.
    pub fn admin_logout(&mut self) {
        self.admin = AdminSession::default();
        self.admin_rows.clear();
        self.admin_loading = false;
        self.results_rx = None;
        self.screen = Screen::Quiz;
        self.message.clear();
    }
}
