use super::*;

impl QuizApp {
    /// Fracción 0..=1 del bloque de personalidad, para la barra de progreso.
    pub fn personality_progress(&self) -> f32 {
        self.engine.personality_index() as f32 / self.engine.total_personality().max(1) as f32
    }

    /// Fracción 0..=1 del bloque lógico.
    pub fn logical_progress(&self) -> f32 {
        self.engine.logical_index() as f32 / self.engine.total_logical().max(1) as f32
    }

    /// ¿Hay alguna tarea remota en vuelo?
    pub fn store_busy(&self) -> bool {
        self.save_rx.is_some() || self.login_rx.is_some() || self.results_rx.is_some()
    }
}
