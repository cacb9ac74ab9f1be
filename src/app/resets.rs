use super::*;

impl QuizApp {
    /// "Jugar otra vez": sesión nueva desde cero. Válido en cualquier fase.
    pub fn play_again(&mut self, now: f64) {
        self.engine.reset();
        self.apply_phase_changes(now);
        self.form = ParticipantForm::default();
        self.save_status = SaveStatus::NotSaved;
        self.save_rx = None;
        self.message.clear();
    }
}
