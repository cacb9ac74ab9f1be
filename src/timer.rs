/// Cronómetro de segundos transcurridos, ligado al reloj de la UI.
///
/// No hay hilo ni tick propio: `now` es el reloj de frame de egui y la app
/// programa un repintado por segundo mientras corre. Al parar, el tiempo en
/// marcha se consolida en `accumulated` y el conteo queda suspendido.
#[derive(Debug, Clone, Default)]
pub struct QuizTimer {
    accumulated: f64,
    started_at: Option<f64>,
}

impl QuizTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self, now: f64) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += (now - started).max(0.0);
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed_seconds(&self, now: f64) -> u64 {
        let running = self
            .started_at
            .map(|started| (now - started).max(0.0))
            .unwrap_or(0.0);
        (self.accumulated + running) as u64
    }

    pub fn formatted(&self, now: f64) -> String {
        format_seconds(self.elapsed_seconds(now))
    }
}

/// Formato "m:ss": 65 → "1:05".
pub fn format_seconds(total: u64) -> String {
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_while_running() {
        let mut timer = QuizTimer::new();
        assert_eq!(timer.elapsed_seconds(100.0), 0);

        timer.start(100.0);
        assert!(timer.is_running());
        assert_eq!(timer.elapsed_seconds(102.9), 2);
        assert_eq!(timer.elapsed_seconds(165.0), 65);
    }

    #[test]
    fn stop_suspends_and_start_resumes() {
        let mut timer = QuizTimer::new();
        timer.start(10.0);
        timer.stop(13.0);

        // Parado: el tiempo deja de avanzar.
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_seconds(60.0), 3);

        timer.start(60.0);
        assert_eq!(timer.elapsed_seconds(62.0), 5);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut timer = QuizTimer::new();
        timer.start(10.0);
        timer.stop(25.0);
        timer.reset();

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_seconds(99.0), 0);
        assert_eq!(timer.formatted(99.0), "0:00");
    }

    #[test]
    fn repeated_start_keeps_original_origin() {
        let mut timer = QuizTimer::new();
        timer.start(10.0);
        timer.start(50.0);
        assert_eq!(timer.elapsed_seconds(70.0), 60);
    }

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_seconds(0), "0:00");
        assert_eq!(format_seconds(9), "0:09");
        assert_eq!(format_seconds(65), "1:05");
        assert_eq!(format_seconds(600), "10:00");
    }
}
