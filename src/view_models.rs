// src/view_models.rs

/// Resumen agregado para las tarjetas del panel de administración.
#[derive(Clone, Debug)]
pub struct AdminStats {
    pub total_participants: usize,
    pub average_score: u32,
    pub max_score: u32,
    pub top_career: Option<String>,
}

impl AdminStats {
    pub fn average_label(&self) -> String {
        format!("{}/{}", self.average_score, self.max_score)
    }

    pub fn top_career_label(&self) -> String {
        self.top_career.clone().unwrap_or_else(|| "-".to_string())
    }
}
