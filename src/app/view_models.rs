use super::*;

impl QuizApp {
    /// Tarjetas resumen del panel: participantes, nota media y carrera top.
    pub fn admin_stats(&self) -> AdminStats {
        let total = self.admin_rows.len();
        let average_score = if total == 0 {
            0
        } else {
            self.admin_rows.iter().map(|r| r.logical_score).sum::<u32>() / total as u32
        };

        // Distribución de carreras y la más repetida.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for row in &self.admin_rows {
            if let Some(career) = row.career_type.as_deref() {
                match counts.iter_mut().find(|(c, _)| *c == career) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((career, 1)),
                }
            }
        }
        let top_career = counts
            .iter()
            .max_by_key(|(_, n)| *n)
            .map(|(career, _)| career.to_string());

        AdminStats {
            total_participants: total,
            average_score,
            max_score: self.engine.max_logical_score(),
            top_career,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, score: u32, career: Option<&str>) -> AdminResultRow {
        AdminResultRow {
            id: format!("r-{name}"),
            name: name.to_string(),
            age: 9,
            email: format!("{name}@example.com"),
            phone: String::new(),
            career_type: career.map(str::to_string),
            logical_score: score,
            completion_time_seconds: Some(80),
            completed_at: Some("2025-06-01T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn stats_aggregate_scores_and_top_career() {
        let mut app = QuizApp::new();
        app.admin_rows = vec![
            row("ana", 50, Some("scientist")),
            row("leo", 70, Some("engineer")),
            row("mia", 90, Some("scientist")),
        ];

        let stats = app.admin_stats();
        assert_eq!(stats.total_participants, 3);
        assert_eq!(stats.average_score, 70);
        assert_eq!(stats.max_score, 90);
        assert_eq!(stats.top_career.as_deref(), Some("scientist"));
        assert_eq!(stats.average_label(), "70/90");
    }

    #[test]
    fn stats_handle_no_submissions() {
        let app = QuizApp::new();
        let stats = app.admin_stats();
        assert_eq!(stats.total_participants, 0);
        assert_eq!(stats.average_score, 0);
        assert!(stats.top_career.is_none());
        assert_eq!(stats.top_career_label(), "-");
    }
}
