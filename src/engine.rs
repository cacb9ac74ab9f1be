use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Catalog, CareerPrediction, CareerType, LogicalQuestion, PersonalityQuestion, QuizPhase};

/// Puntos por cada pregunta lógica acertada.
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("operación no válida en la fase {actual:?}, se esperaba {expected:?}")]
    WrongPhase { expected: QuizPhase, actual: QuizPhase },
    #[error("la pregunta {got} no es la pregunta activa ({current})")]
    QuestionMismatch { current: String, got: String },
    #[error("la opción {option} no pertenece a la pregunta {question}")]
    UnknownOption { question: String, option: String },
}

/// Estado mutable de una sesión. Lo posee el motor en exclusiva y se
/// descarta entero en cada `reset`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct QuizState {
    pub phase: QuizPhase,
    pub personality_index: usize,
    pub logical_index: usize,
    // Pares (pregunta, opción) en orden de envío. El desempate de la
    // predicción depende de ese orden, así que nada de HashMap aquí.
    pub personality_answers: Vec<(String, String)>,
    pub logical_answers: Vec<(String, String)>,
    pub logical_score: u32,
    pub prediction: Option<CareerPrediction>,
}

/// Máquina de estados del quiz: fases, respuestas, puntuación y predicción.
/// Todas las operaciones son síncronas y dejan el estado intacto si fallan.
pub struct QuizEngine {
    catalog: Catalog,
    state: QuizState,
    phase_changes: Vec<(QuizPhase, QuizPhase)>,
}

impl QuizEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: QuizState::default(),
            phase_changes: Vec::new(),
        }
    }

    /// Arranca el bloque de personalidad. Solo desde `Welcome`.
    pub fn start(&mut self) -> Result<(), EngineError> {
        self.expect_phase(QuizPhase::Welcome)?;
        self.transition(QuizPhase::Personality);
        Ok(())
    }

    /// Registra la respuesta a la pregunta de personalidad activa y avanza.
    /// Al responder la última, calcula la predicción y pasa a `Transition`
    /// en el mismo paso.
    pub fn answer_personality(&mut self, question_id: &str, option_id: &str) -> Result<(), EngineError> {
        self.expect_phase(QuizPhase::Personality)?;
        let question = &self.catalog.personality[self.state.personality_index];
        if question.id != question_id {
            return Err(EngineError::QuestionMismatch {
                current: question.id.clone(),
                got: question_id.to_string(),
            });
        }
        if !question.options.iter().any(|o| o.id == option_id) {
            return Err(EngineError::UnknownOption {
                question: question.id.clone(),
                option: option_id.to_string(),
            });
        }

        record_answer(&mut self.state.personality_answers, question_id, option_id);
        self.state.personality_index += 1;

        if self.state.personality_index >= self.catalog.personality.len() {
            let career = predict_career(&self.catalog, &self.state.personality_answers);
            self.state.prediction = self.catalog.prediction_for(career).cloned();
            self.transition(QuizPhase::Transition);
        }
        Ok(())
    }

    /// Arranca el bloque lógico. Solo desde `Transition`.
    pub fn start_logical(&mut self) -> Result<(), EngineError> {
        self.expect_phase(QuizPhase::Transition)?;
        self.transition(QuizPhase::Logical);
        Ok(())
    }

    /// Registra la respuesta lógica activa, suma puntos si es correcta y
    /// avanza; tras la última pasa a `Result`.
    pub fn answer_logical(&mut self, question_id: &str, option_id: &str) -> Result<(), EngineError> {
        self.expect_phase(QuizPhase::Logical)?;
        let question = &self.catalog.logical[self.state.logical_index];
        if question.id != question_id {
            return Err(EngineError::QuestionMismatch {
                current: question.id.clone(),
                got: question_id.to_string(),
            });
        }
        let option = question
            .options
            .iter()
            .find(|o| o.id == option_id)
            .ok_or_else(|| EngineError::UnknownOption {
                question: question.id.clone(),
                option: option_id.to_string(),
            })?;

        if option.correct {
            self.state.logical_score += POINTS_PER_CORRECT;
        }
        record_answer(&mut self.state.logical_answers, question_id, option_id);
        self.state.logical_index += 1;

        if self.state.logical_index >= self.catalog.logical.len() {
            self.transition(QuizPhase::Result);
        }
        Ok(())
    }

    /// Vuelve a `Welcome` con todo a cero. Válido desde cualquier fase.
    pub fn reset(&mut self) {
        let from = self.state.phase;
        self.state = QuizState::default();
        if from != QuizPhase::Welcome {
            self.phase_changes.push((from, QuizPhase::Welcome));
        }
    }

    /// Transiciones pendientes (origen, destino) desde la última llamada.
    /// La capa de presentación las drena para cronómetro, logs, etc.
    pub fn take_phase_changes(&mut self) -> Vec<(QuizPhase, QuizPhase)> {
        std::mem::take(&mut self.phase_changes)
    }

    // Vistas derivadas (calculadas, nunca almacenadas)

    pub fn phase(&self) -> QuizPhase {
        self.state.phase
    }

    pub fn current_personality_question(&self) -> Option<&PersonalityQuestion> {
        self.catalog.personality.get(self.state.personality_index)
    }

    pub fn current_logical_question(&self) -> Option<&LogicalQuestion> {
        self.catalog.logical.get(self.state.logical_index)
    }

    pub fn personality_index(&self) -> usize {
        self.state.personality_index
    }

    pub fn logical_index(&self) -> usize {
        self.state.logical_index
    }

    pub fn total_personality(&self) -> usize {
        self.catalog.personality.len()
    }

    pub fn total_logical(&self) -> usize {
        self.catalog.logical.len()
    }

    pub fn logical_score(&self) -> u32 {
        self.state.logical_score
    }

    pub fn max_logical_score(&self) -> u32 {
        self.catalog.logical.len() as u32 * POINTS_PER_CORRECT
    }

    pub fn prediction(&self) -> Option<&CareerPrediction> {
        self.state.prediction.as_ref()
    }

    pub fn personality_answers(&self) -> &[(String, String)] {
        &self.state.personality_answers
    }

    pub fn logical_answers(&self) -> &[(String, String)] {
        &self.state.logical_answers
    }

    fn expect_phase(&self, expected: QuizPhase) -> Result<(), EngineError> {
        if self.state.phase != expected {
            return Err(EngineError::WrongPhase {
                expected,
                actual: self.state.phase,
            });
        }
        Ok(())
    }

    fn transition(&mut self, to: QuizPhase) {
        let from = self.state.phase;
        self.state.phase = to;
        self.phase_changes.push((from, to));
    }
}

/// Voto por pluralidad sobre las respuestas registradas, en orden de envío.
/// Los recuentos se acumulan en orden de primera aparición y gana el primero
/// en alcanzar el máximo; los empates posteriores no lo desbancan.
pub fn predict_career(catalog: &Catalog, answers: &[(String, String)]) -> CareerType {
    let mut tallies: Vec<(CareerType, u32)> = Vec::new();
    for (question_id, option_id) in answers {
        let career = catalog
            .personality
            .iter()
            .find(|q| &q.id == question_id)
            .and_then(|q| q.options.iter().find(|o| &o.id == option_id))
            .map(|o| o.career);
        let Some(career) = career else { continue };
        match tallies.iter_mut().find(|(c, _)| *c == career) {
            Some((_, n)) => *n += 1,
            None => tallies.push((career, 1)),
        }
    }

    // Sin respuestas no hay voto: científico por defecto.
    let mut best = CareerType::Scientist;
    let mut best_count = 0;
    for (career, count) in tallies {
        if count > best_count {
            best = career;
            best_count = count;
        }
    }
    best
}

fn record_answer(answers: &mut Vec<(String, String)>, question_id: &str, option_id: &str) {
    match answers.iter_mut().find(|(q, _)| q == question_id) {
        Some((_, chosen)) => *chosen = option_id.to_string(),
        None => answers.push((question_id.to_string(), option_id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_catalog_embedded;
    use crate::model::{PersonalityOption, PersonalityQuestion};

    fn engine() -> QuizEngine {
        QuizEngine::new(read_catalog_embedded())
    }

    /// Catálogo sintético donde cada pregunta ofrece las cuatro etiquetas
    /// necesarias para forzar una secuencia concreta de votos.
    fn catalog_with_tags(per_question: &[[CareerType; 4]]) -> Catalog {
        let mut catalog = read_catalog_embedded();
        catalog.personality = per_question
            .iter()
            .enumerate()
            .map(|(qi, tags)| PersonalityQuestion {
                id: format!("p{}", qi + 1),
                prompt: format!("pregunta {}", qi + 1),
                options: tags
                    .iter()
                    .enumerate()
                    .map(|(oi, career)| PersonalityOption {
                        id: ((b'a' + oi as u8) as char).to_string(),
                        text: format!("opción {oi}"),
                        career: *career,
                    })
                    .collect(),
            })
            .collect();
        catalog
    }

    /// Responde la fase de personalidad eligiendo en cada pregunta la primera
    /// opción con la etiqueta pedida.
    fn answer_with_tags(engine: &mut QuizEngine, tags: &[CareerType]) {
        for tag in tags {
            let (qid, oid) = {
                let q = engine.current_personality_question().unwrap();
                let o = q.options.iter().find(|o| o.career == *tag).unwrap();
                (q.id.clone(), o.id.clone())
            };
            engine.answer_personality(&qid, &oid).unwrap();
        }
    }

    fn answer_first_option(engine: &mut QuizEngine) {
        let (qid, oid) = {
            let q = engine.current_personality_question().unwrap();
            (q.id.clone(), q.options[0].id.clone())
        };
        engine.answer_personality(&qid, &oid).unwrap();
    }

    /// Responde la pregunta lógica activa, bien o mal según `correctly`.
    fn answer_logical(engine: &mut QuizEngine, correctly: bool) {
        let (qid, oid) = {
            let q = engine.current_logical_question().unwrap();
            let o = q
                .options
                .iter()
                .find(|o| o.correct == correctly)
                .unwrap();
            (q.id.clone(), o.id.clone())
        };
        engine.answer_logical(&qid, &oid).unwrap();
    }

    #[test]
    fn full_run_walks_phases_in_order() {
        let mut engine = engine();
        assert_eq!(engine.phase(), QuizPhase::Welcome);

        engine.start().unwrap();
        assert_eq!(engine.phase(), QuizPhase::Personality);

        for i in 0..engine.total_personality() {
            assert_eq!(engine.personality_index(), i);
            answer_first_option(&mut engine);
        }
        assert_eq!(engine.phase(), QuizPhase::Transition);

        engine.start_logical().unwrap();
        assert_eq!(engine.phase(), QuizPhase::Logical);

        for _ in 0..engine.total_logical() {
            assert_eq!(engine.phase(), QuizPhase::Logical);
            answer_logical(&mut engine, true);
        }
        assert_eq!(engine.phase(), QuizPhase::Result);

        let changes = engine.take_phase_changes();
        assert_eq!(
            changes,
            vec![
                (QuizPhase::Welcome, QuizPhase::Personality),
                (QuizPhase::Personality, QuizPhase::Transition),
                (QuizPhase::Transition, QuizPhase::Logical),
                (QuizPhase::Logical, QuizPhase::Result),
            ]
        );
    }

    #[test]
    fn strict_majority_wins_prediction() {
        use CareerType::*;
        let tags = [Scientist, Scientist, Engineer, Scientist, Engineer, Doctor];
        let catalog = catalog_with_tags(&[
            [Scientist, Engineer, Doctor, Artist]; 6
        ]);
        let mut engine = QuizEngine::new(catalog);
        engine.start().unwrap();
        answer_with_tags(&mut engine, &tags);

        assert_eq!(engine.phase(), QuizPhase::Transition);
        assert_eq!(engine.prediction().unwrap().career, Scientist);
    }

    #[test]
    fn tie_goes_to_first_tag_reaching_the_maximum() {
        use CareerType::*;
        // Recuento 2-2-1-1: gana engineer porque su recuento llega antes.
        let tags = [Engineer, Artist, Engineer, Artist, Doctor, Leader];
        let catalog = catalog_with_tags(&[
            [Engineer, Artist, Doctor, Leader]; 6
        ]);
        let mut engine = QuizEngine::new(catalog);
        engine.start().unwrap();
        answer_with_tags(&mut engine, &tags);

        assert_eq!(engine.prediction().unwrap().career, Engineer);
    }

    #[test]
    fn prediction_defaults_to_scientist_without_answers() {
        let catalog = read_catalog_embedded();
        assert_eq!(predict_career(&catalog, &[]), CareerType::Scientist);
    }

    #[test]
    fn five_correct_of_nine_scores_fifty() {
        let mut engine = engine();
        engine.start().unwrap();
        for _ in 0..engine.total_personality() {
            answer_first_option(&mut engine);
        }
        engine.start_logical().unwrap();

        for _ in 0..5 {
            answer_logical(&mut engine, true);
        }
        for _ in 0..4 {
            answer_logical(&mut engine, false);
        }

        assert_eq!(engine.phase(), QuizPhase::Result);
        assert_eq!(engine.logical_score(), 50);
    }

    #[test]
    fn score_is_bounded_multiple_of_ten() {
        let mut engine = engine();
        engine.start().unwrap();
        for _ in 0..engine.total_personality() {
            answer_first_option(&mut engine);
        }
        engine.start_logical().unwrap();
        for _ in 0..engine.total_logical() {
            answer_logical(&mut engine, true);
        }
        assert_eq!(engine.logical_score(), engine.max_logical_score());
        assert_eq!(engine.logical_score() % POINTS_PER_CORRECT, 0);
        assert_eq!(engine.max_logical_score(), 90);
    }

    #[test]
    fn last_personality_answer_records_predicts_and_transitions_atomically() {
        let mut engine = engine();
        engine.start().unwrap();
        for _ in 0..engine.total_personality() - 1 {
            answer_first_option(&mut engine);
        }
        // Penúltimo estado: sigue en personalidad y sin predicción.
        assert_eq!(engine.phase(), QuizPhase::Personality);
        assert!(engine.prediction().is_none());

        answer_first_option(&mut engine);
        assert_eq!(engine.phase(), QuizPhase::Transition);
        assert!(engine.prediction().is_some());
        assert_eq!(engine.personality_answers().len(), engine.total_personality());
    }

    #[test]
    fn reset_clears_everything_and_is_idempotent() {
        let mut engine = engine();
        engine.start().unwrap();
        for _ in 0..engine.total_personality() {
            answer_first_option(&mut engine);
        }
        engine.start_logical().unwrap();
        answer_logical(&mut engine, true);

        engine.reset();
        engine.reset();

        assert_eq!(engine.phase(), QuizPhase::Welcome);
        assert_eq!(engine.personality_index(), 0);
        assert_eq!(engine.logical_index(), 0);
        assert!(engine.personality_answers().is_empty());
        assert!(engine.logical_answers().is_empty());
        assert_eq!(engine.logical_score(), 0);
        assert!(engine.prediction().is_none());

        // Tras reiniciar se puede volver a jugar desde el principio.
        engine.start().unwrap();
        assert_eq!(engine.phase(), QuizPhase::Personality);
    }

    #[test]
    fn operations_in_wrong_phase_are_rejected_without_side_effects() {
        let mut engine = engine();

        assert!(matches!(
            engine.answer_personality("p1", "a"),
            Err(EngineError::WrongPhase { .. })
        ));
        assert!(matches!(
            engine.start_logical(),
            Err(EngineError::WrongPhase { .. })
        ));
        assert_eq!(engine.phase(), QuizPhase::Welcome);
        assert!(engine.personality_answers().is_empty());

        engine.start().unwrap();
        assert!(matches!(engine.start(), Err(EngineError::WrongPhase { .. })));
        assert!(matches!(
            engine.answer_logical("l1", "a"),
            Err(EngineError::WrongPhase { .. })
        ));
        assert_eq!(engine.phase(), QuizPhase::Personality);
    }

    #[test]
    fn stale_question_id_is_rejected() {
        let mut engine = engine();
        engine.start().unwrap();
        answer_first_option(&mut engine);

        // p1 ya no es la pregunta activa.
        let err = engine.answer_personality("p1", "a").unwrap_err();
        assert!(matches!(err, EngineError::QuestionMismatch { .. }));
        assert_eq!(engine.personality_index(), 1);
        assert_eq!(engine.personality_answers().len(), 1);
    }

    #[test]
    fn foreign_option_id_is_rejected() {
        let mut engine = engine();
        engine.start().unwrap();
        let qid = engine.current_personality_question().unwrap().id.clone();

        let err = engine.answer_personality(&qid, "zz").unwrap_err();
        assert!(matches!(err, EngineError::UnknownOption { .. }));
        assert_eq!(engine.personality_index(), 0);
        assert!(engine.personality_answers().is_empty());
    }

    #[test]
    fn record_answer_overwrites_instead_of_duplicating() {
        let mut answers = Vec::new();
        record_answer(&mut answers, "p1", "a");
        record_answer(&mut answers, "p2", "b");
        record_answer(&mut answers, "p1", "c");

        assert_eq!(
            answers,
            vec![
                ("p1".to_string(), "c".to_string()),
                ("p2".to_string(), "b".to_string()),
            ]
        );
    }
}
