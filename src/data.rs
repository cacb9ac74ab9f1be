// src/data.rs

use crate::model::{Catalog, CareerType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("YAML del catálogo inválido: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("el catálogo no tiene preguntas de {0}")]
    EmptySection(&'static str),
    #[error("id de pregunta duplicado: {0}")]
    DuplicateQuestionId(String),
    #[error("id de opción duplicado en la pregunta {question}: {option}")]
    DuplicateOptionId { question: String, option: String },
    #[error("la pregunta {id} tiene {got} opciones, se esperaban 4")]
    WrongOptionCount { id: String, got: usize },
    #[error("la pregunta lógica {id} tiene {got} opciones correctas, se esperaba exactamente 1")]
    WrongCorrectCount { id: String, got: usize },
    #[error("falta la predicción para la carrera {0:?}")]
    MissingPrediction(CareerType),
    #[error("predicción duplicada para la carrera {0:?}")]
    DuplicatePrediction(CareerType),
}

/// Carga el catálogo desde el YAML embebido. Falla al arrancar si los datos
/// no pasan la validación: mejor morir aquí que puntuar mal en silencio.
pub fn read_catalog_embedded() -> Catalog {
    let file_content = include_str!("data/career_quiz.yaml");
    parse_catalog(file_content).expect("No se pudo cargar el catálogo del quiz")
}

pub fn parse_catalog(yaml: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_yaml::from_str(yaml)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    if catalog.personality.is_empty() {
        return Err(CatalogError::EmptySection("personalidad"));
    }
    if catalog.logical.is_empty() {
        return Err(CatalogError::EmptySection("lógica"));
    }

    let mut seen_questions = Vec::new();
    for q in &catalog.personality {
        check_question(&mut seen_questions, &q.id, q.options.len())?;
        check_option_ids(&q.id, q.options.iter().map(|o| o.id.as_str()))?;
    }
    for q in &catalog.logical {
        check_question(&mut seen_questions, &q.id, q.options.len())?;
        check_option_ids(&q.id, q.options.iter().map(|o| o.id.as_str()))?;
        let correct = q.options.iter().filter(|o| o.correct).count();
        if correct != 1 {
            return Err(CatalogError::WrongCorrectCount {
                id: q.id.clone(),
                got: correct,
            });
        }
    }

    // Toda etiqueta debe tener exactamente una ficha de predicción.
    for career in CareerType::ALL {
        let count = catalog
            .predictions
            .iter()
            .filter(|p| p.career == career)
            .count();
        match count {
            0 => return Err(CatalogError::MissingPrediction(career)),
            1 => {}
            _ => return Err(CatalogError::DuplicatePrediction(career)),
        }
    }

    Ok(())
}

fn check_question(seen: &mut Vec<String>, id: &str, options: usize) -> Result<(), CatalogError> {
    if seen.iter().any(|s| s == id) {
        return Err(CatalogError::DuplicateQuestionId(id.to_string()));
    }
    seen.push(id.to_string());
    if options != 4 {
        return Err(CatalogError::WrongOptionCount {
            id: id.to_string(),
            got: options,
        });
    }
    Ok(())
}

fn check_option_ids<'a>(
    question: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(CatalogError::DuplicateOptionId {
                question: question.to_string(),
                option: id.to_string(),
            });
        }
        seen.push(id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads_and_validates() {
        let catalog = read_catalog_embedded();
        assert_eq!(catalog.personality.len(), 6);
        assert_eq!(catalog.logical.len(), 9);
        assert_eq!(catalog.predictions.len(), 10);
    }

    #[test]
    fn every_career_resolves_to_a_prediction() {
        let catalog = read_catalog_embedded();
        for career in CareerType::ALL {
            let prediction = catalog.prediction_for(career).unwrap();
            assert_eq!(prediction.career, career);
            assert!(!prediction.title.is_empty());
        }
    }

    #[test]
    fn rejects_logical_question_without_correct_option() {
        let yaml = r#"
personality:
  - id: p1
    prompt: "?"
    options:
      - { id: a, text: "a", career: scientist }
      - { id: b, text: "b", career: engineer }
      - { id: c, text: "c", career: doctor }
      - { id: d, text: "d", career: artist }
logical:
  - id: l1
    prompt: "?"
    options:
      - { id: a, text: "a" }
      - { id: b, text: "b" }
      - { id: c, text: "c" }
      - { id: d, text: "d" }
predictions: []
"#;
        match parse_catalog(yaml) {
            Err(CatalogError::WrongCorrectCount { id, got }) => {
                assert_eq!(id, "l1");
                assert_eq!(got, 0);
            }
            other => panic!("se esperaba WrongCorrectCount, fue {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_question_ids() {
        let yaml = r#"
personality:
  - id: p1
    prompt: "?"
    options:
      - { id: a, text: "a", career: scientist }
      - { id: b, text: "b", career: engineer }
      - { id: c, text: "c", career: doctor }
      - { id: d, text: "d", career: artist }
  - id: p1
    prompt: "otra vez"
    options:
      - { id: a, text: "a", career: scientist }
      - { id: b, text: "b", career: engineer }
      - { id: c, text: "c", career: doctor }
      - { id: d, text: "d", career: artist }
logical:
  - id: l1
    prompt: "?"
    options:
      - { id: a, text: "a", correct: true }
      - { id: b, text: "b" }
      - { id: c, text: "c" }
      - { id: d, text: "d" }
predictions: []
"#;
        assert!(matches!(
            parse_catalog(yaml),
            Err(CatalogError::DuplicateQuestionId(id)) if id == "p1"
        ));
    }

    #[test]
    fn rejects_wrong_option_count() {
        let yaml = r#"
personality:
  - id: p1
    prompt: "?"
    options:
      - { id: a, text: "a", career: scientist }
logical:
  - id: l1
    prompt: "?"
    options:
      - { id: a, text: "a", correct: true }
      - { id: b, text: "b" }
      - { id: c, text: "c" }
      - { id: d, text: "d" }
predictions: []
"#;
        assert!(matches!(
            parse_catalog(yaml),
            Err(CatalogError::WrongOptionCount { got: 1, .. })
        ));
    }

    #[test]
    fn rejects_unknown_career_tag() {
        // Etiqueta fuera del conjunto cerrado: debe fallar ya en el parseo.
        let yaml = r#"
personality:
  - id: p1
    prompt: "?"
    options:
      - { id: a, text: "a", career: astronaut }
      - { id: b, text: "b", career: engineer }
      - { id: c, text: "c", career: doctor }
      - { id: d, text: "d", career: artist }
logical: []
predictions: []
"#;
        assert!(matches!(parse_catalog(yaml), Err(CatalogError::Parse(_))));
    }
}
