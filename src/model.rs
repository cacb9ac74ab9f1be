use serde::{Deserialize, Serialize};

/// Etiquetas de carrera. Conjunto cerrado: la predicción siempre es una de estas diez.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "camelCase")]
pub enum CareerType {
    Scientist,
    Engineer,
    Doctor,
    TechHero,
    Artist,
    Sportsperson,
    EnvironmentHero,
    Teacher,
    Leader,
    Entrepreneur,
}

impl CareerType {
    pub const ALL: [CareerType; 10] = [
        CareerType::Scientist,
        CareerType::Engineer,
        CareerType::Doctor,
        CareerType::TechHero,
        CareerType::Artist,
        CareerType::Sportsperson,
        CareerType::EnvironmentHero,
        CareerType::Teacher,
        CareerType::Leader,
        CareerType::Entrepreneur,
    ];

    /// Nombre tal y como viaja al backend ("techHero", "environmentHero", ...).
    pub fn wire_name(self) -> &'static str {
        match self {
            CareerType::Scientist => "scientist",
            CareerType::Engineer => "engineer",
            CareerType::Doctor => "doctor",
            CareerType::TechHero => "techHero",
            CareerType::Artist => "artist",
            CareerType::Sportsperson => "sportsperson",
            CareerType::EnvironmentHero => "environmentHero",
            CareerType::Teacher => "teacher",
            CareerType::Leader => "leader",
            CareerType::Entrepreneur => "entrepreneur",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PersonalityOption {
    pub id: String,
    pub text: String,
    pub career: CareerType,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PersonalityQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<PersonalityOption>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LogicalOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LogicalQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<LogicalOption>,
}

/// Ficha de predicción que se muestra en la pantalla de resultado.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CareerPrediction {
    pub career: CareerType,
    pub title: String,
    pub description: String,
    pub character: String,
    pub emoji: String,
}

/// Catálogo completo: se carga una vez al arrancar y no cambia.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Catalog {
    pub personality: Vec<PersonalityQuestion>,
    pub logical: Vec<LogicalQuestion>,
    pub predictions: Vec<CareerPrediction>,
}

impl Catalog {
    pub fn prediction_for(&self, career: CareerType) -> Option<&CareerPrediction> {
        self.predictions.iter().find(|p| p.career == career)
    }
}

/// Fases del quiz, en orden. Solo `reset` vuelve hacia atrás.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuizPhase {
    Welcome,
    Personality,
    Transition,
    Logical,
    Result,
}

impl Default for QuizPhase {
    fn default() -> Self {
        QuizPhase::Welcome
    }
}

/// Pantalla activa de la aplicación. El quiz en sí se subdivide por `QuizPhase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Quiz,
    AdminLogin,
    AdminDashboard,
}
