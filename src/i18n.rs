//! Localization collaborator
//!
//! Pure static lookup tables. A missing key falls back to returning the key
//! itself - translation never fails.

use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    En,
    Es,
    Pt,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Pt => "pt",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }

    /// English name used when composing provider prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Pt => "Portuguese",
        }
    }
}

/// Look up a UI string; unknown keys come back verbatim
pub fn translate(key: &str, language: Language) -> &str {
    let table: &[(&str, &str)] = match language {
        Language::En => EN,
        Language::Es => ES,
        Language::Pt => PT,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, v)| v)
}

const EN: &[(&str, &str)] = &[
    ("title", "Capybara's Orange Catch"),
    ("settings", "Settings"),
    ("language", "Language"),
    ("questionPrompt", "Question Prompt"),
    (
        "promptPlaceholder",
        "e.g., Ask a simple question about animals for a 5-year-old.",
    ),
    ("saveAndStart", "Save & Start Game"),
    ("loadingAI", "Thinking of a fun question..."),
    ("submitAnswer", "Submit"),
    ("correct", "Correct!"),
    ("wrong", "Try Again!"),
    ("score", "Score"),
    ("letsPlay", "Let's Play!"),
    ("answerThisFirst", "First, answer this question:"),
    ("paused", "Game Paused"),
    ("questionTime", "Question Time!"),
    ("enableQuestions", "Enable Questions"),
];

const ES: &[(&str, &str)] = &[
    ("title", "La Cosecha de Naranjas del Capibara"),
    ("settings", "Configuración"),
    ("language", "Idioma"),
    ("questionPrompt", "Prompt para Preguntas"),
    (
        "promptPlaceholder",
        "Ej: Haz una pregunta simple sobre animales para un niño de 5 años.",
    ),
    ("saveAndStart", "Guardar y Empezar Juego"),
    ("loadingAI", "Pensando en una pregunta divertida..."),
    ("submitAnswer", "Enviar"),
    ("correct", "¡Correcto!"),
    ("wrong", "¡Inténtalo de Nuevo!"),
    ("score", "Puntos"),
    ("letsPlay", "¡A Jugar!"),
    ("answerThisFirst", "Primero, responde esta pregunta:"),
    ("paused", "Juego en Pausa"),
    ("questionTime", "¡Hora de Pregunta!"),
    ("enableQuestions", "Habilitar Preguntas"),
];

const PT: &[(&str, &str)] = &[
    ("title", "A Apanha de Laranjas da Capivara"),
    ("settings", "Configurações"),
    ("language", "Língua"),
    ("questionPrompt", "Prompt para Perguntas"),
    (
        "promptPlaceholder",
        "Ex: Faça uma pergunta simples sobre animais para uma criança de 5 anos.",
    ),
    ("saveAndStart", "Salvar e Iniciar Jogo"),
    ("loadingAI", "A pensar numa pergunta divertida..."),
    ("submitAnswer", "Enviar"),
    ("correct", "Correto!"),
    ("wrong", "Tenta de Novo!"),
    ("score", "Pontos"),
    ("letsPlay", "Vamos Jogar!"),
    ("answerThisFirst", "Primeiro, responde a esta pergunta:"),
    ("paused", "Jogo em Pausa"),
    ("questionTime", "Hora da Pergunta!"),
    ("enableQuestions", "Ativar Perguntas"),
];
