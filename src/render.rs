//! Renderizado de resultados.
//!
//! Cada `QueryResult` se proyecta primero en una `View` común; las dos
//! presentaciones (escritura animada y bloques estructurados) parten de esa
//! misma proyección, así que comparten clasificación y filtrado.

use std::time::Duration;

use serde_json::Value;

use crate::{
    config::{AppConfig, Presentation},
    models::{Attribute, Item, QueryResult, NO_RESULTS_MESSAGE},
    mount::ResultsMount,
    typewriter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Título principal (recomendación única).
    Main,
    /// Subtítulo (cada elemento de una lista o del chatbot).
    Sub,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Texto libre de la respuesta del chatbot.
    Answer(String),
    Entry {
        title: String,
        level: Level,
        attributes: Vec<Attribute>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Message(String),
    Blocks(Vec<Block>),
}

pub fn project(result: &QueryResult) -> View {
    match result {
        QueryResult::Empty => View::Message(NO_RESULTS_MESSAGE.to_string()),
        QueryResult::Error(err) => View::Message(format!("Error: {}", err.error)),
        QueryResult::Chatbot(answer) => {
            let mut blocks = vec![Block::Answer(answer.respuesta.clone())];
            blocks.extend(answer.recomendaciones.iter().map(|i| entry(i, Level::Sub)));
            View::Blocks(blocks)
        }
        QueryResult::List(items) => {
            View::Blocks(items.iter().map(|i| entry(i, Level::Sub)).collect())
        }
        QueryResult::Single(item) => View::Blocks(vec![entry(item, Level::Main)]),
    }
}

fn entry(item: &Item, level: Level) -> Block {
    Block::Entry {
        title: item.name(),
        level,
        attributes: item.display_attributes(),
    }
}

/// Texto plano que revela la escritura animada.
pub fn transcript(view: &View) -> String {
    let blocks = match view {
        View::Message(message) => return message.clone(),
        View::Blocks(blocks) => blocks,
    };

    let mut text = String::new();
    for block in blocks {
        match block {
            Block::Answer(answer) => {
                text.push_str(answer);
                text.push_str("\n\n");
            }
            Block::Entry {
                title,
                level,
                attributes,
            } => {
                text.push_str(title);
                text.push('\n');
                for attribute in attributes {
                    text.push_str("- ");
                    text.push_str(&attribute.value);
                    text.push('\n');
                }
                if *level == Level::Sub {
                    text.push('\n');
                }
            }
        }
    }
    text
}

/// Bloques con encabezado y lista de atributos `clave: valor`.
pub fn structured(view: &View) -> String {
    let blocks = match view {
        View::Message(message) => return format!("{message}\n"),
        View::Blocks(blocks) => blocks,
    };

    let sections: Vec<String> = blocks
        .iter()
        .map(|block| match block {
            Block::Answer(answer) => format!("» {answer}\n"),
            Block::Entry {
                title,
                level,
                attributes,
            } => {
                let marker = match level {
                    Level::Main => "#",
                    Level::Sub => "##",
                };
                let mut section = format!("{marker} {title}\n");
                for attribute in attributes {
                    section.push_str(&format!("  • {}: {}\n", attribute.key, attribute.value));
                }
                section
            }
        })
        .collect();
    sections.join("\n")
}

/// Renderizador de resultados; no hace E/S de red y nunca falla.
#[derive(Debug, Clone)]
pub struct Renderer {
    presentation: Presentation,
    typing_interval: Duration,
}

impl Renderer {
    pub fn new(presentation: Presentation, typing_interval: Duration) -> Self {
        Self {
            presentation,
            typing_interval,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(cfg.presentation, cfg.typing_interval)
    }

    pub async fn render<M>(&self, result: &QueryResult, mount: &mut M)
    where
        M: ResultsMount + ?Sized,
    {
        let view = project(result);
        match self.presentation {
            Presentation::Typewriter => {
                typewriter::type_into(mount, &transcript(&view), self.typing_interval).await;
            }
            Presentation::Structured => {
                mount.clear();
                mount.write(&structured(&view));
                mount.hide_cursor();
            }
        }
        // Visible siempre, también para errores y "sin resultados".
        mount.reveal();
    }

    /// Clasifica un payload sin procesar y lo renderiza.
    pub async fn render_payload<M>(&self, payload: Value, mount: &mut M)
    where
        M: ResultsMount + ?Sized,
    {
        self.render(&QueryResult::from_payload(payload), mount).await;
    }
}
