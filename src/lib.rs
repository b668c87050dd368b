//! Cliente de terminal para la API de recomendaciones de ahorro de energía.
//!
//! Consulta la API remota, clasifica la forma de cada respuesta JSON (error,
//! vacía, chatbot, lista o recomendación única) y la muestra en un montaje de
//! resultados.

pub mod app;
pub mod config;
pub mod dispatcher;
pub mod models;
pub mod mount;
pub mod render;
pub mod typewriter;
