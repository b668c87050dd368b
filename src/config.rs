//! Carga y gestión de configuración del cliente (API remota + presentación).

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TYPING_MS: u64 = 10;

/// Estrategia con la que se muestran los resultados.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Texto plano revelado carácter a carácter.
    Typewriter,
    /// Bloques con encabezado y lista de atributos, sin animación.
    Structured,
}

impl Presentation {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "escritura" | "typewriter" => Ok(Self::Typewriter),
            "estructurada" | "structured" => Ok(Self::Structured),
            other => Err(anyhow!("Modo de presentación no soportado: {other}")),
        }
    }
}

/// Configuración completa del cliente.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub base_url: Url,
    pub presentation: Presentation,
    pub typing_interval: Duration,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno (usando .env si existe).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda de claves.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url =
            lookup("AHORRO_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&raw_url)?;

        let presentation = match lookup("AHORRO_PRESENTACION") {
            Some(value) => Presentation::from_str(&value)?,
            None => Presentation::Typewriter,
        };

        let typing_ms = match lookup("AHORRO_VELOCIDAD_MS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("AHORRO_VELOCIDAD_MS no es un número válido: {value}"))?,
            None => DEFAULT_TYPING_MS,
        };

        Ok(Self {
            base_url,
            presentation,
            typing_interval: Duration::from_millis(typing_ms),
        })
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("AHORRO_API_BASE_URL no es una URL válida: {raw}"))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("La URL base no admite rutas: {raw}"));
    }
    Ok(url)
}
