//! Punto de montaje de los resultados: donde el renderizador escribe.

use std::io::{self, Stdout, Write};

use tracing::debug;

/// Destino de la salida renderizada.
pub trait ResultsMount {
    /// Borra el contenido anterior y vuelve a mostrar el cursor.
    fn clear(&mut self);
    /// Añade un fragmento de texto al final.
    fn write(&mut self, fragment: &str);
    fn hide_cursor(&mut self);
    /// Quita el estado "oculto" del contenedor.
    fn reveal(&mut self);
}

/// Montaje sobre la salida estándar (o cualquier `Write`).
///
/// El terminal no tiene estado oculto: `reveal` no hace nada.
#[derive(Debug)]
pub struct TerminalMount<W: Write = Stdout> {
    out: W,
    at_line_start: bool,
}

impl TerminalMount<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalMount<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalMount<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            at_line_start: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Deja el terminal en una línea nueva tras el último render.
    pub fn finish(&mut self) {
        if !self.at_line_start {
            self.write("\n");
        }
    }
}

impl<W: Write> ResultsMount for TerminalMount<W> {
    fn clear(&mut self) {}

    fn write(&mut self, fragment: &str) {
        if let Err(e) = self
            .out
            .write_all(fragment.as_bytes())
            .and_then(|_| self.out.flush())
        {
            debug!("No se pudo escribir en la salida: {}", e);
        }
        if let Some(last) = fragment.chars().last() {
            self.at_line_start = last == '\n';
        }
    }

    fn hide_cursor(&mut self) {}

    fn reveal(&mut self) {}
}

/// Montaje en memoria; guarda el texto y el estado visible del contenedor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryMount {
    pub content: String,
    pub hidden: bool,
    pub cursor_visible: bool,
    pub writes: usize,
}

impl Default for MemoryMount {
    fn default() -> Self {
        Self {
            content: String::new(),
            hidden: true,
            cursor_visible: false,
            writes: 0,
        }
    }
}

impl MemoryMount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultsMount for MemoryMount {
    fn clear(&mut self) {
        self.content.clear();
        self.cursor_visible = true;
        self.writes = 0;
    }

    fn write(&mut self, fragment: &str) {
        self.content.push_str(fragment);
        self.writes += 1;
    }

    fn hide_cursor(&mut self) {
        self.cursor_visible = false;
    }

    fn reveal(&mut self) {
        self.hidden = false;
    }
}
