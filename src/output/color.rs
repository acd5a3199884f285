use std::io::{self, IsTerminal, Write};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

pub struct ColorWriter {
    buffer: Buffer,
    no_color: bool,
}

impl ColorWriter {
    /// Colors are used only when not disabled by flag or `NO_COLOR`, and
    /// stdout is a terminal.
    pub fn new(no_color: bool) -> Self {
        let colors_enabled =
            !no_color && std::env::var("NO_COLOR").is_err() && io::stdout().is_terminal();

        Self {
            buffer: Buffer::ansi(),
            no_color: !colors_enabled,
        }
    }

    /// Get the buffer contents as a string
    pub fn into_string(self) -> Result<String, std::io::Error> {
        String::from_utf8(self.buffer.into_inner())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    fn styled(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        if !self.no_color {
            self.buffer.set_color(spec)?;
        }
        write!(self.buffer, "{}", text)?;
        if !self.no_color {
            self.buffer.reset()?;
        }
        Ok(())
    }

    pub fn print_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color));
        self.styled(text, &spec)
    }

    pub fn print_bold(&mut self, text: &str) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        self.styled(text, &spec)
    }

    /// Heading followed by an `=` underline of the same length.
    pub fn print_header(&mut self, text: &str) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan)).set_bold(true);
        self.styled(text, &spec)?;
        writeln!(self.buffer)?;
        writeln!(self.buffer, "{}", "=".repeat(text.chars().count()))?;
        writeln!(self.buffer)
    }

    /// `label:` padded to `width`, then the value.
    pub fn print_field(&mut self, label: &str, value: &str, width: usize) -> io::Result<()> {
        let label = format!("{:<width$}", format!("{}:", label), width = width);
        self.print_colored(&label, Color::Blue)?;
        writeln!(self.buffer, "{}", value)
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.buffer, "{}", text)
    }

    pub fn writeln(&mut self) -> io::Result<()> {
        writeln!(self.buffer)
    }
}
