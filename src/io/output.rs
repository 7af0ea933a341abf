use crate::core::Report;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Text,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

/// Pretty-printed JSON object with two-space indentation and no trailing
/// newline.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

/// Three newline-terminated lines: path, file count, line count.
pub struct TextWriter<W: Write> {
    writer: W,
    label: String,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "Analyzing: {}", report.path)?;
        writeln!(self.writer, "{}: {}", self.label, report.file_count)?;
        writeln!(self.writer, "Total lines : {}", report.total_lines)?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    label: &str,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Text => Box::new(TextWriter::new(writer, label)),
    }
}

/// Render a report to a string in the given format.
pub fn render(report: &Report, format: OutputFormat, label: &str) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    create_writer(format, &mut buffer, label).write_report(report)?;
    Ok(String::from_utf8(buffer)?)
}
