use std::fmt;
use std::io::Write;

use super::DiagnosticKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Note,
    Warning,
    Error,
}

/// A location in code referred to by the diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticLocation<'s> {
    pub file_name: &'s str,
    pub line_number: i32,
    pub column_number: i32,

    /// The complete text of the line, when known. Empty otherwise.
    pub line: &'s str,
}

impl<'s> fmt::Display for DiagnosticLocation<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name)?;
        if self.line_number > 0 {
            f.write_fmt(format_args!(":{}", self.line_number))?;
        }
        if self.column_number > 0 {
            f.write_fmt(format_args!(":{}", self.column_number))?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage<'s> {
    pub kind: DiagnosticKind,
    pub location: DiagnosticLocation<'s>,
    pub body: String,
}

impl<'s> fmt::Display for DiagnosticMessage<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The "alternate" flag asks for the message to be printed as an error.
        let infix = if f.alternate() { "ERROR: " } else { "" };
        f.write_fmt(format_args!("{}: {}{}", self.location, infix, self.body))
    }
}

/// A complete Diagnostic, including a main message and optional notes, plus the level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic<'s> {
    pub level: DiagnosticLevel,
    pub message: DiagnosticMessage<'s>,
    pub notes: Vec<DiagnosticMessage<'s>>,
}

impl<'s> Diagnostic<'s> {
    /// Builds a new diagnostic. Normally called by a [DiagnosticBuilder].
    pub fn new(
        level: DiagnosticLevel,
        message: DiagnosticMessage<'s>,
        notes: Vec<DiagnosticMessage<'s>>,
    ) -> Diagnostic<'s> {
        Diagnostic { level, message, notes }
    }
}

impl<'s> fmt::Display for Diagnostic<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.level == DiagnosticLevel::Error {
            writeln!(f, "{:#}", self.message)?;
        } else {
            writeln!(f, "{}", self.message)?;
        }
        if !self.message.location.line.is_empty() {
            writeln!(f, "    {}", self.message.location.line.trim_end())?;
        }
        for m in &self.notes {
            writeln!(f, "  {}", m)?;
        }
        Ok(())
    }
}

/// An interface for an object that can receive diagnostics from the toolchain as they are emitted.
pub trait DiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: Diagnostic<'_>);
    fn flush(&mut self);
}

/// Maps a subsystem-specific location, such as a token index, to a [DiagnosticLocation].
pub trait DiagnosticLocationTranslator<'s, LocationT> {
    fn get_location(&self, loc: LocationT) -> DiagnosticLocation<'s>;
}

// An adaptor between subsystems (like the tokenized buffer) and the diagnostic consumer. It
// holds the consumer and translator, facilitates creating Diagnostics, and ultimately provides
// the completed diagnostics to the DiagnosticConsumer.
pub struct DiagnosticEmitter<'c, 't, 's, LocationT> {
    consumer: &'c mut dyn DiagnosticConsumer,
    translator: &'t dyn DiagnosticLocationTranslator<'s, LocationT>,
}

impl<'c, 't, 's, LocationT> DiagnosticEmitter<'c, 't, 's, LocationT> {
    pub fn new(
        consumer: &'c mut dyn DiagnosticConsumer,
        translator: &'t dyn DiagnosticLocationTranslator<'s, LocationT>,
    ) -> DiagnosticEmitter<'c, 't, 's, LocationT> {
        DiagnosticEmitter { consumer, translator }
    }

    pub fn build(
        &self,
        level: DiagnosticLevel,
        kind: DiagnosticKind,
        location: LocationT,
        body: String,
    ) -> DiagnosticBuilder<'t, 's, LocationT> {
        DiagnosticBuilder::new(level, kind, location, body, self.translator)
    }

    pub fn emit(&mut self, diagnostic: Diagnostic<'s>) {
        self.consumer.handle_diagnostic(diagnostic);
    }
}

/// Accumulates a main message and any notes before producing a [Diagnostic].
pub struct DiagnosticBuilder<'t, 's, LocationT> {
    level: DiagnosticLevel,
    message: DiagnosticMessage<'s>,
    notes: Vec<DiagnosticMessage<'s>>,

    translator: &'t dyn DiagnosticLocationTranslator<'s, LocationT>,
}

impl<'t, 's, LocationT> DiagnosticBuilder<'t, 's, LocationT> {
    pub fn new(
        level: DiagnosticLevel,
        kind: DiagnosticKind,
        location: LocationT,
        body: String,
        translator: &'t dyn DiagnosticLocationTranslator<'s, LocationT>,
    ) -> DiagnosticBuilder<'t, 's, LocationT> {
        let location = translator.get_location(location);
        let message = DiagnosticMessage { kind, location, body };
        DiagnosticBuilder { level, message, notes: Vec::new(), translator }
    }

    pub fn note(
        mut self,
        kind: DiagnosticKind,
        location: LocationT,
        body: String,
    ) -> DiagnosticBuilder<'t, 's, LocationT> {
        let location = self.translator.get_location(location);
        self.notes.push(DiagnosticMessage { kind, location, body });
        self
    }

    pub fn build(self) -> Diagnostic<'s> {
        Diagnostic::new(self.level, self.message, self.notes)
    }
}

/// Writes every diagnostic to a stream as it arrives.
pub struct StreamDiagnosticConsumer<W: Write> {
    stream: std::io::BufWriter<W>,
}

impl<W: Write> StreamDiagnosticConsumer<W> {
    pub fn new(stream: W) -> StreamDiagnosticConsumer<W> {
        StreamDiagnosticConsumer { stream: std::io::BufWriter::new(stream) }
    }
}

impl<W: Write> DiagnosticConsumer for StreamDiagnosticConsumer<W> {
    fn handle_diagnostic(&mut self, diag: Diagnostic<'_>) {
        if let Err(e) = write!(self.stream, "{}", diag) {
            tracing::warn!(error = %e, "failed to write diagnostic");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.stream.flush() {
            tracing::warn!(error = %e, "failed to flush diagnostics");
        }
    }
}

pub fn console_diagnostic_consumer() -> StreamDiagnosticConsumer<impl Write> {
    StreamDiagnosticConsumer::new(std::io::stderr())
}

/// Drops all diagnostics. Editor highlighting normally runs with this consumer.
pub struct NullDiagnosticConsumer {}

impl DiagnosticConsumer for NullDiagnosticConsumer {
    fn handle_diagnostic(&mut self, _diag: Diagnostic<'_>) {}
    fn flush(&mut self) {}
}

/// An owned summary of a [Diagnostic], detached from the source lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectedDiagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    pub line_number: i32,
    pub column_number: i32,
    pub body: String,
}

/// Keeps a summary of every diagnostic it receives, in order.
#[derive(Default)]
pub struct CollectingDiagnosticConsumer {
    diagnostics: Vec<CollectedDiagnostic>,
}

impl CollectingDiagnosticConsumer {
    pub fn new() -> CollectingDiagnosticConsumer {
        CollectingDiagnosticConsumer::default()
    }

    pub fn diagnostics(&self) -> &[CollectedDiagnostic] {
        &self.diagnostics
    }

    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.diagnostics.iter().map(|d| d.kind).collect()
    }
}

impl DiagnosticConsumer for CollectingDiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: Diagnostic<'_>) {
        self.diagnostics.push(CollectedDiagnostic {
            level: diag.level,
            kind: diag.message.kind,
            line_number: diag.message.location.line_number,
            column_number: diag.message.location.column_number,
            body: diag.message.body,
        });
    }

    fn flush(&mut self) {}
}
