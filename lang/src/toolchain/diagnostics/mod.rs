//! Tools for the production and management of diagnostic feedback from the toolchain.
//!
//! The lexer never fails. Anything it finds questionable in the input, such as an unterminated
//! string or a run of characters it does not recognize, is still covered by a token and styled,
//! and is additionally reported here as a [Diagnostic] for hosts that want to surface it.
//!
//! Toolchain code constructs a [Diagnostic] either directly, or by using a [DiagnosticEmitter]
//! that translates domain-specific locations (for example a token index) with the use of a
//! [DiagnosticLocationTranslator], and then hands it to a [DiagnosticConsumer].
//!

pub mod diagnostic_emitter;
pub mod diagnostic_kind;

pub use diagnostic_emitter::CollectedDiagnostic;
pub use diagnostic_emitter::CollectingDiagnosticConsumer;
pub use diagnostic_emitter::Diagnostic;
pub use diagnostic_emitter::DiagnosticBuilder;
pub use diagnostic_emitter::DiagnosticConsumer;
pub use diagnostic_emitter::DiagnosticEmitter;
pub use diagnostic_emitter::DiagnosticLevel;
pub use diagnostic_emitter::DiagnosticLocation;
pub use diagnostic_emitter::DiagnosticLocationTranslator;
pub use diagnostic_emitter::NullDiagnosticConsumer;
pub use diagnostic_emitter::StreamDiagnosticConsumer;
pub use diagnostic_kind::DiagnosticKind;
pub use diagnostic_kind::LexerDiagnosticKind;

#[cfg(test)]
mod diagnostic_emitter_unittests;
