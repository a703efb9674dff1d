//! Diagnostic types for the generation pipeline.
//!
//! Declaration-level problems never abort a run; they are collected as
//! diagnostics and the offending declaration is dropped from the affected
//! output.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The declaration was dropped from (some of) the output.
    Error,
    /// Generation proceeded with a documented fallback.
    Warning,
    /// Informational message about the generation process.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a pipeline phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The phase that produced this diagnostic (`read`, `lint`, `map`).
    pub phase: String,
    /// Stable rule identifier (e.g., `missing-handle-slot`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    /// The diagnostic message.
    pub message: String,
    /// Optional location (source file path or declaration name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            code: None,
            message: message.into(),
            location: None,
        }
    }

    /// Attach a rule identifier.
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Record this diagnostic as a debug tracing event.
    ///
    /// Users see diagnostics through the command reports; the event only
    /// places them in the trace next to the round that produced them.
    pub fn log(&self) {
        tracing::debug!(
            severity = %self.severity,
            phase = %self.phase,
            code = self.code.unwrap_or("-"),
            location = self.location.as_deref().unwrap_or("-"),
            "{}",
            self.message
        );
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// Count helpers over a diagnostic list.
pub trait DiagnosticsExt {
    fn has_errors(&self) -> bool;
    fn error_count(&self) -> usize;
    fn warning_count(&self) -> usize;
}

impl DiagnosticsExt for [Diagnostic] {
    fn has_errors(&self) -> bool {
        self.iter().any(|d| d.severity.is_error())
    }

    fn error_count(&self) -> usize {
        self.iter().filter(|d| d.severity.is_error()).count()
    }

    fn warning_count(&self) -> usize {
        self.iter().filter(|d| d.severity.is_warning()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("read", "ShowMap: does not support non-stub declarations");
        assert!(diag.severity.is_error());
        assert_eq!(diag.phase, "read");
        assert_eq!(diag.code, None);
    }

    #[test]
    fn test_display_with_code_and_location() {
        let diag = Diagnostic::warning("read", "no handle slot")
            .with_code("missing-handle-slot")
            .at("src/ShowMap.kt");
        assert_eq!(
            diag.to_string(),
            "warning[missing-handle-slot]: no handle slot (at src/ShowMap.kt)"
        );
    }

    #[test]
    fn test_counts() {
        let diags = vec![
            Diagnostic::error("read", "a"),
            Diagnostic::warning("read", "b"),
            Diagnostic::warning("lint", "c"),
            Diagnostic::info("read", "d"),
        ];
        assert!(diags.has_errors());
        assert_eq!(diags.error_count(), 1);
        assert_eq!(diags.warning_count(), 2);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_value(Diagnostic::warning("lint", "x")).unwrap();
        assert_eq!(json["severity"], "warning");
        assert!(json.get("code").is_none());
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged_at(level: tracing::Level, diagnostic: &Diagnostic) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || diagnostic.log());
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_log_is_silent_at_default_level() {
        let diag = Diagnostic::error("read", "ShowMap: does not support non-stub declarations")
            .with_code("not-stub");
        assert_eq!(logged_at(tracing::Level::WARN, &diag), "");

        let traced = logged_at(tracing::Level::DEBUG, &diag);
        assert!(traced.contains("does not support non-stub declarations"));
        assert!(traced.contains("severity=error"));
    }
}
