//! Source formatting.
//!
//! Formatting is best-effort: [`CodeFormatter::format`] never fails and
//! falls back to the unformatted text, logging a warning.

use crate::error::{CodegenError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::process::{Command, Stdio};

/// Language of a payload, selecting the formatter's parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Tsx,
    Js,
    Css,
    Json,
    /// Mini-program markup, which general-purpose formatters don't parse.
    Markup,
}

/// Canonicalizes emitted source.
pub trait CodeFormatter: Send + Sync {
    /// Formatter name, for diagnostics.
    fn name(&self) -> &str;

    /// Format `source`, reporting failures.
    fn try_format(&self, source: &str, dialect: Dialect) -> Result<String>;

    /// Format `source`, returning it unchanged on failure.
    fn format(&self, source: &str, dialect: Dialect) -> String {
        match self.try_format(source, dialect) {
            Ok(formatted) => formatted,
            Err(err) => {
                tracing::warn!(formatter = self.name(), %err, "formatting failed, keeping unformatted output");
                source.to_string()
            }
        }
    }
}

/// Whitespace canonicalization: no trailing spaces, no runs of blank lines,
/// exactly one final newline.
///
/// Markup is passed through untouched, since whitespace inside a text
/// element is part of its content.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalFormatter;

impl CodeFormatter for CanonicalFormatter {
    fn name(&self) -> &str {
        "canonical"
    }

    fn try_format(&self, source: &str, dialect: Dialect) -> Result<String> {
        if dialect == Dialect::Markup {
            return Ok(source.to_string());
        }

        let mut out = String::with_capacity(source.len() + 1);
        let mut blank_run = false;

        for line in source.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                blank_run = !out.is_empty();
                continue;
            }
            if blank_run {
                out.push('\n');
                blank_run = false;
            }
            out.push_str(line);
            out.push('\n');
        }

        Ok(out)
    }
}

/// Pipes source through an external formatter binary.
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
    parser_flag: Option<String>,
}

impl CommandFormatter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            parser_flag: None,
        }
    }

    /// Prettier, with the settings generated code is expected to follow.
    pub fn prettier() -> Self {
        let args = [
            "--single-quote",
            "--trailing-comma",
            "es5",
            "--tab-width",
            "2",
            "--print-width",
            "100",
        ];
        Self {
            program: "prettier".to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            parser_flag: Some("--parser".to_string()),
        }
    }

    fn parser(dialect: Dialect) -> Option<&'static str> {
        match dialect {
            Dialect::Tsx => Some("babel-ts"),
            Dialect::Js => Some("babel"),
            Dialect::Css => Some("css"),
            Dialect::Json => Some("json"),
            Dialect::Markup => None,
        }
    }
}

impl CodeFormatter for CommandFormatter {
    fn name(&self) -> &str {
        &self.program
    }

    fn try_format(&self, source: &str, dialect: Dialect) -> Result<String> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(flag) = &self.parser_flag {
            match Self::parser(dialect) {
                Some(parser) => {
                    command.arg(flag).arg(parser);
                }
                None => return Ok(source.to_string()),
            }
        }

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CodegenError::FormattingError(format!("{}: {}", self.program, e)))?;

        // Dropping stdin closes the pipe before the child is waited on.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(source.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if let Err(e) = written {
            return Err(CodegenError::FormattingError(format!(
                "{}: failed to write input: {}",
                self.program, e
            )));
        }
        if !output.status.success() {
            return Err(CodegenError::FormattingError(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| CodegenError::FormattingError(e.to_string()))
    }
}

/// Formatter selection in options and config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    #[default]
    Canonical,
    Prettier,
}

impl FormatterKind {
    pub fn build(self) -> Box<dyn CodeFormatter> {
        match self {
            FormatterKind::Canonical => Box::new(CanonicalFormatter),
            FormatterKind::Prettier => Box::new(CommandFormatter::prettier()),
        }
    }
}
