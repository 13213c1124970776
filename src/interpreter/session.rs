use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::{evaluate_line, format_value, interpreter::evaluator::core::Environment};

/// What a session prints in response to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A computed value, already formatted with two decimals.
    Value(String),
    /// A successful assignment; nothing to print.
    Silent,
    /// A failure, already formatted as `Error: <message>`.
    Error(String),
}

impl Reply {
    /// Whether the line failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// An evaluation session.
///
/// A session owns one [`Environment`] for its whole lifetime and feeds it
/// one line at a time. It can additionally append to two sinks:
/// - a calculation log receiving `input = output` for every computed value,
/// - a history receiving an `Input:`/`Result:` record for every line.
#[derive(Default)]
pub struct Session {
    environment: Environment,
    log:         Option<Box<dyn Write>>,
    history:     Option<Box<dyn Write>>,
}

impl Session {
    /// Creates a session with an empty environment and no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `input = output` lines for computed values to `log`.
    #[must_use]
    pub fn with_log(mut self, log: impl Write + 'static) -> Self {
        self.log = Some(Box::new(log));
        self
    }

    /// Appends an `Input:`/`Result:` record for every line to `history`.
    #[must_use]
    pub fn with_history(mut self, history: impl Write + 'static) -> Self {
        self.history = Some(Box::new(history));
        self
    }

    /// The session's variables.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Forgets every variable, as if the session had just started.
    pub fn reset(&mut self) {
        info!(variables = self.environment.len(), "resetting environment");
        self.environment = crate::reset_environment();
    }

    /// Evaluates one line and records it in the configured sinks.
    ///
    /// Surrounding whitespace is ignored. A sink that fails to accept a
    /// record is reported and dropped; the session itself carries on.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::session::{Reply, Session};
    ///
    /// let mut session = Session::new();
    ///
    /// assert_eq!(session.execute("x = 10"), Reply::Silent);
    /// assert_eq!(session.execute("x * 2"), Reply::Value("20.00".to_string()));
    /// assert!(session.execute("y + 1").is_error());
    /// ```
    pub fn execute(&mut self, line: &str) -> Reply {
        let input = line.trim();

        let reply = match evaluate_line(input, &mut self.environment) {
            Ok(Some(value)) => Reply::Value(format_value(value)),
            Ok(None) => Reply::Silent,
            Err(e) => {
                debug!(%input, error = %e, "evaluation failed");
                Reply::Error(format!("Error: {e}"))
            },
        };

        if let Reply::Value(output) = &reply
           && let Err(e) = append(self.log.as_mut(), format_args!("{input} = {output}"))
        {
            warn!(error = %e, "calculation log is no longer written");
            self.log = None;
        }

        let result = match &reply {
            Reply::Value(text) | Reply::Error(text) => text.as_str(),
            Reply::Silent => "",
        };
        if let Err(e) = append(self.history.as_mut(), format_args!("Input: {input}\nResult: {result}")) {
            warn!(error = %e, "history is no longer written");
            self.history = None;
        }

        reply
    }
}

/// Writes one line to `sink`, if there is one.
fn append(sink: Option<&mut Box<dyn Write>>, record: std::fmt::Arguments<'_>) -> io::Result<()> {
    let Some(sink) = sink else {
        return Ok(());
    };
    sink.write_fmt(record)?;
    writeln!(sink)?;
    sink.flush()
}
