/// Alert severity, ordered from least to most severe. `Failure` terminates
/// the operation that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Note,
    Warning,
    Error,
    Failure,
}

impl Severity {
    pub fn is_fatal(self) -> bool {
        self == Severity::Failure
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Note => "NOTE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Failure => "FAILURE",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
    pub scope: String,
}

/// Recorded alerts for one simulation, inspectable by the harness after the
/// fact. Every alert is also mirrored to the `log` facade.
#[derive(Debug, Default)]
pub struct AlertLog {
    records: Vec<Alert>,
}

impl AlertLog {
    pub(crate) fn report(&mut self, severity: Severity, message: String, scope: &str) {
        match severity {
            Severity::Note => {
                log::info!(target: "strobe::alert", "{severity} [{scope}] {message}")
            }
            Severity::Warning => {
                log::warn!(target: "strobe::alert", "{severity} [{scope}] {message}")
            }
            Severity::Error | Severity::Failure => {
                log::error!(target: "strobe::alert", "{severity} [{scope}] {message}")
            }
        }
        self.records.push(Alert {
            severity,
            message,
            scope: scope.to_string(),
        });
    }

    pub fn records(&self) -> &[Alert] {
        &self.records
    }

    pub fn last(&self) -> Option<&Alert> {
        self.records.last()
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.records
            .iter()
            .filter(|a| a.severity == severity)
            .count()
    }
}
