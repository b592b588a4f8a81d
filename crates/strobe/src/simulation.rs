use crate::alert::{AlertLog, Severity};
use crate::error::Error;
use crate::logic::Logic;
use crate::scheduler::{Scheduler, Transition};
use crate::vector::{LogicPattern, LogicVector};

/// Handle to a registered line, resolved once and cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineRef(usize);

impl LineRef {
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }
}

struct Line {
    name: String,
    bits: Vec<Logic>,
}

/// The discrete-event host the BFM cooperates with.
///
/// Owns the registered lines, the transition queue, the current time, and
/// the alert records. Test processes schedule future transitions here; the
/// BFM samples, drives, and advances time through it.
pub struct Simulation {
    lines: Vec<Line>,
    scheduler: Scheduler,
    alerts: AlertLog,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("time", &self.scheduler.time)
            .finish()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            scheduler: Scheduler::new(),
            alerts: AlertLog::default(),
        }
    }

    /// Registers a fixed-width line. Every bit starts out `U`.
    pub fn add_line(&mut self, name: &str, width: usize) -> LineRef {
        self.lines.push(Line {
            name: name.to_string(),
            bits: vec![Logic::Uninit; width],
        });
        LineRef(self.lines.len() - 1)
    }

    /// Resolves a line by name into a [`LineRef`] handle.
    pub fn line(&self, name: &str) -> Result<LineRef, Error> {
        self.lines
            .iter()
            .position(|l| l.name == name)
            .map(LineRef)
            .ok_or_else(|| Error::UnknownLine(name.to_string()))
    }

    pub fn width(&self, line: LineRef) -> usize {
        self.lines[line.0].bits.len()
    }

    pub fn line_name(&self, line: LineRef) -> &str {
        &self.lines[line.0].name
    }

    /// Snapshot copy of the line's current value. Non-mutating.
    pub fn sample(&self, line: LineRef) -> LogicVector {
        LogicVector::from_line_bits(self.lines[line.0].bits.clone())
    }

    /// Masked write: pattern positions holding `-` leave the driven bit
    /// unchanged, every other position overwrites it.
    pub fn drive(&mut self, line: LineRef, value: &LogicPattern) -> Result<(), Error> {
        self.check_width(line, value.width())?;
        apply_masked(&mut self.lines[line.0].bits, value);
        Ok(())
    }

    /// Schedule a one-shot masked transition at an absolute time.
    pub fn schedule(&mut self, line: LineRef, time: u64, value: LogicPattern) -> Result<(), Error> {
        self.check_width(line, value.width())?;
        self.scheduler.push(Transition { time, line, value });
        Ok(())
    }

    /// Advance time to the next scheduled transition and apply everything
    /// queued at that timestamp. Returns the new simulation time, or None
    /// if nothing is scheduled.
    pub fn step(&mut self) -> Option<u64> {
        let (current_time, transitions) = self.scheduler.pop_all_at_next_time()?;
        self.scheduler.time = current_time;
        for t in &transitions {
            apply_masked(&mut self.lines[t.line.0].bits, &t.value);
        }
        Some(current_time)
    }

    /// Advance time and apply transitions up to `end_time` (inclusive).
    pub fn run_until(&mut self, end_time: u64) {
        while let Some(next_time) = self.scheduler.next_event_time() {
            if next_time > end_time {
                break;
            }
            self.step();
        }
        self.scheduler.time = end_time.max(self.scheduler.time);
    }

    /// Returns the current simulation time.
    pub fn time(&self) -> u64 {
        self.scheduler.time
    }

    /// Returns the time of the next scheduled transition, if any.
    pub fn next_event_time(&self) -> Option<u64> {
        self.scheduler.next_event_time()
    }

    pub fn alerts(&self) -> &AlertLog {
        &self.alerts
    }

    /// Records an alert and mirrors it to the log facade. A fatal severity
    /// aborts the calling operation.
    pub(crate) fn report_alert(
        &mut self,
        severity: Severity,
        message: String,
        scope: &str,
    ) -> Result<(), Error> {
        self.alerts.report(severity, message.clone(), scope);
        if severity.is_fatal() {
            return Err(Error::FatalAlert(message));
        }
        Ok(())
    }

    fn check_width(&self, line: LineRef, value_width: usize) -> Result<(), Error> {
        let line_width = self.width(line);
        if line_width != value_width {
            return Err(Error::WidthMismatch {
                line: self.line_name(line).to_string(),
                line_width,
                value_width,
            });
        }
        Ok(())
    }
}

fn apply_masked(bits: &mut [Logic], value: &LogicPattern) {
    for (dst, src) in bits.iter_mut().zip(value.bits()) {
        if *src != Logic::DontCare {
            *dst = *src;
        }
    }
}
