use crate::alert::Severity;
use crate::config::GpioConfig;
use crate::error::Error;
use crate::logic::MatchStrictness;
use crate::simulation::{LineRef, Simulation};
use crate::vector::{LogicPattern, LogicVector};

/// A GPIO bus functional model bound to one line of a [`Simulation`].
///
/// Offers the four verification operations over the line: masked write
/// ([`set`](Gpio::set)), sample ([`get`](Gpio::get)), one-shot compare
/// ([`check`](Gpio::check)), and poll-until-match ([`expect`](Gpio::expect)).
/// The BFM never owns the line; it reads and writes through the handle.
pub struct Gpio {
    line: LineRef,
    scope: String,
    config: GpioConfig,
}

impl Gpio {
    pub fn new(line: LineRef, scope: impl Into<String>) -> Self {
        Self::with_config(line, scope, GpioConfig::default())
    }

    pub fn with_config(line: LineRef, scope: impl Into<String>, config: GpioConfig) -> Self {
        Self {
            line,
            scope: scope.into(),
            config,
        }
    }

    pub fn config(&self) -> &GpioConfig {
        &self.config
    }

    pub fn line(&self) -> LineRef {
        self.line
    }

    /// Masked write: every pattern position except `-` drives the line bit,
    /// `-` positions keep their current driven value.
    pub fn set(&self, sim: &mut Simulation, value: &LogicPattern) -> Result<(), Error> {
        sim.drive(self.line, value)?;
        log::info!(
            target: self.config.id_for_bfm.target(),
            "{}: gpio_set({})",
            self.scope,
            value.to_bin_string()
        );
        Ok(())
    }

    /// Samples the line verbatim and reports the value in hex.
    pub fn get(&self, sim: &Simulation) -> LogicVector {
        let observed = sim.sample(self.line);
        log::info!(
            target: self.config.id_for_bfm.target(),
            "{}: gpio_get() => x\"{}\"",
            self.scope,
            observed.to_hex_string()
        );
        observed
    }

    /// Samples once and compares against `expected` under the configured
    /// strictness. A mismatch raises one alert at `severity` and does not
    /// retry.
    pub fn check(
        &self,
        sim: &mut Simulation,
        expected: &LogicPattern,
        severity: Severity,
    ) -> Result<(), Error> {
        self.check_width(sim, expected)?;
        let observed = sim.sample(self.line);
        if expected.matches(&observed, self.config.match_strictness) {
            log::info!(
                target: self.config.id_for_bfm.target(),
                "{}: gpio_check({}) => OK, was x\"{}\"",
                self.scope,
                expected.to_bin_string(),
                observed.to_hex_string()
            );
            Ok(())
        } else {
            let msg = mismatch_message(
                "gpio_check",
                &observed,
                expected,
                self.config.match_strictness,
            );
            sim.report_alert(severity, msg, &self.scope)
        }
    }

    /// Polls the line until it matches `expected` or `timeout` elapses.
    ///
    /// `None` means poll without a deadline. Between failed samples the
    /// call yields to the host by advancing simulation time to the next
    /// scheduled transition (capped at the deadline), so concurrent test
    /// activity keeps making progress. On timeout exactly one alert is
    /// raised at `severity` carrying the last observed value.
    ///
    /// An unbounded expect over an idle transition queue can never match;
    /// it returns [`Error::PollStarved`] instead of hanging the process.
    pub fn expect(
        &self,
        sim: &mut Simulation,
        expected: &LogicPattern,
        timeout: Option<u64>,
        severity: Severity,
    ) -> Result<(), Error> {
        self.check_width(sim, expected)?;
        log::info!(
            target: self.config.id_for_bfm_wait.target(),
            "{}: gpio_expect({}), awaiting match",
            self.scope,
            expected.to_bin_string()
        );
        let start = sim.time();
        let deadline = timeout.map(|t| start.saturating_add(t));
        loop {
            let observed = sim.sample(self.line);
            if expected.matches(&observed, self.config.match_strictness) {
                log::info!(
                    target: self.config.id_for_bfm_poll.target(),
                    "{}: gpio_expect({}) => OK at t={}",
                    self.scope,
                    expected.to_bin_string(),
                    sim.time()
                );
                return Ok(());
            }

            match deadline {
                Some(deadline) => {
                    if sim.time() >= deadline {
                        let msg = format!(
                            "{} after {} time units",
                            mismatch_message(
                                "gpio_expect",
                                &observed,
                                expected,
                                self.config.match_strictness,
                            ),
                            sim.time() - start
                        );
                        return sim.report_alert(severity, msg, &self.scope);
                    }
                    // Yield: advance to the next transition, or jump to the
                    // deadline when nothing earlier is queued.
                    let wake = match sim.next_event_time() {
                        Some(t) if t < deadline => t,
                        _ => deadline,
                    };
                    sim.run_until(wake);
                }
                None => {
                    if sim.step().is_none() {
                        return Err(Error::PollStarved {
                            line: sim.line_name(self.line).to_string(),
                        });
                    }
                }
            }
        }
    }

    fn check_width(&self, sim: &Simulation, value: &LogicPattern) -> Result<(), Error> {
        let line_width = sim.width(self.line);
        if line_width != value.width() {
            return Err(Error::WidthMismatch {
                line: sim.line_name(self.line).to_string(),
                line_width,
                value_width: value.width(),
            });
        }
        Ok(())
    }
}

/// Builds the diagnostic for a failed comparison, choosing the radix per
/// the attribution rule: an `Exact` mismatch that would have passed under
/// `Std` differs only in weak/unknown states, so it renders in binary to
/// expose the exact bit states; every other mismatch renders in hex.
fn mismatch_message(
    op: &str,
    observed: &LogicVector,
    expected: &LogicPattern,
    strictness: MatchStrictness,
) -> String {
    let weak_only = strictness == MatchStrictness::Exact
        && expected.matches(observed, MatchStrictness::Std);
    if weak_only {
        format!(
            "{op}() => Failed, was b\"{}\", expected b\"{}\"",
            observed.to_bin_string(),
            expected.to_bin_string()
        )
    } else {
        format!(
            "{op}() => Failed, was x\"{}\", expected x\"{}\"",
            observed.to_hex_string(),
            expected.to_hex_string()
        )
    }
}
