use crate::logic::MatchStrictness;

/// Log channel identifiers; each maps to a `log` target so that a harness
/// can enable or silence BFM chatter per concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgId {
    /// Routine set/get/check activity.
    Bfm,
    /// Start-of-wait announcements from `expect`.
    BfmWait,
    /// Poll completion notifications from `expect`.
    BfmPoll,
}

impl MsgId {
    pub fn target(self) -> &'static str {
        match self {
            MsgId::Bfm => "strobe::bfm",
            MsgId::BfmWait => "strobe::bfm_wait",
            MsgId::BfmPoll => "strobe::bfm_poll",
        }
    }
}

/// Per-BFM configuration record. Immutable once handed to a
/// [`Gpio`](crate::Gpio); every instance can carry its own or reuse the
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpioConfig {
    /// Nominal clock period in simulation time units. Informational; used
    /// as the fallback poll granularity hint.
    pub clock_period: u64,
    /// Comparison strictness applied by `check` and `expect`.
    pub match_strictness: MatchStrictness,
    /// Channel for set/get/check messages.
    pub id_for_bfm: MsgId,
    /// Channel announcing the start of a wait.
    pub id_for_bfm_wait: MsgId,
    /// Channel for poll completion messages.
    pub id_for_bfm_poll: MsgId,
}

impl Default for GpioConfig {
    fn default() -> Self {
        Self {
            clock_period: 10,
            match_strictness: MatchStrictness::Std,
            id_for_bfm: MsgId::Bfm,
            id_for_bfm_wait: MsgId::BfmWait,
            id_for_bfm_poll: MsgId::BfmPoll,
        }
    }
}
