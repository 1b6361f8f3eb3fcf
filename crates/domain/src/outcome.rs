use std::fmt;

/// Why a resolver was rejected by the correctness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// A known-good query did not complete within the per-query timeout.
    Timeout,
    /// A known-good query errored or lacked the expected literal.
    IncorrectAnswer,
    /// The resolver answered a name that cannot exist.
    GarbageAnswer,
    /// The probe task ended abnormally.
    Unexpected,
    /// The batch was cancelled before the probe finished.
    Cancelled,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::Timeout => "timeout",
            FailureReason::IncorrectAnswer => "incorrect_answer",
            FailureReason::GarbageAnswer => "garbage_answer",
            FailureReason::Unexpected => "unexpected",
            FailureReason::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    Valid,
    Failed(FailureReason),
}

impl ProbeOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ProbeOutcome::Valid)
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            ProbeOutcome::Valid => None,
            ProbeOutcome::Failed(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Valid => f.write_str("valid"),
            ProbeOutcome::Failed(reason) => write!(f, "failed ({})", reason),
        }
    }
}

/// Whether a resolver answers for a zone lacking an SOA record.
///
/// Strictly two-valued; the intolerance reason is kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToleranceOutcome {
    Tolerant,
    Intolerant(String),
}

impl ToleranceOutcome {
    pub fn is_tolerant(&self) -> bool {
        matches!(self, ToleranceOutcome::Tolerant)
    }
}

impl fmt::Display for ToleranceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToleranceOutcome::Tolerant => f.write_str("tolerant"),
            ToleranceOutcome::Intolerant(reason) => write!(f, "intolerant ({})", reason),
        }
    }
}
