//! Transaction status and the admin actions that drive it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

/// Lifecycle of a subscription transaction.
///
/// `Pending` is the only non-terminal state. Admin actions always write,
/// so callers use `can_transition_to` to detect overwrites rather than to
/// block them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TransactionStatus::Pending),
            "completed" => Some(TransactionStatus::Completed),
            "failed" => Some(TransactionStatus::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for TransactionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use TransactionStatus::*;
        matches!((self, target), (Pending, Completed) | (Pending, Failed))
    }
}

/// Admin decision on a pending payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionAction {
    Confirm,
    Reject,
}

impl TransactionAction {
    /// Parses the wire action. Anything else is `INVALID_ACTION`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim() {
            "confirm" => Ok(TransactionAction::Confirm),
            "reject" => Ok(TransactionAction::Reject),
            other => Err(DomainError::new(ErrorCode::InvalidAction, "Invalid action")
                .with_detail("action", other)),
        }
    }

    /// Status the action writes.
    pub fn target_status(&self) -> TransactionStatus {
        match self {
            TransactionAction::Confirm => TransactionStatus::Completed,
            TransactionAction::Reject => TransactionStatus::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_may_move() {
        use TransactionStatus::*;
        assert!(Pending.can_transition_to(&Completed));
        assert!(Pending.can_transition_to(&Failed));
        for from in [Completed, Failed] {
            for to in [Pending, Completed, Failed] {
                assert!(!from.can_transition_to(&to), "{:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn actions_map_to_terminal_statuses() {
        assert_eq!(
            TransactionAction::parse("confirm").unwrap().target_status(),
            TransactionStatus::Completed
        );
        assert_eq!(
            TransactionAction::parse("reject").unwrap().target_status(),
            TransactionStatus::Failed
        );
    }

    #[test]
    fn unknown_action_is_invalid_action() {
        let err = TransactionAction::parse("refund").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAction);
        assert_eq!(err.message, "Invalid action");
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            TransactionStatus::Pending,
            TransactionStatus::Completed,
            TransactionStatus::Failed,
        ] {
            assert_eq!(TransactionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TransactionStatus::parse("refunded"), None);
    }
}
