//! UserProgress aggregate and the completion fold.
//!
//! One row per (user, language) pair, created on first completion and
//! additively updated on every later one. The counters are only ever
//! merged by addition; `last_session_at` takes the maximum of the stored
//! and incoming timestamps so a retried older completion cannot move it
//! backwards.

use crate::domain::conversation::SessionCompletion;
use crate::domain::foundation::{DomainError, LanguageId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// The per-completion increment folded into a UserProgress row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressDelta {
    /// Number of sessions to add (one per completion).
    pub sessions: i64,

    /// Minutes to add: the session duration rounded up to whole minutes.
    pub minutes: i64,

    /// End time of the completed session.
    pub last_session_at: Timestamp,
}

impl ProgressDelta {
    /// Derives the increment for a single completed session.
    pub fn from_completion(completion: &SessionCompletion) -> Self {
        Self {
            sessions: 1,
            minutes: minutes_for(completion.duration_seconds),
            last_session_at: completion.ended_at,
        }
    }
}

/// Session duration in whole minutes, rounded up.
///
/// Expects a non-negative duration (the aggregate clamps at completion
/// time). A 125 second session counts as 3 minutes, a 40 second one as 1.
pub fn minutes_for(duration_seconds: i64) -> i64 {
    (duration_seconds + 59) / 60
}

/// Running statistics for one (user, language) pair.
///
/// # Invariants
///
/// - `sessions_count` equals the number of completed conversations for
///   the pair
/// - `total_duration_minutes` equals the sum of rounded-up minutes over
///   the same set
/// - both counters are non-negative and only grow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: UserId,
    pub language_id: LanguageId,
    pub sessions_count: i64,
    pub total_duration_minutes: i64,
    pub last_session_at: Timestamp,
}

impl UserProgress {
    /// Creates the row for a pair's first completed session.
    pub fn first(user_id: UserId, language_id: LanguageId, delta: &ProgressDelta) -> Self {
        Self {
            user_id,
            language_id,
            sessions_count: delta.sessions,
            total_duration_minutes: delta.minutes,
            last_session_at: delta.last_session_at,
        }
    }

    /// Folds one more completion into the row.
    ///
    /// Counters merge additively; `last_session_at` keeps the maximum of
    /// the stored and incoming values.
    pub fn apply(&mut self, delta: &ProgressDelta) {
        self.sessions_count += delta.sessions;
        self.total_duration_minutes += delta.minutes;
        if delta.last_session_at.is_after(&self.last_session_at) {
            self.last_session_at = delta.last_session_at;
        }
    }

    /// Verifies the contract of the upsert-increment primitive.
    ///
    /// Negative counters indicate data-store corruption or a missing
    /// isolation guarantee and must surface as an internal error, never
    /// be absorbed.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        if self.sessions_count < 0 || self.total_duration_minutes < 0 {
            return Err(DomainError::invariant(format!(
                "negative progress counters for user {} language {}: sessions={}, minutes={}",
                self.user_id, self.language_id, self.sessions_count, self.total_duration_minutes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(duration_seconds: i64, ended_at_secs: u64) -> ProgressDelta {
        ProgressDelta::from_completion(&SessionCompletion {
            ended_at: Timestamp::from_unix_secs(ended_at_secs),
            duration_seconds,
        })
    }

    // Rounding tests

    #[test]
    fn minutes_round_up() {
        assert_eq!(minutes_for(0), 0);
        assert_eq!(minutes_for(1), 1);
        assert_eq!(minutes_for(59), 1);
        assert_eq!(minutes_for(60), 1);
        assert_eq!(minutes_for(61), 2);
        assert_eq!(minutes_for(125), 3);
    }

    #[test]
    fn delta_counts_one_session() {
        let d = delta(125, 2_000);
        assert_eq!(d.sessions, 1);
        assert_eq!(d.minutes, 3);
        assert_eq!(d.last_session_at, Timestamp::from_unix_secs(2_000));
    }

    // Fold tests

    #[test]
    fn first_completion_creates_row() {
        let progress = UserProgress::first(UserId::new(), LanguageId::new(), &delta(125, 2_000));
        assert_eq!(progress.sessions_count, 1);
        assert_eq!(progress.total_duration_minutes, 3);
    }

    #[test]
    fn apply_merges_additively() {
        // The 125s + 40s scenario: totals must be {2 sessions, 4 minutes}.
        let mut progress =
            UserProgress::first(UserId::new(), LanguageId::new(), &delta(125, 2_000));
        progress.apply(&delta(40, 3_000));

        assert_eq!(progress.sessions_count, 2);
        assert_eq!(progress.total_duration_minutes, 4);
        assert_eq!(progress.last_session_at, Timestamp::from_unix_secs(3_000));
    }

    #[test]
    fn last_session_at_never_moves_backwards() {
        // An older completion arriving late (retry) keeps the newer timestamp.
        let mut progress =
            UserProgress::first(UserId::new(), LanguageId::new(), &delta(60, 5_000));
        progress.apply(&delta(60, 4_000));

        assert_eq!(progress.sessions_count, 2);
        assert_eq!(progress.last_session_at, Timestamp::from_unix_secs(5_000));
    }

    #[test]
    fn replay_order_does_not_change_counters() {
        let durations = [125_i64, 40, 0, 59, 3600];
        let user_id = UserId::new();
        let language_id = LanguageId::new();

        let mut forward = UserProgress::first(user_id, language_id, &delta(durations[0], 1_000));
        for (i, d) in durations.iter().enumerate().skip(1) {
            forward.apply(&delta(*d, 1_000 + i as u64));
        }

        let last = durations.len() - 1;
        let mut backward =
            UserProgress::first(user_id, language_id, &delta(durations[last], 1_000 + last as u64));
        for (i, d) in durations.iter().enumerate().rev().skip(1) {
            backward.apply(&delta(*d, 1_000 + i as u64));
        }

        assert_eq!(forward.sessions_count, backward.sessions_count);
        assert_eq!(
            forward.total_duration_minutes,
            backward.total_duration_minutes
        );
        assert_eq!(forward.last_session_at, backward.last_session_at);
    }

    // Invariant tests

    #[test]
    fn non_negative_counters_pass_invariant_check() {
        let progress = UserProgress::first(UserId::new(), LanguageId::new(), &delta(125, 2_000));
        assert!(progress.check_invariants().is_ok());
    }

    #[test]
    fn negative_counters_fail_invariant_check() {
        let mut progress =
            UserProgress::first(UserId::new(), LanguageId::new(), &delta(125, 2_000));
        progress.sessions_count = -1;

        let err = progress.check_invariants().unwrap_err();
        assert_eq!(
            err.code,
            crate::domain::foundation::ErrorCode::InvariantViolation
        );
    }
}
