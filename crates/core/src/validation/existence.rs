//! Asynchronous "is this national ID already registered" check.
//!
//! The lookup itself lives behind [`NationalIdLookup`] (the database adapter
//! implements it). Transport failures come back as [`LookupError`], never as
//! a validation outcome, so callers can prompt for a retry instead of
//! flagging the field.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use super::digits_only;
use super::national_id;
use super::outcome::{FailureKind, ValidationOutcome};

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("National ID lookup unavailable: {0}")]
    Unavailable(String),
}

/// Backing-store query used by the uniqueness check.
#[async_trait]
pub trait NationalIdLookup: Send + Sync {
    /// `national_id` is always the digit-only form.
    async fn exists(&self, national_id: &str) -> Result<bool, LookupError>;
}

/// Run the simple national ID pipeline, then ask `lookup` whether the ID is
/// already taken.
///
/// The lookup is skipped when the simple pipeline already failed or the
/// input is empty.
pub async fn check_unique<L>(lookup: &L, raw: &str) -> Result<ValidationOutcome, LookupError>
where
    L: NationalIdLookup + ?Sized,
{
    let outcome = national_id::simple_validation(raw);
    if raw.is_empty() || !outcome.is_valid() {
        return Ok(outcome);
    }
    if lookup.exists(&digits_only(raw)).await? {
        return Ok(ValidationOutcome::invalid(
            FailureKind::IdAlreadyExists,
            json!({ "value": raw }),
        ));
    }
    Ok(ValidationOutcome::Valid)
}

/// Result of a check that may have been overtaken by a newer one.
#[derive(Debug, Clone, PartialEq)]
pub enum UniqueCheck {
    Completed(ValidationOutcome),
    /// A newer check started before this one finished; discard it.
    Superseded,
}

/// Wraps a lookup so that only the most recent check counts.
///
/// Starting a check cancels the one in flight, which then resolves to
/// [`UniqueCheck::Superseded`] (even if its lookup failed).
pub struct LatestOnly<L> {
    lookup: L,
    current: Mutex<CancellationToken>,
}

impl<L: NationalIdLookup> LatestOnly<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            current: Mutex::new(CancellationToken::new()),
        }
    }

    pub async fn check(&self, raw: &str) -> Result<UniqueCheck, LookupError> {
        let token = self.supersede();
        tokio::select! {
            biased;
            () = token.cancelled() => Ok(UniqueCheck::Superseded),
            result = check_unique(&self.lookup, raw) => {
                if token.is_cancelled() {
                    Ok(UniqueCheck::Superseded)
                } else {
                    result.map(UniqueCheck::Completed)
                }
            }
        }
    }

    /// Cancel whatever check is in flight without starting a new one.
    pub fn cancel_pending(&self) {
        self.supersede();
    }

    fn supersede(&self) -> CancellationToken {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        current.cancel();
        *current = CancellationToken::new();
        current.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use assert_matches::assert_matches;

    use super::*;

    struct FixedLookup {
        taken: HashSet<&'static str>,
        calls: AtomicUsize,
        delay: Duration,
    }

    impl FixedLookup {
        fn new(taken: &[&'static str]) -> Self {
            Self {
                taken: taken.iter().copied().collect(),
                calls: AtomicUsize::new(0),
                delay: Duration::ZERO,
            }
        }

        fn slow(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    #[async_trait]
    impl NationalIdLookup for FixedLookup {
        async fn exists(&self, national_id: &str) -> Result<bool, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.taken.contains(national_id))
        }
    }

    struct DownLookup;

    #[async_trait]
    impl NationalIdLookup for DownLookup {
        async fn exists(&self, _: &str) -> Result<bool, LookupError> {
            Err(LookupError::Unavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn taken_id_is_reported() {
        let lookup = FixedLookup::new(&["52998224725"]);
        let outcome = check_unique(&lookup, "529.982.247-25").await.unwrap();
        assert_eq!(
            outcome,
            ValidationOutcome::invalid(FailureKind::IdAlreadyExists, json!({"value": "529.982.247-25"}))
        );
    }

    #[tokio::test]
    async fn free_id_is_valid() {
        let lookup = FixedLookup::new(&["52998224725"]);
        let outcome = check_unique(&lookup, "11144477735").await.unwrap();
        assert!(outcome.is_valid());
    }

    #[tokio::test]
    async fn structural_failure_skips_lookup() {
        let lookup = FixedLookup::new(&[]);
        let outcome = check_unique(&lookup, "123").await.unwrap();
        assert_eq!(outcome.kind(), Some(FailureKind::IdWrongLength));
        assert!(check_unique(&lookup, "").await.unwrap().is_valid());
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn transport_failure_is_an_error_not_an_outcome() {
        let result = check_unique(&DownLookup, "52998224725").await;
        assert_matches!(result, Err(LookupError::Unavailable(_)));
    }

    #[tokio::test]
    async fn newer_check_supersedes_older() {
        let lookup = FixedLookup::new(&["52998224725"]).slow(Duration::from_millis(200));
        let checker = Arc::new(LatestOnly::new(lookup));

        let first = {
            let checker = Arc::clone(&checker);
            tokio::spawn(async move { checker.check("52998224725").await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let second = checker.check("11144477735").await.unwrap();
        assert_eq!(second, UniqueCheck::Completed(ValidationOutcome::Valid));

        let first = first.await.unwrap().unwrap();
        assert_eq!(first, UniqueCheck::Superseded);
    }

    #[tokio::test]
    async fn cancel_pending_discards_in_flight_check() {
        let lookup = FixedLookup::new(&[]).slow(Duration::from_millis(200));
        let checker = Arc::new(LatestOnly::new(lookup));

        let pending = {
            let checker = Arc::clone(&checker);
            tokio::spawn(async move { checker.check("52998224725").await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        checker.cancel_pending();

        assert_eq!(pending.await.unwrap().unwrap(), UniqueCheck::Superseded);
    }

    #[tokio::test]
    async fn lone_check_completes() {
        let checker = LatestOnly::new(FixedLookup::new(&["52998224725"]));
        let result = checker.check("52998224725").await.unwrap();
        assert_matches!(
            result,
            UniqueCheck::Completed(ValidationOutcome::Invalid(f)) if f.kind == FailureKind::IdAlreadyExists
        );
    }
}
