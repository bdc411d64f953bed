//! Session page-view allowance policy.

use crate::domain::Error;
use crate::domain::ports::ViewCounter;

/// Views a fresh session may spend before fetches are rejected.
const DEFAULT_MAX_VIEWS: u32 = 3;

/// Per-session allowance of successful article fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLimit(u32);

impl ViewLimit {
    /// Allowance of `max_views` fetches per session.
    #[must_use]
    pub const fn new(max_views: u32) -> Self {
        Self(max_views)
    }

    /// Number of fetches a session may spend before rejection.
    #[must_use]
    pub const fn max_views(self) -> u32 {
        self.0
    }
}

impl Default for ViewLimit {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VIEWS)
    }
}

/// Count one view against the session, then enforce the allowance.
///
/// The counter advances before the check, so a rejected fetch still adds to
/// the session's total. Only clearing the session restores the allowance.
///
/// # Errors
/// [`Error::limit_reached`] when the post-increment count exceeds the
/// allowance; [`Error::internal`] when the counter backend fails.
pub fn register_view(counter: &dyn ViewCounter, limit: ViewLimit) -> Result<u32, Error> {
    let views = counter
        .increment()
        .map_err(|err| Error::internal(format!("failed to advance view counter: {err}")))?;
    if views > limit.max_views() {
        return Err(Error::limit_reached());
    }
    Ok(views)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use std::cell::Cell;

    use rstest::rstest;

    use super::{ViewLimit, register_view};
    use crate::domain::ErrorCode;
    use crate::domain::ports::{SessionStateError, ViewCounter};

    #[derive(Default)]
    struct MemoryCounter {
        views: Cell<u32>,
        fail: bool,
    }

    impl ViewCounter for MemoryCounter {
        fn views(&self) -> Result<u32, SessionStateError> {
            if self.fail {
                return Err(SessionStateError::read("boom"));
            }
            Ok(self.views.get())
        }

        fn increment(&self) -> Result<u32, SessionStateError> {
            if self.fail {
                return Err(SessionStateError::write("boom"));
            }
            let next = self.views.get() + 1;
            self.views.set(next);
            Ok(next)
        }

        fn clear(&self) {
            self.views.set(0);
        }
    }

    #[test]
    fn allows_fetches_up_to_the_limit() {
        let counter = MemoryCounter::default();
        let limit = ViewLimit::default();

        for expected in 1..=limit.max_views() {
            assert_eq!(register_view(&counter, limit), Ok(expected));
        }
    }

    #[test]
    fn rejects_past_the_limit_while_still_counting() {
        let counter = MemoryCounter::default();
        let limit = ViewLimit::default();

        for _ in 0..limit.max_views() {
            register_view(&counter, limit).unwrap();
        }

        let err = register_view(&counter, limit).unwrap_err();
        assert_eq!(err.code(), ErrorCode::LimitExceeded);
        assert_eq!(err.message(), "Maximum pageview limit reached");
        assert_eq!(counter.views(), Ok(4));

        // The rejected fetch counted too; the total keeps climbing.
        register_view(&counter, limit).unwrap_err();
        assert_eq!(counter.views(), Ok(5));
    }

    #[test]
    fn clearing_restores_the_allowance() {
        let counter = MemoryCounter::default();
        let limit = ViewLimit::default();

        for _ in 0..=limit.max_views() {
            let _ = register_view(&counter, limit);
        }
        counter.clear();

        assert_eq!(register_view(&counter, limit), Ok(1));
    }

    #[rstest]
    #[case(ViewLimit::new(0))]
    #[case(ViewLimit::new(1))]
    fn honours_custom_allowances(#[case] limit: ViewLimit) {
        let counter = MemoryCounter::default();

        for expected in 1..=limit.max_views() {
            assert_eq!(register_view(&counter, limit), Ok(expected));
        }
        let err = register_view(&counter, limit).unwrap_err();
        assert_eq!(err.code(), ErrorCode::LimitExceeded);
    }

    #[test]
    fn counter_failures_surface_as_internal_errors() {
        let counter = MemoryCounter {
            views: Cell::new(0),
            fail: true,
        };

        let err = register_view(&counter, ViewLimit::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
