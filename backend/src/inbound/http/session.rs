//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! the domain-facing view counter operations.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::ports::{SessionStateError, ViewCounter};

pub(crate) const PAGE_VIEWS_KEY: &str = "page_views";

/// Newtype wrapper exposing the cookie session as a page-view counter.
///
/// The count is stored under the `page_views` session key and travels in the
/// signed session cookie, so each client carries its own tally.
#[derive(Clone)]
pub struct SessionViewCounter(Session);

impl SessionViewCounter {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }
}

impl ViewCounter for SessionViewCounter {
    fn views(&self) -> Result<u32, SessionStateError> {
        let views = self
            .0
            .get::<u32>(PAGE_VIEWS_KEY)
            .map_err(|error| SessionStateError::read(error.to_string()))?;
        Ok(views.unwrap_or(0))
    }

    fn increment(&self) -> Result<u32, SessionStateError> {
        let next = self.views()?.saturating_add(1);
        self.0
            .insert(PAGE_VIEWS_KEY, next)
            .map_err(|error| SessionStateError::write(error.to_string()))?;
        Ok(next)
    }

    fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionViewCounter {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionViewCounter::new) })
    }
}
