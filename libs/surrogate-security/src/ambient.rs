//! Task-local "current identity" slot.
//!
//! Each [`scope`] pushes a frame holding a [`SecurityContext`]; the frame is
//! popped on every exit path of the wrapped future or closure, including
//! errors and panics, so the enclosing identity comes back without any manual
//! save/restore. [`replace`] overwrites the innermost frame in place and is
//! not undone by anything but the frame ending.
//!
//! The slot is per task: a future handed to `tokio::spawn` starts with no
//! identity unless wrapped with [`propagate`].

use std::cell::RefCell;
use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use crate::context::SecurityContext;

tokio::task_local! {
    static CURRENT: RefCell<Option<Arc<SecurityContext>>>;
}

#[derive(Debug, Error)]
pub enum AmbientError {
    /// `replace` was called on a task that has no ambient frame.
    #[error("no ambient security scope is active on this task")]
    NoScope,
}

/// Run `fut` inside a fresh, empty frame.
pub fn root<F: Future>(fut: F) -> impl Future<Output = F::Output> {
    CURRENT.scope(RefCell::new(None), fut)
}

/// Run `fut` with `ctx` as the current identity.
pub fn scope<F: Future>(ctx: Arc<SecurityContext>, fut: F) -> impl Future<Output = F::Output> {
    CURRENT.scope(RefCell::new(Some(ctx)), fut)
}

/// Synchronous counterpart of [`scope`]. `None` runs `f` with an empty frame.
pub fn sync_scope<R>(ctx: Option<Arc<SecurityContext>>, f: impl FnOnce() -> R) -> R {
    CURRENT.sync_scope(RefCell::new(ctx), f)
}

/// Identity in the innermost frame, if any.
#[must_use]
pub fn current() -> Option<Arc<SecurityContext>> {
    CURRENT.try_with(|slot| slot.borrow().clone()).ok().flatten()
}

/// Whether the calling task is inside any frame.
#[must_use]
pub fn is_active() -> bool {
    CURRENT.try_with(|_| ()).is_ok()
}

/// Overwrite the innermost frame, returning what it held before.
///
/// # Errors
///
/// Returns [`AmbientError::NoScope`] when called outside any frame.
pub fn replace(ctx: Arc<SecurityContext>) -> Result<Option<Arc<SecurityContext>>, AmbientError> {
    CURRENT
        .try_with(|slot| slot.replace(Some(ctx)))
        .map_err(|_| AmbientError::NoScope)
}

/// Wrap `fut` with a snapshot of the caller's identity, for handing to another task.
pub fn propagate<F: Future>(fut: F) -> impl Future<Output = F::Output> {
    CURRENT.scope(RefCell::new(current()), fut)
}
