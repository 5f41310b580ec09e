//! Side channel for the non-fatal errors raised by the math types.
//!
//! Operators such as `Vec2 / 0.0` cannot return a `Result`, so they report what went wrong to
//! the diagnostic sink installed on the current thread and substitute a neutral value. With no
//! sink installed, reports go to [`TracingSink`], which logs them at `WARN` level.
//!
//! ```
//! use glongge_math::core::prelude::*;
//! use std::rc::Rc;
//!
//! let sink = Rc::new(CollectingSink::new());
//! let v = diag::with_sink(sink.clone(), || Vec2::new(1.0, 1.0) / 0.0);
//! assert_eq!(v, Vec2::zero());
//! assert_eq!(sink.len(), 1);
//! ```
use crate::util::error::MathError;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

/// Receives every [`MathError`] reported on the thread it is installed on.
///
/// Implementations must not panic and should return quickly; they are called from deep inside
/// arithmetic operators.
pub trait DiagnosticSink {
    fn report(&self, error: &MathError);
}

impl<F: Fn(&MathError)> DiagnosticSink for F {
    fn report(&self, error: &MathError) {
        self(error);
    }
}

/// The default sink: logs each report with [`tracing::warn!`].
#[derive(Default, Debug, Copy, Clone)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &MathError) {
        warn!("{}", error);
    }
}

/// Records reports so they can be inspected afterwards.
#[derive(Default, Debug)]
pub struct CollectingSink {
    errors: RefCell<Vec<MathError>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<MathError> {
        self.errors.borrow().clone()
    }
    pub fn take(&self) -> Vec<MathError> {
        self.errors.take()
    }
    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }
    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, error: &MathError) {
        self.errors.borrow_mut().push(error.clone());
    }
}

thread_local! {
    static SINKS: RefCell<Vec<Rc<dyn DiagnosticSink>>> = const { RefCell::new(Vec::new()) };
}

struct SinkGuard;

impl Drop for SinkGuard {
    fn drop(&mut self) {
        SINKS.with(|sinks| sinks.borrow_mut().pop());
    }
}

/// Runs `f` with `sink` receiving every report made on this thread, then restores whichever sink
/// was installed before. Calls nest; the innermost sink wins.
pub fn with_sink<S, R>(sink: Rc<S>, f: impl FnOnce() -> R) -> R
where
    S: DiagnosticSink + 'static,
{
    SINKS.with(|sinks| sinks.borrow_mut().push(sink));
    let _guard = SinkGuard;
    f()
}

/// Runs `f` and returns its result together with everything it reported.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<MathError>) {
    let sink = Rc::new(CollectingSink::new());
    let rv = with_sink(sink.clone(), f);
    (rv, sink.take())
}

/// Hands `error` to the sink installed on this thread, or to [`TracingSink`] if there is none.
pub fn report(error: MathError) {
    // Clone the handle out first: a sink is allowed to do math that reports again.
    let sink = SINKS.with(|sinks| sinks.borrow().last().cloned());
    match sink {
        Some(sink) => sink.report(&error),
        None => TracingSink.report(&error),
    }
}
