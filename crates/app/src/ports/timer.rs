//! Timer port — delays on the host's event loop.

use std::future::Future;
use std::time::Duration;

/// Resolves after a duration without blocking other work.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
