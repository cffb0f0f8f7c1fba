use std::fmt::Debug;

use tokio::runtime::Handle;
use tracing::trace;

/// Run a future to completion on the current thread.
/// This is useful for synchronous callers (UI callbacks and the like) that
/// need a result from one of the async model operations.
/// This function will block the current thread until the provided future has run to completion.
///
/// # Be careful with deadlocks
pub fn run_async_blocking<T>(f: impl std::future::Future<Output = T> + Sized) -> T
where
    T: Debug,
{
    trace!("run_async_blocking");
    let handle = Handle::current();
    let _enter_guard = handle.enter();
    trace!("run_async_blocking: entered handle");
    let result = futures::executor::block_on(f);
    trace!("run_async_blocking: got result: {:?}", result);
    result
}
