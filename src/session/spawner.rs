use futures::future::LocalBoxFuture;

/// Runs a detached task on the current thread's event loop.
/// Spawned work always starts in a later turn than the caller.
pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Native single-threaded executor, used headless and in tests.
impl Spawner for futures::executor::LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        use futures::task::LocalSpawnExt;
        if let Err(e) = self.spawn_local(task) {
            log::warn!("dropping task, executor shut down: {}", e);
        }
    }
}

/// Browser microtask queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct Browser;

impl Spawner for Browser {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
