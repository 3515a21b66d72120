use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub type Task = Box<dyn FnMut() + Send + 'static>;

/// Runs a task over and over until the returned handle is cancelled.
pub trait Scheduler {
    type Handle;

    /// The first run happens one `interval` after this call.
    fn schedule_repeating(&mut self, interval: Duration, task: Task) -> Self::Handle;

    /// Once this returns, the task will not run again.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Gives each repeating task a thread of its own.
#[derive(Debug, Default)]
pub struct ThreadScheduler;

#[derive(Debug)]
pub struct RepeatingHandle {
    stop: Sender<()>,
    thread: JoinHandle<()>,
}

impl Scheduler for ThreadScheduler {
    type Handle = RepeatingHandle;

    fn schedule_repeating(&mut self, interval: Duration, mut task: Task) -> RepeatingHandle {
        let (stop, stopped) = mpsc::channel();
        let thread = thread::spawn(move || loop {
            match stopped.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => task(),
                // a stop message, or the handle was dropped
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        RepeatingHandle { stop, thread }
    }

    fn cancel(&mut self, handle: RepeatingHandle) {
        // the thread may already be gone if the task panicked
        let _ = handle.stop.send(());
        if handle.thread.join().is_err() {
            log::warn!("repeating task panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting() -> (Arc<AtomicUsize>, Task) {
        let count = Arc::new(AtomicUsize::new(0));
        let task_count = Arc::clone(&count);
        let task: Task = Box::new(move || {
            task_count.fetch_add(1, Ordering::SeqCst);
        });
        (count, task)
    }

    #[test]
    fn test_repeats_until_cancelled() {
        let mut scheduler = ThreadScheduler;
        let (count, task) = counting();

        let handle = scheduler.schedule_repeating(Duration::from_millis(5), task);
        thread::sleep(Duration::from_millis(100));
        scheduler.cancel(handle);

        let fired = count.load(Ordering::SeqCst);
        assert!(fired >= 2, "fired {fired} times");

        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), fired);
    }

    #[test]
    fn test_cancel_before_first_run() {
        let mut scheduler = ThreadScheduler;
        let (count, task) = counting();

        let handle = scheduler.schedule_repeating(Duration::from_secs(60), task);
        scheduler.cancel(handle);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
