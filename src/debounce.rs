//! Trailing-edge debouncing for search input.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delay used for the explorer search box.
pub const DEFAULT_DEBOUNCE_MS: u64 = 450;

/// Emits a value only once its input has been quiet for `delay`.
///
/// Every [`Debouncer::push`] restarts the timer, so bursts of keystrokes
/// produce a single value: the last one. Nothing is emitted on the leading
/// edge. Dropping the debouncer cancels whatever is pending.
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawns the timer task and returns the receiving end for settled values.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (input, mut incoming) = mpsc::unbounded_channel::<T>();
        let (settled, output) = mpsc::unbounded_channel::<T>();

        let task = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            loop {
                match pending.take() {
                    None => match incoming.recv().await {
                        Some(value) => pending = Some(value),
                        None => break,
                    },
                    Some(value) => {
                        tokio::select! {
                            next = incoming.recv() => match next {
                                Some(newer) => pending = Some(newer),
                                None => break,
                            },
                            _ = tokio::time::sleep(delay) => {
                                if settled.send(value).is_err() {
                                    break;
                                }
                            }
                        }
                    }
                }
            }
        });

        (Self { input, task }, output)
    }

    /// Feeds a new input value, restarting the quiet period.
    pub fn push(&self, value: T) -> bool {
        self.input.send(value).is_ok()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
