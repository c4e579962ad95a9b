/// Deferred work queued on the page's event loop.
pub type Task = Box<dyn FnOnce()>;

/// One-shot timers. Tasks are never cancelled once queued.
pub trait Scheduler {
    fn set_timeout(&self, delay_ms: u32, task: Task);
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::{Cell, RefCell};

    use super::{Scheduler, Task};

    /// Test clock: tasks run only when the test advances time.
    #[derive(Default)]
    pub struct ManualScheduler {
        now: Cell<u64>,
        queue: RefCell<Vec<(u64, Task)>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        /// Moves the clock forward, running due tasks in deadline order.
        pub fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let due = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _))| *at <= target)
                        .min_by_key(|(_, (at, _))| *at)
                        .map(|(index, _)| index);
                    due.map(|index| queue.remove(index))
                };
                let Some((at, task)) = next else {
                    break;
                };
                self.now.set(at);
                task();
            }
            self.now.set(target);
        }
    }

    impl Scheduler for ManualScheduler {
        fn set_timeout(&self, delay_ms: u32, task: Task) {
            let at = self.now.get() + u64::from(delay_ms);
            self.queue.borrow_mut().push((at, task));
        }
    }
}
