use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// Single-threaded deferred-task queue.
///
/// Work handed to [`defer`](TaskQueue::defer) runs after the current
/// synchronous execution completes, in submission order, when the owner of
/// the queue pumps it. The channel facade schedules three things here: the
/// closing-to-closed re-check after an unrequested transport close, the
/// transport close request issued by `close()`, and blob byte read-outs
/// before a binary send.
///
/// Handles are cheap to clone and share the same queue.
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        TaskQueue::default()
    }

    /// Schedules `task` to run on the next tick.
    pub fn defer(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    /// Runs the tasks that were queued when the call was made and returns
    /// how many ran. Tasks deferred while a tick is running land on the
    /// following tick.
    pub fn tick(&self) -> usize {
        let pending = self.tasks.borrow().len();
        let mut ran = 0;
        for _ in 0..pending {
            // the borrow must not be held while the task runs: a task may
            // defer further work onto this same queue
            let task = self.tasks.borrow_mut().pop_front();
            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }
        ran
    }

    /// Ticks until the queue is idle and returns the total number of tasks
    /// that ran.
    pub fn run(&self) -> usize {
        let mut total = 0;
        loop {
            let ran = self.tick();
            if ran == 0 {
                return total;
            }
            total += ran;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }
}
