use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

struct FrameTask {
    frames_left: u32,
    task: Task,
}

#[derive(Default)]
struct SchedulerInner {
    deferred: RefCell<VecDeque<Task>>,
    frames: RefCell<Vec<FrameTask>>,
}

/// Single-threaded cooperative scheduler.
///
/// Two queues: `defer` runs after the current synchronous call stack
/// unwinds (the next tick, used for deferred renderer destruction), and
/// `defer_frames` runs after N frame ticks (used to coalesce transaction
/// bursts into one refresh). The host drives both with [`run_deferred`]
/// and [`advance_frame`]; tests usually call [`run_until_idle`].
///
/// [`run_deferred`]: Scheduler::run_deferred
/// [`advance_frame`]: Scheduler::advance_frame
/// [`run_until_idle`]: Scheduler::run_until_idle
#[derive(Clone, Default)]
pub struct Scheduler {
    inner: Rc<SchedulerInner>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` for the next tick.
    pub fn defer(&self, task: impl FnOnce() + 'static) {
        self.inner.deferred.borrow_mut().push_back(Box::new(task));
    }

    /// Schedules `task` to run after `frames` frame ticks (at least one).
    pub fn defer_frames(&self, frames: u32, task: impl FnOnce() + 'static) {
        self.inner.frames.borrow_mut().push(FrameTask {
            frames_left: frames.max(1),
            task: Box::new(task),
        });
    }

    /// Runs all deferred tasks, including ones queued while draining.
    /// Returns the number of tasks run.
    pub fn run_deferred(&self) -> usize {
        let mut ran = 0;
        loop {
            let task = self.inner.deferred.borrow_mut().pop_front();
            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }

    /// Advances one frame tick: decrements every frame task and runs the
    /// due ones in scheduling order. Returns the number of tasks run.
    pub fn advance_frame(&self) -> usize {
        let due: Vec<Task> = {
            let mut frames = self.inner.frames.borrow_mut();
            for entry in frames.iter_mut() {
                entry.frames_left -= 1;
            }
            let mut due = Vec::new();
            frames.retain_mut(|entry| {
                if entry.frames_left == 0 {
                    // retain_mut gives us &mut, so swap the task out
                    due.push(std::mem::replace(&mut entry.task, Box::new(|| {})));
                    false
                } else {
                    true
                }
            });
            due
        };
        let ran = due.len();
        for task in due {
            task();
        }
        ran
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.deferred.borrow().is_empty() || !self.inner.frames.borrow().is_empty()
    }

    /// Drains both queues until nothing is pending.
    pub fn run_until_idle(&self) {
        while self.has_pending() {
            self.run_deferred();
            self.advance_frame();
        }
    }
}
