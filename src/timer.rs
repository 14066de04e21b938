use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Identifies one scheduled task so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

struct Pending {
    timeout_id: i32,
    _callback: Closure<dyn FnMut()>,
}

#[derive(Default)]
struct Tasks {
    next_id: u64,
    pending: FnvHashMap<u64, Pending>,
}

/// `setTimeout`-backed one-shot tasks, each with its own timer.
///
/// There is no cap on concurrent tasks and no ordering between them beyond
/// what their delays imply. A task that fires drops its own closure.
#[derive(Clone, Default)]
pub struct Scheduler {
    tasks: Rc<RefCell<Tasks>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &self,
        delay: Duration,
        task: impl FnOnce() + 'static,
    ) -> anyhow::Result<TaskHandle> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let id = {
            let mut t = self.tasks.borrow_mut();
            t.next_id += 1;
            t.next_id
        };

        let tasks = Rc::downgrade(&self.tasks);
        let mut task = Some(task);
        let callback = Closure::wrap(Box::new(move || {
            // wasm-bindgen defers freeing a closure dropped during its own call
            let finished = tasks.upgrade().and_then(|t| {
                let mut t = t.borrow_mut();
                t.pending.remove(&id)
            });
            if let Some(task) = task.take() {
                task();
            }
            drop(finished);
        }) as Box<dyn FnMut()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay.as_millis().min(i32::MAX as u128) as i32,
            )
            .map_err(|e| anyhow::anyhow!("setTimeout failed: {:?}", e))?;

        self.tasks.borrow_mut().pending.insert(
            id,
            Pending {
                timeout_id,
                _callback: callback,
            },
        );
        Ok(TaskHandle(id))
    }

    /// Cancel a task that has not fired yet. Returns false if it already ran.
    pub fn cancel(&self, handle: TaskHandle) -> bool {
        let removed = self.tasks.borrow_mut().pending.remove(&handle.0);
        match removed {
            Some(p) => {
                clear(p.timeout_id);
                true
            }
            None => false,
        }
    }

    /// Cancel every pending task, returning how many were still waiting.
    pub fn cancel_all(&self) -> usize {
        let ids: Vec<u64> = self.tasks.borrow().pending.keys().copied().collect();
        ids.into_iter()
            .filter(|id| self.cancel(TaskHandle(*id)))
            .count()
    }
}

fn clear(timeout_id: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(timeout_id);
    }
}
