use crate::{EditorHandle, Scheduler};
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;
use vellum_engine::{DocumentEngine, ListenerId, TransactionListener};

/// Reactive instantiation scope: owns one editor instance per activation
/// and drives the host's re-render on engine changes.
///
/// [`sync`] is called on every host render pass with the current
/// dependency list; the editor is created on the first call and recreated
/// whenever the list changes. Each engine transaction schedules the
/// refresh callback two frame ticks later, coalescing bursts of rapid
/// transactions into a single refresh. Teardown destroys the editor and
/// discards any in-flight refresh.
///
/// [`sync`]: EditorScope::sync
pub struct EditorScope {
    scheduler: Scheduler,
    on_refresh: Rc<dyn Fn()>,
    editor: Option<EditorHandle>,
    deps: Option<Vec<Value>>,
    listener: Option<ListenerId>,
    alive: Rc<Cell<bool>>,
}

impl EditorScope {
    pub fn new(scheduler: Scheduler, on_refresh: impl Fn() + 'static) -> Self {
        EditorScope {
            scheduler,
            on_refresh: Rc::new(on_refresh),
            editor: None,
            deps: None,
            listener: None,
            alive: Rc::new(Cell::new(false)),
        }
    }

    /// Returns the current editor, creating or recreating it when the
    /// dependency list differs from the previous call.
    pub fn sync(
        &mut self,
        deps: Vec<Value>,
        init: impl FnOnce() -> Rc<dyn DocumentEngine>,
    ) -> EditorHandle {
        if let Some(editor) = &self.editor {
            if self.deps.as_ref() == Some(&deps) {
                return editor.clone();
            }
        }
        self.destroy_editor();

        let editor = EditorHandle::new(init(), self.scheduler.clone());
        let alive = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(false));

        let listener: TransactionListener = {
            let scheduler = self.scheduler.clone();
            let on_refresh = self.on_refresh.clone();
            let alive = alive.clone();
            Rc::new(move || {
                // one refresh per burst: further transactions before the
                // scheduled frame fires are absorbed
                if pending.replace(true) {
                    return;
                }
                let pending = pending.clone();
                let on_refresh = on_refresh.clone();
                let alive = alive.clone();
                scheduler.defer_frames(2, move || {
                    pending.set(false);
                    if alive.get() {
                        on_refresh();
                    }
                });
            })
        };
        let listener_id = editor.on_transaction(listener);

        debug!("editor instance created");
        self.editor = Some(editor.clone());
        self.deps = Some(deps);
        self.listener = Some(listener_id);
        self.alive = alive;
        editor
    }

    pub fn editor(&self) -> Option<EditorHandle> {
        self.editor.clone()
    }

    /// Destroys the editor and marks the scope inactive so any scheduled
    /// refresh becomes a no-op.
    pub fn teardown(&mut self) {
        self.destroy_editor();
    }

    fn destroy_editor(&mut self) {
        self.alive.set(false);
        if let Some(editor) = self.editor.take() {
            if let Some(listener_id) = self.listener.take() {
                editor.off_transaction(listener_id);
            }
            editor.destroy();
            debug!("editor instance destroyed");
        }
        self.deps = None;
        self.listener = None;
    }
}

impl Drop for EditorScope {
    fn drop(&mut self) {
        self.destroy_editor();
    }
}
