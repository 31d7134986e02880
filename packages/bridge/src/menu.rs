use crate::EditorHandle;
use tracing::debug;
use vellum_dom::{Element, Node};
use vellum_engine::{Plugin, PluginKey, ShouldShow};

/// Options shared by the two contextual menu views.
#[derive(Default)]
pub struct MenuOptions {
    /// Defaults to `bubbleMenu` / `floatingMenu` per view kind.
    pub plugin_key: Option<PluginKey>,
    pub should_show: Option<ShouldShow>,
    pub class_name: Option<String>,
}

struct MenuView {
    editor: EditorHandle,
    element: Element,
    key: PluginKey,
    registered: bool,
}

impl MenuView {
    fn mount(
        editor: &EditorHandle,
        default_key: &str,
        options: MenuOptions,
        children: Vec<Node>,
    ) -> Self {
        let key = options
            .plugin_key
            .unwrap_or_else(|| PluginKey::from(default_key));

        // hidden until the engine-side positioning plugin shows it
        let element = Element::new("div");
        element.set_style("visibility", "hidden");
        if let Some(class_name) = &options.class_name {
            element.add_class(class_name);
        }
        for child in children {
            element.append_child(child);
        }

        let registered = if editor.is_destroyed() {
            false
        } else {
            let mut plugin = Plugin::new(key.clone()).with_element(element.clone());
            if let Some(should_show) = options.should_show {
                plugin = plugin.with_should_show(should_show);
            }
            editor.register_plugin(plugin);
            debug!(key = key.as_str(), "menu plugin registered");
            true
        };

        MenuView {
            editor: editor.clone(),
            element,
            key,
            registered,
        }
    }

    fn unmount(&mut self) {
        if self.registered {
            self.editor.unregister_plugin(&self.key);
            self.registered = false;
        }
    }
}

/// Selection-bound contextual menu: registers its element and visibility
/// predicate as an engine plugin for the engine-side positioning logic.
pub struct BubbleMenuView {
    inner: MenuView,
}

impl BubbleMenuView {
    pub fn mount(editor: &EditorHandle, options: MenuOptions, children: Vec<Node>) -> Self {
        BubbleMenuView {
            inner: MenuView::mount(editor, "bubbleMenu", options, children),
        }
    }

    pub fn element(&self) -> Element {
        self.inner.element.clone()
    }

    pub fn plugin_key(&self) -> &PluginKey {
        &self.inner.key
    }

    pub fn unmount(&mut self) {
        self.inner.unmount();
    }
}

/// Floating contextual menu bound to a visibility predicate.
pub struct FloatingMenuView {
    inner: MenuView,
}

impl FloatingMenuView {
    pub fn mount(editor: &EditorHandle, options: MenuOptions, children: Vec<Node>) -> Self {
        FloatingMenuView {
            inner: MenuView::mount(editor, "floatingMenu", options, children),
        }
    }

    pub fn element(&self) -> Element {
        self.inner.element.clone()
    }

    pub fn plugin_key(&self) -> &PluginKey {
        &self.inner.key
    }

    pub fn unmount(&mut self) {
        self.inner.unmount();
    }
}
