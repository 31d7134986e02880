use std::fmt;
use std::rc::Rc;
use vellum_dom::Element;

/// Key a plugin is registered and unregistered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginKey(String);

impl PluginKey {
    pub fn new(key: impl Into<String>) -> Self {
        PluginKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PluginKey {
    fn from(key: &str) -> Self {
        PluginKey(key.to_string())
    }
}

/// Selection summary passed to a menu visibility predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuContext {
    pub from: usize,
    pub to: usize,
    pub empty: bool,
}

pub type ShouldShow = Rc<dyn Fn(&MenuContext) -> bool>;

/// Opaque plugin registration payload.
///
/// The bridge only constructs and registers these; the behavior behind a
/// plugin (menu positioning, key handling) lives in the engine side.
#[derive(Clone)]
pub struct Plugin {
    pub key: PluginKey,
    pub element: Option<Element>,
    pub should_show: Option<ShouldShow>,
}

impl Plugin {
    pub fn new(key: impl Into<PluginKey>) -> Self {
        Plugin {
            key: key.into(),
            element: None,
            should_show: None,
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_should_show(mut self, should_show: ShouldShow) -> Self {
        self.should_show = Some(should_show);
        self
    }
}

impl From<String> for PluginKey {
    fn from(key: String) -> Self {
        PluginKey(key)
    }
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin")
            .field("key", &self.key)
            .field("element", &self.element)
            .field("should_show", &self.should_show.is_some())
            .finish()
    }
}
