use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// One decoration applied over a node range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub from: usize,
    pub to: usize,
    pub attrs: IndexMap<String, String>,
}

/// Shared, immutable set of decorations.
///
/// The engine passes the same set instance back on redraws that did not
/// touch it, so `PartialEq` is handle identity: the adapter's
/// "nothing changed" short-circuit depends on that.
#[derive(Clone)]
pub struct DecorationSet {
    decorations: Rc<Vec<Decoration>>,
}

impl DecorationSet {
    pub fn new(decorations: Vec<Decoration>) -> Self {
        DecorationSet {
            decorations: Rc::new(decorations),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }
}

impl PartialEq for DecorationSet {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.decorations, &other.decorations)
    }
}

impl Eq for DecorationSet {}

impl fmt::Debug for DecorationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DecorationSet")
            .field(&self.decorations.len())
            .finish()
    }
}
