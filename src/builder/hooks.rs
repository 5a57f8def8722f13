//! Per-name hook tables

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;

use crate::grid::LayoutGrid;

use super::placement::PlacementOverrides;
use super::tree::{Component, ComponentId, ComponentTree};

/// Registers state for a name before its component is constructed
pub type VariableHook<W> = Box<dyn Fn(&str, &mut ComponentTree<W>)>;

/// Constructs the host widget for a name.
///
/// The second argument is the sub-layout frame the widget is built into, or
/// `None` at the top level.
pub type ConstructHook<W> = Box<dyn Fn(&str, Option<ComponentId>, &mut ComponentTree<W>) -> W>;

/// Adjusts the placement of a constructed component
pub type ConfigureHook<W> = Box<dyn Fn(&Component<W>, &str) -> PlacementOverrides>;

/// The ways a name can be constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    Widget,
    SubLayout,
    Scrollable,
}

impl ConstructKind {
    /// Lookup order; the first kind with a hook for a name wins
    pub const PRIORITY: [ConstructKind; 3] = [
        ConstructKind::Widget,
        ConstructKind::SubLayout,
        ConstructKind::Scrollable,
    ];
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructKind::Widget => write!(f, "widget"),
            ConstructKind::SubLayout => write!(f, "sub-layout"),
            ConstructKind::Scrollable => write!(f, "scrollable"),
        }
    }
}

/// A nested layout description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    Grid(LayoutGrid),
    Text(String),
}

impl From<LayoutGrid> for LayoutSource {
    fn from(grid: LayoutGrid) -> Self {
        LayoutSource::Grid(grid)
    }
}

impl From<&str> for LayoutSource {
    fn from(text: &str) -> Self {
        LayoutSource::Text(text.to_string())
    }
}

impl From<String> for LayoutSource {
    fn from(text: String) -> Self {
        LayoutSource::Text(text)
    }
}

/// A registered sub-layout; text is parsed on first use
#[derive(Debug)]
pub struct SubLayout {
    text: Option<String>,
    grid: OnceCell<LayoutGrid>,
}

impl SubLayout {
    fn new(source: LayoutSource) -> Self {
        match source {
            LayoutSource::Grid(grid) => Self {
                text: None,
                grid: OnceCell::from(grid),
            },
            LayoutSource::Text(text) => Self {
                text: Some(text),
                grid: OnceCell::new(),
            },
        }
    }

    pub fn grid(&self) -> &LayoutGrid {
        self.grid
            .get_or_init(|| LayoutGrid::parse(self.text.as_deref().unwrap_or_default()))
    }

    /// Has the layout been parsed yet?
    pub fn is_parsed(&self) -> bool {
        self.grid.get().is_some()
    }
}

/// How a name is constructed, as found by [`HookTable::construct`]
pub enum Construct<'a, W> {
    Widget(&'a ConstructHook<W>),
    SubLayout(&'a SubLayout),
    Scrollable(&'a ConstructHook<W>),
}

impl<W> Construct<'_, W> {
    pub fn kind(&self) -> ConstructKind {
        match self {
            Construct::Widget(_) => ConstructKind::Widget,
            Construct::SubLayout(_) => ConstructKind::SubLayout,
            Construct::Scrollable(_) => ConstructKind::Scrollable,
        }
    }
}

/// Hooks keyed by component name.
///
/// Registering a second hook of the same kind under a name replaces the first.
pub struct HookTable<W> {
    variables: HashMap<String, VariableHook<W>>,
    widgets: HashMap<String, ConstructHook<W>>,
    layouts: HashMap<String, SubLayout>,
    scrollables: HashMap<String, ConstructHook<W>>,
    configurators: HashMap<String, ConfigureHook<W>>,
}

impl<W> Default for HookTable<W> {
    fn default() -> Self {
        Self {
            variables: HashMap::new(),
            widgets: HashMap::new(),
            layouts: HashMap::new(),
            scrollables: HashMap::new(),
            configurators: HashMap::new(),
        }
    }
}

impl<W> fmt::Debug for HookTable<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookTable")
            .field("variables", &self.variables.keys().collect::<Vec<_>>())
            .field("widgets", &self.widgets.keys().collect::<Vec<_>>())
            .field("layouts", &self.layouts.keys().collect::<Vec<_>>())
            .field("scrollables", &self.scrollables.keys().collect::<Vec<_>>())
            .field("configurators", &self.configurators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<W> HookTable<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&str, &mut ComponentTree<W>) + 'static,
    ) {
        self.variables.insert(name.into(), Box::new(hook));
    }

    pub fn add_widget(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&str, Option<ComponentId>, &mut ComponentTree<W>) -> W + 'static,
    ) {
        self.widgets.insert(name.into(), Box::new(hook));
    }

    pub fn add_layout(&mut self, name: impl Into<String>, source: impl Into<LayoutSource>) {
        self.layouts.insert(name.into(), SubLayout::new(source.into()));
    }

    pub fn add_scrollable(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&str, Option<ComponentId>, &mut ComponentTree<W>) -> W + 'static,
    ) {
        self.scrollables.insert(name.into(), Box::new(hook));
    }

    pub fn add_configurator(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&Component<W>, &str) -> PlacementOverrides + 'static,
    ) {
        self.configurators.insert(name.into(), Box::new(hook));
    }

    pub fn variable(&self, name: &str) -> Option<&VariableHook<W>> {
        self.variables.get(name)
    }

    pub fn layout(&self, name: &str) -> Option<&SubLayout> {
        self.layouts.get(name)
    }

    pub fn configurator(&self, name: &str) -> Option<&ConfigureHook<W>> {
        self.configurators.get(name)
    }

    /// Find how to construct `name`, trying kinds in priority order
    pub fn construct(&self, name: &str) -> Option<Construct<'_, W>> {
        ConstructKind::PRIORITY.iter().find_map(|kind| match kind {
            ConstructKind::Widget => self.widgets.get(name).map(Construct::Widget),
            ConstructKind::SubLayout => self.layouts.get(name).map(Construct::SubLayout),
            ConstructKind::Scrollable => self.scrollables.get(name).map(Construct::Scrollable),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kind_of(table: &HookTable<&'static str>, name: &str) -> Option<ConstructKind> {
        table.construct(name).map(|c| c.kind())
    }

    #[test]
    fn test_construct_priority() {
        let mut table: HookTable<&'static str> = HookTable::new();
        table.add_scrollable("log", |_, _, _| "text");
        assert_eq!(kind_of(&table, "log"), Some(ConstructKind::Scrollable));

        table.add_layout("log", "a | b");
        assert_eq!(kind_of(&table, "log"), Some(ConstructKind::SubLayout));

        table.add_widget("log", |_, _, _| "entry");
        assert_eq!(kind_of(&table, "log"), Some(ConstructKind::Widget));

        assert_eq!(kind_of(&table, "missing"), None);
    }

    #[test]
    fn test_re_registration_replaces() {
        let mut table: HookTable<&'static str> = HookTable::new();
        table.add_widget("ok", |_, _, _| "first");
        table.add_widget("ok", |_, _, _| "second");

        let mut tree = ComponentTree::new(LayoutGrid::parse("ok"));
        match table.construct("ok") {
            Some(Construct::Widget(hook)) => assert_eq!(hook("ok", None, &mut tree), "second"),
            _ => panic!("expected a widget hook"),
        }
    }

    #[test]
    fn test_sub_layout_parsed_on_first_use() {
        let mut table: HookTable<()> = HookTable::new();
        table.add_layout("form", "name | entry");
        let layout = table.layout("form").unwrap();
        assert!(!layout.is_parsed());
        assert_eq!(layout.grid().column_count(), 2);
        assert!(layout.is_parsed());

        table.add_layout("pre", LayoutGrid::parse("x"));
        assert!(table.layout("pre").unwrap().is_parsed());
    }
}
