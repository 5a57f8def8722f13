//! The component tree produced by a build

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::grid::LayoutGrid;

use super::placement::Placement;

/// Value held by a [`Variable`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// A named mutable value holder shared between the tree and its widgets.
///
/// Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct Variable(Rc<RefCell<Value>>);

impl Variable {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(Rc::new(RefCell::new(value.into())))
    }

    pub fn get(&self) -> Value {
        self.0.borrow().clone()
    }

    pub fn set(&self, value: impl Into<Value>) {
        *self.0.borrow_mut() = value.into();
    }

    /// Do both handles refer to the same value?
    pub fn ptr_eq(&self, other: &Variable) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Index of a node in a [`ComponentTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub usize);

/// A container laid out by its own grid
#[derive(Debug, Clone)]
pub struct Frame {
    pub grid: LayoutGrid,
    /// Placed children in row-major order
    pub children: Vec<ComponentId>,
    pub column_weights: Vec<u32>,
    pub row_weights: Vec<u32>,
}

impl Frame {
    /// A frame for `grid` with no children and no stretch
    pub fn new(grid: LayoutGrid) -> Self {
        Self {
            column_weights: vec![0; grid.column_count()],
            row_weights: vec![0; grid.row_count()],
            grid,
            children: Vec::new(),
        }
    }

    /// Give every row and column the same stretch weight
    pub fn set_uniform_weight(&mut self, weight: u32) {
        self.column_weights.fill(weight);
        self.row_weights.fill(weight);
    }
}

/// What a cell resolved to
#[derive(Debug, Clone)]
pub enum Component<W> {
    /// Built by a widget hook
    Widget(W),
    /// Built by a scrollable hook; placed together with a vertical scrollbar
    Scrollable(W),
    /// A sub-layout with its own grid
    Frame(Frame),
    /// Plain display text
    Label(String),
}

impl<W> Component<W> {
    /// The host widget, for widget and scrollable components
    pub fn widget(&self) -> Option<&W> {
        match self {
            Component::Widget(w) | Component::Scrollable(w) => Some(w),
            _ => None,
        }
    }

    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Component::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Component::Label(text) => Some(text),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Component::Widget(_) => "widget",
            Component::Scrollable(_) => "scrollable",
            Component::Frame(_) => "frame",
            Component::Label(_) => "label",
        }
    }
}

/// A placed component
#[derive(Debug, Clone)]
pub struct Node<W> {
    /// The cell token that produced this node
    pub name: String,
    pub component: Component<W>,
    pub placement: Placement,
    /// The enclosing sub-layout frame; `None` for the root grid
    pub parent: Option<ComponentId>,
}

/// Everything a build produced.
///
/// Components and variables live in two flat namespaces shared by the root
/// grid and every nested sub-layout. Registering a name again replaces the
/// earlier entry.
#[derive(Debug)]
pub struct ComponentTree<W> {
    nodes: Vec<Node<W>>,
    root: Frame,
    widgets: IndexMap<String, ComponentId>,
    variables: IndexMap<String, Variable>,
}

impl<W> ComponentTree<W> {
    pub(crate) fn new(grid: LayoutGrid) -> Self {
        Self {
            nodes: Vec::new(),
            root: Frame::new(grid),
            widgets: IndexMap::new(),
            variables: IndexMap::new(),
        }
    }

    /// The frame of the top-level grid
    pub fn root(&self) -> &Frame {
        &self.root
    }

    pub(crate) fn set_root(&mut self, root: Frame) {
        self.root = root;
    }

    pub fn node(&self, id: ComponentId) -> &Node<W> {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: ComponentId) -> &mut Node<W> {
        &mut self.nodes[id.0]
    }

    pub(crate) fn push(&mut self, node: Node<W>) -> ComponentId {
        self.nodes.push(node);
        ComponentId(self.nodes.len() - 1)
    }

    /// All nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = (ComponentId, &Node<W>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (ComponentId(i), node))
    }

    /// Children of a frame, in placement order
    pub fn children<'a>(&'a self, frame: &'a Frame) -> impl Iterator<Item = &'a Node<W>> + 'a {
        frame.children.iter().map(move |id| self.node(*id))
    }

    /// Number of placed components, nested ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Register a component under a name; the last registration wins
    pub(crate) fn register(&mut self, name: &str, id: ComponentId) {
        if let Some(previous) = self.widgets.insert(name.to_string(), id) {
            tracing::debug!(name, ?previous, current = ?id, "component name re-registered");
        }
    }

    pub fn component_id(&self, name: &str) -> Option<ComponentId> {
        self.widgets.get(name).copied()
    }

    /// The component currently registered under `name`
    pub fn widget(&self, name: &str) -> Option<&Component<W>> {
        self.component_id(name).map(|id| &self.node(id).component)
    }

    /// Registered component names in registration order
    pub fn widget_names(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(|s| s.as_str())
    }

    /// Register a variable under a name; the last registration wins
    pub fn add_variable(&mut self, name: &str, variable: Variable) {
        if self.variables.insert(name.to_string(), variable).is_some() {
            tracing::debug!(name, "variable re-registered");
        }
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::placement::Sticky;
    use crate::grid::Cell;
    use pretty_assertions::assert_eq;

    fn label_node(name: &str) -> Node<()> {
        let cell = Cell {
            column: 0,
            row: 0,
            text: name,
            column_span: 1,
            row_span: 1,
        };
        Node {
            name: name.to_string(),
            component: Component::Label(name.to_string()),
            placement: Placement::from_cell(&cell, Sticky::default()),
            parent: None,
        }
    }

    #[test]
    fn test_variable_shared_between_clones() {
        let var = Variable::new("alice");
        let handle = var.clone();
        handle.set("bob");
        assert_eq!(var.get(), Value::Text("bob".to_string()));
        assert!(var.ptr_eq(&handle));
        assert!(!var.ptr_eq(&Variable::default()));
    }

    #[test]
    fn test_register_last_write_wins() {
        let mut tree: ComponentTree<()> = ComponentTree::new(LayoutGrid::parse("a"));
        let first = tree.push(label_node("a"));
        let second = tree.push(label_node("a"));
        tree.register("a", first);
        tree.register("a", second);
        assert_eq!(tree.component_id("a"), Some(second));
        assert_eq!(tree.widget_names().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_add_variable_replaces() {
        let mut tree: ComponentTree<()> = ComponentTree::new(LayoutGrid::parse(""));
        tree.add_variable("count", Variable::new(1_i64));
        tree.add_variable("count", Variable::new(2_i64));
        assert_eq!(tree.variable("count").map(Variable::get), Some(Value::Integer(2)));
    }

    #[test]
    fn test_frame_weights() {
        let mut frame = Frame::new(LayoutGrid::parse("a | b\nc"));
        assert_eq!(frame.column_weights, vec![0, 0]);
        frame.set_uniform_weight(3);
        assert_eq!(frame.column_weights, vec![3, 3]);
        assert_eq!(frame.row_weights, vec![3, 3]);
    }
}
