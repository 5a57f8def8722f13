//! Component builder - resolves grid cells to components by name
//!
//! A builder is a reusable set of hooks keyed by cell name. Building walks a
//! grid in row-major order and, for each cell:
//!
//! 1. runs the name's variable hook, if any;
//! 2. constructs the component: a literal label when the name starts with the
//!    label prefix, otherwise the first of the widget, sub-layout, and
//!    scrollable hooks registered for the name, otherwise a plain label;
//! 3. registers it under the name;
//! 4. places it at the cell's position and spans, with any overrides from the
//!    name's configurator hook.
//!
//! Sub-layouts are resolved recursively with the same hooks, and their
//! components land in the same flat namespace as the parent's.
//!
//! # Example
//!
//! ```rust
//! use blueprint_grid::{ComponentBuilder, LayoutGrid, PlacementOverrides, Sticky, Variable};
//!
//! let builder = ComponentBuilder::<String>::new()
//!     .variable("username", |name, tree| tree.add_variable(name, Variable::default()))
//!     .widget("username", |name, _, _| format!("entry:{}", name))
//!     .widget("quit", |_, _, _| "button:Quit".to_string())
//!     .configure("quit", |_, _| PlacementOverrides::new().sticky(Sticky::E));
//!
//! let grid = LayoutGrid::parse("Username: | username\nquit");
//! let tree = builder.build(&grid).unwrap();
//!
//! assert_eq!(tree.widget("username").and_then(|c| c.widget()).unwrap(), "entry:username");
//! assert_eq!(tree.widget("Username:").and_then(|c| c.label()), Some("Username:"));
//! assert!(tree.variable("username").is_some());
//! ```

mod error;
mod hooks;
mod placement;
mod resolver;
mod tree;

pub use error::BuildError;
pub use hooks::{
    ConfigureHook, Construct, ConstructHook, ConstructKind, HookTable, LayoutSource, SubLayout,
    VariableHook,
};
pub use placement::{Placement, PlacementOverrides, Sticky};
pub use tree::{Component, ComponentId, ComponentTree, Frame, Node, Value, Variable};

use crate::config::BuilderConfig;
use crate::grid::LayoutGrid;

use resolver::Resolver;

/// A reusable definition of per-name hooks
#[derive(Debug)]
pub struct ComponentBuilder<W> {
    hooks: HookTable<W>,
    config: BuilderConfig,
}

impl<W> Default for ComponentBuilder<W> {
    fn default() -> Self {
        Self::with_config(BuilderConfig::default())
    }
}

impl<W> ComponentBuilder<W> {
    /// Create a builder with no hooks and the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            hooks: HookTable::new(),
            config,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn hooks(&self) -> &HookTable<W> {
        &self.hooks
    }

    /// Register the hook that defines variables for `name`
    pub fn variable(
        mut self,
        name: impl Into<String>,
        hook: impl Fn(&str, &mut ComponentTree<W>) + 'static,
    ) -> Self {
        self.hooks.add_variable(name, hook);
        self
    }

    /// Register the widget constructor for `name`.
    ///
    /// The hook is given the name, the enclosing sub-layout frame (`None` for
    /// the top-level grid), and the tree built so far.
    pub fn widget(
        mut self,
        name: impl Into<String>,
        hook: impl Fn(&str, Option<ComponentId>, &mut ComponentTree<W>) -> W + 'static,
    ) -> Self {
        self.hooks.add_widget(name, hook);
        self
    }

    /// Register an independent layout to embed as a frame wherever `name` appears
    pub fn layout(mut self, name: impl Into<String>, source: impl Into<LayoutSource>) -> Self {
        self.hooks.add_layout(name, source);
        self
    }

    /// Register the constructor for a widget placed with a vertical scrollbar
    pub fn scrollable(
        mut self,
        name: impl Into<String>,
        hook: impl Fn(&str, Option<ComponentId>, &mut ComponentTree<W>) -> W + 'static,
    ) -> Self {
        self.hooks.add_scrollable(name, hook);
        self
    }

    /// Register the placement configurator for `name`
    pub fn configure(
        mut self,
        name: impl Into<String>,
        hook: impl Fn(&Component<W>, &str) -> PlacementOverrides + 'static,
    ) -> Self {
        self.hooks.add_configurator(name, hook);
        self
    }

    /// Construct and place a component for every cell of `grid`
    pub fn build(&self, grid: &LayoutGrid) -> Result<ComponentTree<W>, BuildError> {
        Resolver::new(self, grid).run(grid)
    }

    /// Parse `text` and build it
    pub fn build_text(&self, text: &str) -> Result<ComponentTree<W>, BuildError> {
        self.build(&LayoutGrid::parse(text))
    }
}
