//! Cell resolution - turns grid cells into placed components

use crate::error::GridError;
use crate::grid::{lint, Cell, LayoutGrid};

use super::error::BuildError;
use super::hooks::Construct;
use super::placement::Placement;
use super::tree::{Component, ComponentId, ComponentTree, Frame, Node};
use super::ComponentBuilder;

/// State of one in-flight build
pub(crate) struct Resolver<'a, W> {
    builder: &'a ComponentBuilder<W>,
    tree: ComponentTree<W>,
    /// Sub-layouts currently being expanded, outermost first
    resolving: Vec<String>,
}

impl<'a, W> Resolver<'a, W> {
    pub(crate) fn new(builder: &'a ComponentBuilder<W>, grid: &LayoutGrid) -> Self {
        Self {
            builder,
            tree: ComponentTree::new(grid.clone()),
            resolving: Vec::new(),
        }
    }

    /// Resolve every cell of the top-level grid
    pub(crate) fn run(mut self, grid: &LayoutGrid) -> Result<ComponentTree<W>, BuildError> {
        let root = self.add_components(grid, None)?;
        self.tree.set_root(root);
        Ok(self.tree)
    }

    /// Resolve every cell of `grid` in row-major order into a new frame
    fn add_components(
        &mut self,
        grid: &LayoutGrid,
        parent: Option<ComponentId>,
    ) -> Result<Frame, BuildError> {
        self.check_layout(grid)?;

        let mut frame = Frame::new(grid.clone());
        for cell in grid.cells() {
            let id = self.define_component(&cell, parent)?;
            frame.children.push(id);
        }
        frame.set_uniform_weight(self.builder.config().growth_weight);
        Ok(frame)
    }

    fn check_layout(&self, grid: &LayoutGrid) -> Result<(), BuildError> {
        if !self.builder.config().strict && !tracing::enabled!(tracing::Level::WARN) {
            return Ok(());
        }
        match lint::overlaps_in(grid).into_iter().next() {
            Some(warning) if self.builder.config().strict => {
                Err(GridError::malformed(warning.message).into())
            }
            Some(warning) => {
                tracing::warn!(detail = %warning.message, "overlapping cells in layout");
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Resolve a single cell: state, construction, registration, placement
    fn define_component(
        &mut self,
        cell: &Cell<'_>,
        parent: Option<ComponentId>,
    ) -> Result<ComponentId, BuildError> {
        let builder = self.builder;
        let hooks = builder.hooks();
        let config = builder.config();
        let name = cell.text;

        if let Some(define_variables) = hooks.variable(name) {
            tracing::trace!(name, "defining variables");
            define_variables(name, &mut self.tree);
        }

        let placement = Placement::from_cell(cell, config.sticky);
        let id = match name.strip_prefix(config.label_prefix) {
            Some(text) => self.place(name, Component::Label(text.to_string()), placement, parent),
            None => match hooks.construct(name) {
                Some(Construct::Widget(make)) => {
                    let widget = make(name, parent, &mut self.tree);
                    self.place(name, Component::Widget(widget), placement, parent)
                }
                Some(Construct::Scrollable(make)) => {
                    let widget = make(name, parent, &mut self.tree);
                    self.place(name, Component::Scrollable(widget), placement, parent)
                }
                Some(Construct::SubLayout(layout)) => {
                    self.place_sub_layout(name, layout.grid(), placement, parent)?
                }
                None => self.place(name, Component::Label(name.to_string()), placement, parent),
            },
        };

        tracing::debug!(
            name,
            kind = self.tree.node(id).component.kind(),
            column = cell.column,
            row = cell.row,
            "resolved cell"
        );

        if let Some(configure) = hooks.configurator(name) {
            tracing::trace!(name, "configuring placement");
            let overrides = configure(&self.tree.node(id).component, name);
            self.tree.node_mut(id).placement.apply(&overrides);
        }

        Ok(id)
    }

    fn place(
        &mut self,
        name: &str,
        component: Component<W>,
        placement: Placement,
        parent: Option<ComponentId>,
    ) -> ComponentId {
        let id = self.tree.push(Node {
            name: name.to_string(),
            component,
            placement,
            parent,
        });
        self.tree.register(name, id);
        id
    }

    /// Place a frame and resolve its grid into it.
    ///
    /// The frame is registered before its children, so it precedes them in
    /// [`ComponentTree::widget_names`].
    fn place_sub_layout(
        &mut self,
        name: &str,
        grid: &LayoutGrid,
        placement: Placement,
        parent: Option<ComponentId>,
    ) -> Result<ComponentId, BuildError> {
        if self.resolving.iter().any(|n| n == name) {
            let mut chain = self.resolving.clone();
            chain.push(name.to_string());
            return Err(BuildError::circular(chain));
        }

        let id = self.place(name, Component::Frame(Frame::new(grid.clone())), placement, parent);

        self.resolving.push(name.to_string());
        let frame = self.add_components(grid, Some(id));
        self.resolving.pop();

        self.tree.node_mut(id).component = Component::Frame(frame?);
        Ok(id)
    }
}
