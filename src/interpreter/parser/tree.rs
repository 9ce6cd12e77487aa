use crate::interpreter::parser::grammar::Symbol;

/// Index of a node inside a [`ParseTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    /// The grammar symbol this node stands for.
    pub symbol:   Symbol,
    /// Index of the first token covered by this node.
    pub start:    usize,
    /// One past the last token covered. Equal to `start` for empty nodes.
    pub end:      usize,
    /// Children in source order.
    pub children: Vec<NodeId>,
    /// The enclosing node; `None` only for the root.
    pub parent:   Option<NodeId>,
    /// For terminals, the index of the matched token.
    pub token:    Option<usize>,
}

/// An arena-backed parse tree.
///
/// Nodes refer to each other by [`NodeId`], so a node can reach both its
/// parent and its children without shared ownership. The root is always
/// node `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseTree {
    nodes: Vec<ParseNode>,
}

impl ParseTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a node and links it under `parent`.
    ///
    /// The node starts out empty at token index `start`; its end is set with
    /// [`ParseTree::close`] once its children are parsed.
    pub fn push(&mut self, symbol: Symbol, start: usize, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ParseNode { symbol,
                                    start,
                                    end: start,
                                    children: Vec::new(),
                                    parent,
                                    token: None });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    /// Records the token matched by a terminal node and extends its span
    /// over it.
    pub fn bind_token(&mut self, id: NodeId, token: usize) {
        let node = &mut self.nodes[id.0];
        node.token = Some(token);
        node.end = token + 1;
    }

    /// Sets the end of a node's span.
    pub fn close(&mut self, id: NodeId, end: usize) {
        self.nodes[id.0].end = end;
    }

    /// The root node, or `None` for a tree with no nodes.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &ParseNode {
        &self.nodes[id.0]
    }

    /// The enclosing node of `id`.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The children of `id` in source order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// The first child of `id` with the given symbol.
    #[must_use]
    pub fn child(&self, id: NodeId, symbol: Symbol) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.node(child).symbol == symbol)
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every terminal node in source order (left-to-right leaf order).
    #[must_use]
    pub fn terminals(&self) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let Some(root) = self.root() else {
            return leaves;
        };
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            let node = self.node(id);
            if node.symbol.is_terminal() {
                leaves.push(id);
            } else {
                pending.extend(node.children.iter().rev());
            }
        }
        leaves
    }

    /// Iterates over all nodes with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ParseNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }
}
