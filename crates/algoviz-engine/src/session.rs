//! Session management.

use crate::benchmark::{BenchmarkHarness, ComparisonCurve, StructureMode};
use crate::config::Config;
use crate::generate::random_graph;
use algoviz_algorithms::graph::{self, GraphEvent, PathAlgorithm, PathReport};
use algoviz_algorithms::tree::{self, Traversal, TreeEvent, TreeStats};
use algoviz_common::{Error, NodeId, Result, TreeNodeId, Value, ValueGenerator, ValueType};
use algoviz_core::{
    Array, Graph, LinkedList, Observer, RenderedText, SortAlgorithm, SortObserver,
    SortOutcome, Tree, TreeShape,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// The structures a session holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    /// The array and its sorted copy.
    Array,
    /// The linked list.
    List,
    /// The tree.
    Tree,
    /// The graph.
    Graph,
}

/// A traversal result with its timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    /// The visiting order used.
    pub order: Traversal,
    /// Nodes in visiting order.
    pub nodes: Vec<TreeNodeId>,
    /// Rendered values joined by spaces.
    pub text: String,
    /// Wall time in nanoseconds.
    pub elapsed_ns: u64,
}

/// A path query result with its timing.
#[derive(Debug, Clone, PartialEq)]
pub struct PathQuery {
    /// All simple paths plus the shortest path.
    pub report: PathReport,
    /// Wall time in nanoseconds.
    pub elapsed_ns: u64,
}

/// The state one front end works with.
///
/// A session owns one structure of each kind and a random generator seeded
/// from the configuration. Sorting the array keeps the unsorted "before"
/// array and stores the result as a separate "after" copy.
///
/// # Examples
///
/// ```
/// use algoviz_engine::{Config, Session};
/// use algoviz_core::{NoopObserver, SortAlgorithm};
/// use algoviz_common::ValueType;
///
/// let mut session = Session::with_config(Config::default().with_seed(1))?;
/// session.load_array(ValueType::Integer, "5 3 8 1");
/// session.sort_array(SortAlgorithm::Bubble, &mut NoopObserver);
/// assert_eq!(session.sorted_array().map(|a| a.to_text(false).to_string()),
///            Some("1   3   5   8".to_string()));
/// # Ok::<(), algoviz_common::Error>(())
/// ```
#[derive(Debug)]
pub struct Session {
    config: Config,
    generator: ValueGenerator,
    before: Array,
    after: Option<Array>,
    list: LinkedList,
    tree: Tree,
    graph: Graph,
}

impl Session {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::build(Config::default())
    }

    /// Creates a session with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration is inconsistent.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let generator = ValueGenerator::new(config.seed);
        let tree = Tree::new(ValueType::Integer, config.tree_shape);
        Self {
            config,
            generator,
            before: Array::new(ValueType::Integer, 0),
            after: None,
            list: LinkedList::new(ValueType::Integer, false),
            tree,
            graph: Graph::new(ValueType::Integer, true),
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Empties one structure, keeping its value kind.
    pub fn reset(&mut self, kind: StructureKind) {
        match kind {
            StructureKind::Array => {
                self.before = Array::new(self.before.value_type(), 0);
                self.after = None;
            }
            StructureKind::List => self.list.clear(),
            StructureKind::Tree => self.tree.clear(),
            StructureKind::Graph => self.graph.clear(),
        }
        tracing::debug!(?kind, "structure reset");
    }

    // === Array ===

    /// Replaces the array with `size` random values.
    pub fn generate_array(&mut self, value_type: ValueType, size: usize) -> &Array {
        let mut array = Array::new(value_type, size);
        array.fill_random(&mut self.generator);
        tracing::info!(value_type = value_type.name(), size, "array generated");
        self.replace_array(array)
    }

    /// Replaces the array with values parsed from whitespace-separated tokens.
    pub fn load_array(&mut self, value_type: ValueType, input: &str) -> &Array {
        let array = Array::parse(value_type, input);
        tracing::info!(value_type = value_type.name(), size = array.len(), "array loaded");
        self.replace_array(array)
    }

    fn replace_array(&mut self, array: Array) -> &Array {
        self.after = None;
        self.before = array;
        &self.before
    }

    /// Returns the unsorted array.
    #[must_use]
    pub fn array(&self) -> &Array {
        &self.before
    }

    /// Returns the sorted copy, if the array has been sorted.
    #[must_use]
    pub fn sorted_array(&self) -> Option<&Array> {
        self.after.as_ref()
    }

    /// Sorts a copy of the array, leaving the original untouched.
    ///
    /// An empty array yields a zero outcome and no observer calls.
    pub fn sort_array<O>(&mut self, algorithm: SortAlgorithm, observer: &mut O) -> SortOutcome
    where
        O: SortObserver<Value> + ?Sized,
    {
        let mut sorted = self.before.clone();
        let outcome = sorted.sort(algorithm, observer);
        self.after = Some(sorted);
        outcome
    }

    /// Renders the unsorted array.
    #[must_use]
    pub fn array_text(&self, styled: bool) -> RenderedText {
        self.before
            .to_text_with_limit(styled, self.config.array_styled_limit)
    }

    /// Renders the sorted copy, if any.
    #[must_use]
    pub fn sorted_array_text(&self, styled: bool) -> Option<RenderedText> {
        self.after
            .as_ref()
            .map(|a| a.to_text_with_limit(styled, self.config.array_styled_limit))
    }

    // === Linked List ===

    /// Replaces the list with an empty one.
    pub fn create_list(&mut self, value_type: ValueType, doubly: bool) -> &LinkedList {
        self.list = LinkedList::new(value_type, doubly);
        &self.list
    }

    /// Replaces the list with `size` random values.
    pub fn generate_list(&mut self, value_type: ValueType, doubly: bool, size: usize) -> &LinkedList {
        let mut list = LinkedList::new(value_type, doubly);
        list.fill_random(size, &mut self.generator);
        tracing::info!(value_type = value_type.name(), doubly, size, "list generated");
        self.list = list;
        &self.list
    }

    /// Replaces the list with values parsed from whitespace-separated tokens.
    pub fn load_list(&mut self, value_type: ValueType, doubly: bool, input: &str) -> &LinkedList {
        self.list = LinkedList::parse(value_type, doubly, input);
        tracing::info!(
            value_type = value_type.name(),
            doubly,
            size = self.list.len(),
            "list loaded"
        );
        &self.list
    }

    /// Returns the list.
    #[must_use]
    pub fn list(&self) -> &LinkedList {
        &self.list
    }

    /// Parses `token` and inserts it at `position`. Position 0 inserts at the
    /// head; a negative or past-the-end position appends.
    ///
    /// # Errors
    ///
    /// Propagates the list's insertion errors.
    pub fn list_insert(&mut self, token: &str, position: isize) -> Result<()> {
        let value = self.list.value_type().parse_token(token);
        self.list.insert_at(value, position)?;
        Ok(())
    }

    /// Deletes the node at `position`, returning its value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIndex` if `position` is out of range; the list
    /// is left unchanged.
    pub fn list_delete(&mut self, position: usize) -> Result<Value> {
        self.list.delete_at(position)
    }

    /// Parses `token` and stores it at `position`, returning the old value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIndex` if `position` is out of range.
    pub fn list_modify(&mut self, position: usize, token: &str) -> Result<Value> {
        let value = self.list.value_type().parse_token(token);
        self.list.modify_at(position, value)
    }

    /// Sorts the list in place.
    pub fn sort_list<O>(&mut self, algorithm: SortAlgorithm, observer: &mut O) -> SortOutcome
    where
        O: SortObserver<Value> + ?Sized,
    {
        self.list.sort(algorithm, observer)
    }

    /// Renders the list.
    #[must_use]
    pub fn list_text(&self, styled: bool) -> RenderedText {
        self.list
            .to_text_with_limit(styled, self.config.list_styled_limit)
    }

    // === Tree ===

    /// Replaces the tree with an empty one of the given shape.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for an N-ary degree of zero; the current
    /// tree is kept.
    pub fn create_tree(&mut self, value_type: ValueType, shape: TreeShape) -> Result<&Tree> {
        shape.validate()?;
        self.tree = Tree::new(value_type, shape);
        Ok(&self.tree)
    }

    /// Replaces the tree with `count` random values inserted one by one.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for an N-ary degree of zero, and
    /// propagates insertion errors; none occur for a fresh tree.
    pub fn generate_tree(&mut self, value_type: ValueType, shape: TreeShape, count: usize) -> Result<&Tree> {
        shape.validate()?;
        let mut fresh = Tree::new(value_type, shape);
        tree::insert_random(&mut fresh, count, &mut self.generator)?;
        tracing::info!(value_type = value_type.name(), ?shape, count, "tree generated");
        self.tree = fresh;
        Ok(&self.tree)
    }

    /// Returns the tree.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Parses `token` and inserts it by the tree's policy.
    ///
    /// # Errors
    ///
    /// Propagates insertion errors.
    pub fn tree_insert<O>(&mut self, token: &str, observer: &mut O) -> Result<TreeNodeId>
    where
        O: Observer<TreeEvent> + ?Sized,
    {
        let value = self.tree.value_type().parse_token(token);
        tree::insert_observed(&mut self.tree, value, observer)
    }

    /// Finds the first node, breadth-first, rendering as `text`.
    pub fn tree_find<O>(&self, text: &str, observer: &mut O) -> Option<TreeNodeId>
    where
        O: Observer<TreeEvent> + ?Sized,
    {
        tree::find(&self.tree, text, observer)
    }

    /// Deletes the subtree rooted at the node rendering as `text`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if no node matches.
    pub fn tree_delete<O>(&mut self, text: &str, observer: &mut O) -> Result<usize>
    where
        O: Observer<TreeEvent> + ?Sized,
    {
        tree::delete(&mut self.tree, text, observer)
    }

    /// Replaces the value of the node rendering as `text` with `token`
    /// parsed, returning the old value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if no node matches.
    pub fn tree_modify<O>(&mut self, text: &str, token: &str, observer: &mut O) -> Result<Value>
    where
        O: Observer<TreeEvent> + ?Sized,
    {
        let value = self.tree.value_type().parse_token(token);
        tree::modify(&mut self.tree, text, value, observer)
    }

    /// Walks the tree in `order`.
    pub fn traverse<O>(&self, order: Traversal, observer: &mut O) -> TraversalReport
    where
        O: Observer<TreeEvent> + ?Sized,
    {
        let start = Instant::now();
        let nodes = tree::traverse_observed(&self.tree, order, observer);
        let elapsed_ns = elapsed_since(start);
        let text = nodes
            .iter()
            .filter_map(|&id| self.tree.value(id).map(Value::render))
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!(order = order.name(), nodes = nodes.len(), elapsed_ns, "tree traversed");
        TraversalReport {
            order,
            nodes,
            text,
            elapsed_ns,
        }
    }

    /// Rebuilds the tree as a height-balanced BST and returns the elapsed
    /// nanoseconds.
    ///
    /// # Errors
    ///
    /// Propagates arena errors; none occur for a well-formed tree.
    pub fn rebalance_tree(&mut self) -> Result<u64> {
        let start = Instant::now();
        tree::rebalance(&mut self.tree)?;
        let elapsed_ns = elapsed_since(start);
        tracing::debug!(nodes = self.tree.len(), elapsed_ns, "tree rebalanced");
        Ok(elapsed_ns)
    }

    /// Converts an N-ary tree to left-child/right-sibling binary form.
    ///
    /// # Errors
    ///
    /// Propagates arena errors; none occur for a well-formed tree.
    pub fn convert_tree(&mut self) -> Result<()> {
        tree::convert_to_binary(&mut self.tree)
    }

    /// Returns the node count and depth.
    #[must_use]
    pub fn tree_stats(&self) -> TreeStats {
        tree::stats(&self.tree)
    }

    // === Graph ===

    /// Replaces the graph with an empty one.
    pub fn create_graph(&mut self, value_type: ValueType, directed: bool) -> &Graph {
        self.graph = Graph::new(value_type, directed);
        &self.graph
    }

    /// Replaces the graph with a random connected one.
    ///
    /// # Errors
    ///
    /// Propagates graph construction errors.
    pub fn generate_graph(&mut self, value_type: ValueType, directed: bool) -> Result<&Graph> {
        self.graph = random_graph(value_type, directed, &mut self.generator)?;
        Ok(&self.graph)
    }

    /// Returns the graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Switches edge direction for edges added from now on.
    pub fn set_graph_directed(&mut self, directed: bool) {
        self.graph.set_directed(directed);
    }

    /// Parses `token` and adds it as a node.
    ///
    /// # Errors
    ///
    /// Propagates graph errors.
    pub fn add_graph_node(&mut self, token: &str) -> Result<NodeId> {
        let value = self.graph.value_type().parse_token(token);
        self.graph.add_node(value)
    }

    /// Adds an edge between the nodes labeled `from` and `to`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if either label matches no node.
    pub fn add_graph_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        let from = self.resolve_node(from)?;
        let to = self.resolve_node(to)?;
        self.graph.add_edge(from, to, weight)
    }

    /// Returns the id of the first node labeled `label`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if no node matches.
    pub fn resolve_node(&self, label: &str) -> Result<NodeId> {
        self.graph
            .find_by_value(label)
            .ok_or_else(|| Error::NodeNotFound(label.to_string()))
    }

    /// Enumerates simple paths between two labeled nodes and runs
    /// `algorithm` on the same pair.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` for an unknown label and
    /// `Error::NegativeWeight` when Dijkstra meets a negative edge.
    pub fn find_paths<O>(&self, algorithm: PathAlgorithm, from: &str, to: &str, observer: &mut O) -> Result<PathQuery>
    where
        O: Observer<GraphEvent> + ?Sized,
    {
        let source = self.resolve_node(from)?;
        let destination = self.resolve_node(to)?;
        let start = Instant::now();
        let report = graph::find_paths(
            &self.graph,
            algorithm,
            source,
            destination,
            self.config.path_limit,
            observer,
        )?;
        let elapsed_ns = elapsed_since(start);
        tracing::debug!(
            algorithm = algorithm.name(),
            %source,
            %destination,
            paths = report.all_paths.len(),
            elapsed_ns,
            "paths found"
        );
        Ok(PathQuery { report, elapsed_ns })
    }

    // === Benchmark ===

    /// Times every sort algorithm up to `max_size`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the benchmark settings are
    /// inconsistent.
    pub fn benchmark(
        &mut self,
        max_size: usize,
        mode: StructureMode,
        value_type: ValueType,
    ) -> Result<Vec<ComparisonCurve>> {
        self.benchmark_with_progress(max_size, mode, value_type, |_, _| {})
    }

    /// Like [`benchmark`](Self::benchmark), reporting `(done, total)` after
    /// every sample.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the benchmark settings are
    /// inconsistent.
    pub fn benchmark_with_progress<F>(
        &mut self,
        max_size: usize,
        mode: StructureMode,
        value_type: ValueType,
        progress: F,
    ) -> Result<Vec<ComparisonCurve>>
    where
        F: FnMut(usize, usize),
    {
        let mut harness = BenchmarkHarness::new(&self.config, &mut self.generator)?;
        Ok(harness.run_with_progress(max_size, mode, value_type, progress))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn elapsed_since(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX)
}
