use crate::graph::traits::{Graph, NodeId};
use crate::ingest::EdgeRecord;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed graph whose vertices are string labels interned to dense ids
///
/// Built once from a finite sequence of edge records and treated as
/// read-only afterwards; reloading replaces the whole graph rather than
/// editing it in place. The node set is exactly the set of labels that
/// appear as an endpoint of some edge.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Interned label for each vertex id, in first-seen order
    labels: Vec<String>,

    /// Reverse lookup from label to vertex id
    index: HashMap<String, NodeId>,

    /// Outgoing edges for each vertex: vertex id -> [(target, weight)]
    outgoing: Vec<Vec<(NodeId, W)>>,
}

impl<W> RouteGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        RouteGraph {
            labels: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
        }
    }

    /// Builds a graph from a sequence of validated edge records
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EdgeRecord>,
        W: From<f64>,
    {
        let mut graph = RouteGraph::new();
        for record in records {
            graph.add_edge(&record.source, &record.target, <W as From<f64>>::from(record.weight));
        }
        graph
    }

    /// Inserts a directed edge, interning both endpoint labels.
    ///
    /// A repeated (source, target) pair overwrites the stored weight: the
    /// last record loaded wins.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: W) {
        let from = self.intern(source);
        let to = self.intern(target);

        if let Some(edge) = self.outgoing[from].iter_mut().find(|(v, _)| *v == to) {
            edge.1 = weight;
        } else {
            self.outgoing[from].push((to, weight));
        }
    }

    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    /// All node labels, sorted lexicographically for stable display order
    pub fn node_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// Returns true if the label is a node of this graph
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Vertex id for a label, if the label is a node of this graph
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Label for a vertex id
    pub fn label(&self, vertex: NodeId) -> &str {
        &self.labels[vertex]
    }

    /// Outgoing (target, weight) pairs for a label.
    ///
    /// Empty for sinks and for labels that are not in the graph; callers
    /// wanting to distinguish the two should check membership first.
    pub fn neighbors(&self, label: &str) -> Vec<(&str, W)> {
        match self.index.get(label) {
            Some(&id) => self.outgoing[id]
                .iter()
                .map(|&(v, w)| (self.labels[v].as_str(), w))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Weight of the edge between two labels, if both exist and are connected
    pub fn weight(&self, source: &str, target: &str) -> Option<W> {
        let from = self.node_id(source)?;
        let to = self.node_id(target)?;
        self.edge_weight(from, to)
    }

    /// Iterates over every edge as (source label, target label, weight)
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, W)> + '_ {
        self.outgoing.iter().enumerate().flat_map(move |(u, targets)| {
            targets
                .iter()
                .map(move |&(v, w)| (self.labels[u].as_str(), self.labels[v].as_str(), w))
        })
    }
}

impl<W> Graph<W> for RouteGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        if let Some(edges) = self.outgoing.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: NodeId) -> bool {
        vertex < self.labels.len()
    }

    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<W> {
        if let Some(edges) = self.outgoing.get(from) {
            edges.iter().find(|(v, _)| *v == to).map(|(_, w)| *w)
        } else {
            None
        }
    }
}
