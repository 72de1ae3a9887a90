//! FlowchartBuilder — the append-only editing model around the node list.
//!
//! States move `Empty → Building → Ended`; `delete_last` can step back from
//! `Ended` and `reset` returns to `Empty`. Every node handed to layout and
//! rendering has already passed these checks.

use std::collections::HashSet;

use tracing::debug;

use crate::config::{MAX_TEXT_LINES, RenderConfig};
use crate::error::{Error, Result};
use crate::layout::graph::FlowGraph;
use crate::renderers::text::fit_text;
use crate::syntax::types::{Direction, Node, NodeId};

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowchartState {
    /// No nodes yet; only a start node may be added.
    Empty,
    Building,
    /// An end node exists; nothing may be appended.
    Ended,
}

// ─── StepSpec ────────────────────────────────────────────────────────────────

/// How a new step attaches to earlier nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepLink {
    Regular { source: NodeId, direction: Direction },
    Merge { first: NodeId, second: NodeId },
}

/// Everything needed to append one non-terminal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSpec {
    /// Raw text; wrapped to the box width on insertion.
    pub text: String,
    pub link: StepLink,
    pub loop_target: Option<NodeId>,
}

impl StepSpec {
    pub fn regular(text: impl Into<String>, source: NodeId, direction: Direction) -> Self {
        Self {
            text: text.into(),
            link: StepLink::Regular { source, direction },
            loop_target: None,
        }
    }

    pub fn merge(text: impl Into<String>, first: NodeId, second: NodeId) -> Self {
        Self {
            text: text.into(),
            link: StepLink::Merge { first, second },
            loop_target: None,
        }
    }

    pub fn looping_to(mut self, target: NodeId) -> Self {
        self.loop_target = Some(target);
        self
    }
}

// ─── FlowchartBuilder ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct FlowchartBuilder {
    nodes: Vec<Node>,
    /// Last issued id number; only `reset` rewinds it.
    counter: u32,
    ended: bool,
    config: RenderConfig,
}

impl FlowchartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn state(&self) -> FlowchartState {
        if self.nodes.is_empty() {
            FlowchartState::Empty
        } else if self.ended {
            FlowchartState::Ended
        } else {
            FlowchartState::Building
        }
    }

    /// Nodes a new step, merge or loop may refer to.
    pub fn connectable_sources(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| !n.is_end).collect()
    }

    /// Nodes nothing connects from yet: the default sources of the end node.
    pub fn end_candidates(&self) -> Vec<NodeId> {
        FlowGraph::from_nodes(&self.nodes).dangling()
    }

    // ─── Transitions ─────────────────────────────────────────────────────────

    pub fn add_start(&mut self, text: &str) -> Result<NodeId> {
        if self.state() != FlowchartState::Empty {
            return Err(Error::AlreadyStarted);
        }
        let lines = self.fit(text)?;
        let node = Node::start(self.issue_id(), lines);
        let id = node.id;
        debug!(%id, label = node.label(), "added start node");
        self.append(node);
        Ok(id)
    }

    pub fn add_step(&mut self, spec: StepSpec) -> Result<NodeId> {
        self.require_building()?;
        let lines = self.fit(&spec.text)?;

        match spec.link {
            StepLink::Regular { source, .. } => {
                self.connectable(source)?;
            }
            StepLink::Merge { first, second } => {
                self.connectable(first)?;
                self.connectable(second)?;
                if first == second {
                    return Err(Error::DuplicateSource(first));
                }
            }
        }
        if let Some(target) = spec.loop_target {
            self.connectable(target)?;
        }

        let id = self.issue_id();
        let node = match spec.link {
            StepLink::Regular { source, direction } => Node::step(id, lines, source, direction),
            StepLink::Merge { first, second } => Node::merge(id, lines, first, second),
        };
        let node = match spec.loop_target {
            Some(target) => node.with_loop(target),
            None => node,
        };
        debug!(%id, label = node.label(), sources = node.connections.len(), "added step");
        self.append(node);
        Ok(id)
    }

    /// Append the end node fed by `sources`, in the given order.
    pub fn add_end(&mut self, sources: Vec<NodeId>) -> Result<NodeId> {
        self.require_building()?;
        if sources.is_empty() {
            return Err(Error::NoEndSources);
        }
        let mut seen = HashSet::new();
        for &source in &sources {
            self.connectable(source)?;
            if !seen.insert(source) {
                return Err(Error::DuplicateSource(source));
            }
        }
        let id = self.issue_id();
        debug!(%id, sources = sources.len(), "added end node");
        self.append(Node::end(id, sources));
        self.ended = true;
        Ok(id)
    }

    /// Append the end node fed by every dangling step.
    pub fn add_end_to_dangling(&mut self) -> Result<NodeId> {
        self.require_building()?;
        self.add_end(self.end_candidates())
    }

    /// Remove the most recent node. The start node stays.
    pub fn delete_last(&mut self) -> Result<Node> {
        if self.nodes.len() <= 1 {
            return Err(Error::CannotDeleteStart);
        }
        let removed = self.nodes.pop().ok_or(Error::CannotDeleteStart)?;
        if removed.is_end {
            self.ended = false;
        }
        debug!(id = %removed.id, label = removed.label(), "deleted last node");
        Ok(removed)
    }

    pub fn reset(&mut self) {
        self.nodes.clear();
        self.counter = 0;
        self.ended = false;
        debug!("flowchart reset");
    }

    // ─── Rendering ───────────────────────────────────────────────────────────

    pub fn render(&self) -> String {
        crate::render_with_config(&self.nodes, &self.config)
    }

    // ─── Private helpers ─────────────────────────────────────────────────────

    /// Push `node`. Every source precedes its target, so the edges stay acyclic.
    fn append(&mut self, node: Node) {
        let id = node.id;
        self.nodes.push(node);
        debug_assert!(
            FlowGraph::from_nodes(&self.nodes).is_dag(),
            "{id} closed a cycle"
        );
    }

    fn issue_id(&mut self) -> NodeId {
        self.counter += 1;
        NodeId(self.counter)
    }

    fn fit(&self, text: &str) -> Result<Vec<String>> {
        let lines = fit_text(text, self.config.max_text_width(), MAX_TEXT_LINES);
        if lines.is_empty() {
            return Err(Error::EmptyText);
        }
        Ok(lines)
    }

    fn require_building(&self) -> Result<()> {
        match self.state() {
            FlowchartState::Empty => Err(Error::NotStarted),
            FlowchartState::Ended => Err(Error::AlreadyEnded),
            FlowchartState::Building => Ok(()),
        }
    }

    fn connectable(&self, id: NodeId) -> Result<&Node> {
        let node = self.node(id).ok_or(Error::UnknownNode(id))?;
        if node.is_end {
            return Err(Error::EndNodeReferenced(id));
        }
        Ok(node)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::types::NodeKind;

    fn started() -> FlowchartBuilder {
        let mut b = FlowchartBuilder::new();
        b.add_start("Begin").unwrap();
        b
    }

    #[test]
    fn test_new_builder_is_empty() {
        let b = FlowchartBuilder::new();
        assert_eq!(b.state(), FlowchartState::Empty);
        assert!(b.nodes().is_empty());
        assert_eq!(b.render(), crate::NO_NODES_PLACEHOLDER);
    }

    #[test]
    fn test_add_start() {
        let b = started();
        assert_eq!(b.state(), FlowchartState::Building);
        assert_eq!(b.nodes()[0].id, NodeId(1));
        assert_eq!(b.nodes()[0].lines, vec!["Begin"]);
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut b = started();
        assert_eq!(b.add_start("Again"), Err(Error::AlreadyStarted));
    }

    #[test]
    fn test_blank_text_rejected() {
        let mut b = FlowchartBuilder::new();
        assert_eq!(b.add_start("   \n "), Err(Error::EmptyText));
        assert_eq!(b.state(), FlowchartState::Empty);
    }

    #[test]
    fn test_step_before_start_rejected() {
        let mut b = FlowchartBuilder::new();
        let spec = StepSpec::regular("A", NodeId(1), Direction::Down);
        assert_eq!(b.add_step(spec), Err(Error::NotStarted));
    }

    #[test]
    fn test_long_text_wraps_to_two_lines() {
        let mut b = started();
        let id = b
            .add_step(StepSpec::regular(
                "validate every field of the incoming request payload",
                NodeId(1),
                Direction::Down,
            ))
            .unwrap();
        let node = b.node(id).unwrap();
        assert_eq!(node.lines.len(), 2);
        assert!(node.lines.iter().all(|l| l.chars().count() <= 21));
    }

    #[test]
    fn test_add_regular_and_merge() {
        let mut b = started();
        let a = b.add_step(StepSpec::regular("A", NodeId(1), Direction::Down)).unwrap();
        let c = b.add_step(StepSpec::regular("B", a, Direction::Right)).unwrap();
        let m = b.add_step(StepSpec::merge("Done", a, c)).unwrap();
        let merge = b.node(m).unwrap();
        assert_eq!(merge.kind, NodeKind::Merge);
        assert_eq!(merge.connections, vec![a, c]);
    }

    #[test]
    fn test_merge_sources_must_differ() {
        let mut b = started();
        let spec = StepSpec::merge("M", NodeId(1), NodeId(1));
        assert_eq!(b.add_step(spec), Err(Error::DuplicateSource(NodeId(1))));
    }

    #[test]
    fn test_unknown_source_rejected() {
        let mut b = started();
        let spec = StepSpec::regular("A", NodeId(5), Direction::Down);
        assert_eq!(b.add_step(spec), Err(Error::UnknownNode(NodeId(5))));
        assert_eq!(b.nodes().len(), 1);
    }

    #[test]
    fn test_loop_target_recorded() {
        let mut b = started();
        let a = b.add_step(StepSpec::regular("A", NodeId(1), Direction::Down)).unwrap();
        let r = b
            .add_step(StepSpec::regular("Retry", a, Direction::Down).looping_to(NodeId(1)))
            .unwrap();
        assert_eq!(b.node(r).unwrap().loop_target, Some(NodeId(1)));
    }

    #[test]
    fn test_end_to_dangling() {
        let mut b = started();
        let a = b.add_step(StepSpec::regular("A", NodeId(1), Direction::Down)).unwrap();
        let c = b.add_step(StepSpec::regular("B", NodeId(1), Direction::Right)).unwrap();
        assert_eq!(b.end_candidates(), vec![a, c]);
        let end = b.add_end_to_dangling().unwrap();
        assert_eq!(b.state(), FlowchartState::Ended);
        assert_eq!(b.node(end).unwrap().connections, vec![a, c]);
        assert!(b.end_candidates().is_empty());
    }

    #[test]
    fn test_edges_stay_acyclic_with_loops() {
        let mut b = started();
        let a = b.add_step(StepSpec::regular("A", NodeId(1), Direction::Down)).unwrap();
        let c = b
            .add_step(StepSpec::regular("B", a, Direction::Right).looping_to(NodeId(1)))
            .unwrap();
        let m = b.add_step(StepSpec::merge("M", a, c).looping_to(a)).unwrap();
        b.add_end(vec![m]).unwrap();
        assert!(FlowGraph::from_nodes(b.nodes()).is_dag());
    }

    #[test]
    fn test_no_append_after_end() {
        let mut b = started();
        b.add_end(vec![NodeId(1)]).unwrap();
        let spec = StepSpec::regular("late", NodeId(1), Direction::Down);
        assert_eq!(b.add_step(spec), Err(Error::AlreadyEnded));
        assert_eq!(b.add_end(vec![NodeId(1)]), Err(Error::AlreadyEnded));
    }

    #[test]
    fn test_end_node_not_connectable() {
        let mut b = started();
        let end = b.add_end(vec![NodeId(1)]).unwrap();
        assert_eq!(b.connectable_sources().len(), 1);
        b.ended = false;
        let spec = StepSpec::regular("after", end, Direction::Down);
        assert_eq!(b.add_step(spec), Err(Error::EndNodeReferenced(end)));
    }

    #[test]
    fn test_end_rejects_empty_and_duplicates() {
        let mut b = started();
        assert_eq!(b.add_end(vec![]), Err(Error::NoEndSources));
        assert_eq!(
            b.add_end(vec![NodeId(1), NodeId(1)]),
            Err(Error::DuplicateSource(NodeId(1)))
        );
        assert!(!b.is_ended());
    }

    #[test]
    fn test_delete_last_reopens_ended_flowchart() {
        let mut b = started();
        b.add_end(vec![NodeId(1)]).unwrap();
        let removed = b.delete_last().unwrap();
        assert!(removed.is_end);
        assert_eq!(b.state(), FlowchartState::Building);
    }

    #[test]
    fn test_start_cannot_be_deleted() {
        let mut b = started();
        assert_eq!(b.delete_last(), Err(Error::CannotDeleteStart));
        let mut empty = FlowchartBuilder::new();
        assert_eq!(empty.delete_last(), Err(Error::CannotDeleteStart));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut b = started();
        b.add_step(StepSpec::regular("A", NodeId(1), Direction::Down)).unwrap();
        b.delete_last().unwrap();
        let id = b.add_step(StepSpec::regular("B", NodeId(1), Direction::Down)).unwrap();
        assert_eq!(id, NodeId(3));
    }

    #[test]
    fn test_reset() {
        let mut b = started();
        b.add_end(vec![NodeId(1)]).unwrap();
        b.reset();
        assert_eq!(b.state(), FlowchartState::Empty);
        assert_eq!(b.add_start("Fresh").unwrap(), NodeId(1));
    }
}
