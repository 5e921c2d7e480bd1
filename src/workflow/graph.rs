use std::collections::{HashMap, VecDeque};
use std::fmt;

use tracing::info;

use crate::agents::{Agent, AgentError};

type TaskFn = Box<dyn Fn() -> String + Send + Sync>;

pub enum NodeKind<A> {
    Agent(A),
    Task(TaskFn),
}

pub struct Node<A> {
    pub id: String,
    pub kind: NodeKind<A>,
}

impl<A> Node<A> {
    pub fn agent(id: impl Into<String>, agent: A) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Agent(agent),
        }
    }

    pub fn task(id: impl Into<String>, f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Task(Box::new(f)),
        }
    }
}

impl<A> fmt::Debug for Node<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            NodeKind::Agent(_) => "agent",
            NodeKind::Task(_) => "task",
        };
        f.debug_struct("Node").field("id", &self.id).field("kind", &kind).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeOutput {
    pub id: String,
    pub output: String,
}

/// Fixed-topology DAG of agent and task nodes.
#[derive(Debug)]
pub struct GraphWorkflow<A> {
    nodes: Vec<Node<A>>,
    edges: Vec<(String, String)>,
    entry_points: Vec<String>,
    end_points: Vec<String>,
}

impl<A> Default for GraphWorkflow<A> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            entry_points: Vec::new(),
            end_points: Vec::new(),
        }
    }
}

impl<A> GraphWorkflow<A>
where
    A: Agent<Input = String, Output = String> + Sync,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn add_node(&mut self, node: Node<A>) -> Result<(), AgentError> {
        if self.contains(&node.id) {
            return Err(AgentError::InvalidGraph(format!("duplicate node '{}'", node.id)));
        }
        self.nodes.push(node);
        Ok(())
    }

    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<(), AgentError> {
        for id in [source, target] {
            if !self.contains(id) {
                return Err(AgentError::InvalidGraph(format!(
                    "edge references unknown node '{}'",
                    id
                )));
            }
        }
        self.edges.push((source.to_string(), target.to_string()));
        Ok(())
    }

    pub fn set_entry_points<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<(), AgentError> {
        self.entry_points = self.known_ids(ids)?;
        Ok(())
    }

    pub fn set_end_points<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<(), AgentError> {
        self.end_points = self.known_ids(ids)?;
        Ok(())
    }

    fn known_ids<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<String>, AgentError> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                if self.contains(id) {
                    Ok(id.to_string())
                } else {
                    Err(AgentError::InvalidGraph(format!("unknown node '{}'", id)))
                }
            })
            .collect()
    }

    /// Kahn's algorithm; ties broken by insertion order. Errors on a cycle.
    pub fn topological_order(&self) -> Result<Vec<usize>, AgentError> {
        let index: HashMap<&str, usize> =
            self.nodes.iter().enumerate().map(|(i, n)| (n.id.as_str(), i)).collect();
        let mut in_degree = vec![0usize; self.nodes.len()];
        let mut successors = vec![Vec::new(); self.nodes.len()];
        for (s, t) in &self.edges {
            let (s, t) = (index[s.as_str()], index[t.as_str()]);
            successors[s].push(t);
            in_degree[t] += 1;
        }

        let mut ready: VecDeque<usize> = (0..self.nodes.len())
            .filter(|&i| in_degree[i] == 0)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(i) = ready.pop_front() {
            order.push(i);
            for &t in &successors[i] {
                in_degree[t] -= 1;
                if in_degree[t] == 0 {
                    ready.push_back(t);
                }
            }
        }

        if order.len() != self.nodes.len() {
            return Err(AgentError::InvalidGraph("graph contains a cycle".into()));
        }
        Ok(order)
    }

    pub fn validate(&self) -> Result<(), AgentError> {
        self.topological_order().map(|_| ())
    }

    /// Runs every node once in dependency order. Entry points and nodes without
    /// predecessors receive `task`; other agents receive their predecessors' outputs.
    pub async fn run(&self, task: &str) -> Result<Vec<NodeOutput>, AgentError> {
        let order = self.topological_order()?;
        let mut outputs: HashMap<&str, String> = HashMap::new();
        let mut results = Vec::with_capacity(order.len());

        for i in order {
            let node = &self.nodes[i];
            let output = match &node.kind {
                NodeKind::Task(f) => f(),
                NodeKind::Agent(agent) => {
                    let input = self.input_for(&node.id, task, &outputs);
                    agent.execute(&input).await?
                }
            };
            info!("node {} finished", node.id);
            outputs.insert(node.id.as_str(), output.clone());
            results.push(NodeOutput {
                id: node.id.clone(),
                output,
            });
        }
        Ok(results)
    }

    fn input_for(&self, id: &str, task: &str, outputs: &HashMap<&str, String>) -> String {
        let preds: Vec<&str> = self
            .edges
            .iter()
            .filter(|(_, t)| t == id)
            .map(|(s, _)| s.as_str())
            .collect();
        if preds.is_empty() || self.entry_points.iter().any(|e| e == id) {
            return task.to_string();
        }
        match preds.as_slice() {
            [only] => outputs.get(only).cloned().unwrap_or_default(),
            many => many
                .iter()
                .map(|p| format!("{}: {}", p, outputs.get(p).map(String::as_str).unwrap_or("")))
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }

    pub fn visualize(&self) -> String {
        let mut out = format!(
            "Entry points: {}\nEnd points: {}\n",
            self.entry_points.join(", "),
            self.end_points.join(", ")
        );
        for (s, t) in &self.edges {
            out.push_str(&format!("{} -> {}\n", s, t));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::testing::EchoAgent;

    fn review_graph() -> GraphWorkflow<EchoAgent> {
        let mut g = GraphWorkflow::new();
        for id in ["fin", "mgmt", "risk"] {
            g.add_node(Node::agent(id, EchoAgent::new(id))).unwrap();
        }
        g.add_node(Node::task("task1", || "Task completed".to_string())).unwrap();
        for id in ["fin", "mgmt", "risk"] {
            g.add_edge(id, "task1").unwrap();
        }
        g.set_entry_points(&["fin", "mgmt", "risk"]).unwrap();
        g.set_end_points(&["task1"]).unwrap();
        g
    }

    #[tokio::test]
    async fn entry_agents_get_task_then_task_node_runs() {
        let g = review_graph();
        let out = g.run("bill").await.unwrap();
        let ids: Vec<&str> = out.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["fin", "mgmt", "risk", "task1"]);
        assert_eq!(out[0].output, "fin(bill)");
        assert_eq!(out[3].output, "Task completed");
    }

    #[tokio::test]
    async fn downstream_agent_sees_joined_predecessor_outputs() {
        let mut g = GraphWorkflow::new();
        for id in ["a", "b", "c"] {
            g.add_node(Node::agent(id, EchoAgent::new(id))).unwrap();
        }
        g.add_edge("a", "c").unwrap();
        g.add_edge("b", "c").unwrap();
        let out = g.run("t").await.unwrap();
        assert_eq!(out[2].output, "c(a: a(t)\n\nb: b(t))");
    }

    #[test]
    fn cycle_is_detected() {
        let mut g: GraphWorkflow<EchoAgent> = GraphWorkflow::new();
        g.add_node(Node::agent("a", EchoAgent::new("a"))).unwrap();
        g.add_node(Node::agent("b", EchoAgent::new("b"))).unwrap();
        g.add_edge("a", "b").unwrap();
        g.add_edge("b", "a").unwrap();
        assert!(matches!(g.validate(), Err(AgentError::InvalidGraph(_))));
    }

    #[test]
    fn unknown_nodes_and_duplicates_are_rejected() {
        let mut g = review_graph();
        assert!(g.add_edge("fin", "nowhere").is_err());
        assert!(g.add_node(Node::task("task1", String::new)).is_err());
        assert!(g.set_entry_points(&["ghost"]).is_err());
    }

    #[test]
    fn visualize_lists_points_and_edges() {
        let text = review_graph().visualize();
        assert!(text.starts_with("Entry points: fin, mgmt, risk\nEnd points: task1\n"));
        assert!(text.contains("mgmt -> task1\n"));
        assert_eq!(text.lines().count(), 5);
    }
}
