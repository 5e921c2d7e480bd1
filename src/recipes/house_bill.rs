use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::agents::{Agent, AgentError, ChatAgent};
use crate::config::Config;
use crate::console::render;
use crate::document::{PdfDocument, chunk_words};
use crate::llm::ChatClient;
use crate::summarize::{ChunkDispatcher, Role, SummaryRecord, SummaryWriter, ThrottleLimits};
use crate::workflow::{GraphWorkflow, Node};

use super::prompts::HOUSE_BILL_ROLES;

#[derive(Debug, Clone)]
pub struct HouseBillOptions {
    pub pdf: PathBuf,
    pub pages_per_window: usize,
    pub max_words: NonZeroUsize,
    pub limits: ThrottleLimits,
}

/// Three reviewers fan into a single closing task node.
pub fn review_graph<A>(roles: &[Role<A>]) -> Result<GraphWorkflow<A>, AgentError>
where
    A: Agent<Input = String, Output = String> + Clone + Sync,
{
    let mut graph = GraphWorkflow::new();
    for role in roles {
        graph.add_node(Node::agent(role.id.as_str(), role.agent.clone()))?;
    }
    graph.add_node(Node::task("task1", || "Task completed".to_string()))?;
    for role in roles {
        graph.add_edge(&role.id, "task1")?;
    }
    let ids: Vec<&str> = roles.iter().map(|r| r.id.as_str()).collect();
    graph.set_entry_points(ids.as_slice())?;
    graph.set_end_points(&["task1"])?;
    graph.validate()?;
    Ok(graph)
}

pub async fn run(opts: &HouseBillOptions, out_dir: &Path) -> Result<Vec<SummaryRecord>> {
    let client = ChatClient::new(Config::groq()?)?;
    let pdf = PdfDocument::open(&opts.pdf)?;
    info!("Environment set up and model initialized successfully!");

    let roles: Vec<Role<ChatAgent>> = HOUSE_BILL_ROLES
        .iter()
        .map(|spec| Role::new(spec.id, spec.agent.build(&client)))
        .collect();
    info!("Agents created successfully!");

    let graph = review_graph(&roles)?;
    render::display_block("Workflow graph", &graph.visualize());

    let windows = pdf.windows(opts.pages_per_window)?;
    let chunks = windows.iter().flat_map(|text| chunk_words(text, opts.max_words));

    let mut dispatcher = ChunkDispatcher::new(&roles, opts.limits, SummaryWriter::new(out_dir));
    let records = dispatcher.run(chunks).await?;
    info!(
        "Execution completed: {} summaries, {} throttle pauses",
        records.len(),
        dispatcher.throttle().pauses()
    );
    Ok(records)
}
