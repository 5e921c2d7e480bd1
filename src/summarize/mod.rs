//! Chunk-by-chunk summarization: every role summarizes every chunk, behind a
//! fixed-delay throttle, and each summary lands in its own file.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::agents::{Agent, AgentError};
use crate::document::Chunk;

pub mod throttle;
pub mod writer;

pub use throttle::{Throttle, ThrottleLimits};
pub use writer::SummaryWriter;

/// An agent plus the id used to key its output files.
#[derive(Debug, Clone)]
pub struct Role<A> {
    pub id: String,
    pub agent: A,
}

impl<A> Role<A> {
    pub fn new(id: impl Into<String>, agent: A) -> Self {
        Self {
            id: id.into(),
            agent,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryRecord {
    pub role_id: String,
    pub chunk_number: usize,
    pub summary: String,
    pub path: PathBuf,
}

pub fn summary_prompt(chunk_text: &str) -> String {
    format!("Summarize the following text within 950 tokens:\n\n{}", chunk_text)
}

pub struct ChunkDispatcher<'r, A> {
    roles: &'r [Role<A>],
    throttle: Throttle,
    writer: SummaryWriter,
}

impl<'r, A> ChunkDispatcher<'r, A>
where
    A: Agent<Input = String, Output = String> + Sync,
{
    pub fn new(roles: &'r [Role<A>], limits: ThrottleLimits, writer: SummaryWriter) -> Self {
        Self {
            roles,
            throttle: Throttle::new(limits),
            writer,
        }
    }

    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    /// Runs every (chunk, role) pair in order. The first failure aborts the run;
    /// files written before it stay on disk.
    pub async fn run<'t, I>(&mut self, chunks: I) -> Result<Vec<SummaryRecord>, AgentError>
    where
        I: IntoIterator<Item = Chunk<'t>>,
    {
        let mut records = Vec::new();
        for (idx, chunk) in chunks.into_iter().enumerate() {
            let chunk_number = idx + 1;
            let words = chunk.word_count();
            let prompt = summary_prompt(&chunk.text());

            for role in self.roles {
                self.throttle.acquire(words).await;
                let summary = role.agent.execute(&prompt).await?;
                let path = self.writer.write(&role.id, chunk_number, &summary).await?;
                info!("{} summary for chunk {}: {}", role.id, chunk_number, path.display());
                self.throttle.record(words);

                records.push(SummaryRecord {
                    role_id: role.id.clone(),
                    chunk_number,
                    summary,
                    path,
                });
            }
        }
        Ok(records)
    }
}
