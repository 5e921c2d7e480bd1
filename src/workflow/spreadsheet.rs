use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::agents::{Agent, AgentError};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpreadsheetRow {
    #[serde(rename = "Run ID")]
    pub run_id: String,
    #[serde(rename = "Agent Name")]
    pub agent_name: String,
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Result")]
    pub result: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

/// Runs every agent on the same task `repeat_count` times and tabulates the results.
pub struct SpreadsheetSwarm<A> {
    name: String,
    agents: Vec<A>,
    repeat_count: usize,
    save_file_path: Option<PathBuf>,
}

impl<A> SpreadsheetSwarm<A>
where
    A: Agent<Input = String, Output = String> + Sync,
{
    pub fn new(name: impl Into<String>, agents: Vec<A>) -> Self {
        Self {
            name: name.into(),
            agents,
            repeat_count: 1,
            save_file_path: None,
        }
    }

    pub fn repeat_count(mut self, n: usize) -> Self {
        self.repeat_count = n.max(1);
        self
    }

    /// Enables autosave to a CSV file.
    pub fn autosave_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_file_path = Some(path.into());
        self
    }

    pub async fn run(&self, task: &str) -> Result<Vec<SpreadsheetRow>, AgentError> {
        let run_id = Uuid::new_v4().to_string();
        info!(
            "{}: running {} agents x{} (run {})",
            self.name,
            self.agents.len(),
            self.repeat_count,
            run_id
        );

        let input = task.to_string();
        let mut rows = Vec::with_capacity(self.agents.len() * self.repeat_count);
        for _ in 0..self.repeat_count {
            for agent in &self.agents {
                let result = agent.execute(&input).await?;
                rows.push(SpreadsheetRow {
                    run_id: run_id.clone(),
                    agent_name: agent.name().to_string(),
                    task: input.clone(),
                    result,
                    timestamp: Utc::now().to_rfc3339(),
                });
            }
        }

        if let Some(path) = &self.save_file_path {
            save_csv(path, &rows).await?;
            info!("{}: saved {} rows to {}", self.name, rows.len(), path.display());
        }
        Ok(rows)
    }
}

const CSV_HEADER: [&str; 5] = ["Run ID", "Agent Name", "Task", "Result", "Timestamp"];

pub async fn save_csv(path: &Path, rows: &[SpreadsheetRow]) -> Result<(), AgentError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, to_csv(rows)?).await?;
    Ok(())
}

/// Serializes rows as RFC 4180 CSV with a header line, even when `rows` is empty.
pub fn to_csv(rows: &[SpreadsheetRow]) -> Result<Vec<u8>, AgentError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(CSV_HEADER)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| AgentError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::testing::EchoAgent;

    fn row(task: &str, result: &str) -> SpreadsheetRow {
        SpreadsheetRow {
            run_id: "r1".into(),
            agent_name: "FB".into(),
            task: task.into(),
            result: result.into(),
            timestamp: "t".into(),
        }
    }

    #[test]
    fn fields_are_quoted_only_when_needed() {
        let rows = [row("plain", "a,b"), row("say \"hi\"", "two\nlines")];
        let csv = String::from_utf8(to_csv(&rows).unwrap()).unwrap();

        assert_eq!(
            csv,
            "Run ID,Agent Name,Task,Result,Timestamp\r\n\
             r1,FB,plain,\"a,b\",t\r\n\
             r1,FB,\"say \"\"hi\"\"\",\"two\nlines\",t\r\n"
        );
    }

    #[test]
    fn empty_table_still_has_a_header() {
        let csv = String::from_utf8(to_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv, "Run ID,Agent Name,Task,Result,Timestamp\r\n");
    }

    #[tokio::test]
    async fn every_agent_runs_repeat_count_times() {
        let swarm = SpreadsheetSwarm::new("test", vec![EchoAgent::new("FB"), EchoAgent::new("IG")])
            .repeat_count(2);
        let rows = swarm.run("fight night").await.unwrap();

        let names: Vec<&str> = rows.iter().map(|r| r.agent_name.as_str()).collect();
        assert_eq!(names, vec!["FB", "IG", "FB", "IG"]);
        assert!(rows.iter().all(|r| r.run_id == rows[0].run_id));
        assert_eq!(rows[1].result, "IG(fight night)");
    }

    #[tokio::test]
    async fn autosave_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fight_night.csv");
        let swarm = SpreadsheetSwarm::new("test", vec![EchoAgent::new("FB")])
            .autosave_to(&path);

        swarm.run("Nov 2, 6pm").await.unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        let mut lines = csv.split("\r\n");
        assert_eq!(lines.next(), Some(CSV_HEADER.join(",").as_str()));
        let row = lines.next().unwrap();
        assert!(row.contains(",FB,\"Nov 2, 6pm\",\"FB(Nov 2, 6pm)\","));
    }
}
