use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::agents::{Agent, AgentError};

/// Parsed form of `"A -> B, C -> D"`: steps in order, agents within a step in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    steps: Vec<Vec<String>>,
}

impl Flow {
    pub fn parse(flow: &str) -> Result<Self, AgentError> {
        let mut steps = Vec::new();
        for (i, step) in flow.split("->").enumerate() {
            let names: Vec<String> = step
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if names.is_empty() {
                return Err(AgentError::InvalidFlow(format!(
                    "step {} of '{}' is empty",
                    i + 1,
                    flow.trim()
                )));
            }
            steps.push(names);
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Vec<String>] {
        &self.steps
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.steps.iter().map(|s| s.join(", ")).collect();
        f.write_str(&rendered.join(" -> "))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Turn {
    pub agent: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RearrangeOutput {
    pub flow: String,
    pub task: String,
    pub history: Vec<Turn>,
    pub final_output: String,
}

/// Runs agents along a [`Flow`], feeding each step the previous step's output.
pub struct AgentRearrange<A> {
    agents: Vec<A>,
    flow: Flow,
    return_json: bool,
}

impl<A> AgentRearrange<A>
where
    A: Agent<Input = String, Output = String> + Sync,
{
    /// Fails if the flow names an agent that is not in `agents`.
    pub fn new(agents: Vec<A>, flow: &str) -> Result<Self, AgentError> {
        let flow = Flow::parse(flow)?;
        for name in flow.steps().iter().flatten() {
            if !agents.iter().any(|a| a.name() == name) {
                return Err(AgentError::UnknownAgent(name.clone()));
            }
        }
        Ok(Self {
            agents,
            flow,
            return_json: false,
        })
    }

    pub fn return_json(mut self, on: bool) -> Self {
        self.return_json = on;
        self
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    fn agent(&self, name: &str) -> Result<&A, AgentError> {
        self.agents
            .iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| AgentError::UnknownAgent(name.to_string()))
    }

    pub async fn run_detailed(&self, task: &str) -> Result<RearrangeOutput, AgentError> {
        let mut input = task.to_string();
        let mut history = Vec::new();

        for (i, step) in self.flow.steps().iter().enumerate() {
            info!("step {}: {}", i + 1, step.join(", "));
            let mut outputs = Vec::with_capacity(step.len());
            for name in step {
                let output = self.agent(name)?.execute(&input).await?;
                history.push(Turn {
                    agent: name.clone(),
                    output: output.clone(),
                });
                outputs.push((name, output));
            }
            input = match outputs.as_slice() {
                [(_, only)] => only.clone(),
                many => many
                    .iter()
                    .map(|(name, out)| format!("{}: {}", name, out))
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            };
        }

        Ok(RearrangeOutput {
            flow: self.flow.to_string(),
            task: task.to_string(),
            history,
            final_output: input,
        })
    }

    /// Final text, or the whole run as pretty JSON when `return_json` is set.
    pub async fn run(&self, task: &str) -> Result<String, AgentError> {
        let output = self.run_detailed(task).await?;
        if self.return_json {
            Ok(serde_json::to_string_pretty(&output)?)
        } else {
            Ok(output.final_output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::testing::EchoAgent;

    fn echo(names: &[&str]) -> Vec<EchoAgent> {
        names.iter().map(|n| EchoAgent::new(n)).collect()
    }

    #[test]
    fn parses_sequential_and_fan_out_steps() {
        let flow = Flow::parse("Boss -> Analyzer ,Writer-> Summary").unwrap();
        assert_eq!(
            flow.steps(),
            &[
                vec!["Boss".to_string()],
                vec!["Analyzer".to_string(), "Writer".to_string()],
                vec!["Summary".to_string()],
            ]
        );
        assert_eq!(flow.to_string(), "Boss -> Analyzer, Writer -> Summary");
    }

    #[test]
    fn empty_step_is_rejected() {
        assert!(matches!(Flow::parse("A -> -> B"), Err(AgentError::InvalidFlow(_))));
        assert!(matches!(Flow::parse(""), Err(AgentError::InvalidFlow(_))));
    }

    #[test]
    fn unknown_agent_is_rejected() {
        let err = AgentRearrange::new(echo(&["A"]), "A -> Ghost").err().unwrap();
        assert!(matches!(err, AgentError::UnknownAgent(name) if name == "Ghost"));
    }

    #[tokio::test]
    async fn sequential_flow_passes_output_forward() {
        let swarm = AgentRearrange::new(echo(&["A", "B", "C"]), "A -> B -> C").unwrap();
        let out = swarm.run("task").await.unwrap();
        assert_eq!(out, "C(B(A(task)))");
    }

    #[tokio::test]
    async fn fan_out_step_shares_input_and_joins_outputs() {
        let swarm =
            AgentRearrange::new(echo(&["Gen", "T", "D", "End"]), "Gen -> T, D -> End").unwrap();
        let detailed = swarm.run_detailed("post").await.unwrap();

        let agents: Vec<&str> = detailed.history.iter().map(|t| t.agent.as_str()).collect();
        assert_eq!(agents, vec!["Gen", "T", "D", "End"]);
        assert_eq!(detailed.history[1].output, "T(Gen(post))");
        assert_eq!(detailed.history[2].output, "D(Gen(post))");
        assert_eq!(detailed.final_output, "End(T: T(Gen(post))\n\nD: D(Gen(post)))");
    }

    #[tokio::test]
    async fn return_json_serializes_history() {
        let swarm = AgentRearrange::new(echo(&["A", "B"]), "A -> B").unwrap().return_json(true);
        let out = swarm.run("x").await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["flow"], "A -> B");
        assert_eq!(parsed["history"][0]["agent"], "A");
        assert_eq!(parsed["final_output"], "B(A(x))");
    }
}
