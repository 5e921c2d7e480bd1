use crate::agents::ChatAgent;
use crate::llm::ChatClient;

pub const STOPPING_TOKEN: &str = "<DONE>";

/// Static description of an agent; turned into a [`ChatAgent`] once a client exists.
#[derive(Debug, Clone, Copy)]
pub struct AgentSpec {
    pub agent_name: &'static str,
    pub description: &'static str,
    pub system_prompt: &'static str,
}

impl AgentSpec {
    pub fn build(&self, client: &ChatClient) -> ChatAgent {
        ChatAgent::new(self.agent_name, self.system_prompt, client.clone())
            .with_description(self.description)
            .with_stopping_token(STOPPING_TOKEN)
    }
}

/// A summarization role: `id` keys output files, `agent` defines the persona.
#[derive(Debug, Clone, Copy)]
pub struct RoleSpec {
    pub id: &'static str,
    pub agent: AgentSpec,
}
