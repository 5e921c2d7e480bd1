use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::agents::{Agent, ChatAgent};
use crate::config::{Config, DiscordConfig};
use crate::console::render;
use crate::document::data_to_text;
use crate::llm::ChatClient;
use crate::tools::send_discord_message;
use crate::types::STOPPING_TOKEN;
use crate::workflow::spreadsheet::SpreadsheetRow;
use crate::workflow::{AgentRearrange, SpreadsheetSwarm};

use super::prompts::*;

fn openai_client() -> Result<ChatClient> {
    Ok(ChatClient::new(Config::openai()?)?)
}

/// Bare completion, no agent around it.
pub async fn model() -> Result<String> {
    let client = openai_client()?;
    let out = client.complete(ROTH_IRA_QUESTION).await?;
    render::display_block(client.model(), &out);
    Ok(out)
}

pub async fn advisor() -> Result<String> {
    let agent = FINANCIAL_ADVISOR.build(&openai_client()?);
    run_single(&agent, ADVISOR_TASK).await
}

pub async fn art_therapy() -> Result<String> {
    let agent = ART_THERAPY.build(&openai_client()?);
    run_single(&agent, ART_THERAPY_TASK).await
}

async fn run_single(agent: &ChatAgent, task: &str) -> Result<String> {
    let out = agent.execute(&task.to_string()).await?;
    render::display_block(agent.name(), &out);
    Ok(out)
}

/// Task text for the expense swarm; `data` replaces the built-in transaction table.
pub fn expense_task(data: Option<&str>) -> String {
    format!(
        "{}\n\nTransactions:\n\n{}",
        EXPENSE_TASK_INTRO,
        data.unwrap_or(SAMPLE_TRANSACTIONS)
    )
}

pub async fn expenses(data: Option<&PathBuf>) -> Result<String> {
    let client = openai_client()?;
    let data = match data {
        Some(path) => Some(data_to_text(path).await?),
        None => None,
    };
    let agents: Vec<ChatAgent> = EXPENSE_AGENTS.iter().map(|spec| spec.build(&client)).collect();
    let swarm = AgentRearrange::new(agents, EXPENSE_FLOW)?.return_json(true);

    info!("Running flow: {}", swarm.flow());
    let out = swarm.run(&expense_task(data.as_deref())).await?;
    render::display_block("Expense analysis", &out);
    Ok(out)
}

pub async fn gptuesday() -> Result<String> {
    let client = openai_client()?;
    let agents: Vec<ChatAgent> = GPTUESDAY_AGENTS.iter().map(|spec| spec.build(&client)).collect();
    let swarm = AgentRearrange::new(agents, GPTUESDAY_FLOW)?;

    info!("Running flow: {}", swarm.flow());
    let out = swarm.run_detailed(GPTUESDAY_TASK).await?;
    for turn in &out.history {
        render::display_block(&turn.agent, &turn.output);
    }
    Ok(out.final_output)
}

/// One agent per platform plus the event host, in a fixed order.
pub fn fight_night_agents(client: &ChatClient) -> Vec<ChatAgent> {
    FIGHT_NIGHT_AGENTS
        .iter()
        .map(|(name, system_prompt)| {
            ChatAgent::new(*name, *system_prompt, client.clone())
                .with_description(fight_night_description(name))
                .with_stopping_token(STOPPING_TOKEN)
        })
        .collect()
}

pub async fn fight_night(out_dir: &Path) -> Result<Vec<SpreadsheetRow>> {
    let client = openai_client()?;
    let agents = fight_night_agents(&client);
    let swarm = SpreadsheetSwarm::new("305FightsTV-Social-Media-Swarm", agents)
        .repeat_count(2)
        .autosave_to(out_dir.join("fight_night.csv"));

    let prompt = format!(
        "Create posts to advertise the upcoming fight night event: {}",
        FIGHT_NIGHT_EVENT
    );
    let rows = swarm.run(&prompt).await?;
    render::display_rows(&rows);
    Ok(rows)
}

pub async fn discord(message: &str) -> Result<()> {
    let config = DiscordConfig::from_env();
    send_discord_message(&config, message).await?;
    render::display_block("Discord", &format!("Message sent: {}", message));
    Ok(())
}
