use anyhow::Error;
use colored::*;

use crate::agents::AgentError;
use crate::llm::LlmError;
use crate::summarize::SummaryRecord;
use crate::workflow::spreadsheet::SpreadsheetRow;

const RULE: &str = "─────────────────────────────────────────────────────────────";

pub fn display_block(title: &str, body: &str) {
    println!("\n{}", format!("📋 {}", title).bright_green().bold());
    println!("{}", format!("┌{}", RULE).green());
    for line in body.lines() {
        println!("{} {}", "│".green(), line.white());
    }
    println!("{}", format!("└{}\n", RULE).green());
}

pub fn display_summaries(records: &[SummaryRecord]) {
    println!("\n{}", "📦 Chunk summaries".bright_cyan().bold());
    println!("{}", format!("┌{}", RULE).cyan());
    for record in records {
        println!(
            "{} {} {} {}",
            "│".cyan(),
            format!("chunk {:>3}", record.chunk_number).bright_white(),
            record.role_id.yellow(),
            record.path.display().to_string().white()
        );
    }
    println!("{}", format!("└{}", RULE).cyan());
    println!("{} {}\n", "✅ Summaries written:".bright_green().bold(), records.len());
}

pub fn display_rows(rows: &[SpreadsheetRow]) {
    for row in rows {
        display_block(&row.agent_name, &row.result);
    }
}

/// Context-aware error output; falls back to the plain message for unknown errors.
pub fn display_error(error: &Error) {
    let llm = error.downcast_ref::<LlmError>().or_else(|| match error.downcast_ref::<AgentError>() {
        Some(AgentError::Llm(e)) => Some(e),
        _ => None,
    });
    match llm {
        Some(e) => display_llm_error(e),
        None => {
            eprintln!("{} {}", "❌ Error:".bright_red().bold(), format!("{:#}", error).red());
            eprintln!("{}", "Please check your configuration and try again.\n".red());
        }
    }
}

fn display_llm_error(error: &LlmError) {
    eprintln!("{}", error.user_message().bright_red().bold());
    let tip = match error {
        LlmError::ServerBusy { .. } => "💡 Tip: Lower the throttle limits or try again later.",
        LlmError::NetworkError { .. } => {
            "💡 Tip: Check your internet connection and firewall settings."
        }
        LlmError::Timeout { .. } => "💡 Tip: Raise LLM_TIMEOUT_SECS or try again later.",
        LlmError::ApiError { .. } => {
            "💡 Tip: Check the provider's API documentation for details."
        }
        LlmError::ParseError { .. } => {
            "💡 Tip: The server response was unexpected. Check the base URL."
        }
        LlmError::ConfigError { .. } => {
            "💡 Tip: Check your environment variables and configuration."
        }
    };
    eprintln!("{}\n", tip.yellow());
}
