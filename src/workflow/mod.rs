pub mod graph;
pub mod rearrange;
pub mod spreadsheet;

pub use graph::{GraphWorkflow, Node};
pub use rearrange::AgentRearrange;
pub use spreadsheet::SpreadsheetSwarm;
