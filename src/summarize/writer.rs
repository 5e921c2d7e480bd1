use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use crate::agents::AgentError;

/// Writes one JSON file per (role, chunk) summary into `out_dir`.
#[derive(Debug, Clone)]
pub struct SummaryWriter {
    out_dir: PathBuf,
}

impl SummaryWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// `chunk_number` is 1-based.
    pub fn path_for(&self, role_id: &str, chunk_number: usize) -> PathBuf {
        self.out_dir
            .join(format!("{}_summary_chunk_{}.json", role_id, chunk_number))
    }

    /// Stores the summary as a JSON string, replacing any earlier file.
    pub async fn write(
        &self,
        role_id: &str,
        chunk_number: usize,
        summary: &str,
    ) -> Result<PathBuf, AgentError> {
        fs::create_dir_all(&self.out_dir).await?;
        let path = self.path_for(role_id, chunk_number);
        fs::write(&path, serde_json::to_string(summary)?).await?;
        debug!("wrote {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_json_string_under_role_and_chunk_name() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SummaryWriter::new(dir.path().join("out"));

        let path = writer
            .write("risk_assessment_analyst", 3, "Line one\n\"quoted\"")
            .await
            .unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "risk_assessment_analyst_summary_chunk_3.json"
        );
        let raw = std::fs::read_to_string(&path).unwrap();
        let decoded: String = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded, "Line one\n\"quoted\"");
    }

    #[tokio::test]
    async fn rerun_overwrites_silently() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SummaryWriter::new(dir.path());
        writer.write("a", 1, "first").await.unwrap();
        let path = writer.write("a", 1, "second").await.unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "\"second\"");
    }
}
