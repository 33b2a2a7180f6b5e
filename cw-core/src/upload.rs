use crate::hazard::HazardType;
use serde::{Deserialize, Serialize};

/// Upload state of a report submitted from the citizen reporting screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    /// Submitted while offline; nothing is sent.
    Waiting,
    Uploading,
    Synced,
}

impl UploadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadStatus::Waiting => "waiting",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Synced => "synced",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            UploadStatus::Waiting => "#EAB308",
            UploadStatus::Uploading => "#3B82F6",
            UploadStatus::Synced => "#22C55E",
        }
    }
}

/// A row in the "recent submissions" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedReport {
    pub id: String,
    pub hazard: HazardType,
    pub status: UploadStatus,
    /// Wall clock label, `HH:MM`.
    pub submitted_at: String,
}
