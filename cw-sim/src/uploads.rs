//! Citizen submissions waiting to reach the server.

use cw_core::hazard::HazardType;
use cw_core::upload::{QueuedReport, UploadStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadQueue {
    items: Vec<QueuedReport>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two recent submissions shown on a fresh reporting screen.
    pub fn seeded() -> Self {
        UploadQueue {
            items: vec![
                QueuedReport {
                    id: "q1".into(),
                    hazard: HazardType::HighWaves,
                    status: UploadStatus::Synced,
                    submitted_at: "14:30".into(),
                },
                QueuedReport {
                    id: "q2".into(),
                    hazard: HazardType::OilSpill,
                    status: UploadStatus::Uploading,
                    submitted_at: "15:45".into(),
                },
            ],
        }
    }

    pub fn items(&self) -> &[QueuedReport] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&QueuedReport> {
        self.items.iter().find(|q| q.id == id)
    }

    /// Queue a submission at the top of the list.
    ///
    /// Offline submissions wait; online ones start uploading and are
    /// expected to be marked synced by the caller's timer.
    pub fn submit(&mut self, id: impl Into<String>, hazard: HazardType, offline: bool, submitted_at: impl Into<String>) -> &QueuedReport {
        let status = if offline {
            UploadStatus::Waiting
        } else {
            UploadStatus::Uploading
        };
        self.items.insert(
            0,
            QueuedReport {
                id: id.into(),
                hazard,
                status,
                submitted_at: submitted_at.into(),
            },
        );
        &self.items[0]
    }

    /// Only an uploading item can become synced.
    pub fn mark_synced(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|q| q.id == id) {
            Some(q) if q.status == UploadStatus::Uploading => {
                q.status = UploadStatus::Synced;
                true
            }
            _ => false,
        }
    }
}
