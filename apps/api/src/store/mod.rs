//! JSON-file backed dataset.
//!
//! The whole dataset lives in memory behind a `RwLock`. Every mutation runs
//! against a copy which is written to a temp file beside the data file and
//! renamed over it; only then does the copy replace the live dataset. The
//! write lock is held across the write, so mutations are serialised and a
//! failed write leaves the live dataset untouched.

pub mod seed;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::info;

use crate::errors::AppError;
use crate::models::activity::{ActivityEntry, NewActivity};
use crate::models::notification::StaffNotification;
use crate::models::recruiting::{Application, Position};
use crate::models::request::ServiceRequest;
use crate::models::staff::{Recruiter, Staff};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub requests: Vec<ServiceRequest>,
    pub staff: Vec<Staff>,
    pub recruiters: Vec<Recruiter>,
    pub positions: Vec<Position>,
    pub applications: Vec<Application>,
    pub activity: Vec<ActivityEntry>,
    pub notifications: Vec<StaffNotification>,
}

/// `max(id) + 1`, starting at 1.
fn next_id<T>(items: &[T], id: impl Fn(&T) -> u64) -> u64 {
    items.iter().map(id).max().map_or(1, |max| max + 1)
}

impl Dataset {
    pub fn next_request_id(&self) -> u64 {
        next_id(&self.requests, |r| r.id)
    }

    pub fn next_position_id(&self) -> u64 {
        next_id(&self.positions, |p| p.id)
    }

    pub fn next_application_id(&self) -> u64 {
        next_id(&self.applications, |a| a.id)
    }

    pub fn next_notification_id(&self) -> u64 {
        next_id(&self.notifications, |n| n.id)
    }

    pub fn request(&self, id: u64) -> Option<&ServiceRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn request_mut(&mut self, id: u64) -> Result<&mut ServiceRequest, AppError> {
        self.requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Request {id} not found")))
    }

    pub fn staff_member(&self, id: u64) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: u64) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == id)
    }

    /// Appends to the activity feed and returns the assigned id.
    pub fn log_activity(&mut self, entry: NewActivity) -> u64 {
        let id = next_id(&self.activity, |a| a.id);
        self.activity.push(ActivityEntry {
            id,
            kind: entry.kind,
            title: entry.title,
            description: entry.description,
            timestamp: entry.timestamp,
            status: entry.status,
        });
        id
    }
}

pub struct Store {
    path: PathBuf,
    data: RwLock<Dataset>,
}

impl Store {
    /// Loads the data file, creating it when absent.
    pub async fn open(path: impl Into<PathBuf>, seed_demo_data: bool) -> Result<Self> {
        let path = path.into();
        info!("Loading dataset from {}", path.display());

        let data = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Dataset>(&bytes)
                .with_context(|| format!("Data file {} is not a valid dataset", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let data = if seed_demo_data {
                    seed::demo_dataset(Utc::now())
                } else {
                    Dataset::default()
                };
                persist(&path, &data)
                    .await
                    .with_context(|| format!("Failed to create data file {}", path.display()))?;
                info!(
                    "Created data file {} (seeded: {seed_demo_data})",
                    path.display()
                );
                data
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        info!(
            "Dataset ready: {} requests, {} staff, {} positions, {} applications",
            data.requests.len(),
            data.staff.len(),
            data.positions.len(),
            data.applications.len()
        );

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Dataset> {
        self.data.read().await
    }

    /// Applies `mutate` to a copy of the dataset, persists it, then commits.
    pub async fn update<T>(
        &self,
        mutate: impl FnOnce(&mut Dataset) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut live = self.data.write().await;
        let mut draft = live.clone();
        let output = mutate(&mut draft)?;
        persist(&self.path, &draft).await?;
        *live = draft;
        Ok(output)
    }
}

async fn persist(path: &Path, data: &Dataset) -> Result<(), AppError> {
    let bytes = serde_json::to_vec_pretty(data)?;
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || write_atomic(&path, &bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("persist task failed: {e}")))??;
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
