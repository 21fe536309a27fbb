use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::time::timeout;

use crate::ports::InventoryRepository;

const CHECK_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DependencyStatus,
}

impl HealthResponse {
    pub fn from_database(database: DependencyStatus) -> Self {
        let status = match database {
            DependencyStatus::Healthy { .. } => "healthy",
            DependencyStatus::Unhealthy { .. } => "unhealthy",
        };

        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self.database, DependencyStatus::Healthy { .. })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyStatus {
    Healthy { status: String, latency_ms: u64 },
    Unhealthy { status: String, error: String },
}

pub async fn check_repository(repo: &dyn InventoryRepository) -> DependencyStatus {
    let start = Instant::now();
    match timeout(CHECK_TIMEOUT, repo.ping()).await {
        Ok(Ok(())) => DependencyStatus::Healthy {
            status: "healthy".to_string(),
            latency_ms: start.elapsed().as_millis() as u64,
        },
        Ok(Err(e)) => DependencyStatus::Unhealthy {
            status: "unhealthy".to_string(),
            error: e.to_string(),
        },
        Err(_) => DependencyStatus::Unhealthy {
            status: "unhealthy".to_string(),
            error: "timeout".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_inventory_repository::{InMemoryInventoryRepository, Operation};

    #[tokio::test]
    async fn test_reachable_repository_is_healthy() {
        let repo = InMemoryInventoryRepository::new();
        let response = HealthResponse::from_database(check_repository(&repo).await);

        assert!(response.is_healthy());
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_failing_repository_is_unhealthy() {
        let repo = InMemoryInventoryRepository::new().failing_on(Operation::Ping);
        let response = HealthResponse::from_database(check_repository(&repo).await);

        assert!(!response.is_healthy());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["database"]["status"], "unhealthy");
        assert!(json["database"].get("latency_ms").is_none());
    }
}
