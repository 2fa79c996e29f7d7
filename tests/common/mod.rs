use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jaasd::error::BoxError;
use jaasd::RoleFetcher;

pub fn init_tracing() {
    // Several tests share the global subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("JAASD_LOG"))
        .with_test_writer()
        .try_init();
}

pub fn temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

pub fn roles(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Role store stand-in that takes a while to answer and counts calls.
/// The first `failures` calls fail.
#[derive(Default)]
pub struct SlowRoleStore {
    pub roles: Vec<String>,
    pub failures: usize,
    pub latency: Duration,
    pub calls: Arc<AtomicUsize>,
}

impl SlowRoleStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleFetcher for SlowRoleStore {
    async fn fetch_roles(&self, _user: Option<&str>) -> Result<Vec<String>, BoxError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        if n < self.failures {
            return Err("role store unavailable".into());
        }
        Ok(self.roles.clone())
    }
}
