use std::time::Instant;
use tracing::{info, warn};

/// Logs how long an RPC took, and whether it failed, when dropped.
///
/// ```ignore
/// let mut timer = OperationTimer::new("create_content").with_collection("blog");
/// if result.is_err() {
///     timer.mark_failed();
/// }
/// ```
pub struct OperationTimer {
    name: &'static str,
    collection: Option<String>,
    failed: bool,
    start: Instant,
}

impl OperationTimer {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            collection: None,
            failed: false,
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn mark_failed(&mut self) {
        self.failed = true;
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        let duration_ms = self.start.elapsed().as_millis();
        let collection = self.collection.as_deref().unwrap_or("-");
        if self.failed {
            warn!(
                operation = %self.name,
                collection,
                duration_ms = %duration_ms,
                "Operation failed"
            );
        } else {
            info!(
                operation = %self.name,
                collection,
                duration_ms = %duration_ms,
                "Operation completed"
            );
        }
    }
}

/// Generate a short request ID for correlation.
#[must_use]
pub fn generate_request_id() -> String {
    let uuid_str = uuid::Uuid::new_v4().simple().to_string();
    uuid_str.get(..8).unwrap_or(&uuid_str).to_string()
}
