use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranscriptionClient, TranscriptionClientError};
use crate::domain::{JobId, JobStatus, StorageLocation};

/// Wall-clock allowance for one polling loop: a fixed interval between status
/// checks and a maximum total wait. Elapsed time only ever grows, one interval
/// at a time, so it is always a multiple of the interval.
#[derive(Debug, Clone)]
pub struct PollBudget {
    interval: Duration,
    max_wait: Duration,
    elapsed: Duration,
}

impl PollBudget {
    pub fn new(interval: Duration, max_wait: Duration) -> Self {
        Self {
            interval,
            max_wait,
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Records one completed wait and reports whether another status check
    /// still fits in the budget. The comparison runs after the wait, so the
    /// loop may run up to one full interval past `max_wait` before giving up,
    /// never more. Callers rely on that tolerance; tighten it here, not at the
    /// call site.
    pub fn consume_interval(&mut self) -> bool {
        self.elapsed += self.interval;
        self.elapsed < self.max_wait
    }
}

/// Terminal result of one polling loop. Every variant carries the total time
/// spent waiting so callers can observe the budget invariant.
#[derive(Debug, Clone)]
pub enum PollOutcome {
    Completed {
        result: Option<StorageLocation>,
        waited: Duration,
    },
    Failed {
        reason: Option<String>,
        waited: Duration,
    },
    TimedOut {
        waited: Duration,
    },
}

impl PollOutcome {
    pub fn waited(&self) -> Duration {
        match self {
            PollOutcome::Completed { waited, .. }
            | PollOutcome::Failed { waited, .. }
            | PollOutcome::TimedOut { waited } => *waited,
        }
    }
}

/// Drives one submitted job to a terminal state by querying its status at a
/// fixed interval under a bounded wait budget. Holds nothing across a wait
/// except the job identifier, and never issues a second status query while
/// one is outstanding.
pub struct CompletionPoller {
    client: Arc<dyn TranscriptionClient>,
    budget: PollBudget,
}

impl CompletionPoller {
    pub fn new(client: Arc<dyn TranscriptionClient>, budget: PollBudget) -> Self {
        Self { client, budget }
    }

    pub async fn wait_for_terminal(
        &self,
        id: &JobId,
    ) -> Result<PollOutcome, TranscriptionClientError> {
        let mut budget = self.budget.clone();

        loop {
            let report = self.client.job_status(id).await?;
            tracing::debug!(
                job_id = %id.as_uuid(),
                status = %report.status,
                elapsed_s = budget.elapsed().as_secs(),
                "Job status checked"
            );

            match report.status {
                JobStatus::Completed => {
                    return Ok(PollOutcome::Completed {
                        result: report.result_location,
                        waited: budget.elapsed(),
                    });
                }
                JobStatus::Failed => {
                    return Ok(PollOutcome::Failed {
                        reason: report.failure_reason,
                        waited: budget.elapsed(),
                    });
                }
                JobStatus::Submitted | JobStatus::InProgress => {
                    tokio::time::sleep(budget.interval()).await;
                    if !budget.consume_interval() {
                        tracing::warn!(
                            job_id = %id.as_uuid(),
                            waited_s = budget.elapsed().as_secs(),
                            "Polling budget exhausted before terminal status"
                        );
                        return Ok(PollOutcome::TimedOut {
                            waited: budget.elapsed(),
                        });
                    }
                }
            }
        }
    }
}
