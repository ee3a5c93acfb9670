use std::collections::HashMap;

use crate::domain::error::DomainError;

/// What to run and how.
///
/// `None`/empty fields fall back to the scheduler's defaults when the job is
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobDescription {
    pub executable: String,
    pub arguments: Vec<String>,
    pub working_directory: String,
    pub environment: HashMap<String, String>,
    pub queue_name: Option<String>,
    pub interactive: bool,
    pub max_time: Option<u32>,
    pub node_count: Option<u32>,
    pub processes_per_node: Option<u32>,
    pub start_single_process: bool,
    pub std_in: Option<String>,
    pub std_out: Option<String>,
    pub std_err: Option<String>,
    pub options: HashMap<String, String>,
}

/// Point-in-time status of a job, owned by the caller of the mapping call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatus {
    pub job_id: String,
    pub state: String,
    pub running: bool,
    pub done: bool,
    pub exit_code: Option<i32>,
    pub scheduler_specific_information: HashMap<String, String>,
    pub error: Option<DomainError>,
}

/// Point-in-time status of a scheduler queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStatus {
    pub queue_name: String,
    pub scheduler_specific_information: HashMap<String, String>,
    pub error: Option<DomainError>,
}
