//! Scheduler and job messages.

use std::collections::HashMap;

use prost::{Enumeration, Message};

use crate::credentials::CredentialCarrier;
use crate::properties::PropertyDescription;

/// Request to open a scheduler on a remote resource.
#[derive(Clone, PartialEq, Message)]
pub struct CreateSchedulerRequest {
    #[prost(string, tag = "1")]
    pub adaptor: String,
    #[prost(string, tag = "2")]
    pub location: String,
    #[prost(map = "string, string", tag = "3")]
    pub properties: HashMap<String, String>,
    #[prost(oneof = "CredentialCarrier", tags = "4, 5, 6, 7")]
    pub credential: Option<CredentialCarrier>,
}

/// Handle for a previously created scheduler.
///
/// `id` is the deterministic resource identity
/// (`{adaptor}://{username}@{location}`) used to correlate follow-up calls.
#[derive(Clone, PartialEq, Message)]
pub struct Scheduler {
    #[prost(string, tag = "1")]
    pub id: String,
}

/// What to run and how, as submitted by a caller.
///
/// Empty strings and zeroes mean "use the scheduler default".
#[derive(Clone, PartialEq, Message)]
pub struct JobDescription {
    #[prost(string, tag = "1")]
    pub executable: String,
    #[prost(string, repeated, tag = "2")]
    pub arguments: Vec<String>,
    #[prost(string, tag = "3")]
    pub working_directory: String,
    #[prost(map = "string, string", tag = "4")]
    pub environment: HashMap<String, String>,
    #[prost(string, tag = "5")]
    pub queue_name: String,
    #[prost(bool, tag = "6")]
    pub interactive: bool,
    #[prost(uint32, tag = "7")]
    pub max_time: u32,
    #[prost(uint32, tag = "8")]
    pub node_count: u32,
    #[prost(uint32, tag = "9")]
    pub processes_per_node: u32,
    #[prost(bool, tag = "10")]
    pub start_single_process: bool,
    #[prost(string, tag = "11")]
    pub std_in: String,
    #[prost(string, tag = "12")]
    pub std_out: String,
    #[prost(string, tag = "13")]
    pub std_err: String,
    #[prost(map = "string, string", tag = "14")]
    pub options: HashMap<String, String>,
    #[prost(message, optional, tag = "15")]
    pub scheduler: Option<Scheduler>,
}

/// A submitted job and the description it was submitted with.
#[derive(Clone, PartialEq, Message)]
pub struct Job {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    pub description: Option<JobDescription>,
}

/// Classified cause of a failed job, carried inside [`JobStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum StatusErrorType {
    None = 0,
    Cancelled = 1,
    NotFound = 2,
    SchedulerNotFound = 3,
    Other = 4,
}

/// Point-in-time status of a job.
///
/// `error_message` and `error_type` stay at their defaults when the job has
/// no associated error.
#[derive(Clone, PartialEq, Message)]
pub struct JobStatus {
    #[prost(string, tag = "1")]
    pub state: String,
    #[prost(bool, tag = "2")]
    pub running: bool,
    #[prost(bool, tag = "3")]
    pub done: bool,
    #[prost(map = "string, string", tag = "4")]
    pub scheduler_specific_information: HashMap<String, String>,
    #[prost(message, optional, tag = "5")]
    pub job: Option<Job>,
    #[prost(int32, tag = "6")]
    pub exit_code: i32,
    #[prost(string, tag = "7")]
    pub error_message: String,
    #[prost(enumeration = "StatusErrorType", tag = "8")]
    pub error_type: i32,
}

/// Point-in-time status of a scheduler queue.
#[derive(Clone, PartialEq, Message)]
pub struct QueueStatus {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub scheduler: Option<Scheduler>,
    #[prost(map = "string, string", tag = "3")]
    pub scheduler_specific_information: HashMap<String, String>,
    #[prost(string, tag = "4")]
    pub error: String,
}

/// Describes a scheduler adaptor and the properties it supports.
#[derive(Clone, PartialEq, Message)]
pub struct SchedulerAdaptorDescription {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(string, repeated, tag = "3")]
    pub supported_locations: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub supported_properties: Vec<PropertyDescription>,
}
