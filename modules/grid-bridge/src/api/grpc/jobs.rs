//! Scheduler and job mapping.

use gridlink_proto as proto;

use crate::api::grpc::properties::map_property_descriptions;
use crate::api::grpc::{nonzero, optional};
use crate::domain::error::DomainError;
use crate::domain::jobs::{JobDescription, JobStatus, QueueStatus};
use crate::domain::properties::{AdaptorDescription, Component};

/// Reconstruct a domain job description from its wire form.
///
/// Empty strings and zeroes fall back to `None` so the scheduler applies its
/// own defaults; everything else is copied verbatim.
#[must_use]
pub fn map_job_description(description: &proto::JobDescription) -> JobDescription {
    JobDescription {
        executable: description.executable.clone(),
        arguments: description.arguments.clone(),
        working_directory: description.working_directory.clone(),
        environment: description.environment.clone(),
        queue_name: optional(&description.queue_name),
        interactive: description.interactive,
        max_time: nonzero(description.max_time),
        node_count: nonzero(description.node_count),
        processes_per_node: nonzero(description.processes_per_node),
        start_single_process: description.start_single_process,
        std_in: optional(&description.std_in),
        std_out: optional(&description.std_out),
        std_err: optional(&description.std_err),
        options: description.options.clone(),
    }
}

/// Project a domain job description back onto the wire, bound to `scheduler`.
#[must_use]
pub fn write_job_description(
    description: &JobDescription,
    scheduler: &proto::Scheduler,
) -> proto::JobDescription {
    proto::JobDescription {
        executable: description.executable.clone(),
        arguments: description.arguments.clone(),
        working_directory: description.working_directory.clone(),
        environment: description.environment.clone(),
        queue_name: description.queue_name.clone().unwrap_or_default(),
        interactive: description.interactive,
        max_time: description.max_time.unwrap_or_default(),
        node_count: description.node_count.unwrap_or_default(),
        processes_per_node: description.processes_per_node.unwrap_or_default(),
        start_single_process: description.start_single_process,
        std_in: description.std_in.clone().unwrap_or_default(),
        std_out: description.std_out.clone().unwrap_or_default(),
        std_err: description.std_err.clone().unwrap_or_default(),
        options: description.options.clone(),
        scheduler: Some(scheduler.clone()),
    }
}

/// Wire handle for a job known under `id`.
#[must_use]
pub fn map_job(id: impl Into<String>, description: proto::JobDescription) -> proto::Job {
    proto::Job {
        id: id.into(),
        description: Some(description),
    }
}

/// Project a job status, carrying the error as data when one is present.
#[must_use]
pub fn map_job_status(status: &JobStatus, description: proto::JobDescription) -> proto::JobStatus {
    let mut record = proto::JobStatus {
        state: status.state.clone(),
        running: status.running,
        done: status.done,
        scheduler_specific_information: status.scheduler_specific_information.clone(),
        job: Some(map_job(status.job_id.clone(), description)),
        exit_code: status.exit_code.unwrap_or_default(),
        error_message: String::new(),
        error_type: proto::StatusErrorType::None as i32,
    };
    if let Some(error) = &status.error {
        record.error_message = error.to_string();
        record.error_type = classify_error(error) as i32;
    }
    record
}

/// Project a queue status; only the error message crosses the wire here, the
/// classification is a job-status concern.
#[must_use]
pub fn map_queue_status(status: &QueueStatus, scheduler: &proto::Scheduler) -> proto::QueueStatus {
    proto::QueueStatus {
        name: status.queue_name.clone(),
        scheduler: Some(scheduler.clone()),
        scheduler_specific_information: status.scheduler_specific_information.clone(),
        error: status
            .error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
    }
}

/// Project an adaptor description with its scheduler-level properties.
#[must_use]
pub fn map_scheduler_adaptor_description(
    description: &AdaptorDescription,
) -> proto::SchedulerAdaptorDescription {
    proto::SchedulerAdaptorDescription {
        name: description.name.clone(),
        description: description.description.clone(),
        supported_locations: description.supported_locations.clone(),
        supported_properties: map_property_descriptions(
            &description.supported_properties,
            Component::Scheduler,
        ),
    }
}

/// Classify a domain error into the closed wire taxonomy. Identity-based:
/// variants without a dedicated wire kind fold into `Other`.
pub(crate) fn classify_error(error: &DomainError) -> proto::StatusErrorType {
    match error {
        DomainError::Cancelled { .. } => proto::StatusErrorType::Cancelled,
        DomainError::NoSuchJob { .. } => proto::StatusErrorType::NotFound,
        DomainError::NoSuchScheduler { .. } => proto::StatusErrorType::SchedulerNotFound,
        DomainError::NotConnected { .. }
        | DomainError::InvalidLocation { .. }
        | DomainError::Io { .. } => proto::StatusErrorType::Other,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::properties::{PropertyDescription, PropertyType};

    fn scheduler() -> proto::Scheduler {
        proto::Scheduler {
            id: "slurm://someone@somehost".to_owned(),
        }
    }

    #[test]
    fn wire_defaults_become_unset_domain_fields() {
        let wire = proto::JobDescription {
            executable: "/bin/hostname".to_owned(),
            ..Default::default()
        };

        let description = map_job_description(&wire);

        assert_eq!(description.executable, "/bin/hostname");
        assert_eq!(description.queue_name, None);
        assert_eq!(description.max_time, None);
        assert_eq!(description.node_count, None);
        assert_eq!(description.std_out, None);
    }

    #[test]
    fn set_wire_fields_are_copied_verbatim() {
        let wire = proto::JobDescription {
            executable: "/bin/sleep".to_owned(),
            arguments: vec!["60".to_owned()],
            queue_name: "short".to_owned(),
            max_time: 15,
            node_count: 2,
            processes_per_node: 4,
            std_err: "/tmp/err.log".to_owned(),
            ..Default::default()
        };

        let description = map_job_description(&wire);

        assert_eq!(description.arguments, vec!["60".to_owned()]);
        assert_eq!(description.queue_name.as_deref(), Some("short"));
        assert_eq!(description.max_time, Some(15));
        assert_eq!(description.node_count, Some(2));
        assert_eq!(description.processes_per_node, Some(4));
        assert_eq!(description.std_err.as_deref(), Some("/tmp/err.log"));
    }

    #[test]
    fn description_round_trips_through_the_wire() {
        let wire = proto::JobDescription {
            executable: "/bin/true".to_owned(),
            queue_name: "long".to_owned(),
            node_count: 3,
            ..Default::default()
        };

        let domain = map_job_description(&wire);
        let back = write_job_description(&domain, &scheduler());

        assert_eq!(back.executable, wire.executable);
        assert_eq!(back.queue_name, wire.queue_name);
        assert_eq!(back.node_count, wire.node_count);
        assert_eq!(back.scheduler, Some(scheduler()));
    }

    fn status_with(error: Option<DomainError>) -> JobStatus {
        JobStatus {
            job_id: "job-1".to_owned(),
            state: "DONE".to_owned(),
            running: false,
            done: true,
            exit_code: Some(1),
            scheduler_specific_information: HashMap::new(),
            error,
        }
    }

    #[test]
    fn status_without_error_keeps_error_fields_unset() {
        let record = map_job_status(&status_with(None), proto::JobDescription::default());

        assert_eq!(record.error_message, "");
        assert_eq!(record.error_type, proto::StatusErrorType::None as i32);
        assert_eq!(record.exit_code, 1);
        assert_eq!(record.job.as_ref().map(|j| j.id.as_str()), Some("job-1"));
    }

    #[test]
    fn status_error_is_carried_as_data() {
        let status = status_with(Some(DomainError::cancelled("killed by user")));

        let record = map_job_status(&status, proto::JobDescription::default());

        assert!(record.error_message.contains("killed by user"));
        assert_eq!(record.error_type, proto::StatusErrorType::Cancelled as i32);
    }

    #[test]
    fn classification_covers_the_whole_taxonomy() {
        let cases = [
            (DomainError::cancelled("c"), proto::StatusErrorType::Cancelled),
            (DomainError::no_such_job("j"), proto::StatusErrorType::NotFound),
            (
                DomainError::no_such_scheduler("s"),
                proto::StatusErrorType::SchedulerNotFound,
            ),
            (DomainError::not_connected("n"), proto::StatusErrorType::Other),
            (DomainError::io("i"), proto::StatusErrorType::Other),
        ];
        for (error, expected) in cases {
            assert_eq!(classify_error(&error), expected);
        }
    }

    #[test]
    fn adaptor_description_embeds_scheduler_level_properties() {
        let description = AdaptorDescription {
            name: "slurm".to_owned(),
            description: "slurm workload manager".to_owned(),
            supported_locations: vec!["host[:port]".to_owned()],
            supported_properties: vec![
                PropertyDescription::new(
                    "poll.delay",
                    PropertyType::Long,
                    Some("1000".to_owned()),
                    "scheduler poll delay",
                    vec![Component::Scheduler],
                ),
                PropertyDescription::new(
                    "buffer.size",
                    PropertyType::Size,
                    None,
                    "copy buffer size",
                    vec![Component::FileSystem],
                ),
            ],
        };

        let record = map_scheduler_adaptor_description(&description);

        assert_eq!(record.name, "slurm");
        assert_eq!(record.description, "slurm workload manager");
        assert_eq!(record.supported_locations, vec!["host[:port]".to_owned()]);
        let names: Vec<&str> = record
            .supported_properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["poll.delay"]);
    }

    #[test]
    fn queue_status_carries_the_error_message() {
        let status = QueueStatus {
            queue_name: "short".to_owned(),
            scheduler_specific_information: HashMap::new(),
            error: Some(DomainError::no_such_scheduler("gone")),
        };

        let record = map_queue_status(&status, &scheduler());

        assert_eq!(record.name, "short");
        assert!(record.error.contains("gone"));
        assert_eq!(record.scheduler, Some(scheduler()));
    }
}
