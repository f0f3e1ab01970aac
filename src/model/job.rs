use crate::framework::Schema;

/// Fields shared by everything the API runs: jobs, ad hoc commands, updates.
///
/// Not an endpoint of its own; [`Job`] and
/// [`AdHocCommand`](super::AdHocCommand) extend it.
pub struct UnifiedJob;

impl Schema for UnifiedJob {
    const EXCLUDE: &'static [&'static str] = &["extra_vars", "artifacts"];
}

crate::resource! {
    /// A playbook run, usually started by launching a
    /// [`JobTemplate`](super::JobTemplate).
    pub struct Job {
        endpoint: "jobs",
        exclude: ["job_env"],
        extends: UnifiedJob,
    }
}

impl Job {
    /// `pending`, `running`, `successful`, ...
    pub fn status(&self) -> Option<&str> {
        self.attr("status").and_then(|f| f.as_str())
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.status(),
            Some("successful" | "failed" | "error" | "canceled")
        )
    }
}
