crate::resource! {
    /// A launchable playbook definition.
    ///
    /// `extra_vars` and `survey_spec` hold free-form JSON and stay raw.
    pub struct JobTemplate {
        endpoint: "job_templates",
        exclude: ["extra_vars", "survey_spec"],
    }
}

impl JobTemplate {
    pub fn survey_enabled(&self) -> bool {
        self.attr("survey_enabled")
            .and_then(|f| f.as_bool())
            .unwrap_or(false)
    }
}
