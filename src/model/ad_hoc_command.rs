use super::job::UnifiedJob;

crate::resource! {
    /// A single module run against an inventory, outside any playbook.
    pub struct AdHocCommand {
        endpoint: "ad_hoc_commands",
        exclude: [],
        extends: UnifiedJob,
    }
}
