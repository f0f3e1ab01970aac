//! Resource types of the orchestration API, declared with [`crate::resource!`].

pub mod ad_hoc_command;
pub mod extra_vars;
pub mod group;
pub mod host;
pub mod inventory;
pub mod job;
pub mod job_template;

pub use ad_hoc_command::*;
pub use extra_vars::*;
pub use group::*;
pub use host::*;
pub use inventory::*;
pub use job::*;
pub use job_template::*;
