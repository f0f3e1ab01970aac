//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod ad_hoc_command_client;
pub mod api_client;
pub mod group_client;
pub mod host_client;
pub mod inventory_client;
pub mod job_client;
pub mod job_template_client;

pub use ad_hoc_command_client::*;
pub use api_client::*;
pub use group_client::*;
pub use host_client::*;
pub use inventory_client::*;
pub use job_client::*;
pub use job_template_client::*;
