pub mod branch;
pub mod checkout;
pub mod commit;
pub mod commit_log;
pub mod diff;
pub mod files;
pub mod graph;
pub mod show;
pub mod status;

pub use branch::*;
pub use checkout::*;
pub use commit::*;
pub use commit_log::*;
pub use diff::*;
pub use files::*;
pub use graph::*;
pub use show::*;
pub use status::*;
