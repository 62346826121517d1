//! Copy `.proto` definitions from an upstream tree into a local `proto/`
//! directory, pointing their `go_package` option at the local Go module.

pub mod error;
pub mod layout;
pub mod matcher;
pub mod rewrite;
pub mod sync;

pub use error::SyncError;
pub use layout::SyncLayout;
pub use matcher::ProtoMatcher;
pub use rewrite::GoPackageRewrite;
pub use sync::{run, sync, SyncOptions, SyncReport};
