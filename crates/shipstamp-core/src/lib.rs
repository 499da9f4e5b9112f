//! shipstamp core - build manifest generation for CI images
//!
//! Assembles a JSON manifest of the current build (timestamp plus optional
//! source-control, package, and runner fragments) and can stamp a COPY for
//! it into a Dockerfile so the manifest ships inside the image.
//!
//! The flow is a single synchronous pass:
//! - [`ActionContext::from_env`] snapshots the CI environment once
//! - [`generate`] collects the toggled fragments, writes the manifest, and
//!   optionally appends to the Dockerfile

pub mod action;
pub mod builder;
pub mod context;
pub mod dockerfile;
pub mod error;
pub mod manifest;
pub mod package;
pub mod resolve;
pub mod scm;
pub mod telemetry;

pub use action::collect_action;
pub use builder::{build_manifest, generate, ManifestConfig};
pub use context::ActionContext;
pub use dockerfile::append_copy_instruction;
pub use error::{Result, ShipstampError};
pub use manifest::{ActionInfo, Manifest, PackageInfo, RunnerInfo, ScmInfo};
pub use package::collect_package;
pub use resolve::resolve_file;
pub use scm::collect_scm;
pub use telemetry::init_tracing;
