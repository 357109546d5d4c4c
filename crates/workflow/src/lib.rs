//! Typed GitHub Actions workflow model and YAML compiler.
//!
//! This crate turns a small, strongly-typed model of jobs and steps into the
//! text of a workflow file. It emits YAML directly instead of going through a
//! serializer, which keeps the output stable and minimally quoted:
//!
//! - [`scalar`] decides between bare, single-quoted and block-literal scalars
//! - [`render`] renders lists, `env:`/`with:` mappings and nested blocks
//! - [`compile_step`], [`compile_job`] and [`compile`] assemble the document
//!
//! Every function is a pure transform from model values to text. Nothing here
//! touches the file system; writing the result is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use actionsmith_workflow::{Document, WorkflowJob, WorkflowStep, compile};
//!
//! let job = WorkflowJob::new("build", "Build and Test")
//!     .with_oses(["ubuntu-latest"])
//!     .with_scalas(["2.13.1"])
//!     .with_javas(["adopt@1.8"])
//!     .with_step(WorkflowStep::use_action("actions", "checkout", 2))
//!     .with_step(WorkflowStep::tool(["test"]).with_name("Build project"));
//!
//! let yaml = compile(&Document::new("CI").with_branches(["main"]).with_job(job), "sbt")?;
//! assert!(yaml.contains("run: sbt ++${{ matrix.scala }} test"));
//! # Ok::<(), actionsmith_workflow::Error>(())
//! ```

#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod job;
pub mod model;
pub mod render;
pub mod scalar;
pub mod step;

pub use document::compile;
pub use error::{Error, Result};
pub use job::compile_job;
pub use model::{Document, EnvMap, StepKind, WorkflowJob, WorkflowStep};
pub use step::compile_step;
