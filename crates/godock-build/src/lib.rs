//! Dockerfile rendering and writing for godock.
//!
//! # Pipeline
//!
//! ```text
//! godock
//!   1. Scan     ── go.mod → GoModule (godock-core)
//!   2. Render   ── DockerfileGenerator::render()
//!   3. Write    ── write_dockerfile()
//! ```
//!
//! # Generated stages
//!
//! - `build-stage`: `golang:<go version>`, downloads modules and builds a
//!   static binary named after the last module path segment
//! - `run-test-stage`: `go test -v ./...`, plus `govulncheck` when enabled
//! - `build-release-stage`: distroless image holding only the binary,
//!   `EXPOSE` only for a non-zero port, running as `nonroot`

pub mod dockerfile;
pub mod writer;

pub use dockerfile::{DOCKERFILE_TEMPLATE, DockerfileGenerator, RenderError, TemplateParams};
pub use writer::{WriteError, write_dockerfile};
