//! cvtex — resume-to-LaTeX document generation core.
//!
//! Given a sanitized resume form payload carrying a `selectedTemplate` id,
//! the dispatcher resolves the matching template renderer and compiler
//! option bundle, and the renderer produces the full LaTeX source by
//! emitting each requested section in caller order.
//!
//! Everything here is a pure function of its input: no I/O, no shared
//! state, byte-identical output for identical input. The HTTP layer that
//! receives requests and the toolchain that compiles the generated LaTeX
//! to PDF live outside this crate.

pub mod errors;
pub mod generation;
pub mod models;

pub use errors::Error;
pub use generation::dispatcher::{resolve, Compiler, CompilerOptions, RenderResult, TemplateId};
pub use models::form::SanitizedValues;
