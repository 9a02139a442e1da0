// Document generation: template registry + per-template LaTeX renderers.
// Pure text transformation throughout — compilation happens downstream.

pub mod dispatcher;
pub mod latex;
pub mod templates;

pub use dispatcher::{resolve, Compiler, CompilerOptions, RenderResult, TemplateId};
