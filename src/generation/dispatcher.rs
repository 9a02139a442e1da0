//! Template registry — maps a selected template id to its renderer, LaTeX
//! compiler and compiler option bundle.
//!
//! Lookup is exact-match over a closed set of nine ids. Unknown ids never
//! error: the dispatcher silently falls back to template 1 (default
//! renderer, pdflatex, no options). The form layer has always relied on
//! that forgiving behaviour, so no diagnostic reaches the caller — only a
//! debug log line records the fallback.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::generation::templates;
use crate::models::form::SanitizedValues;

/// Root of the on-disk template assets (document classes, fonts). Used for
/// deterministic path construction only — the dispatcher does no I/O.
const TEMPLATE_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

// ────────────────────────────────────────────────────────────────────────────
// Template identifiers
// ────────────────────────────────────────────────────────────────────────────

/// The closed set of known template ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    Template1,
    Template2,
    Template3,
    Template4,
    Template5,
    Template6,
    Template7,
    Template8,
    Template9,
}

impl TemplateId {
    pub const ALL: [TemplateId; 9] = [
        TemplateId::Template1,
        TemplateId::Template2,
        TemplateId::Template3,
        TemplateId::Template4,
        TemplateId::Template5,
        TemplateId::Template6,
        TemplateId::Template7,
        TemplateId::Template8,
        TemplateId::Template9,
    ];

    /// Exact-match lookup; `None` for anything outside the known set.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "template1" => Some(TemplateId::Template1),
            "template2" => Some(TemplateId::Template2),
            "template3" => Some(TemplateId::Template3),
            "template4" => Some(TemplateId::Template4),
            "template5" => Some(TemplateId::Template5),
            "template6" => Some(TemplateId::Template6),
            "template7" => Some(TemplateId::Template7),
            "template8" => Some(TemplateId::Template8),
            "template9" => Some(TemplateId::Template9),
            _ => None,
        }
    }

    /// Directory name under the template asset root.
    pub fn dir_name(self) -> &'static str {
        match self {
            TemplateId::Template1 => "template1",
            TemplateId::Template2 => "template2",
            TemplateId::Template3 => "template3",
            TemplateId::Template4 => "template4",
            TemplateId::Template5 => "template5",
            TemplateId::Template6 => "template6",
            TemplateId::Template7 => "template7",
            TemplateId::Template8 => "template8",
            TemplateId::Template9 => "template9",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Compiler + options
// ────────────────────────────────────────────────────────────────────────────

/// The closed set of LaTeX compilers the templates are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compiler {
    Pdflatex,
    Xelatex,
    Lualatex,
}

impl Compiler {
    /// Executable name the compilation layer invokes.
    pub fn executable(self) -> &'static str {
        match self {
            Compiler::Pdflatex => "pdflatex",
            Compiler::Xelatex => "xelatex",
            Compiler::Lualatex => "lualatex",
        }
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

/// Compiler flags for one template.
///
/// The key set is template-specific: serialization skips absent fields, so
/// callers must not assume a uniform shape across templates and must pass
/// the bundle through unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompilerOptions {
    /// Extra TEXINPUTS search path for the template's document class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<PathBuf>,
    /// Extra font search path (xelatex/lualatex templates with bundled fonts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<PathBuf>,
    /// Number of compile passes, for templates with cross-reference layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passes: Option<u32>,
}

impl CompilerOptions {
    fn none() -> Self {
        Self::default()
    }

    fn inputs_only(id: TemplateId) -> Self {
        Self {
            inputs: Some(inputs_dir(id)),
            ..Self::default()
        }
    }

    fn search_paths(id: TemplateId) -> Self {
        Self {
            inputs: Some(inputs_dir(id)),
            fonts: Some(inputs_dir(id)),
            ..Self::default()
        }
    }

    fn multi_pass(id: TemplateId, passes: u32) -> Self {
        Self {
            inputs: Some(inputs_dir(id)),
            fonts: Some(inputs_dir(id)),
            passes: Some(passes),
        }
    }
}

fn inputs_dir(id: TemplateId) -> PathBuf {
    Path::new(TEMPLATE_ROOT).join(id.dir_name()).join("inputs")
}

/// What the compilation layer needs: the compiler to invoke, the full LaTeX
/// source, and the per-template flags.
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    pub command: Compiler,
    pub document: String,
    pub options: CompilerOptions,
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Resolves the selected template and renders the document.
///
/// Never fails: an unrecognized `selected_template` resolves to template 1
/// with its default command and empty options.
pub fn resolve(data: &SanitizedValues) -> RenderResult {
    let id = match TemplateId::parse(&data.selected_template) {
        Some(id) => id,
        None => {
            debug!(
                selected = %data.selected_template,
                "unknown template id, falling back to template1"
            );
            TemplateId::Template1
        }
    };

    let result = match id {
        TemplateId::Template1 => RenderResult {
            command: Compiler::Pdflatex,
            document: templates::template1::render(data),
            options: CompilerOptions::none(),
        },
        TemplateId::Template2 => RenderResult {
            command: Compiler::Xelatex,
            document: templates::template2::render(data),
            options: CompilerOptions::search_paths(id),
        },
        TemplateId::Template3 => RenderResult {
            command: Compiler::Pdflatex,
            document: templates::template3::render(data),
            options: CompilerOptions::none(),
        },
        TemplateId::Template4 => RenderResult {
            command: Compiler::Xelatex,
            document: templates::template4::render(data),
            options: CompilerOptions::search_paths(id),
        },
        TemplateId::Template5 => RenderResult {
            command: Compiler::Pdflatex,
            document: templates::template5::render(data),
            options: CompilerOptions::inputs_only(id),
        },
        TemplateId::Template6 => RenderResult {
            command: Compiler::Xelatex,
            document: templates::template6::render(data),
            options: CompilerOptions::multi_pass(id, 2),
        },
        TemplateId::Template7 => RenderResult {
            command: Compiler::Pdflatex,
            document: templates::template7::render(data),
            options: CompilerOptions::inputs_only(id),
        },
        TemplateId::Template8 => RenderResult {
            command: Compiler::Lualatex,
            document: templates::template8::render(data),
            options: CompilerOptions::inputs_only(id),
        },
        TemplateId::Template9 => RenderResult {
            command: Compiler::Pdflatex,
            document: templates::template9::render(data),
            options: CompilerOptions::none(),
        },
    };

    debug!(
        template = %id,
        command = %result.command,
        bytes = result.document.len(),
        "rendered resume document"
    );

    result
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::{Basics, Education, School};

    fn sample_values(template: &str) -> SanitizedValues {
        SanitizedValues {
            selected_template: template.to_string(),
            ordered_sections: vec!["profile".to_string(), "education".to_string()],
            basics: Some(Basics {
                name: Some("Ada Lovelace".to_string()),
                email: Some("ada@example.com".to_string()),
                ..Basics::default()
            }),
            education: Some(Education {
                heading: None,
                schools: Some(vec![School {
                    institution: Some("University of London".to_string()),
                    start_date: Some("1835".to_string()),
                    end_date: Some("1839".to_string()),
                    ..School::default()
                }]),
            }),
            ..SanitizedValues::default()
        }
    }

    // ── known identifiers ───────────────────────────────────────────────────

    #[test]
    fn test_every_known_id_renders_a_document() {
        for id in TemplateId::ALL {
            let result = resolve(&sample_values(id.dir_name()));
            assert!(
                !result.document.is_empty(),
                "{id} produced an empty document for non-empty orderedSections"
            );
            assert!(
                matches!(
                    result.command,
                    Compiler::Pdflatex | Compiler::Xelatex | Compiler::Lualatex
                ),
                "{id} returned a command outside the fixed compiler set"
            );
        }
    }

    #[test]
    fn test_option_bundle_shapes_are_template_specific() {
        let empty = resolve(&sample_values("template1")).options;
        assert_eq!(empty, CompilerOptions::default());

        let search = resolve(&sample_values("template2")).options;
        assert!(search.inputs.is_some() && search.fonts.is_some());
        assert!(search.passes.is_none());

        let inputs_only = resolve(&sample_values("template5")).options;
        assert!(inputs_only.inputs.is_some());
        assert!(inputs_only.fonts.is_none());

        let multi_pass = resolve(&sample_values("template6")).options;
        assert_eq!(multi_pass.passes, Some(2));
        assert!(multi_pass.inputs.is_some() && multi_pass.fonts.is_some());
    }

    #[test]
    fn test_input_paths_point_into_the_template_dir() {
        let options = resolve(&sample_values("template6")).options;
        let inputs = options.inputs.unwrap();
        assert!(inputs.ends_with("template6/inputs"), "got {inputs:?}");
    }

    #[test]
    fn test_compiler_assignment_matches_registry() {
        let expected = [
            ("template1", Compiler::Pdflatex),
            ("template2", Compiler::Xelatex),
            ("template3", Compiler::Pdflatex),
            ("template4", Compiler::Xelatex),
            ("template5", Compiler::Pdflatex),
            ("template6", Compiler::Xelatex),
            ("template7", Compiler::Pdflatex),
            ("template8", Compiler::Lualatex),
            ("template9", Compiler::Pdflatex),
        ];
        for (id, compiler) in expected {
            assert_eq!(resolve(&sample_values(id)).command, compiler, "{id}");
        }
    }

    // ── silent fallback ─────────────────────────────────────────────────────

    #[test]
    fn test_unknown_id_falls_back_to_template1() {
        let fallback = resolve(&sample_values("no-such-template"));
        let default = resolve(&sample_values("template1"));

        assert_eq!(fallback.command, Compiler::Pdflatex);
        assert_eq!(fallback.options, CompilerOptions::default());
        assert_eq!(fallback.document, default.document);
    }

    #[test]
    fn test_empty_id_also_falls_back() {
        let result = resolve(&sample_values(""));
        assert_eq!(result.command, Compiler::Pdflatex);
        assert_eq!(result.options, CompilerOptions::default());
    }

    // ── serialization ───────────────────────────────────────────────────────

    #[test]
    fn test_absent_option_keys_are_skipped_in_json() {
        let value = serde_json::to_value(resolve(&sample_values("template1")).options).unwrap();
        assert_eq!(value, serde_json::json!({}));

        let value = serde_json::to_value(resolve(&sample_values("template6")).options).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["fonts", "inputs", "passes"]);

        let value = serde_json::to_value(resolve(&sample_values("template5")).options).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["inputs"]);
    }

    #[test]
    fn test_command_serializes_to_executable_name() {
        let value = serde_json::to_value(Compiler::Xelatex).unwrap();
        assert_eq!(value, serde_json::json!("xelatex"));
    }

    // ── determinism ─────────────────────────────────────────────────────────

    #[test]
    fn test_resolve_is_deterministic() {
        let values = sample_values("template6");
        let first = resolve(&values);
        let second = resolve(&values);
        assert_eq!(first.document, second.document);
        assert_eq!(first.options, second.options);
    }
}
