//! One renderer per template, all with the same contract:
//! `render(&SanitizedValues) -> String`.
//!
//! Every renderer is a fixed table of pure section rules keyed by section
//! name. Sections are emitted strictly in `orderedSections` order, unknown
//! section names contribute an empty string, and missing data degrades to
//! empty output instead of failing. Each document closes with the trailing
//! whitespace marker line before `\end{document}`.

pub mod template1;
pub mod template2;
pub mod template3;
pub mod template4;
pub mod template5;
pub mod template6;
pub mod template7;
pub mod template8;
pub mod template9;

use crate::models::form::{
    Awards, Basics, Education, Projects, SanitizedValues, Skills, Work,
};

/// Fixed mapping from section-name tokens to one template's section rules.
pub(crate) struct SectionTable {
    pub profile: fn(Option<&Basics>) -> String,
    pub education: fn(Option<&Education>) -> String,
    pub work: fn(Option<&Work>) -> String,
    pub skills: fn(Option<&Skills>) -> String,
    pub projects: fn(Option<&Projects>) -> String,
    pub awards: fn(Option<&Awards>) -> String,
}

/// Emits the requested sections in caller order and joins the contributions
/// with newlines. Unrecognized section names contribute an empty string.
pub(crate) fn body(values: &SanitizedValues, table: &SectionTable) -> String {
    values
        .ordered_sections
        .iter()
        .map(|section| match section.as_str() {
            "profile" => (table.profile)(values.basics.as_ref()),
            "education" => (table.education)(values.education.as_ref()),
            "work" => (table.work)(values.work.as_ref()),
            "skills" => (table.skills)(values.skills.as_ref()),
            "projects" => (table.projects)(values.projects.as_ref()),
            "awards" => (table.awards)(values.awards.as_ref()),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
