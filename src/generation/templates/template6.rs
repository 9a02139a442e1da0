//! Template 6 — `friggeri-cv` under xelatex, compiled in two passes.
//!
//! The entry layout is positional throughout: `\entry` always receives four
//! brace groups, so missing values are substituted with empty strings to
//! keep the argument count intact.

use std::fmt::Write;

use crate::generation::latex::{
    date_range, heading_or, join_non_empty, non_empty, or_empty, split_name, WHITESPACE,
};
use crate::generation::templates::{body, SectionTable};
use crate::models::form::{Awards, Basics, Education, Projects, SanitizedValues, Skills, Work};

const SECTIONS: SectionTable = SectionTable {
    profile,
    education,
    work,
    skills,
    projects,
    awards,
};

pub fn render(values: &SanitizedValues) -> String {
    format!(
        "%!TEX TS-program = xelatex\n\
         \\documentclass[]{{friggeri-cv}}\n\
         \n\
         \\begin{{document}}\n\
         {}\n\
         {WHITESPACE}\n\
         \\end{{document}}",
        body(values, &SECTIONS),
    )
}

/// `\header{<first[ ]>}{<rest>}{<info>}`. Absent basics still produce a
/// structurally valid (empty) header block.
fn profile(basics: Option<&Basics>) -> String {
    let Some(basics) = basics else {
        return "\\header{}{}{}".to_string();
    };

    let (first, rest) = match non_empty(basics.name.as_deref()) {
        Some(name) => split_name(name),
        None => ("", ""),
    };
    // A single separating space belongs to the first half, but only when
    // both halves are present.
    let first = if !first.is_empty() && !rest.is_empty() {
        format!("{first} ")
    } else {
        first.to_string()
    };

    let info = join_non_empty(
        &[
            basics.email.as_deref(),
            basics.phone.as_deref(),
            basics.location.as_ref().and_then(|l| l.address.as_deref()),
            basics.website.as_deref(),
        ],
        " | ",
    );

    format!("\\header{{{first}}}{{{rest}}}{{{info}}}")
}

fn education(education: Option<&Education>) -> String {
    let Some(education) = education else {
        return String::new();
    };
    let Some(schools) = education.schools.as_deref() else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\\section{{{}}}",
        heading_or(education.heading.as_deref(), "Education")
    );
    out.push_str("\\begin{entrylist}\n");

    for school in schools {
        let mut line = String::new();
        if let Some(institution) = non_empty(school.institution.as_deref()) {
            line.push_str(institution);
        }
        match (
            non_empty(school.study_type.as_deref()),
            non_empty(school.area.as_deref()),
        ) {
            (Some(study_type), Some(area)) => {
                let _ = write!(line, ", {{\\normalfont {study_type} in {area}}}");
            }
            (Some(only), None) | (None, Some(only)) => {
                let _ = write!(line, ", {{\\normalfont {only}}}");
            }
            (None, None) => {}
        }

        let dates = date_range(
            school.start_date.as_deref(),
            school.end_date.as_deref(),
            "-",
        );
        let gpa = match non_empty(school.gpa.as_deref()) {
            Some(gpa) => format!("\\emph{{GPA: {gpa}}}"),
            None => String::new(),
        };

        let _ = writeln!(
            out,
            "\\entry\n  {{{dates}}}\n  {{{line}}}\n  {{{}}}\n  {{{gpa}}}",
            or_empty(school.location.as_deref()),
        );
    }

    out.push_str("\\end{entrylist}");
    out
}

fn work(work: Option<&Work>) -> String {
    let Some(work) = work else {
        return String::new();
    };
    let Some(jobs) = work.jobs.as_deref() else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\\section{{{}}}",
        heading_or(work.heading.as_deref(), "Experience")
    );
    out.push_str("\\begin{entrylist}\n");

    for job in jobs {
        let mut line = String::new();
        if let Some(company) = non_empty(job.company.as_deref()) {
            line.push_str(company);
        }
        if let Some(position) = non_empty(job.position.as_deref()) {
            let _ = write!(line, ", {position}");
        }

        // The itemize block is rendered whenever the field exists, even for
        // an empty highlight list.
        let highlights = match job.highlights.as_deref() {
            Some(highlights) => {
                let mut block = String::from(
                    "\\vspace{-3mm}\\begin{itemize}[leftmargin=10pt,itemsep=4pt]\n",
                );
                for highlight in highlights {
                    let _ = writeln!(block, "\\item {highlight}");
                }
                block.push_str("\\end{itemize}");
                block
            }
            None => String::new(),
        };

        let dates = date_range(job.start_date.as_deref(), job.end_date.as_deref(), "–");

        let _ = writeln!(
            out,
            "\\entry\n  {{{dates}}}\n  {{{line}}}\n  {{{}}}\n  {{{highlights}}}",
            or_empty(job.location.as_deref()),
        );
    }

    out.push_str("\\end{entrylist}");
    out
}

fn skills(skills: Option<&Skills>) -> String {
    let Some(skills) = skills else {
        return String::new();
    };
    let Some(entries) = skills.skills.as_deref() else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\\section{{{}}}",
        heading_or(skills.heading.as_deref(), "Skills")
    );
    out.push_str("\\begin{entrylist}\n");

    for skill in entries {
        let name = match non_empty(skill.name.as_deref()) {
            Some(name) => format!("{name}: "),
            None => String::new(),
        };
        let keywords = skill.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(out, "\\skill{{}}{{{name}{{\\normalfont {keywords}}}}}");
    }

    out.push_str("\\end{entrylist}");
    out
}

fn projects(projects: Option<&Projects>) -> String {
    let Some(projects) = projects else {
        return String::new();
    };
    let Some(entries) = projects.projects.as_deref() else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\\section{{{}}}",
        heading_or(projects.heading.as_deref(), "Projects")
    );
    out.push_str("\\begin{entrylist}\n");

    for project in entries {
        let mut line = String::new();
        if let Some(name) = non_empty(project.name.as_deref()) {
            line.push_str(name);
        }
        // The keyword segment is always appended, an empty list included.
        let keywords = project.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = write!(line, " {{\\normalfont {keywords}}}");

        let _ = writeln!(
            out,
            "\\entry\n  {{}}\n  {{{line}}}\n  {{{}}}\n  {{{}}}",
            or_empty(project.url.as_deref()),
            or_empty(project.description.as_deref()),
        );
    }

    out.push_str("\\end{entrylist}");
    out
}

fn awards(awards: Option<&Awards>) -> String {
    let Some(awards) = awards else {
        return String::new();
    };
    let Some(entries) = awards.awards.as_deref() else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\\section{{{}}}",
        heading_or(awards.heading.as_deref(), "Awards")
    );
    out.push_str("\\begin{entrylist}\n");

    for award in entries {
        let _ = writeln!(
            out,
            "\\entry\n  {{{}}}\n  {{{}}}\n  {{{}}}\n  {{{}}}",
            or_empty(award.date.as_deref()),
            or_empty(award.title.as_deref()),
            or_empty(award.awarder.as_deref()),
            or_empty(award.summary.as_deref()),
        );
    }

    out.push_str("\\end{entrylist}");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
