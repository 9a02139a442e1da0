//! Template 2 — Deedy-style two-column class under xelatex, with bundled
//! class file and open fonts shipped through the `inputs`/`fonts` options.

use std::fmt::Write;

use crate::generation::latex::{
    date_range, heading_or, join_non_empty, non_empty, split_name, WHITESPACE,
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
         \\documentclass[]{{deedy-resume-openfont}}\n\
         \n\
         \\begin{{document}}\n\
         {}\n\
         {WHITESPACE}\n\
         \\end{{document}}",
        body(values, &SECTIONS),
    )
}

/// `\namesection` takes the two name halves separately; the class handles
/// the spacing between them.
fn profile(basics: Option<&Basics>) -> String {
    let Some(basics) = basics else {
        return "\\namesection{}{}{}".to_string();
    };

    let (first, rest) = match non_empty(basics.name.as_deref()) {
        Some(name) => split_name(name),
        None => ("", ""),
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

    format!("\\namesection{{{first}}}{{{rest}}}{{{info}}}")
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

    for school in schools {
        let _ = writeln!(
            out,
            "\\runsubsection{{{}}}",
            non_empty(school.institution.as_deref()).unwrap_or("")
        );

        let degree = match (
            non_empty(school.study_type.as_deref()),
            non_empty(school.area.as_deref()),
        ) {
            (Some(study_type), Some(area)) => format!("{study_type} in {area}"),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => String::new(),
        };
        if !degree.is_empty() {
            let _ = writeln!(out, "\\descript{{| {degree}}}");
        }

        let dates = date_range(
            school.start_date.as_deref(),
            school.end_date.as_deref(),
            "-",
        );
        let where_when = join_non_empty(
            &[Some(dates.as_str()), school.location.as_deref()],
            " | ",
        );
        if !where_when.is_empty() {
            let _ = writeln!(out, "\\location{{{where_when}}}");
        }
        if let Some(gpa) = non_empty(school.gpa.as_deref()) {
            let _ = writeln!(out, "GPA: {gpa}");
        }
        out.push_str("\\sectionsep\n");
    }

    out.pop();
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

    for job in jobs {
        let _ = writeln!(
            out,
            "\\runsubsection{{{}}}",
            non_empty(job.company.as_deref()).unwrap_or("")
        );
        if let Some(position) = non_empty(job.position.as_deref()) {
            let _ = writeln!(out, "\\descript{{| {position}}}");
        }

        let dates = date_range(job.start_date.as_deref(), job.end_date.as_deref(), "–");
        let where_when = join_non_empty(
            &[Some(dates.as_str()), job.location.as_deref()],
            " | ",
        );
        if !where_when.is_empty() {
            let _ = writeln!(out, "\\location{{{where_when}}}");
        }

        if let Some(highlights) = job.highlights.as_deref() {
            out.push_str("\\begin{tightemize}\n");
            for highlight in highlights {
                let _ = writeln!(out, "\\item {highlight}");
            }
            out.push_str("\\end{tightemize}\n");
        }
        out.push_str("\\sectionsep\n");
    }

    out.pop();
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

    for skill in entries {
        let _ = writeln!(
            out,
            "\\runsubsection{{{}}}",
            non_empty(skill.name.as_deref()).unwrap_or("")
        );
        let keywords = skill.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(out, "\\descript{{{keywords}}}");
        out.push_str("\\sectionsep\n");
    }

    out.pop();
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

    for project in entries {
        let _ = writeln!(
            out,
            "\\runsubsection{{{}}}",
            non_empty(project.name.as_deref()).unwrap_or("")
        );
        let keywords = project.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(out, "\\descript{{| {keywords}}}");
        if let Some(url) = non_empty(project.url.as_deref()) {
            let _ = writeln!(out, "\\location{{{url}}}");
        }
        if let Some(description) = non_empty(project.description.as_deref()) {
            let _ = writeln!(out, "{description}");
        }
        out.push_str("\\sectionsep\n");
    }

    out.pop();
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

    for award in entries {
        let _ = writeln!(
            out,
            "\\runsubsection{{{}}}",
            non_empty(award.title.as_deref()).unwrap_or("")
        );
        let when_who = join_non_empty(&[award.date.as_deref(), award.awarder.as_deref()], " | ");
        if !when_who.is_empty() {
            let _ = writeln!(out, "\\location{{{when_who}}}");
        }
        if let Some(summary) = non_empty(award.summary.as_deref()) {
            let _ = writeln!(out, "{summary}");
        }
        out.push_str("\\sectionsep\n");
    }

    out.pop();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namesection_splits_halves_without_trailing_space() {
        let basics = Basics {
            name: Some("Ada Lovelace".to_string()),
            ..Basics::default()
        };
        assert_eq!(profile(Some(&basics)), "\\namesection{Ada}{Lovelace}{}");
    }

    #[test]
    fn test_profile_placeholder_when_absent() {
        assert_eq!(profile(None), "\\namesection{}{}{}");
    }

    #[test]
    fn test_document_frame_targets_xelatex() {
        let doc = render(&SanitizedValues::default());
        assert!(doc.starts_with("%!TEX TS-program = xelatex\n"));
        assert!(doc.contains("\\documentclass[]{deedy-resume-openfont}"));
    }
}
