//! Template 3 — `moderncv` (classic style) under pdflatex. The class ships
//! with TeX distributions, so no extra search paths are needed.
//!
//! moderncv wants the personal data commands before `\makecvtitle`, so the
//! profile rule emits both together as one contribution.

use std::fmt::Write;

use crate::generation::latex::{date_range, heading_or, non_empty, split_name, WHITESPACE};
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
        "\\documentclass[11pt,a4paper]{{moderncv}}\n\
         \\moderncvstyle{{classic}}\n\
         \\moderncvcolor{{blue}}\n\
         \\usepackage[scale=0.75]{{geometry}}\n\
         \n\
         \\begin{{document}}\n\
         {}\n\
         {WHITESPACE}\n\
         \\end{{document}}",
        body(values, &SECTIONS),
    )
}

fn profile(basics: Option<&Basics>) -> String {
    let Some(basics) = basics else {
        return "\\name{}{}\n\\makecvtitle".to_string();
    };

    let (first, rest) = match non_empty(basics.name.as_deref()) {
        Some(name) => split_name(name),
        None => ("", ""),
    };

    let mut out = String::new();
    let _ = writeln!(out, "\\name{{{first}}}{{{rest}}}");
    if let Some(email) = non_empty(basics.email.as_deref()) {
        let _ = writeln!(out, "\\email{{{email}}}");
    }
    if let Some(phone) = non_empty(basics.phone.as_deref()) {
        let _ = writeln!(out, "\\phone{{{phone}}}");
    }
    if let Some(address) = basics
        .location
        .as_ref()
        .and_then(|l| non_empty(l.address.as_deref()))
    {
        let _ = writeln!(out, "\\address{{{address}}}");
    }
    if let Some(website) = non_empty(basics.website.as_deref()) {
        let _ = writeln!(out, "\\homepage{{{website}}}");
    }
    out.push_str("\\makecvtitle");
    out
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
        let degree = match (
            non_empty(school.study_type.as_deref()),
            non_empty(school.area.as_deref()),
        ) {
            (Some(study_type), Some(area)) => format!("{study_type} in {area}"),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => String::new(),
        };
        let dates = date_range(
            school.start_date.as_deref(),
            school.end_date.as_deref(),
            "-",
        );
        let gpa = match non_empty(school.gpa.as_deref()) {
            Some(gpa) => format!("GPA: {gpa}"),
            None => String::new(),
        };

        let _ = writeln!(
            out,
            "\\cventry{{{dates}}}{{{degree}}}{{{}}}{{{}}}{{{gpa}}}{{}}",
            non_empty(school.institution.as_deref()).unwrap_or(""),
            non_empty(school.location.as_deref()).unwrap_or(""),
        );
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
        let dates = date_range(job.start_date.as_deref(), job.end_date.as_deref(), "–");

        let highlights = match job.highlights.as_deref() {
            Some(highlights) => {
                let mut block = String::from("\\begin{itemize}\n");
                for highlight in highlights {
                    let _ = writeln!(block, "\\item {highlight}");
                }
                block.push_str("\\end{itemize}");
                block
            }
            None => String::new(),
        };

        let _ = writeln!(
            out,
            "\\cventry{{{dates}}}{{{}}}{{{}}}{{{}}}{{}}{{{highlights}}}",
            non_empty(job.position.as_deref()).unwrap_or(""),
            non_empty(job.company.as_deref()).unwrap_or(""),
            non_empty(job.location.as_deref()).unwrap_or(""),
        );
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
        let keywords = skill.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(
            out,
            "\\cvitem{{{}}}{{{keywords}}}",
            non_empty(skill.name.as_deref()).unwrap_or(""),
        );
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
        let keywords = project.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(
            out,
            "\\cvitem{{{}}}{{{keywords}}}",
            non_empty(project.name.as_deref()).unwrap_or(""),
        );
        if let Some(description) = non_empty(project.description.as_deref()) {
            let _ = writeln!(out, "\\cvitem{{}}{{{description}}}");
        }
        if let Some(url) = non_empty(project.url.as_deref()) {
            let _ = writeln!(out, "\\cvitem{{}}{{{url}}}");
        }
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
            "\\cvitem{{{}}}{{{}}}",
            non_empty(award.date.as_deref()).unwrap_or(""),
            non_empty(award.title.as_deref()).unwrap_or(""),
        );
        if let Some(awarder) = non_empty(award.awarder.as_deref()) {
            let _ = writeln!(out, "\\cvitem{{}}{{{awarder}}}");
        }
        if let Some(summary) = non_empty(award.summary.as_deref()) {
            let _ = writeln!(out, "\\cvitem{{}}{{{summary}}}");
        }
    }

    out.pop();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::School;

    #[test]
    fn test_profile_emits_personal_data_before_title() {
        let basics = Basics {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            ..Basics::default()
        };
        assert_eq!(
            profile(Some(&basics)),
            "\\name{Ada}{Lovelace}\n\\email{ada@example.com}\n\\makecvtitle"
        );
    }

    #[test]
    fn test_cventry_keeps_six_argument_slots() {
        let data = Education {
            heading: None,
            schools: Some(vec![School::default()]),
        };
        assert!(education(Some(&data)).contains("\\cventry{}{}{}{}{}{}"));
    }
}
