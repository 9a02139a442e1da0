//! Template 9 — minimalist single-page layout on plain `article`, pdflatex,
//! no extra options. Headings are ruled with a local `\resheading` macro.

use std::fmt::Write;

use crate::generation::latex::{
    date_range, heading_or, join_non_empty, non_empty, or_empty, WHITESPACE,
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
        "\\documentclass[10pt]{{article}}\n\
         \\usepackage[margin=0.5in]{{geometry}}\n\
         \\usepackage{{enumitem}}\n\
         \\newcommand{{\\resheading}}[1]{{{{\\large \\textbf{{#1}}}}\\vspace{{2pt}}\\hrule\\vspace{{6pt}}}}\n\
         \\pagenumbering{{gobble}}\n\
         \n\
         \\begin{{document}}\n\
         {}\n\
         {WHITESPACE}\n\
         \\end{{document}}",
        body(values, &SECTIONS),
    )
}

fn profile(basics: Option<&Basics>) -> String {
    let (name, info) = match basics {
        Some(basics) => (
            or_empty(basics.name.as_deref()).to_string(),
            join_non_empty(
                &[
                    basics.email.as_deref(),
                    basics.phone.as_deref(),
                    basics.location.as_ref().and_then(|l| l.address.as_deref()),
                    basics.website.as_deref(),
                ],
                " | ",
            ),
        ),
        None => (String::new(), String::new()),
    };

    format!(
        "\\begin{{center}}\n\
         \\textbf{{\\Large {name}}}\\\\\n\
         {info}\n\
         \\end{{center}}"
    )
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
        "\\resheading{{{}}}",
        heading_or(education.heading.as_deref(), "Education")
    );

    for school in schools {
        let mut line = String::new();
        if let Some(institution) = non_empty(school.institution.as_deref()) {
            let _ = write!(line, "\\textbf{{{institution}}}");
        }
        match (
            non_empty(school.study_type.as_deref()),
            non_empty(school.area.as_deref()),
        ) {
            (Some(study_type), Some(area)) => {
                let _ = write!(line, " -- {study_type} in {area}");
            }
            (Some(only), None) | (None, Some(only)) => {
                let _ = write!(line, " -- {only}");
            }
            (None, None) => {}
        }
        let dates = date_range(
            school.start_date.as_deref(),
            school.end_date.as_deref(),
            "-",
        );
        if !dates.is_empty() {
            let _ = write!(line, " \\hfill {dates}");
        }
        let _ = writeln!(out, "{line}\\\\");

        let detail = join_non_empty(
            &[
                school.location.as_deref(),
                non_empty(school.gpa.as_deref())
                    .map(|gpa| format!("GPA: {gpa}"))
                    .as_deref(),
            ],
            ", ",
        );
        if !detail.is_empty() {
            let _ = writeln!(out, "{detail}\\\\");
        }
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
        "\\resheading{{{}}}",
        heading_or(work.heading.as_deref(), "Experience")
    );

    for job in jobs {
        let mut line = String::new();
        if let Some(company) = non_empty(job.company.as_deref()) {
            let _ = write!(line, "\\textbf{{{company}}}");
        }
        if let Some(position) = non_empty(job.position.as_deref()) {
            let _ = write!(line, " -- {position}");
        }
        let dates = date_range(job.start_date.as_deref(), job.end_date.as_deref(), "–");
        if !dates.is_empty() {
            let _ = write!(line, " \\hfill {dates}");
        }
        let _ = writeln!(out, "{line}\\\\");

        if let Some(location) = non_empty(job.location.as_deref()) {
            let _ = writeln!(out, "{location}\\\\");
        }
        if let Some(highlights) = job.highlights.as_deref() {
            out.push_str("\\begin{itemize}[noitemsep,topsep=0pt]\n");
            for highlight in highlights {
                let _ = writeln!(out, "\\item {highlight}");
            }
            out.push_str("\\end{itemize}\n");
        }
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
        "\\resheading{{{}}}",
        heading_or(skills.heading.as_deref(), "Skills")
    );

    for skill in entries {
        let name = match non_empty(skill.name.as_deref()) {
            Some(name) => format!("\\textbf{{{name}}}: "),
            None => String::new(),
        };
        let keywords = skill.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(out, "{name}{keywords}\\\\");
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
        "\\resheading{{{}}}",
        heading_or(projects.heading.as_deref(), "Projects")
    );

    for project in entries {
        let mut line = String::new();
        if let Some(name) = non_empty(project.name.as_deref()) {
            let _ = write!(line, "\\textbf{{{name}}}");
        }
        let keywords = project.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = write!(line, " -- {keywords}");
        let _ = writeln!(out, "{line}\\\\");

        if let Some(description) = non_empty(project.description.as_deref()) {
            let _ = writeln!(out, "{description}\\\\");
        }
        if let Some(url) = non_empty(project.url.as_deref()) {
            let _ = writeln!(out, "{url}\\\\");
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
        "\\resheading{{{}}}",
        heading_or(awards.heading.as_deref(), "Awards")
    );

    for award in entries {
        let mut line = String::new();
        if let Some(title) = non_empty(award.title.as_deref()) {
            let _ = write!(line, "\\textbf{{{title}}}");
        }
        if let Some(awarder) = non_empty(award.awarder.as_deref()) {
            let _ = write!(line, " -- {awarder}");
        }
        if let Some(date) = non_empty(award.date.as_deref()) {
            let _ = write!(line, " \\hfill {date}");
        }
        let _ = writeln!(out, "{line}\\\\");

        if let Some(summary) = non_empty(award.summary.as_deref()) {
            let _ = writeln!(out, "{summary}\\\\");
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
    fn test_heading_macro_wraps_sections() {
        let data = Education {
            heading: None,
            schools: Some(vec![School {
                institution: Some("MIT".to_string()),
                ..School::default()
            }]),
        };
        assert!(education(Some(&data)).starts_with("\\resheading{Education}\n"));
    }

    #[test]
    fn test_document_frame_defines_resheading() {
        let doc = render(&SanitizedValues::default());
        assert!(doc.contains("\\newcommand{\\resheading}[1]"));
        assert!(doc.ends_with("\n\\ \n\\end{document}"));
    }
}
