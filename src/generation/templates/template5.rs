//! Template 5 — `mcdowellcv` class under pdflatex; the class file ships in
//! the template's `inputs` directory.

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
        "\\documentclass[]{{mcdowellcv}}\n\
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
        return "\\name{}\n\\contact{}".to_string();
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

    format!(
        "\\name{{{}}}\n\\contact{{{info}}}",
        or_empty(basics.name.as_deref())
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
        "\\begin{{cvsection}}{{{}}}",
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

        let _ = writeln!(
            out,
            "\\begin{{cvsubsection}}{{{}}}{{{degree}}}{{{dates}}}",
            non_empty(school.institution.as_deref()).unwrap_or(""),
        );
        if let Some(location) = non_empty(school.location.as_deref()) {
            let _ = writeln!(out, "{location}");
        }
        if let Some(gpa) = non_empty(school.gpa.as_deref()) {
            let _ = writeln!(out, "GPA: {gpa}");
        }
        out.push_str("\\end{cvsubsection}\n");
    }

    out.push_str("\\end{cvsection}");
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
        "\\begin{{cvsection}}{{{}}}",
        heading_or(work.heading.as_deref(), "Experience")
    );

    for job in jobs {
        let mut title = String::new();
        if let Some(company) = non_empty(job.company.as_deref()) {
            title.push_str(company);
        }
        if let Some(position) = non_empty(job.position.as_deref()) {
            let _ = write!(title, ", {position}");
        }
        let dates = date_range(job.start_date.as_deref(), job.end_date.as_deref(), "–");

        let _ = writeln!(
            out,
            "\\begin{{cvsubsection}}{{{title}}}{{{}}}{{{dates}}}",
            non_empty(job.location.as_deref()).unwrap_or(""),
        );
        if let Some(highlights) = job.highlights.as_deref() {
            out.push_str("\\begin{itemize}\n");
            for highlight in highlights {
                let _ = writeln!(out, "\\item {highlight}");
            }
            out.push_str("\\end{itemize}\n");
        }
        out.push_str("\\end{cvsubsection}\n");
    }

    out.push_str("\\end{cvsection}");
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
        "\\begin{{cvsection}}{{{}}}",
        heading_or(skills.heading.as_deref(), "Skills")
    );

    for skill in entries {
        let name = match non_empty(skill.name.as_deref()) {
            Some(name) => format!("{name}: "),
            None => String::new(),
        };
        let keywords = skill.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(out, "{name}{keywords} \\\\");
    }

    out.push_str("\\end{cvsection}");
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
        "\\begin{{cvsection}}{{{}}}",
        heading_or(projects.heading.as_deref(), "Projects")
    );

    for project in entries {
        let keywords = project.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(
            out,
            "\\begin{{cvsubsection}}{{{}}}{{{keywords}}}{{}}",
            non_empty(project.name.as_deref()).unwrap_or(""),
        );
        if let Some(description) = non_empty(project.description.as_deref()) {
            let _ = writeln!(out, "{description}");
        }
        if let Some(url) = non_empty(project.url.as_deref()) {
            let _ = writeln!(out, "{url}");
        }
        out.push_str("\\end{cvsubsection}\n");
    }

    out.push_str("\\end{cvsection}");
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
        "\\begin{{cvsection}}{{{}}}",
        heading_or(awards.heading.as_deref(), "Awards")
    );

    for award in entries {
        let _ = writeln!(
            out,
            "\\begin{{cvsubsection}}{{{}}}{{{}}}{{{}}}",
            non_empty(award.title.as_deref()).unwrap_or(""),
            non_empty(award.awarder.as_deref()).unwrap_or(""),
            non_empty(award.date.as_deref()).unwrap_or(""),
        );
        if let Some(summary) = non_empty(award.summary.as_deref()) {
            let _ = writeln!(out, "{summary}");
        }
        out.push_str("\\end{cvsubsection}\n");
    }

    out.push_str("\\end{cvsection}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_uses_full_name() {
        let basics = Basics {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            ..Basics::default()
        };
        assert_eq!(
            profile(Some(&basics)),
            "\\name{Ada Lovelace}\n\\contact{ada@example.com}"
        );
    }

    #[test]
    fn test_sections_wrap_in_cvsection_env() {
        let data = Skills {
            heading: Some("Tooling".to_string()),
            skills: Some(vec![]),
        };
        let rendered = skills(Some(&data));
        assert!(rendered.starts_with("\\begin{cvsection}{Tooling}\n"));
        assert!(rendered.ends_with("\\end{cvsection}"));
    }
}
