//! Template 8 — `limecv` under lualatex, class file shipped through the
//! `inputs` search path.

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
        "%!TEX TS-program = lualatex\n\
         \\documentclass[]{{limecv}}\n\
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
        return "\\cvName{}{}\n\\cvContact{}".to_string();
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

    format!("\\cvName{{{first}}}{{{rest}}}\n\\cvContact{{{info}}}")
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
        "\\cvSection{{{}}}",
        heading_or(education.heading.as_deref(), "Education")
    );

    for school in schools {
        let mut headline = String::new();
        if let Some(institution) = non_empty(school.institution.as_deref()) {
            headline.push_str(institution);
        }
        match (
            non_empty(school.study_type.as_deref()),
            non_empty(school.area.as_deref()),
        ) {
            (Some(study_type), Some(area)) => {
                let _ = write!(headline, ", {study_type} in {area}");
            }
            (Some(only), None) | (None, Some(only)) => {
                let _ = write!(headline, ", {only}");
            }
            (None, None) => {}
        }
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
            "\\cvEntry{{{dates}}}{{{headline}}}{{{}}}{{{gpa}}}",
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
        "\\cvSection{{{}}}",
        heading_or(work.heading.as_deref(), "Experience")
    );

    for job in jobs {
        let mut headline = String::new();
        if let Some(company) = non_empty(job.company.as_deref()) {
            headline.push_str(company);
        }
        if let Some(position) = non_empty(job.position.as_deref()) {
            let _ = write!(headline, ", {position}");
        }
        let dates = date_range(job.start_date.as_deref(), job.end_date.as_deref(), "–");

        let highlights = match job.highlights.as_deref() {
            Some(highlights) => {
                let mut block = String::from("\\begin{cvItems}\n");
                for highlight in highlights {
                    let _ = writeln!(block, "\\item {highlight}");
                }
                block.push_str("\\end{cvItems}");
                block
            }
            None => String::new(),
        };

        let _ = writeln!(
            out,
            "\\cvEntry{{{dates}}}{{{headline}}}{{{}}}{{{highlights}}}",
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
        "\\cvSection{{{}}}",
        heading_or(skills.heading.as_deref(), "Skills")
    );

    for skill in entries {
        let keywords = skill.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(
            out,
            "\\cvSkill{{{}}}{{{keywords}}}",
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
        "\\cvSection{{{}}}",
        heading_or(projects.heading.as_deref(), "Projects")
    );

    for project in entries {
        let keywords = project.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(
            out,
            "\\cvEntry{{}}{{{} [{keywords}]}}{{{}}}{{{}}}",
            non_empty(project.name.as_deref()).unwrap_or(""),
            non_empty(project.url.as_deref()).unwrap_or(""),
            non_empty(project.description.as_deref()).unwrap_or(""),
        );
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
        "\\cvSection{{{}}}",
        heading_or(awards.heading.as_deref(), "Awards")
    );

    for award in entries {
        let _ = writeln!(
            out,
            "\\cvEntry{{{}}}{{{}}}{{{}}}{{{}}}",
            non_empty(award.date.as_deref()).unwrap_or(""),
            non_empty(award.title.as_deref()).unwrap_or(""),
            non_empty(award.awarder.as_deref()).unwrap_or(""),
            non_empty(award.summary.as_deref()).unwrap_or(""),
        );
    }

    out.pop();
    out
}
