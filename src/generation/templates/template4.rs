//! Template 4 — `awesome-cv` under xelatex, class file and Source Sans
//! fonts bundled through the `inputs`/`fonts` search paths.

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
        "%!TEX TS-program = xelatex\n\
         \\documentclass[]{{awesome-cv}}\n\
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
        return "\\name{}{}\n\\makecvheader".to_string();
    };

    let (first, rest) = match non_empty(basics.name.as_deref()) {
        Some(name) => split_name(name),
        None => ("", ""),
    };

    let mut out = String::new();
    let _ = writeln!(out, "\\name{{{first}}}{{{rest}}}");
    if let Some(address) = basics
        .location
        .as_ref()
        .and_then(|l| non_empty(l.address.as_deref()))
    {
        let _ = writeln!(out, "\\address{{{address}}}");
    }
    if let Some(phone) = non_empty(basics.phone.as_deref()) {
        let _ = writeln!(out, "\\mobile{{{phone}}}");
    }
    if let Some(email) = non_empty(basics.email.as_deref()) {
        let _ = writeln!(out, "\\email{{{email}}}");
    }
    if let Some(website) = non_empty(basics.website.as_deref()) {
        let _ = writeln!(out, "\\homepage{{{website}}}");
    }
    out.push_str("\\makecvheader");
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
        "\\cvsection{{{}}}",
        heading_or(education.heading.as_deref(), "Education")
    );
    out.push_str("\\begin{cventries}\n");

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
            "\\cventry\n  {{{degree}}}\n  {{{}}}\n  {{{}}}\n  {{{dates}}}\n  {{{gpa}}}",
            non_empty(school.institution.as_deref()).unwrap_or(""),
            non_empty(school.location.as_deref()).unwrap_or(""),
        );
    }

    out.push_str("\\end{cventries}");
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
        "\\cvsection{{{}}}",
        heading_or(work.heading.as_deref(), "Experience")
    );
    out.push_str("\\begin{cventries}\n");

    for job in jobs {
        let dates = date_range(job.start_date.as_deref(), job.end_date.as_deref(), "–");

        let highlights = match job.highlights.as_deref() {
            Some(highlights) => {
                let mut block = String::from("\\begin{cvitems}\n");
                for highlight in highlights {
                    let _ = writeln!(block, "\\item {{{highlight}}}");
                }
                block.push_str("\\end{cvitems}");
                block
            }
            None => String::new(),
        };

        let _ = writeln!(
            out,
            "\\cventry\n  {{{}}}\n  {{{}}}\n  {{{}}}\n  {{{dates}}}\n  {{{highlights}}}",
            non_empty(job.position.as_deref()).unwrap_or(""),
            non_empty(job.company.as_deref()).unwrap_or(""),
            non_empty(job.location.as_deref()).unwrap_or(""),
        );
    }

    out.push_str("\\end{cventries}");
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
        "\\cvsection{{{}}}",
        heading_or(skills.heading.as_deref(), "Skills")
    );
    out.push_str("\\begin{cvskills}\n");

    for skill in entries {
        let keywords = skill.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(
            out,
            "\\cvskill\n  {{{}}}\n  {{{keywords}}}",
            non_empty(skill.name.as_deref()).unwrap_or(""),
        );
    }

    out.push_str("\\end{cvskills}");
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
        "\\cvsection{{{}}}",
        heading_or(projects.heading.as_deref(), "Projects")
    );
    out.push_str("\\begin{cventries}\n");

    for project in entries {
        let keywords = project.keywords.as_deref().unwrap_or(&[]).join(", ");
        let _ = writeln!(
            out,
            "\\cventry\n  {{{keywords}}}\n  {{{}}}\n  {{{}}}\n  {{}}\n  {{{}}}",
            non_empty(project.name.as_deref()).unwrap_or(""),
            non_empty(project.url.as_deref()).unwrap_or(""),
            non_empty(project.description.as_deref()).unwrap_or(""),
        );
    }

    out.push_str("\\end{cventries}");
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
        "\\cvsection{{{}}}",
        heading_or(awards.heading.as_deref(), "Awards")
    );
    out.push_str("\\begin{cvhonors}\n");

    for award in entries {
        let _ = writeln!(
            out,
            "\\cvhonor\n  {{{}}}\n  {{{}}}\n  {{{}}}\n  {{{}}}",
            non_empty(award.title.as_deref()).unwrap_or(""),
            non_empty(award.summary.as_deref()).unwrap_or(""),
            non_empty(award.awarder.as_deref()).unwrap_or(""),
            non_empty(award.date.as_deref()).unwrap_or(""),
        );
    }

    out.push_str("\\end{cvhonors}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::Job;

    #[test]
    fn test_work_cventry_carries_five_slots() {
        let data = Work {
            heading: None,
            jobs: Some(vec![Job {
                company: Some("Acme".to_string()),
                position: Some("Engineer".to_string()),
                start_date: Some("2019".to_string()),
                highlights: Some(vec!["Shipped it".to_string()]),
                ..Job::default()
            }]),
        };
        let rendered = work(Some(&data));
        assert!(rendered.contains("{Engineer}"));
        assert!(rendered.contains("{2019 – Present}"));
        assert!(rendered.contains("\\item {Shipped it}"));
    }

    #[test]
    fn test_honor_fields_are_independent() {
        let data = Awards {
            heading: None,
            awards: Some(vec![crate::models::form::Award {
                title: Some("Pioneer Award".to_string()),
                date: Some("1843".to_string()),
                ..crate::models::form::Award::default()
            }]),
        };
        assert!(awards(Some(&data))
            .contains("\\cvhonor\n  {Pioneer Award}\n  {}\n  {}\n  {1843}"));
    }
}
