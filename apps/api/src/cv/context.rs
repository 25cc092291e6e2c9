//! Context builder: flattens structured CV data into the labeled text block
//! the assistant answers from.
//!
//! Sections are always emitted in the same order: Profile, Experience, Projects,
//! Education, Skills. Absent or empty sections are skipped entirely; missing
//! leaves inside a present section still render their label.

use serde_json::Value;

use crate::models::cv::{
    is_truthy, value_to_text, CvData, EducationEntry, ExperienceEntry, Profile, ProjectEntry,
};

const NOTES_KEY: &str = "notes";

/// Builds the CV context text. Returns an empty string when no section is present.
pub fn build_context(data: &CvData) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(profile) = data.profile.as_ref() {
        push_profile(&mut lines, profile);
    }

    if let Some(experience) = data.experience.as_deref().filter(|e| !e.is_empty()) {
        push_experience(&mut lines, experience);
    }

    if let Some(projects) = data.projects.as_deref().filter(|p| !p.is_empty()) {
        push_projects(&mut lines, projects);
    }

    if let Some(education) = data.education.as_deref().filter(|e| !e.is_empty()) {
        push_education(&mut lines, education);
    }

    if let Some(Value::Object(skills)) = data.skills.as_ref().filter(|s| is_truthy(s)) {
        push_skills(&mut lines, skills);
    }

    lines.join("\n").trim().to_string()
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Treats empty strings the same as missing values.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn push_profile(lines: &mut Vec<String>, profile: &Profile) {
    lines.push("## Profile".to_string());
    lines.push(format!("Name: {}", text(&profile.name)));
    lines.push(format!("Job title: {}", text(&profile.job_title)));

    if let Some(contact) = profile.contact.as_ref() {
        lines.push(format!("Email: {}", text(&contact.email)));
        lines.push(format!("Phone: {}", text(&contact.phone)));
    }

    if let Some(links) = profile.links.as_ref() {
        lines.push(format!("GitHub: {}", text(&links.github)));
        lines.push(format!("LinkedIn: {}", text(&links.linkedin)));
    }

    lines.push(String::new());
}

fn push_experience(lines: &mut Vec<String>, experience: &[ExperienceEntry]) {
    lines.push("## Experience".to_string());
    for job in experience {
        lines.push(format!(
            "- {} at {} ({})",
            text(&job.role),
            job.company.as_deref().unwrap_or("N/A"),
            text(&job.dates)
        ));
        lines.push(format!("  {}", text(&job.description)));
    }
    lines.push(String::new());
}

fn push_projects(lines: &mut Vec<String>, projects: &[ProjectEntry]) {
    lines.push("## Projects".to_string());
    for project in projects {
        lines.push(format!("- {} ({})", text(&project.name), text(&project.url)));
        lines.push(format!("  {}", text(&project.description)));
    }
    lines.push(String::new());
}

fn push_education(lines: &mut Vec<String>, education: &[EducationEntry]) {
    lines.push("## Education".to_string());
    for entry in education {
        let mut line = non_empty(&entry.degree)
            .or_else(|| non_empty(&entry.program))
            .unwrap_or("")
            .to_string();

        if let Some(institution) = non_empty(&entry.institution) {
            line.push_str(&format!(" - {institution}"));
        }

        // Graduation year wins over a date range.
        if let Some(when) = non_empty(&entry.graduation_year).or_else(|| non_empty(&entry.dates)) {
            line.push_str(&format!(" ({when})"));
        }

        lines.push(format!("- {line}"));

        if let Some(description) = non_empty(&entry.description) {
            lines.push(format!("  {description}"));
        }
    }
    lines.push(String::new());
}

fn push_skills(lines: &mut Vec<String>, skills: &serde_json::Map<String, Value>) {
    lines.push("## Skills".to_string());

    for (key, value) in skills {
        if key == NOTES_KEY || !is_truthy(value) {
            continue;
        }
        match value {
            Value::Array(items) => {
                let joined = items.iter().map(value_to_text).collect::<Vec<_>>().join(", ");
                lines.push(format!("{key}: {joined}"));
            }
            scalar => lines.push(format!("{key}: {}", value_to_text(scalar))),
        }
    }

    if let Some(notes) = skills.get(NOTES_KEY).filter(|n| is_truthy(n)) {
        lines.push(format!("Notes: {}", value_to_text(notes)));
    }
}
