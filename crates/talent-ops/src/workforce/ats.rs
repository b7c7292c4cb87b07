//! Demo resume-text parsing.
//!
//! A fixed heuristic over trimmed lines: first line as the name, first
//! address-looking line as the email, a closed keyword vocabulary for skills,
//! and a digit scan around the word "years" for experience. No accuracy
//! guarantee and nothing configurable.

use serde::Serialize;

/// Skill vocabulary matched case-insensitively anywhere in the text.
const SKILL_KEYWORDS: [&str; 16] = [
    "python",
    "javascript",
    "react",
    "node",
    "aws",
    "docker",
    "kubernetes",
    "sql",
    "fastapi",
    "django",
    "java",
    "c++",
    "ml",
    "nlp",
    "git",
    "linux",
];

const SUMMARY_LINES: usize = 10;

/// Fields extracted from raw resume text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeInsights {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Vec<String>,
    pub years_experience: Option<f64>,
    pub raw_summary: Vec<String>,
}

pub fn parse_resume_text(text: &str) -> ResumeInsights {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let name = lines.first().map(|line| line.to_string());
    let email = lines
        .iter()
        .find(|line| line.contains('@') && line.contains('.'))
        .map(|line| line.to_string());

    let lowered = text.to_lowercase();
    let mut skills: Vec<String> = SKILL_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(**keyword))
        .map(|keyword| keyword.to_string())
        .collect();
    skills.sort();
    skills.dedup();

    let years_experience = extract_years(&lines);
    let raw_summary = lines
        .iter()
        .take(SUMMARY_LINES)
        .map(|line| line.to_string())
        .collect();

    ResumeInsights {
        name,
        email,
        skills,
        years_experience,
        raw_summary,
    }
}

/// Scan lines mentioning "years" for the first token that is all digits once
/// `+` and `.` are stripped; parse with `+` removed. Stops at the first value
/// that parses.
fn extract_years(lines: &[&str]) -> Option<f64> {
    for line in lines {
        if !line.to_lowercase().contains("years") {
            continue;
        }
        let parsed = line.split_whitespace().find_map(|token| {
            let stripped: String = token
                .chars()
                .filter(|ch| !matches!(ch, '+' | '.'))
                .collect();
            if stripped.is_empty() || !stripped.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            token.replace('+', "").parse::<f64>().ok()
        });
        if parsed.is_some() {
            return parsed;
        }
    }
    None
}
