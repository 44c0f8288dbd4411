//! Domain entities: diagnosis records, severity levels and answers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Urgency classification of a diagnosis.
///
/// Variants are declared from least to most urgent so the derived ordering
/// yields `Mild < Moderate < Urgent < Emergency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Mild,
    Moderate,
    Urgent,
    Emergency,
}

impl Severity {
    /// All severities, most urgent first.
    pub const ALL: [Severity; 4] = [
        Severity::Emergency,
        Severity::Urgent,
        Severity::Moderate,
        Severity::Mild,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Emergency => "EMERGENCY",
            Severity::Urgent => "URGENT",
            Severity::Moderate => "MODERATE",
            Severity::Mild => "MILD",
        }
    }

    /// Short marker shown next to the severity, e.g. `[!!] URGENT`.
    pub fn badge(&self) -> String {
        let icon = match self {
            Severity::Emergency => "[!!!]",
            Severity::Urgent => "[!!]",
            Severity::Moderate => "[!]",
            Severity::Mild => "[i]",
        };
        format!("{} {}", icon, self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidSeverity(s.to_string()))
    }
}

/// Terminal payload of the decision tree.
///
/// Produced once while the tree is built and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    pub condition: String,
    pub severity: Severity,
    pub description: String,
    pub remedies: String,
    pub medications: String,
    pub when_to_see_doctor: String,
    pub prevention: String,
}

impl DiagnosisRecord {
    pub fn new(
        condition: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
        remedies: impl Into<String>,
        medications: impl Into<String>,
        when_to_see_doctor: impl Into<String>,
        prevention: impl Into<String>,
    ) -> Self {
        Self {
            condition: condition.into(),
            severity,
            description: description.into(),
            remedies: remedies.into(),
            medications: medications.into(),
            when_to_see_doctor: when_to_see_doctor.into(),
            prevention: prevention.into(),
        }
    }
}

impl fmt::Display for DiagnosisRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.condition, self.severity)
    }
}

/// A yes/no reply to a question node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn as_char(&self) -> char {
        match self {
            Answer::Yes => 'y',
            Answer::No => 'n',
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Yes => f.write_str("yes"),
            Answer::No => f.write_str("no"),
        }
    }
}

/// Only the first non-blank character counts: "Yes", "y", "yep" all mean yes.
impl FromStr for Answer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('Y') => Ok(Answer::Yes),
            Some('N') => Ok(Answer::No),
            _ => Err(DomainError::InvalidAnswer(s.to_string())),
        }
    }
}

/// Parse a comma or whitespace separated answer script such as `"n, y, y"`.
pub fn parse_answers(script: &str) -> Result<Vec<Answer>, DomainError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
