//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::{ColoredString, Colorize};

use crate::application::AssessmentRecord;
use crate::domain::{DiagnosisRecord, Severity};

const RULE_WIDTH: usize = 70;

const DISCLAIMER: &str = "This is for informational purposes only and not a substitute \
for professional medical advice. Always consult a healthcare provider for proper \
diagnosis and treatment.";

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

pub fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

pub fn severity_colored(severity: Severity, text: &str) -> ColoredString {
    match severity {
        Severity::Emergency => text.red(),
        Severity::Urgent => text.yellow(),
        Severity::Moderate => text.cyan(),
        Severity::Mild => text.green(),
    }
}

/// `[#########...........]  45%`
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(width - filled),
        (fraction * 100.0).round() as u32
    )
}

/// Full diagnosis report.
pub fn render_diagnosis(record: &DiagnosisRecord) -> String {
    let sev = record.severity;
    let sections = [
        ("WHAT IS THIS?".blue().bold(), &record.description),
        ("HOME REMEDIES & SELF-CARE:".green().bold(), &record.remedies),
        ("RECOMMENDED MEDICATIONS:".magenta().bold(), &record.medications),
        ("WHEN TO SEE A DOCTOR:".yellow().bold(), &record.when_to_see_doctor),
        ("PREVENTION TIPS:".cyan().bold(), &record.prevention),
    ];

    let mut out = String::new();
    out.push_str(&format!("{}\n", severity_colored(sev, &rule('=')).bold()));
    out.push_str(&format!(
        "  {}\n",
        severity_colored(sev, &format!("DIAGNOSIS: {}", record.condition)).bold()
    ));
    out.push_str(&format!("{}\n\n", severity_colored(sev, &rule('=')).bold()));
    out.push_str(&format!(
        "  {}\n",
        severity_colored(sev, &format!("SEVERITY LEVEL: {}", sev.badge())).bold()
    ));
    for (title, body) in sections {
        out.push_str(&format!("\n  {}\n  {}\n", title, body));
    }
    out.push_str(&format!("\n{}\n", rule('=')));
    out.push_str(&format!(
        "  {}\n  {}\n",
        "IMPORTANT DISCLAIMER:".red().bold(),
        DISCLAIMER
    ));
    out.push_str(&rule('='));
    out
}

/// One history line: date, badge, condition.
pub fn render_history_entry(record: &AssessmentRecord) -> String {
    let sev = record.diagnosis.severity;
    format!(
        "{}  {:<15} {}",
        record.date.format("%Y-%m-%d %H:%M"),
        severity_colored(sev, &sev.badge()),
        record.diagnosis.condition
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fractions_when_rendering_progress_then_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4), "[....]   0%");
        assert_eq!(progress_bar(0.5, 4), "[##..]  50%");
        assert_eq!(progress_bar(1.0, 4), "[####] 100%");
        assert_eq!(progress_bar(2.0, 4), "[####] 100%");
    }

    #[test]
    fn given_record_when_rendering_then_contains_every_section() {
        colored::control::set_override(false);
        let record = DiagnosisRecord::new(
            "COMMON COLD",
            Severity::Mild,
            "desc",
            "rest",
            "meds",
            "doctor",
            "wash hands",
        );
        let report = render_diagnosis(&record);
        assert!(report.contains("DIAGNOSIS: COMMON COLD"));
        assert!(report.contains("SEVERITY LEVEL: [i] MILD"));
        for body in ["desc", "rest", "meds", "doctor", "wash hands"] {
            assert!(report.contains(body), "missing {body}");
        }
        assert!(report.contains("IMPORTANT DISCLAIMER"));
    }
}
