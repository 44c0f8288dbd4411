//! Drives a [`Session`] from a terminal or from scripted answers.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::{debug, info, instrument, warn};

use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::{Answer, DiagnosisRecord, Node, Session};

const PROGRESS_WIDTH: usize = 30;

const ANOTHER_PROMPT: &str = "Would you like to check another condition? (Y/N): ";

fn write_err(e: io::Error) -> CliError {
    CliError::io("write prompt", e)
}

/// Read lines until one parses as an [`Answer`]; `None` at end of input.
fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> CliResult<Option<Answer>> {
    loop {
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| CliError::io("read answer", e))?;
        if read == 0 {
            return Ok(None);
        }
        match line.parse::<Answer>() {
            Ok(answer) => return Ok(Some(answer)),
            Err(e) => {
                debug!(error = %e, "rejected input");
                write!(
                    out,
                    "{}",
                    "Invalid input. Please enter (Y)es or (N)o: ".red()
                )
                .map_err(write_err)?;
                out.flush().map_err(write_err)?;
            }
        }
    }
}

/// Prompt for answers on `input` until the session reaches a diagnosis.
///
/// Unrecognized input is rejected and the same question asked again.
/// End of input before a diagnosis is a usage error.
pub fn run_interactive<'t, R, W>(
    session: &mut Session<'t>,
    estimated_total: usize,
    mut input: R,
    out: &mut W,
) -> CliResult<&'t DiagnosisRecord>
where
    R: BufRead,
    W: Write,
{
    loop {
        let question = match session.current_node() {
            Node::Diagnosis(record) => return Ok(record),
            Node::Question { text, .. } => text,
        };

        // the estimate can be lower than the actual path length
        writeln!(
            out,
            "\n{} {}",
            format!(
                "Question {} of ~{}",
                session.step_count(),
                estimated_total
            )
            .bold(),
            output::progress_bar(session.progress_fraction(estimated_total), PROGRESS_WIDTH)
        )
        .map_err(write_err)?;
        writeln!(out, "{}", question).map_err(write_err)?;
        write!(out, "Answer (Y)es or (N)o: ").map_err(write_err)?;
        out.flush().map_err(write_err)?;

        let answer = read_answer(&mut input, out)?.ok_or_else(|| {
            CliError::Usage("input ended before a diagnosis was reached".into())
        })?;
        session.answer(answer);
    }
}

/// Run assessments back to back on one session until the user declines
/// another one or input ends.
///
/// Each diagnosis is printed and handed to `on_diagnosis` before the user
/// is asked whether to continue. Returns the number of completed assessments.
pub fn run_assessments<'t, R, W, F>(
    session: &mut Session<'t>,
    estimated_total: usize,
    mut input: R,
    out: &mut W,
    mut on_diagnosis: F,
) -> CliResult<usize>
where
    R: BufRead,
    W: Write,
    F: FnMut(&'t DiagnosisRecord) -> CliResult<()>,
{
    let mut completed = 0;
    loop {
        let record = run_interactive(session, estimated_total, &mut input, out)?;
        completed += 1;
        info!(condition = %record.condition, completed, "assessment complete");

        writeln!(out, "\n{}", output::render_diagnosis(record)).map_err(write_err)?;
        on_diagnosis(record)?;

        write!(out, "\n{}", ANOTHER_PROMPT.cyan().bold()).map_err(write_err)?;
        out.flush().map_err(write_err)?;
        if read_answer(&mut input, out)? != Some(Answer::Yes) {
            break;
        }

        session.restart();
        writeln!(out, "\n{}", "New assessment".cyan().bold()).map_err(write_err)?;
        session.begin();
    }

    writeln!(
        out,
        "\n{}",
        "Thank you for using the symptom checker. Always consult healthcare professionals for medical advice."
            .green()
    )
    .map_err(write_err)?;
    Ok(completed)
}

/// Apply `answers` in order and return the diagnosis they lead to.
///
/// Answers left over once a diagnosis is reached are ignored.
#[instrument(level = "debug", skip(session))]
pub fn run_scripted<'t>(
    session: &mut Session<'t>,
    answers: &[Answer],
) -> CliResult<&'t DiagnosisRecord> {
    for (i, answer) in answers.iter().enumerate() {
        if session.is_terminal() {
            warn!(unused = answers.len() - i, "extra answers ignored");
            break;
        }
        session.answer(*answer);
    }
    session.current_diagnosis().ok_or_else(|| {
        CliError::Usage(format!(
            "{} answer(s) given, but the assessment needs more (at: {})",
            answers.len(),
            session.current_question().unwrap_or_default()
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::domain::{build_tree, parse_answers, Severity};

    #[test]
    fn given_yes_input_when_interactive_then_emergency() {
        colored::control::set_override(false);
        let tree = build_tree();
        let mut session = Session::start(&tree);
        let mut out = Vec::new();

        let record = run_interactive(&mut session, 6, Cursor::new("y\n"), &mut out).unwrap();

        assert_eq!(record.severity, Severity::Emergency);
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Question 1 of ~6"));
        assert!(shown.contains("Answer (Y)es or (N)o: "));
    }

    #[test]
    fn given_longest_path_when_interactive_then_label_marks_estimate() {
        colored::control::set_override(false);
        let tree = build_tree();
        let mut session = Session::start(&tree);
        let mut out = Vec::new();

        let record = run_interactive(
            &mut session,
            6,
            Cursor::new("n\nn\nn\nn\nn\nn\ny\n"),
            &mut out,
        )
        .unwrap();

        assert_eq!(record.condition, "GENERAL FATIGUE");
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Question 7 of ~6"));
        assert!(shown.contains("100%"));
    }

    #[test]
    fn given_garbage_input_when_interactive_then_reprompts() {
        colored::control::set_override(false);
        let tree = build_tree();
        let mut session = Session::start(&tree);
        let mut out = Vec::new();

        let record = run_interactive(
            &mut session,
            6,
            Cursor::new("maybe\n\nNO\nyes\nYes\n"),
            &mut out,
        )
        .unwrap();

        assert_eq!(record.condition, "POSSIBLE MENINGITIS OR SERIOUS INFECTION");
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Invalid input").count(), 2);
    }

    #[test]
    fn given_eof_when_interactive_then_usage_error() {
        let tree = build_tree();
        let mut session = Session::start(&tree);
        let mut out = Vec::new();

        let result = run_interactive(&mut session, 6, Cursor::new("n\n"), &mut out);

        assert!(matches!(result, Err(CliError::Usage(_))));
    }

    #[test]
    fn given_another_condition_requested_when_running_then_session_restarts() {
        colored::control::set_override(false);
        let tree = build_tree();
        let mut session = Session::start(&tree);
        let mut out = Vec::new();
        let mut seen = Vec::new();

        // emergency, yes to another, meningitis, no to another
        let input = Cursor::new("y\ny\nn\ny\ny\nn\n");
        let completed = run_assessments(&mut session, 6, input, &mut out, |record| {
            seen.push(record.condition.clone());
            Ok(())
        })
        .unwrap();

        assert_eq!(completed, 2);
        assert_eq!(
            seen,
            vec![
                "POTENTIAL MEDICAL EMERGENCY",
                "POSSIBLE MENINGITIS OR SERIOUS INFECTION"
            ]
        );
        assert_eq!(session.step_count(), 4);
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Question 1 of ~6").count(), 2);
        assert_eq!(shown.matches(ANOTHER_PROMPT).count(), 2);
        assert_eq!(shown.matches("DIAGNOSIS: ").count(), 2);
        assert!(shown.contains("Thank you"));
    }

    #[test]
    fn given_eof_at_another_prompt_when_running_then_stops_cleanly() {
        colored::control::set_override(false);
        let tree = build_tree();
        let mut session = Session::start(&tree);
        let mut out = Vec::new();

        let completed =
            run_assessments(&mut session, 6, Cursor::new("y\n"), &mut out, |_| Ok(())).unwrap();

        assert_eq!(completed, 1);
        assert!(session.is_terminal());
    }

    #[test]
    fn given_failing_callback_when_running_then_error_propagates() {
        let tree = build_tree();
        let mut session = Session::start(&tree);
        let mut out = Vec::new();

        let result = run_assessments(&mut session, 6, Cursor::new("y\ny\n"), &mut out, |_| {
            Err(CliError::Usage("disk full".into()))
        });

        assert!(matches!(result, Err(CliError::Usage(m)) if m == "disk full"));
    }

    #[test]
    fn given_too_few_answers_when_scripted_then_usage_error() {
        let tree = build_tree();
        let mut session = Session::start(&tree);

        let result = run_scripted(&mut session, &parse_answers("n,n").unwrap());

        assert!(matches!(result, Err(CliError::Usage(_))));
    }

    #[test]
    fn given_extra_answers_when_scripted_then_ignored() {
        let tree = build_tree();
        let mut session = Session::start(&tree);

        let record = run_scripted(&mut session, &parse_answers("y y y y").unwrap()).unwrap();

        assert_eq!(record.condition, "POTENTIAL MEDICAL EMERGENCY");
        assert_eq!(session.step_count(), 2);
    }
}
