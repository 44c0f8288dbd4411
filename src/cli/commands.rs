//! Command dispatch: one function per subcommand.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, info, instrument};

use crate::application::{daily_tip, AssessmentRecord, HistoryStore, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands, HistoryCommands};
use crate::cli::assessment::{run_assessments, run_scripted};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{build_tree, parse_answers, DiagnosisRecord, Session, Severity, TreeView};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Check { answers, no_save }) => _check(answers.as_deref(), *no_save),
        Some(Commands::Tree) => _tree(),
        Some(Commands::Conditions) => _conditions(),
        Some(Commands::Path { condition }) => _path(condition),
        Some(Commands::History { command }) => match command {
            HistoryCommands::List { verbose } => _history_list(*verbose),
            HistoryCommands::Clear => _history_clear(),
        },
        Some(Commands::Tip) => _tip(),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init { force } => _config_init(*force),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => _check(None, false),
    }
}

#[instrument]
fn _check(answers: Option<&str>, no_save: bool) -> CliResult<()> {
    let settings = Settings::load()?;
    let store = (!no_save && settings.save_history)
        .then(|| HistoryStore::new(&settings.history_file));
    let save = |record: &DiagnosisRecord| -> CliResult<()> {
        match &store {
            Some(store) => {
                store.append(AssessmentRecord::now(record.clone()), settings.history_limit)?;
                info!(path = %store.path().display(), "assessment saved");
            }
            None => debug!("history disabled"),
        }
        Ok(())
    };

    let tree = build_tree();
    let mut session = Session::start(&tree);

    match answers {
        Some(script) => {
            let record = run_scripted(&mut session, &parse_answers(script)?)?;
            debug!(condition = %record.condition, steps = session.step_count(), "assessment complete");
            output::info(&output::render_diagnosis(record));
            save(record)
        }
        None => {
            output::header("Symptom Checker");
            output::info("Answer each question with (Y)es or (N)o.");
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let completed = run_assessments(
                &mut session,
                settings.estimated_total,
                stdin.lock(),
                &mut stdout,
                save,
            )?;
            debug!(completed, "check finished");
            Ok(())
        }
    }
}

#[instrument]
fn _tree() -> CliResult<()> {
    let tree = build_tree();
    output::info(&tree.to_tree_string());
    output::detail(&format!(
        "{} questions, {} diagnoses, longest path {} questions",
        tree.question_count(),
        tree.diagnosis_count(),
        tree.depth()
    ));
    Ok(())
}

#[instrument]
fn _conditions() -> CliResult<()> {
    let tree = build_tree();
    let records = tree.diagnoses();

    for severity in Severity::ALL {
        let group: Vec<_> = records.iter().filter(|r| r.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        output::info(&output::severity_colored(severity, &severity.badge()));
        for record in group {
            output::detail(&record.condition);
        }
    }
    Ok(())
}

#[instrument]
fn _path(condition: &str) -> CliResult<()> {
    let tree = build_tree();
    let path = tree
        .path_to(condition)
        .ok_or_else(|| CliError::InvalidArgs(format!("unknown condition: {condition}")))?;

    let mut session = Session::start(&tree);
    for answer in &path {
        if let Some(question) = session.current_question() {
            output::info(&format!("{:>3}  {}", answer.to_string(), question));
        }
        session.answer(*answer);
    }
    if let Some(record) = session.current_diagnosis() {
        output::success(&format!("{} ({})", record.condition, record.severity.badge()));
    }
    output::detail(&format!(
        "--answers {}",
        path.iter().map(|a| a.as_char()).map(String::from).collect::<Vec<_>>().join(",")
    ));
    Ok(())
}

#[instrument]
fn _history_list(verbose: bool) -> CliResult<()> {
    let settings = Settings::load()?;
    let history = HistoryStore::new(&settings.history_file).load(settings.history_limit)?;

    if history.is_empty() {
        output::info("No saved assessments.");
        return Ok(());
    }
    output::header(&format!("Last {} assessment(s):", history.len()));
    for record in history.iter_recent() {
        output::info(&output::render_history_entry(record));
        if verbose {
            output::info(&output::render_diagnosis(&record.diagnosis));
        }
    }
    Ok(())
}

#[instrument]
fn _history_clear() -> CliResult<()> {
    let settings = Settings::load()?;
    let store = HistoryStore::new(&settings.history_file);
    store.clear()?;
    output::success(&format!("History cleared: {}", store.path().display()));
    Ok(())
}

#[instrument]
fn _tip() -> CliResult<()> {
    output::header("Health tip of the day");
    output::detail(daily_tip());
    Ok(())
}

#[instrument]
fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn _config_init(force: bool) -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
    if path.exists() && !force {
        output::warning(&format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_path_context("create config dir", parent)?;
    }
    std::fs::write(&path, Settings::template()).with_path_context("write config", &path)?;
    output::success(&format!("Created {}", path.display()));
    Ok(())
}

#[instrument]
fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => {
            let marker = if path.exists() { "" } else { " (not found)" };
            output::info(&format!("Global config: {}{}", path.display(), marker));
        }
        None => output::info("Global config: <unavailable>"),
    }
    let settings = Settings::load()?;
    output::info(&format!("History file:  {}", settings.history_file.display()));
    Ok(())
}

#[instrument]
fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut stdout = io::stdout();
    generate(shell, &mut cmd, name, &mut stdout);
    stdout
        .flush()
        .map_err(|e| CliError::io("write completions", e))
}
