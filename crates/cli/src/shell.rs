//! Line-oriented interactive session.
//!
//! Each line is one user event (a click or a keystroke in a graphical
//! front end), turned into a controller request.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use app::{Action, AppState, ControllerHandle, LensStatus, Tab};

use crate::output;

pub const HELP: &str = "\
Commands:
  tab lens|path        switch between CareerLens and TryPath
  add <skill>          select a skill
  remove <skill>       deselect a skill
  clear-skills         deselect every skill
  search [term]        set the search term (no term clears it)
  trials               list visible trials
  skills               list skills that can still be added
  upload [file]        process a resume (no file does nothing)
  cancel               stop the upload in progress
  edit <text>          replace the resume text
  apply <id>           apply one suggestion
  apply-all            apply every suggestion
  clear                remove the resume and its suggestions
  download             download the improved resume
  status               show the CareerLens panel
  help                 show this help
  quit                 leave the session";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Tab(Tab),
    Add(String),
    Remove(String),
    ClearSkills,
    Search(String),
    Trials,
    Skills,
    Upload(Option<PathBuf>),
    Cancel,
    Edit(String),
    Apply(String),
    ApplyAll,
    Clear,
    Download,
    Status,
    Help,
    Quit,
}

/// Parse one input line.
///
/// The argument is everything after the first space, so skills like
/// "Data Analysis" survive. Search terms keep their spaces.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let trimmed = line.trim_start();
    let (word, arg) = match trimmed.split_once(' ') {
        Some((word, arg)) => (word, arg),
        None => (trimmed, ""),
    };

    // Skills and ids are trimmed; only the search term is kept verbatim
    let required = |name: &str| -> Result<String> {
        match arg.trim() {
            "" => Err(anyhow!("'{}' needs an argument", name)),
            value => Ok(value.to_string()),
        }
    };

    let command = match word {
        "tab" => match arg.trim() {
            "lens" | "career-lens" => ShellCommand::Tab(Tab::CareerLens),
            "path" | "try-path" => ShellCommand::Tab(Tab::TryPath),
            other => bail!("Unknown tab '{}'; use 'lens' or 'path'", other),
        },
        "add" => ShellCommand::Add(required("add")?),
        "remove" => ShellCommand::Remove(required("remove")?),
        "clear-skills" => ShellCommand::ClearSkills,
        "search" => ShellCommand::Search(arg.to_string()),
        "trials" => ShellCommand::Trials,
        "skills" => ShellCommand::Skills,
        "upload" => {
            let path = arg.trim();
            ShellCommand::Upload((!path.is_empty()).then(|| PathBuf::from(path)))
        }
        "cancel" => ShellCommand::Cancel,
        "edit" => ShellCommand::Edit(arg.to_string()),
        "apply" => ShellCommand::Apply(required("apply")?),
        "apply-all" => ShellCommand::ApplyAll,
        "clear" => ShellCommand::Clear,
        "download" => ShellCommand::Download,
        "status" => ShellCommand::Status,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => bail!("Unknown command '{}'; type 'help'", other),
    };
    Ok(Some(command))
}

/// Run the interactive loop until `quit` or end of input
pub async fn run(session: &ControllerHandle) -> Result<()> {
    println!("{}", "CareerForge interactive session".bold().blue());
    println!("Type 'help' for commands.\n");

    let _printer = AbortOnDrop(tokio::spawn(report_processing(session.subscribe())));
    read_commands(session, BufReader::new(tokio::io::stdin())).await
}

/// Aborts the wrapped task when dropped, whichever way the session ends
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

async fn read_commands<R>(session: &ControllerHandle, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        print!("{} ", "careerforge>".green());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{} {}", "✗".red(), e);
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }
        execute(session, command).await?;
    }

    Ok(())
}

async fn execute(session: &ControllerHandle, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::Tab(tab) => {
            session.dispatch(Action::SelectTab(tab)).await?;
            println!("Switched to {}", tab.to_string().bold());
        }
        ShellCommand::Add(skill) => {
            let state = session.dispatch(Action::AddSkill(skill)).await?;
            print_selection(&state)?;
        }
        ShellCommand::Remove(skill) => {
            let state = session.dispatch(Action::RemoveSkill(skill)).await?;
            print_selection(&state)?;
        }
        ShellCommand::ClearSkills => {
            let state = session.dispatch(Action::ClearSkills).await?;
            print_selection(&state)?;
        }
        ShellCommand::Search(term) => {
            let state = session.dispatch(Action::SetSearchTerm(term)).await?;
            println!("{} trials match", state.visible_trials()?.len());
        }
        ShellCommand::Trials => {
            let state = session.state();
            output::print_trials(&state.visible_trials()?);
        }
        ShellCommand::Skills => output::print_skills(&session.state().available_skills()),
        ShellCommand::Upload(path) => {
            let state = session.upload(path).await?;
            if state.is_processing() {
                println!("Analyzing your resume...");
            }
        }
        ShellCommand::Cancel => {
            session.cancel_upload().await?;
        }
        ShellCommand::Edit(text) => {
            let state = session.dispatch(Action::EditResume(text)).await?;
            output::print_lens(&state);
        }
        ShellCommand::Apply(id) => {
            if session.state().suggestions().get(&id).is_none() {
                println!("{} No suggestion with id {}", "✗".red(), id);
                return Ok(());
            }
            let state = session.dispatch(Action::ApplySuggestion(id)).await?;
            output::print_lens(&state);
        }
        ShellCommand::ApplyAll => {
            let state = session.dispatch(Action::ApplyAllSuggestions).await?;
            output::print_lens(&state);
        }
        ShellCommand::Clear => {
            let state = session.dispatch(Action::ClearResume).await?;
            output::print_lens(&state);
        }
        ShellCommand::Download => println!("{} {}", "✓".green(), session.download()),
        ShellCommand::Status => output::print_lens(&session.state()),
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => {}
    }
    Ok(())
}

fn print_selection(state: &AppState) -> Result<()> {
    let selected: Vec<_> = state.filter().selected_skills.iter().collect();
    if selected.is_empty() {
        println!("No skills selected");
    } else {
        println!("Selected: {}", selected.join(", ").cyan());
    }
    println!("{} trials match", state.visible_trials()?.len());
    Ok(())
}

/// Announce when a background upload settles
async fn report_processing(mut states: watch::Receiver<AppState>) {
    let mut was_processing = states.borrow_and_update().is_processing();

    while states.changed().await.is_ok() {
        let state = states.borrow_and_update().clone();
        if was_processing && !state.is_processing() {
            match state.lens_status() {
                LensStatus::Suggestions(n) => {
                    println!("\n{} Resume processed: {} suggestions", "✓".green(), n)
                }
                LensStatus::Failed(reason) => println!("\n{} {}", "✗".red(), reason),
                _ => println!("\nUpload stopped"),
            }
        }
        was_processing = state.is_processing();
    }
}
