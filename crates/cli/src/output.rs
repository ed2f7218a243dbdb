//! Terminal rendering for trials, skills and the CareerLens panel.

use colored::{ColoredString, Colorize};

use app::{AppState, LensStatus};
use catalog::{JobTrial, TrialStatus};

pub const NO_TRIALS: &str =
    "No job trials found. Try adjusting your filters to see more opportunities.";

fn status_badge(status: TrialStatus) -> ColoredString {
    match status {
        TrialStatus::Available => status.label().green(),
        TrialStatus::InProgress => status.label().yellow(),
        TrialStatus::Completed => status.label().blue(),
    }
}

/// Print trial cards in listing order
pub fn print_trials(trials: &[&JobTrial]) {
    if trials.is_empty() {
        println!("{}", NO_TRIALS.dimmed());
        return;
    }

    for trial in trials {
        println!("{} [{}]", trial.title.bold(), status_badge(trial.status));
        println!("  {} · {}", trial.company, trial.duration);
        println!("  {}", trial.description);
        println!("  Skills: {}", trial.skills.join(", ").cyan());

        let action = if trial.status.can_start() {
            trial.status.action_label().bold().green()
        } else {
            trial.status.action_label().normal()
        };
        println!("  → {}\n", action);
    }
}

pub fn print_skills(skills: &[&str]) {
    if skills.is_empty() {
        println!("{}", "Every known skill is already selected".dimmed());
        return;
    }
    for skill in skills {
        println!("{}{}", "• ".green(), skill);
    }
}

/// Print the CareerLens panel for `state`
pub fn print_lens(state: &AppState) {
    match state.lens_status() {
        LensStatus::Empty => println!("Upload your resume to get AI-powered suggestions"),
        LensStatus::Processing => println!("Analyzing your resume..."),
        LensStatus::Failed(reason) => println!("{} {}", "✗".red(), reason),
        LensStatus::LooksGreat => {
            println!("{} Your resume looks great!", "✓".green())
        }
        LensStatus::Suggestions(count) => {
            println!("{}", format!("{} suggestions:", count).bold().blue());
            for suggestion in state.suggestions().iter() {
                println!(
                    "{}. [{}] {}",
                    suggestion.id.green(),
                    suggestion.category,
                    suggestion.title.bold()
                );
                println!("   {}", suggestion.description);
                println!("   - {}", suggestion.original.red());
                println!("   + {}", suggestion.improved.green());
            }
        }
    }
}
