// UI layer: provides a simple interactive menu using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.
// All expected failures (bad names, bad grades, missing students) are
// handled inside the individual flows; anything unexpected bubbles up to
// the menu loop, where it is printed as a warning and the loop continues.

use crate::store::{GradeError, GradeStore, NameError, TopPerformerError};
use anyhow::Result;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::thread;
use std::time::Duration;

const NAME_RULES: &str = "Please check your input: the name must not be empty, \
and must be no less than 2 and no more than 50 characters long.\n\
The only permitted special characters are spaces, \"-\" or \"'\".";

/// Main interactive menu. Receives the grade store and runs a simple
/// select loop until the user chooses "Exit".
///
/// Note: `Select::interact()` is keyboard-driven: you can use arrow keys
/// and Enter to choose an option.
pub fn main_menu(mut store: GradeStore) -> Result<()> {
    loop {
        println!("--- Student Grade Analyser ---");
        let items = vec![
            "Add a new student",
            "Add grades for a student",
            "Show report (all students)",
            "Find top performer",
            "Exit",
        ];
        // `Select` shows a keyboard-navigable list in the terminal.
        let selection = Select::new().items(&items).default(0).interact()?;
        debug!("menu selection: {}", items[selection]);

        let outcome = match selection {
            0 => handle_add_student(&mut store),
            1 => handle_add_grades(&mut store),
            2 => handle_report(&store),
            3 => handle_top_performer(&store),
            4 => {
                println!("Good bye!");
                break;
            }
            _ => Ok(()),
        };
        // Unexpected failures (terminal I/O and the like) must never
        // kill the session; report them and return to the menu.
        if let Err(err) = outcome {
            println!("Warning: {}", err);
        }
    }
    Ok(())
}

/// Prompt for a name and try to add the student. Duplicate and invalid
/// names are reported with a hint; the store does the trimming.
fn handle_add_student(store: &mut GradeStore) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Enter student name")
        .interact_text()?;
    match store.add_student(&name) {
        Ok(()) => println!("Student added."),
        Err(NameError::Duplicate(name)) => {
            println!("Student {} already exists! Please, check your input.", name);
        }
        Err(NameError::Invalid(name)) => {
            println!("Student {} was not added.\n{}", name, NAME_RULES);
        }
    }
    Ok(())
}

/// Prompt for a student, then run the grade-entry sub-loop until the
/// user types the "done" sentinel (case-insensitive).
fn handle_add_grades(store: &mut GradeStore) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Enter a student name to add grades")
        .interact_text()?;
    if store.is_empty() || !store.contains(&name) {
        println!("No student found. You can add a student by selecting menu item 1.");
        return Ok(());
    }

    loop {
        let raw: String = Input::new()
            .with_prompt("Enter a grade (or 'done' to finish)")
            .interact_text()?;
        let raw = raw.trim().to_lowercase();
        // The sentinel ends the sub-loop; it is never treated as a grade.
        if raw == "done" {
            break;
        }
        match store.add_grade(&name, &raw) {
            Ok(()) => {}
            Err(GradeError::NotANumber) => {
                println!("Invalid input. Please enter a number.");
            }
            Err(GradeError::OutOfRange) => {
                println!("Invalid input. Please enter a number between 0 and 100.");
            }
            Err(GradeError::StudentNotFound) => {
                println!("No student found. You can add a student by selecting menu item 1.");
                break;
            }
        }
    }
    Ok(())
}

/// Print the per-student averages followed by the aggregate block, or
/// the no-data hint when nobody has a grade yet.
fn handle_report(store: &GradeStore) -> Result<()> {
    // indicatif's spinner gives some feedback while the report is
    // assembled; a small delay keeps it visible.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Generating report...");
    thread::sleep(Duration::from_millis(300));
    let report = store.generate_report();
    spinner.finish_and_clear();

    println!("--- Student Report ---");
    for row in &report.rows {
        match row.average {
            Some(avg) => println!("{}'s average grade is {:.1}.", row.name, avg),
            None => println!("{}'s average grade is N/A.", row.name),
        }
    }
    match report.summary {
        Some(summary) => {
            println!("{}", "-".repeat(26));
            println!("Max Average: {:.1}", summary.max_average);
            println!("Min Average: {:.1}", summary.min_average);
            println!("Overall Average: {:.1}", summary.overall_average);
        }
        None => println!(
            "No student grades were found. You can add a student by selecting \
             menu item 1 and their grades by selecting menu item 2."
        ),
    }
    Ok(())
}

/// Show the student with the highest average, or explain why there is
/// no answer (empty store, or the leader has no grades yet).
fn handle_top_performer(store: &GradeStore) -> Result<()> {
    match store.find_top_performer() {
        Ok(top) => println!(
            "The student with the highest average is {} with a grade of {:.1}.",
            top.name, top.average
        ),
        Err(TopPerformerError::Undetermined) => println!(
            "The best student is not determined, not enough grades. \
             You can add grades to a student by selecting menu item 2."
        ),
        Err(TopPerformerError::Empty) => {
            println!("No student found. You can add a student by selecting menu item 1.");
        }
    }
    Ok(())
}
