//! Lesson commands: list the catalog, take a quiz

use anyhow::{Result, bail};
use clap::Subcommand;

use gambit::lessons::{LESSONS, Lesson};
use gambit::store::GameStore;

use super::{print_events, read_line};

#[derive(Subcommand)]
pub enum LessonCommand {
    /// List all lessons and your best recorded attempt
    List,
    /// Take a lesson quiz
    Take {
        /// Lesson id from `gambit lesson list`
        id: u32,
    },
}

pub fn lesson_command(store: &mut GameStore, command: LessonCommand) -> Result<()> {
    match command {
        LessonCommand::List => list_lessons(store),
        LessonCommand::Take { id } => take_lesson(store, id),
    }
}

fn list_lessons(store: &GameStore) -> Result<()> {
    println!("Lessons:\n");
    for lesson in LESSONS {
        let attempt = store
            .state()
            .lesson_progress
            .get(&lesson.id)
            .map(|p| format!("last attempt {}/{}", p.score, p.total_questions))
            .unwrap_or_else(|| "not taken".to_string());
        println!(
            "  {}. {} ({} questions) - {}",
            lesson.id,
            lesson.title,
            lesson.questions.len(),
            attempt
        );
    }
    Ok(())
}

fn take_lesson(store: &mut GameStore, id: u32) -> Result<()> {
    let Some(lesson) = Lesson::get(id) else {
        bail!("no lesson with id {id} - see `gambit lesson list`");
    };

    // The quest panel equivalent: make sure today's set exists before
    // progress lands in it
    store.generate_daily_quests();

    println!("=== {} ===\n", lesson.title);

    let mut score = 0u32;
    for (i, question) in lesson.questions.iter().enumerate() {
        println!("{}. {}", i + 1, question.prompt);
        for (j, choice) in question.choices.iter().enumerate() {
            println!("   {}) {}", j + 1, choice);
        }

        let answer = loop {
            let input = read_line("> ")?;
            match input.parse::<usize>() {
                Ok(n) if (1..=question.choices.len()).contains(&n) => break n - 1,
                _ => println!("Enter a number between 1 and {}", question.choices.len()),
            }
        };

        if answer == question.answer {
            println!("Correct!\n");
            score += 1;
        } else {
            println!(
                "Not quite - the answer was: {}\n",
                question.choices[question.answer]
            );
        }
    }

    let total = lesson.questions.len() as u32;
    println!("You scored {score}/{total}.");
    if score == total {
        println!("Perfect score!");
    }

    let events = store.complete_lesson(lesson.id, score, total);
    print_events(&events);
    Ok(())
}
