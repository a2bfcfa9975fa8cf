//! Plain-text prompts for the interactive binary.
//!
//! These read stdin synchronously and must all run before
//! [`AnswerCapture::stdin`](crate::AnswerCapture::stdin) takes over the
//! input stream.

use std::io::{self, Write};

use crate::models::{Difficulty, MAX_QUESTIONS};
use crate::provider::Category;

fn ask(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Prompt until a non-empty username is entered.
pub fn prompt_username() -> io::Result<String> {
    loop {
        let name = ask("Enter your username: ")?;
        if !name.is_empty() {
            return Ok(name);
        }
        println!("Username cannot be empty.");
    }
}

/// Prompt for a question count in 1..=[`MAX_QUESTIONS`]; empty input takes
/// the default.
pub fn prompt_question_count(default: u8) -> io::Result<u8> {
    loop {
        let input = ask(&format!(
            "How many questions? (1-{}) [{}]: ",
            MAX_QUESTIONS, default
        ))?;
        if input.is_empty() {
            return Ok(default);
        }
        match parse_question_count(&input) {
            Some(count) => return Ok(count),
            None => println!("Enter a number between 1 and {}.", MAX_QUESTIONS),
        }
    }
}

/// Prompt for a difficulty tier; the default comes from the profile's
/// current classification.
pub fn prompt_difficulty(default: Difficulty) -> io::Result<Difficulty> {
    loop {
        let input = ask(&format!("Choose difficulty (easy/medium/hard) [{}]: ", default))?;
        if input.is_empty() {
            return Ok(default);
        }
        match input.parse() {
            Ok(difficulty) => return Ok(difficulty),
            Err(_) => println!("Please answer easy, medium or hard."),
        }
    }
}

/// Prompt for the per-question time limit in whole seconds.
pub fn prompt_time_limit(default: u64) -> io::Result<u64> {
    loop {
        let input = ask(&format!("Time limit per question (seconds) [{}]: ", default))?;
        if input.is_empty() {
            return Ok(default);
        }
        match input.parse::<u64>() {
            Ok(seconds) if seconds > 0 => return Ok(seconds),
            _ => println!("Enter a positive number of seconds."),
        }
    }
}

/// Show the category menu and prompt for an id. An empty answer, or an
/// empty menu (category service down), means any category.
pub fn prompt_category(categories: &[Category]) -> io::Result<Option<u32>> {
    if categories.is_empty() {
        println!("Categories are unavailable right now; using any category.");
        return Ok(None);
    }

    println!("\nChoose a category:");
    for category in categories {
        println!("{}: {}", category.id, category.name);
    }

    loop {
        let input = ask("Enter category ID (empty for any): ")?;
        if input.is_empty() {
            return Ok(None);
        }
        match input.parse::<u32>() {
            Ok(id) if categories.iter().any(|c| c.id == id) => return Ok(Some(id)),
            _ => println!("Pick an ID from the list, or leave empty."),
        }
    }
}

fn parse_question_count(input: &str) -> Option<u8> {
    let count: u8 = input.trim().parse().ok()?;
    if (1..=MAX_QUESTIONS).contains(&count) {
        Some(count)
    } else {
        None
    }
}
