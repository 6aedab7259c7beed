//! Line-based terminal input

use anyhow::{Context, Result, bail};
use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin
///
/// # Errors
///
/// Returns an error on I/O failure or when stdin is closed.
pub fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("Input closed");
    }

    Ok(input.trim().to_string())
}

/// Ask a yes/no question until the answer is recognised
///
/// # Errors
///
/// Returns an error on I/O failure or when stdin is closed.
pub fn ask_yes_no(prompt: &str) -> Result<bool> {
    loop {
        match parse_yes_no(&get_user_input(prompt)?) {
            Some(answer) => return Ok(answer),
            None => println!("Sorry, I didn't quite catch that!"),
        }
    }
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
