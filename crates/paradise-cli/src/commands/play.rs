use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use paradise_flow::{Choice, FlowConfig, FlowError, GameFlow, Phase, Presenter};

/// Prints narrative and cosmetic cues straight to stdout.
struct TermPresenter;

impl Presenter for TermPresenter {
    fn narrative(&mut self, text: &str) {
        println!("{text}\n");
    }

    fn set_backdrop(&mut self, color: &str) {
        println!("{}", format!("[the sky turns {color}]").dimmed());
    }

    fn apply_mood_effect(&mut self, mood: &str) {
        println!("{}", format!("[{mood} settles over the world]").dimmed());
    }

    fn apply_life_effect(&mut self, theme: &str) {
        println!("{}\n", format!("[{theme} bring the world to life]").dimmed());
    }
}

/// Run an interactive session on stdin/stdout until the game ends or EOF.
pub fn run(seed: u64, data: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;
    let config = FlowConfig::default().with_seed(seed);

    let mut flow = GameFlow::new(catalog, config, TermPresenter)
        .map_err(|e| format!("failed to start game: {e}"))?;

    println!("  {} Paradise | Seed: {seed}", "Starting".bold());
    println!("  Pick options by number. Ctrl-D quits.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !flow.is_over() {
        for (i, choice) in flow.choices().iter().enumerate() {
            println!("  {}. {}", i + 1, choice.label);
        }
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Ok(()), // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let Some(token) = parse_selection(input, flow.choices()).map(String::from) else {
            println!("{}\n", "Pick one of the numbers above.".yellow());
            continue;
        };

        match flow.choose(&token) {
            Ok(()) => {}
            Err(e @ FlowError::InvalidChoice(_)) => {
                println!("{}\n", e.to_string().yellow());
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    if let Phase::Ended { victory } = flow.phase() {
        let closing = if *victory {
            "The world is at peace.".green()
        } else {
            "The world falls dark.".red()
        };
        println!("{closing}");
    }

    Ok(())
}

/// Map a 1-based menu number, or an exact label, to the offered token.
fn parse_selection<'a>(input: &str, choices: &'a [Choice]) -> Option<&'a str> {
    if let Ok(n) = input.parse::<usize>()
        && n >= 1
        && let Some(choice) = choices.get(n - 1)
    {
        return Some(&choice.token);
    }
    choices
        .iter()
        .find(|c| c.label.eq_ignore_ascii_case(input))
        .map(|c| c.token.as_str())
}
