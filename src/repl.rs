use crate::config::Config;
use crate::print_help::print_repl_help;
use crate::session::{Prompt, Session};
use crate::utils::{print_status, print_uploaded, run_generation};
use colored::Colorize;
use reqwest::Client;
use std::{
    error::Error,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Generate,
    Edit(String),
    Upload(String),
    Download(Option<String>),
    Status,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            "" => ReplCommand::Empty,
            "generate" | "g" => ReplCommand::Generate,
            "edit" | "e" => ReplCommand::Edit(rest.to_string()),
            "upload" | "u" if !rest.is_empty() => ReplCommand::Upload(rest.to_string()),
            "download" | "d" => {
                ReplCommand::Download(Some(rest.to_string()).filter(|dir| !dir.is_empty()))
            }
            "status" | "s" => ReplCommand::Status,
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "q" | "exit" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

pub async fn run_interactive(
    client: &Client,
    config: &Config,
    image_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new();
    session.upload_file(image_path).await?;
    print_uploaded(&session);
    print_repl_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", "profilepro>".bold().blue());
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match ReplCommand::parse(&line) {
            ReplCommand::Generate => {
                run_generation(&mut session, client, config, &Prompt::Headshot).await;
            }
            ReplCommand::Edit(text) if text.is_empty() => {
                println!(
                    "{}",
                    "Try prompts like: edit Add a retro filter, edit Change shirt to black".yellow()
                );
            }
            ReplCommand::Edit(text) => {
                run_generation(&mut session, client, config, &Prompt::Custom(text)).await;
            }
            ReplCommand::Upload(path) => match session.upload_file(Path::new(&path)).await {
                Ok(()) => print_uploaded(&session),
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
            ReplCommand::Download(dir) => {
                let dir = dir.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
                match session.download(&dir).await {
                    Ok(saved) => println!("Saved to {}", saved.display().to_string().bold()),
                    Err(e) => eprintln!("{}", e.to_string().red()),
                }
            }
            ReplCommand::Status => print_status(&session),
            ReplCommand::Help => print_repl_help(),
            ReplCommand::Quit => break,
            ReplCommand::Empty => {}
            ReplCommand::Unknown(input) => {
                eprintln!("{} {}", "Unknown command:".red(), input);
            }
        }
    }

    Ok(())
}
