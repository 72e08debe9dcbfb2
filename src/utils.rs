use crate::config::Config;
use crate::constants::{CMD_EDIT, CMD_GENERATE, SPINNER_MESSAGE};
use crate::image::ImageData;
use crate::repl::run_interactive;
use crate::session::{GenerationStatus, Prompt, Session};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::{
    error::Error,
    path::{Path, PathBuf},
};

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

/// Short form of a data URL for terminal output.
pub fn preview(image: &ImageData) -> String {
    let url = image.url();
    match url.get(..48) {
        Some(head) if url.len() > 48 => format!("{}... ({} chars)", head, url.len()),
        _ => url.to_string(),
    }
}

pub fn print_uploaded(session: &Session) {
    if let Some(image) = session.original() {
        println!("{} {}", "Photo loaded:".bold().green(), preview(image));
    }
}

pub fn print_status(session: &Session) {
    let status = match session.status() {
        GenerationStatus::Idle => "idle".normal(),
        GenerationStatus::Generating => "generating".yellow(),
        GenerationStatus::Succeeded => "succeeded".green(),
        GenerationStatus::Failed => "failed".red(),
    };
    println!("Status: {}", status);
    match session.original() {
        Some(image) => println!("Original: {}", preview(image)),
        None => println!("Original: {}", "none".dimmed()),
    }
    match session.generated() {
        Some(image) => println!("Result: {} (next edits build on it)", preview(image)),
        None => println!("Result: {}", "none yet".dimmed()),
    }
    if let Some(error) = session.error() {
        println!("Last error: {}", error.red());
    }
}

/// Runs a generation behind a spinner and reports the outcome.
pub async fn run_generation(
    session: &mut Session,
    client: &Client,
    config: &Config,
    prompt: &Prompt,
) -> Option<GenerationStatus> {
    if !session.can_generate(prompt) {
        println!(
            "{}",
            "Nothing to do: upload a photo and enter a prompt first.".yellow()
        );
        return None;
    }

    let spinner = create_spinner("blue", SPINNER_MESSAGE.to_string());
    let status = session.generate(client, config, prompt).await;
    spinner.finish_and_clear();

    match status {
        Some(GenerationStatus::Succeeded) => {
            if let Some(image) = session.generated() {
                println!(
                    "{} {} image ready. Use `download` to save it.",
                    "Done:".bold().green(),
                    image.mime_type()
                );
            }
        }
        Some(GenerationStatus::Failed) => {
            eprintln!("{}", session.error().unwrap_or_default().red());
        }
        _ => {}
    }
    status
}

pub async fn run_once(
    client: &Client,
    config: &Config,
    image_path: &Path,
    prompt: Prompt,
    out_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new();
    session.upload_file(image_path).await?;
    print_uploaded(&session);

    match run_generation(&mut session, client, config, &prompt).await {
        Some(GenerationStatus::Succeeded) => {
            let saved = session.download(out_dir).await?;
            println!("Saved to {}", saved.display().to_string().bold());
            Ok(())
        }
        Some(_) => Err(session.error().unwrap_or_default().to_string().into()),
        None => Err("Nothing to generate: the prompt is empty".into()),
    }
}

pub async fn process_command(client: &Client, args: &[String]) -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    match args[1].as_str() {
        CMD_GENERATE => {
            let image_path = args.get(2).ok_or("missing <image_path>")?;
            let out_dir = args
                .get(3)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            run_once(client, &config, Path::new(image_path), Prompt::Headshot, &out_dir).await
        }
        CMD_EDIT => {
            let image_path = args.get(2).ok_or("missing <image_path>")?;
            let prompt = Prompt::Custom(args.get(3..).unwrap_or_default().join(" "));
            run_once(client, &config, Path::new(image_path), prompt, Path::new(".")).await
        }
        image_path => run_interactive(client, &config, Path::new(image_path)).await,
    }
}
