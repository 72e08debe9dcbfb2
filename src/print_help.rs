use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " ProfilePro ".yellow());
    println!("Usage:");
    println!("  {} [option] <image_path> [argument]", "profilepro".bold().green());
    println!("\nOptions:");
    println!(
        "  {}   Interactive session on the photo (default).",
        " "
    );
    println!(
        "  {}   Generate the professional headshot and save it.",
        "g".bold().cyan()
    );
    println!(
        "  {}   Apply a custom edit prompt and save the result.",
        "e".bold().magenta()
    );
    println!(
        "  {}     Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nArguments:");
    println!(
        "  {}  A JPG or PNG photo, up to 5MB.",
        "<image_path>".bold().green()
    );
    println!(
        "  {}  Directory for the result (default: current).",
        "g <image_path> [out_dir]".bold().cyan()
    );
    println!(
        "  {}  Free-text edit instructions.",
        "e <image_path> <prompt>".bold().magenta()
    );
    println!("\nEnvironment:");
    println!("  {}  Gemini API key (required).", "GEMINI_API_KEY".bold());
    println!("\nExamples:");
    println!("  {} me.jpg", "profilepro".bold().green());
    println!("  {} me.jpg ./out", "profilepro g".bold().cyan());
    println!(
        "  {} me.jpg Make the background a busy cafe",
        "profilepro e".bold().magenta()
    );
    println!("{:━^60}", "".yellow());
}

pub fn print_repl_help() {
    println!("{}", "Commands:".bold());
    println!("  {}        professional headshot", "generate".cyan());
    println!("  {}   tweak the latest result", "edit <prompt>".magenta());
    println!("  {}   switch to another photo", "upload <path>".green());
    println!("  {}  save linkedin-profile-pro.jpg", "download [dir]".blue());
    println!("  {}  show the session state", "status".normal());
    println!("  {}    leave", "quit".normal());
}
