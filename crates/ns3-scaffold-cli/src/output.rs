//! Terminal output formatting for the create-ns3-project CLI.
//!
//! Progress and results go to stdout, errors to stderr. A typical run reads:
//!
//! ```text
//! create-ns3-project: my-proj
//! ===========================
//! [1/2] Checking project settings
//!   location: /home/user/projects/my-proj
//!   ns-3 version: 3.45
//! [2/2] Creating 13 directories and 19 files
//! [OK] Project 'my-proj' created
//! ```
//!
//! Styling comes from [`console`], which drops colors when the stream is not a terminal.

use console::style;

/// Print the run banner, underlined to its width in characters.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.chars().count())).dim());
}

/// `[OK] Project 'my-proj' created`
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// `[WARN] Dry run: nothing was created`
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

/// `[ERROR] project directory already exists: /tmp/work/my-proj`, on stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {}", style("[ERROR]").for_stderr().red().bold(), text);
}

/// `[1/2] Checking project settings`
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

/// An indented `key: value` detail line under the current step.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Indent a multi-line block, such as the planned tree of a dry run.
pub fn print_block(text: &str) {
    for line in text.lines() {
        println!("    {line}");
    }
}
