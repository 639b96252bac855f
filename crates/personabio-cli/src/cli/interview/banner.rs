//! Welcome banner printed when an interview starts.

use console::style;

pub fn print_welcome_banner(question_count: usize, data_dir: &str) {
    println!();
    println!("  {} {}", style("*").cyan(), style("PersonaBio").cyan().bold());
    println!("  {}", style("采访式传记助手").dim());
    println!();
    println!("  {}  {}", style("Questions:").bold(), style(question_count).dim());
    println!("  {}  {}", style("Data dir:").bold(), style(data_dir).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
