//! The `pathfit init` command.

use anyhow::Result;

use pathfit_core::bank::BUILTIN_BANK_TOML;

pub fn execute() -> Result<()> {
    // Create pathfit.toml
    if std::path::Path::new("pathfit.toml").exists() {
        println!("pathfit.toml already exists, skipping.");
    } else {
        std::fs::write("pathfit.toml", SAMPLE_CONFIG)?;
        println!("Created pathfit.toml");
    }

    // Write the built-in bank so it can be edited or used as a template
    std::fs::create_dir_all("banks")?;
    let bank_path = std::path::Path::new("banks/corporate-trainer.toml");
    if bank_path.exists() {
        println!("banks/corporate-trainer.toml already exists, skipping.");
    } else {
        std::fs::write(bank_path, BUILTIN_BANK_TOML)?;
        println!("Created banks/corporate-trainer.toml");
    }

    println!("\nNext steps:");
    println!("  1. Review pathfit.toml and banks/corporate-trainer.toml");
    println!("  2. Run: pathfit validate --bank banks/corporate-trainer.toml");
    println!("  3. Run: pathfit run --bank banks/corporate-trainer.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# pathfit configuration

# Bank used when --bank is not given: a file path, or "builtin".
default_bank = "banks/corporate-trainer.toml"

# Where reports are written.
output_dir = "./pathfit-results"

# Default report format: json, markdown, html, or all.
default_format = "json"

# Save raw responses alongside the report after an interactive run.
save_responses = true
"#;
