//! The `wortquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("wortquiz.toml").exists() {
        println!("wortquiz.toml already exists, skipping.");
    } else {
        std::fs::write("wortquiz.toml", SAMPLE_CONFIG)?;
        println!("Created wortquiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: wortquiz sync     (fetch the published vocabulary)");
    println!("  2. Run: wortquiz words    (see what arrived)");
    println!("  3. Run: wortquiz drill    (start practicing)");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# wortquiz configuration

# Questions per drill session.
question_count = 10

# Endpoint `wortquiz sync` checks for a new vocabulary version.
version_url = "https://raw.githubusercontent.com/AntHavrylov/DeutschWordsLearn-csv/refs/heads/main/version.json"

# CSV sheets `wortquiz sync` imports, in order.
[[sources]]
name = "Standard"
url = "https://raw.githubusercontent.com/AntHavrylov/DeutschWordsLearn-csv/refs/heads/main/german_default%20-%20vocabulary.csv"

[[sources]]
name = "Verben"
url = "https://raw.githubusercontent.com/AntHavrylov/DeutschWordsLearn-csv/refs/heads/main/german_verbs%20-%20vocabulary.csv"
"#;
