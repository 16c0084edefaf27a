//! The `wortquiz stats` command.

use std::path::Path;

use anyhow::Result;

use wortquiz_core::statistics::{HistoryEntry, LearnStats, WordTally};
use wortquiz_store::FileBackend;

use super::format_duration;

pub fn execute(data_dir: &Path, reset: bool) -> Result<()> {
    let mut backend = FileBackend::open(data_dir)?;
    let mut stats = LearnStats::load(&backend);

    if reset {
        stats.reset();
        stats.flush(&mut backend)?;
        println!("Statistics cleared.");
        return Ok(());
    }

    if stats.quizzes_taken == 0 {
        println!("No drills taken yet. Run `wortquiz drill` to start.");
        return Ok(());
    }

    println!("Drills taken:    {}", stats.quizzes_taken);
    println!("Average score:   {:.2}%", stats.average_percentage());
    println!("Study time:      {}", format_duration(stats.study_time_secs));
    println!("Words in store:  {}", stats.total_words);

    let difficult = stats.most_difficult_words();
    if !difficult.is_empty() {
        println!("\nMost difficult words:");
        print_difficult(&difficult);
    }

    if !stats.history.is_empty() {
        println!("\nRecent sessions:");
        print_history(&stats.history);
    }

    Ok(())
}

fn print_difficult(tallies: &[&WordTally]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Word", "Correct", "Incorrect", "Miss rate"]);
    for tally in tallies {
        table.add_row(vec![
            Cell::new(&tally.word),
            Cell::new(tally.correct),
            Cell::new(tally.incorrect),
            Cell::new(format!("{:.0}%", tally.difficulty() * 100.0)),
        ]);
    }
    println!("{table}");
}

fn print_history(history: &[HistoryEntry]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["When", "Score", "Percent"]);
    // Newest first.
    for entry in history.iter().rev() {
        table.add_row(vec![
            Cell::new(entry.taken_at.format("%Y-%m-%d %H:%M")),
            Cell::new(format!("{}/{}", entry.score, entry.total)),
            Cell::new(format!("{:.2}%", entry.percentage)),
        ]);
    }
    println!("{table}");
}
