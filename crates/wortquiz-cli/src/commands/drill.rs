//! The `wortquiz drill` command, the interactive quiz loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use wortquiz_core::model::{Article, Word};
use wortquiz_core::quiz::{Answer, QuizEngine, QuizResults, QuizWord};
use wortquiz_core::statistics::LearnStats;
use wortquiz_remote::load_config_from;

use super::{format_duration, open_store, resolve_list_id};

type InputLines = io::Lines<io::StdinLock<'static>>;

enum Choice {
    Option(usize),
    Skip,
    Quit,
}

pub fn execute(
    data_dir: &Path,
    list: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config_from(config_path)?;
    let count = count.unwrap_or(config.question_count);

    let (mut backend, mut store) = open_store(data_dir)?;
    let list_id = resolve_list_id(&store, list.as_deref())?;
    let pool: Vec<Word> = match &list_id {
        Some(id) => store.words_in(id).into_iter().cloned().collect(),
        None => store.words().to_vec(),
    };

    let mut engine = match seed {
        Some(seed) => QuizEngine::with_seed(seed),
        None => QuizEngine::new(),
    };

    let total = match engine.start(&pool, count) {
        Ok(session) => session.len(),
        Err(e) if e.is_declined_start() => {
            println!("{e}. Import more words first.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Starting a drill with {total} questions.");
    println!("Answer with a number, 's' skips the word for good, 'q' quits.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(question) = engine.current().cloned() {
        let position = engine.session().map(|s| s.current + 1).unwrap_or(1);
        show_question(&question, position, total);

        let primary = match read_choice(&mut lines, question.options.len())? {
            Choice::Option(index) => question.options[index].clone(),
            Choice::Skip => {
                engine.skip(&mut store)?;
                store.flush(&mut backend)?;
                println!("Skipped and marked as known.\n");
                continue;
            }
            Choice::Quit => return abandon(&mut engine),
        };

        let mut answer = Answer::primary(primary);
        if question.wants_article() {
            let Some(article) = pick(&mut lines, "Which article?", &Article::ALL)? else {
                return abandon(&mut engine);
            };
            answer.article = Some(article);
        }
        if question.wants_verb_details() {
            let Some(preposition) =
                pick(&mut lines, "Which preposition?", &question.preposition_options)?
            else {
                return abandon(&mut engine);
            };
            let Some(kasus) = pick(&mut lines, "Which case?", &question.case_options)? else {
                return abandon(&mut engine);
            };
            answer.preposition = Some(preposition);
            answer.kasus = Some(kasus);
        }

        let outcome = engine.answer(answer)?;
        if outcome.correct {
            println!("Correct!\n");
        } else {
            match &outcome.correct_display {
                Some(display) => println!("Wrong. The answer is: {display}\n"),
                None => println!("Wrong.\n"),
            }
        }
        engine.advance()?;
    }

    let results = engine.finish(&mut store)?;
    store.flush(&mut backend)?;

    let mut stats = LearnStats::load(&backend);
    stats.record(&results, store.words().len());
    stats.flush(&mut backend)?;

    show_results(&results);

    Ok(())
}

fn abandon(engine: &mut QuizEngine) -> Result<()> {
    engine.abandon();
    println!("Session abandoned, nothing recorded.");
    Ok(())
}

fn show_question(question: &QuizWord, position: usize, total: usize) {
    println!(
        "[{position}/{total}] {} ({})",
        question.prompt(),
        question.word.grammar.category()
    );
    for (index, option) in question.options.iter().enumerate() {
        println!("  {}. {option}", index + 1);
    }
}

/// Reads the primary selection: an option number, skip, or quit.
/// End of input counts as quitting.
fn read_choice(lines: &mut InputLines, max: usize) -> Result<Choice> {
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(Choice::Quit);
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("s") {
            return Ok(Choice::Skip);
        }
        if input.eq_ignore_ascii_case("q") {
            return Ok(Choice::Quit);
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(Choice::Option(n - 1)),
            _ => println!("Enter 1-{max}, 's' to skip, or 'q' to quit."),
        }
    }
}

/// Shows a follow-up choice list and reads one selection.
/// `None` means the user quit.
fn pick<T: std::fmt::Display + Copy>(
    lines: &mut InputLines,
    what: &str,
    choices: &[T],
) -> Result<Option<T>> {
    println!("{what}");
    for (index, choice) in choices.iter().enumerate() {
        println!("  {}. {choice}", index + 1);
    }
    Ok(read_pick(lines, choices.len())?.map(|index| choices[index]))
}

fn read_pick(lines: &mut InputLines, max: usize) -> Result<Option<usize>> {
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Enter 1-{max} or 'q' to quit."),
        }
    }
}

fn show_results(results: &QuizResults) {
    use comfy_table::{Cell, Table};

    println!(
        "Done! {}/{} correct ({:.2}%), {} skipped, took {}.",
        results.score,
        results.total,
        results.percentage,
        results.skipped,
        format_duration(results.elapsed_secs)
    );

    if !results.incorrect.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Word", "Your answer", "Correct answer"]);
        for quiz_word in &results.incorrect {
            table.add_row(vec![
                Cell::new(quiz_word.prompt()),
                Cell::new(quiz_word.selected.as_deref().unwrap_or("-")),
                Cell::new(
                    quiz_word
                        .correct_display
                        .as_deref()
                        .unwrap_or_else(|| quiz_word.expected()),
                ),
            ]);
        }
        println!("\nTo review:\n{table}");
    }
}
