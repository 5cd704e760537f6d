//! Basic example of using the word search engine

use wordsearch_core::{default_words, Generator, Mode, NullView, PuzzleSession, SelectOutcome};

fn main() {
    // Generate a puzzle
    println!("Generating a hard 10x10 puzzle...\n");
    let mut generator = Generator::with_seed(2024);
    let placement = generator.generate(&default_words(), Mode::Hard);

    println!("{}", placement.grid);
    println!("Placed {} of {} words", placement.placed_count(), default_words().len());
    for path in &placement.solved {
        let start = path.cells[0];
        let end = path.cells[path.cells.len() - 1];
        println!("  {:<10} {} -> {}", path.word, start, end);
    }
    for word in &placement.unplaced {
        println!("  {:<10} (not placed)", word);
    }

    // Play it through a session, claiming every answer backwards
    println!("\n--- Solving through a session ---\n");
    let mut session = match PuzzleSession::generated(&default_words(), Mode::Hard, Generator::with_seed(2024)) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Could not start a session: {}", err);
            return;
        }
    };
    let mut view = NullView;
    let answers = session.solved_paths().to_vec();
    for path in answers {
        let start = path.cells[path.cells.len() - 1];
        let end = path.cells[0];
        session.select_cell(start, &mut view);
        if let SelectOutcome::Found { word, complete } = session.select_cell(end, &mut view) {
            println!("Found {}{}", word, if complete { " - puzzle complete!" } else { "" });
        }
    }
    println!("\nFound {} of {}", session.found_count(), session.total_words());
}
