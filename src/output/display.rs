//! Display functions for command results

use super::formatters::{code_cell, count_noun, create_progress_bar, feedback_pegs};
use crate::commands::{BenchmarkResult, SessionSummary, SolveResult};
use crate::game::NUMBER_OF_ATTEMPTS;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, show_candidates: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        code_cell(result.secret).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {}   {}",
            i + 1,
            code_cell(turn.guess),
            feedback_pegs(turn.feedback)
        );

        if show_candidates {
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
            if turn.candidates_after > 0 {
                let reduction = turn.candidates_before as f64 / turn.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.turns.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.turns.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Solved:           {} / {}",
        result.solved, result.total_codes
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=NUMBER_OF_ATTEMPTS {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_codes as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failed.is_empty() {
        println!(
            "\n😰 {}",
            format!("Not solved within {NUMBER_OF_ATTEMPTS} guesses:")
                .red()
                .bold()
        );
        for secret in result.failed.iter().take(10) {
            println!("   {}", code_cell(*secret).red());
        }
        if result.failed.len() > 10 {
            println!("   ...and {} more", result.failed.len() - 10);
        }
    }
}

/// Print the tally at the end of a text session
pub fn print_session_summary(summary: &SessionSummary, player: &str, wins_label: &str) {
    println!(
        "\n{player} played {}, {wins_label}: {}",
        count_noun(summary.games, "game"),
        summary.wins.to_string().bright_cyan().bold()
    );
}
