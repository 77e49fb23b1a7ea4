// Colored terminal output: the sorted classification summary.

use colored::Colorize;

use crate::classify::counts::CategoryCounts;
use crate::classify::keywords::OTHER_LABEL;

/// Print the category -> count summary, sorted by count descending.
pub fn display_summary(counts: &CategoryCounts, paper_count: usize) {
    println!(
        "\n{}",
        format!("=== Classification Results ({paper_count} papers) ===").bold()
    );
    println!();

    if counts.is_empty() {
        println!("  No papers retrieved; nothing to classify.");
        return;
    }

    let bar_width: usize = 30;
    let max = counts.max_count().max(1);

    for (label, count) in counts.sorted_by_count() {
        let filled = ((count as f64 / max as f64) * bar_width as f64).round() as usize;
        let bar = "=".repeat(filled);

        let share = count as f64 / paper_count.max(1) as f64;
        let colored_bar = if label == OTHER_LABEL {
            bar.dimmed()
        } else if share >= 0.4 {
            bar.bright_green()
        } else if share >= 0.15 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!("  {label:<20} {count:>5}  {colored_bar}");
    }
}
