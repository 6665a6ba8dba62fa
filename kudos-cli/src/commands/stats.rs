//! Stats command - rating summary and distribution

use clap::Args;
use kudos_core::{render, Config, Summary};

use super::open_store;

const BAR_WIDTH: usize = 30;

/// Show the rating summary
#[derive(Args, Debug)]
pub struct StatsArgs {}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let store = open_store(&config.store)?;
        let summary = Summary::of(&store.load());

        println!("Average: {}", render::format_average(summary.average));
        println!("         {}", render::average_stars(summary.average));
        println!("Reviews: {}", summary.count);
        println!();

        for rating in (1..=5u8).rev() {
            let count = summary.distribution[usize::from(rating) - 1];
            println!(
                "  {}  {:<width$} {}",
                render::rating_stars(rating),
                bar(count, summary.count),
                count,
                width = BAR_WIDTH
            );
        }

        Ok(())
    }
}

fn bar(count: usize, total: usize) -> String {
    if total == 0 {
        return String::new();
    }
    "#".repeat(count * BAR_WIDTH / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(1, 2).len(), BAR_WIDTH / 2);
        assert_eq!(bar(3, 3).len(), BAR_WIDTH);
    }
}
