//! Submit command - record a new review

use clap::Args;
use kudos_core::{render, Config, ReviewForm, Summary};

use super::open_store;

/// Submit a review
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Star rating from 1 to 5
    #[arg(short, long)]
    pub rating: i64,

    /// Display name (leave empty to post anonymously)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Review text, at least 5 characters
    #[arg(short, long)]
    pub comment: String,
}

impl SubmitArgs {
    /// Execute the submit command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let form = ReviewForm {
            rating: self.rating,
            name: self.name.clone(),
            comment: self.comment.clone(),
        };

        let review = match form.validate() {
            Ok(review) => review,
            Err(errors) => {
                eprintln!("Review not saved:");
                for error in errors.errors() {
                    eprintln!("  {}: {}", error.field, error.message);
                }
                return Err(errors.into());
            }
        };

        let store = open_store(&config.store)?;
        let items = store.submit(review.rating, review.name, review.comment)?;

        if verbose {
            tracing::info!(count = items.len(), "Review stored");
        }

        println!("Thank you for your review!");
        println!();
        println!("{}", Summary::of(&items));
        if let Some(latest) = items.first() {
            println!("  {}", render::review_line(latest));
        }

        Ok(())
    }
}
