//! List command - show stored reviews newest-first

use chrono::DateTime;
use clap::Args;
use kudos_core::{render, Config, Review, Summary};
use kudos_remote::{hydrate, SeedClient};

use super::open_store;

/// List stored reviews
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show at most this many reviews
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Merge the remote seed before listing
    #[arg(long)]
    pub refresh: bool,

    /// Print escaped HTML list items instead of plain text
    #[arg(long)]
    pub html: bool,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let store = open_store(&config.store)?;

        if self.refresh {
            match SeedClient::from_config(&config.remote)? {
                Some(client) => {
                    let outcome = hydrate(&store, &client).await;
                    if verbose {
                        tracing::info!(outcome = ?outcome, "Refreshed from remote seed");
                    }
                }
                None => eprintln!("No remote seed configured; showing local reviews only"),
            }
        }

        let items = store.load();
        let shown = self.limit.unwrap_or(items.len()).min(items.len());

        println!("{}", Summary::of(&items));
        println!();

        if items.is_empty() {
            println!("No reviews yet.");
            return Ok(());
        }

        for review in &items[..shown] {
            if self.html {
                println!("{}", html_item(review));
            } else {
                println!("{}  {}", format_date(review.timestamp), render::review_line(review));
            }
        }

        if shown < items.len() {
            println!();
            println!("... and {} more", items.len() - shown);
        }

        Ok(())
    }
}

/// Submission date, or a dash for seeded reviews without one
fn format_date(timestamp: i64) -> String {
    if timestamp <= 0 {
        return "----------".to_string();
    }
    DateTime::from_timestamp_millis(timestamp)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "----------".to_string())
}

fn html_item(review: &Review) -> String {
    format!(
        r#"<li><div class="meta"><span class="name">{}</span><span class="stars" aria-label="{} of 5">{}</span></div><p>{}</p></li>"#,
        render::escape_html(render::display_name(&review.name)),
        review.rating,
        render::rating_stars(review.rating),
        render::escape_html(&review.comment)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(0), "----------");
        assert_eq!(format_date(1_700_000_000_000), "2023-11-14");
    }

    #[test]
    fn test_html_item_escapes() {
        let review = Review::new(2, "", "<script>alert(\"x\")</script>", 0);
        let html = html_item(&review);
        assert!(html.contains(r#"<span class="name">Anon</span>"#));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
        assert!(html.contains("★★☆☆☆"));
    }
}
