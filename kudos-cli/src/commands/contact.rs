//! Contact command - validate a contact message

use std::time::Duration;

use clap::Args;
use kudos_core::ContactForm;

/// Simulated delivery delay, matching the site's contact form
const SEND_DELAY: Duration = Duration::from_millis(700);

/// Validate and send a contact message
#[derive(Args, Debug)]
pub struct ContactArgs {
    /// Sender name
    #[arg(long)]
    pub name: String,

    /// Sender email address
    #[arg(long)]
    pub email: String,

    /// Message body, at least 10 characters
    #[arg(short, long)]
    pub message: String,
}

impl ContactArgs {
    /// Execute the contact command
    pub async fn execute(&self, verbose: bool) -> anyhow::Result<()> {
        let form = ContactForm {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };

        let contact = match form.validate() {
            Ok(contact) => contact,
            Err(errors) => {
                eprintln!("Message not sent:");
                for error in errors.errors() {
                    eprintln!("  {}: {}", error.field, error.message);
                }
                return Err(errors.into());
            }
        };

        if verbose {
            tracing::info!(name = %contact.name, email = %contact.email, "Sending contact message");
        }

        println!("Sending...");
        tokio::time::sleep(SEND_DELAY).await;
        println!("Sent! We will get back to you soon.");

        Ok(())
    }
}
