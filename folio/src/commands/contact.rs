use clap::Subcommand;
use folio_config::Config;
use folio_core_contact_contracts::{ContactPrepareSubmissionError, ContactService};
use folio_models::contact::ContactRequestDraft;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Validate a contact request and print the prepared submission
    Compose {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        project_type: String,
        #[arg(long)]
        budget: Option<String>,
        #[arg(long)]
        timeline: Option<String>,
        #[arg(long)]
        message: String,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Compose {
                name,
                email,
                company,
                project_type,
                budget,
                timeline,
                message,
            } => {
                compose(
                    config,
                    ContactRequestDraft {
                        name,
                        email,
                        company,
                        project_type,
                        budget,
                        timeline,
                        message,
                    },
                )
                .await
            }
        }
    }
}

async fn compose(config: Config, draft: ContactRequestDraft) -> anyhow::Result<()> {
    let service = environment::contact_service(&config);

    let submission = match service.prepare_submission(draft).await {
        Ok(submission) => submission,
        Err(ContactPrepareSubmissionError::Rejected(errors)) => {
            for violation in &errors.violations {
                eprintln!("{}: {}", violation.field, violation.message);
            }
            anyhow::bail!("Contact request failed validation");
        }
        Err(ContactPrepareSubmissionError::Other(err)) => return Err(err),
    };

    println!("Subject: {}", submission.subject);
    println!();
    println!("{}", submission.body);
    println!();
    println!("{}", submission.compose_url);
    Ok(())
}
