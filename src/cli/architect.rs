use anyhow::Result;

use super::render::{self, View};
use crate::app::App;
use crate::pages::{ArchitectForm, SubmitOutcome};

pub async fn run(
    app: &App,
    challenge: String,
    industry: Option<String>,
    constraints: Vec<String>,
) -> Result<()> {
    let form = ArchitectForm {
        business_challenge: challenge,
        industry: industry.unwrap_or_default(),
        constraints,
    };

    let page = app.architect_page();
    eprintln!("Generating, this can take a minute...");
    match page.submit(&form).await {
        SubmitOutcome::Ignored => super::fail("Describe the business challenge".to_string()),
        SubmitOutcome::Failed(message) => super::fail(message),
        SubmitOutcome::Succeeded => {
            let store = page.store();
            let store = store.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(result) = store.result() {
                println!("{}", render::render(&render::views()?, View::Architecture, result)?);
            }
            Ok(())
        }
    }
}
