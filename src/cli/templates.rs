use anyhow::Result;
use clap::Subcommand;

use super::render::{self, View};
use crate::api::public::templates::TemplateFilter;
use crate::app::App;
use crate::pages::{SubmitOutcome, TemplateSearch};

#[derive(Subcommand)]
pub enum TemplatesCommand {
    /// List templates, optionally narrowed down
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        /// Matches title, description or tags
        #[arg(long, default_value = "")]
        search: String,
    },
    /// List the template categories
    Categories {},
    /// Show one template with its code
    Show { id: String },
}

pub async fn run(app: &App, cmd: TemplatesCommand) -> Result<()> {
    let page = app.templates_page();

    match cmd {
        TemplatesCommand::List {
            category,
            difficulty,
            search,
        } => {
            let filter = TemplateFilter {
                category: category.clone(),
                difficulty: difficulty.clone(),
            };
            if let SubmitOutcome::Failed(message) = page.load(&filter).await {
                return super::fail(message);
            }
            let search = TemplateSearch {
                category,
                difficulty,
                query: search,
            };
            let categories = page.categories();
            for t in page.filtered(&search) {
                let category = categories.get(&t.category).unwrap_or(&t.category);
                println!("{} [{} / {}] {}", t.id, category, t.difficulty, t.title);
            }
        }
        TemplatesCommand::Categories {} => {
            if let SubmitOutcome::Failed(message) = page.load(&TemplateFilter::default()).await {
                return super::fail(message);
            }
            for (id, name) in page.categories() {
                println!("{}: {}", id, name);
            }
        }
        TemplatesCommand::Show { id } => {
            let template = page.show(&id).await?;
            println!("{}", render::render(&render::views()?, View::Template, &template)?);
        }
    }

    Ok(())
}
