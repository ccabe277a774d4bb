use anyhow::Result;
use clap::Subcommand;

use super::render::{self, View};
use crate::app::App;
use crate::pages::{LearningPathPage, SubmitOutcome};

#[derive(Subcommand)]
pub enum LearningPathCommand {
    /// List every topic grouped by level
    List {},
    /// List the topics of one level (初級, 中級 or 上級)
    Level { level: String },
    /// Show one topic
    Topic { id: String },
    /// Mark a topic as finished
    Complete { id: String },
    /// Mark a topic as not finished
    Incomplete { id: String },
    /// Show completion percentages
    Progress {
        /// Let the backend calculate progress instead
        #[arg(long, action, default_value = "false")]
        server: bool,
    },
}

pub async fn run(app: &App, cmd: LearningPathCommand) -> Result<()> {
    let page = app.learning_path_page();

    match cmd {
        LearningPathCommand::List {} => {
            load(&page).await?;
            for (level, topics) in page.topics_by_level() {
                println!("{} ({}%)", level, page.level_percent(&level));
                for topic in topics {
                    let mark = if page.is_completed(&topic.id) { "x" } else { " " };
                    println!(
                        "  [{}] {}. {} ({}) {}",
                        mark, topic.order, topic.title, topic.estimated_time, topic.id
                    );
                }
            }
        }
        LearningPathCommand::Level { level } => {
            for topic in page.level(&level).await? {
                println!("{}. {} ({})", topic.order, topic.title, topic.id);
            }
        }
        LearningPathCommand::Topic { id } => {
            let topic = page.topic(&id).await?;
            println!("{}", render::render(&render::views()?, View::Topic, &topic)?);
        }
        LearningPathCommand::Complete { id } => {
            page.mark_completed(&id)?;
            println!("Completed {}", id);
        }
        LearningPathCommand::Incomplete { id } => {
            page.mark_incomplete(&id)?;
            println!("Marked {} as not completed", id);
        }
        LearningPathCommand::Progress { server } => {
            if server {
                let progress = page.server_progress().await?;
                println!(
                    "{}/{} topics ({}%)",
                    progress.completed_count,
                    progress.total_count,
                    (progress.total_progress * 100.0).round()
                );
                for (level, p) in progress.levels {
                    println!("  {}: {}/{}", level, p.completed, p.total);
                }
            } else {
                load(&page).await?;
                println!("Overall: {}%", page.overall_percent());
                for (level, _) in page.topics_by_level() {
                    println!("  {}: {}%", level, page.level_percent(&level));
                }
            }
        }
    }

    Ok(())
}

async fn load(page: &LearningPathPage) -> Result<()> {
    match page.load().await {
        SubmitOutcome::Failed(message) => super::fail(message),
        _ => Ok(()),
    }
}
