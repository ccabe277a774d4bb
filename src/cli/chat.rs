use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::render::{self, View};
use crate::app::App;
use crate::pages::rag::SAMPLE_QUESTIONS;
use crate::pages::{RagPage, SubmitOutcome};
use crate::store::Role;

pub async fn run(app: &App, question: Option<String>) -> Result<()> {
    let page = app.rag_page();
    let views = render::views()?;

    if let Some(question) = question {
        return match page.submit(&question).await {
            SubmitOutcome::Failed(message) => super::fail(message),
            _ => print_last_answer(&page, &views),
        };
    }

    let mut rl = DefaultEditor::new()?;
    println!("Ask about LangGraph. Try one of these:");
    for q in SAMPLE_QUESTIONS {
        println!("  - {}", q);
    }
    println!("Type /clear to start over, Ctrl-D to quit.");

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) if line.trim() == "/clear" => page.clear(),
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match page.submit(&line).await {
                    SubmitOutcome::Ignored => continue,
                    SubmitOutcome::Failed(message) => eprintln!("Error: {}", message),
                    SubmitOutcome::Succeeded => {}
                }
                print_last_answer(&page, &views)?;
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn print_last_answer(page: &RagPage, views: &handlebars::Handlebars) -> Result<()> {
    let store = page.store();
    let store = store.lock().unwrap_or_else(|e| e.into_inner());
    let Some(msg) = store.messages().iter().rfind(|m| m.role == Role::Assistant) else {
        return Ok(());
    };
    match &msg.data {
        Some(data) => println!("{}", render::render(views, View::RagAnswer, data)?),
        None => println!("{}", msg.content),
    }
    Ok(())
}
