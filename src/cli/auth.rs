use anyhow::Result;
use rustyline::DefaultEditor;

use crate::api::AuthBackend;
use crate::app::App;
use crate::auth::{UsageLevel, remaining_usage};
use crate::pages::SubmitOutcome;
use crate::router::Route;

pub async fn login(app: &App, username: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => DefaultEditor::new()?.readline("Password: ")?,
    };

    app.navigator.navigate(Route::Login.path());
    match app.login_page().submit(username, &password).await {
        SubmitOutcome::Succeeded => {
            println!("Signed in as {}", username.trim());
            Ok(())
        }
        SubmitOutcome::Ignored => super::fail("Username and password are required".to_string()),
        SubmitOutcome::Failed(message) => super::fail(message),
    }
}

pub async fn logout(app: &App) {
    if app.session.is_authenticated() {
        // The backend only acknowledges, the local session is what matters
        if let Err(e) = app.client.logout().await {
            tracing::debug!("Logout request failed: {}", e);
        }
    }
    app.session.logout();
    println!("Signed out");
}

pub async fn whoami(app: &App) -> Result<()> {
    if !app.session.is_authenticated() {
        println!("Not signed in");
        return Ok(());
    }

    let user = app.client.me().await?;
    println!("{} ({})", user.username, user.role);

    match remaining_usage(&app.session.snapshot()) {
        None => println!("Daily usage: unlimited"),
        Some(remaining) => {
            let note = match UsageLevel::from_remaining(remaining) {
                UsageLevel::Exhausted => " (limit reached)",
                UsageLevel::Low => " (running low)",
                UsageLevel::Ok => "",
            };
            println!("Daily usage remaining: {}{}", remaining, note);
        }
    }
    Ok(())
}
