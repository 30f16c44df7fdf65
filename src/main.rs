// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MMA Universe command-line client
//!
//! Exercises the client core against a live backend:
//!
//! ```text
//! mma-universe-client login <email> <password>
//! mma-universe-client whoami
//! mma-universe-client upcoming [limit]
//! mma-universe-client fighters [weight class]
//! mma-universe-client search <query>
//! mma-universe-client notifications
//! mma-universe-client logout
//! ```

use anyhow::{bail, Context};
use chrono::Utc;
use mma_universe_client::{
    api::ApiClient,
    config::Config,
    forms::LoginForm,
    services::{events, notifications, session, FighterListParams, Services},
    store::{AppStore, AuthStore, FileStore, FightersFilterPatch},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        build_mode = ?config.build_mode,
        base_url = %config.api_base_url,
        "Starting MMA Universe client"
    );

    let storage = FileStore::open(&config.state_dir)
        .with_context(|| format!("Failed to open state dir {}", config.state_dir.display()))?;
    let api = ApiClient::new(&config)?;
    let mut auth = AuthStore::rehydrate(api.clone(), Arc::new(storage));
    let services = Services::new(&api);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("upcoming");

    // Anything other than login/logout benefits from a fresh token.
    if auth.is_authenticated() && !matches!(command, "login" | "logout") {
        if let Err(e) = session::ensure_fresh_token(&services.auth, &mut auth, Utc::now()).await {
            tracing::warn!(error = %e, "Token refresh failed, continuing anyway");
        }
    }

    match command {
        "login" => {
            let form = LoginForm {
                email: args.get(1).cloned().unwrap_or_default(),
                password: args.get(2).cloned().unwrap_or_default(),
            };
            form.check()?;
            session::sign_in(&services.auth, &mut auth, &form.email, &form.password).await?;
            if let Some(user) = auth.user() {
                println!("Logged in as {} (@{})", user.display_name, user.username);
            }
        }
        "logout" => {
            session::sign_out(&services.auth, &mut auth).await;
            println!("Logged out");
        }
        "whoami" => {
            if !auth.is_authenticated() {
                bail!("Not logged in");
            }
            let me = services.users.me().await?;
            auth.set_user(Some(me.clone()));
            println!("{}", serde_json::to_string_pretty(&me)?);
        }
        "upcoming" => {
            let limit = match args.get(1) {
                Some(v) => v.parse().context("limit must be a number")?,
                None => events::DEFAULT_UPCOMING_LIMIT,
            };
            for event in services.events.upcoming(limit).await? {
                println!(
                    "{}  {}  {}",
                    event.date.format("%Y-%m-%d"),
                    event.organizer,
                    event.title
                );
            }
        }
        "fighters" => {
            let mut app = AppStore::new();
            if let Some(weight_class) = args.get(1) {
                app.set_fighters_filter(FightersFilterPatch {
                    weight_class: Some(Some(weight_class.clone())),
                    ..Default::default()
                });
            }
            let params = FighterListParams {
                page: Some(1),
                limit: Some(20),
                ..FighterListParams::from(app.fighters_filter())
            };
            for fighter in services.fighters.list(&params).await? {
                println!("{:<30} {}", fighter.full_name(), fighter.weight_class);
            }
        }
        "search" => {
            let Some(query) = args.get(1) else {
                bail!("usage: search <query>");
            };
            let results = services.search.all(query).await?;
            println!(
                "{} fighters, {} events, {} users, {} posts",
                results.fighters.len(),
                results.events.len(),
                results.users.len(),
                results.posts.len()
            );
        }
        "notifications" => {
            let mut app = AppStore::new();
            let list = services
                .notifications
                .list(notifications::DEFAULT_PAGE)
                .await?;
            app.set_notifications(list);
            println!("{} unread", app.unread_notifications_count());
            for n in app.notifications() {
                let marker = if n.is_read { " " } else { "*" };
                println!("{} {}  {}", marker, n.title, n.message);
            }
        }
        other => bail!("Unknown command: {}", other),
    }

    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mma_universe_client=info".parse()?)
                .add_directive("warn".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
