use anyhow::Result;
use serenity::prelude::*;
use std::time::Instant;
use tracing::{error, info};

mod bot;
mod commands;
mod config;
mod handler;
mod liveness;
mod panel;
mod router;
mod utils;
mod webserver;

use bot::AppContext;
use config::BotConfig;
use handler::Handler;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging with environment-based configuration
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ponto_bot=info,serenity=warn".to_string()),
        )
        .init();

    info!("Starting Ponto Bot...");

    let started = Instant::now();
    let http_port = config::http_port_from_env();

    // The hosting platform kills instances that do not bind their port, so
    // the keep-alive server comes up before the bot configuration is checked.
    tokio::spawn(webserver::serve(http_port, webserver::WebState { started }));

    let bot_config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(why) => {
            error!("Configuration error: {}", why);
            info!("Serving keep-alive endpoints only; fix the configuration and restart");
            std::future::pending::<()>().await;
            unreachable!();
        }
    };

    let app = AppContext::new(bot_config, started)?;
    liveness::spawn_watchdog(app.ready.clone());

    let intents = GatewayIntents::GUILDS;
    let handler = Handler { app: app.clone() };

    let mut client = Client::builder(&app.config.token, intents)
        .application_id(app.config.application_id)
        .event_handler(handler)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create Discord client: {}", e))?;

    info!("Bot initialized successfully, connecting to Discord...");

    if let Err(why) = client.start().await {
        error!("Discord client error: {}", why);
        return Err(anyhow::anyhow!("Discord client failed: {}", why));
    }

    Ok(())
}
