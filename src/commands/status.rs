use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse,
};
use serenity::model::application::CommandInteraction;
use serenity::model::Timestamp;
use serenity::prelude::*;
use tracing::{info, warn};

use crate::bot::AppContext;
use crate::commands;

pub fn register() -> CreateCommand {
    CreateCommand::new("status").description("Diagnóstico: API de ponto e registro de comandos")
}

/// Two-phase reply: acknowledge first, then finalize once the probe and the
/// re-registration round trips are done. The probe shares the bounded-timeout
/// HTTP client, so an unreachable API turns into an error line instead of a
/// hang.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    app: &AppContext,
) -> serenity::Result<()> {
    info!("Status diagnostic requested by user {}", command.user.id);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(
                CreateInteractionResponseMessage::new().ephemeral(true),
            ),
        )
        .await?;

    let api_line = match probe_api(app).await {
        Ok(code) => format!("✅ API respondeu com status {}", code),
        Err(why) => {
            warn!("API probe failed: {}", why);
            format!("❌ API inacessível: {}", why)
        }
    };

    // Replace-all registration is idempotent, so the diagnostic can re-push
    // the descriptor set on demand.
    let commands_line = match commands::register_all(ctx, &app.config).await {
        Ok(count) => format!("✅ {} comandos registrados", count),
        Err(why) => {
            warn!("Command re-registration failed: {}", why);
            format!("❌ Falha ao registrar comandos: {}", why)
        }
    };

    let uptime = app.started.elapsed().as_secs();
    let embed = CreateEmbed::new()
        .title("🩺 Status do Bot")
        .colour(0x2ECC71)
        .field("API de ponto", api_line, false)
        .field("Comandos", commands_line, false)
        .field("Uptime", format!("{}s", uptime), false)
        .timestamp(Timestamp::now());

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await?;
    Ok(())
}

async fn probe_api(app: &AppContext) -> Result<u16, reqwest::Error> {
    let response = app.http.get(&app.config.api_base_url).send().await?;
    Ok(response.status().as_u16())
}
