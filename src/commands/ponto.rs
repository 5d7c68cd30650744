use chrono::Utc;
use serenity::builder::{
    CreateActionRow, CreateButton, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{ButtonStyle, CommandInteraction, ComponentInteraction};
use serenity::model::id::UserId;
use serenity::model::Timestamp;
use serenity::prelude::*;
use tracing::info;

use crate::panel::{ControlAction, ControlId};
use crate::utils::responses;

pub fn register() -> CreateCommand {
    CreateCommand::new("ponto").description("Abre o seu painel de ponto")
}

/// Shows the clock panel. Each button carries the opener's id in its
/// `custom_id`, so the panel needs no server-side state.
pub async fn run(ctx: &Context, command: &CommandInteraction) -> serenity::Result<()> {
    info!("Ponto panel opened by user {}", command.user.id);

    let embed = CreateEmbed::new()
        .title("🕐 Painel de Ponto")
        .description(format!(
            "Painel de <@{}>. Use os botões abaixo para registrar seu ponto.",
            command.user.id
        ))
        .colour(0x5865F2)
        .timestamp(Timestamp::now());

    let data = CreateInteractionResponseMessage::new()
        .add_embed(embed)
        .components(vec![panel_buttons(command.user.id)]);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(data))
        .await
}

fn panel_buttons(owner: UserId) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ControlId::new(ControlAction::Start, owner).encode())
            .label("Entrada")
            .style(ButtonStyle::Success),
        CreateButton::new(ControlId::new(ControlAction::Pause, owner).encode())
            .label("Pausa")
            .style(ButtonStyle::Secondary),
        CreateButton::new(ControlId::new(ControlAction::Finish, owner).encode())
            .label("Saída")
            .style(ButtonStyle::Danger),
    ])
}

pub async fn start(ctx: &Context, component: &ComponentInteraction) -> serenity::Result<()> {
    info!("Clock-in by user {}", component.user.id);
    confirm(ctx, component, "✅ Entrada registrada").await
}

pub async fn pause(ctx: &Context, component: &ComponentInteraction) -> serenity::Result<()> {
    info!("Pause by user {}", component.user.id);
    confirm(ctx, component, "⏸️ Pausa registrada").await
}

pub async fn finish(ctx: &Context, component: &ComponentInteraction) -> serenity::Result<()> {
    info!("Clock-out by user {}", component.user.id);
    confirm(ctx, component, "🏁 Saída registrada").await
}

async fn confirm(
    ctx: &Context,
    component: &ComponentInteraction,
    headline: &str,
) -> serenity::Result<()> {
    let stamp = Utc::now().format("%d/%m/%Y às %H:%M UTC");
    let content = format!("{} para <@{}> em {}.", headline, component.user.id, stamp);
    component
        .create_response(&ctx.http, responses::message_response(&content))
        .await
}
