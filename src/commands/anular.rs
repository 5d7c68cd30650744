use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;
use tracing::{info, warn};

use crate::utils::{command_helpers, responses};

pub fn register() -> CreateCommand {
    CreateCommand::new("anular")
        .description("Anula o ponto de um usuário (somente administradores)")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "usuario",
                "Usuário que terá o ponto anulado",
            )
            .required(true),
        )
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> serenity::Result<()> {
    // Privilege gate comes before anything else, argument validation included.
    if !command_helpers::is_administrator(command) {
        warn!(
            "User {} tried /anular without administrator permission",
            command.user.id
        );
        return command
            .create_response(
                &ctx.http,
                responses::ephemeral_response(
                    "🚫 Apenas administradores podem anular registros de ponto.",
                ),
            )
            .await;
    }

    let target = command_helpers::get_user_option(command, "usuario")?;

    info!(
        "Admin {} annulled the clock record of user {}",
        command.user.id, target
    );

    let content = format!(
        "🗑️ Registro de ponto de <@{}> anulado por <@{}>.",
        target, command.user.id
    );
    command
        .create_response(&ctx.http, responses::message_response(&content))
        .await
}
