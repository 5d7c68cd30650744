use serenity::builder::{CreateCommand, CreateEmbed};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;
use tracing::debug;

use crate::utils::responses;

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("Lista os comandos disponíveis")
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> serenity::Result<()> {
    debug!("Help requested by user {}", command.user.id);

    let embed = CreateEmbed::new()
        .title("📖 Comandos do Ponto Bot")
        .colour(0x5865F2)
        .field("/ponto", "Abre o seu painel de ponto com os botões de entrada, pausa e saída.", false)
        .field("/ranking", "Mostra o ranking de horas. Use `periodo` ou os botões para trocar entre total, semanal e mensal.", false)
        .field("/anular", "Anula o registro de ponto de um usuário. Somente administradores.", false)
        .field("/status", "Verifica a conexão com a API de ponto e reenvia os comandos.", false)
        .footer(serenity::builder::CreateEmbedFooter::new(
            "Os botões de um painel só respondem a quem o abriu.",
        ));

    command
        .create_response(&ctx.http, responses::embed_response(embed))
        .await
}
