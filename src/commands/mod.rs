pub mod anular;
pub mod help;
pub mod ponto;
pub mod ranking;
pub mod status;

use serenity::builder::CreateCommand;
use serenity::model::application::Command;
use serenity::prelude::*;
use tracing::info;

use crate::config::BotConfig;

/// The full command descriptor set, declared once at startup.
pub fn descriptors() -> Vec<CreateCommand> {
    vec![
        ponto::register(),
        ranking::register(),
        anular::register(),
        help::register(),
        status::register(),
    ]
}

/// Pushes the descriptor set via a "replace all commands" call, scoped to the
/// configured guild when one is set (near-instant propagation) and globally
/// otherwise. Replacing with an identical set is a no-op for clients, so this
/// is safe to re-run on every gateway ready and from the status diagnostic.
pub async fn register_all(ctx: &Context, config: &BotConfig) -> serenity::Result<usize> {
    let commands = descriptors();
    let count = commands.len();

    match config.guild_id {
        Some(guild_id) => {
            guild_id.set_commands(&ctx.http, commands).await?;
            info!("Registered {} commands in guild {}", count, guild_id);
        }
        None => {
            Command::set_global_commands(&ctx.http, commands).await?;
            info!("Registered {} commands globally", count);
        }
    }

    Ok(count)
}
