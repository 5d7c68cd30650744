use serenity::{
    async_trait,
    model::{application::Interaction, gateway::Ready},
    prelude::*,
};
use std::sync::atomic::Ordering;
use tracing::{error, info};

use crate::{bot::AppContext, commands, router};

pub struct Handler {
    pub app: AppContext,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
        self.app.ready.store(true, Ordering::SeqCst);

        if let Err(why) = commands::register_all(&ctx, &self.app.config).await {
            error!("Failed to register slash commands: {}", why);
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        router::dispatch(&ctx, &interaction, &self.app).await;
    }
}
