use serenity::builder::{CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage};

pub fn message_response(content: &str) -> CreateInteractionResponse {
    let data = CreateInteractionResponseMessage::new().content(content);
    CreateInteractionResponse::Message(data)
}

pub fn embed_response(embed: CreateEmbed) -> CreateInteractionResponse {
    let data = CreateInteractionResponseMessage::new().add_embed(embed);
    CreateInteractionResponse::Message(data)
}

/// Visible only to the actor.
pub fn ephemeral_response(content: &str) -> CreateInteractionResponse {
    let data = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    CreateInteractionResponse::Message(data)
}

/// Reply for an actor touching a panel they did not open, and for control
/// identifiers that do not parse.
pub fn denied_response() -> CreateInteractionResponse {
    ephemeral_response("🚫 Este painel pertence a outro usuário. Use `/ponto` para abrir o seu.")
}

pub fn error_response(message: &str) -> CreateInteractionResponse {
    ephemeral_response(&format!("⚠️ Algo deu errado: {}", message))
}

/// Replaces the message the activated component belongs to instead of
/// sending a new one.
pub fn update_response(data: CreateInteractionResponseMessage) -> CreateInteractionResponse {
    CreateInteractionResponse::UpdateMessage(data)
}
