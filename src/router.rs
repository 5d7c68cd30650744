use serenity::model::application::{CommandInteraction, ComponentInteraction, Interaction};
use serenity::model::id::UserId;
use serenity::prelude::*;
use tracing::{debug, error, warn};

use crate::bot::AppContext;
use crate::commands::{anular, help, ponto, ranking, status};
use crate::panel::{ControlAction, ControlId};
use crate::utils::responses;

/// Entry point for every inbound interaction. Classifies the event, hands it
/// to the matching handler, and converts any escaping error into a
/// user-visible reply so a single bad event never takes the process down.
pub async fn dispatch(ctx: &Context, interaction: &Interaction, app: &AppContext) {
    let result = match interaction {
        Interaction::Command(command) => route_command(ctx, command, app).await,
        Interaction::Component(component) => route_component(ctx, component).await,
        _ => Ok(()),
    };

    if let Err(why) = result {
        error!("Interaction handling failed: {}", why);
        report_failure(ctx, interaction, &why).await;
    }
}

async fn route_command(
    ctx: &Context,
    command: &CommandInteraction,
    app: &AppContext,
) -> serenity::Result<()> {
    debug!(
        "Command /{} invoked by user {}",
        command.data.name, command.user.id
    );
    match command.data.name.as_str() {
        "ponto" => ponto::run(ctx, command).await,
        "ranking" => ranking::run(ctx, command).await,
        "anular" => anular::run(ctx, command).await,
        "help" => help::run(ctx, command).await,
        "status" => status::run(ctx, command, app).await,
        other => {
            // Discord only delivers names we registered, so this is a
            // registration drift symptom rather than a user error.
            warn!("Unknown command delivered: {}", other);
            Ok(())
        }
    }
}

async fn route_component(ctx: &Context, component: &ComponentInteraction) -> serenity::Result<()> {
    let Some(control) = authorize(component.user.id, &component.data.custom_id) else {
        debug!(
            "Denied control {:?} to user {}",
            component.data.custom_id, component.user.id
        );
        return component
            .create_response(&ctx.http, responses::denied_response())
            .await;
    };

    match control.action {
        ControlAction::Start => ponto::start(ctx, component).await,
        ControlAction::Pause => ponto::pause(ctx, component).await,
        ControlAction::Finish => ponto::finish(ctx, component).await,
        ControlAction::RankPeriod(period) => ranking::select_period(ctx, component, period).await,
    }
}

/// The one authorization rule for panels: the control must parse and its
/// originator must be the actor. Malformed identifiers fail the same way an
/// originator mismatch does.
fn authorize(actor: UserId, custom_id: &str) -> Option<ControlId> {
    ControlId::parse(custom_id).filter(|control| control.originator == actor)
}

/// Best effort: the interaction may already be acknowledged, in which case
/// the follow-up error reply itself fails and is only logged.
async fn report_failure(ctx: &Context, interaction: &Interaction, why: &serenity::Error) {
    let response = responses::error_response(&why.to_string());
    let result = match interaction {
        Interaction::Command(command) => command.create_response(&ctx.http, response).await,
        Interaction::Component(component) => component.create_response(&ctx.http, response).await,
        _ => return,
    };
    if let Err(secondary) = result {
        debug!("Could not deliver error reply: {}", secondary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::RankPeriod;

    #[test]
    fn originator_may_use_their_panel() {
        let owner = UserId::new(100);
        let control = authorize(owner, "start_100").unwrap();
        assert_eq!(control.action, ControlAction::Start);
        assert_eq!(control.originator, owner);
    }

    #[test]
    fn other_users_are_denied() {
        assert_eq!(authorize(UserId::new(200), "start_100"), None);
        assert_eq!(authorize(UserId::new(200), "rank_semanal_100"), None);
    }

    #[test]
    fn malformed_controls_are_denied() {
        let actor = UserId::new(100);
        assert_eq!(authorize(actor, ""), None);
        assert_eq!(authorize(actor, "start"), None);
        assert_eq!(authorize(actor, "selfdestruct_100"), None);
        assert_eq!(authorize(actor, "start_banana"), None);
    }

    #[test]
    fn rank_controls_carry_their_period() {
        let actor = UserId::new(7);
        let control = authorize(actor, "rank_mensal_7").unwrap();
        assert_eq!(
            control.action,
            ControlAction::RankPeriod(RankPeriod::Mensal)
        );
    }
}
