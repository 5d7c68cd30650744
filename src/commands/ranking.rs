use serenity::builder::{
    CreateActionRow, CreateButton, CreateCommand, CreateCommandOption, CreateEmbed,
    CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::{
    ButtonStyle, CommandInteraction, CommandOptionType, ComponentInteraction,
};
use serenity::model::id::UserId;
use serenity::prelude::*;
use tracing::info;

use crate::panel::{ControlAction, ControlId, RankPeriod};
use crate::utils::{command_helpers, responses};

struct RankingEntry {
    name: &'static str,
    total_min: u32,
    weekly_min: u32,
    monthly_min: u32,
}

// Demo figures until the clock-in API is wired up.
const MOCK_RANKING: &[RankingEntry] = &[
    RankingEntry {
        name: "Ana Souza",
        total_min: 14520,
        weekly_min: 2145,
        monthly_min: 8760,
    },
    RankingEntry {
        name: "Bruno Lima",
        total_min: 13980,
        weekly_min: 2430,
        monthly_min: 8205,
    },
    RankingEntry {
        name: "Carla Mendes",
        total_min: 12660,
        weekly_min: 1980,
        monthly_min: 7440,
    },
    RankingEntry {
        name: "Diego Alves",
        total_min: 9825,
        weekly_min: 1575,
        monthly_min: 6090,
    },
    RankingEntry {
        name: "Elisa Rocha",
        total_min: 8340,
        weekly_min: 1290,
        monthly_min: 4515,
    },
];

pub fn register() -> CreateCommand {
    CreateCommand::new("ranking")
        .description("Mostra o ranking de horas trabalhadas")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "periodo",
                "Período do ranking (padrão: total)",
            )
            .required(false)
            .add_string_choice("Total", "total")
            .add_string_choice("Semanal", "semanal")
            .add_string_choice("Mensal", "mensal"),
        )
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> serenity::Result<()> {
    let period = command_helpers::find_string_option(command, "periodo")
        .and_then(|value| RankPeriod::from_value(&value))
        .unwrap_or(RankPeriod::Total);

    info!(
        "Ranking ({}) requested by user {}",
        period.value(),
        command.user.id
    );

    let data = CreateInteractionResponseMessage::new()
        .add_embed(ranking_embed(period))
        .components(vec![period_buttons(command.user.id)]);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(data))
        .await
}

/// Period button activation: edits the displayed message in place rather than
/// sending a new one, so re-selecting a period is idempotent.
pub async fn select_period(
    ctx: &Context,
    component: &ComponentInteraction,
    period: RankPeriod,
) -> serenity::Result<()> {
    info!(
        "Ranking switched to {} by user {}",
        period.value(),
        component.user.id
    );

    let data = CreateInteractionResponseMessage::new()
        .add_embed(ranking_embed(period))
        .components(vec![period_buttons(component.user.id)]);

    component
        .create_response(&ctx.http, responses::update_response(data))
        .await
}

fn period_buttons(owner: UserId) -> CreateActionRow {
    let buttons = RankPeriod::ALL
        .iter()
        .map(|period| {
            CreateButton::new(ControlId::new(ControlAction::RankPeriod(*period), owner).encode())
                .label(period.label())
                .style(ButtonStyle::Primary)
        })
        .collect();
    CreateActionRow::Buttons(buttons)
}

fn ranking_embed(period: RankPeriod) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🏆 Ranking de Horas — {}", period.label()))
        .description(ranking_lines(period))
        .colour(0xF1C40F)
        .footer(CreateEmbedFooter::new("Dados de demonstração"))
}

/// Pure: the same period always produces the same lines.
fn ranking_lines(period: RankPeriod) -> String {
    let mut entries: Vec<(&str, u32)> = MOCK_RANKING
        .iter()
        .map(|entry| (entry.name, minutes_for(entry, period)))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
        .iter()
        .enumerate()
        .map(|(index, (name, minutes))| {
            format!(
                "{} **{}** — {}",
                position_marker(index),
                name,
                format_minutes(*minutes)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn minutes_for(entry: &RankingEntry, period: RankPeriod) -> u32 {
    match period {
        RankPeriod::Total => entry.total_min,
        RankPeriod::Semanal => entry.weekly_min,
        RankPeriod::Mensal => entry.monthly_min,
    }
}

fn position_marker(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        other => format!("`{}.`", other + 1),
    }
}

fn format_minutes(minutes: u32) -> String {
    format!("{}h{:02}min", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_period_yields_identical_lines() {
        for period in RankPeriod::ALL {
            assert_eq!(ranking_lines(period), ranking_lines(period));
        }
    }

    #[test]
    fn periods_show_different_figures() {
        assert_ne!(
            ranking_lines(RankPeriod::Total),
            ranking_lines(RankPeriod::Semanal)
        );
        assert_ne!(
            ranking_lines(RankPeriod::Semanal),
            ranking_lines(RankPeriod::Mensal)
        );
        assert_ne!(
            ranking_lines(RankPeriod::Total),
            ranking_lines(RankPeriod::Mensal)
        );
    }

    #[test]
    fn weekly_leader_tops_the_weekly_board() {
        let lines = ranking_lines(RankPeriod::Semanal);
        let first = lines.lines().next().unwrap();
        assert!(first.contains("Bruno Lima"), "got: {}", first);
        assert!(first.starts_with("🥇"));
    }

    #[test]
    fn minutes_format_as_hours_and_minutes() {
        assert_eq!(format_minutes(0), "0h00min");
        assert_eq!(format_minutes(59), "0h59min");
        assert_eq!(format_minutes(60), "1h00min");
        assert_eq!(format_minutes(2145), "35h45min");
    }
}
