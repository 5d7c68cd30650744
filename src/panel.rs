use serenity::model::id::UserId;

/// Ranking window selectable from the panel buttons or the `periodo` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankPeriod {
    Total,
    Semanal,
    Mensal,
}

impl RankPeriod {
    pub const ALL: [RankPeriod; 3] = [RankPeriod::Total, RankPeriod::Semanal, RankPeriod::Mensal];

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "total" => Some(RankPeriod::Total),
            "semanal" => Some(RankPeriod::Semanal),
            "mensal" => Some(RankPeriod::Mensal),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            RankPeriod::Total => "total",
            RankPeriod::Semanal => "semanal",
            RankPeriod::Mensal => "mensal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RankPeriod::Total => "Total",
            RankPeriod::Semanal => "Semanal",
            RankPeriod::Mensal => "Mensal",
        }
    }
}

/// Action encoded in a panel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Pause,
    Finish,
    RankPeriod(RankPeriod),
}

impl ControlAction {
    fn as_str(self) -> &'static str {
        match self {
            ControlAction::Start => "start",
            ControlAction::Pause => "pause",
            ControlAction::Finish => "finish",
            ControlAction::RankPeriod(RankPeriod::Total) => "rank_total",
            ControlAction::RankPeriod(RankPeriod::Semanal) => "rank_semanal",
            ControlAction::RankPeriod(RankPeriod::Mensal) => "rank_mensal",
        }
    }

    fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "start" => Some(ControlAction::Start),
            "pause" => Some(ControlAction::Pause),
            "finish" => Some(ControlAction::Finish),
            _ => raw
                .strip_prefix("rank_")
                .and_then(RankPeriod::from_value)
                .map(ControlAction::RankPeriod),
        }
    }
}

/// Key embedded in a button's `custom_id`, wire shape `"{action}_{originatorId}"`.
///
/// It is built when a panel is displayed and round-tripped by Discord inside
/// the component itself, so the bot keeps no panel state of its own. Only the
/// originating user may activate the control it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlId {
    pub action: ControlAction,
    pub originator: UserId,
}

impl ControlId {
    pub fn new(action: ControlAction, originator: UserId) -> Self {
        Self { action, originator }
    }

    pub fn encode(&self) -> String {
        format!("{}_{}", self.action.as_str(), self.originator)
    }

    /// Parses the exact `"{action}_{originatorId}"` shape. Anything else
    /// yields `None`, which callers treat as "no originator match".
    pub fn parse(raw: &str) -> Option<Self> {
        let (action, originator) = raw.rsplit_once('_')?;
        let originator = originator.parse::<u64>().ok().filter(|id| *id != 0)?;
        Some(Self {
            action: ControlAction::from_str(action)?,
            originator: UserId::new(originator),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_id_round_trips() {
        let user = UserId::new(123456789012345678);
        for action in [
            ControlAction::Start,
            ControlAction::Pause,
            ControlAction::Finish,
            ControlAction::RankPeriod(RankPeriod::Total),
            ControlAction::RankPeriod(RankPeriod::Semanal),
            ControlAction::RankPeriod(RankPeriod::Mensal),
        ] {
            let id = ControlId::new(action, user);
            assert_eq!(ControlId::parse(&id.encode()), Some(id));
        }
    }

    #[test]
    fn parse_accepts_known_shapes() {
        let parsed = ControlId::parse("start_42").unwrap();
        assert_eq!(parsed.action, ControlAction::Start);
        assert_eq!(parsed.originator, UserId::new(42));

        let parsed = ControlId::parse("rank_mensal_42").unwrap();
        assert_eq!(parsed.action, ControlAction::RankPeriod(RankPeriod::Mensal));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(ControlId::parse(""), None);
        assert_eq!(ControlId::parse("start"), None);
        assert_eq!(ControlId::parse("start_"), None);
        assert_eq!(ControlId::parse("start_abc"), None);
        assert_eq!(ControlId::parse("start_0"), None);
        assert_eq!(ControlId::parse("dance_42"), None);
        assert_eq!(ControlId::parse("rank_anual_42"), None);
        assert_eq!(ControlId::parse("_42"), None);
    }

    #[test]
    fn period_values_round_trip() {
        for period in RankPeriod::ALL {
            assert_eq!(RankPeriod::from_value(period.value()), Some(period));
        }
        assert_eq!(RankPeriod::from_value("anual"), None);
    }
}
