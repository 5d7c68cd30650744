use serenity::model::application::{CommandDataOptionValue, CommandInteraction};
use serenity::model::id::UserId;
use serenity::model::Permissions;

/// Extracts an optional string option from a command interaction.
pub fn find_string_option(command: &CommandInteraction, name: &str) -> Option<String> {
    let option = command.data.options.iter().find(|opt| opt.name == name)?;
    match &option.value {
        CommandDataOptionValue::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// Extracts a required user option from a command interaction.
pub fn get_user_option(command: &CommandInteraction, name: &str) -> serenity::Result<UserId> {
    let option = command
        .data
        .options
        .iter()
        .find(|opt| opt.name == name)
        .ok_or(serenity::Error::Other("Missing required argument"))?;

    match option.value {
        CommandDataOptionValue::User(user_id) => Ok(user_id),
        _ => Err(serenity::Error::Other("Argument is not a user")),
    }
}

/// Whether the invoking member holds the administrator permission. Commands
/// used in DMs carry no member, which counts as not an administrator.
pub fn is_administrator(command: &CommandInteraction) -> bool {
    has_administrator(command.member.as_ref().and_then(|member| member.permissions))
}

pub fn has_administrator(permissions: Option<Permissions>) -> bool {
    permissions.is_some_and(|perms| perms.administrator())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn administrator_permission_is_required() {
        assert!(has_administrator(Some(Permissions::ADMINISTRATOR)));
        assert!(has_administrator(Some(
            Permissions::ADMINISTRATOR | Permissions::SEND_MESSAGES
        )));
        assert!(!has_administrator(Some(Permissions::SEND_MESSAGES)));
        assert!(!has_administrator(Some(Permissions::empty())));
        assert!(!has_administrator(None));
    }
}
