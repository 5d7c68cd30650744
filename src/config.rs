use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use serenity::model::id::{ApplicationId, GuildId};
use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://ponto-api.example.com";
pub const DEFAULT_HTTP_PORT: u16 = 10000;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub application_id: ApplicationId,
    /// When set, slash commands are pushed to this guild only (near-instant
    /// propagation). Otherwise they are registered globally.
    pub guild_id: Option<GuildId>,
    pub api_base_url: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        let raw_token = std::env::var("DISCORD_TOKEN")
            .map_err(|_| anyhow!("DISCORD_TOKEN environment variable is required"))?;
        let token = clean_token(&raw_token);
        if token.is_empty() {
            return Err(anyhow!("DISCORD_TOKEN is empty after cleaning"));
        }

        let application_id = match std::env::var("APPLICATION_ID") {
            Ok(raw) => parse_id(raw.trim())
                .map(ApplicationId::new)
                .ok_or_else(|| anyhow!("APPLICATION_ID is not a valid snowflake: {:?}", raw))?,
            Err(_) => {
                let id = application_id_from_token(&token).ok_or_else(|| {
                    anyhow!("APPLICATION_ID is not set and could not be derived from the token")
                })?;
                debug!("Derived application id {} from token", id);
                ApplicationId::new(id)
            }
        };

        // A bad guild id only costs fast command propagation, so fall back to
        // global registration instead of failing startup.
        let guild_id = match std::env::var("GUILD_ID") {
            Ok(raw) if !raw.trim().is_empty() => match parse_id(raw.trim()) {
                Some(id) => Some(GuildId::new(id)),
                None => {
                    warn!("GUILD_ID is not a valid snowflake, registering commands globally");
                    None
                }
            },
            _ => None,
        };

        let api_base_url = std::env::var("API_BASE_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            token,
            application_id,
            guild_id,
            api_base_url,
        })
    }
}

/// Reads the HTTP listener port. Independent of [`BotConfig`] because the
/// hosting platform requires the port to be bound even when the rest of the
/// configuration is broken.
pub fn http_port_from_env() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}

/// Strips the decorations hosting dashboards tend to add to a pasted token:
/// surrounding whitespace, surrounding quotes, and a leading `Bot ` prefix.
pub fn clean_token(raw: &str) -> String {
    let mut token = raw.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = token
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            token = inner.trim();
        }
    }
    token.strip_prefix("Bot ").unwrap_or(token).trim().to_string()
}

/// The first dot-separated segment of a bot token is the base64-encoded
/// application id.
pub fn application_id_from_token(token: &str) -> Option<u64> {
    let segment = token.split('.').next()?.trim_end_matches('=');
    let decoded = STANDARD_NO_PAD.decode(segment).ok()?;
    let id = String::from_utf8(decoded).ok()?;
    parse_id(&id)
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD_NO_PAD;
    use base64::Engine as _;

    #[test]
    fn clean_token_strips_quotes_and_prefix() {
        assert_eq!(clean_token("  abc.def.ghi  "), "abc.def.ghi");
        assert_eq!(clean_token("\"abc.def.ghi\""), "abc.def.ghi");
        assert_eq!(clean_token("'abc.def.ghi'"), "abc.def.ghi");
        assert_eq!(clean_token("Bot abc.def.ghi"), "abc.def.ghi");
        assert_eq!(clean_token(" \"Bot abc.def.ghi\" "), "abc.def.ghi");
    }

    #[test]
    fn clean_token_handles_empty_input() {
        assert_eq!(clean_token(""), "");
        assert_eq!(clean_token("  \"\"  "), "");
    }

    #[test]
    fn derives_application_id_from_token() {
        let encoded = STANDARD_NO_PAD.encode("123456789012345678");
        let token = format!("{}.X1y2Z3.abcdefghijklmnop", encoded);
        assert_eq!(application_id_from_token(&token), Some(123456789012345678));
    }

    #[test]
    fn derivation_rejects_garbage_tokens() {
        assert_eq!(application_id_from_token("not-base64!!!.x.y"), None);
        let encoded = STANDARD_NO_PAD.encode("not-a-number");
        assert_eq!(application_id_from_token(&format!("{}.x.y", encoded)), None);
        assert_eq!(application_id_from_token(""), None);
    }

    #[test]
    fn derivation_tolerates_padding() {
        // 17 digits encode with trailing '=' under the padded engine.
        let encoded = base64::engine::general_purpose::STANDARD.encode("12345678901234567");
        assert!(encoded.ends_with('='));
        let token = format!("{}.x.y", encoded);
        assert_eq!(application_id_from_token(&token), Some(12345678901234567));
    }
}
