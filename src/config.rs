use dotenvy::dotenv;
use std::env;
use tracing::info;

use crate::validation::ChainRule;
use crate::Error;

pub struct Config {
    pub discord_token: String,
    pub dictionary_path: String,
    pub bot_activity: String,
    pub command_prefix: String,
    pub chain_rule: ChainRule,
}

pub fn load_config() -> miette::Result<Config> {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    let discord_token = env::var("DISCORD_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| Error::Config("Missing DISCORD_TOKEN".to_string()))?;

    let dictionary_path =
        env::var("DICTIONARY_FILE_PATH").unwrap_or_else(|_| "./vietlex_words.txt".to_string());

    let bot_activity = env::var("BOT_ACTIVITY").unwrap_or_else(|_| "Vua Tiếng Việt".to_string());

    // An empty prefix would swallow every word submission
    let command_prefix = env::var("COMMAND_PREFIX")
        .ok()
        .filter(|prefix| !prefix.trim().is_empty())
        .unwrap_or_else(|| "!".to_string());

    let chain_rule = parse_chain_rule(env::var("CHAIN_RULE").ok().as_deref())?;

    Ok(Config {
        discord_token,
        dictionary_path,
        bot_activity,
        command_prefix,
        chain_rule,
    })
}

fn parse_chain_rule(value: Option<&str>) -> Result<ChainRule, Error> {
    match value {
        None => Ok(ChainRule::default()),
        Some(value) => value
            .parse()
            .map_err(|e| Error::Config(format!("Invalid CHAIN_RULE: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_rule_defaults_to_last_character() {
        assert_eq!(parse_chain_rule(None).unwrap(), ChainRule::LastCharacter);
    }

    #[test]
    fn test_chain_rule_parsing() {
        assert_eq!(
            parse_chain_rule(Some("last-alphabetic")).unwrap(),
            ChainRule::LastAlphabetic
        );
        assert!(matches!(
            parse_chain_rule(Some("random")),
            Err(Error::Config(_))
        ));
    }
}
