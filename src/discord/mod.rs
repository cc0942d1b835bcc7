pub mod commands;

use actix::Actor;
use poise::serenity_prelude as serenity;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{
    actors::{game_store::SubmitWord, GameStoreActor},
    config::Config,
    game::{Game, GameStore, PlayerId},
    replies,
    validation::Dictionary,
    Data, Error, GameError, Result,
};

pub async fn setup_bot(config: Config) -> miette::Result<()> {
    info!("Setting up Discord bot");

    let dictionary = Arc::new(Dictionary::load_or_empty(&config.dictionary_path));
    let store = GameStoreActor::new(GameStore::new(dictionary, config.chain_rule)).start();

    let data = Data {
        store,
        command_prefix: config.command_prefix.clone(),
    };
    let activity = config.bot_activity.clone();

    let options: poise::FrameworkOptions<Data, Error> = poise::FrameworkOptions {
        commands: commands::list(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(config.command_prefix.clone()),
            mention_as_prefix: false,
            ..Default::default()
        },
        on_error: |error| Box::pin(on_error(error)),
        event_handler: |ctx, event, framework, data| {
            Box::pin(handle_event(ctx, event, framework, data))
        },
        ..Default::default()
    };

    let framework = poise::Framework::builder()
        .options(options)
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands)
                    .await
                    .map_err(Error::Discord)?;

                info!("{} is connected!", ready.user.name);
                ctx.set_presence(
                    Some(serenity::ActivityData::playing(&activity)),
                    serenity::OnlineStatus::Online,
                );
                info!("Setting activity to {}", activity);

                Ok(data)
            })
        })
        .build();

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .map_err(Error::Discord)?;

    info!("Starting bot...");
    client.start().await.map_err(Error::Discord)?;

    Ok(())
}

/// Treat plain messages as word submissions
async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<()> {
    let serenity::FullEvent::Message { new_message } = event else {
        return Ok(());
    };

    // Skip messages from bots, including this one
    if new_message.author.bot {
        return Ok(());
    }

    if !is_word_submission(
        &new_message.content,
        &data.command_prefix,
        framework.bot_id.get(),
    ) {
        return Ok(());
    }
    let content = new_message.content.trim();

    let result = data
        .store
        .send(SubmitWord {
            chat_id: new_message.channel_id.get(),
            player_id: new_message.author.id.get(),
            word: content.to_string(),
        })
        .await?;

    let reply = match result {
        Ok(accepted) => replies::accepted(
            new_message.author.display_name(),
            &accepted.word,
            accepted.score,
        ),
        // Ordinary chatter in channels without a game
        Err(GameError::NoActiveGame) => return Ok(()),
        Err(e) => {
            debug!("Word '{}' rejected: {}", content, e);
            replies::rejected(&e)
        }
    };

    new_message.reply(ctx, reply).await?;

    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Command '{}' failed: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(replies::GENERIC_FAILURE).await {
                error!("Failed to report command failure: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Name shown for a player. Falls back to the raw user id when the lookup
/// fails, e.g. because the player has left the server.
pub async fn display_name(
    ctx: &serenity::Context,
    guild_id: Option<serenity::GuildId>,
    player_id: PlayerId,
) -> String {
    let user_id = serenity::UserId::new(player_id);

    let lookup = match guild_id {
        Some(guild_id) => guild_id
            .member(ctx, user_id)
            .await
            .map(|member| member.display_name().to_string()),
        None => user_id
            .to_user(ctx)
            .await
            .map(|user| user.display_name().to_string()),
    };

    lookup.unwrap_or_else(|e| {
        warn!("Could not resolve display name for {}: {}", player_id, e);
        player_id.to_string()
    })
}

/// Leaderboard text for a game, or `None` when nobody has scored.
/// Names are resolved before rendering; nothing is looked up for an unscored game.
pub async fn render_leaderboard(
    ctx: &serenity::Context,
    guild_id: Option<serenity::GuildId>,
    game: &Game,
) -> Option<String> {
    if !game.has_scores() {
        return None;
    }

    let mut names = HashMap::new();
    for standing in game.leaderboard() {
        let name = display_name(ctx, guild_id, standing.player_id).await;
        names.insert(standing.player_id, name);
    }

    replies::scoreboard(game, &names)
}

/// Whether a chat message should be played as a word. Commands, whether
/// prefixed or addressed to the bot by mention, are not words.
pub fn is_word_submission(content: &str, command_prefix: &str, bot_id: u64) -> bool {
    let content = content.trim();
    if content.is_empty() || content.starts_with(command_prefix) || content.starts_with('/') {
        return false;
    }

    let mention = format!("<@{bot_id}>");
    let nick_mention = format!("<@!{bot_id}>");
    !(content.starts_with(&mention) || content.starts_with(&nick_mention))
}
