use tracing::{info, instrument};

use crate::actors::game_store::{CreateGame, DeleteGame, GetGame, JoinGame};
use crate::discord::render_leaderboard;
use crate::game::Game;
use crate::{replies, Context, Data, Error, Result};

pub fn list() -> Vec<poise::Command<Data, Error>> {
    vec![start(), help(), new_game(), join(), current(), score(), end_game()]
}

/// welcome message and rules
#[instrument(skip_all)]
#[poise::command(slash_command, prefix_command)]
pub async fn start(ctx: Context<'_>) -> Result<()> {
    ctx.say(replies::WELCOME).await?;
    Ok(())
}

/// show how to play
#[instrument(skip_all)]
#[poise::command(slash_command, prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<()> {
    ctx.say(replies::WELCOME).await?;
    Ok(())
}

/// start a new game in this channel
#[instrument(skip_all)]
#[poise::command(slash_command, prefix_command, rename = "newgame")]
pub async fn new_game(ctx: Context<'_>) -> Result<()> {
    ctx.data()
        .store
        .send(CreateGame {
            chat_id: ctx.channel_id().get(),
        })
        .await?;

    info!("{} started a new game", ctx.author().name);
    ctx.say(replies::GAME_STARTED).await?;
    Ok(())
}

/// join the game in this channel
#[instrument(skip_all)]
#[poise::command(slash_command, prefix_command)]
pub async fn join(ctx: Context<'_>) -> Result<()> {
    let result = ctx
        .data()
        .store
        .send(JoinGame {
            chat_id: ctx.channel_id().get(),
            player_id: ctx.author().id.get(),
        })
        .await?;

    let name = ctx.author().display_name();
    let reply = match result {
        Ok(true) => replies::joined(name),
        Ok(false) => replies::already_joined(name),
        Err(e) => replies::rejected(&e),
    };

    ctx.say(reply).await?;
    Ok(())
}

/// show the word the next one has to follow
#[instrument(skip_all)]
#[poise::command(slash_command, prefix_command)]
pub async fn current(ctx: Context<'_>) -> Result<()> {
    let game = ctx
        .data()
        .store
        .send(GetGame {
            chat_id: ctx.channel_id().get(),
        })
        .await?;

    ctx.say(replies::current_word(
        game.as_ref().and_then(Game::current_word),
    ))
    .await?;
    Ok(())
}

/// show the leaderboard
#[instrument(skip_all)]
#[poise::command(slash_command, prefix_command)]
pub async fn score(ctx: Context<'_>) -> Result<()> {
    let game = ctx
        .data()
        .store
        .send(GetGame {
            chat_id: ctx.channel_id().get(),
        })
        .await?;

    let reply = match game {
        None => replies::NO_ACTIVE_GAME.to_string(),
        Some(game) => render_leaderboard(ctx.serenity_context(), ctx.guild_id(), &game)
            .await
            .unwrap_or_else(|| replies::NO_SCORES.to_string()),
    };

    ctx.say(reply).await?;
    Ok(())
}

/// end the game in this channel
#[instrument(skip_all)]
#[poise::command(slash_command, prefix_command, rename = "endgame")]
pub async fn end_game(ctx: Context<'_>) -> Result<()> {
    let ended = ctx
        .data()
        .store
        .send(DeleteGame {
            chat_id: ctx.channel_id().get(),
        })
        .await?;

    let reply = match ended {
        None => replies::NO_ACTIVE_GAME.to_string(),
        Some(game) => replies::game_ended(
            render_leaderboard(ctx.serenity_context(), ctx.guild_id(), &game).await,
        ),
    };

    ctx.say(reply).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_is_its_own_slash_command() {
        let commands = list();
        let command = commands
            .iter()
            .find(|command| command.name == "help")
            .expect("help command registered");

        assert!(command.slash_action.is_some());
        assert!(command.prefix_action.is_some());
    }

    #[test]
    fn test_command_names() {
        let names: Vec<_> = list().into_iter().map(|command| command.name).collect();
        assert_eq!(
            names,
            ["start", "help", "newgame", "join", "current", "score", "endgame"]
        );
    }
}
