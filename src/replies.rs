//! Every text the bot sends back to a chat.

use std::collections::HashMap;

use crate::error::{GameError, ValidationError};
use crate::game::{Game, PlayerId};

pub const WELCOME: &str = "🎮 **Chào mừng đến với Vua Tiếng Việt!**\n\n\
    🔹 /newgame - Bắt đầu trò chơi mới\n\
    🔹 /join - Tham gia trò chơi\n\
    🔹 /current - Xem từ hiện tại\n\
    🔹 /score - Xem bảng điểm\n\
    🔹 /endgame - Kết thúc trò chơi\n\n\
    Nhập một từ hợp lệ trong tiếng Việt để chơi! \
    Từ tiếp theo phải bắt đầu bằng chữ cái cuối của từ trước.";

pub const GAME_STARTED: &str = "🆕 Trò mới đã bắt đầu! Dùng /join để tham gia!";

pub const NO_ACTIVE_GAME: &str = "⚠️ Chưa có trò chơi nào. Gõ /newgame để bắt đầu.";

pub const NO_CURRENT_WORD: &str = "📜 Chưa có từ nào. Nhập từ đầu tiên để bắt đầu!";

pub const NO_SCORES: &str = "📊 Chưa có ai ghi điểm.";

pub const GENERIC_FAILURE: &str = "😵 Có lỗi xảy ra, vui lòng thử lại sau.";

pub fn joined(name: &str) -> String {
    format!("✅ {name} đã tham gia trò chơi!")
}

pub fn already_joined(name: &str) -> String {
    format!("ℹ️ {name} đã ở trong trò chơi rồi.")
}

pub fn current_word(word: Option<&str>) -> String {
    match word {
        Some(word) => format!("Từ hiện tại là: **{word}**"),
        None => NO_CURRENT_WORD.to_string(),
    }
}

pub fn accepted(name: &str, word: &str, score: u32) -> String {
    format!("✅ {name} +1 điểm! (tổng: {score})\nTừ mới: **{word}**")
}

pub fn rejected(error: &GameError) -> String {
    match error {
        GameError::NoActiveGame => NO_ACTIVE_GAME.to_string(),
        GameError::Invalid(ValidationError::NotInDictionary(word)) => {
            format!("❌ '{word}' không có trong từ điển!")
        }
        GameError::Invalid(ValidationError::WrongStartLetter { word, expected, .. }) => {
            format!("⚠️ Từ '{word}' phải bắt đầu bằng chữ '{expected}'!")
        }
    }
}

/// Render `(rank, display name, score)` rows. Empty input means nobody
/// has scored yet.
pub fn leaderboard<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (usize, &'a str, u32)>,
{
    let lines: Vec<String> = rows
        .into_iter()
        .map(|(rank, name, score)| format!("{rank}. {name}: {score} điểm"))
        .collect();

    if lines.is_empty() {
        return NO_SCORES.to_string();
    }

    format!("🏆 **Bảng điểm:**\n{}", lines.join("\n"))
}

/// Leaderboard for `game`, or `None` while no word has been credited, even
/// if players have joined. Players missing from `names` show their raw id.
pub fn scoreboard(game: &Game, names: &HashMap<PlayerId, String>) -> Option<String> {
    if !game.has_scores() {
        return None;
    }

    let rows: Vec<(usize, String, u32)> = game
        .leaderboard()
        .into_iter()
        .map(|standing| {
            let name = names
                .get(&standing.player_id)
                .cloned()
                .unwrap_or_else(|| standing.player_id.to_string());
            (standing.rank, name, standing.score)
        })
        .collect();

    Some(leaderboard(
        rows.iter().map(|(rank, name, score)| (*rank, name.as_str(), *score)),
    ))
}

pub fn game_ended(final_standings: Option<String>) -> String {
    match final_standings {
        Some(standings) => format!("🏁 Trò chơi đã kết thúc!\n{standings}"),
        None => "🏁 Trò chơi đã kết thúc!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::SourceSpan;

    #[test]
    fn test_current_word_reply() {
        assert_eq!(current_word(Some("nhà")), "Từ hiện tại là: **nhà**");
        assert_eq!(current_word(None), NO_CURRENT_WORD);
    }

    #[test]
    fn test_leaderboard_reply() {
        let text = leaderboard([(1, "Lan", 3), (2, "Minh", 1)]);
        assert_eq!(text, "🏆 **Bảng điểm:**\n1. Lan: 3 điểm\n2. Minh: 1 điểm");
        assert_eq!(leaderboard(Vec::<(usize, &str, u32)>::new()), NO_SCORES);
    }

    #[test]
    fn test_scoreboard_with_only_joined_players() {
        let mut game = Game::new();
        game.join(1);
        game.join(2);

        let names = HashMap::from([(1, "Lan".to_string()), (2, "Minh".to_string())]);
        assert_eq!(scoreboard(&game, &names), None);
    }

    #[test]
    fn test_scoreboard_falls_back_to_player_id() {
        let mut game = Game::new();
        game.join(1);
        game.record_accepted(2, "nhà".to_string());

        let names = HashMap::from([(1, "Lan".to_string())]);
        assert_eq!(
            scoreboard(&game, &names).as_deref(),
            Some("🏆 **Bảng điểm:**\n1. 2: 1 điểm\n2. Lan: 0 điểm")
        );
    }

    #[test]
    fn test_rejection_replies() {
        let not_found = GameError::Invalid(ValidationError::NotInDictionary("bàn".into()));
        assert_eq!(rejected(&not_found), "❌ 'bàn' không có trong từ điển!");

        let wrong_letter = GameError::Invalid(ValidationError::WrongStartLetter {
            word: "nam".into(),
            span: SourceSpan::from((0, 1)),
            expected: 'à',
        });
        assert_eq!(
            rejected(&wrong_letter),
            "⚠️ Từ 'nam' phải bắt đầu bằng chữ 'à'!"
        );
        assert_eq!(rejected(&GameError::NoActiveGame), NO_ACTIVE_GAME);
    }
}
