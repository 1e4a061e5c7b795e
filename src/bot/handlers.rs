//! Command and callback handlers
//!
//! Thin dispatch over the statistics client and the formatters. Every
//! query result passes the same emptiness guard before a formatter runs;
//! degraded results are logged and collapse to the same friendly reply the
//! user would get for a legitimately empty answer.

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, InputFile, InputMedia, InputMediaPhoto, MessageId,
    ParseMode,
};
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};
use url::Url;

use super::actions::{self, Action};
use super::pagination;
use crate::constants::{links, media, messages};
use crate::error::BotError;
use crate::format::{self, PhotoCard};
use crate::stats::models::roster_players;
use crate::stats::{QueryData, StatsClient};

pub type HandlerResult = Result<(), BotError>;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Comandos disponíveis:")]
pub enum Command {
    #[command(description = "abre o menu principal.")]
    Start,
    #[command(description = "abre o menu principal.")]
    Menu,
    #[command(description = "manda uma curiosidade da FURIA.")]
    Curiosidade,
}

/// Builds the dptree handler for the dispatcher: commands, a free-text
/// fallback and the callback branch.
pub fn handler_tree() -> UpdateHandler<BotError> {
    let message_handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::endpoint(handle_text));

    let callback_handler = Update::filter_callback_query().endpoint(handle_callback);

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> HandlerResult {
    match cmd {
        Command::Start | Command::Menu => send_main_menu(&bot, &msg).await,
        Command::Curiosidade => {
            bot.send_message(msg.chat.id, format::random_trivia()).await?;
            Ok(())
        }
    }
}

/// Free text outside the known commands gets a gentle pointer to /start.
async fn handle_text(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, messages::USE_START_HINT)
        .await?;
    Ok(())
}

async fn handle_callback(bot: Bot, stats: Arc<StatsClient>, q: CallbackQuery) -> HandlerResult {
    // Acknowledge the tap before producing the reply.
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };
    let chat_id = message.chat.id;
    debug!("Callback from chat {}: {}", chat_id, data);

    match Action::parse(data) {
        Action::LastMatch => reply_last_match(&bot, &stats, chat_id).await,
        Action::UpcomingMatches => reply_upcoming(&bot, &stats, chat_id).await,
        Action::LiveMatch => reply_live(&bot, &stats, chat_id).await,
        Action::Roster => reply_roster_page(&bot, &stats, chat_id, None, 0).await,
        Action::RosterPage(index) => {
            reply_roster_page(&bot, &stats, chat_id, Some(message.id), index).await
        }
        Action::Trivia => {
            bot.send_message(chat_id, format::random_trivia()).await?;
            Ok(())
        }
        Action::Unknown => {
            bot.send_message(chat_id, messages::UNKNOWN_ACTION).await?;
            Ok(())
        }
    }
}

/// The main menu photo card with the inline action keyboard and the
/// community links.
async fn send_main_menu(bot: &Bot, msg: &Message) -> HandlerResult {
    let first_name = msg
        .from()
        .map(|user| user.first_name.clone())
        .unwrap_or_else(|| "fã".to_string());

    let caption = format!(
        "🔥 Bem-vindo à nação FURIA, {first_name}! 🔥\n\
         👉 [Explora o universo FURIA no nosso site]({site})\n\
         👉 [Junta-te à comunidade no Discord]({discord})\n\
         👉 [Segue a gente no Instagram]({instagram})\n\
         Escolhe uma das opções abaixo e bora pro próximo level 🦾",
        site = links::SITE,
        discord = links::DISCORD,
        instagram = links::INSTAGRAM,
    );

    info!("Sending main menu to chat {}", msg.chat.id);
    send_photo_card(
        bot,
        msg.chat.id,
        &PhotoCard {
            caption,
            image_url: Some(media::MENU_BANNER_URL.to_string()),
        },
        Some(main_menu_keyboard()),
    )
    .await
}

fn main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "Última partida da FURIA 🐈‍⬛",
            actions::MENU_LAST_MATCH,
        )],
        vec![InlineKeyboardButton::callback(
            "📅 Próximas partidas",
            actions::MENU_UPCOMING,
        )],
        vec![InlineKeyboardButton::callback(
            "🔴 Partida ao vivo",
            actions::MENU_LIVE,
        )],
        vec![InlineKeyboardButton::callback(
            "👥 Elenco completo",
            actions::MENU_ROSTER,
        )],
        vec![InlineKeyboardButton::callback(
            "🎲 Curiosidade",
            actions::MENU_TRIVIA,
        )],
    ])
}

/// The uniform emptiness guard: logs degradation and hands back the
/// records only when there is something to format.
fn usable_records(data: QueryData, what: &str) -> Option<Vec<serde_json::Value>> {
    if data.is_degraded() {
        warn!("Serving {} from degraded data (upstream unavailable)", what);
    }
    if data.is_empty() {
        None
    } else {
        Some(data.into_records())
    }
}

async fn reply_last_match(bot: &Bot, stats: &StatsClient, chat_id: ChatId) -> HandlerResult {
    let Some(records) = usable_records(stats.last_match().await, "last match") else {
        bot.send_message(chat_id, messages::NOT_AVAILABLE).await?;
        return Ok(());
    };

    match format::last_match(&records) {
        Some(card) => send_photo_card(bot, chat_id, &card, None).await,
        None => {
            bot.send_message(chat_id, messages::NOT_AVAILABLE).await?;
            Ok(())
        }
    }
}

async fn reply_upcoming(bot: &Bot, stats: &StatsClient, chat_id: ChatId) -> HandlerResult {
    let data = stats.upcoming_matches().await;
    if data.is_degraded() {
        warn!("Serving upcoming matches from degraded data (upstream unavailable)");
    }
    // An empty list is a legitimate answer here and has its own fixed
    // message, produced by the formatter.
    let text = format::upcoming_matches(data.records());
    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}

async fn reply_live(bot: &Bot, stats: &StatsClient, chat_id: ChatId) -> HandlerResult {
    let Some(records) = usable_records(stats.live_match().await, "live match") else {
        bot.send_message(chat_id, messages::NOT_AVAILABLE).await?;
        return Ok(());
    };

    match format::live_match(&records) {
        Some(text) => {
            bot.send_message(chat_id, text)
                .parse_mode(ParseMode::Markdown)
                .await?;
            Ok(())
        }
        None => {
            bot.send_message(chat_id, messages::NOT_AVAILABLE).await?;
            Ok(())
        }
    }
}

/// Sends (or edits in place, for pagination taps) one roster page. The
/// requested index is validated against the roster that is current *now*;
/// a stale cursor gets an explanation instead of an out-of-range access.
async fn reply_roster_page(
    bot: &Bot,
    stats: &StatsClient,
    chat_id: ChatId,
    edit_target: Option<MessageId>,
    index: usize,
) -> HandlerResult {
    let data = stats.roster().await;
    if data.is_degraded() {
        warn!("Serving roster from degraded data (upstream unavailable)");
    }

    let players = roster_players(data.records());
    if players.is_empty() {
        bot.send_message(chat_id, messages::NOT_AVAILABLE).await?;
        return Ok(());
    }
    if index >= players.len() {
        warn!(
            "Roster page {} requested but roster has {} players",
            index,
            players.len()
        );
        bot.send_message(chat_id, messages::ROSTER_PAGE_GONE).await?;
        return Ok(());
    }

    let card = format::player_page(&players[index], index, players.len());
    let keyboard = pagination::roster_keyboard(index, players.len());

    match edit_target {
        Some(message_id) => {
            edit_photo_card(bot, chat_id, message_id, &card, keyboard).await
        }
        None => send_photo_card(bot, chat_id, &card, Some(keyboard)).await,
    }
}

/// Sends a photo card, degrading to a plain text message when the image
/// URL is absent or unparseable.
async fn send_photo_card(
    bot: &Bot,
    chat_id: ChatId,
    card: &PhotoCard,
    keyboard: Option<InlineKeyboardMarkup>,
) -> HandlerResult {
    match parsed_image_url(card) {
        Some(url) => {
            let mut request = bot
                .send_photo(chat_id, InputFile::url(url))
                .caption(card.caption.clone())
                .parse_mode(ParseMode::Markdown);
            if let Some(markup) = keyboard {
                request = request.reply_markup(markup);
            }
            request.await?;
        }
        None => {
            let mut request = bot
                .send_message(chat_id, card.caption.clone())
                .parse_mode(ParseMode::Markdown);
            if let Some(markup) = keyboard {
                request = request.reply_markup(markup);
            }
            request.await?;
        }
    }
    Ok(())
}

/// Swaps the media, caption and keyboard of an existing message. Used by
/// roster pagination to page in place instead of flooding the chat. Falls
/// back to sending a fresh message when the edit is rejected (e.g. the
/// original message was deleted).
async fn edit_photo_card(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    card: &PhotoCard,
    keyboard: InlineKeyboardMarkup,
) -> HandlerResult {
    let Some(url) = parsed_image_url(card) else {
        return send_photo_card(bot, chat_id, card, Some(keyboard)).await;
    };

    let media = InputMedia::Photo(
        InputMediaPhoto::new(InputFile::url(url))
            .caption(card.caption.clone())
            .parse_mode(ParseMode::Markdown),
    );

    let edit = bot
        .edit_message_media(chat_id, message_id, media)
        .reply_markup(keyboard.clone())
        .await;

    if let Err(e) = edit {
        warn!("Failed to edit roster message, sending a new one: {e}");
        send_photo_card(bot, chat_id, card, Some(keyboard)).await?;
    }
    Ok(())
}

fn parsed_image_url(card: &PhotoCard) -> Option<Url> {
    card.image_url.as_deref().and_then(|raw| Url::parse(raw).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_main_menu_keyboard_covers_every_action() {
        let keyboard = main_menu_keyboard();
        let datas: Vec<String> = keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|button| match &button.kind {
                teloxide::types::InlineKeyboardButtonKind::CallbackData(data) => {
                    Some(data.clone())
                }
                _ => None,
            })
            .collect();

        for action in [
            actions::MENU_LAST_MATCH,
            actions::MENU_UPCOMING,
            actions::MENU_LIVE,
            actions::MENU_ROSTER,
            actions::MENU_TRIVIA,
        ] {
            assert!(datas.iter().any(|d| d == action), "missing {action}");
        }
        // Every menu button parses into a known action.
        for data in &datas {
            assert_ne!(Action::parse(data), Action::Unknown);
        }
    }

    #[test]
    fn test_usable_records_guard() {
        let records = vec![json!({"id": 1})];

        let available = QueryData::Available(records.clone());
        assert_eq!(usable_records(available, "test"), Some(records.clone()));

        let degraded_with_stale = QueryData::Degraded(records.clone());
        assert_eq!(usable_records(degraded_with_stale, "test"), Some(records));

        assert_eq!(usable_records(QueryData::Available(vec![]), "test"), None);
        assert_eq!(usable_records(QueryData::Degraded(vec![]), "test"), None);
    }

    #[test]
    fn test_parsed_image_url_rejects_garbage() {
        let card = PhotoCard {
            caption: "caption".to_string(),
            image_url: Some("not a url".to_string()),
        };
        assert!(parsed_image_url(&card).is_none());

        let card = PhotoCard {
            caption: "caption".to_string(),
            image_url: Some("http://x/logo.png".to_string()),
        };
        assert!(parsed_image_url(&card).is_some());

        let card = PhotoCard {
            caption: "caption".to_string(),
            image_url: None,
        };
        assert!(parsed_image_url(&card).is_none());
    }
}
