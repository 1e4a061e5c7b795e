//! Roster page formatting

use serde_json::Value;

use super::PhotoCard;
use crate::constants::{media, messages};
use crate::stats::models::player_view;

/// Renders one roster page: the player at `index` out of `total`, with the
/// placeholder string for every absent field and the placeholder portrait
/// when the record has no image.
pub fn player_page(player: &Value, index: usize, total: usize) -> PhotoCard {
    let view = player_view(player);

    let name = view
        .name
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string());
    let age = view
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string());
    let nationality = view
        .nationality
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string());
    let birthday = view
        .birthday
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string());

    let caption = format!(
        "🐈‍⬛ Elenco FURIA — jogador {page} de {total}\n\n\
         👤 Nome: {name}\n\
         🎂 Idade: {age}\n\
         🌎 Nacionalidade: {nationality}\n\
         📅 Nascimento: {birthday}\n\n\
         #FURIA | #CS2",
        page = index + 1,
    );

    PhotoCard {
        caption,
        image_url: Some(
            view.image_url
                .unwrap_or_else(|| media::PLAYER_PLACEHOLDER_URL.to_string()),
        ),
    }
}
