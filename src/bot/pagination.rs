//! Roster pagination
//!
//! There is no server-side session between taps: the cursor is the page
//! index encoded into the `player_<index>` callback identifier. This module
//! derives the navigation affordances from `(index, total)` and renders
//! them as inline keyboards.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use super::actions::ROSTER_PAGE_PREFIX;

/// Neighbor targets for the current page. `None` is the disabled/no-op
/// sentinel at a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Derives previous/next targets from the current index and the list
/// length. Out-of-range inputs (including `total == 0`) disable both
/// directions.
pub fn navigation(index: usize, total: usize) -> Navigation {
    if index >= total {
        return Navigation {
            prev: None,
            next: None,
        };
    }
    Navigation {
        prev: index.checked_sub(1),
        next: (index + 1 < total).then(|| index + 1),
    }
}

/// Callback identifier carrying the cursor for `index`.
pub fn page_callback(index: usize) -> String {
    format!("{ROSTER_PAGE_PREFIX}{index}")
}

/// Builds the navigation keyboard for a roster page. Boundary directions
/// are simply absent; the keyboard row disappears entirely for a
/// single-player roster.
pub fn roster_keyboard(index: usize, total: usize) -> InlineKeyboardMarkup {
    let nav = navigation(index, total);
    let mut row = Vec::new();

    if let Some(prev) = nav.prev {
        row.push(InlineKeyboardButton::callback(
            "⬅️ Anterior",
            page_callback(prev),
        ));
    }
    if let Some(next) = nav.next {
        row.push(InlineKeyboardButton::callback(
            "Próximo ➡️",
            page_callback(next),
        ));
    }

    if row.is_empty() {
        InlineKeyboardMarkup::new(Vec::<Vec<InlineKeyboardButton>>::new())
    } else {
        InlineKeyboardMarkup::new(vec![row])
    }
}
