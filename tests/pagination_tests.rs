//! Pagination boundary properties and cursor round-tripping

use furia_fanbot::bot::pagination::{navigation, page_callback, roster_keyboard};
use furia_fanbot::bot::Action;

#[test]
fn first_page_disables_previous_for_any_roster_size() {
    for total in 1..=10 {
        let nav = navigation(0, total);
        assert_eq!(nav.prev, None, "total={total}");
    }
}

#[test]
fn last_page_disables_next_for_any_roster_size() {
    for total in 1..=10 {
        let nav = navigation(total - 1, total);
        assert_eq!(nav.next, None, "total={total}");
    }
}

#[test]
fn interior_pages_have_both_neighbors() {
    let total = 8;
    for index in 1..total - 1 {
        let nav = navigation(index, total);
        assert_eq!(nav.prev, Some(index - 1));
        assert_eq!(nav.next, Some(index + 1));
    }
}

#[test]
fn cursor_survives_the_callback_round_trip() {
    // The cursor lives entirely inside the callback identifier; whatever
    // the keyboard encodes must parse back to the same page.
    for index in 0..20 {
        let action = Action::parse(&page_callback(index));
        assert_eq!(action, Action::RosterPage(index));
    }
}

#[test]
fn keyboard_encodes_the_neighbor_targets() {
    let keyboard = roster_keyboard(3, 5);
    let datas: Vec<String> = keyboard
        .inline_keyboard
        .iter()
        .flatten()
        .filter_map(|button| match &button.kind {
            teloxide::types::InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(datas, vec![page_callback(2), page_callback(4)]);
}

#[test]
fn boundary_keyboards_omit_the_disabled_direction() {
    let first = roster_keyboard(0, 3);
    assert_eq!(first.inline_keyboard[0].len(), 1);

    let last = roster_keyboard(2, 3);
    assert_eq!(last.inline_keyboard[0].len(), 1);

    let only = roster_keyboard(0, 1);
    assert!(only.inline_keyboard.is_empty());
}
