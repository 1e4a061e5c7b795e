//! Inline-button action identifiers
//!
//! Callback data is an opaque string round-tripped through Telegram; this
//! module owns the closed set of identifiers and the parse back into a
//! tagged enum. `player_<index>` is the one parameterized action.

/// Callback identifier for the last-match button.
pub const MENU_LAST_MATCH: &str = "menu_last_match";
/// Callback identifier for the upcoming-matches button.
pub const MENU_UPCOMING: &str = "menu_upcoming";
/// Callback identifier for the live-match button.
pub const MENU_LIVE: &str = "menu_live";
/// Callback identifier for the roster button.
pub const MENU_ROSTER: &str = "menu_roster";
/// Callback identifier for the trivia button.
pub const MENU_TRIVIA: &str = "menu_trivia";
/// Prefix for roster page navigation; the suffix is the page index.
pub const ROSTER_PAGE_PREFIX: &str = "player_";

/// The closed set of actions a button tap can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LastMatch,
    UpcomingMatches,
    LiveMatch,
    Roster,
    /// Jump to a specific roster page. The index still has to be validated
    /// against the current roster length at dispatch time.
    RosterPage(usize),
    Trivia,
    /// Anything that does not match the enumeration above.
    Unknown,
}

impl Action {
    /// Parses callback data into an action. Malformed `player_` suffixes
    /// (non-numeric, negative, overflow) map to `Unknown` rather than a
    /// guessed page.
    pub fn parse(data: &str) -> Action {
        match data {
            MENU_LAST_MATCH => Action::LastMatch,
            MENU_UPCOMING => Action::UpcomingMatches,
            MENU_LIVE => Action::LiveMatch,
            MENU_ROSTER => Action::Roster,
            MENU_TRIVIA => Action::Trivia,
            other => match other.strip_prefix(ROSTER_PAGE_PREFIX) {
                Some(index) => index
                    .parse::<usize>()
                    .map(Action::RosterPage)
                    .unwrap_or(Action::Unknown),
                None => Action::Unknown,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_actions() {
        assert_eq!(Action::parse(MENU_LAST_MATCH), Action::LastMatch);
        assert_eq!(Action::parse(MENU_UPCOMING), Action::UpcomingMatches);
        assert_eq!(Action::parse(MENU_LIVE), Action::LiveMatch);
        assert_eq!(Action::parse(MENU_ROSTER), Action::Roster);
        assert_eq!(Action::parse(MENU_TRIVIA), Action::Trivia);
    }

    #[test]
    fn test_parse_roster_page_with_valid_index() {
        assert_eq!(Action::parse("player_0"), Action::RosterPage(0));
        assert_eq!(Action::parse("player_3"), Action::RosterPage(3));
        assert_eq!(Action::parse("player_42"), Action::RosterPage(42));
    }

    #[test]
    fn test_parse_rejects_malformed_roster_pages() {
        assert_eq!(Action::parse("player_"), Action::Unknown);
        assert_eq!(Action::parse("player_abc"), Action::Unknown);
        assert_eq!(Action::parse("player_-1"), Action::Unknown);
        assert_eq!(Action::parse("player_1.5"), Action::Unknown);
        assert_eq!(
            Action::parse("player_99999999999999999999999999"),
            Action::Unknown
        );
    }

    #[test]
    fn test_parse_unrecognized_data() {
        assert_eq!(Action::parse(""), Action::Unknown);
        assert_eq!(Action::parse("menu_"), Action::Unknown);
        assert_eq!(Action::parse("something_else"), Action::Unknown);
    }
}
