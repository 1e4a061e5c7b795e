//! Formatters for the three match queries

use chrono::DateTime;
use serde_json::Value;

use super::PhotoCard;
use crate::constants::{dates, messages, streams};
use crate::stats::models::{MatchView, OpponentSlot, StreamInfo, match_view};

/// Formats the last finished match as a photo card: opponents and scores,
/// winner with logo, series name, a victory or defeat tagline and the best
/// replay stream link.
///
/// Returns `None` for an empty record list; callers substitute the
/// not-available reply.
pub fn last_match(records: &[Value]) -> Option<PhotoCard> {
    let view = match_view(records.first()?);

    let team = opponent_name(&view, 0);
    let rival = opponent_name(&view, 1);
    let team_score = score(&view, 0);
    let rival_score = score(&view, 1);

    let winner_name = view
        .winner
        .as_ref()
        .and_then(|w| w.name.clone())
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string());
    let winner_logo = view.winner.as_ref().and_then(|w| w.image_url.clone());

    let serie = view
        .serie
        .as_ref()
        .and_then(|s| s.full_name.clone())
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string());

    // Ties count as a win: any non-loss gets the victory tagline.
    let tagline = if is_victory(team_score.unwrap_or(0), rival_score.unwrap_or(0)) {
        messages::VICTORY_TAGLINE
    } else {
        messages::DEFEAT_TAGLINE
    };

    let link = replay_stream_link(&view.streams_list);

    let caption = format!(
        "🔥 Última batalha da FURIA no {serie}! 🐈‍⬛\n\n\
         {team} ({team_display}) VS {rival} ({rival_display})\n\n\
         🏆 Vitória dos {winner_name}! {tagline} 💪\n\n\
         📺 [Assista aos melhores momentos!]({link})\n\n\
         #FURIA | #CS2",
        team_display = score_display(team_score),
        rival_display = score_display(rival_score),
    );

    Some(PhotoCard {
        caption,
        image_url: winner_logo,
    })
}

/// Formats the upcoming-matches list under a single header. Each entry
/// carries the opponents label, the localized start time and every main
/// stream link in an accepted language. An empty list yields the fixed
/// no-upcoming message.
pub fn upcoming_matches(records: &[Value]) -> String {
    if records.is_empty() {
        return messages::NO_UPCOMING.to_string();
    }

    let mut sections = Vec::with_capacity(records.len());
    for record in records {
        let view = match_view(record);
        let label = versus_label(&view.opponents);
        let start = begin_at_display(view.begin_at.as_deref());
        let links = live_stream_links(&view.streams_list);

        let mut section = format!("⚔️ {label}\n🗓️ {start}");
        if !links.is_empty() {
            section.push_str(&format!("\n📺 {links}"));
        }
        sections.push(section);
    }

    format!(
        "📅 Próximas batalhas da FURIA: 🐈‍⬛\n\n{}\n\n#FURIA | #CS2",
        sections.join("\n\n")
    )
}

/// Formats the currently running match. Reads only the first record: match
/// name, series full name, prize pool as provided and the first listed
/// stream, with no language filtering; there is exactly one live card.
///
/// Returns `None` for an empty record list.
pub fn live_match(records: &[Value]) -> Option<String> {
    let view = match_view(records.first()?);

    let name = view
        .name
        .clone()
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string());
    let serie = view
        .serie
        .as_ref()
        .and_then(|s| s.full_name.clone())
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string());
    let prizepool = view
        .tournament
        .as_ref()
        .and_then(|t| t.prizepool.clone())
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string());
    let stream = view
        .streams_list
        .first()
        .and_then(|s| s.raw_url.clone())
        .unwrap_or_else(|| streams::FALLBACK_LINK.to_string());

    Some(format!(
        "🔴 A FURIA está AO VIVO! 🐈‍⬛\n\n\
         🎮 {name}\n\
         🏆 {serie}\n\
         💰 Premiação: {prizepool}\n\
         📺 Assista agora: {stream}\n\n\
         #FURIA | #CS2"
    ))
}

/// Victory policy for the tagline: the tracked team wins on any non-loss,
/// ties included.
pub fn is_victory(own_score: i64, rival_score: i64) -> bool {
    own_score >= rival_score
}

/// Picks the replay link by scanning the stream list from the end (the
/// official stream usually sits last) for the first entry that is official
/// and in an accepted language. Falls back to the placeholder link.
pub fn replay_stream_link(stream_list: &[StreamInfo]) -> String {
    stream_list
        .iter()
        .rev()
        .find(|s| s.is_official() && s.language_in(streams::REPLAY_LANGUAGES))
        .and_then(|s| s.raw_url.clone())
        .unwrap_or_else(|| streams::FALLBACK_LINK.to_string())
}

/// Collects every main stream in an accepted language, joined by a comma.
/// Empty output is acceptable here; upcoming matches often have no streams
/// assigned yet.
pub fn live_stream_links(stream_list: &[StreamInfo]) -> String {
    stream_list
        .iter()
        .filter(|s| s.is_main() && s.language_in(streams::LIVE_LANGUAGES))
        .filter_map(|s| s.raw_url.clone())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds the "A vs B" label, degrading when opponents are not confirmed.
fn versus_label(opponents: &[OpponentSlot]) -> String {
    let names: Vec<String> = opponents
        .iter()
        .filter_map(|slot| slot.opponent.as_ref())
        .filter_map(|team| team.name.clone())
        .collect();

    match names.as_slice() {
        [a, b, ..] => format!("{a} vs {b}"),
        [a] => format!("{a} {}", messages::OPPONENT_UNDEFINED_SUFFIX),
        [] => messages::MATCH_TO_BE_DEFINED.to_string(),
    }
}

/// Renders an RFC 3339 start timestamp as `DD/MM/YYYY HH:MM`, falling back
/// to the placeholder for absent or unparseable values.
fn begin_at_display(begin_at: Option<&str>) -> String {
    begin_at
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.format(dates::MATCH_START_FORMAT).to_string())
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string())
}

fn opponent_name(view: &MatchView, index: usize) -> String {
    view.opponents
        .get(index)
        .and_then(|slot| slot.opponent.as_ref())
        .and_then(|team| team.name.clone())
        .unwrap_or_else(|| messages::NOT_INFORMED.to_string())
}

fn score(view: &MatchView, index: usize) -> Option<i64> {
    view.results.get(index).and_then(|result| result.score)
}

fn score_display(score: Option<i64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn finished_match(team_score: i64, rival_score: i64) -> Value {
        json!({
            "opponents": [
                {"opponent": {"name": "FURIA"}},
                {"opponent": {"name": "Rival"}}
            ],
            "results": [{"score": team_score}, {"score": rival_score}],
            "winner": {"name": "FURIA", "image_url": "http://x/logo.png"},
            "serie": {"full_name": "Major 2024"},
            "streams_list": [
                {"official": true, "language": "en", "raw_url": "http://stream"}
            ]
        })
    }

    #[test]
    fn test_last_match_victory_card() {
        let card = last_match(&[finished_match(16, 10)]).expect("card");
        assert!(card.caption.contains("FURIA (16) VS Rival (10)"));
        assert!(card.caption.contains(messages::VICTORY_TAGLINE));
        assert!(card.caption.contains("Major 2024"));
        assert!(card.caption.contains("http://stream"));
        assert_eq!(card.image_url.as_deref(), Some("http://x/logo.png"));
    }

    #[test]
    fn test_last_match_defeat_tagline() {
        let card = last_match(&[finished_match(10, 16)]).expect("card");
        assert!(card.caption.contains(messages::DEFEAT_TAGLINE));
        assert!(!card.caption.contains(messages::VICTORY_TAGLINE));
    }

    #[test]
    fn test_tie_counts_as_victory() {
        assert!(is_victory(16, 10));
        assert!(!is_victory(10, 16));
        assert!(is_victory(15, 15));

        let card = last_match(&[finished_match(15, 15)]).expect("card");
        assert!(card.caption.contains(messages::VICTORY_TAGLINE));
    }

    #[test]
    fn test_last_match_empty_input() {
        assert!(last_match(&[]).is_none());
    }

    #[test]
    fn test_last_match_missing_fields_fall_back() {
        let card = last_match(&[json!({})]).expect("card");
        assert!(card.caption.contains(messages::NOT_INFORMED));
        assert!(card.caption.contains(streams::FALLBACK_LINK));
        assert!(card.image_url.is_none());
    }

    #[test]
    fn test_replay_stream_prefers_last_official_accepted() {
        let stream_list = vec![
            StreamInfo {
                official: Some(true),
                language: Some("en".to_string()),
                raw_url: Some("http://first".to_string()),
                ..Default::default()
            },
            StreamInfo {
                official: Some(false),
                language: Some("en".to_string()),
                raw_url: Some("http://unofficial".to_string()),
                ..Default::default()
            },
            StreamInfo {
                official: Some(true),
                language: Some("br".to_string()),
                raw_url: Some("http://last-official".to_string()),
                ..Default::default()
            },
        ];
        assert_eq!(replay_stream_link(&stream_list), "http://last-official");
    }

    #[test]
    fn test_replay_stream_falls_back_to_placeholder() {
        let stream_list = vec![StreamInfo {
            official: Some(true),
            language: Some("fr".to_string()),
            raw_url: Some("http://fr-stream".to_string()),
            ..Default::default()
        }];
        assert_eq!(replay_stream_link(&stream_list), streams::FALLBACK_LINK);
        assert_eq!(replay_stream_link(&[]), streams::FALLBACK_LINK);
    }

    #[test]
    fn test_upcoming_empty_list_yields_fixed_message() {
        assert_eq!(upcoming_matches(&[]), messages::NO_UPCOMING);
    }

    #[test]
    fn test_upcoming_formats_label_date_and_streams() {
        let records = vec![json!({
            "begin_at": "2024-05-10T14:30:00Z",
            "opponents": [
                {"opponent": {"name": "FURIA"}},
                {"opponent": {"name": "NAVI"}}
            ],
            "streams_list": [
                {"main": true, "language": "en", "raw_url": "http://en-stream"},
                {"main": true, "language": "br", "raw_url": "http://br-stream"},
                {"main": false, "language": "en", "raw_url": "http://not-main"},
                {"main": true, "language": "fr", "raw_url": "http://fr-stream"}
            ]
        })];

        let text = upcoming_matches(&records);
        assert!(text.contains("FURIA vs NAVI"));
        assert!(text.contains("10/05/2024 14:30"));
        assert!(text.contains("http://en-stream, http://br-stream"));
        assert!(!text.contains("http://not-main"));
        assert!(!text.contains("http://fr-stream"));
    }

    #[test]
    fn test_upcoming_single_and_zero_opponents() {
        let records = vec![
            json!({"opponents": [{"opponent": {"name": "FURIA"}}]}),
            json!({"opponents": []}),
        ];
        let text = upcoming_matches(&records);
        assert!(text.contains(&format!("FURIA {}", messages::OPPONENT_UNDEFINED_SUFFIX)));
        assert!(text.contains(messages::MATCH_TO_BE_DEFINED));
        assert!(text.contains(messages::NOT_INFORMED)); // missing begin_at
    }

    #[test]
    fn test_live_match_reads_first_record_only() {
        let records = vec![
            json!({
                "name": "FURIA vs NAVI",
                "serie": {"full_name": "IEM Katowice 2024"},
                "tournament": {"prizepool": "1000000 United States Dollar"},
                "streams_list": [
                    {"official": false, "language": "fr", "raw_url": "http://any-stream"}
                ]
            }),
            json!({"name": "should be ignored"}),
        ];

        let text = live_match(&records).expect("text");
        assert!(text.contains("FURIA vs NAVI"));
        assert!(text.contains("IEM Katowice 2024"));
        assert!(text.contains("1000000 United States Dollar"));
        // The live card takes the first stream regardless of flags.
        assert!(text.contains("http://any-stream"));
        assert!(!text.contains("should be ignored"));
    }

    #[test]
    fn test_live_match_empty_input() {
        assert!(live_match(&[]).is_none());
    }

    #[test]
    fn test_live_match_missing_fields_fall_back() {
        let text = live_match(&[json!({})]).expect("text");
        assert!(text.contains(messages::NOT_INFORMED));
        assert!(text.contains(streams::FALLBACK_LINK));
    }
}
