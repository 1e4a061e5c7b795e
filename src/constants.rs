//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, endpoint paths and user-facing
//! strings so the rest of the codebase stays free of inline literals.

#![allow(dead_code)]

/// Default timeout for statistics API requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default port for the webhook listener
pub const DEFAULT_WEBHOOK_PORT: u16 = 5000;

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for statistics API responses. One global value for every query
    /// kind; a cached entry is valid while its age stays below this.
    pub const RESPONSE_SECONDS: u64 = 300;
}

/// PandaScore API endpoints and identifiers for the tracked team
pub mod pandascore {
    /// Base URL of the PandaScore CS discipline resource
    pub const BASE_URL: &str = "https://api.pandascore.co/csgo";

    /// PandaScore team id for FURIA
    pub const FURIA_TEAM_ID: u64 = 124_530;

    /// Endpoint listing matches (filtered for finished ones)
    pub const MATCHES_ENDPOINT: &str = "/matches";

    /// Endpoint listing upcoming matches
    pub const UPCOMING_ENDPOINT: &str = "/matches/upcoming";

    /// Endpoint listing matches currently being played
    pub const RUNNING_ENDPOINT: &str = "/matches/running";

    /// Endpoint for team lookups (roster)
    pub const TEAMS_ENDPOINT: &str = "/teams";
}

/// Stream selection rules for formatted replies
pub mod streams {
    /// Languages accepted when picking the replay stream of a finished match
    pub const REPLAY_LANGUAGES: &[&str] = &["en", "br"];

    /// Languages accepted when collecting live/upcoming stream links
    pub const LIVE_LANGUAGES: &[&str] = &["en", "es", "br"];

    /// Placeholder link used when no acceptable stream exists
    pub const FALLBACK_LINK: &str = "#";
}

/// User-facing reply strings. The bot speaks pt-BR, in character.
pub mod messages {
    /// Tagline appended when FURIA wins (or ties) the last match
    pub const VICTORY_TAGLINE: &str = "🔥SÓ VEM QUE A FURIA TÁ LIGADA!!!🔥";

    /// Tagline appended when FURIA loses the last match
    pub const DEFEAT_TAGLINE: &str =
        "Parabéns ao adversário, mas a FURIA vai voltar mais forte!";

    /// Fixed reply when the upcoming-matches list is empty
    pub const NO_UPCOMING: &str =
        "A FURIA não tem partidas agendadas no momento. Fica ligado que logo tem mais! 🐈‍⬛";

    /// Generic reply when a query returned nothing to show
    pub const NOT_AVAILABLE: &str =
        "Essas informações não estão disponíveis agora. Tenta de novo daqui a pouco! 🐈‍⬛";

    /// Reply for an unrecognized button tap
    pub const UNKNOWN_ACTION: &str = "Opção desconhecida. Usa /menu para ver as opções! 🦾";

    /// Reply for free text outside the known commands
    pub const USE_START_HINT: &str = "ℹ️ Usa /start para ver as opções principais";

    /// Reply when a roster page index no longer matches the roster
    pub const ROSTER_PAGE_GONE: &str =
        "O elenco mudou desde essa mensagem. Abre o menu de novo com /menu! 🐈‍⬛";

    /// Placeholder for any player/team field the API left empty
    pub const NOT_INFORMED: &str = "Não informado";

    /// Label suffix used when a match has a single confirmed opponent
    pub const OPPONENT_UNDEFINED_SUFFIX: &str = "(adversário não definido)";

    /// Label used when a match has no confirmed opponents at all
    pub const MATCH_TO_BE_DEFINED: &str = "Partida a definir";
}

/// Static media URLs used in replies
pub mod media {
    /// Banner image attached to the main menu
    pub const MENU_BANNER_URL: &str =
        "https://images.steamusercontent.com/ugc/1009315379357635148/92002071318509F5E315603B7775EABBBBCD2517/";

    /// Placeholder portrait for players without an image
    pub const PLAYER_PLACEHOLDER_URL: &str =
        "https://cdn.pandascore.co/images/player/image/default.png";
}

/// Community links shown in the main menu
pub mod links {
    pub const SITE: &str = "https://furia.gg";
    pub const DISCORD: &str = "https://discord.gg/furia";
    pub const INSTAGRAM: &str = "https://www.instagram.com/furiagg/";
}

/// Environment variable names
pub mod env_vars {
    /// Telegram bot token
    pub const BOT_TOKEN: &str = "FURIA_BOT_TOKEN";

    /// PandaScore API bearer token
    pub const PANDASCORE_TOKEN: &str = "PANDASCORE_TOKEN";

    /// Public webhook base URL; long-polling is used when unset
    pub const WEBHOOK_URL: &str = "FURIA_WEBHOOK_URL";

    /// Port the webhook listener binds to
    pub const WEBHOOK_PORT: &str = "FURIA_WEBHOOK_PORT";

    /// Log file path override
    pub const LOG_FILE: &str = "FURIA_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "FURIA_HTTP_TIMEOUT";
}

/// Date rendering for upcoming matches
pub mod dates {
    /// strftime pattern for match start times shown to users
    pub const MATCH_START_FORMAT: &str = "%d/%m/%Y %H:%M";
}
