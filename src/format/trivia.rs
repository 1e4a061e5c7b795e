//! Random FURIA trivia

use rand::seq::IndexedRandom;

/// Static trivia pool. Picked uniformly; the bot never tracks which entries
/// a chat has already seen.
pub const TRIVIA: &[&str] = &[
    "🐈‍⬛ A FURIA foi fundada em 2017 por Jaime Pádua e André Akkari — sim, o Akkari do poker!",
    "🔥 O nome FURIA vem da vontade de jogar com agressividade e paixão, o famoso estilo 'fúria' brasileiro.",
    "🇧🇷 A FURIA foi a primeira organização brasileira a chegar ao top 3 do ranking mundial de CS da HLTV.",
    "🎯 O estilo agressivo da FURIA no CS ficou tão famoso que analistas estrangeiros chamam de 'FURIA style'.",
    "🏟️ Em 2022 a FURIA jogou um Major em casa: o IEM Rio Major, com a torcida brasileira lotando a arena.",
    "🎮 Além do CS, a FURIA tem elencos de VALORANT, League of Legends, Rocket League e até futebol de 7.",
    "🖤 O mascote da FURIA é uma pantera negra, presente no escudo desde a fundação.",
    "🏆 O arT, capitão histórico da FURIA, é conhecido como um dos AWPers mais agressivos do mundo.",
    "🌎 A FURIA tem gaming office nos Estados Unidos para disputar as ligas norte-americanas.",
    "📈 A torcida da FURIA é apelidada de 'nação FURIA' e acompanha o time em todos os campeonatos.",
];

/// Returns one trivia entry, uniformly at random.
pub fn random_trivia() -> &'static str {
    TRIVIA
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or("🐈‍⬛ #FURIA")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_is_not_empty() {
        assert!(!TRIVIA.is_empty());
        for entry in TRIVIA {
            assert!(!entry.is_empty());
        }
    }

    #[test]
    fn test_random_trivia_comes_from_the_pool() {
        for _ in 0..50 {
            let picked = random_trivia();
            assert!(TRIVIA.contains(&picked));
        }
    }
}
