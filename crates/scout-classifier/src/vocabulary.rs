//! Domain vocabulary: league and position aliases, stat nouns, and the
//! cue words that steer tier selection.
//!
//! All lookups expect text already passed through `matching::fold`.

/// Alias → canonical league name. Longer aliases first.
const LEAGUE_ALIASES: &[(&str, &str)] = &[
    ("english premier league", "ENG-Premier League"),
    ("premier league", "ENG-Premier League"),
    ("epl", "ENG-Premier League"),
    ("la liga", "ESP-La Liga"),
    ("laliga", "ESP-La Liga"),
    ("spanish league", "ESP-La Liga"),
    ("serie a", "ITA-Serie A"),
    ("seriea", "ITA-Serie A"),
    ("italian league", "ITA-Serie A"),
    ("bundesliga", "GER-Bundesliga"),
    ("german league", "GER-Bundesliga"),
    ("ligue 1", "FRA-Ligue 1"),
    ("ligue1", "FRA-Ligue 1"),
    ("french league", "FRA-Ligue 1"),
];

/// Canonical league names as stored in the corpus.
pub const LEAGUES: &[&str] = &[
    "ENG-Premier League",
    "ESP-La Liga",
    "ITA-Serie A",
    "GER-Bundesliga",
    "FRA-Ligue 1",
];

/// Word → canonical position.
const POSITION_ALIASES: &[(&str, &str)] = &[
    ("goalkeeper", "Goalkeeper"),
    ("goalkeepers", "Goalkeeper"),
    ("keeper", "Goalkeeper"),
    ("keepers", "Goalkeeper"),
    ("gk", "Goalkeeper"),
    ("defender", "Defender"),
    ("defenders", "Defender"),
    ("centre back", "Defender"),
    ("center back", "Defender"),
    ("centre backs", "Defender"),
    ("center backs", "Defender"),
    ("centreback", "Defender"),
    ("cb", "Defender"),
    ("cbs", "Defender"),
    ("fullback", "Defender"),
    ("fullbacks", "Defender"),
    ("full back", "Defender"),
    ("full backs", "Defender"),
    ("midfielder", "Midfielder"),
    ("midfielders", "Midfielder"),
    ("mid", "Midfielder"),
    ("mids", "Midfielder"),
    ("cm", "Midfielder"),
    ("dm", "Midfielder"),
    ("playmaker", "Midfielder"),
    ("playmakers", "Midfielder"),
    ("forward", "Forward"),
    ("forwards", "Forward"),
    ("striker", "Forward"),
    ("strikers", "Forward"),
    ("winger", "Forward"),
    ("wingers", "Forward"),
    ("attacker", "Forward"),
    ("attackers", "Forward"),
    ("st", "Forward"),
];

/// Stat noun → metric key.
const STAT_NOUNS: &[(&str, &str)] = &[
    ("goalscorers", "goals"),
    ("goalscorer", "goals"),
    ("scorers", "goals"),
    ("scorer", "goals"),
    ("goals", "goals"),
    ("goal", "goals"),
    ("scoring", "goals"),
    ("assist providers", "assists"),
    ("assisters", "assists"),
    ("assists", "assists"),
    ("assist", "assists"),
    ("creators", "expected_assists"),
    ("chance creators", "expected_assists"),
    ("xg", "expected_goals"),
    ("expected goals", "expected_goals"),
    ("xa", "expected_assists"),
    ("expected assists", "expected_assists"),
    ("passers", "progressive_passes"),
    ("passer", "progressive_passes"),
    ("passing", "progressive_passes"),
    ("passes", "progressive_passes"),
    ("progressive passes", "progressive_passes"),
    ("dribblers", "progressive_carries"),
    ("carriers", "progressive_carries"),
    ("carries", "progressive_carries"),
    ("progressive carries", "progressive_carries"),
    ("tacklers", "tackles"),
    ("tackler", "tackles"),
    ("tackles", "tackles"),
    ("tackling", "tackles"),
    ("interceptions", "interceptions"),
    ("interception", "interceptions"),
    ("ball winners", "interceptions"),
];

/// Phrases that ask for a relation to other entities rather than a lookup.
const RELATIONAL_CUES: &[&str] = &[
    "alongside",
    "partner",
    "partners",
    "partnership",
    "pair with",
    "pairing",
    "complement",
    "complements",
    "replace",
    "replacement",
    "successor",
    "similar to",
    "similar players",
    "alternative to",
    "alternatives to",
    "backup for",
    "fit into",
    "fit in",
    "fits",
    "play with",
    "playing style",
    "system",
    "formation",
];

const PROSPECT_CUES: &[&str] = &[
    "young",
    "youngster",
    "youngsters",
    "prospect",
    "prospects",
    "talent",
    "talents",
    "wonderkid",
    "wonderkids",
    "rising star",
    "rising stars",
];

const SUPERLATIVES: &[&str] = &["top", "best", "leading", "highest", "most", "greatest"];

/// Words never treated as part of a name.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "vs", "versus", "against", "with", "compare", "comparison",
    "between", "of", "in", "on", "at", "to", "for", "from", "by", "me", "show", "find", "search",
    "get", "list", "who", "is", "are", "was", "tell", "about", "what", "which", "how", "good",
    "better", "than", "stats", "statistics", "player", "players", "league", "season", "under",
    "over", "below", "above", "younger", "older", "minutes", "minute", "mins", "at", "least",
    "more", "less", "play", "can", "could", "would", "should", "their", "his", "all", "any",
    "some", "this", "that", "these", "those", "give", "look", "up", "year", "years", "old",
    "aged", "age", "performing", "performers", "team",
];

fn contains_phrase(folded: &str, phrase: &str) -> bool {
    let bytes = folded.as_bytes();
    folded.match_indices(phrase).any(|(at, _)| {
        let end = at + phrase.len();
        let left_ok = at == 0 || bytes[at - 1] == b' ';
        let right_ok = end == bytes.len() || bytes[end] == b' ';
        left_ok && right_ok
    })
}

fn first_alias(folded: &str, table: &[(&str, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(alias, _)| contains_phrase(folded, alias))
        .map(|(_, canonical)| *canonical)
}

/// First league mentioned in `folded`.
pub fn find_league(folded: &str) -> Option<&'static str> {
    first_alias(folded, LEAGUE_ALIASES)
}

/// First position mentioned in `folded`.
pub fn find_position(folded: &str) -> Option<&'static str> {
    first_alias(folded, POSITION_ALIASES)
}

/// Every metric named by a stat noun in `folded`, deduplicated, in table order.
pub fn find_stats(folded: &str) -> Vec<&'static str> {
    let mut stats: Vec<&'static str> = Vec::new();
    for (noun, metric) in STAT_NOUNS {
        if contains_phrase(folded, noun) && !stats.contains(metric) {
            stats.push(metric);
        }
    }
    stats
}

/// Canonical league for free text: a known alias, an exact canonical name,
/// or `None`.
pub fn canonical_league(text: &str) -> Option<&'static str> {
    let folded = scout_core::corpus::matching::fold(text);
    LEAGUES
        .iter()
        .find(|l| scout_core::corpus::matching::fold(l) == folded)
        .copied()
        .or_else(|| find_league(&folded))
}

/// Canonical position for free text.
pub fn canonical_position(text: &str) -> Option<&'static str> {
    let folded = scout_core::corpus::matching::fold(text);
    POSITION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == folded)
        .map(|(_, canonical)| *canonical)
        .or_else(|| find_position(&folded))
}

/// Metric key for a stat noun; unknown names pass through in snake_case.
pub fn canonical_metric(text: &str) -> String {
    let folded = scout_core::corpus::matching::fold(&text.replace('_', " "));
    STAT_NOUNS
        .iter()
        .find(|(noun, _)| *noun == folded)
        .map(|(_, metric)| metric.to_string())
        .unwrap_or_else(|| folded.replace(' ', "_"))
}

pub fn has_relational_cue(folded: &str) -> bool {
    RELATIONAL_CUES.iter().any(|cue| contains_phrase(folded, cue))
}

pub fn has_prospect_cue(folded: &str) -> bool {
    PROSPECT_CUES.iter().any(|cue| contains_phrase(folded, cue))
}

pub fn has_superlative(folded: &str) -> bool {
    SUPERLATIVES.iter().any(|s| contains_phrase(folded, s))
}

/// Whether a single folded token is vocabulary rather than a possible name.
pub fn is_vocabulary_token(token: &str) -> bool {
    STOPWORDS.contains(&token)
        || SUPERLATIVES.contains(&token)
        || PROSPECT_CUES.contains(&token)
        || RELATIONAL_CUES.contains(&token)
        || token.chars().all(|c| c.is_ascii_digit() || c == '+')
        || POSITION_ALIASES.iter().any(|(alias, _)| alias.split(' ').any(|w| w == token))
        || LEAGUE_ALIASES.iter().any(|(alias, _)| alias.split(' ').any(|w| w == token))
        || STAT_NOUNS.iter().any(|(noun, _)| noun.split(' ').any(|w| w == token))
}
