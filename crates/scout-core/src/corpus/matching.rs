//! Diacritic-insensitive name matching against the roster.
//!
//! Match quality, best first: exact, whole-token (surname), prefix,
//! substring, fuzzy (normalized Levenshtein).

/// How a pattern matched a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    Exact,
    Token,
    Prefix,
    Substring,
    Fuzzy,
}

/// Lowercase, strip diacritics, turn other punctuation (hyphens included)
/// into spaces, drop apostrophes and dots, collapse whitespace.
pub fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' => out.push('a'),
            'ç' | 'ć' | 'č' => out.push('c'),
            'đ' | 'ď' => out.push('d'),
            'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ě' | 'ę' => out.push('e'),
            'ğ' => out.push('g'),
            'í' | 'ì' | 'î' | 'ï' | 'ı' => out.push('i'),
            'ł' => out.push('l'),
            'ñ' | 'ń' | 'ň' => out.push('n'),
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'ō' => out.push('o'),
            'ř' => out.push('r'),
            'ś' | 'š' | 'ş' => out.push('s'),
            'ß' => out.push_str("ss"),
            'ť' | 'ţ' => out.push('t'),
            'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ů' => out.push('u'),
            'ý' | 'ÿ' => out.push('y'),
            'ź' | 'ż' | 'ž' => out.push('z'),
            c if c.is_alphanumeric() => out.push(c),
            '\'' | '.' => {}
            _ => out.push(' '),
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Edit distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}

/// Normalized similarity in [0.0, 1.0].
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Score a folded pattern against a folded name. `None` if unrelated.
pub fn match_folded(pattern: &str, name: &str, fuzzy_threshold: f64) -> Option<(MatchKind, f64)> {
    if pattern.is_empty() {
        return None;
    }
    if pattern == name {
        return Some((MatchKind::Exact, 1.0));
    }
    if name.split(' ').any(|token| token == pattern) {
        return Some((MatchKind::Token, 0.95));
    }
    if name.starts_with(pattern) {
        return Some((MatchKind::Prefix, 0.9));
    }
    if name.contains(pattern) {
        return Some((MatchKind::Substring, 0.8));
    }

    let best = name
        .split(' ')
        .map(|token| similarity(pattern, token))
        .fold(similarity(pattern, name), f64::max);
    (best >= fuzzy_threshold).then_some((MatchKind::Fuzzy, best * 0.75))
}
