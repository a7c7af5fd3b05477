use std::cmp::Ordering;

use crate::emoji_data::{EmojiEntry, EMOJI_CORPUS};
use crate::model::{ResultAction, ResultKind, SearchResult};

/// All emojis in corpus order, for an empty emoji-mode query.
pub fn browse() -> Vec<SearchResult> {
    EMOJI_CORPUS
        .iter()
        .enumerate()
        .map(|(index, entry)| browse_row(entry, index))
        .collect()
}

/// Substring search over `name` plus keywords. Matches are ordered by how
/// early the query appears relative to the searchable text's length, then
/// renumbered by display position.
pub fn search(query: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return browse();
    }

    let mut scored: Vec<(f64, usize)> = EMOJI_CORPUS
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            relevance(entry, &needle).map(|score| (score, index))
        })
        .collect();
    scored.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(&b.1))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(position, (_, index))| search_row(&EMOJI_CORPUS[index], position))
        .collect()
}

fn relevance(entry: &EmojiEntry, needle: &str) -> Option<f64> {
    let haystack = format!("{} {}", entry.name, entry.keywords.join(" ")).to_lowercase();
    let byte_pos = haystack.find(needle)?;
    let position = haystack[..byte_pos].chars().count();
    let length = haystack.chars().count().max(1);
    Some(position as f64 / length as f64)
}

fn browse_row(entry: &EmojiEntry, index: usize) -> SearchResult {
    SearchResult {
        kind: ResultKind::Emoji,
        id: entry.emoji.to_string(),
        title: entry.emoji.to_string(),
        subtitle: entry.name.to_string(),
        score: index as f64,
        action: ResultAction::CopyText(entry.emoji.to_string()),
    }
}

fn search_row(entry: &EmojiEntry, position: usize) -> SearchResult {
    let keyword_hint = entry
        .keywords
        .iter()
        .take(3)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    SearchResult {
        kind: ResultKind::Emoji,
        id: entry.emoji.to_string(),
        title: entry.emoji.to_string(),
        subtitle: format!("{} - {}", entry.name, keyword_hint),
        score: position as f64,
        action: ResultAction::CopyText(entry.emoji.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_browses_the_whole_corpus_in_order() {
        let rows = browse();
        assert_eq!(rows.len(), EMOJI_CORPUS.len());
        assert_eq!(rows[0].title, EMOJI_CORPUS[0].emoji);
        assert_eq!(rows[0].score, 0.0);
        assert_eq!(rows.last().unwrap().score, (rows.len() - 1) as f64);
    }

    #[test]
    fn search_matches_names_and_keywords() {
        let by_name = search("rolling on the floor");
        assert!(!by_name.is_empty());
        assert_eq!(by_name[0].title, "\u{1F923}");

        let by_keyword = search("rofl");
        assert!(by_keyword.iter().any(|row| row.title == "\u{1F923}"));
    }

    #[test]
    fn earlier_occurrences_rank_first() {
        let rows = search("heart");
        assert!(rows.len() > 1);
        // "heart suit" starts its haystack with the query and must beat
        // entries that only mention hearts later in the name or keywords.
        assert!(rows[0].subtitle.starts_with("heart suit"));
        assert_eq!(rows[0].score, 0.0);
        assert_eq!(rows[1].score, 1.0);
    }

    #[test]
    fn whitespace_only_query_falls_back_to_browsing() {
        assert_eq!(search("   ").len(), EMOJI_CORPUS.len());
    }

    #[test]
    fn selection_copies_the_emoji_character() {
        let rows = search("fire");
        let fire = rows.iter().find(|row| row.title == "\u{1F525}").unwrap();
        assert_eq!(fire.action, ResultAction::CopyText("\u{1F525}".to_string()));
    }
}
