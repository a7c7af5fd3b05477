use std::cmp::Ordering;

use crate::commands;
use crate::model::{ResultAction, ResultKind, SearchResult, SourceRecord};

pub const WEB_SEARCH_RESULT_ID: &str = "google-search";
pub const AI_CHAT_RESULT_ID: &str = "chatgpt-search";

/// Scores of the two fallback rows appended to every non-empty query. Fuzzy
/// match scores always land below 1.0, so these sort last.
pub const WEB_SEARCH_SCORE: f64 = 10.0;
pub const AI_CHAT_SCORE: f64 = 11.0;

/// A field match is kept only when its score stays at or under this bound.
const MATCH_THRESHOLD: f64 = 0.6;
/// How strongly a match is pulled toward the start of the field. Each
/// character of distance from position zero costs 1/span.
const LOCATION_SPAN: f64 = 100.0;

const WEIGHT_TITLE: f64 = 0.8;
const WEIGHT_NAME: f64 = 0.8;
const WEIGHT_CONTENT: f64 = 0.7;
const WEIGHT_KEYWORDS: f64 = 0.6;
const WEIGHT_DESCRIPTION: f64 = 0.5;
const WEIGHT_URL: f64 = 0.4;
const WEIGHT_LINK: f64 = 0.4;
const WEIGHT_CATEGORY: f64 = 0.3;

struct SearchField {
    text: String,
    weight: f64,
    norm: f64,
}

struct IndexEntry {
    base: SearchResult,
    fields: Vec<SearchField>,
}

/// Prepared view of the stored items, rebuilt on every data reload.
pub struct FuzzyIndex {
    entries: Vec<IndexEntry>,
}

impl FuzzyIndex {
    pub fn build(records: &[SourceRecord]) -> Self {
        let entries = records
            .iter()
            .map(|record| IndexEntry {
                base: SearchResult::from_record(record, 0.0),
                fields: weighted_fields(record),
            })
            .collect();
        FuzzyIndex { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fuzzy matches only, best first. Command rows and fallback rows are
    /// merged in by [`search_palette`].
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let needle: Vec<char> = query.to_lowercase().chars().collect();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, usize)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| score_entry(entry, &needle).map(|score| (score, index)))
            .collect();

        scored.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });

        scored
            .into_iter()
            .map(|(score, index)| {
                let mut result = self.entries[index].base.clone();
                result.score = score;
                result
            })
            .collect()
    }
}

/// Full palette response for a normal-mode query: built-in command hits,
/// fuzzy item matches (capped at `fuzzy_limit`) and the two web fallback
/// rows, sorted ascending by score. Ties keep this insertion order.
pub fn search_palette(index: &FuzzyIndex, query: &str, fuzzy_limit: usize) -> Vec<SearchResult> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut results = commands::match_commands(&trimmed.to_lowercase());
    let mut fuzzy = index.search(trimmed);
    fuzzy.truncate(fuzzy_limit);
    results.extend(fuzzy);
    results.push(web_search_result(trimmed));
    results.push(ai_chat_result(trimmed));

    let mut ordered: Vec<(usize, SearchResult)> = results.into_iter().enumerate().collect();
    ordered.sort_by(|a, b| {
        a.1.score
            .partial_cmp(&b.1.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ordered.into_iter().map(|(_, result)| result).collect()
}

fn web_search_result(query: &str) -> SearchResult {
    SearchResult {
        kind: ResultKind::System,
        id: WEB_SEARCH_RESULT_ID.to_string(),
        title: format!("\u{1F50D} Search Google for \"{query}\""),
        subtitle: "Open Google search in your default browser".to_string(),
        score: WEB_SEARCH_SCORE,
        action: ResultAction::OpenExternal(commands::web_search_url(query)),
    }
}

fn ai_chat_result(query: &str) -> SearchResult {
    SearchResult {
        kind: ResultKind::System,
        id: AI_CHAT_RESULT_ID.to_string(),
        title: format!("\u{1F916} Ask ChatGPT about \"{query}\""),
        subtitle: "Open ChatGPT with your question in the default browser".to_string(),
        score: AI_CHAT_SCORE,
        action: ResultAction::OpenExternal(commands::ai_chat_url(query)),
    }
}

fn weighted_fields(record: &SourceRecord) -> Vec<SearchField> {
    let mut fields = Vec::new();
    let mut push = |text: &str, weight: f64| {
        if !text.is_empty() {
            fields.push(SearchField {
                text: text.to_lowercase(),
                weight,
                norm: field_norm(text),
            });
        }
    };

    match record {
        SourceRecord::Snippet(s) => {
            push(&s.title, WEIGHT_TITLE);
            push(&s.description, WEIGHT_DESCRIPTION);
            push(&s.content, WEIGHT_CONTENT);
        }
        SourceRecord::Document(d) => {
            push(&d.title, WEIGHT_TITLE);
            push(&d.link, WEIGHT_LINK);
        }
        SourceRecord::Bookmark(b) => {
            push(&b.title, WEIGHT_TITLE);
            push(&b.url, WEIGHT_URL);
            push(&b.description, WEIGHT_DESCRIPTION);
        }
        SourceRecord::Tool(t) => {
            push(&t.name, WEIGHT_NAME);
            push(&t.url, WEIGHT_URL);
            push(&t.description, WEIGHT_DESCRIPTION);
            push(&t.keywords, WEIGHT_KEYWORDS);
            push(&t.category, WEIGHT_CATEGORY);
        }
    }
    fields
}

/// Shorter fields count for more: a one-token field keeps its full weight,
/// a wall of text is discounted by the square root of its token count.
fn field_norm(text: &str) -> f64 {
    let tokens = text.split_whitespace().count().max(1);
    1.0 / (tokens as f64).sqrt()
}

/// Combines an item's matched fields into one score. Each matching field
/// contributes `score^(weight * norm)` to a product; fields that do not
/// match contribute nothing. `None` means no field matched at all.
fn score_entry(entry: &IndexEntry, needle: &[char]) -> Option<f64> {
    let mut total = 1.0;
    let mut matched = false;
    for field in &entry.fields {
        if let Some(score) = match_field(&field.text, needle) {
            matched = true;
            total *= score.max(f64::EPSILON).powf(field.weight * field.norm);
        }
    }
    matched.then_some(total)
}

/// Best approximate occurrence of `needle` in `haystack`, scored as
/// `errors / needle_len + start / LOCATION_SPAN`. An exact hit at the start
/// of the field scores 0.0; typos and distance from the start both push the
/// score up until the threshold cuts the match off entirely.
///
/// The scan stops once the position penalty alone exceeds what could still
/// win, so a kilobyte content field costs no more than a short title.
pub(crate) fn match_field(haystack: &str, needle: &[char]) -> Option<f64> {
    let m = needle.len();
    if m == 0 {
        return None;
    }

    let mut best = f64::INFINITY;
    // col[i] is the edit distance between needle[..i] and the best substring
    // ending at the current haystack position. col[0] stays 0: a match may
    // begin anywhere.
    let mut col: Vec<usize> = (0..=m).collect();
    for (j, hay) in haystack.chars().enumerate() {
        let start = (j + 1).saturating_sub(m);
        if start as f64 / LOCATION_SPAN > best.min(MATCH_THRESHOLD) {
            break;
        }

        let mut prev_diag = col[0];
        for i in 1..=m {
            let cost = usize::from(needle[i - 1] != hay);
            let next = (prev_diag + cost).min(col[i] + 1).min(col[i - 1] + 1);
            prev_diag = col[i];
            col[i] = next;
        }

        let score = col[m] as f64 / m as f64 + start as f64 / LOCATION_SPAN;
        if score < best {
            best = score;
            if best == 0.0 {
                break;
            }
        }
    }

    (best <= MATCH_THRESHOLD).then_some(best)
}
