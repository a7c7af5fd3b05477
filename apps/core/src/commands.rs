use crate::model::{ResultAction, ResultKind, SearchResult};

/// Score for a query that exactly equals one of a command's triggers.
pub const EXACT_TRIGGER_SCORE: f64 = -10.0;
/// Score for a query that is a prefix of one of a command's triggers.
pub const PREFIX_TRIGGER_SCORE: f64 = -1.0;
/// Prepended to the title of an exact trigger hit.
pub const EXACT_MARKER: &str = "\u{2605} ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemCommand {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub triggers: &'static [&'static str],
}

/// Built-in commands in their fixed presentation order. Two commands may
/// share a trigger ("m" belongs to both movie and meme); a matching query
/// returns both rows in this order.
pub fn system_commands() -> &'static [SystemCommand] {
    &[
        SystemCommand {
            id: "settings",
            title: "Settings",
            subtitle: "Open Ctrl settings and preferences",
            triggers: &[
                "s",
                "set",
                "setting",
                "settings",
                "config",
                "configuration",
                "pref",
                "preferences",
            ],
        },
        SystemCommand {
            id: "emoji",
            title: "Emoji Picker",
            subtitle: "Browse and search emojis",
            triggers: &["e", "emoji", "emojis", ":"],
        },
        SystemCommand {
            id: "help",
            title: "Help",
            subtitle: "Show keyboard shortcuts and help",
            triggers: &["h", "help", "?"],
        },
        SystemCommand {
            id: "movie",
            title: "Movie Search",
            subtitle: "Search for movies and TV shows",
            triggers: &["m", "movie", "films"],
        },
        SystemCommand {
            id: "color",
            title: "Color Picker",
            subtitle: "Browse and search colors",
            triggers: &["color", "colors", "palette"],
        },
        SystemCommand {
            id: "coingecko",
            title: "CoinGecko API",
            subtitle: "Show CoinGecko API documentation",
            triggers: &["coin", "coingecko", "crypto"],
        },
        SystemCommand {
            id: "meme",
            title: "Meme Generator",
            subtitle: "Create a new meme",
            triggers: &["m", "meme", "memes"],
        },
        SystemCommand {
            id: "cat",
            title: "Random Cat",
            subtitle: "Show a random cat image",
            triggers: &["c", "cat", "cats"],
        },
        SystemCommand {
            id: "dog",
            title: "Random Dog",
            subtitle: "Show a random dog image",
            triggers: &["d", "dog", "dogs"],
        },
        SystemCommand {
            id: "weather",
            title: "Weather",
            subtitle: "Show current weather information",
            triggers: &["w", "weather", "?"],
        },
        SystemCommand {
            id: "quit",
            title: "Quit",
            subtitle: "Exit Ctrl application",
            triggers: &["q", "quit", "exit"],
        },
        SystemCommand {
            id: "reload",
            title: "Reload",
            subtitle: "Reload application data",
            triggers: &["r", "reload", "refresh"],
        },
        SystemCommand {
            id: "sum",
            title: "Sum Calculator",
            subtitle: "Calculate sum of numbers",
            triggers: &["sum", "calc", "calculator", "math", "add", "addition"],
        },
        SystemCommand {
            id: "add-snippet",
            title: "Add Snippet",
            subtitle: "Create a new code snippet",
            triggers: &["add-snippet", "new-snippet", "snippet", "create-snippet"],
        },
        SystemCommand {
            id: "add-document",
            title: "Add Document",
            subtitle: "Create a new document link",
            triggers: &["add-document", "new-document", "document", "create-document"],
        },
        SystemCommand {
            id: "add-bookmark",
            title: "Add Bookmark",
            subtitle: "Create a new website bookmark",
            triggers: &["add-bookmark", "new-bookmark", "bookmark", "create-bookmark"],
        },
        SystemCommand {
            id: "tools",
            title: "Browse Tools",
            subtitle: "View all available third-party tools",
            triggers: &["tools", "tool", "utility", "utilities"],
        },
    ]
}

/// Matches built-in commands against an already lowercased, trimmed query.
/// An exact trigger hit outranks every other result kind and gets a starred
/// title; a prefix hit still ranks above fuzzy matches.
pub fn match_commands(query_lower: &str) -> Vec<SearchResult> {
    let mut results = Vec::new();
    if query_lower.is_empty() {
        return results;
    }

    for command in system_commands() {
        let exact = command.triggers.iter().any(|t| *t == query_lower);
        let prefix = command.triggers.iter().any(|t| t.starts_with(query_lower));
        if !exact && !prefix {
            continue;
        }

        let (title, score) = if exact {
            (format!("{EXACT_MARKER}{}", command.title), EXACT_TRIGGER_SCORE)
        } else {
            (command.title.to_string(), PREFIX_TRIGGER_SCORE)
        };
        results.push(SearchResult {
            kind: ResultKind::System,
            id: command.id.to_string(),
            title,
            subtitle: command.subtitle.to_string(),
            score,
            action: ResultAction::Command(command.id.to_string()),
        });
    }
    results
}

pub fn web_search_url(query: &str) -> String {
    format!(
        "https://www.google.com/search?q={}",
        url_encode_component(query)
    )
}

pub fn ai_chat_url(query: &str) -> String {
    format!("https://chat.openai.com/?q={}", url_encode_component(query))
}

fn url_encode_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => encoded.push(ch),
            _ => {
                let mut buf = [0u8; 4];
                for byte in ch.encode_utf8(&mut buf).bytes() {
                    encoded.push_str(&format!("%{byte:02X}"));
                }
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_trigger_outranks_prefix_and_gets_star() {
        let exact = match_commands("settings");
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].id, "settings");
        assert_eq!(exact[0].score, EXACT_TRIGGER_SCORE);
        assert!(exact[0].title.starts_with(EXACT_MARKER));

        let prefix = match_commands("se");
        assert_eq!(prefix.len(), 1);
        assert_eq!(prefix[0].id, "settings");
        assert_eq!(prefix[0].score, PREFIX_TRIGGER_SCORE);
        assert_eq!(prefix[0].title, "Settings");
    }

    #[test]
    fn single_letter_exact_hits_decorate_while_prefix_hits_do_not() {
        let results = match_commands("s");
        // "s" is itself a trigger of settings and a prefix of sum's triggers.
        let settings = results.iter().find(|r| r.id == "settings").unwrap();
        assert_eq!(settings.score, EXACT_TRIGGER_SCORE);
        let sum = results.iter().find(|r| r.id == "sum").unwrap();
        assert_eq!(sum.score, PREFIX_TRIGGER_SCORE);
    }

    #[test]
    fn shared_trigger_returns_both_commands_in_table_order() {
        let results = match_commands("m");
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        let movie = ids.iter().position(|id| *id == "movie").unwrap();
        let meme = ids.iter().position(|id| *id == "meme").unwrap();
        assert!(movie < meme);
        assert!(results.iter().all(|r| r.score == EXACT_TRIGGER_SCORE
            || r.score == PREFIX_TRIGGER_SCORE));
    }

    #[test]
    fn question_mark_is_exact_for_help_and_weather() {
        let results = match_commands("?");
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["help", "weather"]);
        assert!(results.iter().all(|r| r.score == EXACT_TRIGGER_SCORE));
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(match_commands("").is_empty());
    }

    #[test]
    fn url_encoding_escapes_spaces_and_reserved_characters() {
        assert_eq!(
            web_search_url("rust borrow checker"),
            "https://www.google.com/search?q=rust%20borrow%20checker"
        );
        assert_eq!(
            ai_chat_url("what is 1+1?"),
            "https://chat.openai.com/?q=what%20is%201%2B1%3F"
        );
    }
}
