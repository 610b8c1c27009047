use serde::Serialize;

use crate::complete::context::TokenContext;
use crate::complete::generator::Fetcher;
use crate::complete::suggest::Suggestion;
use crate::tree::{ArgSlot, Node, OptionSlot, Template};

/// What one completion request produced, plus the slot hints the shell
/// integration consumes (confirm-before-accept, suppress re-fetch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReply {
    pub suggestions: Vec<Suggestion>,
    pub debounce: bool,
    pub is_dangerous: bool,
}

impl CompletionReply {
    fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
            debounce: false,
            is_dangerous: false,
        }
    }
}

/// Drives one completion request: tokenize the line, walk the grammar to
/// the active node or slot, gather static and dynamic suggestions, and
/// rank them against the partial token.
pub struct Engine {
    tree: Node,
    fetcher: Fetcher,
}

/// Where the walk over the already-typed tokens ended up.
struct Walk<'a> {
    node: &'a Node,
    positionals: usize,
    pending_option: Option<&'a OptionSlot>,
}

impl Engine {
    pub fn new(tree: Node, fetcher: Fetcher) -> Self {
        Self { tree, fetcher }
    }

    pub async fn complete(&self, line: &str) -> CompletionReply {
        let (mut tokens, partial) = tokenize(line);
        let prefix = if partial { tokens.pop().unwrap_or_default() } else { String::new() };

        // the first token is the program being completed, not grammar;
        // until it has been typed there is nothing to complete
        let Some((_program, rest)) = tokens.split_first() else {
            return CompletionReply::empty();
        };
        let rest: Vec<String> = rest.to_vec();
        let context = TokenContext::new(rest.clone());
        let walk = self.walk(&rest);

        // option value in flight, e.g. `ldc --config <TAB>`
        if let Some(slot) = walk.pending_option.and_then(|option| option.arg.as_ref()) {
            let suggestions = rank(self.slot_suggestions(slot, &context).await, &prefix);
            return CompletionReply {
                suggestions,
                debounce: slot.debounce,
                is_dangerous: slot.dangerous,
            };
        }

        if prefix.starts_with('-') {
            let suggestions = rank(self.option_suggestions(), &prefix);
            return CompletionReply {
                suggestions,
                debounce: false,
                is_dangerous: false,
            };
        }

        let mut pool = Vec::new();
        let mut active: Option<&ArgSlot> = None;

        if walk.positionals == 0 {
            pool.extend(subcommand_suggestions(walk.node));
        }
        if let Some(slot) = walk.node.args.get(walk.positionals) {
            active = Some(slot);
            pool.extend(self.slot_suggestions(slot, &context).await);
        }

        CompletionReply {
            suggestions: rank(pool, &prefix),
            debounce: active.map(|slot| slot.debounce).unwrap_or(false),
            is_dangerous: active.map(|slot| slot.dangerous).unwrap_or(false),
        }
    }

    /// Consume the typed tokens against the grammar: global options are
    /// swallowed with their values wherever they appear, subcommand names
    /// descend, and anything else fills the current node's positional
    /// slots.
    fn walk<'a>(&'a self, tokens: &[String]) -> Walk<'a> {
        let mut node = &self.tree;
        let mut positionals = 0usize;
        let mut pending_option = None;

        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            if let Some(option) = self.tree.options.iter().find(|slot| slot.spec.matches(token)) {
                if option.arg.is_some() && iter.next().is_none() {
                    pending_option = Some(option);
                }
                continue;
            }

            if positionals == 0 {
                if let Some(child) = node.find(token) {
                    node = child;
                    continue;
                }
            }

            positionals += 1;
        }

        Walk { node, positionals, pending_option }
    }

    async fn slot_suggestions(&self, slot: &ArgSlot, context: &TokenContext) -> Vec<Suggestion> {
        if let Some(generator) = slot.generator {
            return self.fetcher.fetch(generator, context).await;
        }
        match slot.template {
            Some(Template::FilePaths) => file_suggestions(),
            None => Vec::new(),
        }
    }

    fn option_suggestions(&self) -> Vec<Suggestion> {
        self.tree
            .options
            .iter()
            .map(|slot| Suggestion::plain(slot.spec.name(), slot.spec.description))
            .collect()
    }
}

fn subcommand_suggestions(node: &Node) -> Vec<Suggestion> {
    node.subcommands
        .iter()
        .map(|sub| Suggestion::plain(sub.name(), sub.description))
        .collect()
}

fn file_suggestions() -> Vec<Suggestion> {
    let Ok(entries) = std::fs::read_dir(".") else {
        return Vec::new();
    };

    let mut suggestions: Vec<Suggestion> = entries
        .flatten()
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let kind = match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => "directory",
                _ => "file",
            };
            Suggestion::plain(name, kind)
        })
        .collect();

    suggestions.sort_by(|a, b| a.name.cmp(&b.name));
    suggestions
}

/// Keep suggestions whose insert value starts with what was typed,
/// preserving source order. When nothing matches a non-empty prefix, fall
/// back to the nearest names instead of going silent.
fn rank(pool: Vec<Suggestion>, prefix: &str) -> Vec<Suggestion> {
    if prefix.is_empty() {
        return pool;
    }

    let matches: Vec<Suggestion> = pool
        .iter()
        .filter(|suggestion| suggestion.insert_value.starts_with(prefix))
        .cloned()
        .collect();
    if !matches.is_empty() {
        return matches;
    }

    let mut near: Vec<(usize, Suggestion)> = pool
        .into_iter()
        .map(|suggestion| (levenshtein::levenshtein(prefix, &suggestion.insert_value), suggestion))
        .filter(|(distance, _)| *distance <= 3)
        .collect();
    near.sort_by_key(|(distance, _)| *distance);
    near.into_iter().take(3).map(|(_, suggestion)| suggestion).collect()
}

/// Split a command line into tokens, honoring single and double quotes.
/// The bool reports whether the line ended mid-token, i.e. whether the
/// last token is the one under completion.
fn tokenize(line: &str) -> (Vec<String>, bool) {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    (tokens, in_token)
}
