use colored::Colorize;

use crate::cli::engine::CompletionReply;

/// Render a reply as one suggestion per line: insert value, then
/// description, tab-separated. With color on (a human looking at a tty),
/// badge glyphs are painted in their kind's color; piped output stays
/// machine-clean.
pub fn render_plain(reply: &CompletionReply, color: bool) -> String {
    let mut out = String::new();

    for suggestion in &reply.suggestions {
        let marker = match suggestion.badge {
            Some(badge) if color => {
                let (r, g, b) = badge.rgb();
                format!("{} ", badge.glyph.to_string().truecolor(r, g, b).bold())
            }
            _ => String::new(),
        };
        out.push_str(&format!("{marker}{}\t{}\n", suggestion.insert_value, suggestion.description));
    }

    out
}

/// Render a reply as the JSON document the shell integration consumes.
pub fn render_json(reply: &CompletionReply) -> serde_json::Result<String> {
    serde_json::to_string(reply)
}
