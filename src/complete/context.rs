/// A read-only snapshot of the tokens typed so far, up to and including the
/// token under completion. Built fresh by the host for every completion
/// request and discarded after use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenContext {
    tokens: Vec<String>,
}

impl TokenContext {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The value following the first occurrence of any of the option's
    /// spellings. Single left-to-right pass; the first hit wins. An option
    /// sitting at the end of the context with no value after it counts as
    /// absent.
    pub fn value_of(&self, option: &OptionSpec) -> Option<&str> {
        let index = self.tokens.iter().position(|token| option.matches(token))?;
        self.tokens.get(index + 1).map(String::as_str)
    }
}

/// One global option: the spellings it answers to and its help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl OptionSpec {
    pub fn matches(&self, token: &str) -> bool {
        self.aliases.contains(&token)
    }

    /// Canonical spelling, used when the option itself is suggested.
    pub fn name(&self) -> &'static str {
        self.aliases[0]
    }
}

pub static CONFIG: OptionSpec = OptionSpec {
    aliases: &["--config"],
    description: "Configuration to use",
};

pub static CONFIG_FILE: OptionSpec = OptionSpec {
    aliases: &["--config-file"],
    description: "Configuration file to use",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of_present() {
        let context = TokenContext::new(["--config", "myconf", "flags", "show"]);
        assert_eq!(context.value_of(&CONFIG), Some("myconf"));
    }

    #[test]
    fn test_value_of_absent() {
        let context = TokenContext::new(["flags", "show"]);
        assert_eq!(context.value_of(&CONFIG), None);
        assert_eq!(context.value_of(&CONFIG_FILE), None);
    }

    #[test]
    fn test_value_of_first_occurrence_wins() {
        let context = TokenContext::new(["--config", "first", "--config", "second"]);
        assert_eq!(context.value_of(&CONFIG), Some("first"));
    }

    #[test]
    fn test_option_at_end_of_context_is_absent() {
        let context = TokenContext::new(["projects", "show", "--config"]);
        assert_eq!(context.value_of(&CONFIG), None);
    }

    #[test]
    fn test_both_options_found_independently() {
        let context = TokenContext::new(["--config-file", "/tmp/ldc.json", "--config", "prod"]);
        assert_eq!(context.value_of(&CONFIG), Some("prod"));
        assert_eq!(context.value_of(&CONFIG_FILE), Some("/tmp/ldc.json"));
    }

    #[test]
    fn test_empty_context() {
        let context = TokenContext::default();
        assert!(context.is_empty());
        assert_eq!(context.value_of(&CONFIG), None);
    }

    #[test]
    fn test_alias_matching() {
        let option = OptionSpec {
            aliases: &["--config", "-c"],
            description: "Configuration to use",
        };
        let context = TokenContext::new(["-c", "short"]);
        assert_eq!(context.value_of(&option), Some("short"));
        assert_eq!(option.name(), "--config");
    }
}
