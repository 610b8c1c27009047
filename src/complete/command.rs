use crate::complete::context::{CONFIG, CONFIG_FILE, TokenContext};

/// Build the lookup command for one fetch, carrying over whichever global
/// options the user has already picked. Order is fixed: base command, then
/// `--config`, then `--config-file`. Both may appear; precedence between
/// them is the underlying CLI's business, not ours.
pub fn synthesize(lookup: &str, context: &TokenContext) -> String {
    let mut command = lookup.to_string();

    if let Some(config) = context.value_of(&CONFIG) {
        command.push_str(&format!(" --config {config}"));
    }

    if let Some(path) = context.value_of(&CONFIG_FILE) {
        command.push_str(&format!(" --config-file {path}"));
    }

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_lookup_when_no_options_typed() {
        let context = TokenContext::new(["projects", "show"]);
        assert_eq!(synthesize("projects list", &context), "projects list");
    }

    #[test]
    fn test_config_propagated() {
        let context = TokenContext::new(["--config", "myconf", "flags", "show"]);
        assert_eq!(synthesize("flags list", &context), "flags list --config myconf");
    }

    #[test]
    fn test_config_file_propagated() {
        let context = TokenContext::new(["--config-file", "/tmp/ldc.json"]);
        assert_eq!(
            synthesize("environments list", &context),
            "environments list --config-file /tmp/ldc.json"
        );
    }

    #[test]
    fn test_both_options_in_fixed_order() {
        let context = TokenContext::new(["--config-file", "/tmp/ldc.json", "--config", "prod"]);
        assert_eq!(
            synthesize("projects list", &context),
            "projects list --config prod --config-file /tmp/ldc.json"
        );
    }

    #[test]
    fn test_dangling_option_omitted() {
        let context = TokenContext::new(["projects", "show", "--config"]);
        assert_eq!(synthesize("projects list", &context), "projects list");
    }
}
