pub mod ldc;

pub use ldc::ldc;

use crate::complete::context::OptionSpec;
use crate::complete::generator::Generator;

/// One command or subcommand: its spellings, help text, children, and the
/// positional arguments it takes. Data only; the engine interprets it.
#[derive(Debug, Clone)]
pub struct Node {
    pub names: &'static [&'static str],
    pub description: &'static str,
    pub subcommands: Vec<Node>,
    pub args: Vec<ArgSlot>,
    pub options: Vec<OptionSlot>,
}

impl Node {
    pub fn new(names: &'static [&'static str], description: &'static str) -> Self {
        Self {
            names,
            description,
            subcommands: Vec::new(),
            args: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Canonical spelling, used when the command itself is suggested.
    pub fn name(&self) -> &'static str {
        self.names[0]
    }

    pub fn matches(&self, token: &str) -> bool {
        self.names.contains(&token)
    }

    pub fn subcommand(mut self, node: Node) -> Self {
        self.subcommands.push(node);
        self
    }

    pub fn arg(mut self, slot: ArgSlot) -> Self {
        self.args.push(slot);
        self
    }

    pub fn option(mut self, option: OptionSlot) -> Self {
        self.options.push(option);
        self
    }

    pub fn find(&self, token: &str) -> Option<&Node> {
        self.subcommands.iter().find(|node| node.matches(token))
    }
}

/// A positional argument slot, possibly bound to a generator or a static
/// template. The `dangerous` and `debounce` hints are advisory and
/// consumed by the host, not by generators.
#[derive(Debug, Clone)]
pub struct ArgSlot {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub optional: bool,
    pub dangerous: bool,
    pub debounce: bool,
    pub generator: Option<&'static Generator>,
    pub template: Option<Template>,
}

impl ArgSlot {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            description: None,
            optional: false,
            dangerous: false,
            debounce: false,
            generator: None,
            template: None,
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn dangerous(mut self) -> Self {
        self.dangerous = true;
        self
    }

    pub fn debounce(mut self) -> Self {
        self.debounce = true;
        self
    }

    pub fn generator(mut self, generator: &'static Generator) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }
}

/// Completion sources that need no external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    FilePaths,
}

/// A global option together with the argument slot its value completes
/// from.
#[derive(Debug, Clone)]
pub struct OptionSlot {
    pub spec: &'static OptionSpec,
    pub arg: Option<ArgSlot>,
}

impl OptionSlot {
    pub fn new(spec: &'static OptionSpec) -> Self {
        Self { spec, arg: None }
    }

    pub fn arg(mut self, slot: ArgSlot) -> Self {
        self.arg = Some(slot);
        self
    }
}
