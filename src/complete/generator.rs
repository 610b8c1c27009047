use std::time::Duration;

use log::warn;
use tokio::process::Command;
use tokio::time::timeout;

use crate::complete::command::synthesize;
use crate::complete::context::TokenContext;
use crate::complete::parser::{RowShape, scan};
use crate::complete::suggest::{EntityKind, Suggestion, build};

/// Where a generator's candidates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// A table-rendering subcommand of the completed CLI.
    Table { lookup: &'static str, shape: RowShape },
    /// Keys of the on-disk configuration store.
    // TODO: honor --config-file from the context instead of the fixed path
    ConfigKeys,
}

/// Produces dynamic candidate values for one argument slot by running an
/// external command and parsing its output. Holds no state between
/// invocations; every fetch is self-contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    pub kind: EntityKind,
    source: Source,
}

pub static CONFIGS: Generator = Generator {
    kind: EntityKind::Config,
    source: Source::ConfigKeys,
};

pub static PROJECTS: Generator = Generator {
    kind: EntityKind::Project,
    source: Source::Table {
        lookup: "projects list",
        shape: RowShape::KeyName,
    },
};

pub static ENVIRONMENTS: Generator = Generator {
    kind: EntityKind::Environment,
    source: Source::Table {
        lookup: "environments list",
        shape: RowShape::KeyName,
    },
};

pub static FLAGS: Generator = Generator {
    kind: EntityKind::Flag,
    source: Source::Table {
        lookup: "flags list",
        shape: RowShape::KeyNameDetail,
    },
};

impl Generator {
    /// The shell command whose output feeds this generator. Constructed
    /// fresh per request; option values may have changed since the last
    /// keystroke.
    pub fn script(&self, program: &str, context: &TokenContext) -> String {
        match self.source {
            Source::Table { lookup, .. } => format!("{} {}", program, synthesize(lookup, context)),
            Source::ConfigKeys => "jq 'keys' ~/.config/ldc.json".to_string(),
        }
    }

    /// Turn raw command output into suggestions. Never fails; unusable
    /// output yields an empty list.
    pub fn parse(&self, raw: &str) -> Vec<Suggestion> {
        match self.source {
            Source::Table { shape, .. } => build(scan(raw, shape).records, self.kind),
            Source::ConfigKeys => match serde_json::from_str::<Vec<String>>(raw) {
                Ok(keys) => keys
                    .into_iter()
                    .map(|key| Suggestion::plain(key.clone(), key))
                    .collect(),
                Err(err) => {
                    warn!("config store listing did not parse: {err}");
                    Vec::new()
                }
            },
        }
    }
}

/// Runs lookup commands on behalf of generators. One fetch per completion
/// request; nothing is shared or cached across requests.
#[derive(Debug, Clone)]
pub struct Fetcher {
    program: String,
    deadline: Duration,
}

impl Fetcher {
    pub fn new(program: impl Into<String>, deadline: Duration) -> Self {
        Self {
            program: program.into(),
            deadline,
        }
    }

    /// Run the generator's script and parse whatever comes back. A hung,
    /// failed, or garbled command yields no candidates rather than an
    /// error; completion must stay responsive no matter what the CLI does.
    pub async fn fetch(&self, generator: &Generator, context: &TokenContext) -> Vec<Suggestion> {
        let script = generator.script(&self.program, context);

        let run = Command::new("sh").arg("-c").arg(&script).kill_on_drop(true).output();
        let output = match timeout(self.deadline, run).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => {
                warn!("lookup `{script}` failed to run: {err}");
                return Vec::new();
            }
            Err(_) => {
                warn!("lookup `{script}` timed out after {:?}", self.deadline);
                return Vec::new();
            }
        };

        if !output.status.success() {
            warn!("lookup `{script}` exited with {}", output.status);
            return Vec::new();
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        generator.parse(&raw)
    }
}
