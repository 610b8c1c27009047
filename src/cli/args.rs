use clap::Parser;

/// Arguments for one completion request. The shell integration invokes the
/// binary once per keystroke it cares about; debouncing is its job.
#[derive(Debug, Parser)]
#[command(
    name = "ldc-complete",
    version,
    about = "Shell completion provider for ldc"
)]
pub struct Cli {
    /// The in-progress command line, as typed so far
    pub line: String,

    /// Program to run lookup subcommands with
    #[arg(long, default_value = "ldc")]
    pub program: String,

    /// Seconds to wait for a lookup command before giving up
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Emit a JSON document instead of plain lines
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ldc-complete", "ldc projects show "]);
        assert_eq!(cli.line, "ldc projects show ");
        assert_eq!(cli.program, "ldc");
        assert_eq!(cli.timeout, 5);
        assert!(!cli.json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "ldc-complete",
            "--program",
            "./run.sh",
            "--timeout",
            "2",
            "--json",
            "ldc flags on ",
        ]);
        assert_eq!(cli.program, "./run.sh");
        assert_eq!(cli.timeout, 2);
        assert!(cli.json);
    }
}
