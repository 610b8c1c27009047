use crate::complete::context::{CONFIG, CONFIG_FILE};
use crate::complete::generator::{CONFIGS, ENVIRONMENTS, FLAGS, PROJECTS};
use crate::tree::{ArgSlot, Node, OptionSlot, Template};

/// The full `ldc` grammar: commands, subcommands, aliases, help text, and
/// which argument slots complete dynamically.
pub fn ldc() -> Node {
    Node::new(&["ldc"], "ldc is a command-line api client for LaunchDarkly")
        .option(OptionSlot::new(&CONFIG).arg(ArgSlot::new("config name").generator(&CONFIGS)))
        .option(OptionSlot::new(&CONFIG_FILE).arg(ArgSlot::new("config file path").template(Template::FilePaths)))
        .subcommand(configs())
        .subcommand(projects())
        .subcommand(environments())
        .subcommand(flags())
        .subcommand(goals())
        .subcommand(Node::new(&["log"], "search audit log entries"))
}

fn configs() -> Node {
    Node::new(&["configs"], "Update configurations")
        .subcommand(
            Node::new(&["set"], "Change configuration")
                .arg(ArgSlot::new("config name").generator(&CONFIGS)),
        )
        .subcommand(
            Node::new(&["add"], "add config <config name> <api token> <project> <environment> [server url]")
                .arg(ArgSlot::new("config name"))
                .arg(ArgSlot::new("api token"))
                .arg(ArgSlot::new("project").describe("default project key").generator(&PROJECTS).debounce())
                .arg(ArgSlot::new("environment").describe("default environment key").generator(&ENVIRONMENTS).debounce())
                .arg(ArgSlot::new("server url").optional()),
        )
        .subcommand(
            Node::new(&["rename", "rn", "mv"], "rename config <config name> <new name>")
                .arg(ArgSlot::new("config name").generator(&CONFIGS))
                .arg(ArgSlot::new("new name")),
        )
        .subcommand(
            Node::new(&["edit", "update"], "update config: <config name> <api token> <project> <environment> [server url]")
                .arg(ArgSlot::new("config name").generator(&CONFIGS))
                .arg(ArgSlot::new("api token"))
                .arg(ArgSlot::new("project").describe("default project key").generator(&PROJECTS).debounce())
                .arg(ArgSlot::new("environment").describe("default environment key").generator(&ENVIRONMENTS).debounce())
                .arg(ArgSlot::new("server url").optional()),
        )
        .subcommand(
            Node::new(&["rm", "remove", "delete", "del"], "remove config: <config name>")
                .arg(ArgSlot::new("config name").generator(&CONFIGS).dangerous()),
        )
}

fn projects() -> Node {
    Node::new(&["projects", "project"], "list and operate on projects")
        .subcommand(Node::new(&["list"], "list projects"))
        .subcommand(
            Node::new(&["show"], "show project")
                .arg(ArgSlot::new("project key").generator(&PROJECTS).debounce()),
        )
        .subcommand(
            Node::new(&["create", "new"], "create a project: project create key [name]")
                .arg(ArgSlot::new("project key"))
                .arg(ArgSlot::new("name").optional()),
        )
        .subcommand(
            Node::new(&["delete", "remove"], "delete a project: project delete key")
                .arg(ArgSlot::new("project key").generator(&PROJECTS).debounce().dangerous()),
        )
        .subcommand(
            Node::new(&["switch", "select"], "switch the current project")
                .arg(ArgSlot::new("project key").generator(&PROJECTS).debounce()),
        )
}

fn environments() -> Node {
    Node::new(
        &["environments", "environment", "env", "envs", "e"],
        "list and operate on environments",
    )
    .subcommand(Node::new(&["list", "ls", "l"], "list environments"))
    .subcommand(
        Node::new(&["show"], "show environment")
            .arg(ArgSlot::new("environment key").generator(&ENVIRONMENTS).debounce()),
    )
    .subcommand(
        Node::new(&["create", "new", "c", "add"], "create a environment: environment create key [name]")
            .arg(ArgSlot::new("environment key"))
            .arg(ArgSlot::new("name").optional()),
    )
    .subcommand(
        Node::new(&["delete", "remove", "d", "del", "rm"], "delete a environment: environment delete key")
            .arg(ArgSlot::new("environment key").generator(&ENVIRONMENTS).debounce().dangerous()),
    )
}

fn flags() -> Node {
    Node::new(&["flags", "flag"], "list and operate on flags")
        .subcommand(Node::new(&["list", "ls", "l"], "list flags"))
        .subcommand(
            Node::new(&["show"], "show flag")
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce()),
        )
        .subcommand(
            Node::new(&["create", "new"], "Create new flag")
                .arg(ArgSlot::new("flag key"))
                .arg(ArgSlot::new("name").optional()),
        )
        .subcommand(
            Node::new(&["create-toggle", "new-toggle", "create-boolean"], "Create new boolean flag")
                .arg(ArgSlot::new("flag key"))
                .arg(ArgSlot::new("name").optional()),
        )
        .subcommand(
            Node::new(&["add-tag"], "add a tag to a flag: flag add-tag flag tag")
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce())
                .arg(ArgSlot::new("tag")),
        )
        .subcommand(
            Node::new(&["remove-tag"], "remove a tag from a flag: flag remove-tag flag tag")
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce())
                .arg(ArgSlot::new("tag")),
        )
        .subcommand(
            Node::new(&["on"], "turn a boolean flag on")
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce()),
        )
        .subcommand(
            Node::new(&["off"], "turn a boolean flag off")
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce()),
        )
        .subcommand(
            Node::new(
                &["rollout"],
                "set the rollout for a flag.  rollout [N:][name:][variation 0 %] [N:][name:][variation 1 %] ...",
            )
            .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce())
            .arg(ArgSlot::new("rollout").optional()),
        )
        .subcommand(
            Node::new(&["fallthrough"], "set the fallthrough value for a flag.  fallthrough <index> ...")
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce())
                .arg(ArgSlot::new("index").optional()),
        )
        .subcommand(
            Node::new(&["edit"], "edit a flag's json in a text editor")
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce()),
        )
        .subcommand(
            Node::new(&["delete", "remove"], "Delete a flag")
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce().dangerous()),
        )
        .subcommand(
            Node::new(&["status"], "show flag's statuses")
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce()),
        )
}

fn goals() -> Node {
    Node::new(&["goals"], "list and operate on goals")
        .subcommand(Node::new(&["list", "ls", "l"], "list goals"))
        .subcommand(
            Node::new(&["create", "new"], "Create new goal")
                .arg(ArgSlot::new("goal name")),
        )
        .subcommand(
            Node::new(&["custom"], "Create new custom goal")
                .arg(ArgSlot::new("goal name")),
        )
        .subcommand(
            Node::new(&["show"], "show a goal's details [goal]")
                .arg(ArgSlot::new("goal name")),
        )
        .subcommand(
            Node::new(&["results"], "show a goal's experiment results for a flag [show <goal name> <flag key>]")
                .arg(ArgSlot::new("goal name"))
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce()),
        )
        .subcommand(
            Node::new(&["attach"], "attach to flag")
                .arg(ArgSlot::new("goal name"))
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce()),
        )
        .subcommand(
            Node::new(&["detach"], "detach from flag")
                .arg(ArgSlot::new("goal name"))
                .arg(ArgSlot::new("flag key").generator(&FLAGS).debounce()),
        )
        .subcommand(
            Node::new(&["edit"], "edit a goal's json in a text editor")
                .arg(ArgSlot::new("goal name")),
        )
        .subcommand(
            Node::new(&["delete", "remove"], "Delete a goal")
                .arg(ArgSlot::new("goal name").dangerous()),
        )
}
