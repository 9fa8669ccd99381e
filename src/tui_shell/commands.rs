use super::CommandDef;

pub(super) fn global_command_defs() -> Vec<CommandDef> {
    vec![
        CommandDef {
            name: "help",
            aliases: &["h", "?"],
            usage: "help",
            help: "Show available commands",
        },
        CommandDef {
            name: "login",
            aliases: &[],
            usage: "login",
            help: "Log in to the backend (guided prompt)",
        },
        CommandDef {
            name: "logout",
            aliases: &[],
            usage: "logout",
            help: "Clear the stored session",
        },
        CommandDef {
            name: "forgot",
            aliases: &[],
            usage: "forgot",
            help: "Request a password-reset email",
        },
        CommandDef {
            name: "reset",
            aliases: &[],
            usage: "reset [token]",
            help: "Reset password with an emailed token",
        },
        CommandDef {
            name: "license",
            aliases: &[],
            usage: "license",
            help: "Show license and feature flags",
        },
        CommandDef {
            name: "alerts",
            aliases: &[],
            usage: "alerts",
            help: "Open alert settings",
        },
        CommandDef {
            name: "backups",
            aliases: &[],
            usage: "backups",
            help: "Open backup settings",
        },
        CommandDef {
            name: "timestamps",
            aliases: &["ts"],
            usage: "timestamps",
            help: "Toggle relative/absolute timestamps",
        },
        CommandDef {
            name: "quit",
            aliases: &[],
            usage: "quit",
            help: "Exit",
        },
    ]
}

pub(super) fn instances_command_defs() -> Vec<CommandDef> {
    let mut out = global_command_defs();
    out.extend(vec![
        CommandDef {
            name: "refresh",
            aliases: &["r"],
            usage: "refresh",
            help: "Refetch the instance list",
        },
        CommandDef {
            name: "open",
            aliases: &["o"],
            usage: "open",
            help: "Open the selected instance",
        },
        CommandDef {
            name: "add",
            aliases: &[],
            usage: "add",
            help: "Register a new instance (guided prompt)",
        },
        CommandDef {
            name: "edit",
            aliases: &[],
            usage: "edit",
            help: "Edit the selected instance",
        },
        CommandDef {
            name: "export",
            aliases: &[],
            usage: "export",
            help: "Download all workflows of the selected instance",
        },
    ]);
    out
}

pub(super) fn detail_command_defs() -> Vec<CommandDef> {
    let mut out = global_command_defs();
    out.extend(vec![
        CommandDef {
            name: "tab",
            aliases: &["t"],
            usage: "tab <overview|workflows|errors|patterns>",
            help: "Switch tab (Tab key cycles)",
        },
        CommandDef {
            name: "refresh",
            aliases: &["r"],
            usage: "refresh",
            help: "Refetch the active tab",
        },
        CommandDef {
            name: "filter",
            aliases: &["f"],
            usage: "filter <active|inactive|all>",
            help: "Filter workflows by active flag",
        },
        CommandDef {
            name: "select",
            aliases: &["s"],
            usage: "select <all|none>",
            help: "Select/deselect the filtered workflows",
        },
        CommandDef {
            name: "export",
            aliases: &[],
            usage: "export",
            help: "Download the selected workflows",
        },
        CommandDef {
            name: "import",
            aliases: &[],
            usage: "import [file.json]",
            help: "Import a workflow definition file",
        },
        CommandDef {
            name: "range",
            aliases: &[],
            usage: "range <1d|14d|1m|6m|12m>",
            help: "Set the error-pattern time range",
        },
    ]);
    out
}

pub(super) fn alerts_command_defs() -> Vec<CommandDef> {
    let mut out = global_command_defs();
    out.extend(vec![
        CommandDef {
            name: "save",
            aliases: &[],
            usage: "save",
            help: "Save alert settings",
        },
        CommandDef {
            name: "refresh",
            aliases: &["r"],
            usage: "refresh",
            help: "Reload alert settings",
        },
    ]);
    out
}

pub(super) fn backups_command_defs() -> Vec<CommandDef> {
    let mut out = global_command_defs();
    out.extend(vec![
        CommandDef {
            name: "save",
            aliases: &[],
            usage: "save",
            help: "Save backup settings",
        },
        CommandDef {
            name: "refresh",
            aliases: &["r"],
            usage: "refresh",
            help: "Reload backup settings",
        },
    ]);
    out
}
