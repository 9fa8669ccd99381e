use super::*;

impl App {
    pub(super) fn available_command_defs(&self) -> Vec<CommandDef> {
        match self.mode() {
            UiMode::Instances => instances_command_defs(),
            UiMode::Detail => detail_command_defs(),
            UiMode::Alerts => alerts_command_defs(),
            UiMode::Backups => backups_command_defs(),
        }
    }

    pub(super) fn recompute_suggestions(&mut self) {
        let show = self.input.buf.trim_start().starts_with('/');
        let q = self.input.buf.trim_start_matches('/').trim().to_lowercase();
        if q.is_empty() {
            if show {
                let mut defs = self.available_command_defs();
                defs.sort_by(|a, b| a.name.cmp(b.name));
                self.suggestions = defs;
                self.suggestion_selected = 0;
            } else {
                self.suggestions.clear();
                self.suggestion_selected = 0;
            }
            return;
        }

        // Only match the first token for the palette.
        let first = q.split_whitespace().next().unwrap_or("");
        if first.is_empty() {
            self.suggestions.clear();
            self.suggestion_selected = 0;
            return;
        }

        let mut scored = Vec::new();
        for d in self.available_command_defs() {
            let mut best = score_match(first, d.name);
            for &a in d.aliases {
                best = best.max(score_match(first, a));
            }
            if best > 0 {
                scored.push((best, d));
            }
        }

        sort_scored_suggestions(&mut scored);
        self.suggestions = scored.into_iter().map(|(_, d)| d).collect();
        self.suggestion_selected = self
            .suggestion_selected
            .min(self.suggestions.len().saturating_sub(1));
    }

    pub(super) fn apply_selected_suggestion(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let show = self.input.buf.trim_start().starts_with('/');
        let sel = self
            .suggestion_selected
            .min(self.suggestions.len().saturating_sub(1));
        let cmd = self.suggestions[sel].name;

        // If the user opened suggestions with `/`, keep it so the list stays visible.
        let prefix = if show { "/" } else { "" };
        let raw = self.input.buf.trim_start_matches('/');
        let trimmed = raw.trim_start();
        let mut iter = trimmed.splitn(2, char::is_whitespace);
        let first = iter.next().unwrap_or("");
        let rest = iter.next().unwrap_or("");

        if first.is_empty() || rest.is_empty() {
            self.input.set(format!("{}{} ", prefix, cmd));
        } else {
            self.input
                .set(format!("{}{} {}", prefix, cmd, rest.trim_start()));
        }
        self.recompute_suggestions();
    }

    pub(super) fn run_current_input(&mut self) {
        let line = self.input.buf.trim().to_string();
        if line.is_empty() {
            return;
        }

        self.input.push_history(&line);
        self.push_command(format!("{} {}", self.prompt(), line));
        self.input.clear();
        self.suggestions.clear();
        self.suggestion_selected = 0;

        let line = line.trim_start().strip_prefix('/').unwrap_or(&line).trim();
        let tokens = match tokenize(line) {
            Ok(t) => t,
            Err(err) => {
                self.push_error(format!("parse error: {}", err));
                return;
            }
        };
        if tokens.is_empty() {
            return;
        }

        let mut cmd = tokens[0].to_lowercase();
        let args = &tokens[1..];

        let mut defs = self.available_command_defs();
        defs.sort_by(|a, b| a.name.cmp(b.name));

        // Resolve aliases, then unambiguous prefixes.
        if !defs.iter().any(|d| d.name == cmd) {
            if let Some(d) = defs.iter().find(|d| d.aliases.contains(&cmd.as_str())) {
                cmd = d.name.to_string();
            } else {
                let matches: Vec<&CommandDef> =
                    defs.iter().filter(|d| d.name.starts_with(&cmd)).collect();
                match matches.len() {
                    1 => cmd = matches[0].name.to_string(),
                    0 => {
                        self.push_error(format!("unknown command: {}", cmd));
                        return;
                    }
                    _ => {
                        let names: Vec<&str> = matches.iter().map(|d| d.name).collect();
                        self.push_error(format!(
                            "ambiguous command: {} ({})",
                            cmd,
                            names.join(", ")
                        ));
                        return;
                    }
                }
            }
        }

        self.dispatch(&cmd, args);
    }

    fn dispatch(&mut self, cmd: &str, args: &[String]) {
        // Commands available everywhere.
        match cmd {
            "help" => {
                self.cmd_help();
                return;
            }
            "login" => {
                self.start_login_wizard();
                return;
            }
            "logout" => {
                self.logout();
                return;
            }
            "forgot" => {
                self.start_forgot_wizard();
                return;
            }
            "reset" => {
                self.start_reset_wizard(args.first().cloned());
                return;
            }
            "license" => {
                self.cmd_license();
                return;
            }
            "alerts" => {
                if self.mode() != UiMode::Alerts {
                    self.open_alerts_view();
                }
                return;
            }
            "backups" => {
                if self.mode() != UiMode::Backups {
                    self.open_backups_view();
                }
                return;
            }
            "timestamps" => {
                self.ts_mode = self.ts_mode.toggle();
                self.push_output(vec![format!("timestamps: {}", self.ts_mode.label())]);
                return;
            }
            "quit" => {
                self.quit = true;
                return;
            }
            _ => {}
        }

        match self.mode() {
            UiMode::Instances => self.dispatch_instances(cmd, args),
            UiMode::Detail => self.dispatch_detail(cmd, args),
            UiMode::Alerts => self.dispatch_alerts(cmd, args),
            UiMode::Backups => self.dispatch_backups(cmd, args),
        }
    }

    fn cmd_help(&mut self) {
        let mut defs = self.available_command_defs();
        defs.sort_by(|a, b| a.name.cmp(b.name));

        let mut lines = Vec::new();
        for d in defs {
            lines.push(format!("{:<40} {}", d.usage, d.help));
        }
        lines.push("".to_string());
        lines.push("Arrows move; Enter runs the row's default action.".to_string());
        self.open_modal("Help", lines);
    }

    fn cmd_license(&mut self) {
        match self.license.info() {
            Some(info) => {
                let mut lines = vec![
                    format!("edition: {}", info.edition),
                    format!("premium: {}", self.license.is_premium()),
                    if info.max_instances == crate::license::UNLIMITED_INSTANCES {
                        "max instances: unlimited".to_string()
                    } else {
                        format!("max instances: {}", info.max_instances)
                    },
                    "".to_string(),
                ];
                let mut keys: Vec<&String> = info.features.keys().collect();
                keys.sort();
                for key in keys {
                    lines.push(format!(
                        "{}: {}",
                        key,
                        if info.features[key] { "on" } else { "off" }
                    ));
                }
                self.open_modal("License", lines);
            }
            None => {
                self.push_error(
                    "license not loaded (session runs in non-premium mode)".to_string(),
                );
            }
        }
    }
}

fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !cur.is_empty() {
                    out.push(std::mem::take(&mut cur));
                }
            }
            c => cur.push(c),
        }
    }
    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn tokenize_splits_on_whitespace_and_honors_quotes() {
        assert_eq!(
            tokenize("filter active").unwrap(),
            vec!["filter".to_string(), "active".to_string()]
        );
        assert_eq!(
            tokenize("import \"my workflows.json\"").unwrap(),
            vec!["import".to_string(), "my workflows.json".to_string()]
        );
        assert!(tokenize("import \"unterminated").is_err());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
