use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::cache::{QueryCache, QueryKey};
use crate::license::LicenseState;
use crate::model::{AlertForm, BackupInterval, BackupStatus, Instance, PatternRange};
use crate::remote::RemoteClient;
use crate::session::AuthSession;
use crate::store::ConfigStore;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

mod commands;
use commands::{
    alerts_command_defs, backups_command_defs, detail_command_defs, instances_command_defs,
};

mod input;
use input::Input;

mod suggest;
use suggest::{score_match, sort_scored_suggestions};

mod view;
use view::{RenderCtx, View, render_view_chrome};

mod views;
use views::{
    AlertsItemKind, AlertsView, BackupForm, BackupsItemKind, BackupsView, DetailTab, DetailView,
    InstancesView, WorkflowFilter, WorkflowRow, workflow_rows,
};

mod modal;

mod wizard;
use wizard::{AddInstanceWizard, EditInstanceWizard, ForgotWizard, LoginWizard, ResetWizard};

mod app;
use app::App;

pub fn run() -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::load();
    let res = app::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UiMode {
    Instances,
    Detail,
    Alerts,
    Backups,
}

impl UiMode {
    fn prompt(self) -> &'static str {
        match self {
            UiMode::Instances => "instances>",
            UiMode::Detail => "instance>",
            UiMode::Alerts => "alerts>",
            UiMode::Backups => "backups>",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimestampMode {
    Relative,
    Absolute,
}

impl TimestampMode {
    fn toggle(self) -> Self {
        match self {
            TimestampMode::Relative => TimestampMode::Absolute,
            TimestampMode::Absolute => TimestampMode::Relative,
        }
    }

    fn label(self) -> &'static str {
        match self {
            TimestampMode::Relative => "relative",
            TimestampMode::Absolute => "absolute",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryKind {
    Command,
    Output,
    Error,
}

#[derive(Clone, Debug)]
struct ScrollEntry {
    ts: String,
    kind: EntryKind,
    lines: Vec<String>,
}

#[derive(Debug)]
enum ModalKind {
    Viewer,
    TextInput {
        action: TextInputAction,
        prompt: String,
    },
}

#[derive(Debug, Clone)]
enum TextInputAction {
    LoginUrl,
    LoginUsername,
    LoginPassword,

    ForgotEmail,

    ResetToken,
    ResetPassword,
    ResetConfirm,

    AddInstanceName,
    AddInstanceUrl,
    AddInstanceApiKey,

    EditInstanceName,
    EditInstanceUrl,
    EditInstanceApiKey,

    AlertsEmail,
    BackupsFolder,

    ImportPath,
}

#[derive(Debug)]
struct Modal {
    title: String,
    lines: Vec<String>,
    scroll: usize,

    kind: ModalKind,
    input: Input,
}

#[derive(Clone, Copy, Debug)]
struct CommandDef {
    name: &'static str,
    aliases: &'static [&'static str],
    usage: &'static str,
    help: &'static str,
}
