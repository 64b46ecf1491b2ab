use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, unbounded};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Widget},
};
use std::collections::VecDeque;
use std::io;

use crate::components::Component;
use crate::components::footer::FooterState;
use crate::components::gallery::GalleryState;
use crate::components::header::HeaderState;
use crate::components::toast::ToastState;
use crate::config::Config;
use crate::copy_worker::CopyWorker;
use crate::event::AppMsg;
use crate::model::state::ShellState;
use crate::widgets::common::grid_pattern;
use crate::widgets::spotlight;
use crate::widgets::theme::get_theme;

pub struct App {
    pub config: Config,
    shell: ShellState,
    header: HeaderState,
    gallery: GalleryState,
    footer: FooterState,
    toasts: ToastState,
    copy_worker: CopyWorker,
    rx: Receiver<AppMsg>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (tx, rx) = unbounded();
        Self::with_channel(config, tx, rx)
    }

    fn with_channel(config: Config, tx: Sender<AppMsg>, rx: Receiver<AppMsg>) -> Self {
        Self {
            gallery: GalleryState::new(&config),
            toasts: ToastState::new(config.toast_lifetime()),
            shell: ShellState::default(),
            header: HeaderState,
            footer: FooterState,
            copy_worker: CopyWorker::new(tx),
            rx,
            config,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let tick_rate = self.config.tick_rate();
        let mut res: Result<()> = Ok(());

        'outer: loop {
            // Clipboard outcomes from the worker thread.
            while let Ok(msg) = self.rx.try_recv() {
                self.dispatch(msg);
            }

            if let Err(e) = self.draw(&mut terminal) {
                res = Err(e);
                break 'outer;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => match (key.code, key.modifiers) {
                        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => break 'outer,
                        (KeyCode::Char('c'), KeyModifiers::CONTROL) => break 'outer,
                        _ => self.dispatch(AppMsg::Key(key)),
                    },
                    Event::Mouse(mouse) => self.dispatch(AppMsg::Mouse(mouse)),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            } else {
                self.dispatch(AppMsg::Tick);
            }

            if self.should_quit {
                break 'outer;
            }
        }

        // The shell unmounts before the terminal is restored; pointer
        // tracking stops here even though the process lives on.
        self.shell.unmount();

        if let Err(e) = restore_terminal(&mut terminal) {
            if res.is_ok() {
                res = Err(e);
            }
        }
        res
    }

    fn dispatch(&mut self, msg: AppMsg) {
        let mut queue = VecDeque::new();
        queue.push_back(msg);

        while let Some(msg) = queue.pop_front() {
            match &msg {
                AppMsg::Quit => {
                    self.should_quit = true;
                    continue;
                }
                AppMsg::CopyRequested { style_id, snippet } => {
                    self.copy_worker.request(*style_id, snippet.clone());
                    continue;
                }
                _ => {}
            }

            if let Some(follow) = self.shell.update(&msg) {
                queue.push_back(follow);
            }
            if let Some(follow) = self.gallery.update(&msg) {
                queue.push_back(follow);
            }
            if let Some(follow) = self.toasts.update(&msg) {
                queue.push_back(follow);
            }
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let Self {
            shell,
            header,
            gallery,
            footer,
            toasts,
            ..
        } = self;

        terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();
            let theme = get_theme();

            Block::default()
                .style(Style::default().bg(theme.page_bg))
                .render(area, buf);
            grid_pattern(area, buf);
            if let Some(pointer) = shell.pointer {
                spotlight::ambient(area, buf, pointer);
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(8),
                    Constraint::Min(1),
                    Constraint::Length(2),
                ])
                .split(area);

            header.render(chunks[0], buf, false);
            gallery.render(chunks[1], buf, true);
            footer.render(chunks[2], buf, false);

            // Toasts overlay everything and block nothing.
            toasts.render(area, buf, false);
        })?;
        Ok(())
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    terminal.show_cursor().ok();
    disable_raw_mode().ok();
    // LeaveAlternateScreen must be executed on the same stdout the backend uses
    let mut out = io::stdout();
    execute!(out, DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}
