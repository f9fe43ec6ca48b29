use std::{
    sync::Arc,
    time::{
        Duration,
        Instant,
    },
};

use eframe::egui;

use super::{
    error_modal::ErrorModal,
    loading_overlay::LoadingOverlay,
    login::LoginForm,
    quote_list::{
        QuoteList,
        QuoteListAction,
    },
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        ErrorAck,
        QuoteBoard,
        QuoteService,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

enum Screen {
    Login,
    Quotes,
}

pub struct VoteApp {
    screen: Screen,
    settings: SettingsData,
    service: Arc<QuoteService>,
    board: QuoteBoard,
    login: LoginForm,
    task_manager: TaskManager,
}

impl VoteApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let service = Arc::new(QuoteService::new(&settings.server_url));
        let board = QuoteBoard::new(settings.sort_order);

        Self {
            screen: Screen::Login,
            settings,
            service,
            board,
            login: LoginForm::default(),
            task_manager: TaskManager::new(),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::LoginFinished(result) => {
                self.login.submitting = false;
                match result {
                    Ok(()) => {
                        println!("Logged in as {}", self.login.username);
                        self.login.clear();
                        self.screen = Screen::Quotes;
                        // The first fetch goes through the same settle timer
                        // as a search edit.
                        self.board.arm_search(Instant::now());
                    }
                    Err(err) => self.board.raise_error(&err),
                }
            }

            TaskResult::QuotesFetched { seq, result } => {
                self.board.finish_fetch(seq, result);
            }

            TaskResult::VoteFinished { id, result } => {
                self.board.finish_vote(&id, result);
            }
        }
    }

    /// The entry boundary. Drops every piece of in-memory view state and
    /// rebuilds the service so the stale session cookie goes with it.
    fn reset_session(&mut self) {
        self.board = QuoteBoard::new(self.settings.sort_order);
        self.service = Arc::new(QuoteService::new(&self.settings.server_url));
        self.login = LoginForm::default();
        self.screen = Screen::Login;
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn quotes_screen(&mut self, ctx: &egui::Context, now: Instant) {
        let action = QuoteList::show(ctx, &mut self.board, self.settings.show_chart, now);

        match action {
            Some(QuoteListAction::Vote(id)) => {
                if self.board.begin_vote(&id) {
                    self.task_manager.cast_vote(self.service.clone(), id);
                }
            }
            Some(QuoteListAction::ToggleSort) => {
                self.board.toggle_sort();
                self.settings.sort_order = self.board.sort_order();
                self.save_settings();
            }
            Some(QuoteListAction::ToggleChart) => {
                self.settings.show_chart = !self.settings.show_chart;
                self.save_settings();
            }
            None => {}
        }
    }
}

impl eframe::App for VoteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let now = Instant::now();
        if let Some(term) = self.board.poll_search(now) {
            let seq = self.board.begin_fetch();
            self.task_manager.fetch_quotes(self.service.clone(), term, seq);
        }

        match self.screen {
            Screen::Login => {
                if self.login.show(ctx) {
                    self.login.submitting = true;
                    self.task_manager.login(
                        self.service.clone(),
                        self.login.username.trim().to_string(),
                        self.login.password.clone(),
                    );
                }
            }
            Screen::Quotes => self.quotes_screen(ctx, now),
        }

        LoadingOverlay::show(ctx, self.board.is_loading() || self.login.submitting);

        if let Some(signal) = self.board.error() {
            if ErrorModal::show(ctx, signal) {
                if self.board.acknowledge_error() == Some(ErrorAck::EndSession) {
                    self.reset_session();
                }
            }
        }

        // Wake up for the settle timer and for task completions; egui only
        // repaints on input otherwise.
        if let Some(wait) = self.board.time_until_settle(now) {
            ctx.request_repaint_after(wait.max(Duration::from_millis(16)));
        } else if self.board.is_loading() || self.login.submitting {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
