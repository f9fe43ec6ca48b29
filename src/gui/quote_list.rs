use std::time::Instant;

use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::chart;
use crate::core::{
    QuoteBoard,
    SortOrder,
};

/// User intents the quote screen reports back to the app.
pub enum QuoteListAction {
    Vote(String),
    ToggleSort,
    ToggleChart,
}

pub struct QuoteList;

impl QuoteList {
    pub fn show(
        ctx: &egui::Context,
        board: &mut QuoteBoard,
        show_chart: bool,
        now: Instant,
    ) -> Option<QuoteListAction> {
        let mut action = None;

        egui::TopBottomPanel::top("quote_toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("🔍");

                let mut text = board.search_input().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .hint_text("Search quotes...")
                        .desired_width(260.0),
                );
                if response.changed() {
                    board.edit_search(text, now);
                }

                let sort_label = match board.sort_order() {
                    SortOrder::Ascending => "⬆ Fewest votes first",
                    SortOrder::Descending => "⬇ Most votes first",
                };
                if ui.button(sort_label).clicked() {
                    action = Some(QuoteListAction::ToggleSort);
                }

                let chart_label = if show_chart { "Hide chart" } else { "Show chart" };
                if ui.button(chart_label).clicked() {
                    action = Some(QuoteListAction::ToggleChart);
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let displayed = board.displayed();

            if show_chart && !displayed.is_empty() {
                chart::draw(ui, &board.chart_series());
            }

            if displayed.is_empty() {
                if !board.is_loading() {
                    ui.centered_and_justified(|ui| {
                        ui.label("No quotes match your search.");
                    });
                }
                return;
            }

            let text_height =
                egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(30.0))
                .column(Column::remainder())
                .column(Column::auto().at_least(60.0))
                .column(Column::auto().at_least(80.0))
                .header(25.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                    header.col(|ui| {
                        ui.strong("Quote");
                    });
                    header.col(|ui| {
                        ui.strong("Votes");
                    });
                    header.col(|_ui| {});
                })
                .body(|body| {
                    body.rows(text_height + 10.0, displayed.len(), |mut row| {
                        let index = row.index();
                        let quote = displayed[index];
                        let pending = board.vote_pending(&quote.id);

                        row.col(|ui| {
                            ui.label((index + 1).to_string());
                        });
                        row.col(|ui| {
                            ui.add(egui::Label::new(&quote.text).truncate());
                        });
                        row.col(|ui| {
                            ui.label(format!("❤ {}", quote.votes));
                        });
                        row.col(|ui| {
                            if pending {
                                ui.add(egui::Spinner::new().size(14.0));
                            } else if ui.button("Vote").clicked() {
                                action = Some(QuoteListAction::Vote(quote.id.clone()));
                            }
                        });
                    });
                });

            ui.add_space(6.0);
            ui.separator();
            ui.label(format!("Showing {} quotes", displayed.len()));
        });

        action
    }
}
