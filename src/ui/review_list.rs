//! Central review table with virtual scrolling and sortable columns.
//!
//! Uses `egui_extras::TableBuilder` for column layout; only visible rows
//! are laid out by `body.rows()`.

use std::cmp::Ordering;

use egui_extras::{Column, TableBuilder};

use frigate_review::core::config::FrigateConfig;
use frigate_review::core::query::QueryStatus;
use frigate_review::core::review_segment::ReviewSegment;
use frigate_review::util::constants::TABLE_ROW_HEIGHT;
use frigate_review::util::text::display_name;
use frigate_review::util::time::{format_duration, format_epoch, segment_duration};

use crate::app::{ReviewApp, SortColumn};
use crate::ui::theme;

impl ReviewApp {
    /// Render the review table in the central panel.
    ///
    /// Columns: Time, Camera, Severity, Duration, Objects.
    /// Clicking a header sorts by that column; clicking a row opens the
    /// review overlay.
    pub fn render_review_list(&mut self, ui: &mut egui::Ui) {
        let key = Self::reviews_key();
        let Some(reviews) = self.cache.reviews(&key) else {
            self.render_list_placeholder(ui, self.cache.status(&key));
            return;
        };
        if reviews.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("No reviews").color(theme::TEXT_SECONDARY));
            });
            return;
        }

        let mut rows = reviews.to_vec();
        sort_reviews(&mut rows, self.sort_column, self.sort_ascending);

        let pattern = FrigateConfig::time_format_or_default(self.cache.config()).timestamp_pattern();
        let open_id = self.detail.review().map(|r| r.id.clone());
        let mut clicked: Option<usize> = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(170.0).clip(true)) // Time
            .column(Column::auto().at_least(120.0).clip(true)) // Camera
            .column(Column::auto().at_least(85.0)) // Severity
            .column(Column::auto().at_least(80.0)) // Duration
            .column(Column::remainder().clip(true)) // Objects
            .sense(egui::Sense::click())
            .header(22.0, |mut header| {
                header.col(|ui| {
                    self.render_sort_header(ui, SortColumn::Time, "Time");
                });
                header.col(|ui| {
                    self.render_sort_header(ui, SortColumn::Camera, "Camera");
                });
                header.col(|ui| {
                    self.render_sort_header(ui, SortColumn::Severity, "Severity");
                });
                header.col(|ui| {
                    ui.label(egui::RichText::new("Duration").color(theme::TEXT_PRIMARY));
                });
                header.col(|ui| {
                    ui.label(egui::RichText::new("Objects").color(theme::TEXT_PRIMARY));
                });
            })
            .body(|body| {
                body.rows(TABLE_ROW_HEIGHT, rows.len(), |mut row| {
                    let idx = row.index();
                    let Some(review) = rows.get(idx) else {
                        return;
                    };
                    row.set_selected(open_id.as_deref() == Some(review.id.as_str()));

                    row.col(|ui| {
                        let text = format_epoch(review.start_time, pattern);
                        let rich = if review.has_been_reviewed {
                            egui::RichText::new(text).color(theme::TEXT_SECONDARY)
                        } else {
                            egui::RichText::new(text).color(theme::TEXT_PRIMARY).strong()
                        };
                        ui.label(rich);
                    });

                    row.col(|ui| {
                        ui.label(display_name(&review.camera));
                    });

                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(review.severity.as_str())
                                .color(theme::severity_color(review.severity)),
                        );
                    });

                    row.col(|ui| {
                        let text = segment_duration(review.start_time, review.end_time)
                            .map_or_else(|| "ongoing".to_owned(), format_duration);
                        ui.label(egui::RichText::new(text).color(theme::TEXT_SECONDARY));
                    });

                    row.col(|ui| {
                        ui.label(review.objects_summary());
                    });

                    if row.response().clicked() {
                        clicked = Some(idx);
                    }
                });
            });

        if let Some(review) = clicked.and_then(|idx| rows.into_iter().nth(idx)) {
            tracing::debug!("Opening review {}", review.id);
            self.detail.open(review);
        }
    }

    fn render_list_placeholder(&self, ui: &mut egui::Ui, status: QueryStatus) {
        ui.centered_and_justified(|ui| match status {
            QueryStatus::Failed => {
                let error = self
                    .cache
                    .error(&Self::reviews_key())
                    .unwrap_or("unknown error");
                ui.label(
                    egui::RichText::new(format!("Could not load reviews: {error}"))
                        .color(theme::WARNING),
                );
            }
            _ => {
                ui.spinner();
            }
        });
    }

    /// Render a sortable column header button.
    ///
    /// Shows an arrow indicator for the current sort column and toggles
    /// direction on click.
    fn render_sort_header(&mut self, ui: &mut egui::Ui, column: SortColumn, label: &str) {
        let is_current = self.sort_column == column;
        let arrow = if is_current {
            if self.sort_ascending { " \u{25B2}" } else { " \u{25BC}" }
        } else {
            ""
        };

        let text = format!("{label}{arrow}");
        let rich = if is_current {
            egui::RichText::new(text).color(theme::ACCENT).strong()
        } else {
            egui::RichText::new(text).color(theme::TEXT_PRIMARY)
        };

        if ui.button(rich).clicked() {
            if is_current {
                self.sort_ascending = !self.sort_ascending;
            } else {
                self.sort_column = column;
                // Newest first for time, ascending for the rest
                self.sort_ascending = column != SortColumn::Time;
            }
        }
    }
}

/// Sort reviews in place by the given column.
fn sort_reviews(rows: &mut [ReviewSegment], column: SortColumn, ascending: bool) {
    rows.sort_by(|a, b| {
        let ord = match column {
            SortColumn::Time => a
                .start_time
                .partial_cmp(&b.start_time)
                .unwrap_or(Ordering::Equal),
            SortColumn::Camera => a.camera.cmp(&b.camera),
            SortColumn::Severity => a.severity.as_str().cmp(b.severity.as_str()),
        };
        if ascending { ord } else { ord.reverse() }
    });
}
