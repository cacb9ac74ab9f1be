use egui::{CentralPanel, Context, RichText, ScrollArea};

use crate::QuizApp;
use crate::model::Screen;
use crate::timer::format_seconds;

pub fn ui_admin_dashboard(app: &mut QuizApp, ctx: &Context) {
    // La ruta exige sesión: sin bandera no hay panel.
    if !app.admin.logged_in {
        app.screen = Screen::AdminLogin;
        return;
    }

    let stats = app.admin_stats();

    CentralPanel::default().show(ctx, |ui| {
        ui.heading("📊 Quiz submissions");
        ui.add_space(8.0);

        // ----------- TARJETAS RESUMEN -----------
        ui.horizontal(|ui| {
            ui.label(format!("👧 Participants: {}", stats.total_participants));
            ui.separator();
            ui.label(format!("🧠 Average score: {}", stats.average_label()));
            ui.separator();
            ui.label(format!("⭐ Top career: {}", stats.top_career_label()));
        });
        ui.add_space(8.0);

        if app.admin_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading submissions...");
            });
            return;
        }
        if app.admin_rows.is_empty() {
            ui.label("No submissions yet.");
            return;
        }
        ui.separator();

        ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("admin_results")
                .striped(true)
                .min_col_width(60.0)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for header in ["Name", "Age", "Email", "Phone", "Career", "Score", "Time", "Completed"] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for row in &app.admin_rows {
                        ui.label(&row.name);
                        ui.label(row.age.to_string());
                        ui.label(&row.email);
                        ui.label(&row.phone);
                        ui.label(row.career_type.as_deref().unwrap_or("-"));
                        ui.label(row.logical_score.to_string());
                        ui.label(
                            row.completion_time_seconds
                                .map(format_seconds)
                                .unwrap_or_else(|| "-".to_string()),
                        );
                        // Solo la fecha del sello ISO.
                        let completed = row.completed_at.as_deref().unwrap_or("-");
                        ui.label(completed.get(..10).unwrap_or(completed));
                        ui.end_row();
                    }
                });
        });

        if !app.message.is_empty() {
            ui.add_space(10.0);
            ui.label(&app.message);
        }
    });
}
