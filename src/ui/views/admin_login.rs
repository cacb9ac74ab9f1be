use egui::{Align, Context, RichText, TextEdit};

use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};

pub fn ui_admin_login(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 440.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.label(RichText::new("🛡").size(48.0));
            ui.add_space(6.0);
            ui.heading("Admin Portal");
            ui.add_space(4.0);
            ui.label("Sign in to review quiz submissions.");
            ui.add_space(16.0);

            let width = ui.available_width().min(360.0);

            egui::Grid::new("admin_login_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Email");
                    ui.add(
                        TextEdit::singleline(&mut app.admin.email)
                            .hint_text("admin@example.com")
                            .desired_width(width * 0.7),
                    );
                    ui.end_row();

                    ui.label("Password");
                    ui.add(
                        TextEdit::singleline(&mut app.admin.password)
                            .password(true)
                            .desired_width(width * 0.7),
                    );
                    ui.end_row();
                });

            ui.add_space(16.0);

            if app.admin.checking {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Checking credentials...");
                });
            } else {
                let (login, back) = two_button_row(ui, width, "🔓 Log in", "🔙 Back");
                if login {
                    app.admin_login();
                }
                if back {
                    app.close_admin();
                }
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }
        });
    });
}
