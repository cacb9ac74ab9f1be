use egui::{Align, Button, CentralPanel, Context, RichText, ScrollArea};

use crate::QuizApp;
use crate::app::SaveStatus;

pub fn ui_result(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    let prediction = match app.engine.prediction() {
        Some(p) => p.clone(),
        None => return,
    };
    let score = app.engine.logical_score();
    let max_score = app.engine.max_logical_score();
    let elapsed = app.timer.formatted(now);

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                let width = ui.available_width().min(560.0);

                // ----------- PREDICCIÓN -----------
                ui.add_space(12.0);
                ui.label(RichText::new(&prediction.emoji).size(64.0));
                ui.add_space(4.0);
                ui.heading(format!("You will be a {}!", prediction.title));
                ui.add_space(8.0);
                ui.label(&prediction.description);
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Just like {}!", prediction.character)).italics(),
                );
                ui.add_space(10.0);
                ui.label(format!(
                    "🧠 Brain score: {score}/{max_score}   ⏱ Time: {elapsed}"
                ));

                ui.add_space(16.0);
                ui.separator();
                ui.add_space(10.0);

                // ----------- FORMULARIO Y GUARDADO -----------
                ui.heading("📨 Save your result");
                ui.add_space(8.0);

                egui::Grid::new("participant_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Name");
                        ui.text_edit_singleline(&mut app.form.name);
                        ui.end_row();

                        ui.label("Age");
                        ui.text_edit_singleline(&mut app.form.age);
                        ui.end_row();

                        ui.label("Email");
                        ui.text_edit_singleline(&mut app.form.email);
                        ui.end_row();

                        ui.label("Phone");
                        ui.text_edit_singleline(&mut app.form.phone);
                        ui.end_row();

                        ui.label("Gender");
                        let selected = if app.form.gender.is_empty() {
                            "Prefer not to say".to_string()
                        } else {
                            app.form.gender.clone()
                        };
                        egui::ComboBox::from_id_salt("gender")
                            .selected_text(selected)
                            .show_ui(ui, |ui| {
                                ui.selectable_value(
                                    &mut app.form.gender,
                                    String::new(),
                                    "Prefer not to say",
                                );
                                for option in ["Girl", "Boy", "Other"] {
                                    ui.selectable_value(
                                        &mut app.form.gender,
                                        option.to_string(),
                                        option,
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label("Grade");
                        ui.text_edit_singleline(&mut app.form.grade);
                        ui.end_row();

                        ui.label("School");
                        ui.text_edit_singleline(&mut app.form.school_name);
                        ui.end_row();
                    });

                ui.add_space(12.0);

                match app.save_status.clone() {
                    SaveStatus::NotSaved => {
                        let save = ui.add_sized([width * 0.6, 40.0], Button::new("💾 Save"));
                        if save.clicked() {
                            app.submit_participant(now);
                        }
                    }
                    SaveStatus::Saving => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Saving...");
                        });
                    }
                    SaveStatus::Saved(_) => {
                        ui.label(RichText::new("✅ Your result is saved!").strong());
                    }
                    SaveStatus::Failed(_) => {
                        let retry = ui.add_sized([width * 0.6, 40.0], Button::new("🔁 Try again"));
                        if retry.clicked() {
                            app.retry_save(now);
                        }
                    }
                }

                ui.add_space(16.0);
                let again = ui.add_sized([width * 0.6, 40.0], Button::new("🔄 Play again"));
                if again.clicked() {
                    app.play_again(now);
                }

                if !app.message.is_empty() {
                    ui.add_space(10.0);
                    ui.label(&app.message);
                }
                ui.add_space(12.0);
            });
        });
    });
}
