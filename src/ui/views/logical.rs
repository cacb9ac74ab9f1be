use egui::{Align, Context, RichText};

use crate::QuizApp;
use crate::ui::helpers::{option_button, question_progress};
use crate::ui::layout::centered_panel;

pub fn ui_logical(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    let (prompt, options) = match app.engine.current_logical_question() {
        Some(q) => (
            q.prompt.clone(),
            q.options
                .iter()
                .map(|o| (o.id.clone(), o.text.clone()))
                .collect::<Vec<_>>(),
        ),
        None => return,
    };
    let index = app.engine.logical_index();
    let total = app.engine.total_logical();
    let fraction = app.logical_progress();
    let clock = app.timer.formatted(now);

    centered_panel(ctx, 480.0, 600.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            let width = ui.available_width().min(520.0);

            ui.label(RichText::new(format!("⏱ {clock}")).strong());
            ui.add_space(6.0);
            question_progress(ui, width, index, total, fraction);

            ui.heading(&prompt);
            ui.add_space(16.0);

            let mut chosen = None;
            for (id, text) in &options {
                if option_button(ui, width, text) {
                    chosen = Some(id.clone());
                }
            }
            if let Some(option_id) = chosen {
                app.choose_logical_option(&option_id, now);
            }
        });
    });
}
