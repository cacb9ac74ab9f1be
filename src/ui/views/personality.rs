use egui::{Align, Context};

use crate::QuizApp;
use crate::ui::helpers::{option_button, question_progress};
use crate::ui::layout::centered_panel;

pub fn ui_personality(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    // Copia de la pregunta activa para no pelear con el borrow del motor.
    let (prompt, options) = match app.engine.current_personality_question() {
        Some(q) => (
            q.prompt.clone(),
            q.options
                .iter()
                .map(|o| (o.id.clone(), o.text.clone()))
                .collect::<Vec<_>>(),
        ),
        None => return,
    };
    let index = app.engine.personality_index();
    let total = app.engine.total_personality();
    let fraction = app.personality_progress();

    centered_panel(ctx, 460.0, 600.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            let width = ui.available_width().min(520.0);
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
                app.choose_personality_option(&option_id, now);
            }
        });
    });
}
