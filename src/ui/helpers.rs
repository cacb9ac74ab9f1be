use egui::{Button, ProgressBar, RichText, Ui};

/// Botón de opción a ancho completo. Devuelve true si se pulsó.
pub fn option_button(ui: &mut Ui, width: f32, label: &str) -> bool {
    let clicked = ui
        .add_sized([width, 48.0], Button::new(RichText::new(label).size(16.0)))
        .clicked();
    ui.add_space(8.0);
    clicked
}

/// Cabecera "Question X of Y" con barra de progreso.
pub fn question_progress(ui: &mut Ui, width: f32, index: usize, total: usize, fraction: f32) {
    ui.label(format!("Question {} of {}", index + 1, total));
    ui.add_space(4.0);
    ui.add(ProgressBar::new(fraction).desired_width(width));
    ui.add_space(12.0);
}
