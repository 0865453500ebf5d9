use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_generating(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 200.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("⏳ Generando preguntas...");
            ui.add_space(10.0);
            ui.label(format!(
                "Tema: {} ({})",
                app.quiz_topic,
                app.quiz_difficulty.label()
            ));
            ui.add_space(16.0);
            ui.add(egui::Spinner::new());
        });
    });

    // La llamada al modelo es bloqueante; se lanza cuando el spinner ya
    // llegó a pantalla, no en el primer frame de esta vista.
    if app.loading_frames < 2 {
        app.loading_frames += 1;
    } else {
        app.run_pending_generation();
    }
    ctx.request_repaint();
}
