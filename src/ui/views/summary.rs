use crate::QuizApp;
use crate::model::AppState;
use crate::ui::layout::two_button_row;
use egui::{Button, CentralPanel, Context, RichText};

pub fn ui_summary(app: &mut QuizApp, ctx: &Context) {
    // Guardia: sin sesión terminada no hay resumen que mostrar.
    let (score, total, percentage, band) = match app.session.as_ref() {
        Some(session) if session.is_complete() => (
            session.score(),
            session.total(),
            session.percentage(),
            session.grade_band(),
        ),
        _ => {
            app.state = AppState::Setup;
            app.message = "Error interno: no hay resumen disponible.".to_owned();
            return;
        }
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 340.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 24))
                .show(ui, |ui| {
                    ui.set_width(panel_width / 1.2);

                    ui.heading("🏁 ¡Quiz completado!");
                    ui.add_space(10.0);
                    ui.label(format!("Tema: {}", app.quiz_topic));
                    ui.label(format!("Dificultad: {}", app.quiz_difficulty.label()));
                    ui.add_space(10.0);
                    ui.label(RichText::new(format!("Puntuación final: {score} de {total}")).heading());
                    ui.label(format!("Porcentaje de aciertos: {percentage:.1}%"));
                    ui.add_space(10.0);
                    ui.label(RichText::new(band.label()).heading().strong());
                    ui.add_space(18.0);

                    let (repetir, nuevo) =
                        two_button_row(ui, panel_width * 0.75, "🔁 Repetir quiz", "🆕 Otro quiz");
                    if repetir {
                        app.repetir_quiz();
                    }
                    if nuevo {
                        app.nuevo_quiz();
                    }

                    ui.add_space(8.0);
                    if ui.add_sized([160.0, 32.0], Button::new("Salir")).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
        });

        ui.add_space(extra_space);
    });
}
