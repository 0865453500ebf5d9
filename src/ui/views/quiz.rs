use crate::QuizApp;
use crate::model::AppState;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Si no hay pregunta en curso volvemos a la configuración; este estado
    // no debería alcanzarse sin sesión.
    let question = match app.current_question() {
        Some(question) => question,
        None => {
            app.state = AppState::Setup;
            app.message = "Error interno: no hay quiz en curso.".to_owned();
            return;
        }
    };

    let answered = app.is_answered();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 380.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 16))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(app.quiz_title());
                    ui.add_space(4.0);
                    ui.label(app.progress_text());
                    ui.add_space(10.0);

                    // Enunciado con scroll por si viene largo
                    ScrollArea::vertical().max_height(120.0).show(ui, |ui| {
                        ui.label(RichText::new(&question.text).size(17.0).strong());
                    });

                    ui.add_space(12.0);

                    // Opciones; quedan bloqueadas una vez respondida
                    ui.add_enabled_ui(!answered, |ui| {
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            for (i, option) in question.options.iter().enumerate() {
                                ui.radio_value(&mut app.selected_option, Some(i), option);
                            }
                        });
                    });

                    ui.add_space(12.0);

                    let main_label = if !answered {
                        "Enviar respuesta"
                    } else if app.is_on_last_question() {
                        "Ver resultados 🏁"
                    } else {
                        "Siguiente pregunta ➡"
                    };
                    let (principal, salir) =
                        two_button_row(ui, panel_width * 0.8, main_label, "🔙 Abandonar quiz");
                    if principal {
                        if answered {
                            app.siguiente_pregunta();
                        } else {
                            app.enviar_respuesta();
                        }
                    }
                    if salir {
                        app.nuevo_quiz();
                    }

                    ui.add_space(10.0);
                    ui.label(app.score_text());

                    if !app.message.is_empty() {
                        ui.add_space(6.0);
                        ui.label(RichText::new(&app.message).strong());
                    }
                });
            });

        ui.add_space(extra_space);
    });
}
