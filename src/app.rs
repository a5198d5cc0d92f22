// src/app.rs
//
// Vieta : module App (racine)
// ---------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppVieta (pour main.rs: use crate::app::AppVieta;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

pub use etat::AppVieta;

use eframe::egui;

impl eframe::App for AppVieta {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = efface le résultat (comme "Effacer").
        // Enter est géré dans vue.rs, champ par champ.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_resultats();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
