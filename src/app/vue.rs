// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// - Trois champs a, b, c ; Enter (dans un champ) ou "Résoudre" lance la résolution
// - Même texte de résultat que la console
// - Analyse exacte (Δ, Vieta) affichée sous le résultat

use eframe::egui;

use super::etat::AppVieta;
use crate::noyau::affichage::{formater_solution, PRECISION_MAX};
use crate::noyau::exact::{analyser_textes, formater_analyse};
use crate::noyau::saisie::analyser_nombre;
use crate::noyau::{resoudre, Equation};

const NOMS: [&str; 3] = ["a", "b", "c"];

impl AppVieta {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Vieta : ax² + bx + c = 0");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let mut enter = false;

        egui::Grid::new("coefficients_vieta")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, nom) in NOMS.iter().enumerate() {
                    ui.label(format!("{nom} ="));
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.champs[i])
                            .desired_width(160.0)
                            .hint_text("0")
                            .id_source(("coef", i))
                            .code_editor(),
                    );

                    if i == 0 && self.focus_a {
                        resp.request_focus();
                        self.focus_a = false;
                    }

                    if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
                        enter = true;
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let resoudre_clic = ui
                .add_sized([96.0, 30.0], egui::Button::new("Résoudre"))
                .clicked();
            if resoudre_clic || enter {
                self.resoudre_via_noyau();
            }

            if ui
                .add_sized([72.0, 30.0], egui::Button::new("Effacer"))
                .on_hover_text("Efface le résultat")
                .clicked()
            {
                self.clear_resultats();
            }

            if ui
                .add_sized([72.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale")
                .clicked()
            {
                self.reset_total();
            }

            ui.separator();

            ui.label("Précision :");
            let mut p = self.precision as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(0..=PRECISION_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.changer_precision(p as usize);
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        let resultat = if self.resultat.is_empty() {
            "not solved yet"
        } else {
            self.resultat.as_str()
        };
        Self::champ_monospace(ui, "resultat_out", resultat, 1);

        ui.add_space(6.0);

        ui.label("Analyse exacte :");
        if self.exact.is_empty() {
            ui.monospace("indisponible");
        } else {
            Self::champ_monospace(ui, "exact_out", &self.exact.join("\n"), 2);
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /// Nouvelle précision ; un résultat déjà affiché est recalculé à cette précision.
    pub(crate) fn changer_precision(&mut self, precision: usize) {
        self.set_precision(precision);
        if !self.resultat.is_empty() {
            self.resoudre_via_noyau();
        }
    }

    /// Lit les trois champs, résout via le noyau, dépose résultat/analyse/erreur dans l’état.
    /// Champ vide = 0 (comme l’indice affiché).
    pub(crate) fn resoudre_via_noyau(&mut self) {
        let mut valeurs = [0.0_f64; 3];
        let mut brut: [String; 3] = Default::default();

        for i in 0..NOMS.len() {
            let t = self.champs[i].trim();
            let t = if t.is_empty() { "0" } else { t };
            match analyser_nombre(t) {
                Ok(v) => {
                    valeurs[i] = v;
                    brut[i] = t.to_string();
                }
                Err(e) => {
                    self.set_erreur(format!("{} : {e}", NOMS[i]));
                    return;
                }
            }
        }

        let [a, b, c] = valeurs;
        match resoudre(&Equation::new(a, b, c), self.epsilon) {
            Ok(solution) => {
                let exact = analyser_textes(&brut)
                    .map(|an| formater_analyse(&an))
                    .unwrap_or_default();
                self.set_resultats(
                    solution.nombre(),
                    formater_solution(&solution, self.precision),
                    exact,
                );
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}
