// src/main.rs
//
// Vieta : point d’entrée NATIF (console + GUI) et WEB (WASM, GUI seulement)
// -------------------------------------------------------------------------
// But:
// - NATIF : clap -> mode console (défaut), --test, ou --gui (eframe::run_native)
// - WEB  (wasm32) : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Codes de sortie (natif) :
//   0 = sortie demandée / fin d’entrée / campagne réussie
//   1 = campagne en échec (ou GUI impossible à lancer)
//   2 = entrée/sortie illisible

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod config;
mod console;
mod couleurs;
mod noyau;

use app::AppVieta;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Vieta";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::io;
    use std::process::ExitCode;

    use clap::Parser;
    use config::{Cli, Mode};
    use console::CodeSortie;

    let cli = Cli::parse();
    let reglages = cli.reglages();

    let resultat = match cli.mode() {
        Mode::Graphique => {
            return match lancer_gui(reglages.precision, reglages.epsilon) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("unable to start the graphical front end: {e}");
                    ExitCode::from(1)
                }
            };
        }
        Mode::Resoudre => console::boucle(
            io::stdin().lock(),
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            &reglages,
        ),
        Mode::Tester(chemin) => console::campagne(
            chemin.as_deref(),
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            &reglages,
        ),
    };

    match resultat {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("output error: {e}");
            CodeSortie::ErreurEntreeSortie.into()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lancer_gui(precision: usize, epsilon: f64) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 420.0])
            .with_min_inner_size([420.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppVieta::avec_reglages(precision, epsilon)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppVieta, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppVieta>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
