//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du solveur graphique (coefficients saisis, résultat,
//! analyse exacte, erreur, réglages) et offrir des opérations simples
//! (Effacer / Tout effacer) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune résolution ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Précision bornée.

use crate::noyau::affichage::{PRECISION_DEFAUT, PRECISION_MAX};
use crate::noyau::comparaison::EPSILON_DEFAUT;
use crate::noyau::NombreRacines;

#[derive(Clone, Debug)]
pub struct AppVieta {
    // --- entrée utilisateur (a, b, c en texte) ---
    pub champs: [String; 3],

    // --- sorties ---
    pub nombre: NombreRacines, // NonResolue tant que rien n’a été résolu
    pub resultat: String,      // ligne du résultat (même texte que la console)
    pub exact: Vec<String>,    // Δ exact + Vieta (vide si indisponible)
    pub erreur: String,

    // --- paramètres ---
    pub precision: usize,
    pub epsilon: f64,

    // --- UX ---
    pub focus_a: bool,
}

impl Default for AppVieta {
    fn default() -> Self {
        Self::avec_reglages(PRECISION_DEFAUT, EPSILON_DEFAUT)
    }
}

impl AppVieta {
    pub fn avec_reglages(precision: usize, epsilon: f64) -> Self {
        Self {
            champs: Default::default(),
            nombre: NombreRacines::NonResolue,
            resultat: String::new(),
            exact: Vec::new(),
            erreur: String::new(),
            precision: precision.min(PRECISION_MAX),
            epsilon,
            focus_a: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /// Tout effacer : champs + résultats.
    pub fn reset_total(&mut self) {
        for champ in &mut self.champs {
            champ.clear();
        }
        self.clear_resultats();
    }

    /// Effacer : résultats + erreur (champs conservés).
    pub fn clear_resultats(&mut self) {
        self.nombre = NombreRacines::NonResolue;
        self.resultat.clear();
        self.exact.clear();
        self.erreur.clear();
        self.focus_a = true;
    }

    /// Une erreur invalide le dernier résultat (il ne correspond plus aux champs).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.clear_resultats();
        self.erreur = msg.into();
    }

    pub fn set_resultats(&mut self, nombre: NombreRacines, resultat: String, exact: Vec<String>) {
        self.erreur.clear();
        self.nombre = nombre;
        self.resultat = resultat;
        self.exact = exact;
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision.min(PRECISION_MAX);
    }
}
