//! Noyau Vieta
//!
//! Organisation interne :
//! - equation.rs    : Equation, NombreRacines, Solution (résultat étiqueté)
//! - comparaison.rs : tolérance + signe à ε près
//! - erreurs.rs     : erreurs typées par couche
//! - saisie.rs      : lecteur de coefficients (succès / sortie / invalide)
//! - resolution.rs  : discriminant + repli linéaire / dégénéré
//! - affichage.rs   : une ligne par cas, précision fixe
//! - exact.rs       : Δ et Vieta en rationnels exacts
//! - campagne.rs    : vérification (--test), table intégrée ou fichier

pub mod affichage;
pub mod campagne;
pub mod comparaison;
pub mod equation;
pub mod erreurs;
pub mod exact;
pub mod resolution;
pub mod saisie;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use equation::{Equation, NombreRacines};
pub use resolution::resoudre;
