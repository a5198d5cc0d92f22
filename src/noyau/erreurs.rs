//! Erreurs du noyau (une énumération par couche).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Lecteur de coefficients.
#[derive(Error, Debug)]
pub enum ErreurLecture {
    /// Jeton non numérique ou ligne non UTF-8 (récupérable : l’appelant redemande).
    #[error("invalid input: {jeton:?} is not a number")]
    Malformee { jeton: String },

    /// Source illisible (non récupérable).
    #[error("unable to read input: {0}")]
    Io(#[from] io::Error),
}

impl ErreurLecture {
    pub fn est_recuperable(&self) -> bool {
        matches!(self, Self::Malformee { .. })
    }
}

/// Résolveur.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurResolution {
    #[error("invalid coefficients ({a}, {b}, {c}): all of them must be finite")]
    CoefficientsInvalides { a: f64, b: f64, c: f64 },

    /// Racine hors de la plage des f64 (coefficients finis mais extrêmes).
    #[error("roots of ({a}, {b}, {c}) are out of the representable range")]
    HorsLimites { a: f64, b: f64, c: f64 },
}

/// Campagne de tests (`--test`).
#[derive(Error, Debug)]
pub enum ErreurCampagne {
    #[error("cannot open test file \"{}\": {source}", chemin.display())]
    Fichier {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid line {numero} in test file ({raison}): {contenu:?}")]
    LigneInvalide {
        numero: usize,
        contenu: String,
        raison: String,
    },
}
