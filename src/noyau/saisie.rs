// src/noyau/saisie.rs
//
// Lecteur de coefficients : trois nombres séparés par des espaces ou des
// retours à la ligne, ou un jeton de sortie.
//
// Contrats :
// - Aucune nouvelle tentative ici : l’appelant décide de redemander.
// - Jeton invalide => le reste de la ligne est jeté, l’équation partielle aussi.
// - Ligne non UTF-8 => jeton invalide (ligne entière jetée), pas une erreur d’E/S.
// - Fin d’entrée => sortie demandée.

use std::collections::VecDeque;
use std::io::BufRead;

use super::equation::Equation;
use super::erreurs::ErreurLecture;

/// Jetons de sortie (insensibles à la casse).
const JETONS_SORTIE: [&str; 2] = ["exit", "quit"];

/// Coefficients lus + leur texte brut (pour l’analyse exacte).
#[derive(Clone, Debug, PartialEq)]
pub struct Saisie {
    pub equation: Equation,
    pub brut: [String; 3],
}

#[derive(Clone, Debug, PartialEq)]
pub enum Lecture {
    Coefficients(Saisie),
    Sortie,
}

pub struct LecteurCoefficients<R> {
    source: R,
    jetons: VecDeque<String>,
}

impl<R: BufRead> LecteurCoefficients<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            jetons: VecDeque::new(),
        }
    }

    /// Lit une équation complète (consomme l’entrée).
    pub fn lire(&mut self) -> Result<Lecture, ErreurLecture> {
        let mut brut: [String; 3] = Default::default();
        let mut valeurs = [0.0_f64; 3];

        for i in 0..3 {
            let Some(jeton) = self.prochain_jeton()? else {
                return Ok(Lecture::Sortie);
            };

            if est_jeton_sortie(&jeton) {
                self.jetons.clear();
                return Ok(Lecture::Sortie);
            }

            match analyser_nombre(&jeton) {
                Ok(v) => {
                    valeurs[i] = v;
                    brut[i] = jeton;
                }
                Err(e) => {
                    // équivalent "aller en fin de ligne"
                    self.jetons.clear();
                    return Err(e);
                }
            }
        }

        let [a, b, c] = valeurs;
        Ok(Lecture::Coefficients(Saisie {
            equation: Equation::new(a, b, c),
            brut,
        }))
    }

    /// Vrai si des jetons de la ligne courante attendent encore.
    pub fn a_des_jetons_en_attente(&self) -> bool {
        !self.jetons.is_empty()
    }

    fn prochain_jeton(&mut self) -> Result<Option<String>, ErreurLecture> {
        loop {
            if let Some(j) = self.jetons.pop_front() {
                return Ok(Some(j));
            }

            let mut octets = Vec::new();
            if self.source.read_until(b'\n', &mut octets)? == 0 {
                return Ok(None);
            }
            let ligne = String::from_utf8(octets).map_err(|e| ErreurLecture::Malformee {
                jeton: String::from_utf8_lossy(e.as_bytes()).trim().to_string(),
            })?;
            self.jetons
                .extend(ligne.split_whitespace().map(str::to_owned));
        }
    }
}

pub fn est_jeton_sortie(jeton: &str) -> bool {
    JETONS_SORTIE
        .iter()
        .any(|s| s.eq_ignore_ascii_case(jeton.trim()))
}

/// Nombre réel : signe, décimales, exposant optionnels (syntaxe `f64`).
/// `inf` / `nan` passent ici : c’est le résolveur qui les refuse.
pub fn analyser_nombre(texte: &str) -> Result<f64, ErreurLecture> {
    let t = texte.trim();
    t.parse::<f64>().map_err(|_| ErreurLecture::Malformee {
        jeton: t.to_string(),
    })
}
