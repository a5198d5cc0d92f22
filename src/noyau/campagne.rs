// src/noyau/campagne.rs
//
// Campagne de vérification du résolveur (mode --test).
//
// Format du fichier (une équation par ligne, `#` = commentaire) :
//   a b c x1 x2 n
// avec n ∈ {0, 1, 2, -2} (-2 = infinité de racines).
// - x2 ignoré si n < 2 ; racines ignorées si n ∈ {0, -2}.
// - Deux racines : comparées dans n’importe quel ordre.

use std::fs;
use std::path::Path;

use super::comparaison::est_nul;
use super::equation::{Equation, NombreRacines, Solution};
use super::erreurs::ErreurCampagne;
use super::resolution::resoudre;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CasAttendu {
    pub equation: Equation,
    pub x1: f64,
    pub x2: f64,
    pub nombre: NombreRacines,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Ok,
    ErreurResolution(String),
    NombreDifferent { obtenu: NombreRacines },
    RacinesDifferentes { obtenu: Solution },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RapportCas {
    pub cas: CasAttendu,
    pub verdict: Verdict,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bilan {
    pub rapports: Vec<RapportCas>,
}

impl Bilan {
    pub fn total(&self) -> usize {
        self.rapports.len()
    }

    pub fn erreurs(&self) -> usize {
        self.rapports
            .iter()
            .filter(|r| r.verdict != Verdict::Ok)
            .count()
    }
}

/* ------------------------ Table intégrée ------------------------ */

fn cas(a: f64, b: f64, c: f64, x1: f64, x2: f64, nombre: NombreRacines) -> CasAttendu {
    CasAttendu {
        equation: Equation::new(a, b, c),
        x1,
        x2,
        nombre,
    }
}

/// Équations de référence (utilisées sans fichier).
pub fn table_integree() -> Vec<CasAttendu> {
    use NombreRacines::*;

    vec![
        cas(1.0, 2.0, 1.0, -1.0, -1.0, Une),
        cas(0.5, 0.5, 0.5, 0.0, 0.0, Aucune),
        cas(3.0, 5.0, 2.0, -1.0, -2.0 / 3.0, Deux),
        cas(2.0, -12.0, 13.5, 1.5, 4.5, Deux),
        cas(0.0, 0.0, 0.0, 0.0, 0.0, Infinite),
        cas(1.0, -19.96, -105.462, 24.3, -4.34, Deux),
        cas(1.0, -19.96, -105.462, -4.34, 24.3, Deux),
        cas(1.0, -3.0, 2.0, 1.0, 2.0, Deux),
        cas(1.0, 0.0, 1.0, 0.0, 0.0, Aucune),
        cas(0.0, 2.0, -4.0, 2.0, 0.0, Une),
        cas(0.0, 0.0, 3.0, 0.0, 0.0, Aucune),
    ]
}

/* ------------------------ Fichier ------------------------ */

pub fn charger_fichier(chemin: &Path) -> Result<Vec<CasAttendu>, ErreurCampagne> {
    let texte = fs::read_to_string(chemin).map_err(|source| ErreurCampagne::Fichier {
        chemin: chemin.to_path_buf(),
        source,
    })?;
    analyser_texte(&texte)
}

pub fn analyser_texte(texte: &str) -> Result<Vec<CasAttendu>, ErreurCampagne> {
    let mut out = Vec::new();

    for (i, ligne) in texte.lines().enumerate() {
        let l = ligne.trim();
        if l.is_empty() || l.starts_with('#') {
            continue;
        }
        out.push(analyser_ligne(l, i + 1)?);
    }

    Ok(out)
}

fn analyser_ligne(ligne: &str, numero: usize) -> Result<CasAttendu, ErreurCampagne> {
    let invalide = |raison: &str| ErreurCampagne::LigneInvalide {
        numero,
        contenu: ligne.to_string(),
        raison: raison.to_string(),
    };

    let champs: Vec<&str> = ligne.split_whitespace().collect();
    if champs.len() != 6 {
        return Err(invalide("expected 6 fields: a b c x1 x2 n"));
    }

    let mut v = [0.0_f64; 5];
    for (slot, champ) in v.iter_mut().zip(&champs[..5]) {
        *slot = champ.parse::<f64>().map_err(|_| invalide("not a number"))?;
    }

    let nombre = champs[5]
        .parse::<i32>()
        .ok()
        .and_then(NombreRacines::depuis_code)
        .ok_or_else(|| invalide("roots number must be 0, 1, 2 or -2"))?;

    Ok(cas(v[0], v[1], v[2], v[3], v[4], nombre))
}

/* ------------------------ Exécution ------------------------ */

pub fn verifier_cas(cas: &CasAttendu, epsilon: f64) -> Verdict {
    let obtenu = match resoudre(&cas.equation, epsilon) {
        Ok(s) => s,
        Err(e) => return Verdict::ErreurResolution(e.to_string()),
    };

    if obtenu.nombre() != cas.nombre {
        return Verdict::NombreDifferent {
            obtenu: obtenu.nombre(),
        };
    }

    let proches = |x: f64, y: f64| est_nul(x - y, epsilon);
    let memes = match obtenu {
        Solution::Une(x) => proches(x, cas.x1),
        Solution::Deux(x1, x2) => {
            (proches(x1, cas.x1) && proches(x2, cas.x2))
                || (proches(x1, cas.x2) && proches(x2, cas.x1))
        }
        Solution::Aucune | Solution::Infinite => true,
    };

    if memes {
        Verdict::Ok
    } else {
        Verdict::RacinesDifferentes { obtenu }
    }
}

pub fn executer(cas: &[CasAttendu], epsilon: f64) -> Bilan {
    Bilan {
        rapports: cas
            .iter()
            .map(|c| RapportCas {
                cas: *c,
                verdict: verifier_cas(c, epsilon),
            })
            .collect(),
    }
}

/* ------------------------ Rapport texte ------------------------ */

pub fn formater_rapport(r: &RapportCas) -> Vec<String> {
    let mut lignes = vec![format!("For equation {}:", r.cas.equation)];

    match &r.verdict {
        Verdict::Ok => lignes.push("Test went successfully".to_string()),
        Verdict::ErreurResolution(msg) => {
            lignes.push(format!("Caught unexpected solving error: {msg}"))
        }
        Verdict::NombreDifferent { obtenu } => {
            lignes.push("Got different amount of roots".to_string());
            lignes.push(format!("Expected: {}, actual: {obtenu}", r.cas.nombre));
        }
        Verdict::RacinesDifferentes { obtenu } => {
            lignes.push("Got different roots".to_string());
            match *obtenu {
                Solution::Une(x) => {
                    lignes.push(format!("Expected: x = {}, actual: x = {x}", r.cas.x1))
                }
                Solution::Deux(x1, x2) => {
                    lignes.push(format!(
                        "Expected: x1 = {}, x2 = {},",
                        r.cas.x1, r.cas.x2
                    ));
                    lignes.push(format!("Actual: x1 = {x1}, x2 = {x2}"));
                }
                Solution::Aucune | Solution::Infinite => {}
            }
        }
    }

    lignes.push("------------------------".to_string());
    lignes
}
