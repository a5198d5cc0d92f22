// src/console.rs
//
// Mode console : boucle lecture -> résolution -> affichage, et campagne --test.
//
// Automate :
//   LECTURE --succès--> RÉSOLUTION -> AFFICHAGE -> LECTURE
//   LECTURE --invalide--> message -> LECTURE
//   LECTURE --sortie--> TERMINÉ
//
// Résultats sur `sortie` (stdout), diagnostics sur `diag` (stderr).

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::config::Reglages;
use crate::couleurs::{colorer, Couleur};
use crate::noyau::affichage::ecrire_solution;
use crate::noyau::campagne::{self, CasAttendu};
use crate::noyau::exact::{analyser_textes, formater_analyse};
use crate::noyau::resoudre;
use crate::noyau::saisie::{LecteurCoefficients, Lecture};

const INVITE: &str = "Type in coefficients \"a b c\" of ax^2 + bx + c == 0 (\"exit\" to leave): ";
const AU_REVOIR: &str = "Stop using Vieta";

/// Codes de sortie du processus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeSortie {
    /// Sortie demandée / fin d’entrée / campagne sans erreur.
    Succes,
    /// Campagne en échec (cas faux, fichier absent ou invalide).
    EchecCampagne,
    /// Entrée (ou sortie) illisible : non récupérable.
    ErreurEntreeSortie,
}

impl From<CodeSortie> for ExitCode {
    fn from(code: CodeSortie) -> Self {
        match code {
            CodeSortie::Succes => ExitCode::SUCCESS,
            CodeSortie::EchecCampagne => ExitCode::from(1),
            CodeSortie::ErreurEntreeSortie => ExitCode::from(2),
        }
    }
}

/* ------------------------ Boucle interactive ------------------------ */

pub fn boucle<R, W, D>(
    entree: R,
    sortie: &mut W,
    diag: &mut D,
    reglages: &Reglages,
) -> io::Result<CodeSortie>
where
    R: BufRead,
    W: Write,
    D: Write,
{
    let mut lecteur = LecteurCoefficients::new(entree);

    loop {
        if reglages.invite && !lecteur.a_des_jetons_en_attente() {
            write!(sortie, "{INVITE}")?;
            sortie.flush()?;
        }

        let saisie = match lecteur.lire() {
            Ok(Lecture::Coefficients(s)) => s,
            Ok(Lecture::Sortie) => {
                if reglages.invite {
                    writeln!(sortie)?;
                }
                writeln!(sortie, "{}", colorer(AU_REVOIR, Couleur::Cyan, reglages.couleur))?;
                return Ok(CodeSortie::Succes);
            }
            Err(e) if e.est_recuperable() => {
                writeln!(diag, "{}", colorer(&e.to_string(), Couleur::Rouge, reglages.couleur))?;
                continue;
            }
            Err(e) => {
                writeln!(diag, "{}", colorer(&e.to_string(), Couleur::Rouge, reglages.couleur))?;
                return Ok(CodeSortie::ErreurEntreeSortie);
            }
        };

        let solution = match resoudre(&saisie.equation, reglages.epsilon) {
            Ok(s) => s,
            Err(e) => {
                let msg = format!("{e}, equation skipped");
                writeln!(diag, "{}", colorer(&msg, Couleur::Rouge, reglages.couleur))?;
                continue;
            }
        };

        ecrire_solution(sortie, &solution, reglages.precision)?;

        if reglages.vieta {
            match analyser_textes(&saisie.brut) {
                Some(analyse) => {
                    for ligne in formater_analyse(&analyse) {
                        writeln!(sortie, "{}", colorer(&ligne, Couleur::Violet, reglages.couleur))?;
                    }
                }
                None => writeln!(sortie, "exact analysis unavailable")?,
            }
        }
    }
}

/* ------------------------ Campagne --test ------------------------ */

pub fn campagne<W, D>(
    fichier: Option<&Path>,
    sortie: &mut W,
    diag: &mut D,
    reglages: &Reglages,
) -> io::Result<CodeSortie>
where
    W: Write,
    D: Write,
{
    let cas: Vec<CasAttendu> = match fichier {
        None => campagne::table_integree(),
        Some(chemin) => match campagne::charger_fichier(chemin) {
            Ok(c) => c,
            Err(e) => {
                writeln!(diag, "{}", colorer(&e.to_string(), Couleur::Rouge, reglages.couleur))?;
                return Ok(CodeSortie::EchecCampagne);
            }
        },
    };

    let bilan = campagne::executer(&cas, reglages.epsilon);
    for rapport in &bilan.rapports {
        for ligne in campagne::formater_rapport(rapport) {
            writeln!(sortie, "{ligne}")?;
        }
    }

    writeln!(
        sortie,
        "{}",
        colorer("All tests have been carried out", Couleur::Jaune, reglages.couleur)
    )?;
    let total = format!("Total: {}, Errors: {}", bilan.total(), bilan.erreurs());
    let couleur = if bilan.erreurs() == 0 {
        Couleur::Vert
    } else {
        Couleur::Rouge
    };
    writeln!(sortie, "{}", colorer(&total, couleur, reglages.couleur))?;

    Ok(if bilan.erreurs() == 0 {
        CodeSortie::Succes
    } else {
        CodeSortie::EchecCampagne
    })
}
