// src/noyau/affichage.rs

use std::io::{self, Write};

use super::equation::Solution;

/// Précision d’affichage par défaut (comme `%f`).
pub const PRECISION_DEFAUT: usize = 6;

/// Borne haute : au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const PRECISION_MAX: usize = 17;

/* ------------------------ Valeurs ------------------------ */

/// Décimal à précision fixe, sans "-0.000…".
pub fn formater_valeur(x: f64, precision: usize) -> String {
    let s = format!("{x:.precision$}");
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/* ------------------------ Résultat ------------------------ */

/// Une ligne par cas, déterministe.
pub fn formater_solution(solution: &Solution, precision: usize) -> String {
    match *solution {
        Solution::Aucune => "no real roots".to_string(),
        Solution::Une(x) => format!("one root: x = {}", formater_valeur(x, precision)),
        Solution::Deux(x1, x2) => format!(
            "two roots: x1 = {}, x2 = {}",
            formater_valeur(x1, precision),
            formater_valeur(x2, precision)
        ),
        Solution::Infinite => "infinitely many roots".to_string(),
    }
}

pub fn ecrire_solution<W: Write>(
    sortie: &mut W,
    solution: &Solution,
    precision: usize,
) -> io::Result<()> {
    writeln!(sortie, "{}", formater_solution(solution, precision))
}
