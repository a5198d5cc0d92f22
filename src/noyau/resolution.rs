// src/noyau/resolution.rs
//
// Résolution par discriminant, avec repli linéaire / dégénéré quand a ≈ 0.
// Fonction pure : pas d’état global, mêmes entrées => même sortie.

use super::comparaison::{est_nul, signe, Signe};
use super::equation::{Equation, Solution};
use super::erreurs::ErreurResolution;

/// Classe et résout `eq`. Les coefficients non finis sont refusés AVANT tout calcul.
pub fn resoudre(eq: &Equation, epsilon: f64) -> Result<Solution, ErreurResolution> {
    if !eq.est_finie() {
        return Err(ErreurResolution::CoefficientsInvalides {
            a: eq.a,
            b: eq.b,
            c: eq.c,
        });
    }

    if est_nul(eq.a, epsilon) {
        return finie(eq, resoudre_lineaire(eq.b, eq.c, epsilon));
    }

    // Mise à l’échelle par le plus grand |coef| : b² - 4ac ne déborde plus.
    // D = D' · s², donc |D| ≤ ε  <=>  |D'| ≤ ε / s².
    let s = eq.a.abs().max(eq.b.abs()).max(eq.c.abs());
    let (a, b, c) = (eq.a / s, eq.b / s, eq.c / s);
    let discriminant = b * b - 4.0 * a * c;

    let solution = match signe(discriminant, epsilon / s / s) {
        Signe::Negatif => Solution::Aucune,
        Signe::Nul => Solution::Une(sans_zero_negatif(-eq.b / (2.0 * eq.a))),
        Signe::Positif => {
            // q porte le signe de b : pas de soustraction de quantités voisines
            let q = -0.5 * (b + b.signum() * discriminant.sqrt());
            let (x1, x2) = (q / a, c / q);
            // a < 0 inverse l’ordre : on garde toujours x1 < x2
            let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
            Solution::Deux(sans_zero_negatif(x1), sans_zero_negatif(x2))
        }
    };

    finie(eq, solution)
}

/// Refuse une solution dont une racine a quitté la plage des f64.
fn finie(eq: &Equation, solution: Solution) -> Result<Solution, ErreurResolution> {
    let ok = match solution {
        Solution::Une(x) => x.is_finite(),
        Solution::Deux(x1, x2) => x1.is_finite() && x2.is_finite(),
        Solution::Aucune | Solution::Infinite => true,
    };
    if ok {
        Ok(solution)
    } else {
        Err(ErreurResolution::HorsLimites {
            a: eq.a,
            b: eq.b,
            c: eq.c,
        })
    }
}

/// b·x + c = 0
fn resoudre_lineaire(b: f64, c: f64, epsilon: f64) -> Solution {
    if !est_nul(b, epsilon) {
        return Solution::Une(sans_zero_negatif(-c / b));
    }
    if est_nul(c, epsilon) {
        Solution::Infinite
    } else {
        Solution::Aucune
    }
}

/// -0.0 -> 0.0 (sinon "-0.000000" à l’affichage)
fn sans_zero_negatif(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}
