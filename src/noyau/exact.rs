// src/noyau/exact.rs
//
// Analyse exacte (Q-pur) : le texte décimal saisi est relu en rationnel,
// puis Δ = b² - 4ac et les relations de Vieta (x1 + x2 = -b/a, x1·x2 = c/a)
// sont calculés sans arrondi.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Garde-fou : exposant décimal borné (anti-gel sur "1e999999999").
const EXPOSANT_MAX: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyseExacte {
    pub discriminant: BigRational,
    /// (somme, produit) ; None si a = 0 (pas de relations de Vieta).
    pub vieta: Option<(BigRational, BigRational)>,
}

/* ------------------------ Lecture décimale exacte ------------------------ */

/// "−12.5e-3" -> -1/80. None si le texte n’est pas un décimal fini.
pub fn rationnel_depuis_decimal(texte: &str) -> Option<BigRational> {
    let t = texte.trim();

    let (neg, corps) = match t.as_bytes().first()? {
        b'-' => (true, &t[1..]),
        b'+' => (false, &t[1..]),
        _ => (false, t),
    };

    let (mantisse, exposant) = match corps.find(['e', 'E']) {
        Some(i) => (&corps[..i], corps[i + 1..].parse::<i64>().ok()?),
        None => (corps, 0),
    };

    let (entier, frac) = match mantisse.find('.') {
        Some(i) => (&mantisse[..i], &mantisse[i + 1..]),
        None => (mantisse, ""),
    };

    if entier.is_empty() && frac.is_empty() {
        return None;
    }
    if !entier.bytes().chain(frac.bytes()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;

    // valeur = n × 10^(exposant - len(frac))
    let decalage = exposant.checked_sub(frac.len() as i64)?;
    if decalage.unsigned_abs() > u64::from(EXPOSANT_MAX) {
        return None;
    }

    let puissance = BigInt::from(10).pow(decalage.unsigned_abs() as u32);
    let mut r = if decalage >= 0 {
        BigRational::from_integer(n * puissance)
    } else {
        BigRational::new(n, puissance)
    };

    if neg {
        r = -r;
    }
    Some(r)
}

/* ------------------------ Analyse ------------------------ */

pub fn analyser(a: &BigRational, b: &BigRational, c: &BigRational) -> AnalyseExacte {
    let quatre = BigRational::from_integer(BigInt::from(4));
    let discriminant = b * b - quatre * a * c;

    let vieta = if a.is_zero() {
        None
    } else {
        Some((-b / a, c / a))
    };

    AnalyseExacte {
        discriminant,
        vieta,
    }
}

/// Depuis le texte brut des trois coefficients.
pub fn analyser_textes(brut: &[String; 3]) -> Option<AnalyseExacte> {
    let a = rationnel_depuis_decimal(&brut[0])?;
    let b = rationnel_depuis_decimal(&brut[1])?;
    let c = rationnel_depuis_decimal(&brut[2])?;
    Some(analyser(&a, &b, &c))
}

/* ------------------------ Affichage ------------------------ */

pub fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Lignes d’analyse exacte (CLI --vieta et GUI).
pub fn formater_analyse(analyse: &AnalyseExacte) -> Vec<String> {
    let mut lignes = Vec::with_capacity(2);

    let signe = if analyse.discriminant.is_positive() {
        "> 0"
    } else if analyse.discriminant.is_negative() {
        "< 0"
    } else {
        "= 0"
    };
    lignes.push(format!(
        "exact discriminant: D = {} ({signe})",
        format_rat_pretty(&analyse.discriminant)
    ));

    if let Some((somme, produit)) = &analyse.vieta {
        lignes.push(format!(
            "Vieta: x1 + x2 = -b/a = {}, x1 * x2 = c/a = {}",
            format_rat_pretty(somme),
            format_rat_pretty(produit)
        ));
    }

    lignes
}
