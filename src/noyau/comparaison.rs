// src/noyau/comparaison.rs
//
// Comparaison à zéro avec tolérance.

/// Tolérance par défaut : en dessous, un flottant est considéré nul.
/// Choix empirique adapté à des coefficients d’ordre 1e-3..1e3.
pub const EPSILON_DEFAUT: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signe {
    Negatif,
    Nul,
    Positif,
}

pub fn est_nul(x: f64, epsilon: f64) -> bool {
    x.abs() < epsilon
}

/// Signe à ε près, bornes incluses : |x| ≤ ε => `Nul`.
pub fn signe(x: f64, epsilon: f64) -> Signe {
    if x.abs() <= epsilon {
        Signe::Nul
    } else if x > 0.0 {
        Signe::Positif
    } else {
        Signe::Negatif
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signe_avec_tolerance() {
        assert_eq!(signe(0.0, EPSILON_DEFAUT), Signe::Nul);
        assert_eq!(signe(-5e-7, EPSILON_DEFAUT), Signe::Nul);
        assert_eq!(signe(2e-6, EPSILON_DEFAUT), Signe::Positif);
        assert_eq!(signe(-2e-6, EPSILON_DEFAUT), Signe::Negatif);
    }

    #[test]
    fn tolerance_stricte() {
        // |x| == ε n’est plus nul
        assert!(!est_nul(1e-3, 1e-3));
        assert!(est_nul(9.9e-4, 1e-3));
    }

    #[test]
    fn signe_borne_incluse() {
        assert_eq!(signe(1e-3, 1e-3), Signe::Nul);
        assert_eq!(signe(-1e-3, 1e-3), Signe::Nul);
        assert_eq!(signe(1.0000001e-3, 1e-3), Signe::Positif);
        assert_eq!(signe(5.0, 0.0), Signe::Positif);
        assert_eq!(signe(0.0, 0.0), Signe::Nul);
    }
}
