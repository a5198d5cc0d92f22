// src/noyau/equation.rs

use std::fmt;

/// Équation a·x² + b·x + c = 0 (valeur immuable, une par résolution).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Equation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Equation {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn est_finie(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

/// Forme courte façon `%lg` : 1x^2 + -3x + 2
impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x^2 + {}x + {}", self.a, self.b, self.c)
    }
}

/// Nombre de racines (classification).
///
/// `NonResolue` n’existe que comme état d’affichage initial (GUI) ;
/// une résolution terminée porte toujours l’un des quatre autres.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NombreRacines {
    #[default]
    NonResolue,
    Aucune,
    Une,
    Deux,
    Infinite,
}

impl NombreRacines {
    /// Code du fichier de campagne : 0, 1, 2, -2 (infinité).
    pub fn depuis_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Aucune),
            1 => Some(Self::Une),
            2 => Some(Self::Deux),
            -2 => Some(Self::Infinite),
            _ => None,
        }
    }
}

impl fmt::Display for NombreRacines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NonResolue => "NOT SOLVED",
            Self::Aucune => "0",
            Self::Une => "1",
            Self::Deux => "2",
            Self::Infinite => "INF",
        };
        f.write_str(s)
    }
}

/// Résultat étiqueté : les racines vivent dans la variante,
/// donc une case inutilisée ne peut pas être lue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Solution {
    Aucune,
    Une(f64),
    /// x1 < x2 (ordre croissant).
    Deux(f64, f64),
    Infinite,
}

impl Solution {
    pub fn nombre(&self) -> NombreRacines {
        match self {
            Self::Aucune => NombreRacines::Aucune,
            Self::Une(_) => NombreRacines::Une,
            Self::Deux(_, _) => NombreRacines::Deux,
            Self::Infinite => NombreRacines::Infinite,
        }
    }
}
