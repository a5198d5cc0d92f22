// src/couleurs.rs
//
// Couleurs ANSI pour la console (désactivables avec --no-color).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Couleur {
    Rouge,
    Vert,
    Jaune,
    Violet,
    Cyan,
}

impl Couleur {
    fn code(self) -> &'static str {
        match self {
            Self::Rouge => "\x1b[31m",
            Self::Vert => "\x1b[32m",
            Self::Jaune => "\x1b[33m",
            Self::Violet => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
        }
    }
}

const REINIT: &str = "\x1b[0m";

pub fn colorer(texte: &str, couleur: Couleur, actif: bool) -> String {
    if actif {
        format!("{}{texte}{REINIT}", couleur.code())
    } else {
        texte.to_string()
    }
}
