// src/config.rs
//
// Ligne de commande (clap) -> Mode + Reglages.
// Pas de fichier de configuration, pas de variables d’environnement.

use std::path::PathBuf;

use clap::Parser;

use crate::noyau::affichage::{PRECISION_DEFAUT, PRECISION_MAX};
use crate::noyau::comparaison::EPSILON_DEFAUT;

/// Solve a·x² + b·x + c = 0 (real roots, linear and degenerate cases included).
#[derive(Debug, Parser)]
#[command(name = "vieta", version)]
#[command(about = "Quadratic equation solver")]
pub struct Cli {
    /// Type in and solve equations (default mode).
    #[arg(long, conflicts_with_all = ["test", "gui"])]
    pub solve: bool,

    /// Run the solver test campaign: built-in table, or lines "a b c x1 x2 n" from FILE.
    #[arg(long, value_name = "FILE", num_args = 0..=1, conflicts_with = "gui")]
    pub test: Option<Option<PathBuf>>,

    /// Open the graphical front end.
    #[arg(long)]
    pub gui: bool,

    /// Digits printed after the decimal point.
    #[arg(long, default_value_t = PRECISION_DEFAUT, value_parser = parse_precision)]
    pub precision: usize,

    /// Tolerance under which a value is treated as zero.
    #[arg(long, default_value_t = EPSILON_DEFAUT, value_parser = parse_epsilon)]
    pub epsilon: f64,

    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,

    /// Do not print prompts.
    #[arg(long, short)]
    pub quiet: bool,

    /// Also print the exact discriminant and Vieta's relations.
    #[arg(long)]
    pub vieta: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Resoudre,
    Tester(Option<PathBuf>),
    Graphique,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub precision: usize,
    pub epsilon: f64,
    pub couleur: bool,
    pub invite: bool,
    pub vieta: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            precision: PRECISION_DEFAUT,
            epsilon: EPSILON_DEFAUT,
            couleur: true,
            invite: true,
            vieta: false,
        }
    }
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.gui {
            Mode::Graphique
        } else if let Some(chemin) = &self.test {
            Mode::Tester(chemin.clone())
        } else {
            Mode::Resoudre
        }
    }

    pub fn reglages(&self) -> Reglages {
        Reglages {
            precision: self.precision,
            epsilon: self.epsilon,
            couleur: !self.no_color,
            invite: !self.quiet,
            vieta: self.vieta,
        }
    }
}

fn parse_precision(s: &str) -> Result<usize, String> {
    let p: usize = s.parse().map_err(|_| format!("`{s}` is not a digit count"))?;
    if p > PRECISION_MAX {
        return Err(format!("precision must be between 0 and {PRECISION_MAX}"));
    }
    Ok(p)
}

fn parse_epsilon(s: &str) -> Result<f64, String> {
    let e: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if !e.is_finite() || e <= 0.0 {
        return Err("epsilon must be finite and strictly positive".to_string());
    }
    Ok(e)
}
