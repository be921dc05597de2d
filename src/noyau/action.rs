//! Noyau — actions du pavé + opérations
//!
//! Un seul vocabulaire partagé entre la vue (qui émet) et le réducteur (qui consomme).
//! Énumérations fermées : une action inconnue n’existe pas à la compilation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Les quatre opérations de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operation {
    #[cfg(test)]
    pub const TOUTES: [Operation; 4] = [
        Operation::Division,
        Operation::Multiplication,
        Operation::Addition,
        Operation::Soustraction,
    ];

    /// Symbole affiché (écran + touche).
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Soustraction => "−",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }

    /// Applique l’opération en flottant IEEE 754, sans arrondi.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Addition => a + b,
            Operation::Soustraction => a - b,
            Operation::Multiplication => a * b,
            Operation::Division => a / b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurOperation {
    #[error("symbole d’opération inconnu : {0:?}")]
    SymboleInconnu(String),
}

impl FromStr for Operation {
    type Err = ErreurOperation;

    /// Accepte le symbole affiché et sa forme ASCII.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operation::Addition),
            "-" | "−" => Ok(Operation::Soustraction),
            "*" | "×" => Ok(Operation::Multiplication),
            "/" | "÷" => Ok(Operation::Division),
            autre => Err(ErreurOperation::SymboleInconnu(autre.to_string())),
        }
    }
}

/// Message émis par une touche, consommé par `reducteur::reduire`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Chiffre 0–9 ou point décimal.
    AjouterChiffre(char),
    ChoisirOperation(Operation),
    /// AC
    Effacer,
    /// DEL
    SupprimerChiffre,
    /// =
    Evaluer,
}
