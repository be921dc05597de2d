//! Noyau de la calculatrice (pur, sans UI)
//!
//! Organisation interne :
//! - action.rs    : actions du pavé + opérations (+ − × ÷)
//! - etat.rs      : état (précédent / opération / courant / écraser)
//! - eval.rs      : calcul flottant -> chaîne
//! - format.rs    : affichage avec séparateur de milliers
//! - reducteur.rs : machine à états (état, action) -> nouvel état

pub mod action;
pub mod etat;
pub mod eval;
pub mod format;
pub mod reducteur;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use action::{Action, Operation};
pub use etat::EtatCalc;
pub use format::formater_operande;
pub use reducteur::reduire;
