//! Noyau — évaluation (précédent, courant, opération) -> chaîne résultat
//!
//! Flottant brut (f64) : pas d’arrondi, les artefacts binaires restent visibles
//! (0.1 + 0.2 -> "0.30000000000000004"). Accepté pour une calculatrice simple.
//!
//! Représentation canonique = `Display` de f64 :
//! - entier -> sans partie décimale ("4")
//! - jamais de notation exponentielle
//! - 1 ÷ 0 -> "inf", -1 ÷ 0 -> "-inf", 0 ÷ 0 -> "NaN"

use thiserror::Error;

use super::action::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("opérande non numérique : {operande:?}")]
    OperandeInvalide { operande: String },
}

fn lire_operande(s: &str) -> Result<f64, ErreurEval> {
    // NaN lu tel quel ("NaN") = pas un nombre exploitable
    match s.parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(ErreurEval::OperandeInvalide {
            operande: s.to_string(),
        }),
    }
}

/// Calcul typé : erreur si l’un des opérandes ne se lit pas.
pub fn calculer(precedent: &str, courant: &str, op: Operation) -> Result<f64, ErreurEval> {
    let a = lire_operande(precedent)?;
    let b = lire_operande(courant)?;
    Ok(op.appliquer(a, b))
}

/// API du réducteur : résultat sous forme de chaîne.
/// Opérande illisible => chaîne vide ("pas de résultat affichable"), jamais d’erreur remontée.
pub fn evaluer(precedent: &str, courant: &str, op: Operation) -> String {
    match calculer(precedent, courant, op) {
        Ok(v) => v.to_string(),
        Err(e) => {
            tracing::debug!(%e, %op, "évaluation indisponible");
            String::new()
        }
    }
}
