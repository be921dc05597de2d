//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique `EtatCalc` et le faire évoluer par `dispatch`.
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par `noyau::reduire`.
//! - Une action = une transition, synchrone (pas de file d’attente).
//! - L’écran se déduit de l’état à chaque frame (pas de cache d’affichage).

use crate::noyau::{formater_operande, reduire, Action, EtatCalc};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub etat: EtatCalc,
}

impl AppCalc {
    /// Point d’entrée unique des touches du pavé.
    pub fn dispatch(&mut self, action: Action) {
        self.etat = reduire(&self.etat, action);
    }

    /// Ligne du haut : "précédent opération" (chaque côté peut être vide).
    pub fn ligne_precedente(&self) -> String {
        let precedent = formater_operande(self.etat.precedent.as_deref()).unwrap_or_default();
        let operation = self
            .etat
            .operation
            .map(|op| op.to_string())
            .unwrap_or_default();
        format!("{precedent} {operation}")
    }

    /// Ligne du bas : opérande courant formaté.
    pub fn ligne_courante(&self) -> String {
        formater_operande(self.etat.courant.as_deref()).unwrap_or_default()
    }
}
