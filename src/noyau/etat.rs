//! Noyau — état de la calculatrice (valeur immuable).
//!
//! Contrats :
//! - `operation` n’est posée que si `precedent` l’est (ou va l’être).
//! - `courant` contient au plus un point décimal.
//! - Chaque action produit un NOUVEL état (voir reducteur.rs).

use super::action::Operation;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EtatCalc {
    /// Opérande en cours de saisie (chaîne numérique).
    pub courant: Option<String>,
    /// Opérande déjà validé (à gauche de l’opération).
    pub precedent: Option<String>,
    pub operation: Option<Operation>,
    /// Le prochain chiffre REMPLACE `courant` (posé juste après "=").
    pub ecraser: bool,
}

impl EtatCalc {
    /// État vide (démarrage, AC).
    pub fn vide() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn est_vide(&self) -> bool {
        *self == Self::default()
    }
}
