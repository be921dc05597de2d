//! Noyau — réducteur (machine à états du pavé)
//!
//! `reduire(&état, action) -> nouvel état` : fonction pure, aucune mutation en place.
//! Les gardes (zéro de tête, double point, évaluation incomplète) absorbent
//! les séquences invalides comme des no-op : pas d’état d’erreur visible.

use super::action::{Action, Operation};
use super::etat::EtatCalc;
use super::eval::evaluer;

pub fn reduire(etat: &EtatCalc, action: Action) -> EtatCalc {
    let suivant = match action {
        Action::AjouterChiffre(chiffre) => ajouter_chiffre(etat, chiffre),
        Action::ChoisirOperation(op) => choisir_operation(etat, op),
        Action::Effacer => EtatCalc::vide(),
        Action::SupprimerChiffre => supprimer_chiffre(etat),
        Action::Evaluer => evaluer_etat(etat),
    };
    tracing::trace!(?action, avant = ?etat, apres = ?suivant, "transition");
    suivant
}

fn ajouter_chiffre(etat: &EtatCalc, chiffre: char) -> EtatCalc {
    // Juste après "=" : on repart d’un nouveau nombre
    if etat.ecraser {
        return EtatCalc {
            courant: Some(chiffre.to_string()),
            ecraser: false,
            ..etat.clone()
        };
    }

    let courant = etat.courant.as_deref();

    // Pas de "00"
    if chiffre == '0' && courant == Some("0") {
        return etat.clone();
    }

    // Un seul point décimal
    if chiffre == '.' && courant.is_some_and(|c| c.contains('.')) {
        return etat.clone();
    }

    let mut nouveau = courant.unwrap_or_default().to_string();
    nouveau.push(chiffre);
    EtatCalc {
        courant: Some(nouveau),
        ..etat.clone()
    }
}

fn choisir_operation(etat: &EtatCalc, op: Operation) -> EtatCalc {
    match (&etat.precedent, &etat.courant, etat.operation) {
        // Rien saisi : rien à opérer
        (None, None, _) => etat.clone(),

        // "34 +" puis "×" : on change d’avis sur l’opération
        (_, None, _) => EtatCalc {
            operation: Some(op),
            ..etat.clone()
        },

        // Premier opérande : il monte en "précédent"
        (None, Some(courant), _) => EtatCalc {
            precedent: Some(courant.clone()),
            operation: Some(op),
            courant: None,
            ..etat.clone()
        },

        // Enchaînement "2 + 2 +" : on calcule d’abord 4
        (Some(precedent), Some(courant), en_attente) => EtatCalc {
            precedent: Some(calcul_en_attente(precedent, courant, en_attente)),
            operation: Some(op),
            courant: None,
            ..etat.clone()
        },
    }
}

/// Sans opération en attente il n’y a pas de calcul possible : résultat vide.
fn calcul_en_attente(precedent: &str, courant: &str, op: Option<Operation>) -> String {
    op.map(|op| evaluer(precedent, courant, op))
        .unwrap_or_default()
}

fn supprimer_chiffre(etat: &EtatCalc) -> EtatCalc {
    // DEL juste après "=" : efface le résultat entier
    if etat.ecraser {
        return EtatCalc {
            courant: None,
            ecraser: false,
            ..etat.clone()
        };
    }

    let Some(courant) = etat.courant.as_deref() else {
        return etat.clone();
    };

    let mut reste = courant.chars();
    reste.next_back();
    let reste = reste.as_str();

    EtatCalc {
        courant: (!reste.is_empty()).then(|| reste.to_string()),
        ..etat.clone()
    }
}

fn evaluer_etat(etat: &EtatCalc) -> EtatCalc {
    let (Some(precedent), Some(courant), Some(op)) =
        (&etat.precedent, &etat.courant, etat.operation)
    else {
        return etat.clone();
    };

    EtatCalc {
        courant: Some(evaluer(precedent, courant, op)),
        precedent: None,
        operation: None,
        ecraser: true,
    }
}
