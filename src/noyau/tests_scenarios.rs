//! Tests scénarios : séquences de touches complètes, comme au pavé.
//!
//! Chaque scénario part de l’état vide et vérifie l’écran (formaté),
//! pas seulement l’état brut.

use super::action::{Action, Operation};
use super::etat::EtatCalc;
use super::format::formater_operande;
use super::reducteur::reduire;

/// Traduit une frappe "2+2=" en actions. 'C' = AC, '<' = DEL.
fn frappe(touches: &str) -> EtatCalc {
    touches.chars().fold(EtatCalc::vide(), |e, t| {
        let action = match t {
            'C' => Action::Effacer,
            '<' => Action::SupprimerChiffre,
            '=' => Action::Evaluer,
            '0'..='9' | '.' => Action::AjouterChiffre(t),
            op => Action::ChoisirOperation(
                op.to_string()
                    .parse::<Operation>()
                    .unwrap_or_else(|e| panic!("touche={op:?} err={e}")),
            ),
        };
        reduire(&e, action)
    })
}

fn ecran(e: &EtatCalc) -> (String, String) {
    let haut = format!(
        "{} {}",
        formater_operande(e.precedent.as_deref()).unwrap_or_default(),
        e.operation.map(|op| op.to_string()).unwrap_or_default()
    );
    let bas = formater_operande(e.courant.as_deref()).unwrap_or_default();
    (haut.trim().to_string(), bas)
}

#[test]
fn deux_plus_deux() {
    let e = frappe("2+2=");
    assert_eq!(e.courant.as_deref(), Some("4"));
    assert!(e.ecraser);
    assert_eq!(e.operation, None);
    assert_eq!(e.precedent, None);
}

#[test]
fn enchainement_sans_egal() {
    let e = frappe("2+2-");
    assert_eq!(e.precedent.as_deref(), Some("4"));
    assert_eq!(e.operation, Some(Operation::Soustraction));
    assert_eq!(e.courant, None);
    assert_eq!(ecran(&e), ("4 −".to_string(), String::new()));
}

#[test]
fn longue_chaine() {
    // ((12 × 3) − 6) ÷ 4 = 7.5
    let e = frappe("12*3-6/4=");
    assert_eq!(e.courant.as_deref(), Some("7.5"));
}

#[test]
fn nouveau_nombre_apres_egal() {
    let e = frappe("2+2=7");
    assert_eq!(e.courant.as_deref(), Some("7"));
    assert!(!e.ecraser);
}

#[test]
fn resultat_reutilise_comme_operande() {
    let e = frappe("2+2=+1=");
    assert_eq!(e.courant.as_deref(), Some("5"));
}

#[test]
fn correction_de_saisie() {
    // 362 -> DEL -> 36 -> 2
    let e = frappe("362<5");
    assert_eq!(e.courant.as_deref(), Some("365"));
}

#[test]
fn milliers_a_l_ecran() {
    let e = frappe("1234.5*");
    assert_eq!(ecran(&e).0, "1,234.5 ×");
    let e = frappe("999*1001=");
    assert_eq!(ecran(&e).1, "999,999");
}

#[test]
fn division_par_zero_a_l_ecran() {
    let e = frappe("1/0=");
    assert_eq!(e.courant.as_deref(), Some("inf"));
    assert_eq!(ecran(&e).1, "∞");
}

#[test]
fn artefact_flottant_visible() {
    let e = frappe(".1+.2=");
    assert_eq!(ecran(&e).1, "0.30000000000000004");
}

#[test]
fn effacer_en_pleine_saisie() {
    assert!(frappe("12+34C").est_vide());
}

#[test]
fn touches_sans_effet() {
    assert!(frappe("+=<").est_vide());
    assert_eq!(frappe("00").courant.as_deref(), Some("0"));
    assert_eq!(frappe("1..5").courant.as_deref(), Some("1.5"));
}
