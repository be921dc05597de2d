// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : "précédent opération" au-dessus, opérande courant en dessous
// - Pavé 4 colonnes, AC et "=" sur deux colonnes
// - Un clic = une Action envoyée à AppCalc::dispatch (rien d’autre)
//
// Note : pas de gestion clavier (uniquement le pavé à l’écran).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Action, Operation};

/// Taille d’une touche simple (px).
const TOUCHE: [f32; 2] = [72.0, 56.0];

/// Espace entre touches (px).
const ESPACE: f32 = 6.0;

/// Nombre de colonnes du pavé.
const COLONNES: usize = 4;

/// Une touche du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operation(Operation),
    Effacer,
    Supprimer,
    Egal,
}

impl Touche {
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Operation(op) => op.symbole().to_string(),
            Touche::Effacer => "AC".to_string(),
            Touche::Supprimer => "DEL".to_string(),
            Touche::Egal => "=".to_string(),
        }
    }

    /// Exactement une action par touche.
    pub fn action(self) -> Action {
        match self {
            Touche::Chiffre(c) => Action::AjouterChiffre(c),
            Touche::Operation(op) => Action::ChoisirOperation(op),
            Touche::Effacer => Action::Effacer,
            Touche::Supprimer => Action::SupprimerChiffre,
            Touche::Egal => Action::Evaluer,
        }
    }
}

/// Disposition du pavé : (touche, nombre de colonnes occupées).
pub const PAVE: [&[(Touche, usize)]; 5] = [
    &[
        (Touche::Effacer, 2),
        (Touche::Supprimer, 1),
        (Touche::Operation(Operation::Division), 1),
    ],
    &[
        (Touche::Chiffre('1'), 1),
        (Touche::Chiffre('2'), 1),
        (Touche::Chiffre('3'), 1),
        (Touche::Operation(Operation::Multiplication), 1),
    ],
    &[
        (Touche::Chiffre('4'), 1),
        (Touche::Chiffre('5'), 1),
        (Touche::Chiffre('6'), 1),
        (Touche::Operation(Operation::Addition), 1),
    ],
    &[
        (Touche::Chiffre('7'), 1),
        (Touche::Chiffre('8'), 1),
        (Touche::Chiffre('9'), 1),
        (Touche::Operation(Operation::Soustraction), 1),
    ],
    &[
        (Touche::Chiffre('.'), 1),
        (Touche::Chiffre('0'), 1),
        (Touche::Egal, 2),
    ],
];

fn largeur_pave() -> f32 {
    COLONNES as f32 * TOUCHE[0] + (COLONNES - 1) as f32 * ESPACE
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        ui.vertical_centered(|ui| {
            ui.set_max_width(largeur_pave());
            self.ui_ecran(ui);
            ui.add_space(ESPACE);
            self.ui_pave(ui);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.ligne_precedente())
                            .monospace()
                            .size(18.0)
                            .weak(),
                    );
                    ui.label(
                        egui::RichText::new(self.ligne_courante())
                            .monospace()
                            .size(32.0)
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        for rangee in PAVE {
            ui.horizontal(|ui| {
                for &(touche, colonnes) in rangee {
                    self.bouton(ui, touche, colonnes);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, colonnes: usize) {
        let largeur = colonnes as f32 * TOUCHE[0] + colonnes.saturating_sub(1) as f32 * ESPACE;
        let texte = egui::RichText::new(touche.libelle()).size(22.0);
        let resp = ui.add_sized([largeur, TOUCHE[1]], egui::Button::new(texte));

        if resp.clicked() {
            self.dispatch(touche.action());
        }
    }
}
