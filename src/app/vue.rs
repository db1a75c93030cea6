// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Afficheur : trace au-dessus, valeur en gros, indicateurs DEG/RAD, 2nd, M, ( n
// - Pavé standard + panneau scientifique (repliable)
// - Clavier : chiffres, . + - * / ^ = % ( ), Enter, Escape, Backspace
//
// La vue ne calcule rien : chaque bouton devient une `Action` envoyée au moteur.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Action, ActionMemoire, Constante, FonctionUnaire, Operateur};

const TAILLE_BOUTON: [f32; 2] = [56.0, 36.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_afficheur(ui);

                ui.add_space(8.0);
                self.ui_indicateurs(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if self.scientifique {
                    self.ui_scientifique(ui);
                    ui.add_space(8.0);
                }
                self.ui_pave_numerique(ui);
            });
    }

    fn ui_afficheur(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // trace : une ligne, même vide (afficheur stable)
                    let trace = if self.affichage.trace.is_empty() {
                        " "
                    } else {
                        self.affichage.trace.as_str()
                    };
                    ui.label(egui::RichText::new(trace).monospace().weak());

                    let mut valeur = egui::RichText::new(&self.affichage.valeur)
                        .monospace()
                        .size(32.0);
                    if self.affichage.valeur == crate::noyau::format::SENTINELLE_ERREUR {
                        valeur = valeur.color(ui.visuals().error_fg_color);
                    }
                    ui.label(valeur);
                });
            });
    }

    fn ui_indicateurs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.monospace(self.affichage.mode_angle);
            if self.affichage.second {
                ui.monospace("2nd");
            }
            if self.affichage.memoire {
                ui.monospace("M");
            }
            if self.affichage.parentheses > 0 {
                ui.monospace(format!("( {}", self.affichage.parentheses));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut self.scientifique, "Scientifique");
            });
        });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        let second = self.affichage.second;

        egui::Grid::new("pave_scientifique")
            .num_columns(6)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "2nd", "Inverse la prochaine fonction trigo", Action::BasculerSecond);
                let angle = if self.affichage.mode_angle == "DEG" { "RAD" } else { "DEG" };
                self.bouton_action(ui, angle, "Change l’unité d’angle", Action::BasculerAngle);
                self.bouton_action(ui, "MC", "Efface la mémoire", Action::Memoire(ActionMemoire::Effacer));
                self.bouton_action(ui, "M+", "Ajoute à la mémoire", Action::Memoire(ActionMemoire::Ajouter));
                self.bouton_action(ui, "M-", "Retire de la mémoire", Action::Memoire(ActionMemoire::Soustraire));
                self.bouton_action(ui, "MR", "Rappelle la mémoire", Action::Memoire(ActionMemoire::Rappeler));
                ui.end_row();

                for f in [FonctionUnaire::Sin, FonctionUnaire::Cos, FonctionUnaire::Tan] {
                    self.bouton_fonction(ui, f, second);
                }
                for f in [FonctionUnaire::Sinh, FonctionUnaire::Cosh, FonctionUnaire::Tanh] {
                    self.bouton_fonction(ui, f, second);
                }
                ui.end_row();

                for f in [
                    FonctionUnaire::Ln,
                    FonctionUnaire::Log10,
                    FonctionUnaire::Exp,
                    FonctionUnaire::Exp10,
                    FonctionUnaire::Carre,
                    FonctionUnaire::Cube,
                ] {
                    self.bouton_fonction(ui, f, second);
                }
                ui.end_row();

                for f in [
                    FonctionUnaire::RacineCarree,
                    FonctionUnaire::RacineCubique,
                    FonctionUnaire::Inverse,
                    FonctionUnaire::Factorielle,
                ] {
                    self.bouton_fonction(ui, f, second);
                }
                self.bouton_action(ui, "x^y", "Puissance", Action::Operateur(Operateur::Puissance));
                self.bouton_action(ui, "yroot", "Racine y-ième", Action::Operateur(Operateur::Racine));
                ui.end_row();

                self.bouton_action(ui, "(", "Ouvre un groupe", Action::OuvrirParenthese);
                self.bouton_action(ui, ")", "Ferme le groupe", Action::FermerParenthese);
                for (c, tip) in [
                    (Constante::Pi, "Pi"),
                    (Constante::E, "Nombre d’Euler"),
                    (Constante::Aleatoire, "Nombre aléatoire dans [0, 1)"),
                ] {
                    self.bouton_action(ui, c.nom(), tip, Action::Constante(c));
                }
                self.bouton_action(ui, "EE", "Notation scientifique : a × 10^b", Action::Operateur(Operateur::ExposantSci));
                ui.end_row();
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Efface le calcul (mémoire et modes gardés)", Action::Effacer);
                self.bouton_action(ui, "DEL", "Efface le dernier chiffre", Action::RetourArriere);
                self.bouton_action(ui, "%", "Pourcentage", Action::Pourcent);
                self.bouton_operateur(ui, Operateur::Divise);
                ui.end_row();

                for (ligne, op) in [
                    ([7, 8, 9], Operateur::Fois),
                    ([4, 5, 6], Operateur::Moins),
                    ([1, 2, 3], Operateur::Plus),
                ] {
                    for d in ligne {
                        self.bouton_chiffre(ui, d);
                    }
                    self.bouton_operateur(ui, op);
                    ui.end_row();
                }

                self.bouton_action(ui, "±", "Change le signe", Action::Signe);
                self.bouton_chiffre(ui, 0);
                self.bouton_action(ui, ".", "Point décimal", Action::Virgule);
                self.bouton_action(ui, "=", "Évalue", Action::Egal);
                ui.end_row();
            });
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized(TAILLE_BOUTON, egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.envoyer(action);
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, d: u8) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(d.to_string()));
        if resp.clicked() {
            self.envoyer(Action::Chiffre(d));
        }
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(op.symbole()));
        if resp.clicked() {
            self.envoyer(Action::Operateur(op));
        }
    }

    /// Le libellé suit le mode 2nd : sin devient asin tant qu’il est armé.
    fn bouton_fonction(&mut self, ui: &mut egui::Ui, f: FonctionUnaire, second: bool) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(libelle_fonction(f, second)));
        if resp.clicked() {
            self.envoyer(Action::Unaire(f));
        }
    }
}

fn libelle_fonction(f: FonctionUnaire, second: bool) -> &'static str {
    match f {
        FonctionUnaire::Carre => "x²",
        FonctionUnaire::Cube => "x³",
        FonctionUnaire::RacineCarree => "sqrt",
        FonctionUnaire::RacineCubique => "cbrt",
        FonctionUnaire::Inverse => "1/x",
        FonctionUnaire::Factorielle => "n!",
        FonctionUnaire::Exp => "e^x",
        FonctionUnaire::Exp10 => "10^x",
        autre => autre.selectionner(second).nom(),
    }
}

/* ------------------------ Clavier ------------------------ */

/// Traduit un évènement clavier egui en actions (vide : touche sans rôle).
pub fn action_clavier(ev: &egui::Event) -> Vec<Action> {
    match ev {
        egui::Event::Text(t) => t.chars().filter_map(action_caractere).collect(),
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => vec![Action::Egal],
            egui::Key::Escape => vec![Action::Effacer],
            egui::Key::Backspace => vec![Action::RetourArriere],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn action_caractere(c: char) -> Option<Action> {
    Some(match c {
        '0'..='9' => Action::Chiffre(c as u8 - b'0'),
        '.' | ',' => Action::Virgule,
        '+' => Action::Operateur(Operateur::Plus),
        '-' => Action::Operateur(Operateur::Moins),
        '*' => Action::Operateur(Operateur::Fois),
        '/' => Action::Operateur(Operateur::Divise),
        '^' => Action::Operateur(Operateur::Puissance),
        '=' => Action::Egal,
        '%' => Action::Pourcent,
        '(' => Action::OuvrirParenthese,
        ')' => Action::FermerParenthese,
        _ => return None,
    })
}
