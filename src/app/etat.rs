//! src/app/etat.rs
//!
//! État UI : le moteur + le dernier affichage rendu.
//!
//! Rôle : faire le pont entre la vue (boutons, clavier) et le noyau.
//! Aucune règle de calcul ici : tout passe par `Moteur::appliquer`.

use crate::noyau::{Action, Affichage, Moteur};

#[derive(Debug)]
pub struct AppCalc {
    moteur: Moteur,

    /// Dernier affichage renvoyé par le moteur (lu par vue.rs).
    pub affichage: Affichage,

    /// Panneau scientifique visible (replié sur petit écran).
    pub scientifique: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_moteur(Moteur::new())
    }
}

impl AppCalc {
    pub fn avec_moteur(moteur: Moteur) -> Self {
        let affichage = moteur.affichage();
        Self {
            moteur,
            affichage,
            scientifique: true,
        }
    }

    /// Seule porte d’entrée vers le noyau.
    pub fn envoyer(&mut self, action: Action) {
        self.affichage = self.moteur.appliquer(action);
    }

    /// Envoie une suite d’actions (clavier : plusieurs touches dans la même frame).
    pub fn envoyer_tout(&mut self, actions: impl IntoIterator<Item = Action>) {
        for a in actions {
            self.envoyer(a);
        }
    }
}
