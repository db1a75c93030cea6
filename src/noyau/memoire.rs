// src/noyau/memoire.rs
//
// Mémoire (MC / M+ / M- / MR) : indépendante de C, seule MC la remet à zéro.
// Une somme non finie est refusée : la mémoire garde sa dernière valeur.

use super::erreur::{verifier_fini, ErreurCalcul};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionMemoire {
    Effacer,
    Ajouter,
    Soustraire,
    Rappeler,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Memoire {
    valeur: f64,
}

impl Memoire {
    pub fn effacer(&mut self) {
        self.valeur = 0.0;
    }

    pub fn ajouter(&mut self, x: f64) -> Result<(), ErreurCalcul> {
        self.valeur = verifier_fini(self.valeur + x, "M+")?;
        Ok(())
    }

    pub fn soustraire(&mut self, x: f64) -> Result<(), ErreurCalcul> {
        self.valeur = verifier_fini(self.valeur - x, "M-")?;
        Ok(())
    }

    pub fn rappeler(&self) -> f64 {
        self.valeur
    }

    /// Indicateur "M" de l’afficheur.
    pub fn est_active(&self) -> bool {
        self.valeur != 0.0
    }
}
