// src/noyau/parentheses.rs
//
// Pile de parenthèses : chaque `(` sauve le contexte extérieur,
// chaque `)` le restaure. Profondeur non bornée, LIFO.

use super::binaire::OperationEnAttente;
use super::erreur::ErreurCalcul;

/// Contexte extérieur sauvé à l’ouverture.
#[derive(Clone, Debug, PartialEq)]
pub struct Cadre {
    pub en_attente: Option<OperationEnAttente>,
    pub trace: String,
}

#[derive(Clone, Debug, Default)]
pub struct PileParentheses {
    cadres: Vec<Cadre>,
}

impl PileParentheses {
    pub fn empiler(&mut self, cadre: Cadre) {
        self.cadres.push(cadre);
    }

    /// `)` orpheline => Err(ParentheseOrpheline) (le contrôleur l’ignore).
    pub fn depiler(&mut self) -> Result<Cadre, ErreurCalcul> {
        self.cadres.pop().ok_or(ErreurCalcul::ParentheseOrpheline)
    }

    /// Cadre le plus intérieur.
    pub fn sommet(&self) -> Option<&Cadre> {
        self.cadres.last()
    }

    pub fn profondeur(&self) -> usize {
        self.cadres.len()
    }

    pub fn est_vide(&self) -> bool {
        self.cadres.is_empty()
    }

    pub fn vider(&mut self) {
        self.cadres.clear();
    }
}
