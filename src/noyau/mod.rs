//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - format.rs      : affichage d’un f64 (12 chiffres significatifs, sentinelle "Error")
//! - saisie.rs      : tampon de frappe (chiffres, point, retour arrière, signe)
//! - binaire.rs     : + - × ÷ xʸ ʸ√x EE, opération en attente
//! - unaire.rs      : trig / hyperboliques / log / puissances / racines / 1/x / n!
//! - trig.rs        : angles spéciaux en degrés
//! - parentheses.rs : pile de cadres
//! - memoire.rs     : MC / M+ / M- / MR
//! - modes.rs       : DEG/RAD + 2nd
//! - constantes.rs  : π, e, rand (source aléatoire injectable)
//! - erreur.rs      : erreurs de calcul
//! - moteur.rs      : contrôleur (machine à états)

pub mod binaire;
pub mod constantes;
pub mod erreur;
pub mod format;
pub mod memoire;
pub mod modes;
pub mod moteur;
pub mod parentheses;
pub mod saisie;
pub mod trig;
pub mod unaire;


#[cfg(test)]
mod tests_scientifiques;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use binaire::Operateur;
pub use constantes::{Constante, SourceAleatoire, SourceFixe, SourceSysteme};
pub use erreur::ErreurCalcul;
pub use format::formater;
pub use memoire::ActionMemoire;
pub use modes::ModeAngle;
pub use moteur::{Action, Affichage, Moteur, Statut};
pub use unaire::FonctionUnaire;
