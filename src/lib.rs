//! Calculatrice scientifique: bibliothèque
//!
//! - `noyau` : moteur de calcul (actions -> affichage), sans interface
//! - `app`   : interface egui (natif + web) qui traduit boutons et clavier en actions

pub mod app;
pub mod noyau;
