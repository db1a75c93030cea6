// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// Toutes les erreurs arithmétiques finissent sur la même sentinelle d’affichage
// ("Error"). Le genre n’est gardé que pour la journalisation et les tests.

use thiserror::Error;

/// Erreur de calcul (division, domaine, dépassement, parenthèses).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Division par zéro exact.
    #[error("division par zéro")]
    DivisionParZero,

    /// Argument hors du domaine réel de la fonction nommée.
    #[error("hors domaine : {0}")]
    Domaine(&'static str),

    /// Résultat trop grand pour un f64 (ou factorielle > 170).
    #[error("dépassement de capacité")]
    Depassement,

    /// `)` sans `(` correspondante : ignorée, jamais affichée.
    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,
}

pub type ResultatCalcul = Result<f64, ErreurCalcul>;

/// Vérifie qu’un résultat est affichable.
/// - NaN  => Domaine(fonction)
/// - ±inf => Depassement
pub fn verifier_fini(x: f64, fonction: &'static str) -> ResultatCalcul {
    if x.is_nan() {
        return Err(ErreurCalcul::Domaine(fonction));
    }
    if x.is_infinite() {
        return Err(ErreurCalcul::Depassement);
    }
    Ok(x)
}
