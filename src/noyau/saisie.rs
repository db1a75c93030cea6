// src/noyau/saisie.rs
//
// Tampon de saisie : texte de l’afficheur pendant la frappe.
// Les drapeaux (remise à zéro, erreur) sont gérés par le contrôleur ;
// ici on ne fait que composer le texte.

use super::format::{nombre_chiffres, LARGEUR_CHIFFRES_MAX};

/// Ajoute un chiffre (0..=9). Au-delà de 15 chiffres, la frappe est ignorée.
pub fn ajouter_chiffre(texte: &mut String, d: u8) {
    debug_assert!(d <= 9);
    let c = char::from(b'0' + d);

    // "0" -> "5" (pas "05"), "-0" -> "-5"
    if texte == "0" || texte == "-0" {
        texte.pop();
        texte.push(c);
        return;
    }

    if nombre_chiffres(texte) >= LARGEUR_CHIFFRES_MAX {
        return;
    }
    texte.push(c);
}

/// Ajoute le point décimal (une seule fois par nombre).
pub fn ajouter_virgule(texte: &mut String) {
    if texte.contains('.') {
        return;
    }
    if texte.is_empty() || texte == "-" {
        texte.push('0');
    }
    texte.push('.');
}

/// Retire le dernier caractère ; "" ou "-" redeviennent "0".
pub fn retour_arriere(texte: &mut String) {
    texte.pop();
    if texte.is_empty() || texte == "-" {
        texte.clear();
        texte.push('0');
    }
}

/// ± : ajoute/retire le signe. Zéro reste "0".
pub fn basculer_signe(texte: &mut String) {
    if let Some(reste) = texte.strip_prefix('-') {
        *texte = reste.to_string();
        return;
    }
    let nul = texte.parse::<f64>().map(|x| x == 0.0).unwrap_or(true);
    if !nul {
        texte.insert(0, '-');
    }
}
