//! Tests scientifiques : fonctions unaires, opérateurs scientifiques,
//! modes DEG/RAD et 2nd, à travers le moteur complet.

use super::moteur::{Action, Moteur};
use super::tests_scenarios::{moteur, taper};
use super::{FonctionUnaire, Operateur};

fn unaire(m: &mut Moteur, f: FonctionUnaire) -> String {
    m.appliquer(Action::Unaire(f)).valeur
}

fn apres(touches: &str, f: FonctionUnaire) -> String {
    let mut m = moteur();
    taper(&mut m, touches);
    unaire(&mut m, f)
}

/* ------------------------ Opérateurs scientifiques ------------------------ */

#[test]
fn sci_racine_y() {
    let mut m = moteur();
    taper(&mut m, "27");
    m.appliquer(Action::Operateur(Operateur::Racine));
    taper(&mut m, "3 =");
    assert_eq!(m.valeur_affichee(), "3");
    assert_eq!(m.trace_expression(), "27 yroot 3 =");
}

#[test]
fn sci_puissance_et_exposant() {
    let mut m = moteur();
    taper(&mut m, "2 ^ 10 =");
    assert_eq!(m.valeur_affichee(), "1024");

    let mut m = moteur();
    taper(&mut m, "1.5");
    m.appliquer(Action::Operateur(Operateur::ExposantSci));
    taper(&mut m, "3 =");
    assert_eq!(m.valeur_affichee(), "1500");
}

#[test]
fn sci_puissance_trop_grande() {
    let mut m = moteur();
    taper(&mut m, "10 ^ 400 =");
    assert_eq!(m.valeur_affichee(), "Error");
}

/* ------------------------ Unaires : domaines ------------------------ */

#[test]
fn sci_racine_negative_en_erreur() {
    assert_eq!(apres("5 ~", FonctionUnaire::RacineCarree), "Error");
    assert_eq!(apres("8 ~", FonctionUnaire::RacineCubique), "-2");
    assert_eq!(apres("16", FonctionUnaire::RacineCarree), "4");
}

#[test]
fn sci_logarithmes() {
    assert_eq!(apres("1000", FonctionUnaire::Log10), "3");
    assert_eq!(apres("1", FonctionUnaire::Ln), "0");
    assert_eq!(apres("0", FonctionUnaire::Ln), "Error");
    assert_eq!(apres("2 ~", FonctionUnaire::Log10), "Error");
}

#[test]
fn sci_exponentielles() {
    assert_eq!(apres("1", FonctionUnaire::Exp), "2.71828182846");
    assert_eq!(apres("3", FonctionUnaire::Exp10), "1000");
    assert_eq!(apres("1000", FonctionUnaire::Exp), "Error");
}

#[test]
fn sci_puissances_et_inverse() {
    assert_eq!(apres("12", FonctionUnaire::Carre), "144");
    assert_eq!(apres("3 ~", FonctionUnaire::Cube), "-27");
    assert_eq!(apres("4", FonctionUnaire::Inverse), "0.25");
    assert_eq!(apres("0", FonctionUnaire::Inverse), "Error");
}

#[test]
fn sci_factorielle() {
    assert_eq!(apres("0", FonctionUnaire::Factorielle), "1");
    assert_eq!(apres("10", FonctionUnaire::Factorielle), "3628800");
    assert_eq!(apres("20", FonctionUnaire::Factorielle), "2.43290200818e+18");
    assert_ne!(apres("170", FonctionUnaire::Factorielle), "Error");
    assert_eq!(apres("171", FonctionUnaire::Factorielle), "Error");
    assert_eq!(apres("3 ~", FonctionUnaire::Factorielle), "Error");
    assert_eq!(apres("2.5", FonctionUnaire::Factorielle), "Error");
}

/* ------------------------ Trig + modes ------------------------ */

#[test]
fn sci_trig_degres_par_defaut() {
    assert_eq!(apres("30", FonctionUnaire::Sin), "0.5");
    assert_eq!(apres("60", FonctionUnaire::Cos), "0.5");
    assert_eq!(apres("45", FonctionUnaire::Tan), "1");
    assert_eq!(apres("180", FonctionUnaire::Sin), "0");
    assert_eq!(apres("90", FonctionUnaire::Tan), "Error");
}

#[test]
fn sci_trig_radians() {
    let mut m = moteur();
    m.appliquer(Action::BasculerAngle);
    assert_eq!(m.libelle_mode_angle(), "RAD");
    taper(&mut m, "1");
    assert_eq!(unaire(&mut m, FonctionUnaire::Sin), "0.841470984808");

    // le mode angle survit à C et aux évaluations
    taper(&mut m, "C 2 + 2 =");
    assert_eq!(m.libelle_mode_angle(), "RAD");
}

#[test]
fn sci_mode_second_un_seul_coup() {
    let mut m = moteur();
    m.appliquer(Action::BasculerSecond);
    assert!(m.mode_second_actif());
    taper(&mut m, "0.5");
    assert_eq!(unaire(&mut m, FonctionUnaire::Sin), "30");
    assert_eq!(m.trace_expression(), "asin(0.5)");
    assert!(!m.mode_second_actif());

    // Le coup suivant est de nouveau sin.
    taper(&mut m, "30");
    assert_eq!(unaire(&mut m, FonctionUnaire::Sin), "0.5");
    assert_eq!(m.trace_expression(), "sin(30)");
}

#[test]
fn sci_mode_second_consomme_meme_en_echec() {
    let mut m = moteur();
    m.appliquer(Action::BasculerSecond);
    taper(&mut m, "2");
    assert_eq!(unaire(&mut m, FonctionUnaire::Sin), "Error");
    assert_eq!(m.trace_expression(), "asin(2)");
    assert!(!m.mode_second_actif());
}

#[test]
fn sci_mode_second_hyperbolique() {
    let mut m = moteur();
    taper(&mut m, "1");
    m.appliquer(Action::BasculerSecond);
    assert_eq!(unaire(&mut m, FonctionUnaire::Sinh), "0.88137358702");
    assert_eq!(m.trace_expression(), "asinh(1)");

    // 2nd éteint : retour à sinh
    assert_eq!(unaire(&mut m, FonctionUnaire::Sinh), "1");
    assert_eq!(m.trace_expression(), "sinh(0.88137358702)");
}

#[test]
fn sci_mode_second_sans_effet_sur_non_trig() {
    let mut m = moteur();
    m.appliquer(Action::BasculerSecond);
    taper(&mut m, "9");
    assert_eq!(unaire(&mut m, FonctionUnaire::RacineCarree), "3");
    assert!(!m.mode_second_actif());
}

#[test]
fn sci_unaire_en_erreur_sans_effet() {
    let mut m = moteur();
    taper(&mut m, "1 / 0 =");
    m.appliquer(Action::BasculerSecond);
    assert_eq!(unaire(&mut m, FonctionUnaire::Cos), "Error");
    // rien n’a été consommé : l’action était ignorée
    assert!(m.mode_second_actif());
}

#[test]
fn sci_unaire_sur_operande_droit() {
    // 2 + sqrt(9) = 5
    let mut m = moteur();
    taper(&mut m, "2 + 9");
    unaire(&mut m, FonctionUnaire::RacineCarree);
    taper(&mut m, "=");
    assert_eq!(m.valeur_affichee(), "5");
}

#[test]
fn sci_petits_angles_non_arrondis_a_zero() {
    let mut m = moteur();
    m.appliquer(Action::BasculerAngle);
    taper(&mut m, "0.0000000000001");
    assert_eq!(unaire(&mut m, FonctionUnaire::Sin), "0.0000000000001");

    // π relu depuis l’afficheur : le résidu reste ramené à 0
    m.appliquer(Action::Constante(super::Constante::Pi));
    assert_eq!(unaire(&mut m, FonctionUnaire::Sin), "0");

    let mut m = moteur();
    taper(&mut m, "0.00000000005");
    assert_eq!(unaire(&mut m, FonctionUnaire::Tan), "8.72664625997e-13");
}
