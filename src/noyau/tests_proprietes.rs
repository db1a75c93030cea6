//! Tests de propriétés (proptest) : invariants de l’afficheur et du contrôleur
//! sur des entrées tirées au hasard.

use proptest::prelude::*;

use super::format::{formater, lire, nombre_chiffres, LARGEUR_CHIFFRES_MAX, SENTINELLE_ERREUR};
use super::memoire::ActionMemoire;
use super::moteur::{Action, Moteur};
use super::tests_scenarios::{moteur, taper};

/// Frappe d’un entier signé : chiffres puis ± si négatif.
fn taper_entier(m: &mut Moteur, n: i64) {
    taper(m, &n.unsigned_abs().to_string());
    if n < 0 {
        taper(m, "~");
    }
}

fn touches_arithmetiques() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(b"0123456789.+-*/=<~%".to_vec()), 0..40)
        .prop_map(|v| v.into_iter().map(char::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_formater_borne_et_relisible(x in any::<f64>()) {
        prop_assume!(x.is_normal() || x == 0.0);
        let s = formater(x);
        prop_assert!(nombre_chiffres(&s) <= LARGEUR_CHIFFRES_MAX, "{} trop large", s);

        let relu = lire(&s);
        prop_assert!(relu.is_some(), "{} illisible", s);
        if let Some(y) = relu {
            let ecart = if x == 0.0 { y.abs() } else { ((y - x) / x).abs() };
            prop_assert!(ecart <= 1e-11, "{} -> {} (écart {})", x, s, ecart);
        }
    }

    #[test]
    fn prop_division_entiere(a in -99_999i64..=99_999, b in -999i64..=999) {
        prop_assume!(b != 0);
        let mut m = moteur();
        taper_entier(&mut m, a);
        taper(&mut m, "/");
        taper_entier(&mut m, b);
        taper(&mut m, "=");
        prop_assert_eq!(m.valeur_affichee(), formater(a as f64 / b as f64));
    }

    #[test]
    fn prop_division_par_zero_toujours_en_erreur(a in -99_999i64..=99_999) {
        let mut m = moteur();
        taper_entier(&mut m, a);
        taper(&mut m, "/ 0 =");
        prop_assert_eq!(m.valeur_affichee(), SENTINELLE_ERREUR);
        prop_assert!(m.etat().en_attente.is_none());
    }

    #[test]
    fn prop_chiffres_plafonnes(chiffres in proptest::collection::vec(0u8..=9, 1..40)) {
        let mut m = moteur();
        for d in chiffres {
            m.appliquer(Action::Chiffre(d));
            prop_assert!(nombre_chiffres(m.valeur_affichee()) <= LARGEUR_CHIFFRES_MAX);
        }
    }

    #[test]
    fn prop_c_garde_memoire_et_modes(mem in 1i64..=9_999, touches in touches_arithmetiques()) {
        let mut m = moteur();
        taper_entier(&mut m, mem);
        m.appliquer(Action::Memoire(ActionMemoire::Ajouter));
        m.appliquer(Action::BasculerAngle);
        taper(&mut m, &touches);
        taper(&mut m, "C");

        prop_assert_eq!(m.memoire(), mem as f64);
        prop_assert_eq!(m.libelle_mode_angle(), "RAD");
        prop_assert_eq!(m.valeur_affichee(), "0");
        prop_assert_eq!(m.trace_expression(), "");
        prop_assert_eq!(m.etat().parentheses.profondeur(), 0);
    }

    #[test]
    fn prop_afficheur_toujours_lisible(touches in touches_arithmetiques()) {
        let mut m = moteur();
        taper(&mut m, &touches);
        let v = m.valeur_affichee();
        prop_assert!(v == SENTINELLE_ERREUR || lire(v).is_some(), "afficheur {:?}", v);
    }
}
