// src/noyau/format.rs
//
// Affichage d’un f64 “propre”
// ---------------------------
// - Arrondi EXACT à 12 chiffres significatifs : le f64 est converti en rationnel
//   (BigRational::from_float est sans perte), puis arrondi en entier décimal.
//   => 0.1 + 0.2 s’affiche "0.3", jamais "0.30000000000000004".
// - Partie entière > 9 chiffres, ou forme fixe trop large (> 15 chiffres) : notation exponentielle.
// - NaN / ±inf : sentinelle "Error".

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

/// Sentinelle unique d’erreur (affichage).
pub const SENTINELLE_ERREUR: &str = "Error";

/// Précision d’affichage.
pub const CHIFFRES_SIGNIFICATIFS: u32 = 12;

/// Au-delà, la partie entière passe en notation exponentielle.
pub const CHIFFRES_ENTIERS_MAX: i32 = 9;

/// Largeur de l’afficheur (chiffres, hors signe et point).
pub const LARGEUR_CHIFFRES_MAX: usize = 15;

/* ------------------------ Helpers rationnels ------------------------ */

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// r * 10^k (k signé)
fn mise_a_echelle(r: &BigRational, k: i32) -> BigRational {
    let f = BigRational::from_integer(pow10(k.unsigned_abs()));
    if k >= 0 {
        r * f
    } else {
        r / f
    }
}

/// Arrondi à l’entier le plus proche (demi vers le haut), r >= 0.
fn arrondi_entier(r: &BigRational) -> BigInt {
    let deux = BigInt::from(2);
    (r.numer() * &deux + r.denom()) / (r.denom() * deux)
}

/// Arrondit |r| > 0 à `n` chiffres significatifs.
///
/// Retour: (m, e) avec 10^(n-1) <= m < 10^n et |r| ≈ m·10^(e-n+1)
/// (e = exposant décimal du premier chiffre).
fn arrondir_significatif(r: &BigRational, approx: f64, n: u32) -> (BigInt, i32) {
    let bas = pow10(n - 1);
    let haut = pow10(n);

    // Estimation f64, corrigée ensuite (log10 peut se tromper d’une unité aux bords).
    let mut e = approx.abs().log10().floor() as i32;

    loop {
        let m = arrondi_entier(&mise_a_echelle(r, n as i32 - 1 - e));
        if m >= haut {
            e += 1;
        } else if m < bas {
            e -= 1;
        } else {
            return (m, e);
        }
    }
}

/* ------------------------ API ------------------------ */

/// Formate une valeur pour l’afficheur principal (et la trace).
pub fn formater(valeur: f64) -> String {
    if !valeur.is_finite() {
        return SENTINELLE_ERREUR.to_string();
    }
    if valeur == 0.0 {
        // couvre aussi -0.0
        return "0".to_string();
    }

    let Some(r) = BigRational::from_float(valeur) else {
        return SENTINELLE_ERREUR.to_string();
    };
    let negatif = r.is_negative();
    let (m, e) = arrondir_significatif(&r.abs(), valeur, CHIFFRES_SIGNIFICATIFS);

    // Chiffres utiles (zéros finaux retirés)
    let brut = m.to_string();
    let chiffres = brut.trim_end_matches('0');
    let chiffres = if chiffres.is_empty() { "0" } else { chiffres };

    let corps = if doit_passer_en_exponentiel(chiffres.len(), e) {
        forme_exponentielle(chiffres, e)
    } else {
        forme_fixe(chiffres, e)
    };

    if negatif {
        format!("-{corps}")
    } else {
        corps
    }
}

/// Convertit le texte de l’afficheur en nombre (sentinelle / texte invalide => None).
pub fn lire(texte: &str) -> Option<f64> {
    if texte == SENTINELLE_ERREUR {
        return None;
    }
    texte.parse::<f64>().ok().filter(|x| x.is_finite())
}

fn doit_passer_en_exponentiel(nb_chiffres: usize, e: i32) -> bool {
    if e >= CHIFFRES_ENTIERS_MAX {
        return true;
    }
    // 0.000…0ddd : zéros de tête + chiffres utiles
    e < 0 && (e.unsigned_abs() as usize + nb_chiffres) > LARGEUR_CHIFFRES_MAX
}

fn forme_fixe(chiffres: &str, e: i32) -> String {
    if e >= 0 {
        let entiers = e as usize + 1;
        if chiffres.len() <= entiers {
            format!("{chiffres}{}", "0".repeat(entiers - chiffres.len()))
        } else {
            format!("{}.{}", &chiffres[..entiers], &chiffres[entiers..])
        }
    } else {
        let zeros = e.unsigned_abs() as usize - 1;
        format!("0.{}{chiffres}", "0".repeat(zeros))
    }
}

/// 1.5e+10, 2e-20 (mantisse sans zéros finaux)
fn forme_exponentielle(chiffres: &str, e: i32) -> String {
    let (tete, reste) = chiffres.split_at(1);
    let signe = if e >= 0 { '+' } else { '-' };
    let exp = e.unsigned_abs();
    if reste.is_empty() {
        format!("{tete}e{signe}{exp}")
    } else {
        format!("{tete}.{reste}e{signe}{exp}")
    }
}

/// Compte les chiffres d’un texte d’afficheur (signe, point et exposant exclus).
pub fn nombre_chiffres(texte: &str) -> usize {
    texte.chars().filter(char::is_ascii_digit).count()
}
