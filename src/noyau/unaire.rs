// src/noyau/unaire.rs
//
// Fonctions unaires (un seul opérande)
// ------------------------------------
// - trig (DEG/RAD), trig inverse, hyperboliques (+ inverses)
// - ln, log, exp, 10^x, x², x³, √, ∛, 1/x, n!
//
// Le mode 2nd choisit l’inverse AVANT l’appel : `selectionner(second)`.
// Le mode 2nd est consommé par le contrôleur (moteur.rs), pas ici.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::erreur::{verifier_fini, ErreurCalcul, ResultatCalcul};
use super::modes::ModeAngle;
use super::trig::{trig_special_degres, TrigFn, TrigOutcome};

/// Plus grand n tel que n! tienne dans un f64.
pub const FACTORIELLE_MAX: u32 = 170;

/// Résidus de π ramenés à zéro en mode RAD (relatif à |x|), et garde de tan.
const RESIDU_TRIG: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FonctionUnaire {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Ln,
    Log10,
    Exp,
    Exp10,
    Carre,
    Cube,
    RacineCarree,
    RacineCubique,
    Inverse,
    Factorielle,
}

impl FonctionUnaire {
    /// Nom affiché dans la trace : "sin(30)", "1/(4)", "fact(5)".
    pub fn nom(self) -> &'static str {
        use FonctionUnaire::*;
        match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Asin => "asin",
            Acos => "acos",
            Atan => "atan",
            Sinh => "sinh",
            Cosh => "cosh",
            Tanh => "tanh",
            Asinh => "asinh",
            Acosh => "acosh",
            Atanh => "atanh",
            Ln => "ln",
            Log10 => "log",
            Exp => "exp",
            Exp10 => "10^",
            Carre => "sqr",
            Cube => "cube",
            RacineCarree => "sqrt",
            RacineCubique => "cbrt",
            Inverse => "1/",
            Factorielle => "fact",
        }
    }

    /// Fonction réciproque (trig / hyperbolique seulement).
    pub fn reciproque(self) -> Option<Self> {
        use FonctionUnaire::*;
        Some(match self {
            Sin => Asin,
            Cos => Acos,
            Tan => Atan,
            Asin => Sin,
            Acos => Cos,
            Atan => Tan,
            Sinh => Asinh,
            Cosh => Acosh,
            Tanh => Atanh,
            Asinh => Sinh,
            Acosh => Cosh,
            Atanh => Tanh,
            _ => return None,
        })
    }

    /// Fonction réellement appliquée selon le mode 2nd.
    pub fn selectionner(self, second: bool) -> Self {
        if second {
            self.reciproque().unwrap_or(self)
        } else {
            self
        }
    }
}

/// Applique `f` à `x`. Toute sortie non finie devient une erreur.
pub fn appliquer(f: FonctionUnaire, x: f64, angle: ModeAngle) -> ResultatCalcul {
    use FonctionUnaire::*;

    let nom = f.nom();
    let y = match f {
        Sin => trig(TrigFn::Sin, x, angle)?,
        Cos => trig(TrigFn::Cos, x, angle)?,
        Tan => trig(TrigFn::Tan, x, angle)?,

        Asin | Acos => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(ErreurCalcul::Domaine(nom));
            }
            let r = if f == Asin { x.asin() } else { x.acos() };
            angle.depuis_radians(r)
        }
        Atan => angle.depuis_radians(x.atan()),

        Sinh => x.sinh(),
        Cosh => x.cosh(),
        Tanh => x.tanh(),
        Asinh => x.asinh(),
        Acosh => {
            if x < 1.0 {
                return Err(ErreurCalcul::Domaine(nom));
            }
            x.acosh()
        }
        Atanh => {
            if x <= -1.0 || x >= 1.0 {
                return Err(ErreurCalcul::Domaine(nom));
            }
            x.atanh()
        }

        Ln | Log10 => {
            if x <= 0.0 {
                return Err(ErreurCalcul::Domaine(nom));
            }
            if f == Ln {
                x.ln()
            } else {
                x.log10()
            }
        }
        Exp => x.exp(),
        Exp10 => 10f64.powf(x),

        Carre => x * x,
        Cube => x * x * x,
        RacineCarree => {
            if x < 0.0 {
                return Err(ErreurCalcul::Domaine(nom));
            }
            x.sqrt()
        }
        // défini sur tout R : ∛(-8) = -2
        RacineCubique => x.cbrt(),

        Inverse => {
            if x == 0.0 {
                return Err(ErreurCalcul::Domaine(nom));
            }
            1.0 / x
        }

        Factorielle => factorielle(x)?,
    };

    verifier_fini(y, nom)
}

fn trig(f: TrigFn, x: f64, angle: ModeAngle) -> ResultatCalcul {
    if angle == ModeAngle::Deg {
        match trig_special_degres(x, f) {
            Some(TrigOutcome::Valeur(v)) => return Ok(v),
            Some(TrigOutcome::Indefini) => return Err(ErreurCalcul::Domaine("tan")),
            None => {}
        }
    }

    let r = angle.vers_radians(x);
    let y = match f {
        TrigFn::Sin => r.sin(),
        TrigFn::Cos => r.cos(),
        TrigFn::Tan => {
            if r.cos().abs() < RESIDU_TRIG {
                return Err(ErreurCalcul::Domaine("tan"));
            }
            r.tan()
        }
    };

    Ok(if est_residu(y, r, angle) { 0.0 } else { y })
}

/// Résidu d’un multiple de π en mode RAD : sin(π) = 1.22e-16, pas une vraie valeur.
/// Près de 0 (|r| < π/2) le résultat est toujours gardé : sin(1e-13) = 1e-13.
fn est_residu(y: f64, r: f64, angle: ModeAngle) -> bool {
    angle == ModeAngle::Rad
        && r.abs() >= std::f64::consts::FRAC_PI_2
        && y.abs() < RESIDU_TRIG * r.abs()
}

/// n! exact (BigUint) puis converti : 0..=170, entiers seulement.
fn factorielle(x: f64) -> ResultatCalcul {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(ErreurCalcul::Domaine("fact"));
    }
    if x > FACTORIELLE_MAX as f64 {
        return Err(ErreurCalcul::Depassement);
    }

    let n = x as u32;
    let produit = (2..=n).fold(BigUint::one(), |acc, k| acc * k);
    produit.to_f64().ok_or(ErreurCalcul::Depassement)
}
