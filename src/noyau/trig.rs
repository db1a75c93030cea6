// src/noyau/trig.rs
//
// Trig spéciale (angles “exactement reconnus”) en mode DEG
// --------------------------------------------------------
// - Entrée entière en degrés, réduite modulo 360
// - Table sur les multiples de 30° et 45°
// - tan(90°), tan(270°) : indéfini (=> erreur de domaine côté dispatch)
//
// Sans cette table, sin(180°) donnerait 1.22e-16 et tan(90°) 1.6e16.

use std::f64::consts::FRAC_1_SQRT_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrigOutcome {
    Valeur(f64),
    Indefini,
}

/// Au-delà, un f64 n’a plus de partie fractionnaire fiable : on laisse le calcul général.
const DEGRES_MAX: f64 = 1e15;

/// Reconnaît les angles spéciaux (en degrés) pour sin/cos/tan.
///
/// Retour:
/// - Some(Valeur(v)) si reconnu
/// - Some(Indefini) pour tan(90° + k·180°)
/// - None si non reconnu
pub fn trig_special_degres(x: f64, f: TrigFn) -> Option<TrigOutcome> {
    if x.fract() != 0.0 || x.abs() > DEGRES_MAX {
        return None;
    }
    let a = (x as i64).rem_euclid(360);

    let r3_2 = 3f64.sqrt() / 2.0;
    let r3 = 3f64.sqrt();
    let inv_r3 = 1.0 / r3;

    let v = match f {
        TrigFn::Sin => match a {
            0 | 180 => 0.0,
            30 | 150 => 0.5,
            210 | 330 => -0.5,
            45 | 135 => FRAC_1_SQRT_2,
            225 | 315 => -FRAC_1_SQRT_2,
            60 | 120 => r3_2,
            240 | 300 => -r3_2,
            90 => 1.0,
            270 => -1.0,
            _ => return None,
        },

        TrigFn::Cos => match a {
            0 => 1.0,
            180 => -1.0,
            90 | 270 => 0.0,
            60 | 300 => 0.5,
            120 | 240 => -0.5,
            45 | 315 => FRAC_1_SQRT_2,
            135 | 225 => -FRAC_1_SQRT_2,
            30 | 330 => r3_2,
            150 | 210 => -r3_2,
            _ => return None,
        },

        TrigFn::Tan => match a {
            0 | 180 => 0.0,
            45 | 225 => 1.0,
            135 | 315 => -1.0,
            30 | 210 => inv_r3,
            150 | 330 => -inv_r3,
            60 | 240 => r3,
            120 | 300 => -r3,
            90 | 270 => return Some(TrigOutcome::Indefini),
            _ => return None,
        },
    };

    Some(TrigOutcome::Valeur(v))
}
