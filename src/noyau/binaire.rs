// src/noyau/binaire.rs
//
// Opérateurs binaires (exécution immédiate, gauche -> droite, sans priorité)
// -------------------------------------------------------------------------
// + - × ÷ ; xʸ ; ʸ√x ; EE (a × 10^b)

use super::erreur::{verifier_fini, ErreurCalcul, ResultatCalcul};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Racine,
    ExposantSci,
}

impl Operateur {
    /// Symbole affiché dans la trace.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
            Operateur::Puissance => "^",
            Operateur::Racine => "yroot",
            Operateur::ExposantSci => "E",
        }
    }
}

/// Opération en attente : opérande gauche + opérateur (toujours ensemble).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperationEnAttente {
    pub gauche: f64,
    pub operateur: Operateur,
}

impl OperationEnAttente {
    pub fn evaluer(&self, droite: f64) -> ResultatCalcul {
        calculer(self.gauche, droite, self.operateur)
    }
}

/// a op b. Toute sortie non finie devient une erreur.
pub fn calculer(a: f64, b: f64, op: Operateur) -> ResultatCalcul {
    let nom = op.symbole();
    let r = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Operateur::Puissance => a.powf(b),
        Operateur::Racine => racine_reelle(a, b)?,
        Operateur::ExposantSci => a * 10f64.powf(b),
    };

    tracing::trace!(a, b, op = nom, r, "opération binaire");
    verifier_fini(r, nom)
}

/// a^(1/b), avec racine réelle négative pour un degré entier impair : ʸ√(-27) avec y=3 => -3.
fn racine_reelle(a: f64, b: f64) -> ResultatCalcul {
    if b == 0.0 {
        return Err(ErreurCalcul::Domaine("yroot"));
    }
    if a >= 0.0 {
        return Ok(a.powf(1.0 / b));
    }

    let degre_impair = b.fract() == 0.0 && b.abs() < 2f64.powi(53) && (b % 2.0).abs() == 1.0;
    if degre_impair {
        Ok(-(-a).powf(1.0 / b))
    } else {
        Err(ErreurCalcul::Domaine("yroot"))
    }
}
