// src/noyau/constantes.rs
//
// Constantes insérables : π, e, aléatoire dans [0,1).
// Le tirage aléatoire passe par un seul point (`SourceAleatoire`)
// pour pouvoir être remplacé par une source fixe en test.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
    Aleatoire,
}

impl Constante {
    pub fn nom(self) -> &'static str {
        match self {
            Constante::Pi => "π",
            Constante::E => "e",
            Constante::Aleatoire => "rand",
        }
    }

    pub fn valeur(self, source: &mut dyn SourceAleatoire) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
            Constante::Aleatoire => source.tirer(),
        }
    }
}

/// Tirage uniforme dans [0,1).
pub trait SourceAleatoire {
    fn tirer(&mut self) -> f64;
}

/// Source par défaut : StdRng initialisé par l’OS.
#[derive(Debug)]
pub struct SourceSysteme {
    rng: StdRng,
}

impl SourceSysteme {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Suite reproductible (tests, démos).
    pub fn avec_graine(graine: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(graine) }
    }
}

impl Default for SourceSysteme {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceAleatoire for SourceSysteme {
    fn tirer(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Source fixe : renvoie toujours la même valeur.
#[derive(Clone, Copy, Debug)]
pub struct SourceFixe(pub f64);

impl SourceAleatoire for SourceFixe {
    fn tirer(&mut self) -> f64 {
        self.0
    }
}
