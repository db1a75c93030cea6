// src/noyau/modes.rs
//
// Modes : unité d’angle (DEG/RAD) + mode “2nd” (inverse, un seul coup).
// Aucun des deux n’est touché par C.

/// Unité d’angle des fonctions trigonométriques.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Deg,
    Rad,
}

impl ModeAngle {
    pub fn basculer(self) -> Self {
        match self {
            ModeAngle::Deg => ModeAngle::Rad,
            ModeAngle::Rad => ModeAngle::Deg,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Deg => "DEG",
            ModeAngle::Rad => "RAD",
        }
    }

    /// Angle saisi -> radians (entrée de sin/cos/tan).
    pub fn vers_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Deg => x.to_radians(),
            ModeAngle::Rad => x,
        }
    }

    /// Radians -> angle affiché (sortie de asin/acos/atan).
    pub fn depuis_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Deg => x.to_degrees(),
            ModeAngle::Rad => x,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modes {
    pub angle: ModeAngle,
    second: bool,
}

impl Modes {
    pub fn basculer_angle(&mut self) {
        self.angle = self.angle.basculer();
    }

    pub fn basculer_second(&mut self) {
        self.second = !self.second;
    }

    pub fn second_actif(&self) -> bool {
        self.second
    }

    /// Lit puis éteint le mode 2nd (appelé une fois par fonction unaire).
    pub fn consommer_second(&mut self) -> bool {
        std::mem::take(&mut self.second)
    }
}
