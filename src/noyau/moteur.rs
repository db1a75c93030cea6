//! Noyau: contrôleur (machine à états de la calculatrice)
//!
//! Une action entre, l’état est modifié sur place, un `Affichage` sort.
//! Modèle à exécution immédiate : chaque opérateur est évalué dès que
//! ses deux opérandes sont connus (gauche -> droite, sans priorité).
//!
//! États observables : Saisie, OperateurEnAttente, VientDEvaluer, Erreur.
//! En erreur, seules les actions de saisie fraîche (chiffre, point,
//! constante, MR) et C ramènent à un état normal ; le reste est ignoré.

use std::fmt;

use super::binaire::{Operateur, OperationEnAttente};
use super::constantes::{Constante, SourceAleatoire, SourceSysteme};
use super::erreur::{verifier_fini, ErreurCalcul};
use super::format::{formater, lire, SENTINELLE_ERREUR};
use super::memoire::{ActionMemoire, Memoire};
use super::modes::{ModeAngle, Modes};
use super::parentheses::{Cadre, PileParentheses};
use super::saisie;
use super::unaire::{self, FonctionUnaire};

/// Action déjà classée par l’interface (bouton, clavier).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Chiffre(u8),
    Virgule,
    RetourArriere,
    Effacer,
    Signe,
    Pourcent,
    Operateur(Operateur),
    Egal,
    Unaire(FonctionUnaire),
    Constante(Constante),
    Memoire(ActionMemoire),
    BasculerAngle,
    BasculerSecond,
    OuvrirParenthese,
    FermerParenthese,
}

/// Vue-modèle lue par l’interface après chaque action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub valeur: String,
    pub trace: String,
    pub mode_angle: &'static str,
    pub second: bool,
    pub memoire: bool,
    pub parentheses: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statut {
    Saisie,
    OperateurEnAttente,
    VientDEvaluer,
    Erreur,
}

/// État complet du moteur (un seul enregistrement, possédé par `Moteur`).
#[derive(Clone, Debug)]
pub struct EtatMoteur {
    /// Texte de l’afficheur, ou "Error".
    pub valeur: String,
    pub en_attente: Option<OperationEnAttente>,
    /// Le prochain chiffre commence un nouveau nombre.
    pub reinitialiser_affichage: bool,
    /// Le prochain chiffre commence un nouveau calcul (trace effacée).
    pub vient_d_evaluer: bool,
    /// Aucun opérande saisi depuis le dernier opérateur / `(`.
    pub attente_operande: bool,
    pub trace: String,
    pub modes: Modes,
    pub memoire: Memoire,
    pub parentheses: PileParentheses,
}

impl Default for EtatMoteur {
    fn default() -> Self {
        Self {
            valeur: "0".to_string(),
            en_attente: None,
            reinitialiser_affichage: false,
            vient_d_evaluer: false,
            attente_operande: false,
            trace: String::new(),
            modes: Modes::default(),
            memoire: Memoire::default(),
            parentheses: PileParentheses::default(),
        }
    }
}

pub struct Moteur {
    etat: EtatMoteur,
    source: Box<dyn SourceAleatoire>,
}

impl fmt::Debug for Moteur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Moteur")
            .field("etat", &self.etat)
            .field("source", &"<SourceAleatoire>")
            .finish()
    }
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new()
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::avec_source(Box::new(SourceSysteme::new()))
    }

    /// Moteur avec une source aléatoire choisie (tests : `SourceFixe`).
    pub fn avec_source(source: Box<dyn SourceAleatoire>) -> Self {
        Self {
            etat: EtatMoteur::default(),
            source,
        }
    }

    /// Remise à neuf complète (mémoire et modes compris).
    pub fn reinitialiser(&mut self) {
        self.etat = EtatMoteur::default();
    }

    pub fn etat(&self) -> &EtatMoteur {
        &self.etat
    }

    /* ------------------------ Requêtes ------------------------ */

    pub fn valeur_affichee(&self) -> &str {
        &self.etat.valeur
    }

    pub fn trace_expression(&self) -> &str {
        &self.etat.trace
    }

    pub fn libelle_mode_angle(&self) -> &'static str {
        self.etat.modes.angle.libelle()
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.etat.modes.angle
    }

    pub fn mode_second_actif(&self) -> bool {
        self.etat.modes.second_actif()
    }

    pub fn memoire(&self) -> f64 {
        self.etat.memoire.rappeler()
    }

    pub fn statut(&self) -> Statut {
        if self.en_erreur() {
            Statut::Erreur
        } else if self.etat.vient_d_evaluer {
            Statut::VientDEvaluer
        } else if self.etat.en_attente.is_some() {
            Statut::OperateurEnAttente
        } else {
            Statut::Saisie
        }
    }

    pub fn affichage(&self) -> Affichage {
        Affichage {
            valeur: self.etat.valeur.clone(),
            trace: self.etat.trace.clone(),
            mode_angle: self.libelle_mode_angle(),
            second: self.mode_second_actif(),
            memoire: self.etat.memoire.est_active(),
            parentheses: self.etat.parentheses.profondeur(),
        }
    }

    /* ------------------------ Aiguillage ------------------------ */

    /// Point d’entrée unique : applique l’action et renvoie l’affichage.
    pub fn appliquer(&mut self, action: Action) -> Affichage {
        tracing::debug!(?action, "action");
        match action {
            Action::Chiffre(d) => self.chiffre(d),
            Action::Virgule => self.virgule(),
            Action::RetourArriere => self.retour_arriere(),
            Action::Effacer => self.effacer(),
            Action::Signe => self.signe(),
            Action::Pourcent => self.pourcent(),
            Action::Operateur(op) => self.operateur(op),
            Action::Egal => self.egal(),
            Action::Unaire(f) => self.unaire(f),
            Action::Constante(c) => self.constante(c),
            Action::Memoire(m) => self.memoire_action(m),
            Action::BasculerAngle => self.basculer_angle(),
            Action::BasculerSecond => self.basculer_second(),
            Action::OuvrirParenthese => self.ouvrir_parenthese(),
            Action::FermerParenthese => self.fermer_parenthese(),
        }
        self.affichage()
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn chiffre(&mut self, d: u8) {
        if d > 9 {
            tracing::debug!(d, "chiffre invalide ignoré");
            return;
        }
        self.preparer_saisie();
        saisie::ajouter_chiffre(&mut self.etat.valeur, d);
    }

    pub fn virgule(&mut self) {
        self.preparer_saisie();
        saisie::ajouter_virgule(&mut self.etat.valeur);
    }

    /// N’édite que la saisie en cours : un résultat affiché n’est pas modifiable.
    pub fn retour_arriere(&mut self) {
        if self.en_erreur() || self.etat.reinitialiser_affichage || self.etat.vient_d_evaluer {
            tracing::debug!("retour arrière ignoré");
            return;
        }
        saisie::retour_arriere(&mut self.etat.valeur);
    }

    /// C : efface le calcul ; mémoire et modes restent.
    pub fn effacer(&mut self) {
        let e = &mut self.etat;
        e.valeur = "0".to_string();
        e.en_attente = None;
        e.reinitialiser_affichage = false;
        e.vient_d_evaluer = false;
        e.attente_operande = false;
        e.trace.clear();
        e.parentheses.vider();
    }

    /// ± juste après un opérateur ou `(` : commence l’opérande droit négatif ("-0").
    pub fn signe(&mut self) {
        if self.en_erreur() {
            return;
        }
        if self.etat.attente_operande {
            let e = &mut self.etat;
            e.valeur = "-0".to_string();
            e.reinitialiser_affichage = false;
            e.attente_operande = false;
            return;
        }
        saisie::basculer_signe(&mut self.etat.valeur);
        self.etat.attente_operande = false;
    }

    /// %  : seul => x/100 ; avec opération en attente => gauche × x/100.
    pub fn pourcent(&mut self) {
        let Some(x) = self.valeur_numerique() else {
            return;
        };
        let r = match self.etat.en_attente {
            Some(op) => op.gauche * (x / 100.0),
            None => x / 100.0,
        };
        match verifier_fini(r, "%") {
            Ok(r) => self.poser_operande(r),
            Err(e) => self.entrer_erreur(e),
        }
    }

    /* ------------------------ Opérateurs binaires ------------------------ */

    pub fn operateur(&mut self, op: Operateur) {
        let Some(x) = self.valeur_numerique() else {
            return;
        };

        let en_attente = self.etat.en_attente;
        let gauche = match en_attente {
            // chaînage : 2 + 3 ×  => 5 ×
            Some(attente) if !self.etat.attente_operande => match attente.evaluer(x) {
                Ok(r) => {
                    self.etat.valeur = formater(r);
                    r
                }
                Err(e) => {
                    self.entrer_erreur(e);
                    return;
                }
            },
            // opérateur sur opérateur : on remplace
            Some(attente) => attente.gauche,
            None => x,
        };

        let prefixe = self.prefixe_portee();
        let e = &mut self.etat;
        e.en_attente = Some(OperationEnAttente { gauche, operateur: op });
        e.trace = format!("{prefixe}{} {}", formater(gauche), op.symbole());
        e.reinitialiser_affichage = true;
        e.attente_operande = true;
        e.vient_d_evaluer = false;
    }

    /// = : ferme les groupes encore ouverts, puis évalue. Sans opération : rien.
    pub fn egal(&mut self) {
        if self.en_erreur() {
            return;
        }
        while !self.etat.parentheses.est_vide() {
            if !self.fermer_portee() {
                return;
            }
        }

        let Some(attente) = self.etat.en_attente else {
            return;
        };
        let Some(droite) = self.valeur_numerique() else {
            return;
        };

        self.etat.trace = format!(
            "{} {} {} =",
            formater(attente.gauche),
            attente.operateur.symbole(),
            formater(droite)
        );
        match attente.evaluer(droite) {
            Ok(r) => {
                let e = &mut self.etat;
                e.valeur = formater(r);
                e.en_attente = None;
                e.vient_d_evaluer = true;
                e.reinitialiser_affichage = true;
                e.attente_operande = false;
            }
            Err(err) => self.entrer_erreur(err),
        }
    }

    /* ------------------------ Fonctions unaires ------------------------ */

    /// Consomme le mode 2nd, qu’elle réussisse ou non.
    pub fn unaire(&mut self, f: FonctionUnaire) {
        let Some(x) = self.valeur_numerique() else {
            return;
        };
        let second = self.etat.modes.consommer_second();
        let choisie = f.selectionner(second);

        self.etat.trace = format!("{}({})", choisie.nom(), formater(x));
        match unaire::appliquer(choisie, x, self.etat.modes.angle) {
            Ok(y) => {
                tracing::trace!(fonction = choisie.nom(), x, y, "fonction unaire");
                self.poser_operande(y);
            }
            Err(e) => self.entrer_erreur(e),
        }
    }

    /* ------------------------ Constantes / mémoire ------------------------ */

    pub fn constante(&mut self, c: Constante) {
        let v = c.valeur(self.source.as_mut());
        self.inserer_litteral(v);
    }

    pub fn memoire_action(&mut self, action: ActionMemoire) {
        match action {
            ActionMemoire::Effacer => self.etat.memoire.effacer(),
            ActionMemoire::Ajouter | ActionMemoire::Soustraire => {
                let Some(x) = self.valeur_numerique() else {
                    return;
                };
                let maj = if action == ActionMemoire::Ajouter {
                    self.etat.memoire.ajouter(x)
                } else {
                    self.etat.memoire.soustraire(x)
                };
                if let Err(e) = maj {
                    self.entrer_erreur(e);
                    return;
                }
                self.etat.reinitialiser_affichage = true;
            }
            ActionMemoire::Rappeler => {
                let m = self.etat.memoire.rappeler();
                match verifier_fini(m, "MR") {
                    Ok(m) => self.inserer_litteral(m),
                    Err(e) => self.entrer_erreur(e),
                }
            }
        }
    }

    /* ------------------------ Modes ------------------------ */

    pub fn basculer_angle(&mut self) {
        self.etat.modes.basculer_angle();
    }

    pub fn basculer_second(&mut self) {
        self.etat.modes.basculer_second();
    }

    /* ------------------------ Parenthèses ------------------------ */

    pub fn ouvrir_parenthese(&mut self) {
        if self.en_erreur() {
            return;
        }
        if self.etat.vient_d_evaluer {
            self.nouveau_calcul();
        }

        let e = &mut self.etat;
        let cadre = Cadre {
            en_attente: e.en_attente.take(),
            trace: std::mem::take(&mut e.trace),
        };
        e.trace = if cadre.trace.is_empty() {
            "(".to_string()
        } else {
            format!("{} (", cadre.trace)
        };
        e.parentheses.empiler(cadre);
        e.reinitialiser_affichage = true;
        e.attente_operande = true;
    }

    /// `)` sans `(` : ignorée.
    pub fn fermer_parenthese(&mut self) {
        if self.en_erreur() {
            return;
        }
        if self.etat.parentheses.est_vide() {
            tracing::debug!(erreur = %ErreurCalcul::ParentheseOrpheline, "ignorée");
            return;
        }
        self.fermer_portee();
    }

    /* ------------------------ Interne ------------------------ */

    fn en_erreur(&self) -> bool {
        self.etat.valeur == SENTINELLE_ERREUR
    }

    /// None en erreur : toutes les actions qui en dépendent deviennent sans effet.
    fn valeur_numerique(&self) -> Option<f64> {
        lire(&self.etat.valeur)
    }

    fn entrer_erreur(&mut self, err: ErreurCalcul) {
        tracing::debug!(erreur = %err, trace = %self.etat.trace, "passage en erreur");
        let e = &mut self.etat;
        e.valeur = SENTINELLE_ERREUR.to_string();
        e.en_attente = None;
        e.reinitialiser_affichage = true;
        e.vient_d_evaluer = false;
        e.attente_operande = false;
        e.parentheses.vider();
    }

    /// Après `=` : oublie l’ancien calcul (opération, trace, groupes).
    fn nouveau_calcul(&mut self) {
        let e = &mut self.etat;
        e.en_attente = None;
        e.trace.clear();
        e.parentheses.vider();
        e.vient_d_evaluer = false;
        e.reinitialiser_affichage = true;
    }

    /// Avant un chiffre / point : sortie d’erreur, nouveau calcul, nouveau nombre.
    fn preparer_saisie(&mut self) {
        if self.en_erreur() {
            self.effacer();
        }
        if self.etat.vient_d_evaluer {
            self.nouveau_calcul();
        }
        if self.etat.reinitialiser_affichage {
            self.etat.valeur = "0".to_string();
            self.etat.reinitialiser_affichage = false;
        }
        self.etat.attente_operande = false;
    }

    /// π, e, rand, MR : comme un nombre fraîchement tapé.
    fn inserer_litteral(&mut self, v: f64) {
        if self.en_erreur() {
            self.effacer();
        }
        if self.etat.vient_d_evaluer {
            self.nouveau_calcul();
        }
        self.poser_operande(v);
    }

    /// Résultat affiché qui sert d’opérande ; le prochain chiffre repart de zéro.
    fn poser_operande(&mut self, v: f64) {
        let e = &mut self.etat;
        e.valeur = formater(v);
        e.reinitialiser_affichage = true;
        e.attente_operande = false;
    }

    /// Évalue l’opération intérieure (si un opérande a été saisi), puis restaure le cadre.
    /// false si l’évaluation a échoué (état d’erreur) ou si la pile est vide.
    fn fermer_portee(&mut self) -> bool {
        if let Some(attente) = self.etat.en_attente {
            if !self.etat.attente_operande {
                let Some(x) = self.valeur_numerique() else {
                    return false;
                };
                match attente.evaluer(x) {
                    Ok(r) => self.etat.valeur = formater(r),
                    Err(e) => {
                        self.entrer_erreur(e);
                        return false;
                    }
                }
            }
        }

        let cadre = match self.etat.parentheses.depiler() {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(erreur = %e, "ignorée");
                return false;
            }
        };

        let e = &mut self.etat;
        e.en_attente = cadre.en_attente;
        e.trace = cadre.trace;
        e.reinitialiser_affichage = true;
        e.attente_operande = false;
        true
    }

    /// "3 × ( " quand on est à l’intérieur d’un groupe, sinon "".
    fn prefixe_portee(&self) -> String {
        match self.etat.parentheses.sommet() {
            None => String::new(),
            Some(c) if c.trace.is_empty() => "( ".to_string(),
            Some(c) => format!("{} ( ", c.trace),
        }
    }
}
