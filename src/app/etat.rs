//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche,
//! historique) et offrir des opérations simples (C/CLR/AC/DEL, =, archive).
//!
//! Contrats :
//! - Aucun parsing ici : l’évaluation passe par `crate::noyau`.
//! - Actions déterministes, sans effet de bord caché.
//! - Une erreur ne détruit pas le dernier résultat affiché.

use log::{debug, warn};

use crate::historique::{Historique, HistoriqueError};
use crate::noyau::{self, Evaluation};

/// Longueur maximale de l’entrée (anti-abus : la lecture est linéaire, mais on borne).
pub const ENTREE_MAX: usize = 500;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub valeur: String,
}

impl From<&Evaluation> for Demarche {
    fn from(e: &Evaluation) -> Self {
        Self {
            normalisee: e.normalisee.clone(),
            jetons: e.jetons.clone(),
            valeur: format!("{:?}", e.valeur),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat réussi
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- historique / archive (mémoire) ---
    pub historique: Historique,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: Historique::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro (entrée + résultats). L’historique reste.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (espaces finaux compris).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        self.focus_entree = true;
    }

    /// Ajoute du texte à l’entrée (pavé), dans la limite ENTREE_MAX.
    pub fn inserer(&mut self, texte: &str) {
        if self.entree.chars().count() + texte.chars().count() > ENTREE_MAX {
            self.set_erreur(format!("entrée limitée à {ENTREE_MAX} caractères"));
            return;
        }
        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe la démarche (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau ; en cas de succès, l’ajoute à l’historique.
    pub fn evaluer(&mut self) {
        let expression = self.entree.trim().to_string();

        if expression.chars().count() > ENTREE_MAX {
            self.set_erreur(format!("entrée limitée à {ENTREE_MAX} caractères"));
            return;
        }

        match noyau::evaluate_detaille(&expression) {
            Ok(ev) => {
                debug!("{expression:?} -> {}", ev.affichage);
                self.erreur.clear();
                self.demarche = Demarche::from(&ev);
                self.historique
                    .enregistrer_historique(&expression, &ev.affichage);
                self.resultat = ev.affichage;
            }
            Err(e) => {
                warn!("évaluation refusée {expression:?} : {e}");
                self.set_erreur(format!("Expression invalide : {e}"));
            }
        }

        self.focus_entree = true;
    }

    /// Recopie l’expression d’un calcul (historique ou archive) dans l’entrée.
    pub fn reprendre(&mut self, id: u64) {
        if let Some(c) = self.historique.get(id) {
            self.entree = c.expression.clone();
            self.focus_entree = true;
        }
    }

    /// Archive un calcul de l’historique (copie : l’entrée d’historique reste).
    pub fn archiver(&mut self, id: u64) {
        let Some(c) = self.historique.get(id) else {
            self.set_erreur(HistoriqueError::Introuvable(id).to_string());
            return;
        };
        let (expression, resultat) = (c.expression.clone(), c.resultat.clone());
        self.historique.enregistrer_archive(&expression, &resultat);
    }

    pub fn supprimer_archive(&mut self, id: u64) {
        if let Err(e) = self.historique.supprimer_archive(id) {
            warn!("{e}");
            self.set_erreur(e.to_string());
        }
    }

    pub fn effacer_historique(&mut self) {
        self.historique.effacer_historique();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succes_enregistre_dans_l_historique() {
        let mut app = AppCalc::default();
        app.inserer("2+3×5");
        app.evaluer();

        assert_eq!(app.resultat, "17");
        assert!(app.erreur.is_empty());
        assert_eq!(app.demarche.normalisee, "2+3*5");
        assert_eq!(app.demarche.jetons, "2 + 3 * 5");

        let h = app.historique.historique();
        assert_eq!(h.len(), 1);
        assert_eq!(h[0].expression, "2+3×5");
        assert_eq!(h[0].resultat, "17");
    }

    #[test]
    fn erreur_garde_le_dernier_resultat() {
        let mut app = AppCalc::default();
        app.entree = "10/4".into();
        app.evaluer();
        assert_eq!(app.resultat, "2.5");

        app.entree = "3/0".into();
        app.evaluer();
        assert_eq!(app.resultat, "2.5");
        assert!(app.erreur.contains("division par zéro"));
        assert_eq!(app.demarche, Demarche::default());
        // l’échec n’est pas historisé
        assert_eq!(app.historique.historique().len(), 1);
    }

    #[test]
    fn archiver_reprendre_supprimer() {
        let mut app = AppCalc::default();
        app.entree = "(2+3)*2".into();
        app.evaluer();
        let id = app.historique.historique()[0].id;

        app.archiver(id);
        let arch = app.historique.archive()[0].id;
        assert_ne!(arch, id);

        app.entree.clear();
        app.reprendre(arch);
        assert_eq!(app.entree, "(2+3)*2");

        app.supprimer_archive(id);
        assert!(app.erreur.contains("archive"));

        app.supprimer_archive(arch);
        assert!(app.historique.archive().is_empty());
    }

    #[test]
    fn boutons_c_clr_ac_del() {
        let mut app = AppCalc::default();
        app.inserer("12+");
        app.backspace_entree();
        assert_eq!(app.entree, "12");

        app.evaluer();
        app.clear_entree();
        assert!(app.entree.is_empty());
        assert_eq!(app.resultat, "12");

        app.clear_resultats();
        assert!(app.resultat.is_empty());

        app.inserer("1");
        app.reset_total();
        assert!(app.entree.is_empty());
        // l’historique survit à AC
        assert_eq!(app.historique.historique().len(), 1);
    }

    #[test]
    fn entree_bornee() {
        let mut app = AppCalc::default();
        app.inserer(&"1".repeat(ENTREE_MAX));
        app.inserer("1");
        assert_eq!(app.entree.len(), ENTREE_MAX);
        assert!(!app.erreur.is_empty());
    }
}
