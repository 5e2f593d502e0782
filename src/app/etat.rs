//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche, historique)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné (les plus anciennes lignes tombent).

use std::collections::VecDeque;

/// Garde-fou : nombre maximal de lignes d’historique conservées.
pub const HISTORIQUE_MAX: usize = 50;

/// Une évaluation passée : l’expression et ce qui a été affiché.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigneHistorique {
    pub expression: String,
    pub affichage: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat formaté (%g)
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)

    // --- démarche (une ligne par réduction) ---
    pub demarche: Vec<String>,

    // --- historique (plus récent en tête) ---
    pub historique: VecDeque<LigneHistorique>,

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
            demarche: Vec::new(),
            historique: VecDeque::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
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
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute,
    /// mais la démarche n’a plus de sens : on l’efface.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur formatée + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Vec<String>) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Ajoute une ligne en tête d’historique (borné à HISTORIQUE_MAX).
    pub fn pousser_historique(&mut self, expression: impl Into<String>, affichage: impl Into<String>) {
        self.historique.push_front(LigneHistorique {
            expression: expression.into(),
            affichage: affichage.into(),
        });
        self.historique.truncate(HISTORIQUE_MAX);
    }
}
