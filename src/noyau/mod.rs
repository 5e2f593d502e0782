//! Noyau flottant
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie d’erreurs (division par zéro, opérateur inconnu, malformée)
//! - operateurs.rs : précédences + apply_op
//! - eval.rs       : shunting-yard en une passe, deux piles, démarche
//! - format.rs     : affichage %g (6 chiffres significatifs)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod operateurs;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{evaluate, evaluate_detaille};
pub use format::format_resultat;
