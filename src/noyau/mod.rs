//! Noyau flottant
//!
//! Organisation interne :
//! - erreur.rs    : EvaluationError (types d’échec)
//! - normalise.rs : espaces, glyphes × ÷, constantes π e
//! - jetons.rs    : lecture pure (texte, position) -> (jeton, position)
//! - pile.rs      : évaluation à deux piles (f64)
//! - format.rs    : affichage du résultat
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod pile;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{EvalResult, EvaluationError};
pub use eval::{evaluate, evaluate_detaille, Evaluation};
