//! Calculatrice flottante
//!
//! - noyau      : évaluation pure d’expressions (+ - * / parenthèses, × ÷ π e)
//! - historique : calculs récents + archive (mémoire)
//! - app        : interface eframe (natif + web)

pub mod app;
pub mod historique;
pub mod noyau;

// API publique minimale
pub use noyau::{evaluate, EvaluationError};
