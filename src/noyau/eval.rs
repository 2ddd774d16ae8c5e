//! Noyau — évaluation (pipeline réel)
//!
//! texte brut -> normalise -> deux piles (f64) -> format
//!
//! Pur : aucune I/O, aucun état partagé, aucun log. Appelable depuis
//! plusieurs fils sans verrou.

use super::erreur::EvalResult;
use super::format::format_result;
use super::jetons::{format_tokens, tokenize};
use super::normalise::normalize;
use super::pile::evaluer;

/// Trace d’une évaluation réussie (panneau “Démarche” de l’UI).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Texte après normalisation (espaces, glyphes, constantes).
    pub normalisee: String,
    /// Jetons lus, séparés par des espaces.
    pub jetons: String,
    /// Valeur brute.
    pub valeur: f64,
    /// Résultat à afficher / stocker.
    pub affichage: String,
}

/// API publique : évalue une expression et retourne son affichage.
pub fn evaluate(expression: &str) -> EvalResult<String> {
    let s = normalize(expression)?;
    let v = evaluer(&s)?;
    Ok(format_result(v))
}

/// Même pipeline que `evaluate`, avec la démarche.
pub fn evaluate_detaille(expression: &str) -> EvalResult<Evaluation> {
    let normalisee = normalize(expression)?;
    let valeur = evaluer(&normalisee)?;

    // l’évaluation a déjà lu tout le texte : le découpage ne peut plus échouer
    let jetons = format_tokens(&tokenize(&normalisee)?);

    Ok(Evaluation {
        normalisee,
        jetons,
        valeur,
        affichage: format_result(valeur),
    })
}
