// src/noyau/normalise.rs
//
// Normalisation (avant lecture)
// -----------------------------
// Ordre IMPORTANT :
//   1) espaces retirés (bords + intérieur)
//   2) glyphes × ÷ -> * /
//   3) constantes π puis e -> texte décimal
//
// Remplacement TEXTUEL pur : tout 'e' de l’entrée devient 2.718281828459045,
// sans notion de mot ("1e3" -> "12.7182818284590453", qui échouera plus loin).

use super::erreur::{EvalResult, EvaluationError};

/// Glyphe multiplication (U+00D7).
pub const GLYPHE_MUL: char = '×';
/// Glyphe division (U+00F7).
pub const GLYPHE_DIV: char = '÷';

/// Texte décimal de π (précision double, aller-retour exact).
pub const PI_TEXTE: &str = "3.141592653589793";
/// Texte décimal de e.
pub const E_TEXTE: &str = "2.718281828459045";

/// Nettoie une entrée brute. Fonction pure.
pub fn normalize(brut: &str) -> EvalResult<String> {
    let mut s = String::with_capacity(brut.len());

    for c in brut.chars().filter(|c| !c.is_whitespace()) {
        match c {
            GLYPHE_MUL => s.push('*'),
            GLYPHE_DIV => s.push('/'),
            _ => s.push(c),
        }
    }

    let s = s.replace('π', PI_TEXTE).replace('e', E_TEXTE);

    if s.is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }
    Ok(s)
}
