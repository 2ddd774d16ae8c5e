// src/noyau/jetons.rs
//
// Lecture jeton par jeton
// -----------------------
// `next_token` est une fonction PURE : (texte, position) -> (jeton, position suivante).
// Pas de compteur partagé : l’appelant repart de la position rendue.
//
// Jetons reconnus (entrée déjà normalisée) :
// - nombres : suite maximale de chiffres ASCII et de '.'
// - moins unaire collé au nombre : "-5", "(-2.5", "3*-4"
// - opérateurs + - * /
// - parenthèses ( )

use std::fmt;

use super::erreur::{EvalResult, EvaluationError};

/// Ce qui peut séjourner sur la pile d’opérateurs.
/// ')' n’y entre jamais : elle déclenche le dépilement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    LPar,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::LPar => '(',
        }
    }

    /// Priorité (plus grand = lie plus fort). '(' est une barrière, pas un opérateur :
    /// elle n’a pas de priorité.
    pub fn priorite(self) -> Option<u8> {
        match self {
            Op::Plus | Op::Minus => Some(1),
            Op::Star | Op::Slash => Some(2),
            Op::LPar => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::RPar => f.write_str(")"),
        }
    }
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Fin (exclue) de la suite de chiffres/points qui commence à `debut`.
fn fin_nombre(chars: &[char], debut: usize) -> usize {
    let mut i = debut;
    while i < chars.len() && est_chiffre(chars[i]) {
        i += 1;
    }
    i
}

/// Lecture permissive : on laisse `f64::from_str` juger ("1.2.3", "-", "." échouent).
fn lire_nombre(chars: &[char], debut: usize, fin: usize) -> EvalResult<Tok> {
    let texte: String = chars[debut..fin].iter().collect();
    texte
        .parse::<f64>()
        .map(Tok::Num)
        .map_err(|_| EvaluationError::NumberFormat(texte))
}

/// '-' est un signe (et non une soustraction) en tête, après '(' ou après un opérateur.
fn moins_unaire(chars: &[char], pos: usize) -> bool {
    match pos.checked_sub(1).map(|p| chars[p]) {
        None => true,
        Some(prec) => prec == '(' || est_operateur(prec),
    }
}

/// Lit le jeton qui commence à `pos`.
///
/// Retourne `Ok(None)` en fin de texte, sinon le jeton et la position qui le suit.
pub fn next_token(chars: &[char], pos: usize) -> EvalResult<Option<(Tok, usize)>> {
    let Some(&c) = chars.get(pos) else {
        return Ok(None);
    };

    let (tok, suivant) = match c {
        _ if est_chiffre(c) => {
            let fin = fin_nombre(chars, pos);
            (lire_nombre(chars, pos, fin)?, fin)
        }
        '-' if moins_unaire(chars, pos) => {
            // le signe fait partie du littéral : "-" + chiffres (éventuellement aucun)
            let fin = fin_nombre(chars, pos + 1);
            (lire_nombre(chars, pos, fin)?, fin)
        }
        '(' => (Tok::Op(Op::LPar), pos + 1),
        ')' => (Tok::RPar, pos + 1),
        '+' => (Tok::Op(Op::Plus), pos + 1),
        '-' => (Tok::Op(Op::Minus), pos + 1),
        '*' => (Tok::Op(Op::Star), pos + 1),
        '/' => (Tok::Op(Op::Slash), pos + 1),
        _ => {
            return Err(EvaluationError::InvalidCharacter {
                caractere: c,
                position: pos,
            });
        }
    };

    Ok(Some((tok, suivant)))
}

/// Découpe complète (utile pour la démarche et les tests).
pub fn tokenize(s: &str) -> EvalResult<Vec<Tok>> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut pos = 0;

    while let Some((tok, suivant)) = next_token(&chars, pos)? {
        out.push(tok);
        pos = suivant;
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
