// src/noyau/pile.rs
//
// Évaluation à deux piles (une seule passe, sans AST)
// ---------------------------------------------------
// - nombres : pile d’opérandes f64
// - ops     : pile d’opérateurs {+ - * / (}
//
// Règles:
// - nombre        : empilé
// - '('           : empilée
// - ')'           : applique jusqu’à '(' (consommée). Pile vide avant '(' => on continue (tolérance).
// - opérateur bin : applique tant que le sommet n’est pas '(' et lie au moins aussi fort, puis empile
// - fin           : applique tout ce qui reste (LIFO)
// - final         : exactement UNE valeur, sinon expression mal formée
//
// Itératif : la profondeur des parenthèses ne consomme que la pile `ops` (Vec),
// jamais la pile d’appels.

use super::erreur::{EvalResult, EvaluationError};
use super::jetons::{next_token, Op, Tok};

/// `top` doit-il être appliqué avant d’empiler `entrant` ?
fn domine(top: Op, entrant: Op) -> bool {
    match (top.priorite(), entrant.priorite()) {
        (Some(p_top), Some(p_entrant)) => p_top >= p_entrant,
        _ => false,
    }
}

/// Applique `op` à (a, b) = (avant-dernier, dernier) empilés.
pub fn appliquer(op: Op, a: f64, b: f64) -> EvalResult<f64> {
    match op {
        Op::Plus => Ok(a + b),
        Op::Minus => Ok(a - b),
        Op::Star => Ok(a * b),
        Op::Slash => {
            // égalité exacte : 0.0 et -0.0 refusés
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            Ok(a / b)
        }
        Op::LPar => Err(EvaluationError::UnknownOperator(op.symbole())),
    }
}

/// Dépile deux opérandes, applique, rempile.
/// Les opérandes sont retirés AVANT d’examiner l’opérateur.
fn reduire(op: Op, nombres: &mut Vec<f64>) -> EvalResult<()> {
    let b = nombres.pop().ok_or(EvaluationError::MalformedExpression)?;
    let a = nombres.pop().ok_or(EvaluationError::MalformedExpression)?;
    nombres.push(appliquer(op, a, b)?);
    Ok(())
}

/// Évalue une expression NORMALISÉE.
pub fn evaluer(expr: &str) -> EvalResult<f64> {
    let chars: Vec<char> = expr.chars().collect();

    let mut nombres: Vec<f64> = Vec::new();
    let mut ops: Vec<Op> = Vec::new();
    let mut pos = 0;

    while let Some((tok, suivant)) = next_token(&chars, pos)? {
        pos = suivant;

        match tok {
            Tok::Num(v) => nombres.push(v),

            Tok::Op(Op::LPar) => ops.push(Op::LPar),

            Tok::RPar => {
                while let Some(top) = ops.pop() {
                    if top == Op::LPar {
                        break;
                    }
                    reduire(top, &mut nombres)?;
                }
            }

            Tok::Op(entrant) => {
                while let Some(top) = ops.pop() {
                    if !domine(top, entrant) {
                        ops.push(top);
                        break;
                    }
                    reduire(top, &mut nombres)?;
                }
                ops.push(entrant);
            }
        }
    }

    while let Some(op) = ops.pop() {
        reduire(op, &mut nombres)?;
    }

    match nombres.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvaluationError::MalformedExpression),
    }
}
