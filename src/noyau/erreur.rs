// src/noyau/erreur.rs

use thiserror::Error;

/// Résultat du noyau.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Échecs possibles d’une évaluation.
///
/// Chaque variante porte le détail utile au diagnostic (caractère, position,
/// littéral, opérateur). Le noyau ne fait AUCUN affichage : c’est l’appelant
/// (UI, CLI) qui décide du message final.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Entrée vide après normalisation.
    #[error("expression vide")]
    EmptyExpression,

    /// Caractère hors du jeu de jetons (position = index en caractères,
    /// dans l’expression normalisée).
    #[error("caractère invalide '{caractere}' (position {position})")]
    InvalidCharacter { caractere: char, position: usize },

    /// Littéral numérique illisible ("1.2.3", "-" seul, ".").
    #[error("nombre invalide: \"{0}\"")]
    NumberFormat(String),

    /// Diviseur exactement égal à zéro (0.0 ou -0.0).
    #[error("division par zéro")]
    DivisionByZero,

    /// Pile d’opérandes incohérente (opérande manquant, ou ≠ 1 valeur à la fin).
    #[error("expression mal formée")]
    MalformedExpression,

    /// Opérateur non applicable (ex: '(' restée ouverte en fin de lecture).
    #[error("opérateur inconnu: '{0}'")]
    UnknownOperator(char),
}
