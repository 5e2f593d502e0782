//! Noyau — taxonomie d’erreurs.
//!
//! Trois familles seulement, toutes récupérables par l’appelant :
//! - division par zéro (diviseur exactement nul)
//! - opérateur inconnu (symbole arrivé jusqu’à `apply_op`)
//! - entrée malformée (pile vide, nombre illisible, parenthèses, pile finale)

use thiserror::Error;

/// Erreur d’évaluation. Le message (`Display`) est celui affiché après `Error: `.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("Division by zero!")]
    DivisionParZero,

    #[error("Unknown operator '{0}'")]
    OperateurInconnu(char),

    #[error("Malformed expression: {0}")]
    EntreeMalformee(#[from] Malformation),
}

/// Détail d’une entrée malformée.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    /// Un opérateur réclame deux opérandes, la pile en a moins.
    #[error("missing operand")]
    PileVide,

    #[error("invalid number '{0}'")]
    NombreInvalide(String),

    #[error("unmatched ')'")]
    ParentheseFermanteOrpheline,

    #[error("unclosed '('")]
    ParentheseNonFermee,

    /// Nombre de valeurs restantes en fin d’évaluation (attendu : 1).
    #[error("expected exactly one value, found {0}")]
    PileFinale(usize),
}
