// src/noyau/operateurs.rs
//
// Table de précédence + application binaire.
//
// Règles:
// - + -  => 1
// - * /  => 2
// - ^    => 3
// - tout autre symbole => 0 (il sera empilé puis refusé par apply_op)
//
// NOTE:
// - Pas d’associativité à droite : la boucle de dépilement utilise `>=` pour
//   tous les opérateurs, donc 2^3^2 = (2^3)^2 = 64.

use super::erreur::ErreurCalcul;

/// Marqueur de parenthèse ouvrante sur la pile des opérateurs.
pub const PAR_OUVRANTE: char = '(';

pub fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        '^' => 3,
        _ => 0,
    }
}

/// Applique `op` à (a, b) : `a op b`.
///
/// Division : refus si `b == 0.0` (comparaison exacte, -0.0 inclus).
/// Puissance : `f64::powf` (exposants fractionnaires/négatifs compris).
pub fn apply_op(a: f64, b: f64, op: char) -> Result<f64, ErreurCalcul> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            Ok(a / b)
        }
        '^' => Ok(a.powf(b)),
        autre => Err(ErreurCalcul::OperateurInconnu(autre)),
    }
}
