//! Tests de propriétés : comportements observables du noyau.
//!
//! - exemples de référence (précédence, parenthèses, ^ à gauche, décimaux)
//! - erreurs typées (division par zéro, malformée)
//! - idempotence (aucun état caché entre appels)
//! - insensibilité aux espaces
//! - réentrance (appels concurrents)

use super::{evaluate, format_resultat, ErreurCalcul};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn prop_exemples_de_reference() {
    assert_eq!(eval_ok("3 + 4 * 2"), 11.0);
    assert_eq!(eval_ok("(3 + 4) * 2"), 14.0);
    assert_eq!(eval_ok("3.14 * 2"), 6.28);
}

#[test]
fn prop_puissance_gauche_pas_droite() {
    let v = eval_ok("2^3^2");
    assert_eq!(v, 64.0);
    assert_ne!(v, 512.0);
}

#[test]
fn prop_division_par_zero() {
    assert_eq!(evaluate("10 / 0"), Err(ErreurCalcul::DivisionParZero));
    assert_eq!(evaluate("10 / 0.0"), Err(ErreurCalcul::DivisionParZero));
}

#[test]
fn prop_operateurs_colles_malformes() {
    assert!(matches!(
        evaluate("2 + * 3"),
        Err(ErreurCalcul::EntreeMalformee(_))
    ));
}

/* ------------------------ Idempotence + espaces ------------------------ */

#[test]
fn prop_idempotence() {
    for expr in ["3 + 4 * 2", "2^3^2", "10 / 0", "2 + * 3", "1.5 ^ 0.5 / 3"] {
        assert_eq!(evaluate(expr), evaluate(expr), "expr={expr:?}");
    }
}

#[test]
fn prop_espaces_sans_effet() {
    assert_eq!(evaluate("1+2"), evaluate(" 1 + 2 "));
    assert_eq!(evaluate("(3+4)*2"), evaluate("\t( 3 +4 )\n* 2 "));
    assert_eq!(evaluate("2^3^2"), evaluate("2 ^ 3 ^ 2"));
}

#[test]
fn prop_infini_sans_erreur() {
    // débordement : résultat infini, pas d’erreur
    let v = eval_ok("10 ^ 400");
    assert!(v.is_infinite());
    assert_eq!(format_resultat(v), "inf");
}

/* ------------------------ Réentrance ------------------------ */

#[test]
fn prop_appels_concurrents() {
    let handles: Vec<_> = (0..8)
        .map(|k| {
            std::thread::spawn(move || {
                let expr = format!("({k} + 1) * 2 ^ 2");
                (k, evaluate(&expr))
            })
        })
        .collect();

    for h in handles {
        let (k, r) = h.join().expect("thread d’évaluation");
        assert_eq!(r, Ok(f64::from(k + 1) * 4.0));
    }
}
