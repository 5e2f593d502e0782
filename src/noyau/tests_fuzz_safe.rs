//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions bien formées : seule erreur admise = division par zéro
//! - bruit arbitraire : jamais de panic, toujours une erreur typée ou un f64

use std::time::{Duration, Instant};

use super::{evaluate, evaluate_detaille, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // inclut 0 (utile pour tester la division par zéro)
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}", rng.pick(1000)),
        3 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        4 => format!(".{}", 1 + rng.pick(9)),
        _ => "2".to_string(),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(5) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        _ => "^",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    let op = gen_op(rng);
    if rng.pick(2) == 0 {
        format!("({a} {op} {b})")
    } else {
        format!("{a}{op}{b}")
    }
}

fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '^', '(', ')', ' ', 'x', '%', 'é',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);
        match evaluate(&expr) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert_eq!(
                    e,
                    ErreurCalcul::DivisionParZero,
                    "erreur non attendue: expr={expr:?}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let longueur = rng.pick(24) as usize;
        let expr = gen_bruit(&mut rng, longueur);

        // déterminisme : même entrée => même sortie (NaN mis à part)
        let r1 = evaluate(&expr);
        let r2 = evaluate(&expr);
        match (&r1, &r2) {
            (Ok(a), Ok(b)) if a.is_nan() => assert!(b.is_nan(), "expr={expr:?}"),
            _ => assert_eq!(r1, r2, "expr={expr:?}"),
        }
    }
}

#[test]
fn fuzz_safe_demarche_coherente() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        let expr = gen_expr(&mut rng, 4);
        if let Ok((v, d)) = evaluate_detaille(&expr) {
            // la dernière réduction produit le résultat
            if let Some(derniere) = d.etapes.last() {
                assert!(
                    derniere.resultat == v || (v.is_nan() && derniere.resultat.is_nan()),
                    "expr={expr:?}"
                );
            }
        }
    }
}

#[test]
fn fuzz_safe_profondeur_lineaire() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 2000 parenthèses imbriquées : piles explicites, pas de récursion
    let n = 2000;
    let expr = format!("{}1{}", "(".repeat(n), " + 1)".repeat(n));
    let v = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, (n + 1) as f64);
}
