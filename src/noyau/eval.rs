//! Noyau — évaluation (shunting-yard en une passe)
//!
//! Pas de jetons intermédiaires : on lit la chaîne de gauche à droite et on
//! réduit directement sur deux piles (valeurs, opérateurs).
//!
//! chiffres/'.' -> nombre empilé
//! '('          -> marqueur empilé
//! ')'          -> réduit jusqu’au '(' correspondant
//! autre        -> réduit tant que précédence(sommet) >= précédence(op), puis empile op
//! fin          -> réduit tout ce qui reste
//!
//! Toute anomalie de pile devient `EntreeMalformee` (jamais de panic).

use std::fmt;

use tracing::{debug, trace};

use super::erreur::{ErreurCalcul, Malformation};
use super::format::format_resultat;
use super::operateurs::{apply_op, precedence, PAR_OUVRANTE};

/// Une application binaire effectuée pendant l’évaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Etape {
    pub gauche: f64,
    pub op: char,
    pub droite: f64,
    pub resultat: f64,
}

impl fmt::Display for Etape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_resultat(self.gauche),
            self.op,
            format_resultat(self.droite),
            format_resultat(self.resultat)
        )
    }
}

/// Démarche : toutes les applications, dans l’ordre où elles ont eu lieu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Demarche {
    pub etapes: Vec<Etape>,
}

impl fmt::Display for Demarche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.etapes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

/// API publique : évalue une expression infixe en `f64`.
pub fn evaluate(expression: &str) -> Result<f64, ErreurCalcul> {
    evaluer(expression, None)
}

/// Comme `evaluate`, mais retourne aussi la démarche (liste des réductions).
pub fn evaluate_detaille(expression: &str) -> Result<(f64, Demarche), ErreurCalcul> {
    let mut demarche = Demarche::default();
    let v = evaluer(expression, Some(&mut demarche))?;
    Ok((v, demarche))
}

fn evaluer(expression: &str, demarche: Option<&mut Demarche>) -> Result<f64, ErreurCalcul> {
    let resultat = scanner(expression, demarche);
    match &resultat {
        Ok(v) => debug!(expression, resultat = *v, "évaluation réussie"),
        Err(e) => debug!(expression, erreur = %e, "évaluation refusée"),
    }
    resultat
}

/// Piles propres à UN appel (aucun état partagé entre évaluations).
struct Piles<'d> {
    valeurs: Vec<f64>,
    ops: Vec<char>,
    demarche: Option<&'d mut Demarche>,
}

impl Piles<'_> {
    fn pop_valeur(&mut self) -> Result<f64, ErreurCalcul> {
        self.valeurs
            .pop()
            .ok_or(ErreurCalcul::EntreeMalformee(Malformation::PileVide))
    }

    /// Dépile droite puis gauche, applique `op`, empile le résultat.
    fn reduire(&mut self, op: char) -> Result<(), ErreurCalcul> {
        let droite = self.pop_valeur()?;
        let gauche = self.pop_valeur()?;
        let resultat = apply_op(gauche, droite, op)?;

        trace!(gauche, op = %op, droite, resultat, "réduction");
        if let Some(d) = &mut self.demarche {
            d.etapes.push(Etape {
                gauche,
                op,
                droite,
                resultat,
            });
        }

        self.valeurs.push(resultat);
        Ok(())
    }
}

fn scanner(expression: &str, demarche: Option<&mut Demarche>) -> Result<f64, ErreurCalcul> {
    let chars: Vec<char> = expression.chars().collect();
    let mut piles = Piles {
        valeurs: Vec::new(),
        ops: Vec::new(),
        demarche,
    };
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : plus longue suite de chiffres et de '.'
        if c.is_ascii_digit() || c == '.' {
            let debut = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let litteral: String = chars[debut..i].iter().collect();
            match litteral.parse::<f64>() {
                Ok(v) => piles.valeurs.push(v),
                Err(_) => return Err(Malformation::NombreInvalide(litteral).into()),
            }
            // i est déjà sur le premier caractère après le nombre
            continue;
        }

        if c == PAR_OUVRANTE {
            piles.ops.push(c);
        } else if c == ')' {
            loop {
                match piles.ops.pop() {
                    Some(PAR_OUVRANTE) => break,
                    Some(op) => piles.reduire(op)?,
                    None => return Err(Malformation::ParentheseFermanteOrpheline.into()),
                }
            }
        } else {
            // Opérateur (ou symbole inconnu, précédence 0)
            // `>=` : associativité à gauche pour tous, ^ compris.
            while let Some(&sommet) = piles.ops.last() {
                if sommet == PAR_OUVRANTE || precedence(sommet) < precedence(c) {
                    break;
                }
                piles.ops.pop();
                piles.reduire(sommet)?;
            }
            piles.ops.push(c);
        }

        i += 1;
    }

    // vide la pile ops
    while let Some(op) = piles.ops.pop() {
        if op == PAR_OUVRANTE {
            return Err(Malformation::ParentheseNonFermee.into());
        }
        piles.reduire(op)?;
    }

    match piles.valeurs.as_slice() {
        [v] => Ok(*v),
        reste => Err(Malformation::PileFinale(reste.len()).into()),
    }
}
