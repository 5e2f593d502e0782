//! Mode console : boucle lecture → évaluation → affichage.
//!
//! Contrat :
//! - une ligne = une expression, `exit` termine, fin d’entrée aussi
//! - `Result: <valeur>` ou `Error: <message>`, puis on continue
//! - générique sur BufRead/Write (stdin/stdout en vrai, tampons en test)

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::noyau::{evaluate, format_resultat};

/// Ligne sentinelle qui termine la boucle.
const SENTINELLE: &str = "exit";

const BANNIERE: &str = "Advanced Calculator\nSupports +, -, *, /, ^ and parentheses ()\n";
const INVITE: &str = "\nEnter expression (or 'exit'): ";

/// Évalue une ligne et produit le texte affiché (sans retour à la ligne).
pub fn reponse(ligne: &str) -> String {
    match evaluate(ligne) {
        Ok(v) => format!("Result: {}", format_resultat(v)),
        Err(e) => format!("Error: {e}"),
    }
}

/// Boucle interactive complète (bannière + invites).
pub fn boucle<R: BufRead, W: Write>(mut entree: R, mut sortie: W) -> io::Result<()> {
    sortie.write_all(BANNIERE.as_bytes())?;

    let mut ligne = String::new();
    let mut evaluees = 0usize;
    loop {
        sortie.write_all(INVITE.as_bytes())?;
        sortie.flush()?;

        ligne.clear();
        if entree.read_line(&mut ligne)? == 0 {
            debug!("fin de l’entrée standard");
            // on termine la ligne d’invite laissée ouverte
            writeln!(sortie)?;
            break;
        }

        let expression = ligne.trim_end_matches(['\n', '\r']);
        if expression == SENTINELLE {
            break;
        }

        writeln!(sortie, "{}", reponse(expression))?;
        evaluees += 1;
    }

    sortie.flush()?;
    info!(evaluees, "session console terminée");
    Ok(())
}

/// Mode non interactif (`--expr`) : une réponse par expression.
///
/// Retourne `true` si toutes les expressions ont été évaluées sans erreur.
pub fn evaluer_lot<W: Write>(expressions: &[String], mut sortie: W) -> io::Result<bool> {
    let mut tout_ok = true;
    for expr in expressions {
        let texte = reponse(expr);
        tout_ok &= texte.starts_with("Result: ");
        writeln!(sortie, "{texte}")?;
    }
    sortie.flush()?;
    Ok(tout_ok)
}
