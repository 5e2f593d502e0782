// src/noyau/format.rs
//
// Affichage d’un f64 “comme un flux C par défaut” : %g, 6 chiffres significatifs.
//
// Règles (%g):
// - on arrondit à 6 chiffres significatifs, X = exposant décimal APRÈS arrondi
// - X < -4 ou X >= 6  => scientifique : 1.23457e+06, 1e-05
// - sinon              => fixe        : 0.333333, 6.28, 64
// - zéros de fin (et '.' final) retirés dans les deux cas
// - non finis : inf, -inf, nan

/// Chiffres significatifs affichés.
const PRECISION: usize = 6;

pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // La forme scientifique arrondie donne directement X.
    let sci = format!("{:.*e}", PRECISION - 1, v);
    let Some((mantisse, exp_txt)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exposant) = exp_txt.parse::<i32>() else {
        return sci;
    };

    if exposant < -4 || exposant >= PRECISION as i32 {
        let signe = if exposant < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            sans_zeros_de_fin(mantisse),
            signe,
            exposant.unsigned_abs()
        )
    } else {
        let decimales = (PRECISION as i32 - 1 - exposant) as usize;
        let fixe = format!("{v:.decimales$}");
        sans_zeros_de_fin(&fixe).to_string()
    }
}

fn sans_zeros_de_fin(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
