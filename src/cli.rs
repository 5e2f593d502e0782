use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "calculatrice_flottante")]
#[command(about = "Calculatrice flottante : + - * / ^ et parenthèses")]
pub struct Cli {
    /// Ouvre la fenêtre graphique au lieu de la console
    #[arg(long, conflicts_with = "expr")]
    pub gui: bool,

    /// Évalue une expression puis quitte (option répétable)
    #[arg(short, long, value_name = "EXPR")]
    pub expr: Vec<String>,
}

/// Mode de lancement déduit des options.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Console,
    Fenetre,
    Lot(Vec<String>),
}

impl Cli {
    pub fn mode(self) -> Mode {
        if self.gui {
            Mode::Fenetre
        } else if !self.expr.is_empty() {
            Mode::Lot(self.expr)
        } else {
            Mode::Console
        }
    }
}
