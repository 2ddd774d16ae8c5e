// src/main.rs
//
// Calculatrice flottante — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------
// But:
// - NATIF, sans expression : eframe::run_native + NativeOptions
// - NATIF, avec expressions : mode lot (une ligne par expression, code 1 si échec)
// - WEB  (wasm32)           : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use calculatrice_flottante::app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::io::{self, Write};
    use std::process::ExitCode;

    use clap::{Parser, ValueEnum};
    use eframe::egui;
    use log::{error, info, LevelFilter};

    use super::{AppCalc, TITRE_APP};

    /// Calculatrice : + - * / ( ), × ÷ π e.
    ///
    /// Sans expression : ouvre l’interface graphique.
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct Args {
        /// Niveau de log (sinon RUST_LOG, sinon warn).
        #[arg(long, value_enum)]
        pub log_level: Option<LogLevel>,

        /// Expressions à évaluer (mode lot).
        #[arg(allow_hyphen_values = true)]
        pub expressions: Vec<String>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
    pub enum LogLevel {
        Off,
        Error,
        Warn,
        Info,
        Debug,
        Trace,
    }

    impl From<LogLevel> for LevelFilter {
        fn from(l: LogLevel) -> Self {
            match l {
                LogLevel::Off => LevelFilter::Off,
                LogLevel::Error => LevelFilter::Error,
                LogLevel::Warn => LevelFilter::Warn,
                LogLevel::Info => LevelFilter::Info,
                LogLevel::Debug => LevelFilter::Debug,
                LogLevel::Trace => LevelFilter::Trace,
            }
        }
    }

    pub fn init_logger(niveau: Option<LogLevel>) {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
        if let Some(n) = niveau {
            builder.filter_level(n.into());
        }
        // déjà initialisé (tests) : on ignore
        builder.try_init().ok();
    }

    /// Évalue chaque expression ; résultat dans `sortie`, erreur dans `erreurs`.
    /// Rend le nombre d’échecs.
    pub fn evaluer_lot<S: Write, E: Write>(
        expressions: &[String],
        sortie: &mut S,
        erreurs: &mut E,
    ) -> io::Result<usize> {
        let mut echecs = 0usize;

        for expr in expressions {
            match calculatrice_flottante::evaluate(expr) {
                Ok(r) => writeln!(sortie, "{expr} = {r}")?,
                Err(e) => {
                    writeln!(erreurs, "{expr} : erreur : {e}")?;
                    echecs += 1;
                }
            }
        }

        info!("{} expression(s), {echecs} échec(s)", expressions.len());
        Ok(echecs)
    }

    /// Code de sortie du mode lot : 0 sans échec, 1 sinon (écriture impossible comprise).
    pub fn code_lot(r: &io::Result<usize>) -> u8 {
        match r {
            Ok(0) => 0,
            Ok(_) => 1,
            Err(e) => {
                error!("écriture impossible : {e}");
                1
            }
        }
    }

    /// Mode lot sur stdout/stderr.
    pub fn mode_lot(expressions: &[String]) -> ExitCode {
        let stdout = io::stdout();
        let stderr = io::stderr();

        let r = evaluer_lot(expressions, &mut stdout.lock(), &mut stderr.lock());
        ExitCode::from(code_lot(&r))
    }

    pub fn lancer_gui() -> ExitCode {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([480.0, 720.0])
                .with_min_inner_size([400.0, 560.0]),
            ..Default::default()
        };

        let r = eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        );

        match r {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("interface graphique : {e}");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    let args = natif::Args::parse();
    natif::init_logger(args.log_level);

    if args.expressions.is_empty() {
        natif::lancer_gui()
    } else {
        natif::mode_lot(&args.expressions)
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
