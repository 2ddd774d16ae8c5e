// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Historique / archive sous le résultat
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_historique(ui);
                self.ui_archive(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)×5, -5+3, 2×π")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / DEL / C / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro (historique conservé)", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
        });

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE.iter().copied() {
                    for &touche in ligne {
                        self.bouton_insert(ui, touche);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);

        let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
        if eq.clicked() {
            self.evaluer();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisée", "demarche_norm", &self.demarche.normalisee);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Valeur", "demarche_valeur", &self.demarche.valeur);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        // actions différées : on ne modifie pas l’historique pendant qu’on l’itère
        let mut action: Option<(u64, ActionLigne)> = None;

        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if ui.button("Effacer l’historique").clicked() {
                    action = Some((0, ActionLigne::EffacerTout));
                }

                for c in self.historique.historique() {
                    ui.horizontal(|ui| {
                        ui.monospace(format!("{} = {}", c.expression, c.resultat));
                        if ui.small_button("↺").on_hover_text("Reprendre").clicked() {
                            action = Some((c.id, ActionLigne::Reprendre));
                        }
                        if ui.small_button("Archiver").clicked() {
                            action = Some((c.id, ActionLigne::Archiver));
                        }
                    });
                }
            });

        self.appliquer_action_ligne(action);
    }

    fn ui_archive(&mut self, ui: &mut egui::Ui) {
        let mut action: Option<(u64, ActionLigne)> = None;

        egui::CollapsingHeader::new("Archive")
            .default_open(false)
            .show(ui, |ui| {
                for c in self.historique.archive() {
                    ui.horizontal(|ui| {
                        ui.monospace(format!("{} = {}", c.expression, c.resultat));
                        if ui.small_button("↺").on_hover_text("Reprendre").clicked() {
                            action = Some((c.id, ActionLigne::Reprendre));
                        }
                        if ui.small_button("Supprimer").clicked() {
                            action = Some((c.id, ActionLigne::Supprimer));
                        }
                    });
                }
            });

        self.appliquer_action_ligne(action);
    }

    fn appliquer_action_ligne(&mut self, action: Option<(u64, ActionLigne)>) {
        match action {
            Some((id, ActionLigne::Reprendre)) => self.reprendre(id),
            Some((id, ActionLigne::Archiver)) => self.archiver(id),
            Some((id, ActionLigne::Supprimer)) => self.supprimer_archive(id),
            Some((_, ActionLigne::EffacerTout)) => self.effacer_historique(),
            None => {}
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, touche: &str) {
        if touche.is_empty() {
            ui.label("");
            return;
        }
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(touche));
        if resp.clicked() {
            self.inserer(touche);
        }
    }
}

/// Pavé : chaque touche insère exactement son libellé (× ÷ π e sont compris par le noyau).
const PAVE: &[&[&str]] = &[
    &["7", "8", "9", "÷", "("],
    &["4", "5", "6", "×", ")"],
    &["1", "2", "3", "-", "π"],
    &["0", ".", "", "+", "e"],
];

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum ActionLigne {
    Reprendre,
    Archiver,
    Supprimer,
    EffacerTout,
}
