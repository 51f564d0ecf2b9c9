// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppUnion (etat.rs) pour natif + wasm
// - Une ligne "Probabilité k" par événement, + / - pour en ajouter / retirer
// - Clavier : Enter dans une ligne calcule l’union
// - Rendus en lecture seule + bouton "Copier" (presse-papiers egui)
// - Aide dans une fenêtre séparée

use eframe::egui;

use super::etat::{AppUnion, Resultats};

/// Texte statique de la fenêtre d’aide.
const TEXTE_AIDE: &str = "\
Saisie
  Une probabilité par ligne, sous l’une des deux formes :
  - fraction : 1/6, 3/4, 12345678901234567890/98765432109876543210
  - décimal  : 0.25, .5 (le point est obligatoire)
  Un entier seul (\"1\"), une virgule (\"0,5\") ou plusieurs '/' sont refusés.

Calcul
  L’union P(E1 ∪ … ∪ En) est calculée EXACTEMENT par inclusion-exclusion.
  Si une probabilité vaut 1 ou plus, le résultat est 1/1 directement.

Hypothèse importante
  L’intersection de deux événements est le PRODUIT de leurs probabilités :
  le résultat n’est exact que si les événements sont indépendants.
  Une même probabilité saisie deux fois compte pour deux événements distincts.

Résultats
  - Pourcentage et décimal : exacts si le développement se termine,
    sinon préfixés \"Approximate: \" (arrondi vers le haut).
  - Fraction brute : telle que calculée, non simplifiée.
  - Fraction simplifiée : forme irréductible.

Coût
  n probabilités => 2^n - 1 termes. Au-delà d’une quinzaine de lignes,
  le calcul peut devenir très long (aucune limite n’est imposée).";

impl AppUnion {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);
                ui.add_space(6.0);

                self.ui_saisies(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);
            });

        let ctx = ui.ctx().clone();
        self.ui_aide(&ctx);
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice d’union");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Aide").clicked() {
                    self.aide_ouverte = true;
                }
            });
        });
        ui.label("Probabilités en fractions (avec un \"/\") ou en décimaux (avec un \".\").");
    }

    fn ui_saisies(&mut self, ui: &mut egui::Ui) {
        let focus = self.focus_ligne.take();
        let mut calculer = false;

        egui::Grid::new("saisies_union")
            .num_columns(2)
            .spacing([6.0, 4.0])
            .show(ui, |ui| {
                for (i, saisie) in self.saisies.iter_mut().enumerate() {
                    ui.label(format!("Probabilité {} :", i + 1));

                    // IMPORTANT : id stable par ligne + focus contrôlé
                    let resp = ui.add(
                        egui::TextEdit::singleline(saisie)
                            .desired_width(360.0)
                            .hint_text("Ex: 1/6 ou 0.25")
                            .id_source(("saisie_union", i))
                            .code_editor(),
                    );

                    if focus == Some(i) {
                        resp.request_focus();
                    }

                    // Enter : le champ perd le focus à la même frame
                    if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
                        calculer = true;
                    }

                    ui.end_row();
                }
            });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let plus = ui
                .add_sized([32.0, 28.0], egui::Button::new("+"))
                .on_hover_text("Ajouter une probabilité");
            if plus.clicked() {
                self.ajoute_ligne();
            }

            let moins = ui
                .add_enabled(
                    !self.saisies.is_empty(),
                    egui::Button::new("-").min_size(egui::vec2(32.0, 28.0)),
                )
                .on_hover_text("Retirer la dernière probabilité");
            if moins.clicked() {
                self.retire_ligne();
            }

            ui.separator();

            let effacer = ui
                .add_sized([72.0, 28.0], egui::Button::new("Effacer"))
                .on_hover_text("Vide les saisies et les résultats (Échap : saisies seulement)");
            if effacer.clicked() {
                self.clear_saisies();
                self.clear_resultats();
            }

            ui.add_space(10.0);

            let calc = ui.add_sized([140.0, 28.0], egui::Button::new("Calculer l’union"));
            if calc.clicked() {
                calculer = true;
            }
        });

        if calculer {
            self.calcule_via_noyau();
        }

        if self.calcul_lourd() {
            ui.add_space(4.0);
            ui.colored_label(
                ui.visuals().warn_fg_color,
                format!(
                    "{} probabilités : 2^{} - 1 termes, le calcul peut être long.",
                    self.saisies.len(),
                    self.saisies.len()
                ),
            );
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        let r = &self.resultats;

        egui::Grid::new("resultats_union")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                Self::ligne_resultat(ui, "Pourcentage", "pourcent_out", &r.pourcent);
                Self::ligne_resultat(ui, "Décimal", "decimal_out", &r.decimal);
                Self::ligne_resultat(ui, "Fraction brute", "brut_out", &r.brut);
                Self::ligne_resultat(ui, "Fraction simplifiée", "reduit_out", &r.reduit);
            });
    }

    fn ligne_resultat(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu);

        let copier = ui
            .add_enabled(!contenu.is_empty(), egui::Button::new("Copier"))
            .on_hover_text("Copier dans le presse-papiers");
        if copier.clicked() {
            ui.ctx().copy_text(contenu.to_string());
            log::debug!("copié : {titre}");
        }

        ui.end_row();
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        // Les fractions brutes peuvent être très longues : retour à la ligne.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(360.0);
                    ui.set_max_width(360.0);
                    ui.add(egui::Label::new(egui::RichText::new(contenu).monospace()).wrap());
                });
            });
    }

    fn ui_aide(&mut self, ctx: &egui::Context) {
        egui::Window::new("Aide")
            .open(&mut self.aide_ouverte)
            .resizable(true)
            .default_width(480.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.monospace(TEXTE_AIDE);
                });
            });
    }

    /// Calcule l’union via le noyau, puis dépose les rendus (ou l’erreur) dans l’état UI.
    fn calcule_via_noyau(&mut self) {
        match crate::noyau::evalue_union(&self.saisies) {
            Ok(rendu) => {
                log::info!(
                    "union de {} probabilité(s) : {}",
                    rendu.nb_evenements,
                    rendu.reduit
                );
                self.set_resultats(Resultats {
                    pourcent: rendu.pourcent,
                    decimal: rendu.decimal,
                    brut: rendu.brut,
                    reduit: rendu.reduit,
                });
            }
            Err(e) => {
                log::warn!("saisie refusée : {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}
