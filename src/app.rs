// src/app.rs
//
// Calculatrice d’union — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppUnion (pour main.rs: use crate::app::AppUnion;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Enter est géré dans vue.rs (au bon endroit: quand une ligne a le focus).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppUnion;`
pub use etat::AppUnion;

use eframe::egui;

impl eframe::App for AppUnion {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = vider les saisies (le nombre de lignes est conservé).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_saisies(); // méthode publique de etat.rs
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
