//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du formulaire (probabilités saisies, rendus, erreur)
//! et offrir des opérations simples (+ / - / effacer) sans logique d’affichage.
//!
//! Contrats :
//! - Aucun calcul ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Pas de plafond sur le nombre de lignes : seulement un avertissement.

/// Nombre de lignes "Probabilité k" au démarrage.
pub const LIGNES_DEFAUT: usize = 2;

/// À partir de ce nombre de lignes, on prévient que le calcul (2^n termes) peut être long.
pub const SEUIL_AVERTISSEMENT: usize = 16;

#[derive(Clone, Default, Debug)]
pub struct Resultats {
    pub pourcent: String,
    pub decimal: String,
    pub brut: String,
    pub reduit: String,
}

#[derive(Clone, Debug)]
pub struct AppUnion {
    // --- entrées utilisateur (une par événement) ---
    pub saisies: Vec<String>,

    // --- sorties ---
    pub resultats: Resultats,
    pub erreur: String,

    // --- fenêtre d’aide ---
    pub aide_ouverte: bool,

    // --- UX ---
    // Ligne qui doit recevoir le focus à la prochaine frame (après +, au lancement…).
    pub focus_ligne: Option<usize>,
}

impl Default for AppUnion {
    fn default() -> Self {
        Self {
            saisies: vec![String::new(); LIGNES_DEFAUT],
            resultats: Resultats::default(),
            erreur: String::new(),
            aide_ouverte: false,
            focus_ligne: Some(0), // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppUnion {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// + : nouvelle ligne vide en fin de formulaire (focus dessus).
    pub fn ajoute_ligne(&mut self) {
        self.saisies.push(String::new());
        self.focus_ligne = Some(self.saisies.len() - 1);
    }

    /// - : retire la dernière ligne (sans effet s’il n’y en a plus).
    pub fn retire_ligne(&mut self) {
        self.saisies.pop();
        self.focus_ligne = self.saisies.len().checked_sub(1);
    }

    /// Échap : vide toutes les saisies (le nombre de lignes est conservé).
    pub fn clear_saisies(&mut self) {
        for s in &mut self.saisies {
            s.clear();
        }
        self.focus_ligne = (!self.saisies.is_empty()).then_some(0);
    }

    pub fn clear_resultats(&mut self) {
        self.resultats = Resultats::default();
        self.erreur.clear();
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : les rendus précédents sont effacés, pour ne jamais afficher
    /// un ancien résultat à côté d’une saisie refusée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.resultats = Resultats::default();
        self.erreur = msg.into();
    }

    /// Utilitaire : déposer les quatre rendus d’un calcul réussi.
    pub fn set_resultats(&mut self, resultats: Resultats) {
        self.erreur.clear();
        self.resultats = resultats;
    }

    /// Vrai si le nombre de lignes rend le calcul potentiellement long.
    pub fn calcul_lourd(&self) -> bool {
        self.saisies.len() >= SEUIL_AVERTISSEMENT
    }
}
