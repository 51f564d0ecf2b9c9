// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau.
///
/// Une division qui ne se termine pas n’est PAS une erreur : elle bascule
/// simplement la lecture en mode "Approximate: " (voir lecture.rs).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    /// Dénominateur nul à la construction (aucune arithmétique tentée).
    #[error("une fraction ne peut pas avoir 0 au dénominateur")]
    DenominateurNul,

    /// Chaîne mal formée (ni décimal `a.b`, ni fraction `p/q`).
    #[error("saisie invalide {saisie:?} : {raison}")]
    Saisie { saisie: String, raison: &'static str },

    /// Erreur rattachée à la k-ième probabilité d’un ensemble (k à partir de 1).
    #[error("probabilité {rang} : {erreur}")]
    Probabilite {
        rang: usize,
        #[source]
        erreur: Box<ErreurNoyau>,
    },
}

impl ErreurNoyau {
    pub(crate) fn saisie(saisie: &str, raison: &'static str) -> Self {
        ErreurNoyau::Saisie {
            saisie: saisie.to_string(),
            raison,
        }
    }

    /// Rattache l’erreur à une position (1-based) dans l’ensemble saisi.
    pub fn au_rang(self, rang: usize) -> Self {
        ErreurNoyau::Probabilite {
            rang,
            erreur: Box::new(self),
        }
    }
}

pub type Resultat<T> = std::result::Result<T, ErreurNoyau>;
