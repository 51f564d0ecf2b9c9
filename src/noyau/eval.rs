//! Noyau — évaluation (pipeline réel)
//!
//! saisies -> Fractions -> union (inclusion-exclusion) -> brut / réduit / décimal / pourcent
//!
//! Une saisie invalide arrête tout : aucune probabilité n’est remplacée par défaut.

use super::erreur::Resultat;
use super::saisie::parse_probabilite;
use super::union::calcule_union;

/// Les quatre rendus d’une union (+ taille de l’ensemble évalué).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Rendu {
    pub brut: String,
    pub reduit: String,
    pub decimal: String,
    pub pourcent: String,
    pub nb_evenements: usize,
}

/// API publique : évalue l’union des probabilités saisies.
/// Erreur => `ErreurNoyau::Probabilite { rang, .. }` (rang à partir de 1).
pub fn evalue_union<S: AsRef<str>>(saisies: &[S]) -> Resultat<Rendu> {
    // 1) Lecture (première erreur => arrêt)
    let evenements = saisies
        .iter()
        .enumerate()
        .map(|(i, s)| parse_probabilite(s.as_ref()).map_err(|e| e.au_rang(i + 1)))
        .collect::<Resultat<Vec<_>>>()?;

    // 2) Union brute
    let union = calcule_union(&evenements);

    // 3) Rendus
    Ok(Rendu {
        brut: union.to_string(),
        reduit: union.reduce().to_string(),
        decimal: union.to_decimal(),
        pourcent: union.to_percent(),
        nb_evenements: evenements.len(),
    })
}
