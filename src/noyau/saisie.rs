// src/noyau/saisie.rs
//
// Lecture d’une probabilité saisie au clavier. Deux formats seulement :
// - décimal  : contient un '.'  -> "0.25", ".5", "-1.75"
// - fraction : "p/q" (un seul '/') -> "1/6", "-3/4", "12345678901234567890/3"
// Tout le reste est refusé : jamais de valeur par défaut silencieuse.

use num_bigint::BigInt;

use super::erreur::{ErreurNoyau, Resultat};
use super::fraction::Fraction;

/// Entier littéral : signe optionnel (+/-) suivi de chiffres ASCII.
/// Espaces autour tolérés, rien d’autre (pas de '_', pas d’exposant).
pub(crate) fn lit_entier(
    texte: &str,
    manquant: &'static str,
    invalide: &'static str,
) -> Resultat<BigInt> {
    let t = texte.trim();
    let chiffres = t.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(t);

    if chiffres.is_empty() {
        return Err(ErreurNoyau::saisie(texte, manquant));
    }
    if !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErreurNoyau::saisie(texte, invalide));
    }

    let valeur = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurNoyau::saisie(texte, invalide))?;

    Ok(if t.starts_with('-') { -valeur } else { valeur })
}

/// Probabilité saisie -> Fraction (décimal si '.', sinon fraction p/q).
pub fn parse_probabilite(saisie: &str) -> Resultat<Fraction> {
    let s = saisie.trim();
    if s.is_empty() {
        return Err(ErreurNoyau::saisie(saisie, "entrée vide"));
    }

    if s.contains('.') {
        return Fraction::from_decimal(s);
    }

    let Some((numer, denom)) = s.split_once('/') else {
        return Err(ErreurNoyau::saisie(
            s,
            "format attendu : fraction p/q ou décimal a.b",
        ));
    };
    if denom.contains('/') {
        return Err(ErreurNoyau::saisie(s, "un seul '/' est permis"));
    }

    Fraction::from_textes(numer, denom)
}
