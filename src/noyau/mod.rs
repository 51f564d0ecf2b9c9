//! Noyau exact : union de probabilités
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées (dénominateur nul, saisie invalide)
//! - fraction.rs : fraction BigInt/BigInt non réduite + arithmétique
//! - lecture.rs  : décimal / pourcent (exact ou "Approximate: ")
//! - saisie.rs   : lecture des chaînes "p/q" et "a.b"
//! - union.rs    : inclusion-exclusion par masques
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod fraction;
pub mod lecture;
pub mod saisie;
pub mod union;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use eval::evalue_union;
