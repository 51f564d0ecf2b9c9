//! Tests scientifiques (campagne) : invariants + croissance contrôlée.
//!
//! But : rendre VISIBLE le coût 2^n (taille des entiers, nombre de termes)
//! sans faire chauffer la machine.
//! - budget temps global
//! - n borné dans les tests (le noyau, lui, n’a pas de plafond)
//! - référence indépendante : sous le modèle d’indépendance,
//!   P(∪Ei) = 1 - Π(1 - P(Ei)), calculé en BigRational.

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::fraction::Fraction;
use super::union::{calcule_union, SousEnsembles};

fn f(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).unwrap_or_else(|e| panic!("Fraction::new({n}, {d}) erreur: {e}"))
}

fn valeur(r: &Fraction) -> BigRational {
    BigRational::new(r.numer().clone(), r.denom().clone())
}

/// 1 - Π(1 - p)
fn reference(evts: &[Fraction]) -> BigRational {
    let complement = evts
        .iter()
        .fold(BigRational::one(), |acc, p| acc * (BigRational::one() - valeur(p)));
    BigRational::one() - complement
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

const PREMIERS: [i64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/* ------------------------ Forme close ------------------------ */

#[test]
fn sci_forme_close_independance() {
    let cas: Vec<Vec<Fraction>> = vec![
        vec![f(1, 2), f(1, 3)],
        vec![f(1, 2), f(1, 2), f(1, 2)],
        vec![f(1, 6); 5],
        vec![f(2, 7), f(3, 11), f(5, 13), f(0, 1)],
        vec![f(99, 100), f(1, 1000), f(17, 23)],
        vec![f(10, 20), f(30, 90), f(7, 49)],
    ];

    for evts in cas {
        let r = calcule_union(&evts);
        assert_eq!(valeur(&r), reference(&evts), "evts={evts:?}");
    }
}

#[test]
fn sci_union_dans_0_1() {
    let evts: Vec<Fraction> = PREMIERS.iter().take(8).map(|&p| f(p - 1, p + 1)).collect();
    let v = valeur(&calcule_union(&evts));
    assert!(v >= BigRational::zero() && v <= BigRational::one(), "v={v}");
}

#[test]
fn sci_union_croissante() {
    // ajouter un événement (p ∈ [0, 1)) ne fait jamais baisser l’union
    let mut evts = Vec::new();
    let mut precedent = BigRational::zero();
    for &p in PREMIERS.iter().take(9) {
        evts.push(f(1, p));
        let v = valeur(&calcule_union(&evts));
        assert!(v >= precedent, "n={} : {v} < {precedent}", evts.len());
        precedent = v;
    }
}

/* ------------------------ Croissance visible (2^n) ------------------------ */

#[test]
fn sci_nombre_de_termes() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    for n in 0..=16usize {
        assert_eq!(SousEnsembles::new(n).count(), (1usize << n) - 1, "n={n}");
        budget(t0, max);
    }
}

#[test]
fn sci_denominateur_brut_croissant() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    // événements 1/p, p premiers distincts : dénominateur brut = Π p (PPCM exact)
    let mut bits_precedents = 0u64;
    let mut produit = BigInt::one();

    for n in 1..=PREMIERS.len() {
        let evts: Vec<Fraction> = PREMIERS[..n].iter().map(|&p| f(1, p)).collect();
        let r = calcule_union(&evts);

        produit *= PREMIERS[n - 1];
        assert_eq!(r.denom(), &produit, "n={n}");

        let bits = r.denom().bits();
        assert!(bits > bits_precedents, "n={n} : {bits} bits <= {bits_precedents}");
        bits_precedents = bits;

        budget(t0, max);
    }
}

#[test]
fn sci_grands_denominateurs() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    // 6 événements à dénominateurs de ~40 chiffres, copremiers deux à deux ou non
    let base = "1".repeat(40);
    let evts: Vec<Fraction> = (1..=6)
        .map(|k| Fraction::from_textes(&k.to_string(), &format!("{base}{k}")).unwrap())
        .collect();
    budget(t0, max);

    let r = calcule_union(&evts);
    assert_eq!(valeur(&r), reference(&evts));
    budget(t0, max);
}

/* ------------------------ Lecture sur résultat d’union ------------------------ */

#[test]
fn sci_lecture_union_des() {
    // 1 - (5/6)^2 = 11/36 = 0.30555…
    let r = calcule_union(&[f(1, 6), f(1, 6)]);
    assert_eq!(r.to_decimal(), "Approximate: 0.30556");
    assert_eq!(r.to_percent(), "Approximate: 30.55556%");
}
