//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline (saisie -> union -> rendus) sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - n borné (≤ 6 probabilités par tirage)
//! - budget temps global
//! - saisies mal formées injectées : l’erreur doit viser la PREMIÈRE mauvaise ligne
//! - invariant clé : union réduite == 1 - Π(1 - p) (référence BigRational)

use std::time::{Duration, Instant};

use num_rational::BigRational;
use num_traits::One;

use super::erreur::ErreurNoyau;
use super::eval::evalue_union;
use super::saisie::parse_probabilite;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de saisies ------------------------ */

/// Probabilité valide dans [0, 1) : fraction p/q ou décimal 0.xyz
fn gen_probabilite(rng: &mut Rng) -> String {
    if rng.pick(2) == 0 {
        let q = 1 + rng.pick(40);
        let p = rng.pick(q);
        format!("{p}/{q}")
    } else {
        let chiffres = 1 + rng.pick(4) as usize;
        let mut s = String::from("0.");
        for _ in 0..chiffres {
            s.push(char::from(b'0' + rng.pick(10) as u8));
        }
        s
    }
}

fn gen_mal_forme(rng: &mut Rng) -> String {
    const MAUVAIS: [&str; 10] = ["", "1", "1/", "/3", "1/2/3", "x", "0,5", "1.", "1e3", "1/0"];
    MAUVAIS[rng.pick(MAUVAIS.len() as u32) as usize].to_string()
}

fn reference(saisies: &[String]) -> BigRational {
    let complement = saisies.iter().fold(BigRational::one(), |acc, s| {
        let p = parse_probabilite(s).unwrap();
        acc * (BigRational::one() - BigRational::new(p.numer().clone(), p.denom().clone()))
    });
    BigRational::one() - complement
}

fn texte_rationnel(r: &BigRational) -> String {
    format!("{}/{}", r.numer(), r.denom())
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_union_valide_contre_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..300 {
        let n = rng.pick(7) as usize;
        let saisies: Vec<String> = (0..n).map(|_| gen_probabilite(&mut rng)).collect();

        let rendu = evalue_union(&saisies)
            .unwrap_or_else(|e| panic!("saisies={saisies:?} err={e}"));

        assert_eq!(rendu.nb_evenements, n);
        assert_eq!(
            rendu.reduit,
            texte_rationnel(&reference(&saisies)),
            "saisies={saisies:?}"
        );

        budget(t0, max);
    }
}

#[test]
fn fuzz_erreur_premiere_ligne_fautive() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);
    let mut rng = Rng::new(42);

    for _ in 0..300 {
        let n = 1 + rng.pick(6) as usize;
        let fautive = rng.pick(n as u32) as usize;

        let saisies: Vec<String> = (0..n)
            .map(|i| {
                if i == fautive {
                    gen_mal_forme(&mut rng)
                } else {
                    gen_probabilite(&mut rng)
                }
            })
            .collect();

        match evalue_union(&saisies) {
            Err(ErreurNoyau::Probabilite { rang, erreur }) => {
                assert_eq!(rang, fautive + 1, "saisies={saisies:?}");
                assert!(
                    matches!(
                        *erreur,
                        ErreurNoyau::Saisie { .. } | ErreurNoyau::DenominateurNul
                    ),
                    "saisies={saisies:?} err={erreur:?}"
                );
            }
            autre => panic!("saisies={saisies:?} : erreur attendue, obtenu {autre:?}"),
        }

        budget(t0, max);
    }
}

#[test]
fn fuzz_determinisme() {
    let mut rng = Rng::new(7);

    for _ in 0..50 {
        let n = rng.pick(6) as usize;
        let saisies: Vec<String> = (0..n).map(|_| gen_probabilite(&mut rng)).collect();

        let a = evalue_union(&saisies).unwrap();
        let b = evalue_union(&saisies).unwrap();
        assert_eq!(a, b, "saisies={saisies:?}");
    }
}
