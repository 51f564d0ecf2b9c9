//! Noyau — union d’événements par inclusion-exclusion
//!
//! P(E1 ∪ … ∪ En) = Σ_{S ≠ ∅} (-1)^{|S|+1} · P(∩_{i∈S} Ei)
//!
//! Hypothèse : P(A ∩ B) = P(A)·P(B) (voir `Fraction::intersect`).
//! Le résultat n’est exact que pour des événements indépendants.
//!
//! Coût : Θ(2^n · n) produits de fractions, dont la taille des entiers grandit
//! à chaque produit. Pas de plafond sur n : seul le coût arithmétique limite.

use num_bigint::BigUint;
use num_traits::One;

use super::fraction::Fraction;

/* ------------------------ Sous-ensembles (masques) ------------------------ */

/// Itère les sous-ensembles NON vides de {0, …, n-1}, masques 1 … 2^n - 1 croissants.
/// Bit j du masque = indice j présent. Rien n’est pré-alloué.
#[derive(Clone, Debug)]
pub struct SousEnsembles {
    taille: usize,
    masque: BigUint,
    fin: BigUint,
}

impl SousEnsembles {
    pub fn new(taille: usize) -> Self {
        Self {
            taille,
            masque: BigUint::one(), // le masque 0 (ensemble vide) est sauté
            fin: BigUint::one() << taille,
        }
    }
}

impl Iterator for SousEnsembles {
    type Item = SousEnsemble;

    fn next(&mut self) -> Option<SousEnsemble> {
        if self.masque >= self.fin {
            return None;
        }
        let courant = SousEnsemble {
            masque: self.masque.clone(),
            taille: self.taille,
        };
        self.masque += 1u32;
        Some(courant)
    }
}

#[derive(Clone, Debug)]
pub struct SousEnsemble {
    masque: BigUint,
    taille: usize,
}

impl SousEnsemble {
    /// Indices présents, croissants, calculés à la demande.
    pub fn membres(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.taille).filter(move |&j| self.masque.bit(j as u64))
    }

    /// |S| par comptage de population.
    pub fn cardinal(&self) -> u64 {
        self.masque.count_ones()
    }

    pub fn est_impair(&self) -> bool {
        self.cardinal() % 2 == 1
    }
}

/* ------------------------ Union ------------------------ */

/// Probabilité (brute, NON réduite) qu’au moins un des événements se produise.
///
/// - un événement ≥ 1  => exactement 1/1, sans autre calcul
/// - aucun événement   => 0/1
/// - la réduction pour l’affichage reste à l’appelant
pub fn calcule_union(evenements: &[Fraction]) -> Fraction {
    // 1) Certitude : l’union contient un événement certain
    if let Some(i) = evenements.iter().position(Fraction::est_certain) {
        log::debug!("union : probabilité {} ≥ 1 => 1/1", i + 1);
        return Fraction::un();
    }

    // 2) Pré-réduction (optimisation seulement : entiers plus petits ensuite)
    let reduits: Vec<Fraction> = evenements.iter().map(Fraction::reduce).collect();

    log::debug!(
        "union : {} événement(s), {} sous-ensemble(s) non vide(s)",
        reduits.len(),
        (BigUint::one() << reduits.len()) - 1u32
    );

    // 3–6) Σ signée des intersections, masques croissants, sans réduction
    let mut resultat = Fraction::zero();

    for sous in SousEnsembles::new(reduits.len()) {
        let terme = sous
            .membres()
            .fold(Fraction::un(), |acc, j| acc.intersect(&reduits[j]));

        resultat = if sous.est_impair() {
            &resultat + &terme
        } else {
            &resultat - &terme
        };
    }

    log::debug!(
        "union : résultat brut sur {} bit(s) au dénominateur",
        resultat.denom().bits()
    );

    resultat
}
