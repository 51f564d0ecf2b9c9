// src/noyau/fraction.rs
//
// Fraction exacte (BigInt / BigInt), volontairement NON réduite automatiquement.
//
// Contrats :
// - dénominateur ≠ 0, vérifié à la construction (avant toute arithmétique)
// - dénominateur toujours > 0 : le signe vit au numérateur
// - aucune réduction implicite : 2/4 reste 2/4 jusqu’à reduce()
// - valeur immuable : chaque opération rend une nouvelle fraction

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::erreur::{ErreurNoyau, Resultat};
use super::lecture::pow10;
use super::saisie::lit_entier;

/// Égalité dérivée = égalité de REPRÉSENTATION (2/4 ≠ 1/2).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// Construit `numer/denom`. Échoue si `denom` est nul.
    /// Un dénominateur négatif transfère son signe au numérateur (1/-2 -> -1/2).
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Resultat<Self> {
        let numer = numer.into();
        let denom = denom.into();

        if denom.is_zero() {
            return Err(ErreurNoyau::DenominateurNul);
        }

        if denom.is_negative() {
            Ok(Self {
                numer: -numer,
                denom: -denom,
            })
        } else {
            Ok(Self { numer, denom })
        }
    }

    /// Deux littéraux entiers (signe optionnel + chiffres ASCII).
    pub fn from_textes(numer: &str, denom: &str) -> Resultat<Self> {
        let n = lit_entier(numer, "numérateur manquant", "numérateur invalide")?;
        let d = lit_entier(denom, "dénominateur manquant", "dénominateur invalide")?;
        Self::new(n, d)
    }

    /// Décimal `[signe]entier.chiffres` -> chiffres / 10^len(chiffres).
    /// La partie entière peut être vide (".5"), la partie décimale non.
    pub fn from_decimal(texte: &str) -> Resultat<Self> {
        let t = texte.trim();

        let Some((entiere, decimale)) = t.split_once('.') else {
            return Err(ErreurNoyau::saisie(texte, "séparateur décimal '.' manquant"));
        };
        if decimale.is_empty() {
            return Err(ErreurNoyau::saisie(texte, "aucun chiffre après le '.'"));
        }
        if !decimale.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ErreurNoyau::saisie(texte, "partie décimale invalide"));
        }

        // "-.5" -> "-5", ".25" -> "25" : même lecture que la partie entière seule.
        let chiffres = format!("{entiere}{decimale}");
        let numer = lit_entier(&chiffres, "décimal invalide", "décimal invalide")
            .map_err(|_| ErreurNoyau::saisie(texte, "partie entière invalide"))?;

        Ok(Self {
            numer,
            denom: pow10(decimale.len()),
        })
    }

    /// 0/1
    pub fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    /// 1/1
    pub fn un() -> Self {
        Self {
            numer: BigInt::one(),
            denom: BigInt::one(),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Probabilité ≥ 1 (numérateur ≥ dénominateur, dénominateur > 0).
    pub fn est_certain(&self) -> bool {
        self.numer >= self.denom
    }

    /// Intersection d’événements = produit des probabilités.
    ///
    /// Modèle d’INDÉPENDANCE : ce n’est pas une identité générale des probabilités,
    /// mais c’est exactement ce que calcule l’outil. Ne pas "corriger".
    pub fn intersect(&self, autre: &Fraction) -> Fraction {
        self * autre
    }

    /// Forme irréductible : numérateur et dénominateur divisés par leur PGCD (≥ 1).
    pub fn reduce(&self) -> Fraction {
        let pgcd = self.numer.gcd(&self.denom);
        Fraction {
            numer: &self.numer / &pgcd,
            denom: &self.denom / &pgcd,
        }
    }

    /// Addition / soustraction sur le PPCM des dénominateurs (sans réduction).
    fn combine(&self, autre: &Fraction, op: fn(BigInt, BigInt) -> BigInt) -> Fraction {
        // même dénominateur : pas besoin de PPCM
        if self.denom == autre.denom {
            return Fraction {
                numer: op(self.numer.clone(), autre.numer.clone()),
                denom: self.denom.clone(),
            };
        }

        let ppcm = ppcm(&self.denom, &autre.denom);
        let gauche = (&ppcm / &self.denom) * &self.numer;
        let droite = (&ppcm / &autre.denom) * &autre.numer;

        Fraction {
            numer: op(gauche, droite),
            denom: ppcm,
        }
    }
}

/// PPCM = a*b / pgcd(a, b)
fn ppcm(a: &BigInt, b: &BigInt) -> BigInt {
    (a * b) / a.gcd(b)
}

/* ------------------------ Opérateurs ------------------------ */

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, autre: Self) -> Fraction {
        self.combine(autre, |a, b| a + b)
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, autre: Self) -> Fraction {
        self.combine(autre, |a, b| a - b)
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, autre: Self) -> Fraction {
        Fraction {
            numer: &self.numer * &autre.numer,
            denom: &self.denom * &autre.denom,
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, autre: Fraction) -> Fraction {
        &self + &autre
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, autre: Fraction) -> Fraction {
        &self - &autre
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, autre: Fraction) -> Fraction {
        &self * &autre
    }
}

/// Forme brute "numérateur/dénominateur".
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
