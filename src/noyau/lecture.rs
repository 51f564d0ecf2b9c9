// src/noyau/lecture.rs
//
// Lecture décimale d’une fraction : exacte si le quotient se termine,
// sinon arrondie vers +∞ (CEILING) et préfixée "Approximate: ".
//
// Formats figés (compatibilité chaîne pour chaîne avec l’outil d’origine) :
// - décimal exact   : nombre minimal de chiffres ("0.25", "2", "-1.5")
// - décimal approché: toujours CHIFFRES_DECIMAL chiffres ("Approximate: 0.33334")
// - pourcent exact  : ×100, zéros finaux retirés ("25%", "100%", "12.5%")
// - pourcent approché: arrondi à CHIFFRES_POURCENT chiffres AVANT le ×100,
//                      zéros finaux retirés ("Approximate: 33.33334%")

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};

use super::fraction::Fraction;

/// Chiffres après la virgule pour le décimal approché.
pub const CHIFFRES_DECIMAL: usize = 5;

/// Chiffres du quotient approché avant la mise en pourcent.
pub const CHIFFRES_POURCENT: usize = 7;

pub const PREFIXE_APPROX: &str = "Approximate: ";

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

pub(crate) fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// "12.50000" -> "12.5", "10.00000" -> "10" ; un entier reste tel quel.
fn retire_zeros_finaux(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/* ------------------------ Quotients scalés ------------------------ */

/// Dénominateur RÉDUIT d = 2^a * 5^b  =>  Some(max(a, b)), le nombre minimal de chiffres
/// après la virgule. Tout autre facteur premier => développement infini => None.
fn chiffres_si_fini(denom_reduit: &BigInt) -> Option<usize> {
    let mut d = denom_reduit.clone();

    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut a = 0usize;
    while d.is_multiple_of(&deux) {
        d /= &deux;
        a += 1;
    }

    let mut b = 0usize;
    while d.is_multiple_of(&cinq) {
        d /= &cinq;
        b += 1;
    }

    d.is_one().then_some(a.max(b))
}

/// n*10^digits / d, division exacte (appelé seulement quand le quotient se termine).
fn quotient_exact(numer: &BigInt, denom: &BigInt, digits: usize) -> BigInt {
    (numer * pow10(digits)) / denom
}

/// ceil(n*10^digits / d) : arrondi vers +∞ (dénominateur toujours > 0).
fn quotient_plafond(r: &Fraction, digits: usize) -> BigInt {
    let (q, reste) = (r.numer() * pow10(digits)).div_mod_floor(r.denom());
    if reste.is_positive() {
        q + 1
    } else {
        q
    }
}

/* ------------------------ API ------------------------ */

/// Décimal : exact si possible, sinon "Approximate: " + CEILING à 5 chiffres.
pub fn to_decimal(r: &Fraction) -> String {
    let reduit = r.reduce();

    match chiffres_si_fini(reduit.denom()) {
        Some(k) => scaled_to_decimal(quotient_exact(reduit.numer(), reduit.denom(), k), k),
        None => {
            let scaled = quotient_plafond(r, CHIFFRES_DECIMAL);
            format!(
                "{PREFIXE_APPROX}{}",
                scaled_to_decimal(scaled, CHIFFRES_DECIMAL)
            )
        }
    }
}

/// Pourcentage : même logique à deux branches que `to_decimal`.
pub fn to_percent(r: &Fraction) -> String {
    let reduit = r.reduce();

    match chiffres_si_fini(reduit.denom()) {
        Some(k) => {
            // ×100 = deux chiffres de moins ; le minimal de chiffres => pas de zéro final
            let k = k.saturating_sub(2);
            let centuple = reduit.numer() * 100;
            format!("{}%", scaled_to_decimal(quotient_exact(&centuple, reduit.denom(), k), k))
        }
        None => {
            // ceil à 7 chiffres, puis ×100 => même entier lu avec 2 chiffres de moins
            let scaled = quotient_plafond(r, CHIFFRES_POURCENT);
            let texte = scaled_to_decimal(scaled, CHIFFRES_POURCENT - 2);
            format!("{PREFIXE_APPROX}{}%", retire_zeros_finaux(texte))
        }
    }
}

impl Fraction {
    /// Voir [`to_decimal`].
    pub fn to_decimal(&self) -> String {
        to_decimal(self)
    }

    /// Voir [`to_percent`].
    pub fn to_percent(&self) -> String {
        to_percent(self)
    }
}
