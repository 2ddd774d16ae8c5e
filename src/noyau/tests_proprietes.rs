//! Tests de propriétés : comparaison avec un évaluateur de référence indépendant.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - référence : descente récursive classique (grammaire expr/terme/facteur),
//!   sans rapport avec l’algorithme à deux piles

use std::time::{Duration, Instant};

use super::erreur::EvaluationError;
use super::format::format_result;
use super::jetons::Op;
use super::pile::{appliquer, evaluer};
use super::evaluate;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence (descente récursive) ------------------------ */

/// None = division par zéro rencontrée.
struct Reference<'a> {
    s: &'a [u8],
    i: usize,
}

impl Reference<'_> {
    fn peek(&self) -> Option<u8> {
        self.s.get(self.i).copied()
    }

    fn expr(&mut self) -> Option<f64> {
        let mut acc = self.terme()?;
        while let Some(c @ (b'+' | b'-')) = self.peek() {
            self.i += 1;
            let d = self.terme()?;
            acc = if c == b'+' { acc + d } else { acc - d };
        }
        Some(acc)
    }

    fn terme(&mut self) -> Option<f64> {
        let mut acc = self.facteur()?;
        while let Some(c @ (b'*' | b'/')) = self.peek() {
            self.i += 1;
            let d = self.facteur()?;
            if c == b'*' {
                acc *= d;
            } else {
                if d == 0.0 {
                    return None;
                }
                acc /= d;
            }
        }
        Some(acc)
    }

    fn facteur(&mut self) -> Option<f64> {
        if self.peek() == Some(b'(') {
            self.i += 1;
            let v = self.expr()?;
            assert_eq!(self.peek(), Some(b')'), "générateur incohérent");
            self.i += 1;
            return Some(v);
        }

        let debut = self.i;
        if self.peek() == Some(b'-') {
            self.i += 1;
        }
        while matches!(self.peek(), Some(b'0'..=b'9' | b'.')) {
            self.i += 1;
        }
        let texte = std::str::from_utf8(&self.s[debut..self.i]).expect("ascii");
        Some(texte.parse().expect("littéral généré valide"))
    }
}

fn reference(s: &str) -> Option<f64> {
    let mut r = Reference {
        s: s.as_bytes(),
        i: 0,
    };
    let v = r.expr();
    if v.is_some() {
        assert_eq!(r.i, s.len(), "référence: lecture incomplète de {s:?}");
    }
    v
}

fn sous_test(s: &str) -> Option<f64> {
    match evaluer(s) {
        Ok(v) => Some(v),
        Err(EvaluationError::DivisionByZero) => None,
        Err(e) => panic!("erreur inattendue: expr={s:?} err={e}"),
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_litteral(rng: &mut Rng) -> String {
    let entier = rng.pick(10);
    let mut s = if rng.pick(4) == 0 {
        format!("{entier}.{}", rng.pick(100))
    } else {
        format!("{entier}")
    };
    if rng.pick(5) == 0 {
        s.insert(0, '-');
    }
    s
}

fn gen_facteur(rng: &mut Rng, depth: usize) -> String {
    if depth > 0 && rng.pick(3) == 0 {
        format!("({})", gen_expr(rng, depth - 1))
    } else {
        gen_litteral(rng)
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    let n = 1 + rng.pick(4);
    let mut s = gen_facteur(rng, depth);
    for _ in 1..n {
        let op = match rng.pick(4) {
            0 => '+',
            1 => '-',
            2 => '*',
            _ => '/',
        };
        s.push(op);
        s.push_str(&gen_facteur(rng, depth));
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn accord_avec_la_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_div0 = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let attendu = reference(&expr);
        let obtenu = sous_test(&expr);

        assert_eq!(
            obtenu.map(f64::to_bits),
            attendu.map(f64::to_bits),
            "expr={expr:?} obtenu={obtenu:?} attendu={attendu:?}"
        );

        match obtenu {
            Some(_) => vus_ok += 1,
            None => vus_div0 += 1,
        }
    }

    // On veut voir un mix des deux, sinon la campagne ne “balaye” rien.
    assert!(vus_ok > 500, "trop peu de succès: {vus_ok}");
    assert!(vus_div0 > 0, "aucune division par zéro vue");
}

#[test]
fn multiplicatif_lie_plus_fort_que_additif() {
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        let (a, b, c) = (rng.pick(50) + 1, rng.pick(50) + 1, rng.pick(50) + 1);
        let op1 = if rng.coin() { '+' } else { '-' };
        let op2 = if rng.coin() { '*' } else { '/' };

        let plat = format!("{a}{op1}{b}{op2}{c}");
        let groupe = format!("{a}{op1}({b}{op2}{c})");

        assert_eq!(evaluate(&plat), evaluate(&groupe), "plat={plat:?}");
    }
}

#[test]
fn application_dans_l_ordre_gauche_droite() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        let (a, b) = (f64::from(rng.pick(1000)), f64::from(rng.pick(1000) + 1));
        let s = format!("{a}-{b}");
        assert_eq!(evaluer(&s), appliquer(Op::Minus, a, b));
        let s = format!("{a}/{b}");
        assert_eq!(evaluer(&s), appliquer(Op::Slash, a, b));
    }
}

#[test]
fn format_idempotent_sur_entiers() {
    let mut rng = Rng::new(42);

    for _ in 0..200 {
        let v = f64::from(rng.next_u32()) - f64::from(u32::MAX / 2);
        let une = format_result(v);
        let deux = format_result(v);
        assert_eq!(une, deux);
        assert!(!une.contains('.'), "entier affiché avec décimales: {une}");
        // relire l’affichage redonne la même valeur
        assert_eq!(evaluate(&une).as_deref(), Ok(une.as_str()));
    }
}

#[test]
fn longue_somme_lineaire() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = vec!["1"; 20_000].join("+");
    let r = evaluate(&expr);
    budget(t0, max);

    assert_eq!(r.as_deref(), Ok("20000"));
}
