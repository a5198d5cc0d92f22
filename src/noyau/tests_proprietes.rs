//! Tests de propriétés (campagne aléatoire déterministe) sur le résolveur.
//!
//! - RNG déterministe (seed fixe), pas de dépendance
//! - coefficients construits à partir des racines voulues => classe connue d’avance
//! - amplitudes variées (1e-4..1e13) et voisinage de la frontière |D| = ε
//! - budget temps global

use std::time::{Duration, Instant};

use approx::{assert_abs_diff_eq, assert_relative_eq};

use super::comparaison::EPSILON_DEFAUT;
use super::equation::{Equation, Solution};
use super::resolution::resoudre;

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
    /// Entier dans [-n, n]
    fn entier(&mut self, n: i32) -> i32 {
        (self.next_u32() % (2 * n as u32 + 1)) as i32 - n
    }
    /// Entier dans [lo, hi]
    fn entre(&mut self, lo: i32, hi: i32) -> i32 {
        lo + (self.next_u32() % (hi - lo + 1) as u32) as i32
    }
    /// ±m·10^e, m ∈ [1, 9], e ∈ [lo, hi]
    fn magnitude(&mut self, lo: i32, hi: i32) -> f64 {
        let m = self.non_nul(9) as f64;
        m * 10f64.powi(self.entre(lo, hi))
    }
    /// Non nul dans [-n, n]
    fn non_nul(&mut self, n: i32) -> i32 {
        loop {
            let v = self.entier(n);
            if v != 0 {
                return v;
            }
        }
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

const TOURS: usize = 2_000;

/// Valeur du polynôme en x.
fn evaluer(eq: &Equation, x: f64) -> f64 {
    (eq.a * x + eq.b) * x + eq.c
}

/// |P(x)| rapporté à l’ordre de grandeur des termes |a|x², |b||x|, |c|.
fn residu_relatif(eq: &Equation, x: f64) -> f64 {
    let echelle = eq.a.abs() * x * x + eq.b.abs() * x.abs() + eq.c.abs();
    if echelle == 0.0 {
        0.0
    } else {
        evaluer(eq, x).abs() / echelle
    }
}

fn resoudre_ok(eq: &Equation) -> Solution {
    resoudre(eq, EPSILON_DEFAUT).unwrap_or_else(|e| panic!("eq={eq} err={e}"))
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_deux_racines_distinctes_qui_annulent() {
    let t0 = Instant::now();
    let mut rng = Rng::new(0x5eed_0001);

    for _ in 0..TOURS {
        // a(x - r1)(x - r2), r1 != r2 (entiers => D >= a² > ε)
        let a = rng.non_nul(9) as f64;
        let r1 = rng.entier(20);
        let r2 = loop {
            let r = rng.entier(20);
            if r != r1 {
                break r;
            }
        };
        let (r1, r2) = (r1 as f64, r2 as f64);
        let eq = Equation::new(a, -a * (r1 + r2), a * r1 * r2);

        match resoudre_ok(&eq) {
            Solution::Deux(x1, x2) => {
                assert!(x1 < x2, "eq={eq}");
                assert_abs_diff_eq!(x1, r1.min(r2), epsilon = 1e-9);
                assert_abs_diff_eq!(x2, r1.max(r2), epsilon = 1e-9);
                assert_abs_diff_eq!(evaluer(&eq, x1), 0.0, epsilon = 1e-6);
                assert_abs_diff_eq!(evaluer(&eq, x2), 0.0, epsilon = 1e-6);
            }
            autre => panic!("eq={eq} attendu deux racines, obtenu {autre:?}"),
        }
    }
    budget(t0, Duration::from_millis(500));
}

#[test]
fn prop_racine_double() {
    let mut rng = Rng::new(0x5eed_0002);

    for _ in 0..TOURS {
        // a(x - r)²
        let a = rng.non_nul(9) as f64;
        let r = rng.entier(20) as f64 / 2.0;
        let eq = Equation::new(a, -2.0 * a * r, a * r * r);

        match resoudre_ok(&eq) {
            Solution::Une(x) => {
                assert_abs_diff_eq!(x, -eq.b / (2.0 * eq.a), epsilon = 1e-12);
                assert_abs_diff_eq!(x, r, epsilon = 1e-9);
            }
            autre => panic!("eq={eq} attendu une racine, obtenu {autre:?}"),
        }
    }
}

#[test]
fn prop_discriminant_negatif() {
    let mut rng = Rng::new(0x5eed_0003);

    for _ in 0..TOURS {
        // a((x - p)² + q²), q != 0 => D = -4a²q² < 0
        let a = rng.non_nul(9) as f64;
        let p = rng.entier(10) as f64;
        let q = rng.non_nul(10) as f64;
        let eq = Equation::new(a, -2.0 * a * p, a * (p * p + q * q));

        assert_eq!(resoudre_ok(&eq), Solution::Aucune, "eq={eq}");
    }
}

#[test]
fn prop_cas_lineaire() {
    let mut rng = Rng::new(0x5eed_0004);

    for _ in 0..TOURS {
        let b = rng.non_nul(50) as f64;
        let c = rng.entier(50) as f64;
        let eq = Equation::new(0.0, b, c);

        match resoudre_ok(&eq) {
            Solution::Une(x) => assert_abs_diff_eq!(x, -c / b, epsilon = 1e-12),
            autre => panic!("eq={eq} attendu une racine, obtenu {autre:?}"),
        }
    }
}

#[test]
fn prop_degenere() {
    let mut rng = Rng::new(0x5eed_0005);

    assert_eq!(resoudre_ok(&Equation::new(0.0, 0.0, 0.0)), Solution::Infinite);
    for _ in 0..TOURS {
        let c = rng.non_nul(1000) as f64;
        assert_eq!(resoudre_ok(&Equation::new(0.0, 0.0, c)), Solution::Aucune);
    }
}

#[test]
fn prop_idempotence() {
    let mut rng = Rng::new(0x5eed_0006);

    for _ in 0..TOURS {
        let eq = Equation::new(
            rng.entier(100) as f64 / 7.0,
            rng.entier(100) as f64 / 3.0,
            rng.entier(100) as f64 / 11.0,
        );
        let s1 = resoudre(&eq, EPSILON_DEFAUT);
        let s2 = resoudre(&eq, EPSILON_DEFAUT);
        assert_eq!(s1, s2, "eq={eq}");
    }
}

#[test]
fn prop_amplitudes_eloignees() {
    let t0 = Instant::now();
    let mut rng = Rng::new(0x5eed_0007);

    for _ in 0..TOURS {
        // une grande racine (1e3..1e13) et une petite (1e-4..1e1) : b ≈ -a·r_grande
        let a = rng.magnitude(-2, 3);
        let grande = rng.magnitude(3, 12);
        let petite = rng.magnitude(-4, 0);
        let eq = Equation::new(a, -a * (grande + petite), a * grande * petite);

        match resoudre_ok(&eq) {
            Solution::Deux(x1, x2) => {
                assert!(x1 < x2, "eq={eq}");
                let (x_grande, x_petite) = if x1.abs() > x2.abs() { (x1, x2) } else { (x2, x1) };
                assert_relative_eq!(x_grande, grande, max_relative = 1e-9);
                assert_relative_eq!(x_petite, petite, max_relative = 1e-9);
                assert!(residu_relatif(&eq, x1) < 1e-12, "eq={eq} x1={x1}");
                assert!(residu_relatif(&eq, x2) < 1e-12, "eq={eq} x2={x2}");
            }
            autre => panic!("eq={eq} attendu deux racines, obtenu {autre:?}"),
        }
    }
    budget(t0, Duration::from_millis(500));
}

#[test]
fn prop_vieta_grand_b() {
    let mut rng = Rng::new(0x5eed_0008);

    for _ in 0..TOURS {
        // x² + bx + 1, |b| ∈ 1e3..1e12 : x1·x2 = 1, x1 + x2 = -b
        let b = rng.magnitude(3, 12);
        let eq = Equation::new(1.0, b, 1.0);

        match resoudre_ok(&eq) {
            Solution::Deux(x1, x2) => {
                assert_relative_eq!(x1 * x2, 1.0, max_relative = 1e-12);
                assert_relative_eq!(x1 + x2, -b, max_relative = 1e-12);
                assert!(residu_relatif(&eq, x1) < 1e-12, "eq={eq} x1={x1}");
                assert!(residu_relatif(&eq, x2) < 1e-12, "eq={eq} x2={x2}");
            }
            autre => panic!("eq={eq} attendu deux racines, obtenu {autre:?}"),
        }
    }
}

#[test]
fn prop_exposants_melanges() {
    let mut rng = Rng::new(0x5eed_0009);

    for _ in 0..TOURS {
        let eq = Equation::new(
            rng.magnitude(-5, 5),
            rng.magnitude(-5, 12),
            rng.magnitude(-5, 12),
        );

        if let Solution::Deux(x1, x2) = resoudre_ok(&eq) {
            assert!(x1 < x2, "eq={eq}");
            assert!(residu_relatif(&eq, x1) < 1e-9, "eq={eq} x1={x1}");
            assert!(residu_relatif(&eq, x2) < 1e-9, "eq={eq} x2={x2}");
        }
    }
}

#[test]
fn prop_frontiere_du_discriminant() {
    let mut rng = Rng::new(0x5eed_000a);

    for _ in 0..TOURS {
        // x² ∓ d/4 : D = ±d exactement (multiplications par 4 sans arrondi)
        let epsilon = 10f64.powi(-rng.entre(3, 8));
        let d = epsilon * (1.0 + rng.entier(8) as f64 * 2f64.powi(-20));

        let positif = resoudre(&Equation::new(1.0, 0.0, -d / 4.0), epsilon);
        let negatif = resoudre(&Equation::new(1.0, 0.0, d / 4.0), epsilon);

        if d <= epsilon {
            assert_eq!(positif, Ok(Solution::Une(0.0)), "d={d:e} ε={epsilon:e}");
            assert_eq!(negatif, Ok(Solution::Une(0.0)), "d={d:e} ε={epsilon:e}");
        } else {
            match positif {
                Ok(Solution::Deux(x1, x2)) => {
                    assert_relative_eq!(x2, d.sqrt() / 2.0, max_relative = 1e-12);
                    assert_relative_eq!(x1, -x2, max_relative = 1e-12);
                }
                autre => panic!("d={d:e} ε={epsilon:e} attendu deux racines, obtenu {autre:?}"),
            }
            assert_eq!(negatif, Ok(Solution::Aucune), "d={d:e} ε={epsilon:e}");
        }
    }
}
