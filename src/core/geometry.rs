//! Kubisches Polynom als opaker Längswert-Typ (Breiten, Offsets, Höhenprofil).

use serde::{Deserialize, Serialize};

/// Kubisches Polynom `a + b*ds + c*ds² + d*ds³` ab dem Start-Offset `s`.
///
/// Der Builder interpretiert die Koeffizienten nicht, er speichert und
/// evaluiert nur. `s` dient zusätzlich als Sortierschlüssel für Sektionen
/// und Attribute entlang der Referenzlinie.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CubicPolynomial {
    s: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl CubicPolynomial {
    /// Erstellt ein Polynom mit Start-Offset und Koeffizienten.
    pub fn new(s: f64, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { s, a, b, c, d }
    }

    /// Start-Offset `s` entlang der Referenzlinie
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Wertet das Polynom an der absoluten Längsposition `at` aus.
    pub fn evaluate(&self, at: f64) -> f64 {
        let ds = at - self.s;
        self.a + self.b * ds + self.c * ds * ds + self.d * ds * ds * ds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_at_start_offset() {
        let poly = CubicPolynomial::new(10.0, 3.5, 1.0, 0.0, 0.0);
        assert_eq!(poly.evaluate(10.0), 3.5);
    }

    #[test]
    fn test_evaluate_cubic_terms() {
        // a=1, b=2, c=3, d=4 bei ds=2: 1 + 4 + 12 + 32 = 49
        let poly = CubicPolynomial::new(0.0, 1.0, 2.0, 3.0, 4.0);
        assert_eq!(poly.evaluate(2.0), 49.0);
    }
}
