// src/noyau/format.rs

use num_bigint::BigInt;
use num_traits::FromPrimitive;

/// Affichage du résultat.
///
/// - fini ET entier : écrit comme un entier exact (pas de ".0", pas d’exposant,
///   pas de saturation : 1e20 -> "100000000000000000000", -0.0 -> "0")
/// - sinon : conversion standard de f64 ("2.5", "0.30000000000000004", "inf", "NaN")
pub fn format_result(v: f64) -> String {
    if v.is_finite() && v == v.floor() {
        if let Some(n) = BigInt::from_f64(v) {
            return n.to_string();
        }
    }
    v.to_string()
}
