use std::collections::HashMap;
use std::f64::consts;

/// A builtin function, tagged by arity.
#[derive(Debug, Clone, Copy)]
pub enum Builtin {
    Nullary(fn() -> f64),
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    Ternary(fn(f64, f64, f64) -> f64),
}

impl Builtin {
    pub fn arity(&self) -> usize {
        match self {
            Builtin::Nullary(_) => 0,
            Builtin::Unary(_) => 1,
            Builtin::Binary(_) => 2,
            Builtin::Ternary(_) => 3,
        }
    }

    /// Applies the function, or returns `None` when `args` does not have
    /// exactly [`Builtin::arity`] elements.
    pub fn call(&self, args: &[f64]) -> Option<f64> {
        match (self, args) {
            (Builtin::Nullary(f), []) => Some(f()),
            (Builtin::Unary(f), &[x]) => Some(f(x)),
            (Builtin::Binary(f), &[x, y]) => Some(f(x, y)),
            (Builtin::Ternary(f), &[x, y, z]) => Some(f(x, y, z)),
            _ => None,
        }
    }
}

lazy_static! {
    pub static ref CONSTANTS: HashMap<&'static str, f64> = HashMap::from([
        ("e", consts::E),
        ("pi", consts::PI),
        ("phi", 1.618_033_988_749_895),
        ("sqrt2", consts::SQRT_2),
        ("sqrte", 1.648_721_270_700_128_2),
        ("sqrtpi", 1.772_453_850_905_516),
        ("sqrtphi", 1.272_019_649_514_069),
        ("ln2", consts::LN_2),
        ("log2e", consts::LOG2_E),
        ("ln10", consts::LN_10),
        ("log10e", consts::LOG10_E),
    ]);
}

lazy_static! {
    pub static ref FUNCTIONS: HashMap<&'static str, Builtin> = {
        use Builtin::*;

        let mut map = HashMap::new();

        map.insert("nan", Nullary(|| f64::NAN));
        map.insert("inf", Nullary(|| f64::INFINITY));

        map.insert("abs", Unary(f64::abs));
        map.insert("acos", Unary(f64::acos));
        map.insert("acosh", Unary(f64::acosh));
        map.insert("asin", Unary(f64::asin));
        map.insert("asinh", Unary(f64::asinh));
        map.insert("atan", Unary(f64::atan));
        map.insert("atanh", Unary(f64::atanh));
        map.insert("cbrt", Unary(f64::cbrt));
        map.insert("ceil", Unary(f64::ceil));
        map.insert("cos", Unary(f64::cos));
        map.insert("cosh", Unary(f64::cosh));
        map.insert("exp", Unary(f64::exp));
        map.insert("exp2", Unary(f64::exp2));
        map.insert("expm1", Unary(f64::exp_m1));
        map.insert("floor", Unary(f64::floor));
        map.insert("ln", Unary(f64::ln));
        map.insert("log", Unary(f64::ln));
        map.insert("log10", Unary(f64::log10));
        map.insert("log1p", Unary(f64::ln_1p));
        map.insert("log2", Unary(f64::log2));
        map.insert("round", Unary(f64::round));
        map.insert("roundtoeven", Unary(f64::round_ties_even));
        map.insert("signum", Unary(f64::signum));
        map.insert("sin", Unary(f64::sin));
        map.insert("sinh", Unary(f64::sinh));
        map.insert("sqrt", Unary(f64::sqrt));
        map.insert("tan", Unary(f64::tan));
        map.insert("tanh", Unary(f64::tanh));
        map.insert("trunc", Unary(f64::trunc));

        map.insert("atan2", Binary(f64::atan2));
        map.insert("copysign", Binary(f64::copysign));
        map.insert("dim", Binary(positive_difference));
        map.insert("hypot", Binary(f64::hypot));
        map.insert("max", Binary(f64::max));
        map.insert("min", Binary(f64::min));
        map.insert("mod", Binary(|x, y| x % y));
        map.insert("pow", Binary(f64::powf));

        map.insert("fma", Ternary(f64::mul_add));

        map
    };
}

// max(x - y, 0), with NaN propagated from either side
fn positive_difference(x: f64, y: f64) -> f64 {
    let diff = x - y;
    if diff.is_nan() || diff > 0.0 {
        diff
    } else {
        0.0
    }
}

/// Looks up a constant, ignoring case.
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name.to_lowercase().as_str()).copied()
}

/// Looks up a function, ignoring case.
pub fn function(name: &str) -> Option<Builtin> {
    FUNCTIONS.get(name.to_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_ignore_case() {
        assert_eq!(constant("pi"), Some(consts::PI));
        assert_eq!(constant("Pi"), Some(consts::PI));
        assert_eq!(constant("PI"), Some(consts::PI));
        assert_eq!(constant("LOG10E"), Some(consts::LOG10_E));
        assert_eq!(constant("tau"), None);
    }

    // Literals typed out to far more digits than an f64 holds, so each one
    // parses to the correctly rounded value.
    #[test]
    #[allow(clippy::excessive_precision)]
    fn derived_constants_are_correctly_rounded() {
        let exact: [(&str, f64); 4] = [
            ("phi", 1.61803398874989484820458683436563811),
            ("sqrte", 1.64872127070012814684865078831848487),
            ("sqrtpi", 1.77245385090551602729816748334114518),
            ("sqrtphi", 1.27201964951406896425242246173749149),
        ];

        for (name, expected) in exact {
            let val: f64 = constant(name).unwrap();
            assert_eq!(val.to_bits(), expected.to_bits(), "{name} is {val}, expected {expected}");
        }
    }

    #[test]
    fn function_arities() {
        assert_eq!(function("nan").map(|f| f.arity()), Some(0));
        assert_eq!(function("SQRT").map(|f| f.arity()), Some(1));
        assert_eq!(function("atan2").map(|f| f.arity()), Some(2));
        assert_eq!(function("Fma").map(|f| f.arity()), Some(3));
        assert!(function("bogus").is_none());
    }

    #[test]
    fn calling_checks_arity() {
        let pow = function("pow").unwrap();

        assert_eq!(pow.call(&[2.0, 10.0]), Some(1024.0));
        assert_eq!(pow.call(&[2.0]), None);
        assert_eq!(pow.call(&[2.0, 3.0, 4.0]), None);

        assert!(function("nan").unwrap().call(&[]).unwrap().is_nan());
        assert_eq!(function("inf").unwrap().call(&[1.0]), None);
    }

    #[test]
    fn two_argument_helpers() {
        let dim = function("dim").unwrap();
        assert_eq!(dim.call(&[5.0, 3.0]), Some(2.0));
        assert_eq!(dim.call(&[3.0, 5.0]), Some(0.0));
        assert!(dim.call(&[f64::NAN, 1.0]).unwrap().is_nan());

        let modulo = function("mod").unwrap();
        assert_eq!(modulo.call(&[7.0, 3.0]), Some(1.0));
        assert_eq!(modulo.call(&[-7.0, 3.0]), Some(-1.0));
    }

    #[test]
    fn fused_multiply_add() {
        let fma = function("fma").unwrap();
        assert_eq!(fma.call(&[1.2, 2.3, 4.5]), Some(1.2f64.mul_add(2.3, 4.5)));
    }
}
