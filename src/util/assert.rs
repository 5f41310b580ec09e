pub fn assert_partial_ord<T: PartialOrd>(_: &T) {}
pub fn assert_partial_eq<T: PartialEq>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub(crate) use current_location;

#[allow(unused_macros)]
macro_rules! check {
    ($lhs:expr) => {{
        let value = $lhs;
        $crate::util::assert::assert_type::<bool>(&value);
        if !value {
            panic!(
                "check failed: {}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check;

#[allow(unused_macros)]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if lhs >= rhs {
            panic!(
                "check failed: {}: {} < {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_lt;

#[allow(unused_macros)]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_eq(&lhs);
        #[allow(clippy::float_cmp)]
        if lhs != rhs {
            panic!(
                "check failed: {}: {} == {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_eq;

/// Checks `$lhs.almost_eq($rhs)`, or `$lhs.almost_eq_eps($rhs, $eps)` with an explicit tolerance.
#[allow(unused_macros)]
macro_rules! check_almost_eq {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        if !lhs.almost_eq(rhs) {
            panic!(
                "check failed: {}: {} ~= {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
    ($lhs:expr, $rhs:expr, $eps:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        let eps = $eps;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        if !lhs.almost_eq_eps(rhs, eps) {
            panic!(
                "check failed: {}: {} ~= {} (eps {}): {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                eps,
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_almost_eq;

#[cfg(test)]
mod tests {
    use crate::linalg::Vec2;
    use std::cell::Cell;

    #[test]
    fn check_macros_pass() {
        check!(1 + 1 == 2);
        check_lt!(1.0_f32, 2.0_f32);
        check_eq!(Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.0));
        check_almost_eq!(Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.0 + 1e-7));
        check_almost_eq!(Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.01), 0.1);
    }

    #[test]
    fn check_macros_evaluate_once() {
        let calls = Cell::new(0);
        let next = || {
            calls.set(calls.get() + 1);
            calls.get()
        };
        check!(next() == 1);
        check_lt!(next(), 3);
        check_eq!(next(), 3);
        check_almost_eq!(Vec2::new(next() as f32, 0.0), Vec2::new(4.0, 0.0));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn check_almost_eq_fails() {
        check_almost_eq!(Vec2::new(1.0, 2.0), Vec2::new(1.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn check_lt_fails() {
        check_lt!(2, 1);
    }
}
