//! Point-free composition helpers used to build combinators.
//!
//! [`compose!`](crate::compose) chains any number of single-argument
//! functions right-to-left, and [`lift2`]/[`lift3`] apply several functions
//! to the same argument and merge the results. Rust closures are
//! monomorphic, so the variadic lift is encoded as fixed-arity generic
//! functions rather than a macro.

/// The identity function; what [`compose!`](crate::compose) expands to with
/// no arguments.
pub fn identity<T>(x: T) -> T {
    x
}

/// Composes functions right-to-left: the last listed function is applied
/// first, the first listed is applied last.
///
/// `compose!()` expands to the identity function, and
/// `compose!(f, g)(x)` equals `f(g(x))`.
///
/// ```
/// use imagery_core::compose;
///
/// let add_then_double = compose!(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(add_then_double(3), 8);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::functional::identity
    };
    ($f:expr $(, $rest:expr)* $(,)?) => {{
        let f = $f;
        let g = $crate::compose!($($rest),*);
        move |x| f(g(x))
    }};
}

/// Applies `f` and `g` to the same argument and combines the results with `h`:
/// `lift2(h, f, g)(x) == h(f(x), g(x))`.
pub fn lift2<X, A, B, O>(
    h: impl Fn(A, B) -> O,
    f: impl Fn(X) -> A,
    g: impl Fn(X) -> B,
) -> impl Fn(X) -> O
where
    X: Copy,
{
    move |x| h(f(x), g(x))
}

/// Three-function form of [`lift2`]:
/// `lift3(h, f, g, k)(x) == h(f(x), g(x), k(x))`.
pub fn lift3<X, A, B, C, O>(
    h: impl Fn(A, B, C) -> O,
    f: impl Fn(X) -> A,
    g: impl Fn(X) -> B,
    k: impl Fn(X) -> C,
) -> impl Fn(X) -> O
where
    X: Copy,
{
    move |x| h(f(x), g(x), k(x))
}
