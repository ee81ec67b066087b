//! Slice combinators in the map/filter/reduce style.
//!
//! These are convenience wrappers for callers who want the combinator
//! shape without spelling out an iterator chain; each returns a fresh
//! `Vec` or accumulator and leaves its input untouched.

/// Transforms every element of `items` with `f`, preserving order.
///
/// # Examples
///
/// ```
/// use dsa::funcs::map;
///
/// assert_eq!(map(&[1, 2, 3], |x| x * 2), [2, 4, 6]);
/// ```
pub fn map<A, B, F>(items: &[A], f: F) -> Vec<B>
where
    F: Fn(&A) -> B,
{
    items.iter().map(f).collect()
}

/// Keeps the elements of `items` that satisfy `pred`, preserving order.
///
/// # Examples
///
/// ```
/// use dsa::funcs::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4], |x| x % 2 == 0), [2, 4]);
/// ```
pub fn filter<T, F>(items: &[T], pred: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    items.iter().filter(|v| pred(*v)).cloned().collect()
}

/// Folds `items` into a single value, starting from `init`.
///
/// # Examples
///
/// ```
/// use dsa::funcs::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3, 4], 0, |acc, x| acc + x), 10);
/// ```
pub fn reduce<T, R, F>(items: &[T], init: R, f: F) -> R
where
    F: Fn(R, &T) -> R,
{
    let mut acc = init;
    for v in items {
        acc = f(acc, v);
    }
    acc
}
