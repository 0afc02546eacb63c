use proc_macro2::Literal;

/// An unsuffixed integer literal, usable as a match arm pattern.
pub(crate) fn int(v: usize) -> Literal {
    Literal::usize_unsuffixed(v)
}
