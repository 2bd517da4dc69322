///
/// Sanitizer
///
/// Allows a node to normalize values in place.
/// Sanitization is total: a sanitizer may rewrite the value but never fails.
/// Validation happens separately, inside the owning type's constructor.
///

pub trait Sanitizer<T> {
    fn sanitize(&self, value: &mut T);
}

///
/// Inner
///
/// Access to the wrapped representation of a newtype.
///

pub trait Inner<T> {
    fn inner(&self) -> &T;
    fn into_inner(self) -> T;
}
