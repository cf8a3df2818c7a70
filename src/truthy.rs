//! Truthiness contract for aggregate predicates.
//!
//! [`any`](crate::seq::any) and [`all`](crate::seq::all) need a way to read
//! an arbitrary element as a boolean. Rust has no implicit numeric-to-bool
//! coercion, so the convertibility is spelled out as a trait: a type opts in
//! by saying which of its values count as true.

/// Types that can be read as a boolean for aggregate predicate purposes.
pub trait Truthy {
    /// Whether this value counts as true.
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// NaN compares unequal to zero, so it is truthy.
impl Truthy for f32 {
    fn truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for char {
    fn truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}
