//! Traversal for ordered and unordered element containers.
//!
//! Sets are reported in their own iteration order. Tuples are reported as
//! heterogeneous sequences.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::BuildHasher;

use super::{Params, Shape};

impl<T: Params> Params for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Params).collect())
    }
}

impl<T: Params, const N: usize> Params for [T; N] {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<T: Params> Params for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<T: Params> Params for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Params).collect())
    }
}

impl<T: Params, S: BuildHasher> Params for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Params).collect())
    }
}

impl<T: Params> Params for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Params).collect())
    }
}

macro_rules! impl_params_tuple {
    ($($name:ident . $index:tt),+) => {
        impl<$($name: Params),+> Params for ($($name,)+) {
            fn shape(&self) -> Shape<'_> {
                Shape::Sequence(vec![$(&self.$index as &dyn Params),+])
            }
        }
    };
}

impl_params_tuple!(A.0);
impl_params_tuple!(A.0, B.1);
impl_params_tuple!(A.0, B.1, C.2);
impl_params_tuple!(A.0, B.1, C.2, D.3);
impl_params_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_params_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
