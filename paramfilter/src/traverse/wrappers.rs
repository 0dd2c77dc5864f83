//! Transparent wrappers: the wrapped value's shape is reported directly.

use std::{rc::Rc, sync::Arc};

use super::{Params, Shape};

impl<T: Params + ?Sized> Params for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Params + ?Sized> Params for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Params + ?Sized> Params for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Params + ?Sized> Params for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Params> Params for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::null(),
        }
    }
}
