//! Scalar `Params` implementations: opaque leaves rendered as JSON values.

use std::{
    borrow::Cow,
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    },
    path::{Path, PathBuf},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde_json::Value as JsonValue;

use super::{Params, Shape, impl_params_scalar};

fn signed_wide(value: i128) -> JsonValue {
    i64::try_from(value).map_or_else(|_| JsonValue::String(value.to_string()), JsonValue::from)
}

fn unsigned_wide(value: u128) -> JsonValue {
    u64::try_from(value).map_or_else(|_| JsonValue::String(value.to_string()), JsonValue::from)
}

// =============================================================================
// Text and primitives
// =============================================================================

impl_params_scalar! {
    str => |v| JsonValue::String(v.to_owned()),
    String => |v| JsonValue::String(v.clone()),
    char => |v| JsonValue::String(v.to_string()),
    bool => |v| JsonValue::Bool(*v),
    () => |_v| JsonValue::Null,
}

// Signed integers
impl_params_scalar! {
    i8 => |v| JsonValue::from(*v),
    i16 => |v| JsonValue::from(*v),
    i32 => |v| JsonValue::from(*v),
    i64 => |v| JsonValue::from(*v),
    i128 => |v| signed_wide(*v),
    isize => |v| JsonValue::from(*v),
}

// Unsigned integers
impl_params_scalar! {
    u8 => |v| JsonValue::from(*v),
    u16 => |v| JsonValue::from(*v),
    u32 => |v| JsonValue::from(*v),
    u64 => |v| JsonValue::from(*v),
    u128 => |v| unsigned_wide(*v),
    usize => |v| JsonValue::from(*v),
}

// Floating point; non-finite values become `null`
impl_params_scalar! {
    f32 => |v| JsonValue::from(*v),
    f64 => |v| JsonValue::from(*v),
}

// =============================================================================
// NonZero integers
// =============================================================================

impl_params_scalar! {
    NonZeroI8 => |v| JsonValue::from(v.get()),
    NonZeroI16 => |v| JsonValue::from(v.get()),
    NonZeroI32 => |v| JsonValue::from(v.get()),
    NonZeroI64 => |v| JsonValue::from(v.get()),
    NonZeroI128 => |v| signed_wide(v.get()),
    NonZeroIsize => |v| JsonValue::from(v.get()),
    NonZeroU8 => |v| JsonValue::from(v.get()),
    NonZeroU16 => |v| JsonValue::from(v.get()),
    NonZeroU32 => |v| JsonValue::from(v.get()),
    NonZeroU64 => |v| JsonValue::from(v.get()),
    NonZeroU128 => |v| unsigned_wide(v.get()),
    NonZeroUsize => |v| JsonValue::from(v.get()),
}

// =============================================================================
// Other std leaves
// =============================================================================

impl_params_scalar! {
    Duration => |v| JsonValue::from(v.as_secs_f64()),
    SystemTime => |v| v
        .duration_since(UNIX_EPOCH)
        .map_or(JsonValue::Null, |since| JsonValue::from(since.as_secs_f64())),
    Path => |v| JsonValue::String(v.to_string_lossy().into_owned()),
    PathBuf => |v| JsonValue::String(v.to_string_lossy().into_owned()),
    IpAddr => |v| JsonValue::String(v.to_string()),
    Ipv4Addr => |v| JsonValue::String(v.to_string()),
    Ipv6Addr => |v| JsonValue::String(v.to_string()),
    SocketAddr => |v| JsonValue::String(v.to_string()),
}

impl Params for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(JsonValue::String(self.as_ref().to_owned()))
    }
}

impl<T: ?Sized> Params for PhantomData<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::null()
    }
}

// =============================================================================
// Date/time leaves (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_passthrough {
    use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
    use serde_json::Value as JsonValue;

    use crate::traverse::impl_params_scalar;

    impl_params_scalar! {
        DateTime<Utc> => |v| JsonValue::String(v.to_rfc3339()),
        DateTime<Local> => |v| JsonValue::String(v.to_rfc3339()),
        DateTime<FixedOffset> => |v| JsonValue::String(v.to_rfc3339()),
        NaiveDateTime => |v| JsonValue::String(v.to_string()),
        NaiveDate => |v| JsonValue::String(v.to_string()),
        NaiveTime => |v| JsonValue::String(v.to_string()),
    }
}

#[cfg(feature = "time")]
mod time_passthrough {
    use serde_json::Value as JsonValue;
    use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

    use crate::traverse::impl_params_scalar;

    impl_params_scalar! {
        OffsetDateTime => |v| JsonValue::String(v.to_string()),
        PrimitiveDateTime => |v| JsonValue::String(v.to_string()),
        Date => |v| JsonValue::String(v.to_string()),
        Time => |v| JsonValue::String(v.to_string()),
    }
}

#[cfg(feature = "uuid")]
mod uuid_passthrough {
    use serde_json::Value as JsonValue;
    use uuid::Uuid;

    use crate::traverse::impl_params_scalar;

    impl_params_scalar! {
        Uuid => |v| JsonValue::String(v.to_string()),
    }
}
