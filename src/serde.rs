// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Vec`](crate::Vec) and [`Array`](crate::Array).
//!
//! - **Serialize**: both as a sequence of their elements.
//! - **Deserialize**: `Vec<T>` from any sequence; `Array<T, N>` from a
//!   sequence of exactly `N` elements, anything shorter or longer is an
//!   error.

// Crate imports
use crate::{array::Array, vec::Vec};

// Alloc imports
use alloc::vec::Vec as AllocVec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

fn serialize_slice<T: Serialize, S: Serializer>(sl: &[T], s: S) -> Result<S::Ok, S::Error> {
    use ser::SerializeSeq;
    let mut seq = s.serialize_seq(Some(sl.len()))?;
    for item in sl {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<T: Serialize> Serialize for Vec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self.as_slice(), s)
    }
}

impl<T: Serialize, const N: usize> Serialize for Array<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self.as_slice(), s)
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for VecVisitor<T> {
    type Value = Vec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        // Cap the pre-allocation so a lying length prefix cannot exhaust memory.
        let mut out = Vec::with_capacity(a.size_hint().unwrap_or(0).min(4096));
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vec<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor(PhantomData))
    }
}

struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> de::Visitor<'de> for ArrayVisitor<T, N> {
    type Value = Array<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of exactly {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut items = AllocVec::with_capacity(N);
        while items.len() < N {
            match a.next_element::<T>()? {
                Some(elem) => items.push(elem),
                None => return Err(de::Error::invalid_length(items.len(), &self)),
            }
        }
        if a.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(format_args!(
                "too many elements (expected {N})"
            )));
        }
        let buf = <[T; N]>::try_from(items)
            .map_err(|items| de::Error::invalid_length(items.len(), &self))?;
        Ok(Array::new(buf))
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Array<T, N> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor::<T, N>(PhantomData))
    }
}
