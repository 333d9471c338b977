use std::borrow::Cow;

/// A value that can be added to or tested against a filter.
///
/// Integers hash through their decimal text, so `Element::Int(42)` and
/// `Element::Text("42")` land on the same bits.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Element<'a> {
    Int(i128),
    Text(&'a str),
}

impl<'a> Element<'a> {
    pub fn canonical_bytes(&self) -> Cow<'a, [u8]> {
        match *self {
            Element::Int(value) => Cow::Owned(value.to_string().into_bytes()),
            Element::Text(text) => Cow::Borrowed(text.as_bytes()),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Element<'_> {
                fn from(value: $t) -> Self {
                    Element::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'a> From<&'a str> for Element<'a> {
    fn from(text: &'a str) -> Self {
        Element::Text(text)
    }
}

impl<'a> From<&'a String> for Element<'a> {
    fn from(text: &'a String) -> Self {
        Element::Text(text.as_str())
    }
}
