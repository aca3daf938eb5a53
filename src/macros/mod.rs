// std::borrow::Cow

/// Takes the owned value out of a cow, falling back to the given default
/// when the cow is borrowed.
///
/// Normalization returns `Cow::Borrowed` when the input needed no changes,
/// in that case the default copies the original input once.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
