/// Lower bound of an insertion range.
///
/// `ListHead` means no smaller key exists. It is a marker, not a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Start<T> {
    ListHead,
    Key(T),
}

/// Upper bound of an insertion range.
///
/// `ListTail` means no larger key exists. It is a marker, not a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End<T> {
    Key(T),
    ListTail,
}

impl<T> Start<T> {
    /// The bounding key, or `None` for `ListHead`.
    #[inline]
    pub fn key(&self) -> Option<&T> {
        match self {
            Self::ListHead => None,
            Self::Key(k) => Some(k),
        }
    }

    /// Build a bound from an optional predecessor; `None` is the list head.
    #[inline]
    pub fn from_neighbour(key: Option<T>) -> Self {
        key.map_or(Self::ListHead, Self::Key)
    }
}

impl<T> End<T> {
    /// The bounding key, or `None` for `ListTail`.
    #[inline]
    pub fn key(&self) -> Option<&T> {
        match self {
            Self::Key(k) => Some(k),
            Self::ListTail => None,
        }
    }

    /// Build a bound from an optional successor; `None` is the list tail.
    #[inline]
    pub fn from_neighbour(key: Option<T>) -> Self {
        key.map_or(Self::ListTail, Self::Key)
    }
}

impl<T> From<T> for Start<T> {
    #[inline]
    fn from(key: T) -> Self {
        Self::Key(key)
    }
}

impl<T> From<T> for End<T> {
    #[inline]
    fn from(key: T) -> Self {
        Self::Key(key)
    }
}
