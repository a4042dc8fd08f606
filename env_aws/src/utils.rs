/// SDK accessors return a plain reference for members the service model marks
/// as required and an `Option` for everything else. `present` lets callers
/// treat both the same way.
pub trait Present<'a, T: ?Sized> {
    fn present(self) -> Option<&'a T>;
}

impl<'a, T: ?Sized> Present<'a, T> for &'a T {
    fn present(self) -> Option<&'a T> {
        Some(self)
    }
}

impl<'a, T: ?Sized> Present<'a, T> for Option<&'a T> {
    fn present(self) -> Option<&'a T> {
        self
    }
}

/// Converts an SDK string member into an owned value, dropping empty strings.
pub fn owned_non_empty<'a, S: Present<'a, str>>(value: S) -> Option<String> {
    value
        .present()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
