/// Last-seen value of a watched expression.
///
/// A digest pass feeds the current value to [`Watch::changed`]; the first
/// observation always counts as a change.
#[derive(Debug, Clone)]
pub struct Watch<T> {
    last: Option<T>,
}

impl<T> Default for Watch<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq + Clone> Watch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `current` and report whether it differs from the previous value.
    pub fn changed(&mut self, current: &T) -> bool {
        if self.last.as_ref() == Some(current) {
            return false;
        }
        self.last = Some(current.clone());
        true
    }
}
