use super::indices::TickClass;

/// Per-tier template shapes handed to the rendering surface.
///
/// Any tier may be left empty. Resolution falls back along the fixed chain
/// Sub → Minute → Hour → Major → Top, so a sparse template set still covers
/// every tier; a tier whose whole chain is empty draws nothing, which is
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickTemplates<T> {
    /// Template for the 12 o'clock marker.
    pub top: Option<T>,
    /// Template for the 3, 6 and 9 o'clock markers.
    pub major: Option<T>,
    /// Template for the remaining hour markers.
    pub hour: Option<T>,
    /// Template for whole-minute marks.
    pub minute: Option<T>,
    /// Template for sub-minute marks.
    pub sub: Option<T>,
}

impl<T> Default for TickTemplates<T> {
    fn default() -> Self {
        Self {
            top: None,
            major: None,
            hour: None,
            minute: None,
            sub: None,
        }
    }
}

impl<T> TickTemplates<T> {
    /// Resolves the template a tier draws with, following the fallback
    /// chain toward [`TickClass::Top`].
    #[must_use]
    pub fn resolve(&self, class: TickClass) -> Option<&T> {
        match class {
            TickClass::Top => self.top.as_ref(),
            TickClass::Major => self.major.as_ref().or_else(|| self.resolve(TickClass::Top)),
            TickClass::Hour => self.hour.as_ref().or_else(|| self.resolve(TickClass::Major)),
            TickClass::Minute => self
                .minute
                .as_ref()
                .or_else(|| self.resolve(TickClass::Hour)),
            TickClass::Sub => self.sub.as_ref().or_else(|| self.resolve(TickClass::Minute)),
        }
    }
}
